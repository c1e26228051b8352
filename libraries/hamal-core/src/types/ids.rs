/// ID types for HamalNews entities
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Report identifier, assigned by the store in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx-support", sqlx(transparent))]
#[serde(transparent)]
pub struct ReportId(i64);

impl ReportId {
    /// Wrap a raw row id
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw row id
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// User identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx-support", sqlx(transparent))]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw row id
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw row id
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_id_parses_from_path_segment() {
        let id: ReportId = "42".parse().unwrap();
        assert_eq!(id, ReportId::new(42));
        assert!("abc".parse::<ReportId>().is_err());
    }

    #[test]
    fn report_id_display() {
        assert_eq!(format!("{}", ReportId::new(7)), "7");
    }

    #[test]
    fn report_ids_order_by_insertion() {
        assert!(ReportId::new(1) < ReportId::new(2));
    }
}
