//! HamalNews Core
//!
//! Domain types, traits, and the report lifecycle shared by the storage layer
//! and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Report`, `ReportStatus`, `User`, `Role`
//! - **Core Traits**: `StorageContext`, `PasswordHasher`
//! - **Lifecycle**: `ReportLifecycle`, the only place report status and user
//!   roles are decided
//! - **Error Handling**: Unified `HamalError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use hamal_core::types::{Decision, NewReport, ReportStatus};
//!
//! let report = NewReport::new("  Broken street light ", "Corner of Main St").unwrap();
//! assert_eq!(report.title, "Broken street light");
//!
//! assert_eq!(Decision::Approve.target_status(), ReportStatus::Approved);
//! assert!(NewReport::new("   ", "content").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod lifecycle;
pub mod storage;
pub mod traits;
pub mod types;

pub use error::{HamalError, Result};
pub use lifecycle::ReportLifecycle;
pub use storage::StorageContext;
pub use traits::PasswordHasher;

pub use types::{
    Decision, NewReport, NewUser, Report, ReportId, ReportStatus, Role, User, UserCredentials,
    UserId,
};
