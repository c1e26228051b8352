mod ids;
mod report;
mod user;

pub use ids::{ReportId, UserId};
pub use report::{Decision, NewReport, Report, ReportStatus};
pub use user::{NewUser, Role, User, UserCredentials};
