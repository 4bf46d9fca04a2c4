pub mod report;
pub mod request;

pub use crate::domain::DomainError;
pub use report::{ScaffoldReport, ScaffoldWarning};
pub use request::{ProjectName, ScaffoldRequest};
