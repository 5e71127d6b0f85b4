pub mod reset;

pub use crate::domain::model::{CollectionReport, ResetReport};
pub use crate::domain::ports::DocumentStore;
pub use crate::utils::error::Result;
