pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{marks_file::MarksFile, CliConfig};
pub use crate::core::registry::MarksRegistry;
pub use domain::model::ExamMark;
pub use utils::error::{MarksError, Result};
