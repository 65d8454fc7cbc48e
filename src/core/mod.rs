pub mod registry;

pub use crate::domain::model::ExamMark;
pub use crate::utils::error::Result;
pub use registry::MarksRegistry;
