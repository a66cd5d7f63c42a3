pub mod extractor;
pub mod parameter_error_handler;
pub mod validate;

pub use extractor::{SafeCourseIdI64, SafeStudentIdI64};
pub use parameter_error_handler::{json_config, json_error_handler};
pub use parameter_error_handler::query_error_handler;
