pub mod macros;
pub mod report;
pub mod types;
pub mod validators;
