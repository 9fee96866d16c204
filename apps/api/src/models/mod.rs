pub mod resume;
pub mod templates;
