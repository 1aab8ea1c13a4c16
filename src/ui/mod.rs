pub mod messages;
pub mod templates;
