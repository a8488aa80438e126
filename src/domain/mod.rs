pub mod guests;
pub mod sheets;
