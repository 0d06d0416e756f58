pub mod formatting;
pub mod table;
pub mod time;

pub use formatting::{display_annotation, format_hours};
