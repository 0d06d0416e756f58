pub mod text;

pub use text::{TextOptions, render_day, render_summary};
