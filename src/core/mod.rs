pub mod logic;
pub mod timeline;
