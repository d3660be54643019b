pub mod dot;
pub mod json_compact;

pub use dot::DotFormatter;
pub use json_compact::JsonCompactFormatter;
