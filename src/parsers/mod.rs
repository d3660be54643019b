pub mod common;
pub mod cpp;

pub use cpp::{IncludeDirective, IncludeScanner, ScanState};
