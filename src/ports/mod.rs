pub mod diagnostics;
pub mod sink;
pub mod source;
