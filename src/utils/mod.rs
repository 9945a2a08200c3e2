//! Utility functions

pub mod encoding;
pub mod paths;

pub use encoding::{decode_text, is_binary, read_text_file};
pub use paths::{normalize_path, resolve_output_path};
