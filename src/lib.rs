//! gitgather: concatenate repository files into one LLM-friendly document
//!
//! This library selects files from a repository (git-tracked or a plain
//! filesystem walk), filters them by dotfile visibility and glob patterns,
//! and renders them in a stable order with a path header per file.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod gather;
pub mod render;
pub mod scan;
pub mod utils;

pub use config::Config;
pub use error::{FileReadWarning, GatherError};
pub use gather::{gather, GatherOutcome};
