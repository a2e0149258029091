//! Infrastructure layer for filesystem interactions.
//!
//! Zellij plugins run in a WASI sandbox where the host filesystem is mounted
//! under `/host`. Everything that turns user-facing paths into sandbox paths
//! lives here.

pub mod paths;

pub use paths::{data_dir, display_path, expand_tilde, trace_file};
