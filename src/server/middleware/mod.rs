//! Response middleware.

pub mod error_path;
