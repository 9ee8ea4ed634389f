//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides best-effort path resolution for user-typed paths and the
//! platform directory lookups used for configuration and trace files.

pub mod paths;

pub use paths::{
    config_dir, data_dir, expand_tilde, file_name, normalize, parent_dir, resolve_path,
    resolve_path_from,
};
