//! wordkeep application shell: JSON persistence gateway, profile store, and
//! the command-line presentation layer over `vocab-core`.

pub mod commands;
pub mod storage;
pub mod store;
