//! Backup module - opaque export/import payload handling.

mod backup_model;

pub use backup_model::*;
