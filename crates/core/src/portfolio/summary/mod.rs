//! Summary module - the server-computed current view.

mod summary_model;

pub use summary_model::*;
