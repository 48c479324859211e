// Crate root library declaration and module exports.
pub mod config;
pub mod context;
pub mod controller;
pub mod model;
pub mod storage;
pub mod store;

#[cfg(feature = "tui")]
pub mod tui;
