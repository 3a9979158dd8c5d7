//! Cart

pub mod models;

pub use models::*;
