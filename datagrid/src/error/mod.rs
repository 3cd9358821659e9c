//! Error types

mod config;
mod filter;
mod shape;

pub use config::*;
pub use filter::*;
pub use shape::*;
