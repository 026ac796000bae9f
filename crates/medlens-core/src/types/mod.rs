//! Core types for medlens.

mod message;
mod report;

pub use message::*;
pub use report::*;
