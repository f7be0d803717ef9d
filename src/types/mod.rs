//! Data types for the traversal engine.

pub mod config;
pub mod network;
pub mod record;
pub mod report;
