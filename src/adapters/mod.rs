//! Adapters implementing the domain ports.

pub mod cache;
pub mod filesystem;
pub mod http;
