//! CLI command implementations.

pub mod config;
pub mod document;
pub mod init;
pub mod serve;
