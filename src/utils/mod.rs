//! Utility modules for encoding detection and file discovery.

pub mod encoding;
pub mod file_helper;
