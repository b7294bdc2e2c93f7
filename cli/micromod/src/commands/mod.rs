//! CLI command implementations.

pub mod boards;
pub mod configure;
pub mod demos;
pub mod info;
pub mod init;
