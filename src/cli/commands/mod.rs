pub mod config;
pub mod explore;
pub mod export;
pub mod init;
pub mod stats;
