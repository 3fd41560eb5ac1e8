pub mod config;
pub mod credentials;
pub mod erc20;
pub mod error;
pub mod format;
pub mod rpc;
pub mod scanner;
pub mod submit;
pub mod sweep;
pub mod token;
