// deq Core - Domain Logic & Ports
// NO filesystem or CLI dependencies (adapters live in infra-fs / cli)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
