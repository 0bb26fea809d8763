// Library target exists for integration tests; the service ships as a binary.
pub mod classifier;
pub mod cli;
pub mod config;
pub mod ingress;
pub mod logging;
pub mod server;
pub mod session;
