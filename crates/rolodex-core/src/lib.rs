//! Shared plumbing for Rolodex services: env config helpers, tracing setup,
//! HTTP middleware and the shutdown signal.

pub mod config;
pub mod middleware;
pub mod shutdown;
pub mod tracing;
