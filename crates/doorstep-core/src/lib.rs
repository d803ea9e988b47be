//! Shared service plumbing for Doorstep services.
//!
//! Health endpoints, tracing initialization, and request-id middleware.

pub mod health;
pub mod middleware;
pub mod tracing;
