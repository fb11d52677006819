//! Server library module.
//!
//! This module exposes the router so the binary and integration tests
//! build the exact same application.

pub mod router;
