//! REST resource API for the suspension-damping test rig.
//!
//! This crate provides an Axum HTTP server that exposes each rig entity
//! (vehicles, sensors, measurements, damping tests, formula results) as a
//! resource with a list (`GET`) and a create (`POST`) endpoint.
//!
//! # Architecture
//!
//! Handlers receive the store handle through [`AppState`] and talk to the
//! per-table stores in `damping-db`. Request bodies are typed structs
//! from `damping-types`, extracted with [`Payload`] so a missing required
//! field is a `400` before any write is attempted. Store failures are
//! mapped once, in [`ApiError`], to `500`.
//!
//! [`Payload`]: extract::Payload
//! [`ApiError`]: error::ApiError

pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError, DEFAULT_PORT};
pub use state::AppState;
