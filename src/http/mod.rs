//! HTTP server module for the KPI engine.
//!
//! This module provides an axum-based HTTP server that exposes the KPI
//! registry and the evaluation pipeline as a REST API. It reuses the
//! service layer and the core types from the library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and validation                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::evaluator)                      │
//! │  - Evaluation pipeline                                    │
//! └───────────────────┬──────────────────────────────────────┘
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Registry (static KPI definitions)                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The API is stateless: evaluation sessions are a client-side concern, so
//! every request carries the full input map.

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
