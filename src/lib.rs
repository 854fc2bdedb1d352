//! # KPI Engine
//!
//! Maintenance KPI calculation engine.
//!
//! This crate implements the calculation core behind a maintenance-KPI
//! widget: a fixed registry of KPI definitions (MTBF, MTTR, OEE, ...) and an
//! evaluation pipeline that turns raw user-entered strings into a formatted
//! result with an interpretive message. The core is pure and synchronous;
//! an axum REST API and a small CLI sit on top of it.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Core data types (KPI definitions, input specs, results)
//! - [`registry`]: The static, ordered registry of KPI definitions
//! - [`services`]: Evaluation pipeline and per-selection session state
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Evaluation pipeline
//!
//! `services::evaluator::evaluate` runs the ordered, short-circuiting steps:
//! presence check, decimal parse, formula evaluation, finiteness check,
//! display formatting, interpretation. Exactly two user-facing failures
//! exist: missing input and invalid calculation.

pub mod models;

pub mod registry;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
