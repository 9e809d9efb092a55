//! Phone Locator Demo Library
//!
//! Simulated phone-number geolocation: validates an E.164-like number, waits
//! out a fixed latency, and resolves it against a small built-in set of
//! sample records (or synthesizes a placeholder record).
//!
//! # Modules
//!
//! - `api`: Router assembly.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Location records and the reference set.
//! - `render`: HTML rendering of the demo page.
//! - `resolver`: Reference-set matching and fallback synthesis.
//! - `tracker`: Lookup session state machine.
//! - `validator`: Phone number format validation.

pub mod api;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod render;
pub mod resolver;
pub mod tracker;
pub mod validator;
