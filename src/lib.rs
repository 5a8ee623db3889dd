//! player-service - a small in-memory player lookup service
//!
//! Layers, top to bottom:
//! - HTTP API (axum) with two read-only routes
//! - `PlayerService` facade
//! - `PlayerRepository` storage, seeded with random players at startup

pub mod api;
pub mod config;
pub mod error;
pub mod service;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
