#![forbid(unsafe_code)]

//! Core types for the otpui widget set.
//!
//! This crate defines the canonical input events (key, mouse, paste, focus)
//! and the geometry primitives that widgets render into. The crossterm
//! backend mapping lives here behind a `wasm32` guard so the rest of the
//! workspace stays backend-agnostic.

pub mod event;
pub mod geometry;
pub mod logging;
