//! Pointer-driven arcade shooter: pure simulation plus its supporting types.
//!
//! The terminal host in `main.rs` owns input and rendering; everything here
//! can be stepped without a screen.

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod geometry;
