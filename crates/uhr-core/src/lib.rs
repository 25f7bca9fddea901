//! Uhr Core Library
//!
//! This crate provides shared geometry, errors, configuration and logging
//! setup for the Uhr clock shell.

pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;

pub use config::ShellConfig;
pub use error::{UhrError, UhrResult};
pub use geometry::{clamp_square, DominantAxis, FrameSize, ScreenBounds, MIN_SIDE};
pub use logging::{init_logging, LogConfig, LogFormat};
