//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, scene animation, rendering, and input.

mod config_sync;
mod core;
mod event_handler;
mod init;
mod render;
mod title;

pub use core::BubbleApp;
