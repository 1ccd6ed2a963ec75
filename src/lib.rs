//! agent-alarm - desktop alerts for AI coding agents
//!
//! This crate decides whether, when and how to surface a desktop
//! notification for an agent event: trigger and cooldown gating,
//! per-directory debouncing, platform detection and per-platform
//! delivery with fallbacks.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Value objects, text shaping, identity and configuration
//! - **Application**: The dispatcher use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (notify-rust, notify-send, WSL bridge, rodio, etc.)
//! - **CLI**: Command-line interface, argument parsing, and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
