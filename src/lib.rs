//! # Connect Four
//!
//! A two-player Connect Four game for the terminal, built with Ratatui.
//! The rules engine (grid occupancy, landing-row resolution, win and draw
//! detection, turn order) is UI-agnostic; the terminal front end drives it
//! and receives render events through a narrow observer interface.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, session state machine
//! - [`ui`] — Terminal UI: interactive game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
