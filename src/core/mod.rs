//! # Core Application Logic
//!
//! This module contains the portfolio's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   Audio    │
//!          │  Adapter   │───Effects────▶ │  (rodio)   │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`console`]: Terminal-or-game ownership of the right panel
//! - [`terminal`]: Line editor + dispatcher state machine
//! - [`typewriter`]: Paced output renderer
//! - [`snake`]: The game simulation
//! - [`cover`], [`id_card`]: Intro screen and badge tilt

pub mod action;
pub mod commands;
pub mod config;
pub mod console;
pub mod cover;
pub mod id_card;
pub mod line_editor;
pub mod profile;
pub mod screen;
pub mod snake;
pub mod state;
pub mod terminal;
pub mod typewriter;
