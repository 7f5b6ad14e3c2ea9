//! # Core Application Logic
//!
//! The navigation-and-request engine. It knows nothing about terminals or
//! HTTP clients.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (screen + stack) │
//!                    │  • Command / Action     │
//!                    │  • update() (reducer)   │
//!                    │  • dispatch() (keys)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │    API     │
//!         │  Adapter   │                  │  (reqwest) │
//!         │ (ratatui)  │                  │            │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, screens and the navigation stack
//! - [`action`]: Commands, actions, effects and `update()`
//! - [`dispatch`]: Key → command table
//! - [`model`]: Recipe resources as the client sees them
//! - [`view`]: The renderer-facing snapshot

pub mod action;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod form;
pub mod model;
pub mod request;
pub mod state;
pub mod view;
