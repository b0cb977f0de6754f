//! # Core Application Logic
//!
//! This module contains Podshelf's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!   raw JSON ──► podcast (normalize once)
//!                   │
//!                   ▼
//!   ┌──────────────────────────────────────────────┐
//!   │                    CORE                      │
//!   │                                              │
//!   │  query      search → genre filter → sort     │
//!   │  pagination fixed-size pages, clamped        │
//!   │  genres     catalog + title resolution       │
//!   │  state      App + ViewState transitions      │
//!   │  action     Action enum + update() reducer   │
//!   │                                              │
//!   │  No I/O. No UI. Pure.                        │
//!   └──────────────────────┬───────────────────────┘
//!                          │
//!                          ▼
//!                  ┌──────────────┐
//!                  │     TUI      │
//!                  │   Adapter    │
//!                  │  (ratatui)   │
//!                  └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`podcast`]: `PodcastPreview` and ingestion-time normalization
//! - [`genres`]: The genre catalog and genre title resolution
//! - [`query`]: Search, genre filter and sort
//! - [`pagination`]: Page slicing and clamping
//! - [`state`]: The `App` struct and `ViewState` transitions
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod genres;
pub mod pagination;
pub mod podcast;
pub mod query;
pub mod state;
