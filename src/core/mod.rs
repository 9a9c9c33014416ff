//! # Core Application Logic
//!
//! The form's business logic. It knows nothing about terminals or HTTP.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (form state)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • view() (display)     │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │  Headless  │
//!         │ (ratatui)  │                  │   (--text) │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `App` and `SessionInput`
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`validate`]: required-field checks
//! - [`notify`]: the three submission outcomes as toasts
//! - [`view`]: state → display model
//! - [`tone`]: the fixed tone set
//! - [`config`]: file/env/CLI configuration

pub mod action;
pub mod config;
pub mod notify;
pub mod state;
pub mod tone;
pub mod validate;
pub mod view;
