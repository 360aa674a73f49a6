// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a transient toast notification overlay built with the
//! Iced GUI framework.
//!
//! It provides a shared notification area with icon categories, auto-dismiss
//! timeouts, trigger-specific click actions, and a two-phase fade-out
//! removal, plus a small demo application exercising the overlay.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;
