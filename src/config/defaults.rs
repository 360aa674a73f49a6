// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timeout**: Auto-dismiss timing for notifications
//! - **Fade**: Dismissal fade animation
//! - **Tick**: Animation/timer subscription cadence

// ==========================================================================
// Timeout Defaults
// ==========================================================================

/// Default auto-dismiss timeout for non-critical notifications (in seconds).
pub const DEFAULT_BRIEF_TIMEOUT_SECS: f32 = 1.5;

/// Sentinel requesting that a notification stay until manually dismissed.
pub const INDEFINITE_TIMEOUT_SECS: f32 = -1.0;

// ==========================================================================
// Fade Defaults
// ==========================================================================

/// Duration of the dismissal fade-out (in milliseconds).
pub const FADE_OUT_MS: u64 = 200;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Cadence of the timer/fade tick subscription (in milliseconds).
///
/// Deadlines and fades advance on this grid, so dismissal lands within one
/// tick of its nominal time.
pub const TICK_INTERVAL_MS: u64 = 50;
