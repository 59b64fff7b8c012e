// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`filter_dialog`] - Full-window filter session with preview and download
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (checkerboard)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod filter_dialog;
pub mod styles;
pub mod theming;
