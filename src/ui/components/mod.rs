// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! # Components
//!
//! - [`checkerboard`] - Transparency checkerboard background pattern for
//!   displaying images with alpha channels

pub mod checkerboard;
