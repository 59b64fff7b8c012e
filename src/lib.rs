// SPDX-License-Identifier: MPL-2.0
//! `iced_tint` is a small image tinting tool built with the Iced GUI framework.
//!
//! It loads a single image, previews it under a catalog of color filters, and
//! downloads the filtered rendition. Along the way it demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/iced_tint/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod infrastructure;
pub mod media;
pub mod ui;
