// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a single-page portfolio viewer built with the Iced GUI
//! framework.
//!
//! The page content comes from an embedded TOML profile (overridable on the
//! command line); the crate demonstrates internationalization with Fluent,
//! user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod profile;
pub mod ui;
