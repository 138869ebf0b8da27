// SPDX-License-Identifier: MPL-2.0
//! UI modules: the page, its chrome, and shared styling.

pub mod design_tokens;
pub mod navbar;
pub mod page;
pub mod state;
pub mod styles;
pub mod theming;
