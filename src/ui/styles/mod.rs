// SPDX-License-Identifier: MPL-2.0
//! Styles of the showcase screen. Toast styles live with the renderer.

pub mod button;
pub mod container;
