// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Crop one image into a matched wallpaper pair for a dual-monitor desktop.

//! Interactive crop geometry for splitting one image across two monitors.
//!
//! [`domain`] holds the pure geometry: monitor layout, display mapping, the
//! aspect-locked crop engine and the output split. [`app`] wires it into a
//! session with image loading, input handling, previews and painting.

pub mod app;
pub mod config;
pub mod constant;
pub mod domain;
