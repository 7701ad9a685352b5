// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Pure domain model: geometry, monitor layout, display mapping and crop engine.

pub mod crop;
pub mod geometry;
pub mod layout;
pub mod mapping;
