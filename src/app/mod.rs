// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Application layer: session state, input handling, previews and painting.

pub mod document;
pub mod interaction;
pub mod mapper;
pub mod message;
pub mod preview;
pub mod session;
pub mod view;

pub use self::session::CropSession;
