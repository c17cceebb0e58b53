// SPDX-License-Identifier: GPL-3.0-only

//! Viewfinder - capture screen overlay controls for the COSMIC desktop
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`app`]: Main application logic and UI
//! - [`overlay`]: State and events of the two overlay controls
//! - [`flash`]: Flash mode model
//! - [`orientation`]: Device orientation and rotation mapping
//! - [`icons`]: Embedded icon assets with placeholder fallback
//! - [`config`]: User configuration handling

pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod flash;
pub mod i18n;
pub mod icons;
pub mod orientation;
pub mod overlay;

// Re-export commonly used types
pub use app::{AppModel, ContextPage, Message};
pub use config::Config;
pub use flash::FlashMode;
pub use orientation::Orientation;
pub use overlay::{OverlayEvent, OverlayState};
