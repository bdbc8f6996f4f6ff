//! Presentation layer
//!
//! - stateless page components that draw `AppState`
//! - reusable widgets (cards, badges, gauge, search box)
//! - configuration for styles and keybindings

pub mod components;
pub mod config;
pub mod widgets;
