//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - The catalog REST client and the background service running it

pub mod api;
pub mod api_service;
pub mod cli;
pub mod config;
pub mod tui;
