//! # Courseboard
//!
//! A terminal dashboard for a course catalog backend: browse and search
//! courses, follow prerequisite chains, schedule course instances per term
//! and delete what is safe to delete.
//!
//! ## Architecture
//!
//! State changes follow an Elm-like loop:
//!
//! - **Raw message** (`core::raw_msg`): terminal input and backend replies
//! - **Translate** (`core::translator`): raw input becomes a domain message
//!   depending on the page and input mode
//! - **Update** (`core::update`): the only place `AppState` changes; returns
//!   commands for side effects
//! - **Command** (`core::cmd`): backend calls and render requests, executed
//!   by `core::cmd_executor`
//! - **View** (`presentation::components`): stateless rendering of `AppState`
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use courseboard::{
//!     core::{
//!         msg::{nav::NavMsg, Msg},
//!         state::{nav::Route, AppState},
//!         update::update,
//!     },
//!     infrastructure::config::Config,
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let state = AppState::new(Config::default(), today);
//!
//! let (state, commands) = update(Msg::Nav(NavMsg::Go(Route::Courses)), state);
//!
//! assert_eq!(state.route(), &Route::Courses);
//! assert!(state.courses.catalog.is_loading());
//! assert!(!commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`domain`] - courses, instances, terms and the rules over them
//! - [`core`] - state, messages, update and command execution
//! - [`infrastructure`] - REST client, API service, config, CLI, terminal
//! - [`integration`] - runtime and the main loop
//! - [`presentation`] - components, widgets, keybindings and styles

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

use color_eyre::eyre;

/// Result type used throughout the library
pub type Result<T> = eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
