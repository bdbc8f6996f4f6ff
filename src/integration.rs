//! Wiring between the pure core and the outside world
//!
//! - `Runtime` runs translate -> update -> execute over queued events
//! - `AppRunner` owns the terminal and the API service and drives the loop
//! - `Renderer` draws the state, `Coalescer` decides when

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
pub mod update_executor;
