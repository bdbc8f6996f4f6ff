//! Reusable UI widgets
//!
//! Small building blocks shared by the page components.

pub mod course_card;
pub mod enrollment_gauge;
pub mod instance_card;
pub mod search_bar;
pub mod status_badge;
