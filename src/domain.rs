//! Domain logic
//!
//! Pure course catalog types and rules:
//! - Courses, instances and academic terms
//! - Derived status, enrollment level and delete eligibility
//! - Search, filters, dashboard statistics and form validation

pub mod catalog;
pub mod course;
pub mod course_detail;
pub mod filter;
pub mod instance;
pub mod stats;
pub mod term;
pub mod text;
pub mod validation;
