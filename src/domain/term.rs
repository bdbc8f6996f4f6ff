//! Academic terms
//!
//! A term is a (year, semester) pair. Semester 1 covers January to June,
//! semester 2 covers July to December.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of years offered when scheduling a new instance
pub const SCHEDULABLE_YEARS: i32 = 5;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Term {
    pub year: i32,
    pub semester: u8,
}

impl Term {
    pub fn new(year: i32, semester: u8) -> Self {
        Self { year, semester }
    }

    /// The term a calendar date falls in
    pub fn containing(date: NaiveDate) -> Self {
        // ceil(month / 6)
        let semester = date.month().div_ceil(6) as u8;
        Self {
            year: date.year(),
            semester,
        }
    }

    pub fn semester_name(&self) -> String {
        semester_name(self.semester)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", semester_name(self.semester), self.year)
    }
}

pub fn semester_name(semester: u8) -> String {
    format!("Semester {semester}")
}

/// Years a new instance can be scheduled in: this year and the next four
pub fn schedulable_years(today: NaiveDate) -> Vec<i32> {
    let current = today.year();
    (current..current + SCHEDULABLE_YEARS).collect()
}
