//! Body mass index engine used by the calculator page.
//!
//! Everything in here is plain Rust with no DOM access: the page component
//! feeds raw input strings in and renders whatever [`calculator::BmiState`] comes out.

pub mod calculator;
pub mod error;
pub mod gauge;
pub mod units;

pub use calculator::{BmiCalculator, BmiResult, Category};
pub use units::UnitSystem;
