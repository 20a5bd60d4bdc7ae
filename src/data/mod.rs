//! In-memory content for the marketing pages.

pub mod locations;
pub mod services;
pub mod site;
