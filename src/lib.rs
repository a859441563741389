//! Mergington High School extracurricular activity signups.
//!
//! A fixed catalog of activities lives in memory for the lifetime of the
//! process. Students sign up for, or are removed from, an activity by email.

pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod services;
pub mod web;

pub use config::Config;
pub use error::ApiError;
pub use registry::{ActivityRegistry, RegistryError};

/// Build stamp from `build.rs`.
pub const BUILD_ID: &str = env!("ACTIVITIES_BUILD_ID");
