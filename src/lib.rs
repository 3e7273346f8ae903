//! Crop advisory and soil analysis for Indian agriculture.
//!
//! The [`logic`] module holds the rule evaluation: a compiled-in crop
//! catalogue, soil test bands, and the advisory composer. [`api`], [`cli`]
//! and [`ui`] are the boundary layers around it.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod ui;

pub use error::{FarmBrainError, Result};
