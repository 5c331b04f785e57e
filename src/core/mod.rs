//! Core building blocks: constants, configuration, error types.

pub mod config;
pub mod constants;
pub mod error;
