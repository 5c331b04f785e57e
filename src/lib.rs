//! Groundfall - impact consequence estimation for near-Earth objects
//!
//! A deliberately simple, explainable model: a body record plus a handful
//! of user-adjustable parameters in, a deterministic set of nested damage
//! radii and an order-of-magnitude population-exposure figure out.

pub mod body;
pub mod core;
pub mod engine;
