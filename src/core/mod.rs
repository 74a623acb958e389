//! Core module - Contains the fundamental data structures and scoring
//!
//! This module provides:
//! - Word scoring and the highest-scoring word fold
//! - Unified result model (ResultItem)
//! - Rendering functions for different output formats
//! - Input errors

pub mod error;
pub mod model;
pub mod render;
pub mod score;
