//! core/mod.rs
//!
//! The brain of the app:
//! - Own the static album data (`library`, `types`)
//! - Turn a scroll offset into header geometry (`parallax`)
//! - Track the synthetic pull-down stretch (`overscroll`)
//!
//! No GUI code lives here. Everything is plain data and pure math so it can
//! be unit tested without a window.

pub mod library;
pub mod overscroll;
pub mod parallax;
pub mod types;
