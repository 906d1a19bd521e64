//! Domain modules for the Marquee player
//!
//! Each domain owns its state, messages, update logic and rendering.

pub mod movies;
