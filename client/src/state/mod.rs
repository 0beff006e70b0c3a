//! Page data and per-render environment.
//!
//! DESIGN
//! ======
//! Content is immutable configuration compiled into the binary; the only
//! runtime input is the environment snapshot taken at the start of a render.

pub mod content;
pub mod motion;
pub mod render_env;
