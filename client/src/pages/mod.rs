//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page; it owns the render-pass inputs and delegates
//! each region to `components`.

pub mod landing;
