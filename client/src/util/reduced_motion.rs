//! One-shot read of the viewer's reduced-motion preference.
//!
//! TRADE-OFFS
//! ==========
//! The query is browser-only. Server rendering and tests report "unknown" so
//! output stays deterministic; callers decide how to treat that.

/// Media query matching viewers who asked for minimal animation.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Read the preference from `window.matchMedia`.
///
/// Returns `None` when there is no window or the query is unsupported.
pub fn read_preference() -> Option<bool> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
