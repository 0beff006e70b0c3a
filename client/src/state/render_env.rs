//! Environment snapshot taken once at the start of a render pass.

#[cfg(test)]
#[path = "render_env_test.rs"]
mod render_env_test;

use crate::state::motion::HeroAppearance;
use crate::util::{clock, reduced_motion};

/// Inputs the page reads from its surroundings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderEnv {
    /// Viewer asked for minimal animation.
    pub reduced_motion: bool,
    /// Year shown in the footer.
    pub year: i32,
}

impl RenderEnv {
    /// Query the reduced-motion preference and clock once.
    ///
    /// An unavailable preference (no window, no `matchMedia`) counts as `false`.
    pub fn capture() -> Self {
        Self::with_preference(reduced_motion::read_preference())
    }

    /// Build an env from an already-read preference, defaulting unknown to `false`.
    pub fn with_preference(preference: Option<bool>) -> Self {
        Self { reduced_motion: preference.unwrap_or(false), year: clock::current_year() }
    }

    pub fn hero_appearance(&self) -> HeroAppearance {
        HeroAppearance::for_preference(self.reduced_motion)
    }
}
