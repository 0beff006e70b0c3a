//! Initial-appearance transition for the hero block.
//!
//! DESIGN
//! ======
//! The transition is described as data (start frame, end frame, duration) and
//! rendered as CSS custom properties, so both branches share one final frame
//! and the reduced-motion branch is simply a zero-length transition.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Hero fade/slide duration when motion is allowed.
pub const HERO_ENTER_DURATION_MS: u32 = 600;
/// Vertical offset the hero starts from when motion is allowed.
pub const HERO_ENTER_OFFSET_PX: f32 = 8.0;

/// One visual state of an animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionFrame {
    pub opacity: f32,
    pub offset_y_px: f32,
}

impl MotionFrame {
    /// Fully visible, in place.
    pub const SETTLED: Self = Self { opacity: 1.0, offset_y_px: 0.0 };
}

/// How the hero block first appears.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroAppearance {
    pub initial: MotionFrame,
    pub target: MotionFrame,
    pub duration_ms: u32,
}

impl HeroAppearance {
    /// Pick the appearance for the viewer's reduced-motion preference.
    pub fn for_preference(reduced_motion: bool) -> Self {
        if reduced_motion {
            Self { initial: MotionFrame::SETTLED, target: MotionFrame::SETTLED, duration_ms: 0 }
        } else {
            Self {
                initial: MotionFrame { opacity: 0.0, offset_y_px: HERO_ENTER_OFFSET_PX },
                target: MotionFrame::SETTLED,
                duration_ms: HERO_ENTER_DURATION_MS,
            }
        }
    }

    pub fn is_animated(&self) -> bool {
        self.duration_ms > 0 && self.initial != self.target
    }

    /// Class list for the hero media wrapper.
    pub fn class(&self) -> &'static str {
        if self.is_animated() {
            "hero__media hero__media--enter"
        } else {
            "hero__media"
        }
    }

    /// Inline style. Animated heroes carry the start frame and duration for the
    /// `hero-enter` keyframes; static heroes are pinned to the target frame.
    pub fn style(&self) -> String {
        if self.is_animated() {
            format!(
                "--hero-from-opacity:{};--hero-from-y:{}px;--hero-duration:{}ms;opacity:{};transform:translateY({}px)",
                self.initial.opacity,
                self.initial.offset_y_px,
                self.duration_ms,
                self.target.opacity,
                self.target.offset_y_px,
            )
        } else {
            format!("opacity:{};transform:translateY({}px)", self.target.opacity, self.target.offset_y_px)
        }
    }
}
