//! Presentation rules for the price display
//!
//! Font sizes and colors are kept as CSS values so bindings that target
//! markup can apply them directly; terminal bindings map them to their own
//! emphasis.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Label shown on the submit button while a request is in flight
pub const BUSY_LABEL: &str = "Calculating...";

/// Price display text after a transport failure
pub const TRANSPORT_FAILURE_TEXT: &str = "An error occurred.";

/// Font size of the price display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    /// Size used for an estimate
    #[default]
    Normal,
    /// Smaller size so error messages stay readable
    Reduced,
}

impl FontSize {
    pub fn css(&self) -> &'static str {
        match self {
            FontSize::Normal => "2.5rem",
            FontSize::Reduced => "1.2rem",
        }
    }
}

/// Text color of the price display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextColor {
    /// Inherited color
    #[default]
    Default,
    /// Color signalling a failure
    Error,
}

impl TextColor {
    /// CSS value, `None` meaning the inline color is cleared
    pub fn css(&self) -> Option<&'static str> {
        match self {
            TextColor::Default => None,
            TextColor::Error => Some("red"),
        }
    }
}

/// Scroll request for the result area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollOptions {
    pub smooth: bool,
    pub block: ScrollBlock,
}

/// Vertical alignment of a scrolled element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBlock {
    Start,
    Center,
    End,
    Nearest,
}

impl ScrollOptions {
    /// Smooth scroll that moves only as far as needed
    pub const fn smooth_nearest() -> Self {
        Self {
            smooth: true,
            block: ScrollBlock::Nearest,
        }
    }
}

/// One keyframe of the entrance animation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub scale: f64,
    pub opacity: f64,
}

/// CSS-style cubic Bézier timing function through (0,0), (x1,y1), (x2,y2), (1,1)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `x` in `[0, 1]`
    ///
    /// The result may leave `[0, 1]` when a control point does (overshoot).
    pub fn ease(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let t = self.solve_t(x);
        Self::sample(self.y1, self.y2, t)
    }

    fn sample(p1: f64, p2: f64, t: f64) -> f64 {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(p1: f64, p2: f64, t: f64) -> f64 {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (3.0 * a * t + 2.0 * b) * t + c
    }

    /// Parameter `t` whose x coordinate is `x`
    fn solve_t(&self, x: f64) -> f64 {
        const EPSILON: f64 = 1e-7;

        // Newton-Raphson first, it converges in a few steps for sane curves.
        let mut t = x;
        for _ in 0..8 {
            let error = Self::sample(self.x1, self.x2, t) - x;
            if error.abs() < EPSILON {
                return t;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        // Bisection fallback; x(t) is monotonic because x1, x2 lie in [0, 1].
        let (mut low, mut high) = (0.0, 1.0);
        t = x;
        while low < high {
            let current = Self::sample(self.x1, self.x2, t);
            if (current - x).abs() < EPSILON {
                break;
            }
            if x > current {
                low = t;
            } else {
                high = t;
            }
            t = (high - low) / 2.0 + low;
            if high - low < EPSILON {
                break;
            }
        }
        t
    }
}

/// Scale/opacity entrance played when an estimate is revealed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntranceAnimation {
    pub from: Keyframe,
    pub to: Keyframe,
    pub duration: Duration,
    pub easing: CubicBezier,
}

impl EntranceAnimation {
    /// Pop-in used for the price: grows from 80% while fading in, with a
    /// slight overshoot
    pub const fn price_reveal() -> Self {
        Self {
            from: Keyframe {
                scale: 0.8,
                opacity: 0.0,
            },
            to: Keyframe {
                scale: 1.0,
                opacity: 1.0,
            },
            duration: Duration::from_millis(500),
            easing: CubicBezier::new(0.175, 0.885, 0.32, 1.275),
        }
    }

    /// Interpolated keyframe `elapsed` into the animation
    ///
    /// Opacity is clamped to `[0, 1]`; scale keeps the overshoot.
    pub fn frame_at(&self, elapsed: Duration) -> Keyframe {
        let linear = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        let eased = self.easing.ease(linear);
        let lerp = |a: f64, b: f64| a + (b - a) * eased;
        Keyframe {
            scale: lerp(self.from.scale, self.to.scale),
            opacity: lerp(self.from.opacity, self.to.opacity).clamp(0.0, 1.0),
        }
    }
}
