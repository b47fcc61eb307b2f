pub use kurbo::{Point, Rect, Vec2};

/// Normalized scroll position within one animated section's scrollable
/// range, in `[0, 1]`.
///
/// Recomputed fresh from live geometry on every frame; never stored across
/// frames. Consumers clamp before use, so an out-of-range raw value can
/// never extrapolate a style.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Progress(pub f64);

impl Progress {
    /// Construct a progress value clamped to `[0, 1]`.
    pub fn new(v: f64) -> Self {
        Self(v.clamp(0.0, 1.0))
    }
}

/// Live viewport metrics threaded explicitly into every pass.
///
/// The navigation-bar inset is the fixed vertical offset occupied by the
/// sticky navigation; when the authored custom style variable is absent the
/// host passes [`Viewport::DEFAULT_NAV_INSET_PX`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
    /// Height of the sticky navigation bar in pixels.
    pub nav_inset_px: f64,
}

impl Viewport {
    /// Nav-bar height used when the authored value is absent.
    pub const DEFAULT_NAV_INSET_PX: f64 = 64.0;

    /// Viewport with the default navigation inset.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            nav_inset_px: Self::DEFAULT_NAV_INSET_PX,
        }
    }

    /// Viewport with an explicit navigation inset.
    pub fn with_nav_inset(width: f64, height: f64, nav_inset_px: f64) -> Self {
        Self {
            width,
            height,
            nav_inset_px,
        }
    }

    /// The full-bleed stage rectangle: the viewport minus the nav inset.
    ///
    /// Used as the fit transform's start rectangle in the full-bleed
    /// variant, so the visual starts centered in the area below the nav.
    pub fn stage_rect(&self) -> Rect {
        Rect::new(0.0, self.nav_inset_px, self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
