/// Easing applied to a timing window's local parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// No shaping; used by the hint fade and frame reveal windows.
    Linear,
    /// Normalized cubic ease-in-out.
    InOutCubic,
    /// Cubic ease-in-out applied to `t²`.
    ///
    /// A deliberately slower, more dampened onset reserved for the primary
    /// fit transform. Kept as its own variant rather than folded into
    /// [`Ease::InOutCubic`] so the fit pacing stays independently tunable.
    DampedInOutCubic,
}

impl Ease {
    /// Apply the easing to `t`, clamping to `[0, 1]` first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutCubic => in_out_cubic(t),
            Self::DampedInOutCubic => in_out_cubic(t * t),
        }
    }
}

fn in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
