use crate::{
    animation::ease::Ease,
    foundation::core::Progress,
    foundation::error::{StageError, StageResult},
};

/// A sub-range of section progress paired with an easing rule, governing
/// one visual effect.
///
/// Multiple windows exist per section and commonly overlap; each is
/// evaluated independently and drives its own property group.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingWindow {
    /// Global progress at which the effect begins.
    pub start: f64,
    /// Global progress at which the effect completes.
    pub end: f64,
    /// Easing applied to the local parameter.
    pub ease: Ease,
}

impl TimingWindow {
    /// Construct a validated window.
    pub fn new(start: f64, end: f64, ease: Ease) -> StageResult<Self> {
        let w = Self { start, end, ease };
        w.validate()?;
        Ok(w)
    }

    /// Validate `0 <= start < end <= 1` and finiteness.
    pub fn validate(&self) -> StageResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(StageError::validation("window start/end must be finite"));
        }
        if !(0.0..=1.0).contains(&self.start) || !(0.0..=1.0).contains(&self.end) {
            return Err(StageError::validation(
                "window start/end must lie within [0, 1]",
            ));
        }
        if self.start >= self.end {
            return Err(StageError::validation("window start must be < end"));
        }
        Ok(())
    }

    /// Map global progress to the eased local value in `[0, 1]`.
    ///
    /// Progress at or below `start` yields 0 and at or beyond `end` yields
    /// 1; the window never extrapolates. A degenerate `end <= start`
    /// window (possible via deserialized data that skipped validation)
    /// behaves as a step at `start` rather than producing NaN.
    pub fn eval(self, p: Progress) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if p.0 < self.start { 0.0 } else { 1.0 };
        }
        self.ease.apply((p.0 - self.start) / span)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/window.rs"]
mod tests;
