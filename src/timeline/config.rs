use crate::{
    animation::ease::Ease,
    foundation::error::{StageError, StageResult},
    timeline::window::TimingWindow,
};

/// A `from → to` value span interpolated by one window's eased output.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interval {
    /// Value at eased t = 0.
    pub from: f64,
    /// Value at eased t = 1.
    pub to: f64,
}

impl Interval {
    /// Construct a span.
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Linear interpolation across the span.
    pub fn lerp(self, t: f64) -> f64 {
        self.from + (self.to - self.from) * t
    }
}

/// The per-effect timing window table.
///
/// Every visual effect is governed by a fixed, named window; per-page
/// variation is data in this table, not a forked engine. Defaults follow
/// the canonical choreography.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineConfig {
    /// Copy fade/lift/blur-out, early in the timeline.
    pub copy_fade: TimingWindow,
    /// Scroll-hint fade, earliest and short.
    pub hint_fade: TimingWindow,
    /// Ambient overlay settle, broad and slow.
    pub overlay_settle: TimingWindow,
    /// Frame chrome fade-in, early-to-mid.
    pub frame_reveal: TimingWindow,
    /// Frame micro-scale/lift settle; also drives the matte inset reveal.
    pub frame_settle: TimingWindow,
    /// Primary fit transform; the dominant, widest window.
    pub fit: TimingWindow,
    /// Border-radius rounding of the visual.
    pub rounding: TimingWindow,
    /// Inner-media de-zoom for the cover-reveal variant.
    pub cover_reveal: TimingWindow,
    /// End-of-timeline blend/dissolve, the final stretch.
    pub exit: TimingWindow,
    /// Page-toss physics window, late and narrow.
    pub toss: TimingWindow,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            copy_fade: TimingWindow {
                start: 0.10,
                end: 0.44,
                ease: Ease::InOutCubic,
            },
            hint_fade: TimingWindow {
                start: 0.14,
                end: 0.38,
                ease: Ease::Linear,
            },
            overlay_settle: TimingWindow {
                start: 0.12,
                end: 0.67,
                ease: Ease::InOutCubic,
            },
            frame_reveal: TimingWindow {
                start: 0.22,
                end: 0.55,
                ease: Ease::Linear,
            },
            frame_settle: TimingWindow {
                start: 0.30,
                end: 0.88,
                ease: Ease::InOutCubic,
            },
            fit: TimingWindow {
                start: 0.18,
                end: 0.92,
                ease: Ease::DampedInOutCubic,
            },
            rounding: TimingWindow {
                start: 0.30,
                end: 0.82,
                ease: Ease::InOutCubic,
            },
            cover_reveal: TimingWindow {
                start: 0.10,
                end: 0.80,
                ease: Ease::InOutCubic,
            },
            exit: TimingWindow {
                start: 0.88,
                end: 1.0,
                ease: Ease::InOutCubic,
            },
            toss: TimingWindow {
                start: 0.82,
                end: 0.985,
                ease: Ease::InOutCubic,
            },
        }
    }
}

impl TimelineConfig {
    /// Validate every window in the table.
    pub fn validate(&self) -> StageResult<()> {
        for (name, w) in [
            ("copy_fade", self.copy_fade),
            ("hint_fade", self.hint_fade),
            ("overlay_settle", self.overlay_settle),
            ("frame_reveal", self.frame_reveal),
            ("frame_settle", self.frame_settle),
            ("fit", self.fit),
            ("rounding", self.rounding),
            ("cover_reveal", self.cover_reveal),
            ("exit", self.exit),
            ("toss", self.toss),
        ] {
            w.validate()
                .map_err(|e| StageError::validation(format!("window '{name}': {e}")))?;
        }
        Ok(())
    }

    /// Load a tuned window table from JSON and validate it.
    pub fn from_json_str(s: &str) -> StageResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| StageError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Copy-block motion amplitudes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CopyTuning {
    /// Upward lift of the copy block at full fade, in pixels.
    pub lift_px: f64,
    /// Blur radius of the copy block at full fade, in pixels.
    pub blur_px: f64,
    /// Headline letter-spacing span in `em`.
    pub headline_tracking_em: Interval,
    /// Lead paragraph letter-spacing span in `em`.
    pub lead_tracking_em: Interval,
    /// Eased fade value beyond which the copy stops receiving input.
    pub interactive_cutoff: f64,
}

/// Ambient overlay opacities.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayTuning {
    /// Opacity span across the settle window (idle → settled).
    pub opacity: Interval,
    /// Opacity reached at the end of the exit window.
    pub exit_opacity: f64,
}

/// Frame chrome settle amplitudes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameTuning {
    /// Scale span across the settle window.
    pub settle_scale: Interval,
    /// Initial downward offset as a percentage of viewport height.
    pub lift_vh: f64,
    /// Matte inset fully revealed at settle, in pixels.
    pub matte_inset_px: f64,
}

/// Primary fit transform amplitudes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitTuning {
    /// Amplitude of the sinusoidal scale pop across the transition.
    pub pop_scale: f64,
    /// Border radius of the visual at full rounding, in pixels.
    pub corner_radius_px: f64,
    /// Inner-media start zoom for the cover-reveal variant.
    pub cover_zoom: f64,
    /// Start zoom used below the narrow-viewport breakpoint.
    pub cover_zoom_narrow: f64,
    /// Viewport width at or below which the narrow zoom applies, in pixels.
    pub narrow_viewport_px: f64,
}

/// Exit-dissolve amplitudes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExitTuning {
    /// Blur radius of the visual at full dissolve, in pixels.
    pub blur_px: f64,
}

/// Page-toss exit amplitudes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TossTuning {
    /// Vertical lift span in pixels (negative is upward).
    pub lift_px: Interval,
    /// Rotation span around the horizontal axis, in degrees.
    pub rot_x_deg: Interval,
    /// Rotation span around the depth axis, in degrees.
    pub rot_z_deg: Interval,
    /// Horizontal axis-scale (squeeze) span.
    pub squeeze_x: Interval,
    /// Vertical axis-scale (squeeze) span.
    pub squeeze_y: Interval,
    /// Amplitude of the decaying horizontal wobble, in pixels.
    pub wobble_amp_px: f64,
    /// Number of wobble half-cycles across the toss window.
    pub wobble_cycles: f64,
    /// Paper overlay opacity span.
    pub paper_opacity: Interval,
    /// Paper overlay lift span in pixels.
    pub paper_lift_px: Interval,
    /// Paper overlay rotation span in degrees.
    pub paper_rot_deg: Interval,
    /// Paper highlight opacity span.
    pub paper_hi_opacity: Interval,
}

/// Grouped motion amplitude constants, all data and serde-tunable.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleTuning {
    /// Copy-block amplitudes.
    pub copy: CopyTuning,
    /// Overlay amplitudes.
    pub overlay: OverlayTuning,
    /// Frame chrome amplitudes.
    pub frame: FrameTuning,
    /// Fit transform amplitudes.
    pub fit: FitTuning,
    /// Exit-dissolve amplitudes.
    pub exit: ExitTuning,
    /// Page-toss amplitudes.
    pub toss: TossTuning,
}

impl Default for StyleTuning {
    fn default() -> Self {
        Self {
            copy: CopyTuning {
                lift_px: 22.0,
                blur_px: 1.6,
                headline_tracking_em: Interval::new(-0.07, -0.02),
                lead_tracking_em: Interval::new(-0.01, 0.02),
                interactive_cutoff: 0.85,
            },
            overlay: OverlayTuning {
                opacity: Interval::new(0.55, 0.42),
                exit_opacity: 0.70,
            },
            frame: FrameTuning {
                settle_scale: Interval::new(0.92, 1.0),
                lift_vh: 8.0,
                matte_inset_px: 18.0,
            },
            fit: FitTuning {
                pop_scale: 0.016,
                corner_radius_px: 26.0,
                cover_zoom: 1.35,
                cover_zoom_narrow: 1.55,
                narrow_viewport_px: 980.0,
            },
            exit: ExitTuning { blur_px: 12.0 },
            toss: TossTuning {
                lift_px: Interval::new(0.0, -70.0),
                rot_x_deg: Interval::new(0.0, 10.0),
                rot_z_deg: Interval::new(0.0, -1.6),
                squeeze_x: Interval::new(1.0, 0.95),
                squeeze_y: Interval::new(1.0, 0.84),
                wobble_amp_px: 0.6,
                wobble_cycles: 6.0,
                paper_opacity: Interval::new(0.0, 0.18),
                paper_lift_px: Interval::new(0.0, -14.0),
                paper_rot_deg: Interval::new(0.0, -1.1),
                paper_hi_opacity: Interval::new(0.0, 0.22),
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/config.rs"]
mod tests;
