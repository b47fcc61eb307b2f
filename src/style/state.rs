use crate::{foundation::core::Vec2, section::model::ElementId};

/// A composed visual transform.
///
/// Parts are composed in a fixed order — translate, then uniform scale,
/// then rotation, then axis squeeze — so translation is always expressed in
/// the untransformed coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform {
    /// Translation in pixels.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation around the horizontal axis, in degrees.
    pub rotate_x_deg: f64,
    /// Rotation around the depth axis, in degrees.
    pub rotate_z_deg: f64,
    /// Non-uniform axis scale applied after rotation.
    pub squeeze: Vec2,
}

impl Transform {
    /// The neutral transform.
    pub const IDENTITY: Self = Self {
        translate: Vec2::new(0.0, 0.0),
        scale: 1.0,
        rotate_x_deg: 0.0,
        rotate_z_deg: 0.0,
        squeeze: Vec2::new(1.0, 1.0),
    };

    /// Translate-and-scale transform with neutral decorative parts.
    pub fn fit(translate: Vec2, scale: f64) -> Self {
        Self {
            translate,
            scale,
            ..Self::IDENTITY
        }
    }

    /// Whether every part is neutral.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    fn has_decor(&self) -> bool {
        self.rotate_x_deg != 0.0
            || self.rotate_z_deg != 0.0
            || self.squeeze != Vec2::new(1.0, 1.0)
    }

    /// Render the transform as a CSS transform list.
    ///
    /// Identical inputs produce a byte-identical string; decorative parts
    /// are omitted when neutral.
    pub fn to_css(&self) -> String {
        let mut out = format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.translate.x, self.translate.y, self.scale
        );
        if self.has_decor() {
            out.push_str(&format!(
                " rotateX({}deg) rotateZ({}deg) scaleX({}) scaleY({})",
                self.rotate_x_deg, self.rotate_z_deg, self.squeeze.x, self.squeeze.y
            ));
        }
        out
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The complete style state for one element for the current frame.
///
/// Fully determined by progress and the fixed timing windows; no state
/// carries over between frames. Fields the current tracks do not drive stay
/// `None` and the sink leaves them untouched.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementStyle {
    /// Composed transform.
    pub transform: Option<Transform>,
    /// Opacity in `[0, 1]`.
    pub opacity: Option<f64>,
    /// Blur filter radius in pixels.
    pub blur_px: Option<f64>,
    /// Border radius in pixels.
    pub border_radius_px: Option<f64>,
    /// Letter spacing in `em`.
    pub letter_spacing_em: Option<f64>,
    /// Matte inset custom variable, in pixels.
    pub matte_inset_px: Option<f64>,
    /// Whether the element should keep receiving pointer input.
    pub interactive: Option<bool>,
}

/// One element's style state for the current frame, ready to apply.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleWrite {
    /// Target element.
    pub target: ElementId,
    /// Composed style state.
    pub style: ElementStyle,
}

/// Destination for composed style writes.
///
/// The engine calls this once per element per frame, all writes for a
/// section before any write for the next. Implementations mutate the
/// presentation layer; tests record.
pub trait StyleSink {
    /// Apply one element's composed style state.
    fn apply(&mut self, write: &StyleWrite);
}

#[cfg(test)]
#[path = "../../tests/unit/style/state.rs"]
mod tests;
