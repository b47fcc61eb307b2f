//! Geometry reads at the seam between the engine and the live document.

use crate::{foundation::core::Rect, section::model::ElementId};

/// Read-only access to live document geometry.
///
/// The pipeline only ever reads layout through this trait and only writes
/// visual/compositing properties, so its own geometry reads are never
/// invalidated mid-pass. Implementations back onto the host document; tests
/// back onto fixed tables.
pub trait LayoutProbe {
    /// Top of the element in document coordinates.
    fn section_top(&self, el: ElementId) -> f64;

    /// Layout height of the element in pixels.
    fn height(&self, el: ElementId) -> f64;

    /// Current bounding rectangle in viewport coordinates.
    fn rect(&self, el: ElementId) -> Rect;
}
