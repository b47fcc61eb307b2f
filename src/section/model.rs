/// Opaque handle to an authored element, assigned by the host.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

/// Behavior-variant tag carried by each section.
///
/// The composer dispatches on this tag to select which additional property
/// tracks apply; sections are never special-cased by identity string inside
/// the shared pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BehaviorVariant {
    /// Plain fit into the destination window.
    #[default]
    StandardFit,
    /// The inner media de-zooms toward 1:1 while the visual fits.
    CoverReveal,
    /// Soft opacity/blur dissolve of the visual across the exit window.
    ExitDissolve,
    /// Combined rotation/translation/squeeze exit with paper layers.
    ExitToss,
}

/// Which rectangle the fit transform starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FitOrigin {
    /// Full-bleed: the viewport rectangle minus the nav-bar inset.
    #[default]
    Viewport,
    /// The visual element's own current bounding rectangle.
    Visual,
}

/// A raw authored section before registry filtering.
///
/// The host resolves each structural role to an element handle; roles the
/// markup does not author stay `None`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SectionSource {
    /// Section name for authoring/debugging.
    pub name: String,
    /// Behavior-variant tag.
    #[serde(default)]
    pub variant: BehaviorVariant,
    /// Fit start-rectangle policy.
    #[serde(default)]
    pub fit_origin: FitOrigin,
    /// The section container itself.
    pub root: ElementId,
    /// Pinned/sticky container. Mandatory.
    pub sticky: Option<ElementId>,
    /// Primary visual. Mandatory.
    pub visual: Option<ElementId>,
    /// Destination window. Mandatory.
    pub window: Option<ElementId>,
    /// Frame chrome around the destination window.
    #[serde(default)]
    pub frame: Option<ElementId>,
    /// Copy block.
    #[serde(default)]
    pub copy: Option<ElementId>,
    /// Headline inside the copy block (letter-spacing track).
    #[serde(default)]
    pub headline: Option<ElementId>,
    /// Lead paragraph inside the copy block (letter-spacing track).
    #[serde(default)]
    pub lead: Option<ElementId>,
    /// Ambient overlay.
    #[serde(default)]
    pub overlay: Option<ElementId>,
    /// Scroll hint affordance.
    #[serde(default)]
    pub hint: Option<ElementId>,
    /// Inner media element for the cover-reveal variant.
    #[serde(default)]
    pub reveal_media: Option<ElementId>,
    /// Decorative paper overlay for the exit-toss variant.
    #[serde(default)]
    pub paper: Option<ElementId>,
    /// Decorative paper highlight for the exit-toss variant.
    #[serde(default)]
    pub paper_hi: Option<ElementId>,
}

/// The unit of animation: one registered section with its mandatory roles
/// resolved.
///
/// Immutable after registry construction — element references never change,
/// though the elements' geometry does. Consumed read-only by every frame.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SectionDescriptor {
    /// Section name for authoring/debugging.
    pub name: String,
    /// Behavior-variant tag.
    pub variant: BehaviorVariant,
    /// Fit start-rectangle policy.
    pub fit_origin: FitOrigin,
    /// The section container itself.
    pub root: ElementId,
    /// Pinned/sticky container.
    pub sticky: ElementId,
    /// Primary visual.
    pub visual: ElementId,
    /// Destination window.
    pub window: ElementId,
    /// Frame chrome, if authored.
    pub frame: Option<ElementId>,
    /// Copy block, if authored.
    pub copy: Option<ElementId>,
    /// Headline, if authored.
    pub headline: Option<ElementId>,
    /// Lead paragraph, if authored.
    pub lead: Option<ElementId>,
    /// Ambient overlay, if authored.
    pub overlay: Option<ElementId>,
    /// Scroll hint, if authored.
    pub hint: Option<ElementId>,
    /// Inner reveal media, if authored.
    pub reveal_media: Option<ElementId>,
    /// Paper overlay, if authored.
    pub paper: Option<ElementId>,
    /// Paper highlight, if authored.
    pub paper_hi: Option<ElementId>,
}
