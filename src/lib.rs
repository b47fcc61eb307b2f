//! Scrollstage drives scroll-linked visual storytelling: as the reader
//! scrolls through an animated section, a primary visual travels from a
//! full-viewport presentation into a smaller framed window while copy,
//! overlays and hint affordances fade, blur and reposition in a
//! choreographed sequence.
//!
//! # Pipeline overview
//!
//! 1. **Register**: authored [`SectionSource`]s -> [`SectionDescriptor`]s
//!    (once, at startup; incomplete sections degrade to static)
//! 2. **Progress**: scroll offset + live geometry -> per-section
//!    [`Progress`] in `[0, 1]`
//! 3. **Windows**: progress -> eased local values through overlapping named
//!    [`TimingWindow`]s ([`TimelineConfig`])
//! 4. **Compose**: eased values -> one [`StyleWrite`] per element per frame
//! 5. **Schedule**: scroll/resize signals coalesced to at most one
//!    recomputation per rendering frame ([`FrameScheduler`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: composition is a pure function of
//!   (descriptor, scroll offset, viewport, configuration); no state carries
//!   across frames, so output is idempotent and scroll-direction symmetric.
//! - **No ambient reads**: geometry arrives through [`LayoutProbe`] and
//!   style leaves through [`StyleSink`], so the engine runs without a live
//!   rendering surface.
//! - **Choreography is data**: window placements and motion amplitudes live
//!   in serde-loadable tables, not forked code paths.
#![forbid(unsafe_code)]

mod animation;
mod engine;
mod foundation;
mod layout;
mod section;
mod style;
mod timeline;

pub use animation::ease::Ease;
pub use engine::pipeline::{Engine, MotionPreference};
pub use engine::scheduler::{FrameScheduler, SchedulerState};
pub use foundation::core::{Point, Progress, Rect, Vec2, Viewport};
pub use foundation::error::{StageError, StageResult};
pub use layout::probe::LayoutProbe;
pub use section::model::{
    BehaviorVariant, ElementId, FitOrigin, SectionDescriptor, SectionSource,
};
pub use section::registry::build_registry;
pub use style::composer::compose_section;
pub use style::state::{ElementStyle, StyleSink, StyleWrite, Transform};
pub use timeline::config::{
    CopyTuning, ExitTuning, FitTuning, FrameTuning, Interval, OverlayTuning, StyleTuning,
    TimelineConfig, TossTuning,
};
pub use timeline::progress::{scrollable_height, section_progress};
pub use timeline::window::TimingWindow;
