use crate::{
    engine::scheduler::FrameScheduler,
    foundation::core::Viewport,
    foundation::error::StageResult,
    layout::probe::LayoutProbe,
    section::model::{SectionDescriptor, SectionSource},
    section::registry::build_registry,
    style::composer::compose_section,
    style::state::StyleSink,
    timeline::config::{StyleTuning, TimelineConfig},
    timeline::progress::{scrollable_height, section_progress},
};

/// Platform motion preference, read once at startup and never re-evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionPreference {
    /// Full motion; the pipeline animates normally.
    #[default]
    Full,
    /// Reduced motion requested; no per-frame work, no style ever written.
    Reduced,
}

/// The scroll-linked animation engine.
///
/// Owns the section registry, the timing configuration and the frame
/// scheduler. Single-threaded and event-driven: the host forwards scroll
/// and resize signals to [`Engine::signal`] and invokes [`Engine::frame`]
/// from the rendering-frame callback.
pub struct Engine {
    sections: Vec<SectionDescriptor>,
    config: TimelineConfig,
    tuning: StyleTuning,
    motion: MotionPreference,
    scheduler: FrameScheduler,
}

impl Engine {
    /// Validate the configuration, build the registry and construct the
    /// engine.
    pub fn new(
        sources: Vec<SectionSource>,
        config: TimelineConfig,
        tuning: StyleTuning,
        motion: MotionPreference,
    ) -> StageResult<Self> {
        config.validate()?;
        let sections = build_registry(sources);
        tracing::debug!(sections = sections.len(), "engine initialized");
        Ok(Self {
            sections,
            config,
            tuning,
            motion,
            scheduler: FrameScheduler::new(),
        })
    }

    /// The active section descriptors, in registration order.
    pub fn sections(&self) -> &[SectionDescriptor] {
        &self.sections
    }

    /// The timing window table in effect.
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Record a scroll or resize signal.
    ///
    /// Returns `true` when the host must request a rendering-frame
    /// callback that will invoke [`Engine::frame`]. Under reduced motion
    /// no callback is ever needed.
    pub fn signal(&mut self) -> bool {
        if self.motion == MotionPreference::Reduced {
            return false;
        }
        self.scheduler.signal()
    }

    /// The rendering-frame callback: return the scheduler to idle, then
    /// run one full recomputation pass.
    pub fn frame<P, S>(&mut self, scroll_y: f64, viewport: Viewport, probe: &P, sink: &mut S)
    where
        P: LayoutProbe,
        S: StyleSink,
    {
        self.scheduler.begin_frame();
        self.run_pass(scroll_y, viewport, probe, sink);
    }

    /// One full recomputation pass over every registered section, in
    /// registration order.
    ///
    /// Also invoked directly for the forced pass at startup and again
    /// after asynchronously-loading media reports its intrinsic size, so
    /// the first paint is correct without user interaction. Within one
    /// section all property computations complete before any style is
    /// written, and all writes for a section happen before the next
    /// section's.
    #[tracing::instrument(skip(self, probe, sink), fields(sections = self.sections.len()))]
    pub fn run_pass<P, S>(&self, scroll_y: f64, viewport: Viewport, probe: &P, sink: &mut S)
    where
        P: LayoutProbe,
        S: StyleSink,
    {
        if self.motion == MotionPreference::Reduced {
            return;
        }
        for desc in &self.sections {
            let total = scrollable_height(probe.height(desc.root), probe.height(desc.sticky));
            let p = section_progress(scroll_y, probe.section_top(desc.root), total);
            let writes = compose_section(desc, p, viewport, probe, &self.config, &self.tuning);
            for write in &writes {
                sink.apply(write);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/pipeline.rs"]
mod tests;
