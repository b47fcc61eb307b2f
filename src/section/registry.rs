use crate::section::model::{SectionDescriptor, SectionSource};

/// Build the ordered list of section descriptors from authored sources.
///
/// Runs once at initialization. A section lacking its pinned container,
/// visual or destination window is excluded entirely — it receives no
/// animation and is silently omitted from the active set. This is a
/// deliberate degrade-to-static policy for partially-authored markup, not
/// an error.
pub fn build_registry(sources: Vec<SectionSource>) -> Vec<SectionDescriptor> {
    sources
        .into_iter()
        .filter_map(|src| {
            let (Some(sticky), Some(visual), Some(window)) = (src.sticky, src.visual, src.window)
            else {
                tracing::debug!(
                    section = %src.name,
                    "omitting section with incomplete structure"
                );
                return None;
            };
            Some(SectionDescriptor {
                name: src.name,
                variant: src.variant,
                fit_origin: src.fit_origin,
                root: src.root,
                sticky,
                visual,
                window,
                frame: src.frame,
                copy: src.copy,
                headline: src.headline,
                lead: src.lead,
                overlay: src.overlay,
                hint: src.hint,
                reveal_media: src.reveal_media,
                paper: src.paper,
                paper_hi: src.paper_hi,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/section/registry.rs"]
mod tests;
