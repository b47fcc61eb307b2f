use crate::foundation::core::Progress;

/// Scroll distance over which a section's animation plays out: the
/// section's own height minus the height of its pinned sub-area.
pub fn scrollable_height(section_height: f64, sticky_height: f64) -> f64 {
    section_height - sticky_height
}

/// Clamped normalized progress of the viewport through one section.
///
/// Pure function of current layout and scroll state; recomputed every
/// frame because geometry can change between frames (resize, late-loading
/// media). A degenerate `scrollable <= 0` (pinned area as tall as the
/// section itself) yields progress 0 rather than dividing by zero.
pub fn section_progress(scroll_y: f64, section_top: f64, scrollable: f64) -> Progress {
    if scrollable <= 0.0 {
        return Progress(0.0);
    }
    Progress::new((scroll_y - section_top) / scrollable)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/progress.rs"]
mod tests;
