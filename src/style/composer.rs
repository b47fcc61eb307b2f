use std::f64::consts::PI;

use crate::{
    foundation::core::{Progress, Rect, Vec2, Viewport},
    layout::probe::LayoutProbe,
    section::model::{BehaviorVariant, FitOrigin, SectionDescriptor},
    style::state::{ElementStyle, StyleWrite, Transform},
    timeline::config::{StyleTuning, TimelineConfig},
};

/// Compose the complete ordered style state for one section at one
/// progress value.
///
/// Pure function of (descriptor, progress, viewport, geometry,
/// configuration): applying it twice with identical inputs yields
/// identical output, which keeps redundant frame scheduling harmless. All
/// property computations complete before the write list is returned; the
/// caller performs the writes.
pub fn compose_section<P: LayoutProbe>(
    desc: &SectionDescriptor,
    p: Progress,
    viewport: Viewport,
    probe: &P,
    config: &TimelineConfig,
    tuning: &StyleTuning,
) -> Vec<StyleWrite> {
    let mut writes = Vec::new();
    compose_copy(desc, p, config, tuning, &mut writes);
    compose_hint(desc, p, config, &mut writes);
    compose_overlay(desc, p, config, tuning, &mut writes);
    compose_frame(desc, p, viewport, config, tuning, &mut writes);
    compose_visual(desc, p, viewport, probe, config, tuning, &mut writes);
    writes
}

/// Copy fades, lifts and blurs out early so only the visual remains.
fn compose_copy(
    desc: &SectionDescriptor,
    p: Progress,
    config: &TimelineConfig,
    tuning: &StyleTuning,
    writes: &mut Vec<StyleWrite>,
) {
    let Some(copy) = desc.copy else {
        return;
    };
    let e = config.copy_fade.eval(p);

    writes.push(StyleWrite {
        target: copy,
        style: ElementStyle {
            opacity: Some(1.0 - e),
            transform: Some(Transform::fit(
                Vec2::new(0.0, -tuning.copy.lift_px * e),
                1.0,
            )),
            blur_px: Some(tuning.copy.blur_px * e),
            interactive: Some(e <= tuning.copy.interactive_cutoff),
            ..ElementStyle::default()
        },
    });

    // Micro letter-spacing on the headline and lead, driven by the same
    // window.
    if let Some(headline) = desc.headline {
        writes.push(StyleWrite {
            target: headline,
            style: ElementStyle {
                letter_spacing_em: Some(tuning.copy.headline_tracking_em.lerp(e)),
                ..ElementStyle::default()
            },
        });
    }
    if let Some(lead) = desc.lead {
        writes.push(StyleWrite {
            target: lead,
            style: ElementStyle {
                letter_spacing_em: Some(tuning.copy.lead_tracking_em.lerp(e)),
                ..ElementStyle::default()
            },
        });
    }
}

fn compose_hint(
    desc: &SectionDescriptor,
    p: Progress,
    config: &TimelineConfig,
    writes: &mut Vec<StyleWrite>,
) {
    let Some(hint) = desc.hint else {
        return;
    };
    writes.push(StyleWrite {
        target: hint,
        style: ElementStyle {
            opacity: Some(1.0 - config.hint_fade.eval(p)),
            ..ElementStyle::default()
        },
    });
}

/// Overlay settles across the broad window, then intensifies across the
/// exit window. One continuous formula and one write per frame; the settle
/// window closes before the exit window opens, so the composed curve is
/// seamless.
fn compose_overlay(
    desc: &SectionDescriptor,
    p: Progress,
    config: &TimelineConfig,
    tuning: &StyleTuning,
    writes: &mut Vec<StyleWrite>,
) {
    let Some(overlay) = desc.overlay else {
        return;
    };
    let settled = tuning.overlay.opacity.lerp(config.overlay_settle.eval(p));
    let opacity = lerp(settled, tuning.overlay.exit_opacity, config.exit.eval(p));
    writes.push(StyleWrite {
        target: overlay,
        style: ElementStyle {
            opacity: Some(opacity),
            ..ElementStyle::default()
        },
    });
}

/// Frame chrome fades in, then settles into place with a micro-scale pop
/// while the matte inset is revealed.
fn compose_frame(
    desc: &SectionDescriptor,
    p: Progress,
    viewport: Viewport,
    config: &TimelineConfig,
    tuning: &StyleTuning,
    writes: &mut Vec<StyleWrite>,
) {
    let Some(frame) = desc.frame else {
        return;
    };
    let reveal = config.frame_reveal.eval(p);
    let settle = config.frame_settle.eval(p);
    let lift_px = tuning.frame.lift_vh / 100.0 * viewport.height;

    writes.push(StyleWrite {
        target: frame,
        style: ElementStyle {
            opacity: Some(reveal),
            transform: Some(Transform::fit(
                Vec2::new(0.0, lift_px * (1.0 - settle)),
                tuning.frame.settle_scale.lerp(settle),
            )),
            matte_inset_px: Some(tuning.frame.matte_inset_px * settle),
            ..ElementStyle::default()
        },
    });
}

/// The primary fit transform plus the variant-specific tracks.
fn compose_visual<P: LayoutProbe>(
    desc: &SectionDescriptor,
    p: Progress,
    viewport: Viewport,
    probe: &P,
    config: &TimelineConfig,
    tuning: &StyleTuning,
    writes: &mut Vec<StyleWrite>,
) {
    let start = match desc.fit_origin {
        FitOrigin::Viewport => viewport.stage_rect(),
        FitOrigin::Visual => probe.rect(desc.visual),
    };
    let end = probe.rect(desc.window);

    let e_fit = config.fit.eval(p);
    let delta = (end.center() - start.center()) * e_fit;

    // Contain-fit: the media never exceeds the destination frame on either
    // axis. A single sinusoidal pop rides on top, vanishing at both
    // endpoints since sin(0) = sin(pi) = 0.
    let pop = 1.0 + tuning.fit.pop_scale * (e_fit * PI).sin();
    let scale = lerp(1.0, contain_scale(start, end), e_fit) * pop;

    let mut transform = Transform::fit(delta, scale);
    let mut opacity = 1.0;
    let mut blur_px = 0.0;

    match desc.variant {
        BehaviorVariant::StandardFit | BehaviorVariant::CoverReveal => {}
        BehaviorVariant::ExitDissolve => {
            let e = config.exit.eval(p);
            opacity = lerp(1.0, 0.0, e);
            blur_px = tuning.exit.blur_px * e;
        }
        BehaviorVariant::ExitToss => {
            // Activates only once the toss window's own local parameter is
            // greater than zero, using values computed within this pass.
            let e = config.toss.eval(p);
            if e > 0.0 {
                let t = &tuning.toss;
                let wobble = (e * PI * t.wobble_cycles).sin() * (1.0 - e) * t.wobble_amp_px;
                transform = Transform {
                    translate: Vec2::new(delta.x + wobble, delta.y + t.lift_px.lerp(e)),
                    scale,
                    rotate_x_deg: t.rot_x_deg.lerp(e),
                    rotate_z_deg: t.rot_z_deg.lerp(e),
                    squeeze: Vec2::new(t.squeeze_x.lerp(e), t.squeeze_y.lerp(e)),
                };
            }
        }
    }

    writes.push(StyleWrite {
        target: desc.visual,
        style: ElementStyle {
            transform: Some(transform),
            opacity: Some(opacity),
            blur_px: Some(blur_px),
            border_radius_px: Some(tuning.fit.corner_radius_px * config.rounding.eval(p)),
            ..ElementStyle::default()
        },
    });

    if desc.variant == BehaviorVariant::CoverReveal
        && let Some(media) = desc.reveal_media
    {
        let zoom = if viewport.width <= tuning.fit.narrow_viewport_px {
            tuning.fit.cover_zoom_narrow
        } else {
            tuning.fit.cover_zoom
        };
        let e = config.cover_reveal.eval(p);
        writes.push(StyleWrite {
            target: media,
            style: ElementStyle {
                transform: Some(Transform::fit(Vec2::new(0.0, 0.0), lerp(zoom, 1.0, e))),
                ..ElementStyle::default()
            },
        });
    }

    if desc.variant == BehaviorVariant::ExitToss {
        compose_paper(desc, p, config, tuning, writes);
    }
}

/// Decorative paper layers for the page-toss exit.
fn compose_paper(
    desc: &SectionDescriptor,
    p: Progress,
    config: &TimelineConfig,
    tuning: &StyleTuning,
    writes: &mut Vec<StyleWrite>,
) {
    let e = config.toss.eval(p);
    let t = &tuning.toss;

    if let Some(paper) = desc.paper {
        writes.push(StyleWrite {
            target: paper,
            style: ElementStyle {
                opacity: Some(t.paper_opacity.lerp(e)),
                transform: Some(Transform {
                    translate: Vec2::new(0.0, t.paper_lift_px.lerp(e)),
                    rotate_z_deg: t.paper_rot_deg.lerp(e),
                    ..Transform::IDENTITY
                }),
                ..ElementStyle::default()
            },
        });
    }
    if let Some(paper_hi) = desc.paper_hi {
        writes.push(StyleWrite {
            target: paper_hi,
            style: ElementStyle {
                opacity: Some(t.paper_hi_opacity.lerp(e)),
                ..ElementStyle::default()
            },
        });
    }
}

fn contain_scale(start: Rect, end: Rect) -> f64 {
    // Degenerate start rectangle: fall back to no scaling rather than an
    // infinite ratio.
    if start.width() <= 0.0 || start.height() <= 0.0 {
        return 1.0;
    }
    (end.width() / start.width()).min(end.height() / start.height())
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/style/composer.rs"]
mod tests;
