// Paints the node mesh behind the hero

use eframe::egui;
use std::time::Instant;

use crate::state::ParticleField;
use crate::style::{Theme, LINK_DISTANCE};

/// Draw connection lines and nodes into `rect`. The painter must already be
/// clipped to it; node positions are relative to the rect origin.
pub fn paint_particles(
    painter: &egui::Painter,
    rect: egui::Rect,
    field: &ParticleField,
    theme: Theme,
    now: Instant,
) {
    let accent = theme.accent();
    let base = match theme {
        Theme::Light => egui::Color32::from_gray(150),
        Theme::Dark => egui::Color32::from_gray(120),
    };
    let nodes = field.nodes();

    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            let dist = a.pos.distance(b.pos);
            if dist >= LINK_DISTANCE {
                continue;
            }
            let lit = a.lit(now) || b.lit(now);
            let strength = if lit { 0.8 } else { 0.3 };
            let opacity = (1.0 - dist / LINK_DISTANCE) * strength;
            let color = if lit { accent } else { base };
            painter.line_segment(
                [rect.min + a.pos.to_vec2(), rect.min + b.pos.to_vec2()],
                egui::Stroke::new(1.0, color.gamma_multiply(opacity)),
            );
        }
    }

    for node in nodes {
        let center = rect.min + node.pos.to_vec2();
        if node.lit(now) {
            painter.circle_filled(center, 4.0, accent);
        } else {
            painter.circle_filled(center, 2.0, base.gamma_multiply(0.6));
        }
    }
}
