// Small shared widgets used across the public and admin pages

use eframe::egui;

/// Centered section title with a short accent rule under it
pub fn section_heading(ui: &mut egui::Ui, accent: egui::Color32, title: &str) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(title).size(26.0).strong());
        ui.add_space(6.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(48.0, 3.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 2.0, accent);
    });
    ui.add_space(18.0);
}

/// Rounded toggle chip for category, tag and technology filters
pub fn filter_chip(ui: &mut egui::Ui, label: &str, selected: bool) -> egui::Response {
    let fill = if selected {
        ui.visuals().selection.bg_fill
    } else {
        ui.visuals().faint_bg_color
    };
    ui.add(
        egui::Button::new(egui::RichText::new(label).size(13.0))
            .fill(fill)
            .corner_radius(12.0),
    )
}

/// Passive chip for the tag rows on cards
pub fn tag_chip(ui: &mut egui::Ui, label: &str) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(label).size(12.0));
        });
}

/// Accent-colored clickable text, styled like a web link
pub fn link_label(ui: &mut egui::Ui, accent: egui::Color32, text: &str) -> egui::Response {
    let response = ui.add(
        egui::Label::new(egui::RichText::new(text).color(accent))
            .sense(egui::Sense::click()),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// Validation message under a form field
pub fn field_error(ui: &mut egui::Ui, error: Option<&String>) {
    if let Some(text) = error {
        ui.label(
            egui::RichText::new(text)
                .size(12.0)
                .color(ui.visuals().error_fg_color),
        );
    }
}

/// Centered placeholder for an empty list
pub fn empty_state(ui: &mut egui::Ui, text: &str) {
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(text).italics());
    });
    ui.add_space(24.0);
}

/// Horizontal rule between home page sections
pub fn section_divider(ui: &mut egui::Ui) {
    ui.add_space(crate::style::SECTION_GAP / 2.0);
    ui.separator();
    ui.add_space(crate::style::SECTION_GAP / 2.0);
}

/// Fixed-width column centered in the available width; page content uses
/// this so text does not stretch across very wide windows
pub fn centered_column<R>(
    ui: &mut egui::Ui,
    width: f32,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let width = width.min(ui.available_width());
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add(ui)
        })
        .inner
    })
    .inner
}

/// Cut `text` at a character boundary, appending an ellipsis if needed
pub fn snippet(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    // back off to the last space so words stay whole
    let trimmed = match cut.rfind(' ') {
        Some(idx) => &cut[..idx],
        None => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_respects_char_boundaries() {
        assert_eq!(snippet("short", 10), "short");
        assert_eq!(snippet("alpha beta gamma", 12), "alpha beta…");
        // multi-byte characters must not be split
        let s = snippet("héllo wörld déjà vu encore", 14);
        assert!(s.ends_with('…'));
        assert!(s.len() < "héllo wörld déjà vu encore".len());
    }
}
