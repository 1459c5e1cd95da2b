// Fixed bar over the public pages, plus the compact-width menu overlay
use std::time::Instant;

use eframe::egui;

use crate::app::Vitrine;
use crate::nav::{Route, Section};
use crate::style::{self, Theme};

impl Vitrine {
    pub(crate) fn render_nav_bar(&mut self, ctx: &egui::Context, now: Instant) {
        let theme = self.ui.theme;
        let accent = theme.accent();
        let route = self.session.router.route().clone();
        let hosting = route.hosts_sections();
        let scrolled = !hosting || self.session.view.offset > 0.0;
        let active = self.session.navigator.as_ref().map(|nav| nav.active());
        let width = ctx.screen_rect().width();
        let compact = width < style::COMPACT_BREAKPOINT;
        let menu_open = self.session.menu_open;
        let initials = brand_initials(&self.content.snapshot.profile.name);

        let mut section_click: Option<Section> = None;
        let mut route_click: Option<Route> = None;
        let mut toggle_theme = false;
        let mut toggle_menu = false;

        egui::Area::new("nav_bar".into())
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                egui::Frame::new()
                    .fill(theme.bar_fill(scrolled))
                    .inner_margin(egui::Margin::symmetric(16, 0))
                    .show(ui, |ui| {
                        ui.allocate_ui_with_layout(
                            egui::vec2(width - 32.0, style::NAV_BAR_OFFSET),
                            egui::Layout::left_to_right(egui::Align::Center),
                            |ui| {
                                let brand = ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(&initials)
                                            .size(20.0)
                                            .strong()
                                            .color(accent),
                                    )
                                    .sense(egui::Sense::click()),
                                );
                                if brand.hovered() {
                                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                                }
                                if brand.clicked() {
                                    if hosting {
                                        section_click = Some(Section::Home);
                                    } else {
                                        route_click = Some(Route::Home);
                                    }
                                }
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.spacing_mut().item_spacing.x = 16.0;
                                        let icon = match theme {
                                            Theme::Light => "🌙",
                                            Theme::Dark => "☀",
                                        };
                                        if ui.add(egui::Button::new(icon).frame(false)).clicked() {
                                            toggle_theme = true;
                                        }
                                        if compact {
                                            if ui
                                                .add(
                                                    egui::Button::new(
                                                        egui::RichText::new("☰").size(18.0),
                                                    )
                                                    .frame(false),
                                                )
                                                .clicked()
                                            {
                                                toggle_menu = true;
                                            }
                                        } else {
                                            // Laid right to left, so Blog goes first to
                                            // end up rightmost
                                            let blog_active =
                                                matches!(route, Route::Blog | Route::Post(_));
                                            if nav_link(ui, "Blog", blog_active, accent).clicked()
                                            {
                                                route_click = Some(Route::Blog);
                                            }
                                            for section in Section::ALL.iter().rev() {
                                                let selected =
                                                    hosting && active == Some(*section);
                                                if nav_link(
                                                    ui,
                                                    section.label(),
                                                    selected,
                                                    accent,
                                                )
                                                .clicked()
                                                {
                                                    section_click = Some(*section);
                                                }
                                            }
                                        }
                                    },
                                );
                            },
                        );
                    });
            });

        if compact && menu_open {
            egui::Area::new("nav_menu".into())
                .order(egui::Order::Foreground)
                .fixed_pos(egui::pos2(0.0, style::NAV_BAR_OFFSET))
                .show(ctx, |ui| {
                    egui::Frame::popup(&ctx.style()).show(ui, |ui| {
                        ui.set_width(width - 20.0);
                        for section in Section::ALL {
                            let selected = hosting && active == Some(section);
                            if nav_link(ui, section.label(), selected, accent).clicked() {
                                section_click = Some(section);
                            }
                        }
                        let blog_active = matches!(route, Route::Blog | Route::Post(_));
                        if nav_link(ui, "Blog", blog_active, accent).clicked() {
                            route_click = Some(Route::Blog);
                        }
                    });
                });
        }

        if !compact {
            self.session.menu_open = false;
        }
        if toggle_menu {
            self.session.menu_open = !self.session.menu_open;
        }
        if toggle_theme {
            self.toggle_theme(ctx);
        }
        if let Some(section) = section_click {
            self.section_link_clicked(section, now);
        }
        if let Some(route) = route_click {
            self.navigate(route);
        }
    }

    /// Floating return-to-top button, shown once the page is well scrolled
    pub(crate) fn render_scroll_top(&mut self, ctx: &egui::Context, now: Instant) {
        if self.session.view.offset <= style::SCROLL_TOP_THRESHOLD {
            return;
        }
        let mut clicked = false;
        egui::Area::new("scroll_top".into())
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0))
            .show(ctx, |ui| {
                if ui
                    .add(
                        egui::Button::new(egui::RichText::new("↑").size(18.0))
                            .min_size(egui::vec2(36.0, 36.0))
                            .corner_radius(18.0),
                    )
                    .clicked()
                {
                    clicked = true;
                }
            });
        if clicked {
            self.scroll_to_top(now);
        }
    }
}

fn nav_link(ui: &mut egui::Ui, label: &str, selected: bool, accent: egui::Color32) -> egui::Response {
    let text = if selected {
        egui::RichText::new(label).size(14.0).strong().color(accent)
    } else {
        egui::RichText::new(label).size(14.0)
    };
    let response = ui.add(egui::Label::new(text).sense(egui::Sense::click()));
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response
}

/// "Alex Morgan" becomes the brand mark "AM"
pub(crate) fn brand_initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();
    if initials.is_empty() {
        "~".to_string()
    } else {
        initials.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_initials() {
        assert_eq!(brand_initials("Alex Morgan"), "AM");
        assert_eq!(brand_initials("ada"), "A");
        assert_eq!(brand_initials(""), "~");
    }
}
