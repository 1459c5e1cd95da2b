// Single post page rendered from its markdown body
use eframe::egui;

use crate::app::Vitrine;
use crate::nav::Route;
use crate::style;
use crate::view::widgets;

impl Vitrine {
    pub(crate) fn render_post(&mut self, ui: &mut egui::Ui, slug: &str) {
        let theme = self.ui.theme;
        let accent = theme.accent();
        let faint = theme.faint_text();

        ui.add_space(style::NAV_BAR_OFFSET + 12.0);

        let mut go_back = false;
        widgets::centered_column(ui, style::CONTENT_MAX_WIDTH, |ui| {
            if widgets::link_label(ui, accent, "← Back to Blog").clicked() {
                go_back = true;
            }
            ui.add_space(12.0);

            let Some(post) = self.content.snapshot.post(slug) else {
                widgets::empty_state(ui, "Post not found. It may have been removed.");
                return;
            };

            ui.label(egui::RichText::new(&post.title).size(30.0).strong());
            ui.add_space(6.0);

            let author = if post.author.is_empty() {
                self.content.snapshot.profile.name.as_str()
            } else {
                post.author.as_str()
            };
            let mut meta = format!("By {} • {}", author, post.display_date());
            if !post.read_time.is_empty() {
                meta = format!("{} • {}", meta, post.read_time);
            }
            if !post.category.is_empty() {
                meta = format!("{} • {}", meta, post.category);
            }
            ui.label(egui::RichText::new(meta).size(12.5).color(faint));
            ui.add_space(12.0);

            if let Some(cover) = &post.cover_image {
                ui.add(
                    egui::Image::new(self.content_uri(cover))
                        .max_width(ui.available_width())
                        .maintain_aspect_ratio(true)
                        .shrink_to_fit(),
                );
                ui.add_space(12.0);
            }

            // Scoped so the tighter line spacing stays inside the body
            ui.scope(|ui| {
                self.markdown.render(ui, &post.body, theme);
            });

            if !post.tags.is_empty() {
                ui.add_space(16.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in &post.tags {
                        widgets::tag_chip(ui, tag);
                    }
                });
            }
        });
        ui.add_space(32.0);

        if go_back {
            self.navigate(Route::Blog);
        }
    }
}
