// Blog index: instant filters over front matter plus a deep body search
use eframe::egui;

use crate::app::Vitrine;
use crate::content::BlogPost;
use crate::io::StoreCommand;
use crate::nav::Route;
use crate::state::SearchHit;
use crate::style;
use crate::view::widgets;

impl Vitrine {
    pub(crate) fn render_blog(&mut self, ui: &mut egui::Ui) {
        let accent = self.ui.theme.accent();
        let faint = self.ui.theme.faint_text();

        ui.add_space(style::NAV_BAR_OFFSET + 12.0);

        let mut set_category: Option<Option<String>> = None;
        let mut set_tag: Option<Option<String>> = None;
        let mut clear_filters = false;
        let mut start_deep: Option<String> = None;
        let mut close_deep = false;
        let mut open_post: Option<String> = None;

        widgets::centered_column(ui, style::CONTENT_MAX_WIDTH, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Blog").size(30.0).strong());
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(
                        "Notes on software, tools and whatever else is on the bench.",
                    )
                    .size(14.0)
                    .color(faint),
                );
            });
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.blog.query)
                        .hint_text("Search articles...")
                        .desired_width(260.0),
                );
                let can_deep = self.blog.query.trim().len() >= 2;
                if ui
                    .add_enabled(can_deep, egui::Button::new("Search post bodies"))
                    .clicked()
                {
                    start_deep = Some(self.blog.query.trim().to_string());
                }
                if self.blog.has_filters() && widgets::link_label(ui, accent, "Clear").clicked() {
                    clear_filters = true;
                }
            });

            if self.blog.show_deep {
                ui.add_space(8.0);
                egui::Frame::group(ui.style())
                    .inner_margin(egui::Margin::same(10))
                    .corner_radius(6.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            if self.blog.deep_running {
                                ui.spinner();
                                ui.label(format!(
                                    "Searching... ({} scanned)",
                                    self.blog.deep_scanned
                                ));
                            } else {
                                ui.label(
                                    egui::RichText::new(format!(
                                        "{} matches in post bodies",
                                        self.blog.deep_hits.len()
                                    ))
                                    .strong(),
                                );
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.small_button("Close").clicked() {
                                        close_deep = true;
                                    }
                                },
                            );
                        });
                        if !self.blog.deep_hits.is_empty() {
                            ui.add_space(6.0);
                            egui::ScrollArea::vertical()
                                .id_salt("deep_hits")
                                .max_height(220.0)
                                .auto_shrink([false, true])
                                .show(ui, |ui| {
                                    for hit in &self.blog.deep_hits {
                                        let title = self
                                            .content
                                            .snapshot
                                            .post(&hit.slug)
                                            .map(|p| p.title.clone())
                                            .unwrap_or_else(|| hit.slug.clone());
                                        if widgets::link_label(ui, accent, &title).clicked() {
                                            open_post = Some(hit.slug.clone());
                                        }
                                        ui.label(hit_preview(hit, accent, faint));
                                        ui.add_space(6.0);
                                    }
                                });
                        }
                    });
            }

            ui.add_space(10.0);
            let categories = self.content.snapshot.categories();
            if !categories.is_empty() {
                ui.horizontal_wrapped(|ui| {
                    if widgets::filter_chip(ui, "All", self.blog.category.is_none()).clicked() {
                        set_category = Some(None);
                    }
                    for category in &categories {
                        let selected = self.blog.category.as_deref() == Some(category.as_str());
                        if widgets::filter_chip(ui, category, selected).clicked() {
                            set_category =
                                Some(if selected { None } else { Some(category.clone()) });
                        }
                    }
                });
            }
            let tags = self.content.snapshot.tags();
            if !tags.is_empty() {
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in &tags {
                        let selected = self.blog.tag.as_deref() == Some(tag.as_str());
                        if widgets::filter_chip(ui, &format!("#{}", tag), selected).clicked() {
                            set_tag = Some(if selected { None } else { Some(tag.clone()) });
                        }
                    }
                });
            }
        });

        // Applied before the list below so a click lands the same frame
        if clear_filters {
            self.blog.clear_filters();
        }
        if let Some(value) = set_category {
            self.blog.category = value;
        }
        if let Some(value) = set_tag {
            self.blog.tag = value;
        }
        if close_deep {
            self.blog.close_deep();
        }

        ui.add_space(16.0);
        if let Some(detail) = self.content.load_error.clone() {
            widgets::centered_column(ui, style::CONTENT_MAX_WIDTH, |ui| {
                ui.label(
                    egui::RichText::new("Failed to load blog posts. Please try again later.")
                        .size(14.0)
                        .color(ui.visuals().error_fg_color),
                );
                ui.label(egui::RichText::new(detail).size(12.0).color(faint));
            });
        } else if self.content.loading && self.content.snapshot.posts.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.spinner();
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Loading posts...").color(faint));
            });
        } else {
            let filtered = self.blog.filtered(&self.content.snapshot.posts);
            widgets::centered_column(ui, style::CONTENT_MAX_WIDTH, |ui| {
                if filtered.is_empty() {
                    widgets::empty_state(ui, "No blog posts found matching your criteria.");
                } else {
                    for post in &filtered {
                        self.blog_card(ui, post, &mut open_post);
                        ui.add_space(16.0);
                    }
                }
            });
        }
        ui.add_space(24.0);

        if let Some(query) = start_deep {
            self.start_deep_search(query);
        }
        if let Some(slug) = open_post {
            self.navigate(Route::Post(slug));
        }
    }

    fn start_deep_search(&mut self, query: String) {
        self.blog.show_deep = true;
        self.blog.deep_running = true;
        self.blog.deep_scanned = 0;
        self.blog.deep_hits.clear();
        self.send_store(StoreCommand::SearchPosts(query));
    }

    fn blog_card(&self, ui: &mut egui::Ui, post: &BlogPost, open_post: &mut Option<String>) {
        let accent = self.ui.theme.accent();
        let faint = self.ui.theme.faint_text();

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(12))
            .corner_radius(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                if let Some(cover) = &post.cover_image {
                    ui.add(
                        egui::Image::new(self.content_uri(cover))
                            .max_height(style::CARD_IMAGE_HEIGHT)
                            .maintain_aspect_ratio(true)
                            .shrink_to_fit(),
                    );
                    ui.add_space(8.0);
                }
                if !post.category.is_empty() {
                    ui.label(
                        egui::RichText::new(post.category.to_uppercase())
                            .size(11.0)
                            .color(accent),
                    );
                }
                let title = ui.add(
                    egui::Label::new(egui::RichText::new(&post.title).size(18.0).strong())
                        .sense(egui::Sense::click()),
                );
                if title.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if title.clicked() {
                    *open_post = Some(post.slug.clone());
                }

                let mut meta = post.display_date();
                if !post.read_time.is_empty() {
                    meta = format!("{} • {}", meta, post.read_time);
                }
                ui.label(egui::RichText::new(meta).size(12.0).color(faint));

                if !post.excerpt.is_empty() {
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(&post.excerpt).size(13.5));
                }

                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in &post.tags {
                        widgets::tag_chip(ui, tag);
                    }
                });
                if widgets::link_label(ui, accent, "Read More").clicked() {
                    *open_post = Some(post.slug.clone());
                }
            });
    }
}

/// One deep-search hit as a layout job with the matched span in accent
fn hit_preview(hit: &SearchHit, accent: egui::Color32, faint: egui::Color32) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    let font = egui::FontId::proportional(12.5);
    let plain = egui::TextFormat {
        font_id: font.clone(),
        color: faint,
        ..Default::default()
    };
    let marked = egui::TextFormat {
        font_id: font,
        color: accent,
        ..Default::default()
    };

    let line = hit.line.trim_end();
    job.append(&format!("{}: ", hit.line_number), 0.0, plain.clone());
    let start = hit.match_start.min(line.len());
    let end = hit.match_end.clamp(start, line.len());
    // Offsets were found on a lowercased copy, so boundaries can shift on
    // non-ASCII lines; fall back to an unmarked line in that case
    if line.is_char_boundary(start) && line.is_char_boundary(end) {
        job.append(&line[..start], 0.0, plain.clone());
        job.append(&line[start..end], 0.0, marked);
        job.append(&line[end..], 0.0, plain);
    } else {
        job.append(line, 0.0, plain);
    }
    job
}
