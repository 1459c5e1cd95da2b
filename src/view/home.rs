// The single-scroll landing page: hero, about, projects and contact
use std::time::Instant;

use chrono::Datelike;
use eframe::egui;

use crate::app::Vitrine;
use crate::content::Project;
use crate::nav::{AdminPage, Route, Section};
use crate::state::ContactNotice;
use crate::style;
use crate::view::{background, widgets};

impl Vitrine {
    pub(crate) fn render_home(&mut self, ui: &mut egui::Ui, now: Instant) {
        // Section tops are measured relative to the content origin, before
        // the nav bar padding, so they line up with the scroll offset
        let origin = ui.next_widget_position().y;
        self.session.view.section_tops.clear();
        ui.add_space(
            self.session
                .scroll_padding
                .unwrap_or(style::NAV_BAR_OFFSET),
        );

        self.record_section(ui, Section::Home, origin);
        self.render_hero(ui, now);

        widgets::section_divider(ui);
        self.record_section(ui, Section::About, origin);
        self.render_about(ui);

        widgets::section_divider(ui);
        self.record_section(ui, Section::Projects, origin);
        self.render_projects_section(ui);

        widgets::section_divider(ui);
        self.record_section(ui, Section::Contact, origin);
        self.render_contact(ui);

        self.render_footer(ui);
    }

    fn record_section(&mut self, ui: &egui::Ui, section: Section, origin: f32) {
        let top = ui.next_widget_position().y - origin;
        self.session.view.section_tops.push((section, top));
    }

    fn render_hero(&mut self, ui: &mut egui::Ui, now: Instant) {
        let theme = self.ui.theme;
        let accent = theme.accent();
        let faint = theme.faint_text();

        let height = (ui.ctx().screen_rect().height() - style::NAV_BAR_OFFSET)
            .max(style::HERO_MIN_HEIGHT);
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::hover());

        self.particles.step(now, rect.size());
        let painter = ui.painter_at(rect);
        background::paint_particles(&painter, rect, &self.particles, theme, now);

        let mut open_request: Option<String> = None;
        let mut scroll_target: Option<Section> = None;

        let profile = &self.content.snapshot.profile;
        let mut social: Vec<(&str, String)> = Vec::new();
        if !profile.github.is_empty() {
            social.push(("GitHub", profile.github.clone()));
        }
        if !profile.linkedin.is_empty() {
            social.push(("LinkedIn", profile.linkedin.clone()));
        }
        if !profile.email.is_empty() {
            social.push(("Email", format!("mailto:{}", profile.email)));
        }

        let mut content = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect.shrink2(egui::vec2(16.0, 0.0)))
                .layout(egui::Layout::top_down(egui::Align::Center)),
        );
        content.add_space(height * 0.22);
        content.label(egui::RichText::new(&profile.name).size(40.0).strong());
        content.add_space(4.0);
        content.label(
            egui::RichText::new(&profile.headline)
                .size(20.0)
                .color(accent),
        );
        content.add_space(10.0);
        content.label(
            egui::RichText::new(&profile.tagline)
                .size(15.0)
                .color(faint),
        );

        if !profile.highlights.is_empty() {
            content.add_space(24.0);
            let row_width = 520.0_f32.min(content.available_width());
            content.allocate_ui_with_layout(
                egui::vec2(row_width, 60.0),
                egui::Layout::left_to_right(egui::Align::Center),
                |ui| {
                    ui.columns(profile.highlights.len(), |columns| {
                        for (column, highlight) in columns.iter_mut().zip(&profile.highlights) {
                            column.vertical_centered(|ui| {
                                ui.label(
                                    egui::RichText::new(&highlight.number)
                                        .size(24.0)
                                        .strong()
                                        .color(accent),
                                );
                                ui.label(
                                    egui::RichText::new(&highlight.label)
                                        .size(12.0)
                                        .color(faint),
                                );
                            });
                        }
                    });
                },
            );
        }

        if !social.is_empty() {
            content.add_space(20.0);
            let row_width = social.len() as f32 * 84.0;
            content.allocate_ui_with_layout(
                egui::vec2(row_width, 30.0),
                egui::Layout::left_to_right(egui::Align::Center),
                |ui| {
                    for (label, url) in &social {
                        if ui
                            .add(egui::Button::new(egui::RichText::new(*label).size(13.0)))
                            .clicked()
                        {
                            open_request = Some(url.clone());
                        }
                    }
                },
            );
        }

        content.add_space(24.0);
        content.allocate_ui_with_layout(
            egui::vec2(250.0, 34.0),
            egui::Layout::left_to_right(egui::Align::Center),
            |ui| {
                if ui
                    .add(egui::Button::new(
                        egui::RichText::new("View My Work").size(14.0),
                    ))
                    .clicked()
                {
                    scroll_target = Some(Section::Projects);
                }
                if ui
                    .add(egui::Button::new(
                        egui::RichText::new("Get in Touch").size(14.0),
                    ))
                    .clicked()
                {
                    scroll_target = Some(Section::Contact);
                }
            },
        );

        // Bouncing chevron at the bottom edge doubles as a scroll shortcut
        let hint_rect = egui::Rect::from_center_size(
            egui::pos2(rect.center().x, rect.bottom() - 28.0),
            egui::vec2(32.0, 32.0),
        );
        let hint = ui.interact(hint_rect, ui.id().with("hero_scroll_hint"), egui::Sense::click());
        let bob = (ui.input(|i| i.time) as f32 * 2.0).sin() * 3.0;
        painter.text(
            hint_rect.center() + egui::vec2(0.0, bob),
            egui::Align2::CENTER_CENTER,
            "⌄",
            egui::FontId::proportional(26.0),
            if hint.hovered() { accent } else { faint },
        );
        if hint.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        if hint.clicked() {
            scroll_target = Some(Section::About);
        }

        if let Some(url) = open_request {
            self.open_external(&url);
        }
        if let Some(section) = scroll_target {
            self.plain_scroll_to(section, now);
        }
    }

    fn render_about(&mut self, ui: &mut egui::Ui) {
        let accent = self.ui.theme.accent();
        let faint = self.ui.theme.faint_text();
        let profile = &self.content.snapshot.profile;

        widgets::section_heading(ui, accent, "About Me");
        widgets::centered_column(ui, style::CONTENT_MAX_WIDTH, |ui| {
            for paragraph in &profile.bio {
                ui.label(egui::RichText::new(paragraph).size(14.5));
                ui.add_space(8.0);
            }

            if !profile.skills.is_empty() {
                ui.add_space(12.0);
                ui.label(egui::RichText::new("Skills").size(18.0).strong());
                ui.add_space(8.0);
                for group in &profile.skills {
                    ui.label(
                        egui::RichText::new(&group.label)
                            .size(13.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(2.0);
                    ui.horizontal_wrapped(|ui| {
                        for item in &group.items {
                            widgets::tag_chip(ui, item);
                        }
                    });
                    ui.add_space(8.0);
                }
            }

            if !profile.experience.is_empty() {
                ui.add_space(12.0);
                ui.label(egui::RichText::new("Experience").size(18.0).strong());
                ui.add_space(8.0);
                for stint in &profile.experience {
                    ui.label(egui::RichText::new(&stint.role).size(15.0).strong());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&stint.org).size(13.0).color(accent));
                        ui.label(egui::RichText::new(&stint.period).size(12.5).color(faint));
                    });
                    if !stint.summary.is_empty() {
                        ui.label(egui::RichText::new(&stint.summary).size(13.5));
                    }
                    ui.add_space(10.0);
                }
            }
        });
    }

    fn render_projects_section(&mut self, ui: &mut egui::Ui) {
        let accent = self.ui.theme.accent();

        widgets::section_heading(ui, accent, "Projects");

        let mut toggle_tag: Option<String> = None;
        let mut clear_filters = false;
        let all_tags = self.content.snapshot.project_tags();
        widgets::centered_column(ui, style::CONTENT_MAX_WIDTH, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.projects.query)
                        .hint_text("Filter projects...")
                        .desired_width(200.0),
                );
                if widgets::filter_chip(ui, "All", !self.projects.has_filters()).clicked() {
                    clear_filters = true;
                }
                for tag in &all_tags {
                    let selected = self.projects.selected.contains(tag);
                    if widgets::filter_chip(ui, tag, selected).clicked() {
                        toggle_tag = Some(tag.clone());
                    }
                }
            });
        });
        // Applied before the grid below so a click lands the same frame
        if clear_filters {
            self.projects.clear_filters();
        }
        if let Some(tag) = toggle_tag {
            self.projects.toggle_tag(&tag);
        }

        let mut toggle_expand: Option<String> = None;
        let mut open_request: Option<String> = None;
        let two_columns = ui.available_width() >= style::COMPACT_BREAKPOINT;
        let filtered = self.projects.filtered(&self.content.snapshot.projects);
        widgets::centered_column(ui, style::CONTENT_MAX_WIDTH, |ui| {
            ui.add_space(16.0);
            if filtered.is_empty() {
                widgets::empty_state(ui, "No projects found matching your criteria.");
            } else if two_columns {
                for pair in filtered.chunks(2) {
                    ui.columns(2, |columns| {
                        for (column, project) in columns.iter_mut().zip(pair) {
                            self.project_card(
                                column,
                                project,
                                &mut toggle_expand,
                                &mut open_request,
                            );
                        }
                    });
                    ui.add_space(16.0);
                }
            } else {
                for project in &filtered {
                    self.project_card(ui, project, &mut toggle_expand, &mut open_request);
                    ui.add_space(16.0);
                }
            }
        });

        if let Some(slug) = toggle_expand {
            self.projects.toggle_expanded(&slug);
        }
        if let Some(url) = open_request {
            self.open_external(&url);
        }
    }

    fn project_card(
        &self,
        ui: &mut egui::Ui,
        project: &Project,
        toggle_expand: &mut Option<String>,
        open_request: &mut Option<String>,
    ) {
        let accent = self.ui.theme.accent();
        let faint = self.ui.theme.faint_text();
        let expanded = self.projects.expanded.as_deref() == Some(project.slug.as_str());

        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(12))
            .corner_radius(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                if !project.image.is_empty() {
                    ui.add(
                        egui::Image::new(self.content_uri(&project.image))
                            .max_height(style::CARD_IMAGE_HEIGHT)
                            .maintain_aspect_ratio(true)
                            .shrink_to_fit(),
                    );
                    ui.add_space(8.0);
                }
                if !project.category.is_empty() {
                    ui.label(
                        egui::RichText::new(project.category.to_uppercase())
                            .size(11.0)
                            .color(accent),
                    );
                }
                ui.label(egui::RichText::new(&project.title).size(17.0).strong());
                ui.add_space(4.0);

                let short = widgets::snippet(&project.summary, 160);
                if expanded || short == project.summary {
                    ui.label(egui::RichText::new(&project.summary).size(13.5));
                    if expanded && widgets::link_label(ui, accent, "Show Less").clicked() {
                        *toggle_expand = Some(project.slug.clone());
                    }
                } else {
                    ui.label(egui::RichText::new(short).size(13.5));
                    if widgets::link_label(ui, accent, "Read More").clicked() {
                        *toggle_expand = Some(project.slug.clone());
                    }
                }

                if !project.tags.is_empty() {
                    ui.add_space(6.0);
                    ui.horizontal_wrapped(|ui| {
                        for tag in &project.tags {
                            widgets::tag_chip(ui, tag);
                        }
                    });
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if !project.repo_url.is_empty() && ui.button("Code").clicked() {
                        *open_request = Some(project.repo_url.clone());
                    }
                    if project.private {
                        ui.label(
                            egui::RichText::new("Private deployment")
                                .size(12.0)
                                .italics()
                                .color(faint),
                        );
                    } else if !project.demo_url.is_empty() && ui.button("Live Demo").clicked() {
                        *open_request = Some(project.demo_url.clone());
                    }
                });
                if !project.private {
                    if let Some(credentials) = &project.credentials {
                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(format!(
                                "Demo login: {} / {}",
                                credentials.username, credentials.password
                            ))
                            .size(12.0)
                            .color(faint),
                        );
                    }
                }
            });
    }

    fn render_contact(&mut self, ui: &mut egui::Ui) {
        let accent = self.ui.theme.accent();
        let faint = self.ui.theme.faint_text();

        widgets::section_heading(ui, accent, "Get In Touch");

        let mut submit = false;
        let two_columns = ui.available_width() >= style::COMPACT_BREAKPOINT;
        let profile = &self.content.snapshot.profile;
        widgets::centered_column(ui, style::CONTENT_MAX_WIDTH, |ui| {
            if two_columns {
                ui.columns(2, |columns| {
                    contact_details(&mut columns[0], profile, accent, faint);
                    contact_form(&mut columns[1], &mut self.contact, &mut submit);
                });
            } else {
                contact_details(ui, profile, accent, faint);
                ui.add_space(16.0);
                contact_form(ui, &mut self.contact, &mut submit);
            }
        });

        if submit && self.contact.validate() {
            // The worker assigns the id; the form only supplies the fields
            let message = self
                .contact
                .build(String::new(), chrono::Local::now().to_rfc3339());
            self.contact.sending = true;
            self.submit_contact_message(message);
        }
    }

    fn render_footer(&mut self, ui: &mut egui::Ui) {
        let faint = self.ui.theme.faint_text();
        let name = self.content.snapshot.profile.name.clone();
        let mut admin_clicked = false;

        ui.add_space(32.0);
        ui.separator();
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let year = chrono::Local::now().year();
            ui.label(
                egui::RichText::new(format!("© {} {}. All rights reserved.", year, name))
                    .size(12.5)
                    .color(faint),
            );
            ui.add_space(4.0);
            let response = ui.add(
                egui::Label::new(egui::RichText::new("Admin").size(11.0).color(faint))
                    .sense(egui::Sense::click()),
            );
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            if response.clicked() {
                admin_clicked = true;
            }
        });
        ui.add_space(16.0);

        if admin_clicked {
            self.navigate(Route::Admin(AdminPage::Dashboard));
        }
    }
}

fn contact_details(
    ui: &mut egui::Ui,
    profile: &crate::content::SiteProfile,
    accent: egui::Color32,
    faint: egui::Color32,
) {
    ui.label(
        egui::RichText::new("Have a project in mind, or just want to say hello? Drop me a line.")
            .size(14.0),
    );
    ui.add_space(12.0);
    let rows = [
        ("Email", &profile.email),
        ("Phone", &profile.phone),
        ("Location", &profile.location),
    ];
    for (label, value) in rows {
        if value.is_empty() {
            continue;
        }
        ui.label(
            egui::RichText::new(label)
                .size(12.0)
                .strong()
                .color(accent),
        );
        ui.label(egui::RichText::new(value).size(13.5).color(faint));
        ui.add_space(8.0);
    }
}

fn contact_form(ui: &mut egui::Ui, form: &mut crate::state::ContactForm, submit: &mut bool) {
    let sending = form.sending;
    ui.add_enabled_ui(!sending, |ui| {
        ui.label(egui::RichText::new("Name").size(12.5).strong());
        if ui
            .add(
                egui::TextEdit::singleline(&mut form.name)
                    .hint_text("Your name")
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            form.errors.name = None;
        }
        widgets::field_error(ui, form.errors.name.as_ref());
        ui.add_space(6.0);

        ui.label(egui::RichText::new("Email").size(12.5).strong());
        if ui
            .add(
                egui::TextEdit::singleline(&mut form.email)
                    .hint_text("you@example.com")
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            form.errors.email = None;
        }
        widgets::field_error(ui, form.errors.email.as_ref());
        ui.add_space(6.0);

        ui.label(egui::RichText::new("Subject").size(12.5).strong());
        if ui
            .add(
                egui::TextEdit::singleline(&mut form.subject)
                    .hint_text("What is this about?")
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            form.errors.subject = None;
        }
        widgets::field_error(ui, form.errors.subject.as_ref());
        ui.add_space(6.0);

        ui.label(egui::RichText::new("Message").size(12.5).strong());
        if ui
            .add(
                egui::TextEdit::multiline(&mut form.message)
                    .hint_text("Your message")
                    .desired_rows(5)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            form.errors.message = None;
        }
        widgets::field_error(ui, form.errors.message.as_ref());
    });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if sending {
            ui.spinner();
            ui.label("Sending...");
        } else if ui
            .add(egui::Button::new(egui::RichText::new("Send Message").size(14.0)))
            .clicked()
        {
            *submit = true;
        }
    });

    if let Some((notice, _)) = &form.notice {
        let (text, color) = match notice {
            ContactNotice::Sent => (
                "Message sent successfully!",
                egui::Color32::from_rgb(34, 197, 94),
            ),
            ContactNotice::Failed => (
                "Failed to send message. Please try again.",
                ui.visuals().error_fg_color,
            ),
        };
        ui.add_space(6.0);
        ui.label(egui::RichText::new(text).color(color));
    }
}
