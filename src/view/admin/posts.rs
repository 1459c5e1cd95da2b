// Post management table with edit and delete actions
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::app::Vitrine;
use crate::nav::Route;
use crate::state::{PendingDelete, PostForm};
use crate::style;
use crate::view::widgets;

impl Vitrine {
    pub(crate) fn render_admin_posts(&mut self, ui: &mut egui::Ui) {
        let mut new_post = false;
        let mut edit: Option<String> = None;
        let mut delete: Option<String> = None;
        let mut open: Option<String> = None;

        ui.horizontal(|ui| {
            ui.heading("Blog Posts");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("New Post").clicked() {
                    new_post = true;
                }
            });
        });
        ui.add_space(8.0);

        let posts = &self.content.snapshot.posts;
        if posts.is_empty() {
            widgets::empty_state(ui, "No posts yet. Create your first one.");
        } else {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::remainder().clip(true))
                .column(Column::auto().at_least(90.0))
                .column(Column::auto().at_least(90.0))
                .column(Column::auto().at_least(110.0))
                .header(style::HEADER_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.strong("Title");
                    });
                    header.col(|ui| {
                        ui.strong("Date");
                    });
                    header.col(|ui| {
                        ui.strong("Category");
                    });
                    header.col(|ui| {
                        ui.strong("Actions");
                    });
                })
                .body(|body| {
                    body.rows(style::ROW_HEIGHT, posts.len(), |mut row| {
                        let post = &posts[row.index()];
                        row.col(|ui| {
                            let response = style::truncated_label_with_sense(
                                ui,
                                &post.title,
                                egui::Sense::click(),
                            );
                            if response.clicked() {
                                open = Some(post.slug.clone());
                            }
                        });
                        row.col(|ui| {
                            ui.label(post.display_date());
                        });
                        row.col(|ui| {
                            style::truncated_label(ui, &post.category);
                        });
                        row.col(|ui| {
                            if ui.small_button("Edit").clicked() {
                                edit = Some(post.slug.clone());
                            }
                            if ui.small_button("Delete").clicked() {
                                delete = Some(post.slug.clone());
                            }
                        });
                    });
                });
        }

        if new_post {
            let author = self.content.snapshot.profile.name.clone();
            self.admin.post_form = Some(PostForm::new(&author));
        }
        if let Some(slug) = edit {
            if let Some(post) = self.content.snapshot.post(&slug) {
                self.admin.post_form = Some(PostForm::from_post(post));
            }
        }
        if let Some(slug) = delete {
            self.admin.pending_delete = Some(PendingDelete::Post(slug));
        }
        if let Some(slug) = open {
            self.navigate(Route::Post(slug));
        }
    }
}
