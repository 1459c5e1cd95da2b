// Project management table
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::app::Vitrine;
use crate::state::{PendingDelete, ProjectForm};
use crate::style;
use crate::view::widgets;

impl Vitrine {
    pub(crate) fn render_admin_projects(&mut self, ui: &mut egui::Ui) {
        let mut new_project = false;
        let mut edit: Option<String> = None;
        let mut delete: Option<String> = None;

        ui.horizontal(|ui| {
            ui.heading("Projects");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("New Project").clicked() {
                    new_project = true;
                }
            });
        });
        ui.add_space(8.0);

        let projects = &self.content.snapshot.projects;
        if projects.is_empty() {
            widgets::empty_state(ui, "No projects yet. Add the first one.");
        } else {
            TableBuilder::new(ui)
                .striped(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::remainder().clip(true))
                .column(Column::auto().at_least(100.0))
                .column(Column::auto().at_least(60.0))
                .column(Column::auto().at_least(110.0))
                .header(style::HEADER_HEIGHT, |mut header| {
                    header.col(|ui| {
                        ui.strong("Title");
                    });
                    header.col(|ui| {
                        ui.strong("Category");
                    });
                    header.col(|ui| {
                        ui.strong("Scope");
                    });
                    header.col(|ui| {
                        ui.strong("Actions");
                    });
                })
                .body(|body| {
                    body.rows(style::ROW_HEIGHT, projects.len(), |mut row| {
                        let project = &projects[row.index()];
                        row.col(|ui| {
                            style::truncated_label(ui, &project.title);
                        });
                        row.col(|ui| {
                            style::truncated_label(ui, &project.category);
                        });
                        row.col(|ui| {
                            ui.label(project.scope.label());
                        });
                        row.col(|ui| {
                            if ui.small_button("Edit").clicked() {
                                edit = Some(project.slug.clone());
                            }
                            if ui.small_button("Delete").clicked() {
                                delete = Some(project.slug.clone());
                            }
                        });
                    });
                });
        }

        if new_project {
            self.admin.project_form = Some(ProjectForm::new());
        }
        if let Some(slug) = edit {
            let found = self
                .content
                .snapshot
                .projects
                .iter()
                .find(|p| p.slug == slug);
            if let Some(project) = found {
                self.admin.project_form = Some(ProjectForm::from_project(project));
            }
        }
        if let Some(slug) = delete {
            self.admin.pending_delete = Some(PendingDelete::Project(slug));
        }
    }
}
