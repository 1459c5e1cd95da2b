// Centered modal dialogs: the two edit forms and the delete confirmation
use eframe::egui;

use crate::app::Vitrine;
use crate::content::ProjectScope;
use crate::io::StoreCommand;
use crate::state::PendingDelete;
use crate::style;

impl Vitrine {
    pub(crate) fn render_post_form_modal(&mut self, ctx: &egui::Context) {
        let mut do_save = false;
        let mut do_cancel = false;

        if let Some(form) = &mut self.admin.post_form {
            let editing = form.original_slug.is_some();
            let title = if editing { "Edit Post" } else { "New Post" };
            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .default_width(style::modal_width(ctx))
                .show(ctx, |ui| {
                    ui.set_max_height(style::modal_max_height(ctx));
                    egui::ScrollArea::vertical()
                        .id_salt("post_form_scroll")
                        .show(ui, |ui| {
                            form_label(ui, "Title");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.title)
                                    .desired_width(f32::INFINITY),
                            );
                            form_label(ui, "Author");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.author)
                                    .desired_width(f32::INFINITY),
                            );
                            form_label(ui, "Category");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.category)
                                    .desired_width(f32::INFINITY),
                            );
                            form_label(ui, "Cover image");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.cover_image)
                                    .hint_text("images/cover.png, relative to the content folder")
                                    .desired_width(f32::INFINITY),
                            );
                            form_label(ui, "Excerpt");
                            ui.add(
                                egui::TextEdit::multiline(&mut form.excerpt)
                                    .desired_rows(2)
                                    .desired_width(f32::INFINITY),
                            );

                            form_label(ui, "Tags");
                            let mut remove_tag: Option<usize> = None;
                            if !form.tags.is_empty() {
                                ui.horizontal_wrapped(|ui| {
                                    for (idx, tag) in form.tags.iter().enumerate() {
                                        if ui.small_button(format!("{} ✕", tag)).clicked() {
                                            remove_tag = Some(idx);
                                        }
                                    }
                                });
                            }
                            if let Some(idx) = remove_tag {
                                form.tags.remove(idx);
                            }
                            let tag_edit = ui.add(
                                egui::TextEdit::singleline(&mut form.tag_input)
                                    .hint_text("Press Enter to add tags")
                                    .desired_width(f32::INFINITY),
                            );
                            if tag_edit.lost_focus()
                                && ui.ctx().input(|i| i.key_pressed(egui::Key::Enter))
                            {
                                form.add_tag();
                                tag_edit.request_focus();
                            }

                            form_label(ui, "Body");
                            ui.add(
                                egui::TextEdit::multiline(&mut form.body)
                                    .font(egui::TextStyle::Monospace)
                                    .desired_rows(12)
                                    .desired_width(f32::INFINITY),
                            );
                        });
                    ui.separator();
                    if let Some(error) = &form.error {
                        ui.label(egui::RichText::new(error).color(ui.visuals().error_fg_color));
                    }
                    ui.horizontal(|ui| {
                        let save_label = if editing { "Update Post" } else { "Create Post" };
                        if ui.button(save_label).clicked() {
                            do_save = true;
                        }
                        if ui.button("Cancel").clicked() {
                            do_cancel = true;
                        }
                    });
                });
        }

        if do_cancel {
            self.admin.post_form = None;
        }
        if do_save {
            self.save_post_form();
        }
    }

    fn save_post_form(&mut self) {
        let Some(form) = self.admin.post_form.take() else {
            return;
        };
        match form.build() {
            Ok(post) => {
                let replaced = form.replaced_slug(&post);
                self.send_store(StoreCommand::SavePost(post, replaced));
            }
            Err(message) => {
                let mut form = form;
                form.error = Some(message);
                self.admin.post_form = Some(form);
            }
        }
    }

    pub(crate) fn render_project_form_modal(&mut self, ctx: &egui::Context) {
        let mut do_save = false;
        let mut do_cancel = false;

        if let Some(form) = &mut self.admin.project_form {
            let editing = form.original_slug.is_some();
            let title = if editing { "Edit Project" } else { "New Project" };
            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .default_width(style::modal_width(ctx))
                .show(ctx, |ui| {
                    ui.set_max_height(style::modal_max_height(ctx));
                    egui::ScrollArea::vertical()
                        .id_salt("project_form_scroll")
                        .show(ui, |ui| {
                            form_label(ui, "Title");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.title)
                                    .desired_width(f32::INFINITY),
                            );
                            form_label(ui, "Summary");
                            ui.add(
                                egui::TextEdit::multiline(&mut form.summary)
                                    .desired_rows(4)
                                    .desired_width(f32::INFINITY),
                            );
                            form_label(ui, "Category");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.category)
                                    .desired_width(f32::INFINITY),
                            );
                            form_label(ui, "Image");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.image)
                                    .hint_text("images/project.png, relative to the content folder")
                                    .desired_width(f32::INFINITY),
                            );
                            form_label(ui, "Repository URL");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.repo_url)
                                    .desired_width(f32::INFINITY),
                            );
                            form_label(ui, "Live demo URL");
                            ui.add(
                                egui::TextEdit::singleline(&mut form.demo_url)
                                    .desired_width(f32::INFINITY),
                            );

                            form_label(ui, "Demo credentials");
                            ui.horizontal(|ui| {
                                ui.add(
                                    egui::TextEdit::singleline(&mut form.demo_username)
                                        .hint_text("username")
                                        .desired_width(120.0),
                                );
                                ui.add(
                                    egui::TextEdit::singleline(&mut form.demo_password)
                                        .hint_text("password")
                                        .desired_width(120.0),
                                );
                            });

                            form_label(ui, "Technologies");
                            let mut remove_tag: Option<usize> = None;
                            if !form.tags.is_empty() {
                                ui.horizontal_wrapped(|ui| {
                                    for (idx, tag) in form.tags.iter().enumerate() {
                                        if ui.small_button(format!("{} ✕", tag)).clicked() {
                                            remove_tag = Some(idx);
                                        }
                                    }
                                });
                            }
                            if let Some(idx) = remove_tag {
                                form.tags.remove(idx);
                            }
                            let tag_edit = ui.add(
                                egui::TextEdit::singleline(&mut form.tag_input)
                                    .hint_text("Press Enter to add technologies")
                                    .desired_width(f32::INFINITY),
                            );
                            if tag_edit.lost_focus()
                                && ui.ctx().input(|i| i.key_pressed(egui::Key::Enter))
                            {
                                form.add_tag();
                                tag_edit.request_focus();
                            }

                            ui.add_space(6.0);
                            ui.horizontal(|ui| {
                                ui.label(egui::RichText::new("Scope").size(12.5).strong());
                                egui::ComboBox::from_id_salt("project_scope")
                                    .selected_text(form.scope.label())
                                    .show_ui(ui, |ui| {
                                        for scope in ProjectScope::ALL {
                                            ui.selectable_value(
                                                &mut form.scope,
                                                scope,
                                                scope.label(),
                                            );
                                        }
                                    });
                                ui.checkbox(&mut form.private, "Private deployment");
                            });
                        });
                    ui.separator();
                    if let Some(error) = &form.error {
                        ui.label(egui::RichText::new(error).color(ui.visuals().error_fg_color));
                    }
                    ui.horizontal(|ui| {
                        let save_label = if editing { "Update Project" } else { "Create Project" };
                        if ui.button(save_label).clicked() {
                            do_save = true;
                        }
                        if ui.button("Cancel").clicked() {
                            do_cancel = true;
                        }
                    });
                });
        }

        if do_cancel {
            self.admin.project_form = None;
        }
        if do_save {
            self.save_project_form();
        }
    }

    fn save_project_form(&mut self) {
        let Some(form) = self.admin.project_form.take() else {
            return;
        };
        match form.build() {
            Ok(project) => {
                let replaced = form.replaced_slug(&project);
                self.send_store(StoreCommand::SaveProject(project, replaced));
            }
            Err(message) => {
                let mut form = form;
                form.error = Some(message);
                self.admin.project_form = Some(form);
            }
        }
    }

    pub(crate) fn render_delete_modal(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.admin.pending_delete.clone() else {
            return;
        };
        let faint = self.ui.theme.faint_text();
        let question = match &pending {
            PendingDelete::Post(slug) => {
                let title = self
                    .content
                    .snapshot
                    .post(slug)
                    .map(|p| p.title.clone())
                    .unwrap_or_else(|| slug.clone());
                format!("Delete the post \"{}\"?", title)
            }
            PendingDelete::Project(slug) => {
                let title = self
                    .content
                    .snapshot
                    .projects
                    .iter()
                    .find(|p| p.slug == *slug)
                    .map(|p| p.title.clone())
                    .unwrap_or_else(|| slug.clone());
                format!("Delete the project \"{}\"?", title)
            }
            PendingDelete::Message(id) => {
                match self
                    .content
                    .snapshot
                    .messages
                    .iter()
                    .find(|m| m.id == *id)
                {
                    Some(message) => format!("Delete the message from {}?", message.name),
                    None => "Delete this message?".to_string(),
                }
            }
        };

        let mut confirm = false;
        let mut cancel = false;
        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::MODAL_MIN_WIDTH)
            .show(ctx, |ui| {
                ui.label(question);
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("The file is moved to the system trash.")
                        .size(12.0)
                        .color(faint),
                );
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        confirm = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if cancel {
            self.admin.pending_delete = None;
        }
        if confirm {
            self.confirm_pending_delete();
        }
    }

    fn confirm_pending_delete(&mut self) {
        let Some(pending) = self.admin.pending_delete.take() else {
            return;
        };
        match pending {
            PendingDelete::Post(slug) => self.send_store(StoreCommand::DeletePost(slug)),
            PendingDelete::Project(slug) => self.send_store(StoreCommand::DeleteProject(slug)),
            PendingDelete::Message(id) => {
                if self.admin.open_message.as_deref() == Some(id.as_str()) {
                    self.admin.open_message = None;
                }
                self.send_store(StoreCommand::DeleteMessage(id));
            }
        }
    }
}

fn form_label(ui: &mut egui::Ui, text: &str) {
    ui.add_space(6.0);
    ui.label(egui::RichText::new(text).size(12.5).strong());
}
