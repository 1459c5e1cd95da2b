// Admin landing page: counts, recent activity and the backup trigger
use eframe::egui;

use crate::app::Vitrine;
use crate::io::StoreCommand;
use crate::nav::{AdminPage, Route};
use crate::style;
use crate::view::widgets;

impl Vitrine {
    pub(crate) fn render_admin_dashboard(&mut self, ui: &mut egui::Ui) {
        let accent = self.ui.theme.accent();
        let faint = self.ui.theme.faint_text();

        let mut open_post: Option<String> = None;
        let mut open_message: Option<String> = None;
        let mut export = false;

        ui.heading("Dashboard");
        ui.add_space(12.0);

        let snapshot = &self.content.snapshot;
        let unread = snapshot.unread_messages();
        ui.columns(3, |columns| {
            stat_card(&mut columns[0], "Blog Posts", snapshot.posts.len(), None, accent, faint);
            stat_card(
                &mut columns[1],
                "Projects",
                snapshot.projects.len(),
                None,
                accent,
                faint,
            );
            let note = (unread > 0).then(|| format!("{} unread", unread));
            stat_card(
                &mut columns[2],
                "Messages",
                snapshot.messages.len(),
                note,
                accent,
                faint,
            );
        });

        ui.add_space(20.0);
        ui.columns(2, |columns| {
            {
                let ui = &mut columns[0];
                ui.label(egui::RichText::new("Recent Posts").size(15.0).strong());
                ui.add_space(6.0);
                if snapshot.posts.is_empty() {
                    ui.label(egui::RichText::new("No posts yet").italics().color(faint));
                }
                for post in snapshot.posts.iter().take(style::RECENT_ITEMS) {
                    if widgets::link_label(ui, accent, &post.title).clicked() {
                        open_post = Some(post.slug.clone());
                    }
                    ui.label(
                        egui::RichText::new(post.display_date())
                            .size(11.5)
                            .color(faint),
                    );
                    ui.add_space(4.0);
                }
            }
            {
                let ui = &mut columns[1];
                ui.label(egui::RichText::new("Recent Messages").size(15.0).strong());
                ui.add_space(6.0);
                if snapshot.messages.is_empty() {
                    ui.label(egui::RichText::new("No messages yet").italics().color(faint));
                }
                for message in snapshot.messages.iter().take(style::RECENT_ITEMS) {
                    let subject = if message.read {
                        message.subject.clone()
                    } else {
                        format!("● {}", message.subject)
                    };
                    if widgets::link_label(ui, accent, &subject).clicked() {
                        open_message = Some(message.id.clone());
                    }
                    ui.label(
                        egui::RichText::new(format!("From: {}", message.name))
                            .size(11.5)
                            .color(faint),
                    );
                    ui.add_space(4.0);
                }
            }
        });

        ui.add_space(20.0);
        ui.separator();
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Export Backup").clicked() {
                export = true;
            }
            if let Some(path) = &self.content.last_backup {
                ui.label(
                    egui::RichText::new(format!("Last backup: {}", path.display()))
                        .size(12.0)
                        .color(faint),
                );
            }
        });

        if export {
            self.send_store(StoreCommand::ExportBackup);
        }
        if let Some(slug) = open_post {
            self.navigate(Route::Post(slug));
        }
        if let Some(id) = open_message {
            self.admin.page = AdminPage::Messages;
            self.session.router.go(Route::Admin(AdminPage::Messages));
            self.open_admin_message(id, true);
        }
    }
}

fn stat_card(
    ui: &mut egui::Ui,
    label: &str,
    count: usize,
    note: Option<String>,
    accent: egui::Color32,
    faint: egui::Color32,
) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(12))
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(count.to_string()).size(28.0).strong());
            ui.label(egui::RichText::new(label).size(12.5).color(faint));
            if let Some(note) = note {
                ui.label(egui::RichText::new(note).size(11.5).color(accent));
            }
        });
}
