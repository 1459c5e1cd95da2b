// Inbox list panel and the message reading pane
use eframe::egui;

use crate::app::Vitrine;
use crate::io::StoreCommand;
use crate::state::PendingDelete;
use crate::view::widgets;

impl Vitrine {
    /// Opening a message is what marks it read, mirroring an inbox
    pub(crate) fn open_admin_message(&mut self, id: String, mark_read: bool) {
        if mark_read {
            let unread = self
                .content
                .snapshot
                .messages
                .iter()
                .any(|m| m.id == id && !m.read);
            if unread {
                self.send_store(StoreCommand::SetMessageRead(id.clone(), true));
            }
        }
        self.admin.open_message = Some(id);
    }

    pub(crate) fn render_message_list_panel(&mut self, ctx: &egui::Context) {
        let faint = self.ui.theme.faint_text();
        let mut open: Option<String> = None;

        egui::SidePanel::left("admin_message_list")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.strong("Inbox");
                ui.add_space(4.0);
                if self.content.snapshot.messages.is_empty() {
                    ui.label(egui::RichText::new("No messages yet").italics().color(faint));
                    return;
                }
                egui::ScrollArea::vertical()
                    .id_salt("message_list")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for message in &self.content.snapshot.messages {
                            let selected =
                                self.admin.open_message.as_deref() == Some(message.id.as_str());
                            let subject = if message.read {
                                egui::RichText::new(&message.subject).size(13.0)
                            } else {
                                egui::RichText::new(&message.subject).size(13.0).strong()
                            };
                            let response = ui.selectable_label(selected, subject);
                            ui.label(
                                egui::RichText::new(format!("From: {}", message.name))
                                    .size(11.0)
                                    .color(faint),
                            );
                            ui.add_space(4.0);
                            if response.clicked() {
                                open = Some(message.id.clone());
                            }
                        }
                    });
            });

        if let Some(id) = open {
            self.open_admin_message(id, true);
        }
    }

    pub(crate) fn render_admin_messages(&mut self, ui: &mut egui::Ui) {
        let faint = self.ui.theme.faint_text();

        let mut reply: Option<String> = None;
        let mut mark_unread: Option<String> = None;
        let mut delete: Option<String> = None;

        let open = self.admin.open_message.clone();
        let message = open
            .as_deref()
            .and_then(|id| self.content.snapshot.messages.iter().find(|m| m.id == id));
        let Some(message) = message else {
            widgets::empty_state(ui, "Select a message to view its details");
            return;
        };

        ui.heading(&message.subject);
        ui.add_space(4.0);
        ui.label(format!("{} <{}>", message.name, message.email));
        let received = chrono::DateTime::parse_from_rfc3339(&message.created_at)
            .map(|dt| {
                dt.with_timezone(&chrono::Local)
                    .format("%b %-d, %Y %H:%M")
                    .to_string()
            })
            .unwrap_or_else(|_| message.created_at.clone());
        ui.label(
            egui::RichText::new(format!("Received: {}", received))
                .size(12.0)
                .color(faint),
        );
        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        egui::ScrollArea::vertical()
            .id_salt("message_body")
            .auto_shrink([false, true])
            .max_height(ui.available_height() - 48.0)
            .show(ui, |ui| {
                ui.label(&message.message);
            });

        ui.add_space(8.0);
        let mailto = format!("mailto:{}?subject=Re: {}", message.email, message.subject);
        let id = message.id.clone();
        ui.horizontal(|ui| {
            if ui.button("Reply").clicked() {
                reply = Some(mailto.clone());
            }
            if ui.button("Mark as Unread").clicked() {
                mark_unread = Some(id.clone());
            }
            if ui.button("Delete").clicked() {
                delete = Some(id.clone());
            }
        });

        if let Some(url) = reply {
            self.open_external(&url);
        }
        if let Some(id) = mark_unread {
            self.send_store(StoreCommand::SetMessageRead(id, false));
        }
        if let Some(id) = delete {
            self.admin.pending_delete = Some(PendingDelete::Message(id));
        }
    }
}
