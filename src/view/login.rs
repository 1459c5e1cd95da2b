// Passphrase gate in front of the admin area
use eframe::egui;

use crate::app::Vitrine;
use crate::config::Config;
use crate::nav::Route;
use crate::view::widgets;

impl Vitrine {
    pub(crate) fn render_login(&mut self, ui: &mut egui::Ui) {
        let accent = self.ui.theme.accent();
        let faint = self.ui.theme.faint_text();
        let disabled = self.config.admin.passphrase.is_empty();

        let mut attempt = false;
        let mut go_home = false;

        ui.add_space(ui.available_height() * 0.22);
        widgets::centered_column(ui, 360.0, |ui| {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(20))
                .corner_radius(8.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("Admin Login").size(22.0).strong());
                    });
                    ui.add_space(12.0);

                    if disabled {
                        ui.label(
                            egui::RichText::new(
                                "The admin area is disabled because no passphrase is configured.",
                            )
                            .size(13.5),
                        );
                        ui.add_space(6.0);
                        if let Some(path) = Config::config_path() {
                            ui.label(
                                egui::RichText::new(format!(
                                    "Set [admin] passphrase in {}",
                                    path.display()
                                ))
                                .size(12.0)
                                .color(faint),
                            );
                        }
                    } else {
                        ui.label(egui::RichText::new("Passphrase").size(12.5).strong());
                        let field = ui.add(
                            egui::TextEdit::singleline(&mut self.admin.passphrase_input)
                                .password(true)
                                .desired_width(f32::INFINITY),
                        );
                        if self.admin.focus_input {
                            field.request_focus();
                            self.admin.focus_input = false;
                        }
                        if field.lost_focus() && ui.ctx().input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            attempt = true;
                        }
                        widgets::field_error(ui, self.admin.login_error.as_ref());
                        ui.add_space(10.0);
                        if ui
                            .add_sized(
                                egui::vec2(ui.available_width(), 30.0),
                                egui::Button::new("Sign In"),
                            )
                            .clicked()
                        {
                            attempt = true;
                        }
                    }

                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if widgets::link_label(ui, accent, "Back to site").clicked() {
                            go_home = true;
                        }
                    });
                });
        });

        if attempt {
            self.attempt_login();
        }
        if go_home {
            self.navigate(Route::Home);
        }
    }
}
