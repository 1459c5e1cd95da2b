// Admin surface: sidebar chrome plus the per-page panels
pub mod dashboard;
pub mod messages;
pub mod posts;
pub mod projects;

use eframe::egui;

use crate::app::Vitrine;
use crate::nav::{AdminPage, Route};
use crate::view::nav_bar::brand_initials;

impl Vitrine {
    pub(crate) fn render_admin(&mut self, ctx: &egui::Context) {
        self.render_admin_sidebar(ctx);
        if self.admin.page == AdminPage::Messages {
            self.render_message_list_panel(ctx);
        }
        egui::CentralPanel::default().show(ctx, |ui| match self.admin.page {
            AdminPage::Dashboard => self.render_admin_dashboard(ui),
            AdminPage::Posts => self.render_admin_posts(ui),
            AdminPage::Projects => self.render_admin_projects(ui),
            AdminPage::Messages => self.render_admin_messages(ui),
        });
    }

    fn render_admin_sidebar(&mut self, ctx: &egui::Context) {
        let accent = self.ui.theme.accent();
        let unread = self.content.snapshot.unread_messages();
        let brand = format!(
            "{} Admin",
            brand_initials(&self.content.snapshot.profile.name)
        );
        let current = self.admin.page;

        let mut go_page: Option<AdminPage> = None;
        let mut view_site = false;
        let mut logout = false;

        egui::SidePanel::left("admin_sidebar")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(egui::RichText::new(brand).size(18.0).strong().color(accent));
                ui.add_space(16.0);

                for page in AdminPage::ALL {
                    let label = match page {
                        AdminPage::Messages if unread > 0 => {
                            format!("Messages ({})", unread)
                        }
                        _ => page.label().to_string(),
                    };
                    if ui.selectable_label(current == page, label).clicked() {
                        go_page = Some(page);
                    }
                }

                ui.add_space(20.0);
                ui.separator();
                ui.add_space(4.0);
                if ui.selectable_label(false, "View Site").clicked() {
                    view_site = true;
                }
                if ui.selectable_label(false, "Logout").clicked() {
                    logout = true;
                }
            });

        if let Some(page) = go_page {
            self.admin.page = page;
            self.session.router.go(Route::Admin(page));
        }
        if view_site {
            self.navigate(Route::Home);
        }
        if logout {
            self.admin.lock();
            self.navigate(Route::Home);
        }
    }
}
