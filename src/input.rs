// Global keyboard handling
use eframe::egui::{self, Key};

use crate::app::Vitrine;
use crate::io::StoreCommand;
use crate::nav::Route;

impl Vitrine {
    pub(crate) fn handle_input(&mut self, ctx: &egui::Context) {
        let typing = ctx.wants_keyboard_input();

        let reload = ctx.input(|i| {
            i.key_pressed(Key::F5) || (i.modifiers.command && i.key_pressed(Key::R))
        });
        if reload && !typing {
            self.reload_content();
        }

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.escape_pressed();
        }
    }

    pub(crate) fn reload_content(&mut self) {
        self.content.loading = true;
        self.content.load_error = None;
        self.send_store(StoreCommand::LoadAll);
    }

    /// Escape closes the topmost transient surface; one press, one layer
    fn escape_pressed(&mut self) {
        if self.session.menu_open {
            self.session.menu_open = false;
            return;
        }
        if self.admin.pending_delete.is_some() {
            self.admin.pending_delete = None;
            return;
        }
        if self.admin.post_form.is_some() {
            self.admin.post_form = None;
            return;
        }
        if self.admin.project_form.is_some() {
            self.admin.project_form = None;
            return;
        }
        if matches!(self.session.router.route(), Route::Admin(_)) {
            if self.admin.open_message.is_some() {
                self.admin.open_message = None;
            }
            return;
        }
        if self.blog.show_deep {
            self.blog.close_deep();
            return;
        }
        if matches!(self.session.router.route(), Route::Post(_)) {
            self.navigate(Route::Blog);
        }
    }
}
