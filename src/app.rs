// Application state and the per-frame update loop
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::Config;
use crate::content::{ContactMessage, ContentStore};
use crate::io::{spawn_worker, StoreCommand, StoreEvent};
use crate::nav::{AdminPage, DeferredScroll, Route, ScrollAnim, Section};
use crate::state::{
    AdminState, BlogState, ContactForm, ContactNotice, ContentState, ParticleField,
    ProjectsFilter, SessionState, UIState,
};
use crate::style::{self, Theme};
use crate::view::MarkdownRenderer;

pub struct Vitrine {
    pub(crate) config: Config,
    pub(crate) content_root: PathBuf,
    pub(crate) ui: UIState,
    pub(crate) session: SessionState,
    pub(crate) content: ContentState,
    pub(crate) blog: BlogState,
    pub(crate) projects: ProjectsFilter,
    pub(crate) contact: ContactForm,
    pub(crate) admin: AdminState,
    pub(crate) particles: ParticleField,
    pub(crate) markdown: MarkdownRenderer,
    pub(crate) command_tx: Sender<StoreCommand>,
    store_events: Receiver<StoreEvent>,
}

impl Vitrine {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let theme = Theme::from_mode(&config.theme.mode);
        theme.apply(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let content_root = config.content_root();
        let store = ContentStore::new(content_root.clone());
        if let Err(e) = store.ensure_layout() {
            eprintln!(
                "vitrine: could not prepare {}: {}",
                content_root.display(),
                e
            );
        }
        let (command_tx, store_events) = spawn_worker(store, cc.egui_ctx.clone());
        let _ = command_tx.send(StoreCommand::LoadAll);

        let mut app = Self {
            config,
            content_root,
            ui: UIState::new(theme),
            session: SessionState::new(),
            content: ContentState::new(),
            blog: BlogState::new(),
            projects: ProjectsFilter::new(),
            contact: ContactForm::new(),
            admin: AdminState::new(),
            particles: ParticleField::new(),
            markdown: MarkdownRenderer::new(),
            command_tx,
            store_events,
        };
        app.sync_navigator_mount();
        app
    }

    /// Hand a command to the worker; losing the worker is unrecoverable
    /// enough that the status line is the best we can do
    pub(crate) fn send_store(&mut self, command: StoreCommand) {
        if self.command_tx.send(command).is_err() {
            self.ui
                .set_error("Background worker is gone; restart the app".to_string());
        }
    }

    /// Resolve a content-relative image path into a URI the image loader
    /// understands; absolute URIs pass through untouched
    pub(crate) fn content_uri(&self, value: &str) -> String {
        if value.starts_with("http://")
            || value.starts_with("https://")
            || value.starts_with("file://")
        {
            return value.to_string();
        }
        format!("file://{}", self.content_root.join(value).display())
    }

    pub(crate) fn open_external(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            self.ui.set_error(format!("Could not open link: {}", e));
        }
    }

    pub(crate) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.ui.theme = self.ui.theme.toggle();
        self.ui.theme.apply(ctx);
        self.config.theme.mode = self.ui.theme.mode().to_string();
        if let Err(e) = self.config.save() {
            self.ui.set_error(format!("Could not save settings: {}", e));
        }
    }

    /// Route change with the login gate applied
    pub(crate) fn navigate(&mut self, route: Route) {
        let route = match route {
            Route::Admin(page) if !self.admin.authenticated => {
                self.admin.return_to = Some(page);
                self.admin.focus_input = true;
                Route::Login
            }
            Route::Admin(page) => {
                self.admin.page = page;
                Route::Admin(page)
            }
            other => other,
        };
        self.session.router.go(route);
        self.after_route_change();
    }

    fn after_route_change(&mut self) {
        self.session.menu_open = false;
        self.sync_navigator_mount();
    }

    /// The navigator exists only while a section-hosting route is shown
    pub(crate) fn sync_navigator_mount(&mut self) {
        if self.session.router.route().hosts_sections() {
            self.session.mount_navigator(style::NAV_BAR_OFFSET);
        } else {
            self.session.unmount_navigator();
        }
    }

    /// A nav bar or menu entry was clicked. On the hosting page this scrolls;
    /// elsewhere it navigates home first and scrolls once layout has settled.
    pub(crate) fn section_link_clicked(&mut self, section: Section, now: Instant) {
        let hosting = self.session.router.route().hosts_sections();
        if hosting && self.session.menu_open {
            // let the closing menu get out of the way before moving
            self.session.menu_open = false;
            if let Some(nav) = &mut self.session.navigator {
                nav.click(section, now);
            }
            self.session.deferred = Some(DeferredScroll {
                section,
                due: now + Duration::from_millis(style::MENU_CLOSE_DELAY_MS),
            });
        } else if hosting {
            self.start_section_scroll(section, now);
        } else {
            self.session.router.go_with_section(section);
            self.after_route_change();
        }
    }

    /// Unknown geometry skips the whole operation, highlight included
    pub(crate) fn start_section_scroll(&mut self, section: Section, now: Instant) {
        let Some(target) = self.session.view.target_offset(section) else {
            return;
        };
        if let Some(nav) = &mut self.session.navigator {
            nav.click(section, now);
        }
        self.session.anim = Some(ScrollAnim::new(self.session.view.offset, target, now));
    }

    /// Scroll without pinning the nav highlight; used by in-page buttons
    /// that are not nav entries
    pub(crate) fn plain_scroll_to(&mut self, section: Section, now: Instant) {
        let Some(target) = self.session.view.target_offset(section) else {
            return;
        };
        self.session.anim = Some(ScrollAnim::new(self.session.view.offset, target, now));
    }

    pub(crate) fn scroll_to_top(&mut self, now: Instant) {
        self.session.anim = Some(ScrollAnim::new(self.session.view.offset, 0.0, now));
    }

    pub(crate) fn attempt_login(&mut self) {
        if self.config.admin.passphrase.is_empty() {
            return;
        }
        if self.admin.passphrase_input == self.config.admin.passphrase {
            self.admin.authenticated = true;
            self.admin.passphrase_input.clear();
            self.admin.login_error = None;
            let page = self.admin.return_to.take().unwrap_or(AdminPage::Dashboard);
            self.navigate(Route::Admin(page));
        } else {
            self.admin.login_error = Some("Incorrect passphrase".to_string());
            self.admin.focus_input = true;
        }
    }

    pub(crate) fn submit_contact_message(&mut self, message: ContactMessage) {
        if self
            .command_tx
            .send(StoreCommand::SaveMessage(message))
            .is_err()
        {
            self.contact.sending = false;
            self.contact.set_notice(ContactNotice::Failed);
        }
    }

    fn apply_event(&mut self, event: StoreEvent, ctx: &egui::Context) {
        match event {
            StoreEvent::Loaded(snapshot) => {
                let warnings = snapshot.warnings.len();
                self.content.replace(snapshot);
                self.markdown.clear_cache();
                // cover art may have changed on disk under the same path
                ctx.forget_all_images();
                if warnings > 0 {
                    self.ui.set_error(format!(
                        "{} content file(s) could not be parsed; see stderr",
                        warnings
                    ));
                }
            }
            StoreEvent::Saved(text) => self.ui.set_info(text),
            StoreEvent::MessageStored => {
                self.contact.sending = false;
                self.contact.clear_fields();
                self.contact.set_notice(ContactNotice::Sent);
            }
            StoreEvent::MessageStoreFailed(detail) => {
                self.contact.sending = false;
                self.contact.set_notice(ContactNotice::Failed);
                eprintln!("vitrine: failed to store message: {}", detail);
            }
            StoreEvent::SearchProgress(scanned) => {
                self.blog.deep_scanned = scanned;
            }
            StoreEvent::SearchCompleted(hits) => {
                self.blog.deep_hits = hits;
                self.blog.deep_running = false;
            }
            StoreEvent::BackupCompleted(path) => {
                self.ui
                    .set_info(format!("Backup written to {}", path.display()));
                self.content.last_backup = Some(path);
            }
            StoreEvent::Error(detail) => {
                if self.content.loading {
                    self.content.loading = false;
                    self.content.load_error = Some(detail.clone());
                }
                self.ui.set_error(detail);
            }
        }
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        let error = self.ui.error_message.clone();
        let info = self.ui.info_message.clone();
        if error.is_none() && info.is_none() {
            return;
        }
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((text, _)) = &error {
                    ui.colored_label(egui::Color32::RED, text);
                } else if let Some((text, _)) = &info {
                    ui.label(text);
                }
            });
        });
    }

    fn render_public(&mut self, ctx: &egui::Context, now: Instant, route: &Route) {
        // While a programmatic scroll is animating, the offset is driven
        // rather than read back
        let mut override_offset = None;
        if let Some(anim) = &self.session.anim {
            let (offset, done) = anim.offset_at(now);
            override_offset = Some(offset);
            if done {
                self.session.anim = None;
            }
        }

        let salt = match route {
            Route::Home => "page_home".to_string(),
            Route::Blog => "page_blog".to_string(),
            Route::Post(slug) => format!("page_post_{}", slug),
            _ => "page_other".to_string(),
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                let mut area = egui::ScrollArea::vertical()
                    .id_salt(salt)
                    .auto_shrink([false, false]);
                if let Some(offset) = override_offset {
                    area = area.vertical_scroll_offset(offset);
                }
                let output = area.show(ui, |ui| match route {
                    Route::Home => self.render_home(ui, now),
                    Route::Blog => self.render_blog(ui),
                    Route::Post(slug) => self.render_post(ui, slug),
                    _ => {}
                });
                self.session.view.offset = output.state.offset.y;
                self.session.view.viewport_height = output.inner_rect.height();
                self.session.view.content_height = output.content_size.y;
            });
    }
}

impl eframe::App for Vitrine {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        while let Ok(event) = self.store_events.try_recv() {
            self.apply_event(event, ctx);
        }

        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);
        self.contact.clear_expired_notice(style::MESSAGE_TIMEOUT_SECS);

        self.handle_input(ctx);

        // A manual wheel or trackpad scroll takes over from the animation
        if self.session.anim.is_some() {
            let manual = ctx.input(|i| {
                i.raw_scroll_delta != egui::Vec2::ZERO
                    || i.smooth_scroll_delta != egui::Vec2::ZERO
            });
            if manual {
                self.session.anim = None;
            }
        }

        if let Some(deferred) = self.session.deferred.take() {
            if now >= deferred.due {
                self.start_section_scroll(deferred.section, now);
            } else {
                self.session.deferred = Some(deferred);
            }
        }

        // A cross-page section link parks its target on the router until the
        // destination page has produced geometry to scroll against
        if self.session.router.has_pending_section()
            && self.session.router.route().hosts_sections()
            && !self.session.view.section_tops.is_empty()
        {
            if let Some(section) = self.session.router.take_pending_section() {
                if let Some(nav) = &mut self.session.navigator {
                    nav.click(section, now);
                }
                self.session.deferred = Some(DeferredScroll {
                    section,
                    due: now + Duration::from_millis(style::POST_NAV_SETTLE_MS),
                });
            }
        }

        self.render_status_bar(ctx);

        let route = self.session.router.route().clone();
        match &route {
            Route::Login => {
                egui::CentralPanel::default().show(ctx, |ui| self.render_login(ui));
            }
            Route::Admin(page) => {
                if self.admin.authenticated {
                    self.render_admin(ctx);
                } else {
                    self.admin.return_to = Some(*page);
                    self.admin.focus_input = true;
                    self.session.router.go(Route::Login);
                    egui::CentralPanel::default().show(ctx, |ui| self.render_login(ui));
                }
            }
            _ => self.render_public(ctx, now, &route),
        }
        if route.is_public() {
            self.render_nav_bar(ctx, now);
            self.render_scroll_top(ctx, now);
        }

        if self.admin.authenticated {
            self.render_post_form_modal(ctx);
            self.render_project_form_modal(ctx);
            self.render_delete_modal(ctx);
        }

        if let Some(nav) = &mut self.session.navigator {
            nav.observe(&self.session.view, now);
        }

        if route.hosts_sections() || self.session.anim.is_some() {
            // the particle field and scroll animation both run per-frame
            ctx.request_repaint();
        }
        if let Some(nav) = &self.session.navigator {
            if let Some(wake) = nav.next_wakeup(now) {
                ctx.request_repaint_after(wake);
            }
        }
        if let Some(deferred) = &self.session.deferred {
            ctx.request_repaint_after(deferred.due.saturating_duration_since(now));
        }
        if self.ui.error_message.is_some()
            || self.ui.info_message.is_some()
            || self.contact.notice.is_some()
        {
            ctx.request_repaint_after(Duration::from_secs(1));
        }
    }
}
