// Layout constants and theme for vitrine

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        if mode == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        match self {
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }
    }

    pub fn accent(&self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_rgb(79, 70, 229),
            Theme::Dark => egui::Color32::from_rgb(129, 140, 248),
        }
    }

    pub fn bar_fill(&self, scrolled: bool) -> egui::Color32 {
        let base = match self {
            Theme::Light => egui::Color32::from_rgb(248, 248, 252),
            Theme::Dark => egui::Color32::from_rgb(22, 24, 34),
        };
        if scrolled {
            base
        } else {
            base.gamma_multiply(0.85)
        }
    }

    pub fn faint_text(&self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_gray(110),
            Theme::Dark => egui::Color32::from_gray(150),
        }
    }

    /// Background for code blocks and inline code spans
    pub fn code_fill(&self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_gray(235),
            Theme::Dark => egui::Color32::from_gray(32),
        }
    }
}

// --- Navigation ---
// NAV_BAR_OFFSET is both the height of the fixed top bar and the scroll
// padding every scroll-to-section computation subtracts. Keep it single.
pub const NAV_BAR_OFFSET: f32 = 80.0;
pub const SECTION_TRIGGER_SLACK: f32 = 50.0;
pub const BOTTOM_SNAP_PX: f32 = 200.0;
pub const SUPPRESS_AFTER_CLICK_MS: u64 = 1000;
pub const MENU_CLOSE_DELAY_MS: u64 = 300;
pub const POST_NAV_SETTLE_MS: u64 = 100;
pub const SCROLL_ANIM_MS: u64 = 450;
pub const SCROLL_TOP_THRESHOLD: f32 = 300.0;
pub const COMPACT_BREAKPOINT: f32 = 760.0;

// --- Page layout ---
pub const CONTENT_MAX_WIDTH: f32 = 900.0;
pub const HERO_MIN_HEIGHT: f32 = 560.0;
pub const CARD_IMAGE_HEIGHT: f32 = 160.0;
pub const SECTION_GAP: f32 = 48.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 20.0;

// --- Modals ---
pub const MODAL_MIN_WIDTH: f32 = 300.0;
pub const MODAL_MAX_WIDTH: f32 = 560.0;
pub const MODAL_WIDTH_RATIO: f32 = 0.6;
pub const MODAL_HEIGHT_RATIO: f32 = 0.8;

// --- Timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Content ---
pub const READ_WORDS_PER_MINUTE: usize = 200;
pub const MAX_SEARCH_HITS: usize = 200;
pub const RECENT_ITEMS: usize = 5;

// --- Hero background ---
pub const NODE_COUNT: usize = 60;
pub const LINK_DISTANCE: f32 = 120.0;
pub const NODE_SPEED: f32 = 0.3;
pub const NODE_LIT_CHANCE: f32 = 0.002;
pub const NODE_LIT_MS: u64 = 2000;

// --- Helper functions ---

/// Calculate responsive modal width based on screen size
pub fn modal_width(ctx: &egui::Context) -> f32 {
    (ctx.input(|i| i.screen_rect().width()) * MODAL_WIDTH_RATIO)
        .clamp(MODAL_MIN_WIDTH, MODAL_MAX_WIDTH)
}

/// Calculate maximum modal height based on screen size
pub fn modal_max_height(ctx: &egui::Context) -> f32 {
    ctx.input(|i| i.screen_rect().height()) * MODAL_HEIGHT_RATIO
}

/// Render a label that truncates overflowing text with an ellipsis.
pub fn truncated_label(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

/// Render a label that truncates overflowing text with an ellipsis and uses the provided sense.
pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}
