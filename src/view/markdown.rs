// Markdown body rendering with syntax-highlighted code fences

use eframe::egui;
use pulldown_cmark::{
    CodeBlockKind, Event as MarkdownEvent, HeadingLevel, Parser, Tag, TagEnd,
};
use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::style::Theme;

/// Renders post bodies. Inline runs of one block are collected into a single
/// `LayoutJob` so paragraphs wrap like ordinary text; highlighted fences are
/// cached because syntect is too slow to run per frame.
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    cache: RefCell<HashMap<u64, egui::text::LayoutJob>>,
}

/// Inline styling flags carried while walking one block
#[derive(Default)]
struct RunStyle {
    strong: bool,
    emphasis: bool,
    link: bool,
    quote: bool,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    pub fn render(&self, ui: &mut egui::Ui, body: &str, theme: Theme) {
        ui.spacing_mut().item_spacing.y = 4.0;

        let mut job = egui::text::LayoutJob::default();
        let mut style = RunStyle::default();
        let mut heading_size: Option<f32> = None;
        let mut list_depth = 0usize;
        let mut in_code_block = false;
        let mut code_lang = String::new();
        let mut code_text = String::new();

        for event in Parser::new(body) {
            match event {
                MarkdownEvent::Start(tag) => match tag {
                    Tag::Heading { level, .. } => {
                        heading_size = Some(match level {
                            HeadingLevel::H1 => 24.0,
                            HeadingLevel::H2 => 20.0,
                            HeadingLevel::H3 => 18.0,
                            HeadingLevel::H4 => 16.0,
                            _ => 14.0,
                        });
                    }
                    Tag::CodeBlock(kind) => {
                        in_code_block = true;
                        code_lang = match kind {
                            CodeBlockKind::Fenced(lang) => lang.to_string(),
                            CodeBlockKind::Indented => String::new(),
                        };
                        code_text.clear();
                    }
                    Tag::List(_) => list_depth += 1,
                    Tag::Item => {
                        let indent = "    ".repeat(list_depth.saturating_sub(1));
                        self.append(ui, &mut job, &format!("{}• ", indent), &style, None, theme);
                    }
                    Tag::BlockQuote(_) => style.quote = true,
                    Tag::Emphasis => style.emphasis = true,
                    Tag::Strong => style.strong = true,
                    Tag::Link { .. } => style.link = true,
                    _ => {}
                },
                MarkdownEvent::End(tag) => match tag {
                    TagEnd::Heading(_) => {
                        heading_size = None;
                        Self::flush(ui, &mut job);
                        ui.add_space(5.0);
                    }
                    TagEnd::Paragraph => {
                        Self::flush(ui, &mut job);
                        ui.add_space(5.0);
                    }
                    TagEnd::CodeBlock => {
                        in_code_block = false;
                        self.code_block(ui, &code_text, &code_lang, theme);
                        ui.add_space(5.0);
                    }
                    TagEnd::List(_) => {
                        list_depth = list_depth.saturating_sub(1);
                        if list_depth == 0 {
                            ui.add_space(5.0);
                        }
                    }
                    TagEnd::Item => Self::flush(ui, &mut job),
                    TagEnd::BlockQuote(_) => {
                        style.quote = false;
                        Self::flush(ui, &mut job);
                        ui.add_space(5.0);
                    }
                    TagEnd::Emphasis => style.emphasis = false,
                    TagEnd::Strong => style.strong = false,
                    TagEnd::Link => style.link = false,
                    _ => {}
                },
                MarkdownEvent::Text(text) => {
                    if in_code_block {
                        code_text.push_str(&text);
                    } else {
                        self.append(ui, &mut job, &text, &style, heading_size, theme);
                    }
                }
                MarkdownEvent::Code(code) => {
                    let format = egui::TextFormat {
                        font_id: egui::FontId::monospace(13.0),
                        color: ui.visuals().text_color(),
                        background: theme.code_fill(),
                        ..Default::default()
                    };
                    job.append(&code, 0.0, format);
                }
                MarkdownEvent::SoftBreak => {
                    self.append(ui, &mut job, " ", &style, heading_size, theme);
                }
                MarkdownEvent::HardBreak => {
                    self.append(ui, &mut job, "\n", &style, heading_size, theme);
                }
                MarkdownEvent::Rule => {
                    Self::flush(ui, &mut job);
                    ui.separator();
                }
                _ => {}
            }
        }
        Self::flush(ui, &mut job);
    }

    fn append(
        &self,
        ui: &egui::Ui,
        job: &mut egui::text::LayoutJob,
        text: &str,
        style: &RunStyle,
        heading_size: Option<f32>,
        theme: Theme,
    ) {
        let size = heading_size.unwrap_or(14.0);
        let color = if style.link {
            theme.accent()
        } else if heading_size.is_some() || style.strong {
            ui.visuals().strong_text_color()
        } else if style.quote {
            theme.faint_text()
        } else {
            ui.visuals().text_color()
        };
        job.append(
            text,
            0.0,
            egui::TextFormat {
                font_id: egui::FontId::proportional(size),
                color,
                italics: style.emphasis || style.quote,
                ..Default::default()
            },
        );
    }

    fn flush(ui: &mut egui::Ui, job: &mut egui::text::LayoutJob) {
        if job.is_empty() {
            return;
        }
        ui.label(std::mem::take(job));
    }

    /// Syntect pass over one fence, cached on (code, lang, theme)
    fn code_block(&self, ui: &mut egui::Ui, code: &str, lang: &str, theme: Theme) {
        let mut hasher = DefaultHasher::new();
        code.hash(&mut hasher);
        lang.hash(&mut hasher);
        theme.mode().hash(&mut hasher);
        let key = hasher.finish();

        let job = {
            let mut cache = self.cache.borrow_mut();
            cache
                .entry(key)
                .or_insert_with(|| self.highlight(code, lang, theme))
                .clone()
        };

        egui::Frame::new()
            .fill(theme.code_fill())
            .corner_radius(6.0)
            .inner_margin(egui::Margin::same(10))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(job);
            });
    }

    fn highlight(&self, code: &str, lang: &str, theme: Theme) -> egui::text::LayoutJob {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_first_line(code))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme_name = if theme == Theme::Dark {
            "base16-ocean.dark"
        } else {
            "base16-ocean.light"
        };
        let mut highlighter = HighlightLines::new(syntax, &self.theme_set.themes[theme_name]);

        let mut job = egui::text::LayoutJob::default();
        for line in LinesWithEndings::from(code) {
            let ranges = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            for (style, text) in ranges {
                let color = egui::Color32::from_rgb(
                    style.foreground.r,
                    style.foreground.g,
                    style.foreground.b,
                );
                job.append(
                    text,
                    0.0,
                    egui::TextFormat {
                        font_id: egui::FontId::monospace(12.0),
                        color,
                        ..Default::default()
                    },
                );
            }
        }
        job
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_cache_drops_entries() {
        let renderer = MarkdownRenderer::new();
        renderer
            .cache
            .borrow_mut()
            .insert(1, egui::text::LayoutJob::default());
        renderer.clear_cache();
        assert!(renderer.cache.borrow().is_empty());
    }

    #[test]
    fn test_fence_language_token_resolves() {
        let renderer = MarkdownRenderer::new();
        let job = renderer.highlight("fn main() {}", "rust", Theme::Dark);
        assert!(job.text.contains("fn main"));
        assert!(!job.sections.is_empty());
    }

    #[test]
    fn test_unknown_language_falls_back_to_plain() {
        let renderer = MarkdownRenderer::new();
        let job = renderer.highlight("just words", "not-a-language", Theme::Light);
        assert!(job.text.contains("just words"));
    }
}
