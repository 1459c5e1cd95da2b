use std::time::{Duration, Instant};

use super::section::Section;
use crate::style::{
    BOTTOM_SNAP_PX, NAV_BAR_OFFSET, SCROLL_ANIM_MS, SECTION_TRIGGER_SLACK,
    SUPPRESS_AFTER_CLICK_MS,
};

/// Snapshot of the scroll viewport over the section column, captured once per
/// frame. Offsets are in content coordinates; `section_tops` holds each
/// rendered section's top edge in the same space.
#[derive(Clone, Debug, Default)]
pub struct ScrollView {
    pub offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
    pub section_tops: Vec<(Section, f32)>,
}

impl ScrollView {
    pub fn section_top(&self, section: Section) -> Option<f32> {
        self.section_tops
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, top)| *top)
    }

    /// Scroll offset that puts `section` just below the fixed bar, clamped to
    /// the scrollable range. None when the section has no geometry yet.
    pub fn target_offset(&self, section: Section) -> Option<f32> {
        let top = self.section_top(section)?;
        let max = (self.content_height - self.viewport_height).max(0.0);
        Some((top - NAV_BAR_OFFSET).clamp(0.0, max))
    }

    /// Which section the viewport is effectively "at".
    ///
    /// Near the bottom of the content the last section always wins, so a
    /// short final section is reachable at all. Otherwise the lowest section
    /// whose top edge has passed under the fixed bar (plus some slack) wins.
    /// Returns None when nothing qualifies; the caller keeps its previous
    /// answer in that case.
    pub fn resolve_active(&self) -> Option<Section> {
        if self.section_tops.is_empty() {
            return None;
        }
        if self.offset + self.viewport_height >= self.content_height - BOTTOM_SNAP_PX {
            return Some(Section::LAST);
        }
        let trigger = NAV_BAR_OFFSET + SECTION_TRIGGER_SLACK;
        for section in Section::ALL.iter().rev() {
            if let Some(top) = self.section_top(*section) {
                if top - self.offset <= trigger {
                    return Some(*section);
                }
            }
        }
        None
    }
}

/// Suppression phase. A click pins the active section for a bounded window
/// so passive scroll observation cannot fight the explicit intent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavPhase {
    Idle,
    Suppressed { section: Section, expires_at: Instant },
}

/// Reconciles clicks and scroll position into one authoritative active
/// section. Lives only while a route with a section column is shown.
pub struct SectionNavigator {
    active: Section,
    phase: NavPhase,
}

impl SectionNavigator {
    pub fn new() -> Self {
        SectionNavigator {
            active: Section::Home,
            phase: NavPhase::Idle,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn is_suppressed(&self, now: Instant) -> bool {
        match self.phase {
            NavPhase::Idle => false,
            NavPhase::Suppressed { expires_at, .. } => now < expires_at,
        }
    }

    /// Explicit selection. Takes effect immediately and opens a fresh
    /// suppression window, replacing any window still running.
    pub fn click(&mut self, section: Section, now: Instant) {
        self.active = section;
        self.phase = NavPhase::Suppressed {
            section,
            expires_at: now + Duration::from_millis(SUPPRESS_AFTER_CLICK_MS),
        };
    }

    /// Passive observation of the scroll position. While suppressed the
    /// pinned section holds; afterwards the resolved section wins, and an
    /// unresolvable view leaves the previous answer in place.
    pub fn observe(&mut self, view: &ScrollView, now: Instant) {
        match self.phase {
            NavPhase::Suppressed { section, expires_at } if now < expires_at => {
                self.active = section;
            }
            _ => {
                self.phase = NavPhase::Idle;
                if let Some(section) = view.resolve_active() {
                    self.active = section;
                }
            }
        }
    }

    /// Time left on the suppression window, for repaint scheduling
    pub fn next_wakeup(&self, now: Instant) -> Option<Duration> {
        match self.phase {
            NavPhase::Suppressed { expires_at, .. } if now < expires_at => {
                Some(expires_at - now)
            }
            _ => None,
        }
    }
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self::new()
    }
}

/// A section scroll scheduled for slightly later: after a route change has
/// had a frame to lay out, or after the expanded menu has finished closing.
#[derive(Clone, Copy, Debug)]
pub struct DeferredScroll {
    pub section: Section,
    pub due: Instant,
}

/// In-flight smooth scroll, eased over a fixed duration
#[derive(Clone, Copy, Debug)]
pub struct ScrollAnim {
    pub from: f32,
    pub to: f32,
    pub started: Instant,
}

impl ScrollAnim {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        ScrollAnim { from, to, started }
    }

    /// Eased offset at `now`, plus whether the animation has finished
    pub fn offset_at(&self, now: Instant) -> (f32, bool) {
        let duration = SCROLL_ANIM_MS as f32 / 1000.0;
        let elapsed = now.duration_since(self.started).as_secs_f32();
        let t = (elapsed / duration).clamp(0.0, 1.0);
        // ease-out cubic, fast start and gentle landing
        let eased = 1.0 - (1.0 - t).powi(3);
        (self.from + (self.to - self.from) * eased, t >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(offset: f32) -> ScrollView {
        // four sections spread over 2400px of content in an 800px viewport
        ScrollView {
            offset,
            viewport_height: 800.0,
            content_height: 2400.0,
            section_tops: vec![
                (Section::Home, 0.0),
                (Section::About, 600.0),
                (Section::Projects, 1200.0),
                (Section::Contact, 1800.0),
            ],
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_click_pins_until_window_elapses() {
        let t0 = Instant::now();
        let mut nav = SectionNavigator::new();
        nav.click(Section::About, t0);
        assert_eq!(nav.active(), Section::About);

        // scrolled well into the projects section, still inside the window
        nav.observe(&view(1150.0), t0 + ms(500));
        assert_eq!(nav.active(), Section::About);
        nav.observe(&view(1150.0), t0 + ms(999));
        assert_eq!(nav.active(), Section::About);

        // at expiry the scroll position takes over again
        nav.observe(&view(1150.0), t0 + ms(1000));
        assert_eq!(nav.active(), Section::Projects);
        assert!(!nav.is_suppressed(t0 + ms(1000)));
    }

    #[test]
    fn test_reclick_replaces_the_window() {
        let t0 = Instant::now();
        let mut nav = SectionNavigator::new();
        nav.click(Section::About, t0);
        nav.click(Section::About, t0 + ms(800));
        assert_eq!(nav.active(), Section::About);

        // 1000ms after the first click the second window still holds
        nav.observe(&view(1150.0), t0 + ms(1200));
        assert_eq!(nav.active(), Section::About);
        match nav.phase() {
            NavPhase::Suppressed { section, expires_at } => {
                assert_eq!(section, Section::About);
                assert_eq!(expires_at, t0 + ms(1800));
            }
            NavPhase::Idle => panic!("window should still be open"),
        }
    }

    #[test]
    fn test_bottom_snaps_to_last_section() {
        let mut nav = SectionNavigator::new();
        // 1650 + 800 = 2450 >= 2400 - 200
        nav.observe(&view(1650.0), Instant::now());
        assert_eq!(nav.active(), Section::Contact);
    }

    #[test]
    fn test_bottom_snap_ignores_section_geometry() {
        let mut nav = SectionNavigator::new();
        let mut v = view(1650.0);
        // contact never crosses the trigger line on its own
        v.section_tops.retain(|(s, _)| *s != Section::Contact);
        v.section_tops.push((Section::Contact, 2390.0));
        nav.observe(&v, Instant::now());
        assert_eq!(nav.active(), Section::Contact);
    }

    #[test]
    fn test_tie_breaks_toward_later_section() {
        let mut nav = SectionNavigator::new();
        // about sits at -50, projects at 80; both are past the trigger line
        nav.observe(&view(1120.0), Instant::now());
        assert_eq!(nav.active(), Section::Projects);
    }

    #[test]
    fn test_no_match_keeps_previous_answer() {
        let t0 = Instant::now();
        let mut nav = SectionNavigator::new();
        nav.observe(&view(1150.0), t0);
        assert_eq!(nav.active(), Section::Projects);

        // no section top within trigger reach of the viewport top
        let v = ScrollView {
            offset: 0.0,
            viewport_height: 800.0,
            content_height: 2400.0,
            section_tops: vec![(Section::About, 500.0), (Section::Contact, 1800.0)],
        };
        nav.observe(&v, t0 + ms(1));
        assert_eq!(nav.active(), Section::Projects);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let mut nav = SectionNavigator::new();
        let mut v = view(1150.0);
        v.section_tops.retain(|(s, _)| *s != Section::Projects);
        nav.observe(&v, Instant::now());
        assert_eq!(nav.active(), Section::About);
    }

    #[test]
    fn test_empty_view_resolves_nothing() {
        let v = ScrollView::default();
        assert_eq!(v.resolve_active(), None);
    }

    #[test]
    fn test_expiry_is_pull_based() {
        let t0 = Instant::now();
        let mut nav = SectionNavigator::new();
        nav.click(Section::Contact, t0);
        assert_eq!(nav.next_wakeup(t0 + ms(400)), Some(ms(600)));

        // nothing happens at the deadline by itself; state only moves when
        // the owner polls again
        assert!(!nav.is_suppressed(t0 + ms(1000)));
        assert_eq!(nav.active(), Section::Contact);
        assert_eq!(nav.next_wakeup(t0 + ms(1000)), None);
    }

    #[test]
    fn test_target_offset_accounts_for_the_bar() {
        let v = view(0.0);
        assert_eq!(v.target_offset(Section::About), Some(600.0 - NAV_BAR_OFFSET));
        assert_eq!(v.target_offset(Section::Home), Some(0.0));
        // clamped to the scrollable range
        assert_eq!(v.target_offset(Section::Contact), Some(1600.0));
    }

    #[test]
    fn test_target_offset_missing_geometry() {
        let v = ScrollView::default();
        assert_eq!(v.target_offset(Section::About), None);
    }

    #[test]
    fn test_scroll_anim_eases_out() {
        let t0 = Instant::now();
        let anim = ScrollAnim::new(0.0, 1000.0, t0);
        let (start, done) = anim.offset_at(t0);
        assert_eq!(start, 0.0);
        assert!(!done);

        // ease-out covers more than half the distance by the halfway mark
        let (mid, _) = anim.offset_at(t0 + ms(SCROLL_ANIM_MS / 2));
        assert!(mid > 500.0);

        let (end, done) = anim.offset_at(t0 + ms(SCROLL_ANIM_MS + 50));
        assert_eq!(end, 1000.0);
        assert!(done);
    }
}
