// Navigation runtime - current route, navigator lifetime and scroll bookkeeping
use crate::nav::{DeferredScroll, Router, ScrollAnim, ScrollView, SectionNavigator};

pub struct SessionState {
    pub router: Router,
    /// Present only while the shown route carries the section nav bar;
    /// dropping it on admin routes is what tears the scroll machinery down
    pub navigator: Option<SectionNavigator>,
    /// Viewport geometry captured during the previous frame's render
    pub view: ScrollView,
    pub anim: Option<ScrollAnim>,
    /// One slot for both delayed scroll causes (route settle, menu close);
    /// a newer request replaces an older one
    pub deferred: Option<DeferredScroll>,
    /// Extra top padding applied while the navigator is mounted, so content
    /// never ends up hidden under the fixed bar
    pub scroll_padding: Option<f32>,
    pub menu_open: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            navigator: None,
            view: ScrollView::default(),
            anim: None,
            deferred: None,
            scroll_padding: None,
            menu_open: false,
        }
    }

    /// Idempotent; an already mounted navigator keeps its state
    pub fn mount_navigator(&mut self, padding: f32) {
        if self.navigator.is_none() {
            self.navigator = Some(SectionNavigator::new());
            self.scroll_padding = Some(padding);
        }
    }

    /// Drops the navigator along with every timer and scroll artifact
    /// tied to it; nothing survives to fire later
    pub fn unmount_navigator(&mut self) {
        self.navigator = None;
        self.scroll_padding = None;
        self.anim = None;
        self.deferred = None;
        self.view.section_tops.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::Section;
    use std::time::{Duration, Instant};

    #[test]
    fn test_mount_is_idempotent() {
        let now = Instant::now();
        let mut session = SessionState::new();
        session.mount_navigator(80.0);
        if let Some(nav) = &mut session.navigator {
            nav.click(Section::Projects, now);
        }

        session.mount_navigator(80.0);

        let nav = session.navigator.as_ref().expect("navigator");
        assert_eq!(nav.active(), Section::Projects);
        assert_eq!(session.scroll_padding, Some(80.0));
    }

    #[test]
    fn test_unmount_clears_everything_pending() {
        let now = Instant::now();
        let mut session = SessionState::new();
        session.mount_navigator(80.0);
        session.view.section_tops.push((Section::Home, 0.0));
        if let Some(nav) = &mut session.navigator {
            nav.click(Section::Contact, now);
            assert!(nav.is_suppressed(now));
        }
        session.anim = Some(ScrollAnim::new(0.0, 400.0, now));
        session.deferred = Some(DeferredScroll {
            section: Section::Contact,
            due: now + Duration::from_millis(300),
        });

        session.unmount_navigator();

        assert!(session.navigator.is_none());
        assert!(session.anim.is_none());
        assert!(session.deferred.is_none());
        assert!(session.scroll_padding.is_none());
        assert!(session.view.section_tops.is_empty());

        // a remount starts fresh instead of inheriting the old window
        session.mount_navigator(80.0);
        let nav = session.navigator.as_ref().expect("navigator");
        assert_eq!(nav.active(), Section::Home);
        assert!(!nav.is_suppressed(now + Duration::from_millis(500)));
    }
}
