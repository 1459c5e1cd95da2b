pub mod navigator;
pub mod router;
pub mod section;

pub use navigator::{DeferredScroll, NavPhase, ScrollAnim, ScrollView, SectionNavigator};
pub use router::{AdminPage, Route, Router};
pub use section::Section;
