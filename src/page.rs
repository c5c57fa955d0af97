//! Page-level state owned by the top container.
//!
//! Components never mutate this directly; they send a [`PageMsg`] and the
//! container applies it, then performs the returned [`PageEffect`]s against
//! the DOM.

use std::time::Duration;

use crate::fragment::Fragment;
use crate::sections::Section;

/// Time given to the main content to mount after leaving the terms view,
/// before scrolling to an anchor inside it.
pub const MOUNT_DELAY: Duration = Duration::from_millis(100);

/// Vertical scroll after which the navbar gets an opaque background.
const SCROLLED_THRESHOLD: f64 = 20.0;

pub fn scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    MainContent,
    TermsOfService,
}

impl ViewState {
    pub fn toggled(self) -> Self {
        match self {
            Self::MainContent => Self::TermsOfService,
            Self::TermsOfService => Self::MainContent,
        }
    }
}

/// Tab inside the path section. Owned by that section, not by [`PageState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathTab {
    #[default]
    Professional,
    Education,
}

impl PathTab {
    pub const ALL: [PathTab; 2] = [PathTab::Professional, PathTab::Education];

    pub fn label(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Education => "Education",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMsg {
    /// Footer button.
    ToggleTerms,
    /// Terms link in the contact form (`true`) or the back button of the
    /// terms view (`false`).
    ShowTerms(bool),
    Navigate {
        section: String,
        close_menu: bool,
    },
    ToggleMenu,
    RequestService(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEffect {
    ScrollToTop,
    ScrollTo {
        section: Section,
        delay: Option<Duration>,
    },
    /// Replace the URL fragment without adding a history entry.
    ReplaceFragment(String),
    /// Tell the contact form to re-read the fragment.
    ServiceRequested,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageState {
    view: ViewState,
    menu_open: bool,
}

impl PageState {
    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn dispatch(&mut self, msg: PageMsg) -> Vec<PageEffect> {
        match msg {
            PageMsg::ToggleTerms => self.set_view(self.view.toggled()),
            PageMsg::ShowTerms(true) => self.set_view(ViewState::TermsOfService),
            PageMsg::ShowTerms(false) => self.set_view(ViewState::MainContent),
            PageMsg::Navigate {
                section,
                close_menu,
            } => {
                if close_menu {
                    self.menu_open = false;
                }
                match Section::from_id(&section) {
                    Some(section) => self.navigate(section),
                    None => Vec::new(),
                }
            }
            PageMsg::ToggleMenu => {
                self.menu_open = !self.menu_open;
                Vec::new()
            }
            PageMsg::RequestService(service) => self.request_service(service.trim()),
        }
    }

    fn set_view(&mut self, view: ViewState) -> Vec<PageEffect> {
        let prev = std::mem::replace(&mut self.view, view);
        if prev != view && view == ViewState::TermsOfService {
            vec![PageEffect::ScrollToTop]
        } else {
            Vec::new()
        }
    }

    fn navigate(&mut self, section: Section) -> Vec<PageEffect> {
        let delay = match self.view {
            ViewState::TermsOfService => {
                self.view = ViewState::MainContent;
                Some(MOUNT_DELAY)
            }
            ViewState::MainContent => None,
        };
        vec![PageEffect::ScrollTo { section, delay }]
    }

    fn request_service(&mut self, service: &str) -> Vec<PageEffect> {
        let mut effects = self.navigate(Section::Contact);
        if service.is_empty() {
            return effects;
        }
        effects.push(PageEffect::ReplaceFragment(
            Fragment::service_request(service).to_hash(),
        ));
        effects.push(PageEffect::ServiceRequested);
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigate(id: &str) -> PageMsg {
        PageMsg::Navigate {
            section: id.to_string(),
            close_menu: false,
        }
    }

    #[test]
    fn test_scrolled_threshold() {
        assert!(!scrolled(0.0));
        assert!(!scrolled(20.0));
        assert!(scrolled(20.5));
        assert!(scrolled(400.0));
    }

    #[test]
    fn test_initial_state() {
        let page = PageState::default();
        assert_eq!(page.view(), ViewState::MainContent);
        assert!(!page.menu_open());
    }

    #[test]
    fn test_show_terms_scrolls_to_top() {
        let mut page = PageState::default();
        let effects = page.dispatch(PageMsg::ShowTerms(true));
        assert_eq!(page.view(), ViewState::TermsOfService);
        assert_eq!(effects, vec![PageEffect::ScrollToTop]);

        // already showing, nothing to do
        let effects = page.dispatch(PageMsg::ShowTerms(true));
        assert!(effects.is_empty());

        let effects = page.dispatch(PageMsg::ShowTerms(false));
        assert_eq!(page.view(), ViewState::MainContent);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_toggle_terms_cycles() {
        let mut page = PageState::default();
        assert_eq!(
            page.dispatch(PageMsg::ToggleTerms),
            vec![PageEffect::ScrollToTop]
        );
        assert_eq!(page.view(), ViewState::TermsOfService);
        assert!(page.dispatch(PageMsg::ToggleTerms).is_empty());
        assert_eq!(page.view(), ViewState::MainContent);
    }

    #[test]
    fn test_navigate_from_main_content() {
        let mut page = PageState::default();
        for section in Section::ALL {
            let effects = page.dispatch(navigate(section.id()));
            assert_eq!(
                effects,
                vec![PageEffect::ScrollTo {
                    section,
                    delay: None
                }]
            );
        }
    }

    #[test]
    fn test_navigate_from_terms_returns_to_main_first() {
        for section in Section::ALL {
            let mut page = PageState::default();
            page.dispatch(PageMsg::ShowTerms(true));

            let effects = page.dispatch(navigate(section.id()));
            assert_eq!(page.view(), ViewState::MainContent);
            assert_eq!(
                effects,
                vec![PageEffect::ScrollTo {
                    section,
                    delay: Some(MOUNT_DELAY)
                }]
            );
        }
    }

    #[test]
    fn test_navigate_unknown_is_noop() {
        let mut page = PageState::default();
        page.dispatch(PageMsg::ShowTerms(true));
        let before = page;
        assert!(page.dispatch(navigate("blog")).is_empty());
        assert_eq!(page, before);
    }

    #[test]
    fn test_mobile_navigation_closes_menu() {
        let mut page = PageState::default();
        page.dispatch(PageMsg::ToggleMenu);
        assert!(page.menu_open());

        page.dispatch(navigate("projects"));
        assert!(page.menu_open());

        page.dispatch(PageMsg::Navigate {
            section: "projects".to_string(),
            close_menu: true,
        });
        assert!(!page.menu_open());
    }

    #[test]
    fn test_request_service_effect_order() {
        let mut page = PageState::default();
        let effects = page.dispatch(PageMsg::RequestService("Data Analysis".to_string()));
        assert_eq!(
            effects,
            vec![
                PageEffect::ScrollTo {
                    section: Section::Contact,
                    delay: None
                },
                PageEffect::ReplaceFragment("#contact?service=Data+Analysis".to_string()),
                PageEffect::ServiceRequested,
            ]
        );
    }

    #[test]
    fn test_request_blank_service_only_scrolls() {
        let mut page = PageState::default();
        let effects = page.dispatch(PageMsg::RequestService("  ".to_string()));
        assert_eq!(
            effects,
            vec![PageEffect::ScrollTo {
                section: Section::Contact,
                delay: None
            }]
        );
    }
}
