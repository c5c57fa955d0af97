/// One scrollable region of the page.
///
/// [`Section::ALL`] is the registry: both the render order of the page and
/// the order of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Path,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Path,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM anchor id, also used as the URL fragment.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Path => "path",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Path => "Path",
            Self::Projects => "Projects",
            Self::Contact => "Contact Me",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let ids = Section::ALL.map(Section::id);
        assert_eq!(ids, ["home", "path", "projects", "contact"]);
    }

    #[test]
    fn test_from_id() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
        assert_eq!(Section::from_id(""), None);
        // ids are case sensitive, like DOM ids
        assert_eq!(Section::from_id("Home"), None);
    }
}
