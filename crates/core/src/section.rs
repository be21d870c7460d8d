use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five fixed top-level page regions.
///
/// The set is closed and ordered — navigation, anchors, and the menu all
/// iterate [`Section::ALL`] so every surface agrees on the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Stable string identifier, used for anchors and URL fragments.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    /// Human-readable menu label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    /// Position within [`Section::ALL`].
    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Projects => 2,
            Section::Experience => 3,
            Section::Contact => 4,
        }
    }

    /// Parse a URL fragment like `#projects` (leading `#` optional).
    ///
    /// Unknown fragments resolve to `None` — a deep link to a section that
    /// does not exist is silently ignored at startup.
    pub fn from_fragment(fragment: &str) -> Option<Section> {
        fragment.trim_start_matches('#').parse().ok()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A string that names no known section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section identifier: {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "blog".parse::<Section>();
        assert_eq!(err, Err(UnknownSection("blog".into())));
    }

    #[test]
    fn order_is_stable() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["home", "about", "projects", "experience", "contact"]);
        for (i, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn fragments_parse_with_or_without_hash() {
        assert_eq!(Section::from_fragment("#projects"), Some(Section::Projects));
        assert_eq!(Section::from_fragment("contact"), Some(Section::Contact));
        assert_eq!(Section::from_fragment("#"), None);
        assert_eq!(Section::from_fragment("#résumé"), None);
    }
}
