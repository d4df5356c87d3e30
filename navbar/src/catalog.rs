//! The static navigation catalog.
//!
//! A catalog is an ordered forest of [`MenuEntry`] values at most two levels
//! deep. Order is significant: entries earlier in the list stay inline the
//! longest as the viewport narrows.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, LoadError};

/// Visual identifier for a menu entry. Front-ends map these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Feed,
    Checklist,
    Scoreboard,
    Group,
    Language,
    ThumbUp,
    Search,
    AutoGraph,
    Tournaments,
    MilitaryTech,
    Pawn,
    Calendar,
    MenuBook,
    ImportContacts,
    Speed,
    AutoStories,
    LocalFire,
    BorderColor,
    Psychology,
    SignalCellular,
    Groups,
    Forum,
    Sell,
    RocketLaunch,
    Storefront,
    Help,
    Notifications,
    Logout,
    Person,
    Blog,
    Login,
    PersonAdd,
}

/// Side effect attached to a leaf entry. The presenter hands it back to the
/// caller instead of running it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    OpenExternal { url: String },
    SignOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

impl MenuEntry {
    /// Leaf entry that navigates to `href`.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            action: None,
            href: Some(href.into()),
            children: Vec::new(),
        }
    }

    /// Leaf entry that runs `action`.
    pub fn action(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            icon: None,
            action: Some(action),
            href: None,
            children: Vec::new(),
        }
    }

    /// Parent entry; activating it expands rather than navigates.
    pub fn group(label: impl Into<String>, children: Vec<MenuEntry>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            action: None,
            href: None,
            children,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn help() -> Self {
        Self::link("Help", "/help").with_icon(Icon::Help)
    }

    pub fn notifications() -> Self {
        Self::link("Notifications", "/notifications").with_icon(Icon::Notifications)
    }

    pub fn sign_out() -> Self {
        Self::action("Sign Out", Action::SignOut).with_icon(Icon::Logout)
    }

    pub fn create_profile() -> Self {
        Self::link("Profile", "/profile").with_icon(Icon::Person)
    }

    /// The trailing profile button and its dropdown.
    pub fn profile_menu() -> Self {
        Self::group(
            "Profile",
            vec![
                Self::link("My Profile", "/profile").with_icon(Icon::Person),
                Self::notifications(),
                Self::sign_out(),
            ],
        )
        .with_icon(Icon::Person)
    }

    fn meaningful_fields(&self) -> usize {
        usize::from(self.action.is_some())
            + usize::from(self.href.is_some())
            + usize::from(self.has_children())
    }
}

/// Ordered top-level entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the structural rules every catalog must satisfy: two levels at
    /// most, unique non-empty labels among siblings, and exactly one of
    /// action, link or children per entry.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_siblings(&self.entries, None)?;
        for entry in &self.entries {
            validate_siblings(&entry.children, Some(&entry.label))?;
            if let Some(nested) = entry.children.iter().find(|c| c.has_children()) {
                return Err(CatalogError::TooDeep {
                    label: nested.children[0].label.clone(),
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let catalog = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), entries = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The signed-in catalog, in the order entries should collapse.
    pub fn dojo() -> Self {
        Self::new(vec![
            MenuEntry::link("Newsfeed", "/newsfeed").with_icon(Icon::Feed),
            MenuEntry::link("Training Plan", "/profile?view=progress").with_icon(Icon::Checklist),
            MenuEntry::group(
                "Scoreboard",
                vec![
                    MenuEntry::link("My Cohort", "/scoreboard").with_icon(Icon::Group),
                    MenuEntry::link("Full Dojo", "/scoreboard/dojo").with_icon(Icon::Language),
                    MenuEntry::link("Followers", "/scoreboard/following").with_icon(Icon::ThumbUp),
                    MenuEntry::link("Search Users", "/scoreboard/search").with_icon(Icon::Search),
                    MenuEntry::link("Statistics", "/scoreboard/stats").with_icon(Icon::AutoGraph),
                ],
            )
            .with_icon(Icon::Scoreboard),
            tournaments(),
            MenuEntry::link("Games", "/games").with_icon(Icon::Pawn),
            MenuEntry::link("Calendar", "/calendar").with_icon(Icon::Calendar),
            MenuEntry::group(
                "Material",
                vec![
                    MenuEntry::link("Courses", "/courses").with_icon(Icon::ImportContacts),
                    MenuEntry::link("Tactics Tests", "/tactics").with_icon(Icon::Speed),
                    MenuEntry::link("Books", "/material/books").with_icon(Icon::AutoStories),
                    MenuEntry::link("Sparring Positions", "/material/sparring")
                        .with_icon(Icon::LocalFire),
                    MenuEntry::link("Model Annotations", "/material/modelgames")
                        .with_icon(Icon::BorderColor),
                    MenuEntry::link("Games to Memorize", "/material/memorizegames")
                        .with_icon(Icon::Psychology),
                    MenuEntry::link("Rating Conversions", "/material/ratings")
                        .with_icon(Icon::SignalCellular),
                ],
            )
            .with_icon(Icon::MenuBook),
            MenuEntry::link("Clubs", "/clubs").with_icon(Icon::Groups),
            MenuEntry::link("Chat", "/chat").with_icon(Icon::Forum),
            MenuEntry::group(
                "Shop",
                vec![
                    MenuEntry::link("Courses", "/courses").with_icon(Icon::ImportContacts),
                    MenuEntry::link("Coaching", "/coaching").with_icon(Icon::RocketLaunch),
                    MenuEntry::action(
                        "Merch",
                        Action::OpenExternal {
                            url: "https://www.chessdojo.shop/shop".to_string(),
                        },
                    )
                    .with_icon(Icon::Storefront),
                ],
            )
            .with_icon(Icon::Sell),
        ])
    }

    /// What a signed-out visitor sees.
    pub fn unauthenticated() -> Self {
        Self::new(vec![
            tournaments(),
            MenuEntry::link("Blog", "/blog").with_icon(Icon::Blog),
            MenuEntry::link("Signin", "/signin").with_icon(Icon::Login),
            MenuEntry::link("Signup", "/signup").with_icon(Icon::PersonAdd),
        ])
    }
}

fn tournaments() -> MenuEntry {
    MenuEntry::group(
        "Tournaments",
        vec![
            MenuEntry::link("DojoLiga", "/tournaments").with_icon(Icon::MilitaryTech),
            MenuEntry::link("Open Classical", "/tournaments/open-classical")
                .with_icon(Icon::MilitaryTech),
        ],
    )
    .with_icon(Icon::Tournaments)
}

fn validate_siblings(entries: &[MenuEntry], parent: Option<&str>) -> Result<(), CatalogError> {
    let parent_name = || match parent {
        Some(label) => format!("'{}'", label),
        None => "top level".to_string(),
    };

    let mut seen = HashSet::new();
    for entry in entries {
        if entry.label.trim().is_empty() {
            return Err(CatalogError::EmptyLabel { path: parent_name() });
        }
        if !seen.insert(entry.label.as_str()) {
            return Err(CatalogError::DuplicateLabel {
                label: entry.label.clone(),
                parent: parent_name(),
            });
        }
        match entry.meaningful_fields() {
            0 => {
                return Err(CatalogError::Inert {
                    label: entry.label.clone(),
                })
            }
            1 => {}
            count => {
                return Err(CatalogError::Ambiguous {
                    label: entry.label.clone(),
                    count,
                })
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs_are_valid() {
        assert_eq!(Catalog::dojo().validate(), Ok(()));
        assert_eq!(Catalog::unauthenticated().validate(), Ok(()));
    }

    #[test]
    fn test_dojo_catalog_order() {
        let catalog = Catalog::dojo();
        let labels: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Newsfeed",
                "Training Plan",
                "Scoreboard",
                "Tournaments",
                "Games",
                "Calendar",
                "Material",
                "Clubs",
                "Chat",
                "Shop",
            ]
        );
    }

    #[test]
    fn test_same_label_allowed_under_different_parents() {
        // "Courses" appears under both Material and Shop
        let catalog = Catalog::dojo();
        let parents: Vec<&str> = catalog
            .entries()
            .iter()
            .filter(|e| e.children.iter().any(|c| c.label == "Courses"))
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(parents, vec!["Material", "Shop"]);
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_rejects_duplicate_siblings() {
        let catalog = Catalog::new(vec![
            MenuEntry::link("Games", "/games"),
            MenuEntry::link("Games", "/games/2"),
        ]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateLabel {
                label: "Games".to_string(),
                parent: "top level".to_string(),
            })
        );
    }

    #[test]
    fn test_rejects_third_level() {
        let catalog = Catalog::new(vec![MenuEntry::group(
            "Outer",
            vec![MenuEntry::group(
                "Middle",
                vec![MenuEntry::link("Inner", "/inner")],
            )],
        )]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::TooDeep {
                label: "Inner".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_inert_and_ambiguous_entries() {
        let inert = Catalog::new(vec![MenuEntry::group("Empty", vec![])]);
        assert!(matches!(inert.validate(), Err(CatalogError::Inert { .. })));

        let mut both = MenuEntry::link("Both", "/both");
        both.action = Some(Action::SignOut);
        let ambiguous = Catalog::new(vec![both]);
        assert_eq!(
            ambiguous.validate(),
            Err(CatalogError::Ambiguous {
                label: "Both".to_string(),
                count: 2
            })
        );
    }

    #[test]
    fn test_rejects_blank_child_label() {
        let catalog = Catalog::new(vec![MenuEntry::group(
            "Shop",
            vec![MenuEntry::link("  ", "/x")],
        )]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyLabel {
                path: "'Shop'".to_string()
            })
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"label": "Games", "icon": "pawn", "href": "/games"},
            {"label": "Shop", "children": [
                {"label": "Merch", "action": {"kind": "open_external", "url": "https://example.com"}}
            ]},
            {"label": "Leave", "action": {"kind": "sign_out"}}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.entries()[0].icon, Some(Icon::Pawn));
        assert_eq!(
            catalog.entries()[1].children[0].action,
            Some(Action::OpenExternal {
                url: "https://example.com".to_string()
            })
        );
        assert_eq!(catalog.entries()[2].action, Some(Action::SignOut));
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"[{"label": "Nothing"}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(LoadError::Catalog(CatalogError::Inert { .. }))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string(&Catalog::dojo()).unwrap();
        std::fs::write(&path, json).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(loaded, Catalog::dojo());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
