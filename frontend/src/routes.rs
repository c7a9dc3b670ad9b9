//! Route surface and the documentation registry.
//!
//! `DOC_ENTRIES` is the single source for the route table children, the
//! docs sidebar and the navbar search.

use site_core::{RouteConfigError, RouteNode, RouteTable, ViewId};
use zoon::*;

use crate::app::App;
use crate::pages;

pub const HOME_VIEW: ViewId = ViewId::new("home");
pub const DOCS_VIEW: ViewId = ViewId::new("docs");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocGroup {
    GettingStarted,
    Components,
}

impl DocGroup {
    pub fn title(self) -> &'static str {
        match self {
            DocGroup::GettingStarted => "Getting Started",
            DocGroup::Components => "Components",
        }
    }
}

#[derive(Clone, Copy)]
pub struct DocEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub group: DocGroup,
    pub view: ViewId,
    pub page: fn(&App) -> RawElOrText,
}

impl DocEntry {
    pub fn path(&self) -> String {
        format!("/docs/{}", self.slug)
    }
}

pub const DOC_ENTRIES: &[DocEntry] = &[
    DocEntry {
        slug: "intro",
        title: "Introduction",
        group: DocGroup::GettingStarted,
        view: ViewId::new("doc-intro"),
        page: pages::docs::intro::page,
    },
    DocEntry {
        slug: "install",
        title: "Installation",
        group: DocGroup::GettingStarted,
        view: ViewId::new("doc-install"),
        page: pages::docs::install::page,
    },
    DocEntry {
        slug: "theming",
        title: "Dark Mode",
        group: DocGroup::GettingStarted,
        view: ViewId::new("doc-theming"),
        page: pages::docs::theming::page,
    },
    DocEntry {
        slug: "accordion",
        title: "Accordion",
        group: DocGroup::Components,
        view: ViewId::new("doc-accordion"),
        page: pages::docs::accordion::page,
    },
    DocEntry {
        slug: "alerts",
        title: "Alerts",
        group: DocGroup::Components,
        view: ViewId::new("doc-alerts"),
        page: pages::docs::alerts::page,
    },
    DocEntry {
        slug: "breadcrumbs",
        title: "Breadcrumbs",
        group: DocGroup::Components,
        view: ViewId::new("doc-breadcrumbs"),
        page: pages::docs::breadcrumbs::page,
    },
    DocEntry {
        slug: "button",
        title: "Button",
        group: DocGroup::Components,
        view: ViewId::new("doc-button"),
        page: pages::docs::button::page,
    },
    DocEntry {
        slug: "card-product",
        title: "Product Card",
        group: DocGroup::Components,
        view: ViewId::new("doc-card-product"),
        page: pages::docs::card_product::page,
    },
    DocEntry {
        slug: "card-feature",
        title: "Feature Card",
        group: DocGroup::Components,
        view: ViewId::new("doc-card-feature"),
        page: pages::docs::card_feature::page,
    },
    DocEntry {
        slug: "card-info",
        title: "Info Card",
        group: DocGroup::Components,
        view: ViewId::new("doc-card-info"),
        page: pages::docs::card_info::page,
    },
    DocEntry {
        slug: "dropdown",
        title: "Dropdown",
        group: DocGroup::Components,
        view: ViewId::new("doc-dropdown"),
        page: pages::docs::dropdown::page,
    },
    DocEntry {
        slug: "faqs",
        title: "FAQs",
        group: DocGroup::Components,
        view: ViewId::new("doc-faqs"),
        page: pages::docs::faqs::page,
    },
    DocEntry {
        slug: "input",
        title: "Input",
        group: DocGroup::Components,
        view: ViewId::new("doc-input"),
        page: pages::docs::input::page,
    },
];

pub fn doc_entry(slug: &str) -> Option<&'static DocEntry> {
    DOC_ENTRIES.iter().find(|entry| entry.slug == slug)
}

pub fn route_table() -> Result<RouteTable, RouteConfigError> {
    let mut docs_children = vec![RouteNode::redirect("", "/docs/intro")];
    docs_children.extend(
        DOC_ENTRIES
            .iter()
            .map(|entry| RouteNode::leaf(entry.slug, entry.view)),
    );
    RouteTable::new(vec![
        RouteNode::leaf("", HOME_VIEW),
        RouteNode::group("docs", DOCS_VIEW, docs_children),
    ])
}

/// Case-insensitive title/slug filter behind the navbar search box.
/// A blank query yields nothing rather than everything.
pub fn search(query: &str) -> Vec<&'static DocEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    DOC_ENTRIES
        .iter()
        .filter(|entry| entry.title.to_lowercase().contains(&query) || entry.slug.contains(&query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_route_table_is_valid() {
        assert!(route_table().is_ok());
    }

    #[test]
    fn every_doc_entry_resolves_under_docs() {
        let table = route_table().unwrap();
        for entry in DOC_ENTRIES {
            let resolution = table.resolve(&entry.path()).unwrap();
            assert_eq!(resolution.views, [DOCS_VIEW, entry.view]);
        }
    }

    #[test]
    fn the_docs_index_redirects_to_intro() {
        let table = route_table().unwrap();
        let resolution = table.resolve("/docs").unwrap();
        assert_eq!(resolution.path, "/docs/intro");
    }

    #[test]
    fn search_is_case_insensitive_over_titles_and_slugs() {
        let hits = search("BUTTON");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].slug, "button");

        let card_hits = search("card");
        assert_eq!(card_hits.len(), 3);
    }

    #[test]
    fn blank_search_matches_nothing() {
        assert!(search("").is_empty());
        assert!(search("   ").is_empty());
        assert!(search("tooltip").is_empty());
    }
}
