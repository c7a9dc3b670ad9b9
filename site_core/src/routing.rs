//! Static route table with exact-segment matching and one-hop redirects.
//!
//! The table is built once at startup and immutable afterwards. Redirect
//! misconfiguration (dangling or chained targets) and duplicate sibling
//! patterns fail fast at construction instead of surfacing mid-navigation.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// Identifier of a view one route segment activates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewId(&'static str);

impl ViewId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One entry in the route table. The empty segment `""` is the index entry
/// of its level: it matches when no path segments remain.
#[derive(Debug)]
pub enum RouteNode {
    /// Activates a single view.
    Leaf { segment: &'static str, view: ViewId },
    /// Substitutes another path for resolution instead of activating a view.
    /// A redirect carries no view by construction.
    Redirect {
        segment: &'static str,
        target: &'static str,
    },
    /// Activates a container view and delegates the rest of the path to its
    /// children.
    Group {
        segment: &'static str,
        view: ViewId,
        children: Vec<RouteNode>,
    },
}

impl RouteNode {
    pub fn leaf(segment: &'static str, view: ViewId) -> Self {
        RouteNode::Leaf { segment, view }
    }

    pub fn redirect(segment: &'static str, target: &'static str) -> Self {
        RouteNode::Redirect { segment, target }
    }

    pub fn group(segment: &'static str, view: ViewId, children: Vec<RouteNode>) -> Self {
        RouteNode::Group {
            segment,
            view,
            children,
        }
    }

    fn segment(&self) -> &'static str {
        match self {
            RouteNode::Leaf { segment, .. }
            | RouteNode::Redirect { segment, .. }
            | RouteNode::Group { segment, .. } => segment,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteConfigError {
    #[error("duplicate route pattern {segment:?} under {parent:?}")]
    DuplicatePattern {
        parent: String,
        segment: &'static str,
    },
    #[error("redirect target {target:?} does not exist in the table")]
    DanglingRedirect { target: &'static str },
    #[error("redirect target {target:?} is itself a redirect")]
    ChainedRedirect { target: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route matches {path:?}")]
    NotFound { path: String },
}

/// Result of a successful resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Views that must be active simultaneously, outermost first.
    pub views: Vec<ViewId>,
    /// The effective path: the canonical form of the request, or the
    /// redirect target when an index redirect matched. Callers write this
    /// back to the address bar.
    pub path: String,
}

enum Outcome {
    Views(Vec<ViewId>),
    Redirect(&'static str),
}

/// Immutable mapping from paths to the views they activate.
#[derive(Debug)]
pub struct RouteTable {
    roots: Vec<RouteNode>,
}

impl RouteTable {
    pub fn new(roots: Vec<RouteNode>) -> Result<Self, RouteConfigError> {
        validate_siblings(&roots, "/")?;
        let table = Self { roots };
        table.validate_redirect_targets(&table.roots)?;
        Ok(table)
    }

    /// Deterministic mapping from a path to the ordered list of views that
    /// must be active, outermost first.
    ///
    /// A matched redirect triggers exactly one internal re-resolution; the
    /// returned [`Resolution::path`] is then the redirect target. A group
    /// whose children fail to match fails for the whole path, so a container
    /// is never activated alone.
    pub fn resolve(&self, path: &str) -> Result<Resolution, RouteError> {
        match self.resolve_once(path)? {
            Outcome::Views(views) => Ok(Resolution {
                views,
                path: canonical(path),
            }),
            Outcome::Redirect(target) => match self.resolve_once(target)? {
                Outcome::Views(views) => Ok(Resolution {
                    views,
                    path: canonical(target),
                }),
                // Construction rejects chained redirects, so a second hop
                // cannot occur; treat it as unmatched rather than looping.
                Outcome::Redirect(_) => Err(RouteError::NotFound { path: path.into() }),
            },
        }
    }

    fn resolve_once(&self, path: &str) -> Result<Outcome, RouteError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut views = Vec::new();
        match match_level(&self.roots, &segments, &mut views) {
            Some(LevelOutcome::Complete) => Ok(Outcome::Views(views)),
            Some(LevelOutcome::Redirect(target)) => Ok(Outcome::Redirect(target)),
            None => Err(RouteError::NotFound { path: path.into() }),
        }
    }

    fn validate_redirect_targets(&self, nodes: &[RouteNode]) -> Result<(), RouteConfigError> {
        for node in nodes {
            match node {
                RouteNode::Redirect { target, .. } => match self.resolve_once(target) {
                    Ok(Outcome::Views(_)) => {}
                    Ok(Outcome::Redirect(_)) => {
                        return Err(RouteConfigError::ChainedRedirect { target });
                    }
                    Err(_) => return Err(RouteConfigError::DanglingRedirect { target }),
                },
                RouteNode::Group { children, .. } => {
                    self.validate_redirect_targets(children)?;
                }
                RouteNode::Leaf { .. } => {}
            }
        }
        Ok(())
    }
}

enum LevelOutcome {
    Complete,
    Redirect(&'static str),
}

fn match_level(
    nodes: &[RouteNode],
    segments: &[&str],
    views: &mut Vec<ViewId>,
) -> Option<LevelOutcome> {
    // An exhausted path matches the index entry of the level.
    let (head, rest) = match segments.split_first() {
        Some((head, rest)) => (*head, rest),
        None => ("", &[] as &[&str]),
    };

    let node = nodes.iter().find(|node| node.segment() == head)?;
    match node {
        RouteNode::Leaf { view, .. } => {
            if rest.is_empty() {
                views.push(*view);
                Some(LevelOutcome::Complete)
            } else {
                None
            }
        }
        RouteNode::Redirect { target, .. } => {
            if rest.is_empty() {
                Some(LevelOutcome::Redirect(target))
            } else {
                None
            }
        }
        RouteNode::Group { view, children, .. } => {
            views.push(*view);
            match_level(children, rest, views)
        }
    }
}

fn validate_siblings(nodes: &[RouteNode], parent: &str) -> Result<(), RouteConfigError> {
    let mut seen = HashSet::new();
    for node in nodes {
        if !seen.insert(node.segment()) {
            return Err(RouteConfigError::DuplicatePattern {
                parent: parent.to_string(),
                segment: node.segment(),
            });
        }
        if let RouteNode::Group {
            segment, children, ..
        } = node
        {
            let child_parent = format!("{}{}/", parent, segment);
            validate_siblings(children, &child_parent)?;
        }
    }
    Ok(())
}

/// Canonical path form: leading slash, no trailing slash, no empty segments.
fn canonical(path: &str) -> String {
    let joined: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", joined.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: ViewId = ViewId::new("home");
    const DOCS: ViewId = ViewId::new("docs");
    const INTRO: ViewId = ViewId::new("doc-intro");
    const INSTALL: ViewId = ViewId::new("doc-install");

    fn table() -> RouteTable {
        RouteTable::new(vec![
            RouteNode::leaf("", HOME),
            RouteNode::group(
                "docs",
                DOCS,
                vec![
                    RouteNode::redirect("", "/docs/intro"),
                    RouteNode::leaf("intro", INTRO),
                    RouteNode::leaf("install", INSTALL),
                ],
            ),
        ])
        .expect("valid table")
    }

    #[test]
    fn root_resolves_to_the_home_view() {
        let resolution = table().resolve("/").unwrap();
        assert_eq!(resolution.views, [HOME]);
        assert_eq!(resolution.path, "/");
    }

    #[test]
    fn nested_path_resolves_container_then_content() {
        let resolution = table().resolve("/docs/install").unwrap();
        assert_eq!(resolution.views, [DOCS, INSTALL]);
        assert_eq!(resolution.path, "/docs/install");
    }

    #[test]
    fn container_path_follows_the_index_redirect() {
        let table = table();
        let direct = table.resolve("/docs/intro").unwrap();
        let redirected = table.resolve("/docs").unwrap();
        assert_eq!(redirected.views, direct.views);
        assert_eq!(redirected.path, "/docs/intro");
    }

    #[test]
    fn trailing_slashes_are_tolerated() {
        let table = table();
        assert_eq!(
            table.resolve("/docs/intro/").unwrap(),
            table.resolve("/docs/intro").unwrap(),
        );
    }

    #[test]
    fn unknown_path_fails_without_partial_activation() {
        let err = table().resolve("/docs/does-not-exist").unwrap_err();
        assert_eq!(
            err,
            RouteError::NotFound {
                path: "/docs/does-not-exist".into()
            }
        );
    }

    #[test]
    fn segments_beyond_a_leaf_do_not_match() {
        assert!(table().resolve("/docs/intro/deeper").is_err());
    }

    #[test]
    fn resolution_is_deterministic() {
        let table = table();
        assert_eq!(
            table.resolve("/docs/install").unwrap(),
            table.resolve("/docs/install").unwrap(),
        );
    }

    #[test]
    fn duplicate_sibling_patterns_are_rejected() {
        let err = RouteTable::new(vec![
            RouteNode::leaf("docs", HOME),
            RouteNode::leaf("docs", DOCS),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RouteConfigError::DuplicatePattern {
                parent: "/".into(),
                segment: "docs",
            }
        );
    }

    #[test]
    fn dangling_redirect_targets_are_rejected() {
        let err = RouteTable::new(vec![RouteNode::redirect("", "/nowhere")]).unwrap_err();
        assert_eq!(err, RouteConfigError::DanglingRedirect { target: "/nowhere" });
    }

    #[test]
    fn chained_redirect_targets_are_rejected() {
        let err = RouteTable::new(vec![
            RouteNode::redirect("", "/a"),
            RouteNode::redirect("a", "/b"),
            RouteNode::leaf("b", HOME),
        ])
        .unwrap_err();
        assert_eq!(err, RouteConfigError::ChainedRedirect { target: "/a" });
    }
}
