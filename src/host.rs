// SPDX-License-Identifier: MPL-2.0
//! Host page that receives mounted widgets.
//!
//! The page is a flat set of nodes (the `body` plus the regions a host
//! application declares), each addressable with a simple selector: `#id`,
//! `.class` or a bare tag name. A node keeps an ordered list of children,
//! either foreign content owned by the host or surfaces mounted by widgets.
//!
//! # Example
//!
//! ```
//! use iced_vplayer::host::HostPage;
//!
//! let mut page = HostPage::new();
//! let stage = page.add_node("div", Some("stage"), &["panel"]);
//!
//! assert_eq!(page.query("#stage"), Some(stage));
//! assert_eq!(page.query(".panel"), Some(stage));
//! assert!(page.query("#missing").is_none());
//! ```

use std::fmt;

/// Handle of a node in a [`HostPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Handle of a widget surface mounted in a [`HostPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// Content of a host node.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    /// Content owned by the host application.
    Text(String),
    /// A widget surface.
    Surface(SurfaceId),
}

/// Parsed selector. Only single simple selectors are supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
    Tag(String),
}

impl Selector {
    /// Parses `#id`, `.class` or `tag`. Anything else (combinators, attribute
    /// selectors, empty names) yields `None`.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let selector = if let Some(rest) = input.strip_prefix('#') {
            Selector::Id(rest.to_string())
        } else if let Some(rest) = input.strip_prefix('.') {
            Selector::Class(rest.to_string())
        } else {
            // Tag names are case-insensitive, ids and classes are not.
            Selector::Tag(input.to_ascii_lowercase())
        };

        let name = match &selector {
            Selector::Id(name) | Selector::Class(name) | Selector::Tag(name) => name,
        };
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then_some(selector)
    }

    fn matches(&self, node: &Node) -> bool {
        match self {
            Selector::Id(id) => node.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => node.classes.iter().any(|c| c == class),
            Selector::Tag(tag) => node.tag == *tag,
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    children: Vec<Child>,
}

/// The page widgets are mounted into.
#[derive(Debug, Clone)]
pub struct HostPage {
    nodes: Vec<Node>,
    next_surface: u64,
    mutations: usize,
}

impl Default for HostPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HostPage {
    /// Creates a page holding only a `body` node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                tag: "body".to_string(),
                id: None,
                classes: Vec::new(),
                children: Vec::new(),
            }],
            next_surface: 0,
            mutations: 0,
        }
    }

    /// The `body` node.
    #[must_use]
    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Declares a region of the page.
    pub fn add_node(&mut self, tag: &str, id: Option<&str>, classes: &[&str]) -> NodeId {
        self.nodes.push(Node {
            tag: tag.to_ascii_lowercase(),
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Appends host-owned content to a node.
    pub fn append_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(node.0) {
            node.children.push(Child::Text(text.into()));
            self.mutations += 1;
        }
    }

    /// Returns the first node matching `selector`, in declaration order.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<NodeId> {
        let selector = Selector::parse(selector)?;
        self.nodes
            .iter()
            .position(|node| selector.matches(node))
            .map(NodeId)
    }

    /// Mounts a new surface as the first child of `node`.
    ///
    /// Returns `None` if the node does not belong to this page.
    pub fn insert_first(&mut self, node: NodeId) -> Option<SurfaceId> {
        let node = self.nodes.get_mut(node.0)?;
        let surface = SurfaceId(self.next_surface);
        self.next_surface += 1;
        node.children.insert(0, Child::Surface(surface));
        self.mutations += 1;
        Some(surface)
    }

    /// Children of `node`, in order. Empty for unknown nodes.
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[Child] {
        self.nodes
            .get(node.0)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
    }

    /// Number of structural changes made to the page since its creation.
    #[must_use]
    pub fn mutation_count(&self) -> usize {
        self.mutations
    }
}
