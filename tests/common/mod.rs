//! Shared mock host objects for integration tests.
//!
//! The real host hands testpulse duck-typed session and item objects; these
//! mocks satisfy the same capability traits with plain structs so every
//! hook can be exercised without a running host.

use testpulse::prelude::*;

/// A host test item (or grouping node) with explicit tags and parent.
#[derive(Debug, Clone)]
pub struct MockItem {
    pub nodeid: String,
    pub tags: Vec<String>,
    pub parent: Option<Box<MockItem>>,
    pub is_function: bool,
}

#[allow(dead_code)]
impl MockItem {
    /// A concrete, executable test function.
    pub fn function(nodeid: &str, tags: &[&str]) -> Self {
        Self {
            nodeid: nodeid.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            parent: None,
            is_function: true,
        }
    }

    /// A grouping node (module/class), never included in live results.
    pub fn grouping(nodeid: &str, tags: &[&str]) -> Self {
        Self {
            is_function: false,
            ..Self::function(nodeid, tags)
        }
    }

    pub fn with_parent(mut self, parent: MockItem) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

impl TestNode for MockItem {
    fn node_id(&self) -> &str {
        &self.nodeid
    }

    fn own_tags(&self) -> &[String] {
        &self.tags
    }

    fn parent(&self) -> Option<&dyn TestNode> {
        self.parent.as_deref().map(|p| p as &dyn TestNode)
    }

    fn is_test_function(&self) -> bool {
        self.is_function
    }
}

/// A session whose items collection may be absent entirely.
#[derive(Debug, Default)]
pub struct MockSession {
    pub items: Option<Vec<MockItem>>,
}

#[allow(dead_code)]
impl MockSession {
    /// Session before the collection phase produced any items collection.
    pub fn without_items() -> Self {
        Self { items: None }
    }

    pub fn with_items(items: Vec<MockItem>) -> Self {
        Self { items: Some(items) }
    }
}

impl Session for MockSession {
    fn items(&self) -> Option<Vec<&dyn TestNode>> {
        self.items
            .as_ref()
            .map(|items| items.iter().map(|i| i as &dyn TestNode).collect())
    }
}
