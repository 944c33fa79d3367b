use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in a table fragment: a row, a cell, or nested cell markup.
#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Custom data storage (declared sort kinds, handler IDs, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn node() -> Self {
        Self {
            id: generate_id("node"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    /// Create an editable control element with a current value.
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            content: Content::Input {
                value: value.into(),
            },
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Direct text content, when this node is a text node.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Current value, when this node is an editable control.
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            Content::Input { value } => Some(value),
            _ => None,
        }
    }

    pub fn child_count(&self) -> usize {
        match &self.content {
            Content::Children(children) => children.len(),
            _ => 0,
        }
    }

    pub fn child_at(&self, index: usize) -> Option<&Element> {
        match &self.content {
            Content::Children(children) => children.get(index),
            _ => None,
        }
    }

    pub fn first_child(&self) -> Option<&Element> {
        self.child_at(0)
    }

    /// Walk downward taking the child at the same relative position on every
    /// level, stopping at the first node without one. Used to resolve the
    /// innermost cell markup for a column.
    pub fn descend_at(&self, index: usize) -> &Element {
        let mut node = self;
        while let Some(child) = node.child_at(index) {
            node = child;
        }
        node
    }
}
