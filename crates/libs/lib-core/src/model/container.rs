//! Container seam between the generators and the document.

use std::cell::{Cell, RefCell};

use crate::error::{AppError, Result};

/// A parent node effects attach their children to.
///
/// Methods take `&self`: DOM elements are shared handles, and the in-memory
/// implementation uses interior mutability to match.
pub trait Container {
    /// Handle to a child created by [`Container::append`].
    type Node: Clone;

    /// Remove every child.
    fn clear(&self) -> Result<()>;

    /// Create a `div` with the given class and inline style and attach it.
    fn append(&self, class_name: &str, style: &str) -> Result<Self::Node>;

    /// Detach a previously appended child.
    fn remove(&self, node: &Self::Node) -> Result<()>;

    /// Number of attached children.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Child recorded by [`MemoryContainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryNode {
    pub id: u64,
    pub class_name: String,
    pub style: String,
}

/// DOM-free [`Container`] used by tests and headless tooling.
#[derive(Debug, Default)]
pub struct MemoryContainer {
    children: RefCell<Vec<MemoryNode>>,
    next_id: Cell<u64>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current children.
    pub fn children(&self) -> Vec<MemoryNode> {
        self.children.borrow().clone()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.children.borrow().iter().any(|child| child.id == id)
    }
}

impl Container for MemoryContainer {
    type Node = u64;

    fn clear(&self) -> Result<()> {
        self.children.borrow_mut().clear();
        Ok(())
    }

    fn append(&self, class_name: &str, style: &str) -> Result<u64> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.children.borrow_mut().push(MemoryNode {
            id,
            class_name: class_name.to_string(),
            style: style.to_string(),
        });
        Ok(id)
    }

    fn remove(&self, node: &u64) -> Result<()> {
        let mut children = self.children.borrow_mut();
        let before = children.len();
        children.retain(|child| child.id != *node);
        if children.len() == before {
            return Err(AppError::NotFound(format!("node {} is not attached", node)));
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.children.borrow().len()
    }
}
