//! Hierarchy Teardown
//!
//! Destroys every immediate child of a node. The host decides how destruction
//! happens: right away, or queued until the end of the current step. Which of
//! the two applies while the engine is running is read from
//! [`crate::runtime::is_running`].

use log::debug;

use crate::runtime;

/// How a node is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestroyMode {
    /// Remove the node and its subtree now.
    Immediate,
    /// Queue the node; it is removed when the current step ends.
    Deferred,
}

impl DestroyMode {
    /// Deferred while the engine is running, immediate otherwise.
    pub fn for_running(running: bool) -> Self {
        if running {
            DestroyMode::Deferred
        } else {
            DestroyMode::Immediate
        }
    }
}

/// Host capability: a tree of nodes with ordered children.
pub trait NodeTree {
    type Id: Copy;

    fn child_count(&self, node: Self::Id) -> usize;

    fn child_at(&self, node: Self::Id, index: usize) -> Option<Self::Id>;

    /// Destroy `node` and everything below it.
    fn destroy(&mut self, node: Self::Id, mode: DestroyMode);
}

/// Destroy every child of `node`, last index first.
///
/// Walking backwards keeps the remaining indices valid when the tree removes
/// children immediately.
///
/// # Arguments
/// * `tree` - Tree that owns `node`
/// * `node` - Parent whose immediate children are destroyed; it survives
/// * `mode` - Passed through to every [`NodeTree::destroy`] call
///
/// # Returns
/// The number of children handed to [`NodeTree::destroy`].
pub fn destroy_children<T: NodeTree + ?Sized>(
    tree: &mut T,
    node: T::Id,
    mode: DestroyMode,
) -> usize {
    let mut destroyed = 0;
    for index in (0..tree.child_count(node)).rev() {
        if let Some(child) = tree.child_at(node, index) {
            tree.destroy(child, mode);
            destroyed += 1;
        }
    }
    if destroyed > 0 {
        debug!("[Hierarchy] Destroyed {} children ({:?})", destroyed, mode);
    }
    destroyed
}

/// [`destroy_children`] with the mode picked from the global running flag.
pub fn destroy_children_auto<T: NodeTree + ?Sized>(tree: &mut T, node: T::Id) -> usize {
    destroy_children(tree, node, DestroyMode::for_running(runtime::is_running()))
}

/// Handle to a node in a [`SceneTree`]. Never reused after destruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Arena-backed node tree with immediate and end-of-step destruction.
///
/// Slots are never reused, so a stale [`NodeId`] can't alias a newer node.
/// The arena grows with every spawn; destroyed slots stay empty until the
/// tree is dropped.
#[derive(Debug, Clone, Default)]
pub struct SceneTree {
    nodes: Vec<Option<Node>>,
    live: usize,
    pending: Vec<NodeId>,
}

impl SceneTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, optionally under `parent`. A dead parent leaves the node at the root.
    pub fn spawn(&mut self, name: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = parent.filter(|p| self.contains(*p));
        self.nodes.push(Some(Node {
            name: name.into(),
            parent,
            children: Vec::new(),
        }));
        self.live += 1;
        if let Some(parent) = parent.and_then(|p| self.node_mut(p)) {
            parent.children.push(id);
        }
        id
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Slots ever allocated, live or destroyed.
    pub fn capacity_used(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_pending_destroy(&self, id: NodeId) -> bool {
        self.pending.contains(&id)
    }

    /// Remove every node queued with [`DestroyMode::Deferred`].
    ///
    /// Returns the number of queued roots removed.
    pub fn end_step(&mut self) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let mut removed = 0;
        for id in pending {
            if self.contains(id) {
                self.remove_subtree(id);
                removed += 1;
            }
        }
        if removed > 0 {
            debug!("[SceneTree] Flushed {} deferred destroys", removed);
        }
        removed
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let Some(node) = self.nodes.get_mut(id.0).and_then(Option::take) else {
            return;
        };
        self.live -= 1;
        if let Some(parent) = node.parent.and_then(|p| self.node_mut(p)) {
            parent.children.retain(|c| *c != id);
        }

        let mut stack = node.children;
        while let Some(child) = stack.pop() {
            if let Some(removed) = self.nodes.get_mut(child.0).and_then(Option::take) {
                self.live -= 1;
                stack.extend(removed.children);
            }
        }
    }
}

impl NodeTree for SceneTree {
    type Id = NodeId;

    fn child_count(&self, node: NodeId) -> usize {
        self.children(node).len()
    }

    fn child_at(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.children(node).get(index).copied()
    }

    fn destroy(&mut self, node: NodeId, mode: DestroyMode) {
        match mode {
            DestroyMode::Immediate => self.remove_subtree(node),
            DestroyMode::Deferred => {
                if self.contains(node) && !self.pending.contains(&node) {
                    self.pending.push(node);
                }
            }
        }
    }
}
