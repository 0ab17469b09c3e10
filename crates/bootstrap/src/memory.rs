//! In-memory host document.
//!
//! Stands in for a browser DOM in tests and in the native preview. Nodes live in
//! an arena shared between the document and every root created from it.

use crate::host::{Component, HostDocument, RenderRoot};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{trace, warn};

const TEXT_TAG: &str = "#text";

/// Handle to a node of a [`MemoryDocument`].
///
/// Handles go stale when their node is removed, e.g. by a later render into
/// the same mount. Stale or foreign handles are answered with `None` or an
/// empty result rather than a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// Detached node tree produced by components and snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VNode {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Self>,
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attributes: Vec::new(), text: None, children: Vec::new() }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: TEXT_TAG.to_owned(),
            attributes: Vec::new(),
            text: Some(content.into()),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing an earlier value for the same name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn child_nodes(&self) -> &[Self] {
        &self.children
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }

    /// Number of nodes in this tree, itself included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }
}

#[derive(Debug)]
struct Node {
    tag: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Node storage. Removed slots are recycled under a new generation.
#[derive(Debug, Default)]
struct Arena {
    slots: Vec<Slot>,
    free: Vec<usize>,
    renders: usize,
}

impl Arena {
    fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.index).filter(|slot| slot.generation == id.generation)?.node.as_ref()
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots.get_mut(id.index).filter(|slot| slot.generation == id.generation)?.node.as_mut()
    }

    fn insert(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            return NodeId { index, generation: slot.generation };
        }

        self.slots.push(Slot { generation: 0, node: Some(node) });
        NodeId { index: self.slots.len() - 1, generation: 0 }
    }

    fn push(&mut self, vnode: &VNode) -> NodeId {
        let id = self.insert(Node {
            tag: vnode.tag.clone(),
            attributes: vnode.attributes.clone(),
            text: vnode.text.clone(),
            children: Vec::new(),
        });
        let children: Vec<NodeId> = vnode.children.iter().map(|child| self.push(child)).collect();
        if let Some(node) = self.get_mut(id) {
            node.children = children;
        }
        id
    }

    /// Frees `id` and everything below it.
    fn remove(&mut self, id: NodeId) {
        let Some(slot) =
            self.slots.get_mut(id.index).filter(|slot| slot.generation == id.generation)
        else {
            return;
        };
        let Some(node) = slot.node.take() else {
            return;
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);

        for child in node.children {
            self.remove(child);
        }
    }

    fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    fn snapshot(&self, id: NodeId) -> Option<VNode> {
        let node = self.get(id)?;
        Some(VNode {
            tag: node.tag.clone(),
            attributes: node.attributes.clone(),
            text: node.text.clone(),
            children: node.children.iter().filter_map(|&child| self.snapshot(child)).collect(),
        })
    }
}

/// A host document backed by an in-process node arena.
///
/// Starts as `<html><body></body></html>`. Clones share the same arena.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    arena: Rc<RefCell<Arena>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        let mut arena = Arena::default();
        arena.push(&VNode::element("html").child(VNode::element("body")));
        Self { arena: Rc::new(RefCell::new(arena)) }
    }

    /// A fresh document whose body holds one empty `<div id="{id}">`.
    #[must_use]
    pub fn with_mount_point(id: &str) -> Self {
        let document = Self::new();
        document.append(document.body(), &VNode::element("div").attr("id", id));
        document
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId { index: 0, generation: 0 }
    }

    #[must_use]
    pub const fn body(&self) -> NodeId {
        NodeId { index: 1, generation: 0 }
    }

    /// Appends a copy of `tree` under `parent` and returns the new node.
    ///
    /// Returns `None`, leaving the document untouched, when `parent` is not a
    /// live node of this document.
    pub fn append(&self, parent: NodeId, tree: &VNode) -> Option<NodeId> {
        let mut arena = self.arena.borrow_mut();
        arena.get(parent)?;
        let id = arena.push(tree);
        arena.get_mut(parent)?.children.push(id);
        Some(id)
    }

    /// Replaces every child of `parent` with a copy of `tree`.
    ///
    /// The previous children are freed; handles to them go stale.
    pub fn replace_children(&self, parent: NodeId, tree: &VNode) -> Option<NodeId> {
        let mut arena = self.arena.borrow_mut();
        let previous = std::mem::take(&mut arena.get_mut(parent)?.children);
        for child in previous {
            arena.remove(child);
        }
        drop(arena);

        self.append(parent, tree)
    }

    /// Children of `node`; empty for leaves and unknown handles.
    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.arena.borrow().get(node).map(|entry| entry.children.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.arena.borrow().get(node).map(|entry| entry.tag.clone())
    }

    #[must_use]
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.arena
            .borrow()
            .get(node)?
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    /// Detached copy of the tree rooted at `node`.
    #[must_use]
    pub fn subtree(&self, node: NodeId) -> Option<VNode> {
        self.arena.borrow().snapshot(node)
    }

    /// Number of nodes reachable from the document root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.subtree(self.root()).map_or(0, |tree| tree.node_count())
    }

    /// Nodes currently held by the arena, reachable or not.
    #[must_use]
    pub fn allocated_nodes(&self) -> usize {
        self.arena.borrow().live()
    }

    /// Renders performed by roots created from this document.
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.arena.borrow().renders
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Some(tree) = self.subtree(self.root()) {
            write_html(&mut html, &tree);
        }
        html
    }

    fn find_by_id(&self, node: NodeId, id: &str) -> Option<NodeId> {
        let arena = self.arena.borrow();
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            let Some(entry) = arena.get(current) else {
                continue;
            };
            if entry.attributes.iter().any(|(n, v)| n == "id" && v == id) {
                return Some(current);
            }
            stack.extend(entry.children.iter().rev().copied());
        }
        None
    }
}

impl HostDocument for MemoryDocument {
    type Mount = NodeId;
    type Root = MemoryRoot;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_by_id(self.root(), id)
    }

    fn create_root(&self, mount: NodeId) -> MemoryRoot {
        MemoryRoot { document: self.clone(), mount }
    }
}

/// Render root bound to one node of a [`MemoryDocument`].
///
/// Each render replaces the mount node's children with the rendered tree.
#[derive(Debug, Clone)]
pub struct MemoryRoot {
    document: MemoryDocument,
    mount: NodeId,
}

impl MemoryRoot {
    #[must_use]
    pub const fn mount(&self) -> NodeId {
        self.mount
    }

    #[must_use]
    pub const fn document(&self) -> &MemoryDocument {
        &self.document
    }
}

impl<T> RenderRoot<T> for MemoryRoot
where
    T: Component<Output = VNode>,
{
    fn render(&mut self, tree: T) {
        let vnode = tree.render();
        trace!(nodes = vnode.node_count(), "Committing rendered tree");
        if self.document.replace_children(self.mount, &vnode).is_none() {
            warn!("Mount node was removed from the document; render dropped");
            return;
        }
        self.document.arena.borrow_mut().renders += 1;
    }
}

fn write_html(out: &mut String, node: &VNode) {
    if let Some(text) = &node.text {
        out.push_str(&escape(text));
        return;
    }

    out.push('<');
    out.push_str(&node.tag);
    for (name, value) in &node.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape(value));
        out.push('"');
    }
    out.push('>');
    for child in &node.children {
        write_html(out, child);
    }
    out.push_str("</");
    out.push_str(&node.tag);
    out.push('>');
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
