//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: removing a node only detaches it, so a
//! `NodeId` stays valid for the lifetime of the tree and detached
//! subtrees can be re-inserted later.

use crate::node::{ElementData, Node, NodeData};
use crate::{DomError, DomResult, NodeId};

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::with_data(NodeData::Document)],
        }
    }

    /// The document node
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena (attached or not)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::with_data(data));
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(ElementData::new(tag)))
    }

    /// Add a detached, pre-built element
    pub fn push_element(&mut self, element: ElementData) -> NodeId {
        self.push(NodeData::Element(element))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    /// Create a detached comment
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Comment(text.to_string()))
    }

    /// Create a detached doctype
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(NodeData::Doctype { name: name.to_string() })
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id)?.as_element()
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id)?.as_element_mut()
    }

    /// Lower-cased tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(ElementData::tag)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.parent.some()
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.next_sibling.some()
    }

    /// Next sibling that is an element
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut cur = self.next_sibling(id);
        while let Some(node) = cur {
            if self.element(node).is_some() {
                return Some(node);
            }
            cur = self.next_sibling(node);
        }
        None
    }

    /// Child nodes in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Child elements in order
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id).filter(|&c| self.element(c).is_some())
    }

    /// Ancestors from the parent upwards
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&n| self.parent(n))
    }

    /// All descendants in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            out.push(node);
            let start = stack.len();
            stack.extend(self.children(node));
            stack[start..].reverse();
        }
        out
    }

    /// Inclusive containment check (`ancestor.contains(node)`)
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|a| a == ancestor)
    }

    /// Whether the node is attached to the document
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(self.root(), id)
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        let parent_node = self.get(parent).ok_or(DomError::NotFound(parent))?;
        self.get(child).ok_or(DomError::NotFound(child))?;
        let can_hold = matches!(parent_node.data, NodeData::Document | NodeData::Element(_));
        if !can_hold || child == self.root() || self.contains(child, parent) {
            return Err(DomError::HierarchyRequest { parent, child });
        }
        Ok(())
    }

    /// Append `child` as the last child of `parent`, moving it if attached
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference` (or at the end when `None`)
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<()> {
        self.check_insert(parent, child)?;
        if let Some(reference) = reference {
            if reference == child {
                return Ok(());
            }
            if self.parent(reference) != Some(parent) {
                return Err(DomError::NotAChild { parent, child: reference });
            }
        }

        self.detach(child);

        let (prev, next) = match reference {
            Some(r) => (self.nodes[r.index()].prev_sibling, r),
            None => (self.nodes[parent.index()].last_child, NodeId::NONE),
        };

        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = child;
        } else {
            self.nodes[parent.index()].last_child = child;
        }
        Ok(())
    }

    /// Insert `new_node` right after `node` within the same parent
    pub fn insert_after(&mut self, node: NodeId, new_node: NodeId) -> DomResult<()> {
        let parent = self.parent(node).ok_or(DomError::NotFound(node))?;
        let reference = self.next_sibling(node);
        if reference == Some(new_node) {
            return Ok(());
        }
        self.insert_before(parent, new_node, reference)
    }

    /// Remove `child` from `parent`
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        Ok(())
    }

    /// Unlink a node from its parent; no-op if already detached
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Detach every child of `id` and return them in order
    pub fn take_children(&mut self, id: NodeId) -> Vec<NodeId> {
        let children: Vec<NodeId> = self.children(id).collect();
        for &child in &children {
            self.detach(child);
        }
        children
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            return text.to_string();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|n| self.get(n).and_then(Node::as_text))
            .collect()
    }

    /// Replace all children with a single text node
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> DomResult<()> {
        if let Some(Node { data: NodeData::Text(content), .. }) = self.get_mut(id) {
            *content = text.to_string();
            return Ok(());
        }
        self.take_children(id);
        if !text.is_empty() {
            let node = self.create_text(text);
            self.append_child(id, node)?;
        }
        Ok(())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over child node IDs
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next.some()?;
        self.next = self.tree.get(current).map_or(NodeId::NONE, |n| n.next_sibling);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_list() -> (DomTree, NodeId, Vec<NodeId>) {
        let mut tree = DomTree::new();
        let ul = tree.create_element("ul");
        tree.append_child(tree.root(), ul).unwrap();
        let items: Vec<NodeId> = (0..3)
            .map(|_| {
                let li = tree.create_element("li");
                tree.append_child(ul, li).unwrap();
                li
            })
            .collect();
        (tree, ul, items)
    }

    #[test]
    fn test_append_and_children_order() {
        let (tree, ul, items) = tree_with_list();
        assert_eq!(tree.children(ul).collect::<Vec<_>>(), items);
        assert_eq!(tree.parent(items[1]), Some(ul));
    }

    #[test]
    fn test_insert_after_middle_and_last() {
        let (mut tree, ul, items) = tree_with_list();
        let a = tree.create_element("li");
        let b = tree.create_element("li");
        tree.insert_after(items[0], a).unwrap();
        tree.insert_after(items[2], b).unwrap();

        assert_eq!(
            tree.children(ul).collect::<Vec<_>>(),
            vec![items[0], a, items[1], items[2], b]
        );
    }

    #[test]
    fn test_detach_relinks_siblings() {
        let (mut tree, ul, items) = tree_with_list();
        tree.detach(items[1]);

        assert_eq!(tree.children(ul).collect::<Vec<_>>(), vec![items[0], items[2]]);
        assert_eq!(tree.parent(items[1]), None);
        assert!(!tree.is_connected(items[1]));

        // Reinsert at the front
        tree.insert_before(ul, items[1], Some(items[0])).unwrap();
        assert_eq!(tree.children(ul).next(), Some(items[1]));
    }

    #[test]
    fn test_hierarchy_errors() {
        let (mut tree, ul, items) = tree_with_list();
        assert!(matches!(
            tree.append_child(items[0], ul),
            Err(DomError::HierarchyRequest { .. })
        ));

        let text = tree.create_text("x");
        let el = tree.create_element("span");
        assert!(tree.append_child(text, el).is_err());

        let stray = tree.create_element("li");
        assert!(matches!(
            tree.insert_before(ul, stray, Some(text)),
            Err(DomError::NotAChild { .. })
        ));
    }

    #[test]
    fn test_descendants_document_order() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let p = tree.create_element("p");
        let em = tree.create_element("em");
        let span = tree.create_element("span");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, p).unwrap();
        tree.append_child(p, em).unwrap();
        tree.append_child(div, span).unwrap();

        assert_eq!(tree.descendants(tree.root()), vec![div, p, em, span]);
        assert!(tree.contains(div, em));
        assert!(!tree.contains(span, em));
    }

    #[test]
    fn test_text_content() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p");
        tree.append_child(tree.root(), p).unwrap();
        tree.set_text_content(p, "Hello").unwrap();
        let b = tree.create_element("b");
        let t = tree.create_text(" world");
        tree.append_child(b, t).unwrap();
        tree.append_child(p, b).unwrap();

        assert_eq!(tree.text_content(p), "Hello world");

        tree.set_text_content(p, "").unwrap();
        assert_eq!(tree.children(p).count(), 0);
    }
}
