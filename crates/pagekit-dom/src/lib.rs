//! Pagekit DOM - Document Object Model
//!
//! Arena-based document tree that the page behaviors read and mutate.
//! There is no layout engine: element geometry is supplied by the host.

mod classlist;
mod document;
mod error;
mod forms;
mod geometry;
mod node;
mod selector;
mod serialize;
mod style;
mod tree;

pub use classlist::ClassList;
pub use document::Document;
pub use error::{DomError, DomResult};
pub use geometry::{DomRect, ElementGeometry};
pub use node::{Attribute, ElementData, Node, NodeData};
pub use selector::Selector;
pub use style::InlineStyle;
pub use tree::DomTree;

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for a missing link
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Raw arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub(crate) fn some(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }
}
