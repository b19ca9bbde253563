//! HTML5 Parser implementation
//!
//! Parses with html5ever into an `RcDom`, then copies the result into
//! the arena tree.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use pagekit_dom::{Document, DomTree, ElementData, NodeId};

use crate::HtmlError;

/// HTML5 parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser {
    keep_comments: bool,
}

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep comment nodes in the output tree
    pub fn with_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Result<Document, HtmlError> {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse HTML with a document URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Result<Document, HtmlError> {
        tracing::debug!("Parsing HTML document: {}", url);

        let dom = parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut document = Document::empty(url);
        let root = document.tree().root();
        self.convert_node(&dom.document, document.tree_mut(), root)?;
        document.finalize();

        tracing::debug!("Parsed {} nodes", document.tree().len());
        Ok(document)
    }

    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> Result<(), HtmlError> {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent)?;
                }
            }
            RcNodeData::Doctype { name, .. } => {
                let id = tree.create_doctype(&**name);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Text { contents } => {
                let text = contents.borrow();
                if !text.trim().is_empty() {
                    let id = tree.create_text(&**text);
                    tree.append_child(parent, id)?;
                }
            }
            RcNodeData::Comment { contents } => {
                if self.keep_comments {
                    let id = tree.create_comment(&**contents);
                    tree.append_child(parent, id)?;
                }
            }
            RcNodeData::Element { name, attrs, .. } => {
                let mut element = ElementData::new(&*name.local);
                for attr in attrs.borrow().iter() {
                    element.set_attr(&*attr.name.local, attr.value.to_string());
                }
                let id = tree.push_element(element);
                tree.append_child(parent, id)?;

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id)?;
                }
            }
            RcNodeData::ProcessingInstruction { .. } => {}
        }
        Ok(())
    }
}
