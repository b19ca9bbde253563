//! HTML serialization
//!
//! Used for diagnostics and assertions; not a full fragment serializer
//! (no raw-text handling for `<script>`/`<style>`).

use crate::node::NodeData;
use crate::{DomTree, NodeId};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl DomTree {
    /// Serialize a node and its subtree
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    /// Serialize the children of a node
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            self.write_node(child, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };
        match &node.data {
            NodeData::Document => {
                for child in self.children(id) {
                    self.write_node(child, out);
                }
            }
            NodeData::Doctype { name } => {
                out.push_str("<!DOCTYPE ");
                out.push_str(name);
                out.push('>');
            }
            NodeData::Text(text) => escape_into(text, false, out),
            NodeData::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
            NodeData::Element(el) => {
                out.push('<');
                out.push_str(el.tag());
                for attr in el.attrs() {
                    out.push(' ');
                    out.push_str(&attr.name);
                    out.push_str("=\"");
                    escape_into(&attr.value, true, out);
                    out.push('"');
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&el.tag()) {
                    return;
                }
                for child in self.children(id) {
                    self.write_node(child, out);
                }
                out.push_str("</");
                out.push_str(el.tag());
                out.push('>');
            }
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::DomTree;

    #[test]
    fn test_serialize_escapes() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        tree.element_mut(div).unwrap().set_attr("title", "say \"hi\"");
        let text = tree.create_text("a < b & c");
        let br = tree.create_element("br");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, text).unwrap();
        tree.append_child(div, br).unwrap();

        assert_eq!(
            tree.outer_html(div),
            "<div title=\"say &quot;hi&quot;\">a &lt; b &amp; c<br></div>"
        );
        assert_eq!(tree.inner_html(div), "a &lt; b &amp; c<br>");
    }
}
