/// A node in the HTML tree produced by the converter.
///
/// Leaves carry text, optionally wrapped in a single tag. Parents carry
/// children and no text of their own. There is no other shape, so every
/// constructed tree renders without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf {
        /// Wrapping tag, or `None` for bare text.
        tag: Option<String>,
        value: String,
        attrs: Vec<(String, String)>,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// Bare text with no surrounding tag.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// A tagged leaf like `<b>text</b>`.
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    /// A tagged leaf carrying attributes, like `<a href="...">text</a>`.
    pub fn leaf_with_attrs(
        tag: &str,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.to_string()),
            value: value.into(),
            attrs,
        }
    }

    /// An element wrapping child nodes.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs: Vec::new(),
        }
    }

    /// An element wrapping child nodes, with attributes on the opening tag.
    pub fn parent_with_attrs(
        tag: &str,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs,
        }
    }

    /// Serialize the node and its subtree to an HTML string.
    ///
    /// Child renderings are concatenated in order with nothing between
    /// them. Text is emitted as-is; this dialect does no HTML escaping.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf {
                tag: None, value, ..
            } => out.push_str(value),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => {
                push_open_tag(out, tag, attrs);
                out.push_str(value);
                push_close_tag(out, tag);
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                push_open_tag(out, tag, attrs);
                for child in children {
                    child.render_into(out);
                }
                push_close_tag(out, tag);
            }
        }
    }
}

fn push_open_tag(out: &mut String, tag: &str, attrs: &[(String, String)]) {
    out.push('<');
    out.push_str(tag);
    // One leading space per attribute, values always double-quoted.
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn push_close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
