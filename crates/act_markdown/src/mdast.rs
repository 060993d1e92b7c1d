//! Markdown document tree
//!
//! An mdast-shaped tree: node `type` strings and field names follow the
//! mdast JSON format, so trees produced by remark (including the MDX JSX
//! extension) deserialize directly. Any `type` this model does not know
//! becomes [`Node::Unknown`] instead of failing the whole document.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// A node in the document tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Root {
        #[serde(default)]
        children: Vec<Node>,
    },
    Heading {
        depth: u8,
        #[serde(default)]
        children: Vec<Node>,
    },
    Text {
        value: String,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Blockquote {
        #[serde(default)]
        children: Vec<Node>,
    },
    Break,
    /// Fenced or indented code block
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
        value: String,
    },
    InlineCode {
        value: String,
    },
    Image {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Emphasis {
        #[serde(default)]
        children: Vec<Node>,
    },
    Link {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
    List {
        #[serde(default)]
        ordered: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<u64>,
        #[serde(default)]
        children: Vec<Node>,
    },
    ListItem {
        /// `None` for plain items, `Some` for task list items
        #[serde(default)]
        checked: Option<bool>,
        #[serde(default)]
        children: Vec<Node>,
    },
    Table {
        #[serde(default)]
        children: Vec<Node>,
    },
    TableRow {
        #[serde(default)]
        children: Vec<Node>,
    },
    TableCell {
        #[serde(default)]
        children: Vec<Node>,
    },
    Strong {
        #[serde(default)]
        children: Vec<Node>,
    },
    Delete {
        #[serde(default)]
        children: Vec<Node>,
    },
    ThematicBreak,
    /// Raw HTML, block or inline
    Html {
        value: String,
    },
    /// Front-matter block
    Yaml {
        value: String,
    },
    /// MDX `import` / `export` statements
    MdxjsEsm {
        value: String,
    },
    /// MDX custom element, dispatched by name to a registered component
    MdxJsxFlowElement {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        attributes: Vec<JsxAttribute>,
        #[serde(default)]
        children: Vec<Node>,
    },
    /// Any node whose `type` is not modeled above
    ///
    /// A node of a modeled `type` whose fields do not match (a `list` with
    /// `"ordered": null`) also lands here, children included. See
    /// [`Node::is_malformed`].
    #[serde(untagged)]
    Unknown {
        #[serde(rename = "type")]
        kind: String,
    },
}

/// An attribute of an MDX custom element
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum JsxAttribute {
    /// `name`, `name="literal"` or `name={expression}`
    MdxJsxAttribute {
        name: String,
        #[serde(default)]
        value: Option<AttributeValue>,
    },
    /// `{...spread}`
    MdxJsxExpressionAttribute { value: String },
}

/// Value of a named attribute
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Literal(String),
    Expression(ValueExpression),
}

/// An `{expression}` attribute value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueExpression {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

impl ValueExpression {
    pub const KIND: &'static str = "mdxJsxAttributeValueExpression";

    pub fn new(value: impl Into<String>) -> Self {
        Self {
            kind: Self::KIND.to_string(),
            value: value.into(),
        }
    }

    pub fn is_value_expression(&self) -> bool {
        self.kind == Self::KIND
    }
}

impl Node {
    /// Parse an mdast JSON document
    pub fn from_json(json: &str) -> Result<Node> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root { .. } => NodeKind::Root,
            Node::Heading { .. } => NodeKind::Heading,
            Node::Text { .. } => NodeKind::Text,
            Node::Paragraph { .. } => NodeKind::Paragraph,
            Node::Blockquote { .. } => NodeKind::Blockquote,
            Node::Break => NodeKind::Break,
            Node::Code { .. } => NodeKind::Code,
            Node::InlineCode { .. } => NodeKind::InlineCode,
            Node::Image { .. } => NodeKind::Image,
            Node::Emphasis { .. } => NodeKind::Emphasis,
            Node::Link { .. } => NodeKind::Link,
            Node::List { .. } => NodeKind::List,
            Node::ListItem { .. } => NodeKind::ListItem,
            Node::Table { .. } => NodeKind::Table,
            Node::TableRow { .. } => NodeKind::TableRow,
            Node::TableCell { .. } => NodeKind::TableCell,
            Node::Strong { .. } => NodeKind::Strong,
            Node::Delete { .. } => NodeKind::Delete,
            Node::ThematicBreak => NodeKind::ThematicBreak,
            Node::Html { .. } => NodeKind::Html,
            Node::Yaml { .. } => NodeKind::Yaml,
            Node::MdxjsEsm { .. } => NodeKind::MdxjsEsm,
            Node::MdxJsxFlowElement { .. } => NodeKind::MdxJsxFlowElement,
            Node::Unknown { .. } => NodeKind::Unknown,
        }
    }

    /// The mdast `type` string of this node
    pub fn type_name(&self) -> &str {
        match self {
            Node::Unknown { kind } => kind,
            node => node.kind().as_str(),
        }
    }

    /// An [`Node::Unknown`] carrying the `type` of a modeled node
    pub fn is_malformed(&self) -> bool {
        match self {
            Node::Unknown { kind } => NodeKind::from_type_name(kind).is_some(),
            _ => false,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root { children }
            | Node::Heading { children, .. }
            | Node::Paragraph { children }
            | Node::Blockquote { children }
            | Node::Emphasis { children }
            | Node::Link { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children, .. }
            | Node::Table { children }
            | Node::TableRow { children }
            | Node::TableCell { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::MdxJsxFlowElement { children, .. } => children,
            _ => &[],
        }
    }

    /// Children of a parent node, `None` for leaves
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root { children }
            | Node::Heading { children, .. }
            | Node::Paragraph { children }
            | Node::Blockquote { children }
            | Node::Emphasis { children }
            | Node::Link { children, .. }
            | Node::List { children, .. }
            | Node::ListItem { children, .. }
            | Node::Table { children }
            | Node::TableRow { children }
            | Node::TableCell { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::MdxJsxFlowElement { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Whether this is inline (phrasing) content
    pub fn is_phrasing(&self) -> bool {
        matches!(
            self,
            Node::Text { .. }
                | Node::Emphasis { .. }
                | Node::Strong { .. }
                | Node::Delete { .. }
                | Node::Link { .. }
                | Node::Image { .. }
                | Node::InlineCode { .. }
                | Node::Break
                | Node::Html { .. }
        )
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Text { value } | Node::InlineCode { value } | Node::Code { value, .. } => {
                value.clone()
            }
            node => node.children().iter().map(Node::text_content).collect(),
        }
    }
}

/// Field-less mirror of [`Node`] variants
///
/// Keys the class-name and style maps of the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Root,
    Heading,
    Text,
    Paragraph,
    Blockquote,
    Break,
    Code,
    InlineCode,
    Image,
    Emphasis,
    Link,
    List,
    ListItem,
    Table,
    TableRow,
    TableCell,
    Strong,
    Delete,
    ThematicBreak,
    Html,
    Yaml,
    MdxjsEsm,
    MdxJsxFlowElement,
    Unknown,
}

impl NodeKind {
    /// Kind of a modeled mdast `type` string
    pub fn from_type_name(name: &str) -> Option<NodeKind> {
        serde_json::from_value(serde_json::Value::from(name))
            .ok()
            .filter(|kind| *kind != NodeKind::Unknown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Heading => "heading",
            NodeKind::Text => "text",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Blockquote => "blockquote",
            NodeKind::Break => "break",
            NodeKind::Code => "code",
            NodeKind::InlineCode => "inlineCode",
            NodeKind::Image => "image",
            NodeKind::Emphasis => "emphasis",
            NodeKind::Link => "link",
            NodeKind::List => "list",
            NodeKind::ListItem => "listItem",
            NodeKind::Table => "table",
            NodeKind::TableRow => "tableRow",
            NodeKind::TableCell => "tableCell",
            NodeKind::Strong => "strong",
            NodeKind::Delete => "delete",
            NodeKind::ThematicBreak => "thematicBreak",
            NodeKind::Html => "html",
            NodeKind::Yaml => "yaml",
            NodeKind::MdxjsEsm => "mdxjsEsm",
            NodeKind::MdxJsxFlowElement => "mdxJsxFlowElement",
            NodeKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
