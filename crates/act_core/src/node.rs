//! UI node tree
//!
//! A plain description of the UI produced by renderers: elements with props,
//! text, fragments and the empty node. Nothing here lays out or paints; the
//! tree is handed to a host (or serialized with [`UiNode::to_html`]).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inline style object, CSS property (camelCase) -> value
pub type Style = IndexMap<String, Value>;

/// Pointer event behavior of an element
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerEvents {
    /// Normal hit testing
    #[default]
    All,
    /// Transparent to input
    None,
}

impl PointerEvents {
    /// CSS keyword for this behavior
    pub fn as_css(&self) -> &'static str {
        match self {
            PointerEvents::All => "all",
            PointerEvents::None => "none",
        }
    }
}

/// Properties attached to an element
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Props {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: IndexMap<String, Value>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class name
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the inline style
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Get an attribute value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.class_name.is_none() && self.style.is_none() && self.attributes.is_empty()
    }
}

/// An element node: tag, props and children
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Element {
    pub tag: String,
    pub props: Props,
    pub children: Vec<UiNode>,
}

impl Element {
    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

/// A node of the UI tree
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum UiNode {
    /// Renders nothing
    #[default]
    Empty,
    Text(String),
    Element(Element),
    /// Children without a wrapping element
    Fragment(Vec<UiNode>),
}

/// Create an element node
///
/// # Example
///
/// ```rust
/// use act_core::{h, Props, UiNode};
///
/// let node = h("p", Props::new().class_name("lead"), vec![UiNode::text("hi")]);
/// assert_eq!(node.to_html(), r#"<p class="lead">hi</p>"#);
/// ```
pub fn h(tag: impl Into<String>, props: Props, children: Vec<UiNode>) -> UiNode {
    UiNode::Element(Element {
        tag: tag.into(),
        props,
        children,
    })
}

impl UiNode {
    pub fn text(value: impl Into<String>) -> Self {
        UiNode::Text(value.into())
    }

    /// True when the node renders nothing at all
    pub fn is_empty(&self) -> bool {
        match self {
            UiNode::Empty => true,
            UiNode::Fragment(children) => children.iter().all(UiNode::is_empty),
            UiNode::Text(_) | UiNode::Element(_) => false,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            UiNode::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            UiNode::Empty => {}
            UiNode::Text(text) => out.push_str(text),
            UiNode::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            UiNode::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All elements with the given tag, depth-first in document order
    pub fn find_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.visit_elements(&mut |element| {
            if element.tag == tag {
                found.push(element);
            }
        });
        found
    }

    fn visit_elements<'a>(&'a self, f: &mut dyn FnMut(&'a Element)) {
        match self {
            UiNode::Element(element) => {
                f(element);
                for child in &element.children {
                    child.visit_elements(f);
                }
            }
            UiNode::Fragment(children) => {
                for child in children {
                    child.visit_elements(f);
                }
            }
            UiNode::Empty | UiNode::Text(_) => {}
        }
    }
}

impl From<String> for UiNode {
    fn from(value: String) -> Self {
        UiNode::Text(value)
    }
}

impl From<&str> for UiNode {
    fn from(value: &str) -> Self {
        UiNode::Text(value.to_string())
    }
}

impl From<Element> for UiNode {
    fn from(element: Element) -> Self {
        UiNode::Element(element)
    }
}

impl From<Vec<UiNode>> for UiNode {
    fn from(children: Vec<UiNode>) -> Self {
        UiNode::Fragment(children)
    }
}

impl From<Option<UiNode>> for UiNode {
    fn from(node: Option<UiNode>) -> Self {
        node.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fragment_is_empty() {
        assert!(UiNode::Empty.is_empty());
        assert!(UiNode::Fragment(vec![UiNode::Empty, UiNode::Fragment(vec![])]).is_empty());
        assert!(!UiNode::text("").is_empty());
    }

    #[test]
    fn test_text_content() {
        let node = h(
            "p",
            Props::new(),
            vec![
                UiNode::text("a "),
                h("strong", Props::new(), vec![UiNode::text("b")]),
                UiNode::Empty,
            ],
        );
        assert_eq!(node.text_content(), "a b");
    }

    #[test]
    fn test_find_by_tag() {
        let node = UiNode::Fragment(vec![
            h("p", Props::new(), vec![h("code", Props::new(), vec!["x".into()])]),
            h("code", Props::new(), vec!["y".into()]),
        ]);
        let codes = node.find_by_tag("code");
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[0].text_content(), "x");
        assert_eq!(codes[1].text_content(), "y");
    }

    #[test]
    fn test_props_builder() {
        let props = Props::new().class_name("c").attr("href", "/a").attr("href", "/b");
        assert_eq!(props.class_name.as_deref(), Some("c"));
        assert_eq!(props.get("href"), Some(&Value::from("/b")));
        assert_eq!(props.attributes.len(), 1);
        assert!(Props::new().is_empty());
    }
}
