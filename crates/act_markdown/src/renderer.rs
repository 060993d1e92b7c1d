//! Document tree to UI node renderer
//!
//! Maps every [`Node`] kind to a UI element. Class names and inline styles
//! come from [`RendererOptions`] per node kind; MDX custom elements are
//! dispatched by name to registered [`MarkdownComponent`]s.
//!
//! Rendering never fails. Unknown node kinds and unregistered components
//! render as [`UiNode::Empty`] and leave a log line instead.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde_json::Value;

use act_core::{h, Props, Style, UiNode};

use crate::config::RendererConfig;
use crate::mdast::{AttributeValue, JsxAttribute, Node, NodeKind};

/// Props passed to a custom element component
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkdownProps {
    /// Attributes in document order
    pub attributes: IndexMap<String, Value>,
}

impl MarkdownProps {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

/// A component that an MDX custom element can refer to by name
pub trait MarkdownComponent {
    fn render(&self, props: &MarkdownProps, children: Vec<UiNode>) -> UiNode;
}

impl<F> MarkdownComponent for F
where
    F: Fn(&MarkdownProps, Vec<UiNode>) -> UiNode,
{
    fn render(&self, props: &MarkdownProps, children: Vec<UiNode>) -> UiNode {
        self(props, children)
    }
}

/// Renderer configuration: components, class names and styles
#[derive(Default)]
pub struct RendererOptions {
    components: FxHashMap<String, Box<dyn MarkdownComponent>>,
    class_names: FxHashMap<NodeKind, String>,
    styles: FxHashMap<NodeKind, Style>,
}

impl RendererOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component for custom elements named `name`
    pub fn component(
        mut self,
        name: impl Into<String>,
        component: impl MarkdownComponent + 'static,
    ) -> Self {
        self.components.insert(name.into(), Box::new(component));
        self
    }

    pub fn class_name(mut self, kind: NodeKind, class_name: impl Into<String>) -> Self {
        self.class_names.insert(kind, class_name.into());
        self
    }

    pub fn style(mut self, kind: NodeKind, style: Style) -> Self {
        self.styles.insert(kind, style);
        self
    }

    /// Apply class names and styles from a config, replacing existing entries
    pub fn with_config(mut self, config: RendererConfig) -> Self {
        self.class_names.extend(config.class_names);
        self.styles.extend(config.styles);
        self
    }

    pub fn has_component(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Class name and style for elements produced from `kind`
    fn props(&self, kind: NodeKind) -> Props {
        Props {
            class_name: self.class_names.get(&kind).cloned(),
            style: self.styles.get(&kind).cloned(),
            attributes: IndexMap::new(),
        }
    }
}

impl From<RendererConfig> for RendererOptions {
    fn from(config: RendererConfig) -> Self {
        Self::new().with_config(config)
    }
}

/// Renders document trees into UI nodes
///
/// # Example
///
/// ```rust
/// use act_markdown::{parse_markdown, MdastRenderer, NodeKind, RendererOptions};
///
/// let renderer = MdastRenderer::new(
///     RendererOptions::new().class_name(NodeKind::Paragraph, "paragraph"),
/// );
/// let node = renderer.render(&parse_markdown("Hello *world*"));
/// assert_eq!(node.to_html(), r#"<p class="paragraph">Hello <i>world</i></p>"#);
/// ```
#[derive(Default)]
pub struct MdastRenderer {
    options: RendererOptions,
}

impl MdastRenderer {
    pub fn new(options: RendererOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RendererOptions {
        &self.options
    }

    /// Render a node and its descendants
    pub fn render(&self, node: &Node) -> UiNode {
        let kind = node.kind();
        let props = || self.options.props(kind);

        match node {
            Node::Root { children } => UiNode::Fragment(self.render_all(children)),
            Node::Heading { depth, children } => h(
                format!("h{}", (*depth).clamp(1, 6)),
                props(),
                self.render_all(children),
            ),
            Node::Text { value } => UiNode::text(value.as_str()),
            Node::Paragraph { children } => h("p", props(), self.render_all(children)),
            Node::Blockquote { children } => h("blockquote", props(), self.render_all(children)),
            Node::Break => h("br", props(), Vec::new()),
            Node::Code { value, .. } | Node::InlineCode { value } => {
                h("code", props(), vec![UiNode::text(value.as_str())])
            }
            Node::Image { url, alt, title } => {
                let mut image = props().attr("src", url.as_str());
                if let Some(alt) = alt {
                    image = image.attr("alt", alt.as_str());
                }
                if let Some(title) = title {
                    image = image.attr("title", title.as_str());
                }
                h("img", image, Vec::new())
            }
            Node::Emphasis { children } => h("i", props(), self.render_all(children)),
            Node::Link { url, children, .. } => h(
                "a",
                props().attr("href", url.as_str()),
                self.render_all(children),
            ),
            Node::List { children, .. } => h("ul", props(), self.render_all(children)),
            Node::ListItem { checked, children } => {
                h("li", props(), self.render_list_item(*checked, children))
            }
            Node::Table { children } => h("table", props(), self.render_all(children)),
            Node::TableRow { children } => h("tr", props(), self.render_all(children)),
            Node::TableCell { children } => h("td", props(), self.render_all(children)),
            Node::Strong { children } => h("strong", props(), self.render_all(children)),
            Node::Yaml { .. } | Node::MdxjsEsm { .. } => {
                h("pre", props(), vec![UiNode::text("Not Supported")])
            }
            Node::MdxJsxFlowElement {
                name,
                attributes,
                children,
            } => self.render_custom_element(name.as_deref(), attributes, children),
            Node::Unknown { kind } if node.is_malformed() => {
                tracing::warn!(
                    kind = kind.as_str(),
                    "malformed markdown element, fields do not fit its type"
                );
                UiNode::Empty
            }
            Node::Delete { .. } | Node::ThematicBreak | Node::Html { .. } | Node::Unknown { .. } => {
                tracing::warn!(kind = node.type_name(), "unknown markdown element");
                UiNode::Empty
            }
        }
    }

    fn render_all(&self, nodes: &[Node]) -> Vec<UiNode> {
        nodes.iter().map(|node| self.render(node)).collect()
    }

    /// Inline the first paragraph, behind a checkbox for task items
    fn render_list_item(&self, checked: Option<bool>, children: &[Node]) -> Vec<UiNode> {
        let mut content = Vec::with_capacity(children.len() + 1);
        if let Some(checked) = checked {
            let mut style = Style::new();
            style.insert("display".to_string(), Value::from("inline"));
            let checkbox = Props::new()
                .attr("type", "checkbox")
                .attr("disabled", true)
                .attr("checked", checked)
                .style(style);
            content.push(h("input", checkbox, Vec::new()));
        }

        match children.split_first() {
            Some((Node::Paragraph { children: inline }, rest)) => {
                content.extend(self.render_all(inline));
                content.extend(self.render_all(rest));
            }
            _ => content.extend(self.render_all(children)),
        }
        content
    }

    fn render_custom_element(
        &self,
        name: Option<&str>,
        attributes: &[JsxAttribute],
        children: &[Node],
    ) -> UiNode {
        let Some(name) = name else {
            tracing::debug!("custom element without a name");
            return UiNode::Empty;
        };
        let Some(component) = self.options.components.get(name) else {
            tracing::debug!(name, "no component registered for custom element");
            return UiNode::Empty;
        };

        let props = MarkdownProps {
            attributes: attributes.iter().filter_map(attribute_entry).collect(),
        };
        component.render(&props, self.render_all(children))
    }
}

/// Attribute name and value, or `None` when the attribute is dropped
fn attribute_entry(attribute: &JsxAttribute) -> Option<(String, Value)> {
    match attribute {
        JsxAttribute::MdxJsxAttribute { name, value } => match value {
            Some(AttributeValue::Literal(literal)) => {
                Some((name.clone(), Value::String(literal.clone())))
            }
            Some(AttributeValue::Expression(expression)) if expression.is_value_expression() => {
                match serde_json::from_str(&expression.value) {
                    Ok(value) => Some((name.clone(), value)),
                    Err(err) => {
                        tracing::debug!(
                            name = name.as_str(),
                            expression = expression.value.as_str(),
                            error = %err,
                            "dropping attribute with non-JSON expression"
                        );
                        None
                    }
                }
            }
            Some(AttributeValue::Expression(_)) | None => None,
        },
        JsxAttribute::MdxJsxExpressionAttribute { .. } => None,
    }
}
