//! Markdown text to document tree
//!
//! Builds an mdast-shaped [`Node`] tree from pulldown-cmark events with GFM
//! tables, strikethrough and task lists enabled, plus YAML front-matter. The
//! result mirrors what remark produces for the same input:
//!
//! - tight list items have their inline content wrapped in a paragraph
//! - table header cells become the first `tableRow`
//! - a front-matter block becomes a leading `yaml` node; a `---` pair later
//!   in the document is a thematic break and a setext heading
//! - a capitalized tag (`<Chart kind="bar" />`, `<Callout>...</Callout>`)
//!   becomes an `mdxJsxFlowElement` whose children are the markdown between
//!   its tags, whether that sits in one HTML block, spans several blocks
//!   separated by blank lines, or wraps the inline content of a paragraph

use pulldown_cmark::{
    CodeBlockKind, Event, HeadingLevel, MetadataBlockKind, Options, Parser, Tag, TagEnd,
};
use regex::Regex;
use std::sync::OnceLock;

use crate::mdast::{AttributeValue, JsxAttribute, Node, ValueExpression};

/// Parse markdown text into a `root` node
pub fn parse_markdown(markdown_text: &str) -> Node {
    build_tree(markdown_text, true)
}

/// Markdown between the tags of a custom element
fn parse_fragment(markdown_text: &str) -> Vec<Node> {
    match build_tree(markdown_text, false) {
        Node::Root { children } => children,
        _ => Vec::new(),
    }
}

fn build_tree(markdown_text: &str, front_matter: bool) -> Node {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    if front_matter {
        options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
    }

    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(markdown_text, options) {
        builder.handle_event(event);
    }
    builder.finish()
}

/// Stack-based tree construction state
struct TreeBuilder {
    /// Open nodes, root at the bottom
    stack: Vec<Node>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Node::root(Vec::new())],
        }
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.handle_text(&text),
            Event::Code(code) => self.push_leaf(Node::InlineCode {
                value: code.to_string(),
            }),
            Event::Html(html) => self.handle_html(&html),
            Event::InlineHtml(html) => self.push_leaf(Node::Html {
                value: html.to_string(),
            }),
            Event::SoftBreak => self.handle_text("\n"),
            Event::HardBreak => self.push_leaf(Node::Break),
            Event::Rule => self.push_leaf(Node::ThematicBreak),
            Event::TaskListMarker(checked) => self.handle_task_marker(checked),
            Event::FootnoteReference(_) => self.push_leaf(Node::Unknown {
                kind: "footnoteReference".to_string(),
            }),
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        let node = match tag {
            Tag::Paragraph => Node::paragraph(Vec::new()),
            Tag::Heading { level, .. } => Node::Heading {
                depth: heading_depth(level),
                children: Vec::new(),
            },
            Tag::BlockQuote => Node::Blockquote {
                children: Vec::new(),
            },
            Tag::CodeBlock(kind) => Node::Code {
                lang: match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                },
                value: String::new(),
            },
            Tag::HtmlBlock => Node::Html {
                value: String::new(),
            },
            Tag::List(start) => Node::List {
                ordered: start.is_some(),
                start,
                children: Vec::new(),
            },
            Tag::Item => Node::ListItem {
                checked: None,
                children: Vec::new(),
            },
            Tag::Table(_) => Node::Table {
                children: Vec::new(),
            },
            // Header cells are not wrapped in a row event
            Tag::TableHead | Tag::TableRow => Node::TableRow {
                children: Vec::new(),
            },
            Tag::TableCell => Node::TableCell {
                children: Vec::new(),
            },
            Tag::Emphasis => Node::Emphasis {
                children: Vec::new(),
            },
            Tag::Strong => Node::Strong {
                children: Vec::new(),
            },
            Tag::Strikethrough => Node::Delete {
                children: Vec::new(),
            },
            Tag::Link {
                dest_url, title, ..
            } => Node::Link {
                url: dest_url.to_string(),
                title: non_empty(&title),
                children: Vec::new(),
            },
            Tag::Image {
                dest_url, title, ..
            } => Node::Image {
                url: dest_url.to_string(),
                alt: None,
                title: non_empty(&title),
            },
            Tag::MetadataBlock(MetadataBlockKind::YamlStyle) => Node::Yaml {
                value: String::new(),
            },
            Tag::MetadataBlock(MetadataBlockKind::PlusesStyle) => Node::Unknown {
                kind: "toml".to_string(),
            },
            Tag::FootnoteDefinition(_) => Node::Unknown {
                kind: "footnoteDefinition".to_string(),
            },
        };
        self.stack.push(node);
    }

    fn end_tag(&mut self, _tag: TagEnd) {
        // Custom elements left open inside a container end with it
        while self.stack.len() > 1
            && matches!(self.stack.last(), Some(Node::MdxJsxFlowElement { .. }))
        {
            self.close_top();
        }
        // The root is never closed by an event
        if self.stack.len() < 2 {
            return;
        }
        let Some(node) = self.stack.pop() else {
            return;
        };
        let node = match node {
            Node::Code { lang, mut value } => {
                if value.ends_with('\n') {
                    value.pop();
                }
                Node::Code { lang, value }
            }
            Node::Yaml { value } if !self.at_document_start() => {
                self.push_leaf(Node::ThematicBreak);
                let heading = value.trim();
                if heading.is_empty() {
                    Node::ThematicBreak
                } else {
                    Node::Heading {
                        depth: 2,
                        children: vec![Node::text(heading)],
                    }
                }
            }
            Node::Yaml { value } => Node::Yaml {
                value: value.trim_end_matches('\n').to_string(),
            },
            Node::Html { value } => match jsx_block(&value) {
                Some(JsxBlock::Element(element)) => element,
                Some(JsxBlock::Open(element)) => {
                    self.stack.push(element);
                    return;
                }
                Some(JsxBlock::Close(name)) if self.is_open_element(&name) => {
                    self.close_top();
                    return;
                }
                _ => Node::Html {
                    value: value.trim_end_matches('\n').to_string(),
                },
            },
            Node::Paragraph { children } => match inline_element(&children) {
                Some(element) => element,
                None => Node::paragraph(children),
            },
            Node::ListItem { checked, children } => Node::ListItem {
                checked,
                children: wrap_phrasing(children),
            },
            node => node,
        };
        self.push_leaf(node);
    }

    fn handle_text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(
                Node::Code { value, .. } | Node::Yaml { value } | Node::Html { value },
            ) => value.push_str(text),
            Some(Node::Image { alt, .. }) => alt.get_or_insert_with(String::new).push_str(text),
            Some(parent) => {
                let Some(children) = parent.children_mut() else {
                    return;
                };
                // Adjacent text events belong to one text node
                if let Some(Node::Text { value }) = children.last_mut() {
                    value.push_str(text);
                } else {
                    children.push(Node::text(text));
                }
            }
            None => {}
        }
    }

    fn handle_html(&mut self, html: &str) {
        match self.stack.last_mut() {
            Some(Node::Html { value }) => value.push_str(html),
            _ => self.push_leaf(Node::Html {
                value: html.to_string(),
            }),
        }
    }

    fn handle_task_marker(&mut self, checked: bool) {
        let item = self
            .stack
            .iter_mut()
            .rev()
            .find(|node| matches!(node, Node::ListItem { .. }));
        if let Some(Node::ListItem { checked: slot, .. }) = item {
            *slot = Some(checked);
        }
    }

    /// Nothing but the root has been opened or finished yet
    fn at_document_start(&self) -> bool {
        matches!(self.stack.as_slice(), [root] if root.children().is_empty())
    }

    fn is_open_element(&self, name: &str) -> bool {
        matches!(
            self.stack.last(),
            Some(Node::MdxJsxFlowElement { name: Some(open), .. }) if open == name
        )
    }

    fn close_top(&mut self) {
        if let Some(node) = self.stack.pop() {
            self.push_leaf(node);
        }
    }

    /// Append a finished node to the innermost open parent
    fn push_leaf(&mut self, node: Node) {
        // Formatting inside image alt text is flattened into the alt string
        if let Some(Node::Image { alt, .. }) = self.stack.last_mut() {
            alt.get_or_insert_with(String::new)
                .push_str(&node.text_content());
            return;
        }
        let parent = self
            .stack
            .iter_mut()
            .rev()
            .find_map(|open| open.children_mut());
        if let Some(children) = parent {
            children.push(node);
        }
    }

    fn finish(mut self) -> Node {
        // Unbalanced events only happen on malformed streams; close what is open
        while self.stack.len() > 1 {
            self.close_top();
        }
        self.stack
            .pop()
            .unwrap_or_else(|| Node::root(Vec::new()))
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Group runs of inline children into paragraphs (tight list items)
fn wrap_phrasing(children: Vec<Node>) -> Vec<Node> {
    if !children.iter().any(Node::is_phrasing) {
        return children;
    }

    let mut wrapped = Vec::with_capacity(children.len());
    let mut run = Vec::new();
    for child in children {
        if child.is_phrasing() {
            run.push(child);
            continue;
        }
        if !run.is_empty() {
            wrapped.push(Node::paragraph(std::mem::take(&mut run)));
        }
        wrapped.push(child);
    }
    if !run.is_empty() {
        wrapped.push(Node::paragraph(run));
    }
    wrapped
}

fn self_closing_tag() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^<([A-Z][A-Za-z0-9]*)(\s[^<>]*?)?\s*/>$").ok())
        .as_ref()
}

fn opening_tag() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?s)^<([A-Z][A-Za-z0-9]*)(\s[^<>]*?)?\s*>(.*)$").ok())
        .as_ref()
}

fn closing_tag() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^</([A-Z][A-Za-z0-9]*)\s*>$").ok())
        .as_ref()
}

/// Custom element found in an HTML block
#[derive(Debug)]
enum JsxBlock {
    /// `<Name />`, or `<Name>...</Name>` within the block
    Element(Node),
    /// `<Name>` whose closing tag comes in a later block
    Open(Node),
    Close(String),
}

/// `<Name attrs>` followed by whatever is left of the source
struct OpenTag<'a> {
    name: &'a str,
    attributes: Vec<JsxAttribute>,
    rest: &'a str,
}

fn open_tag(html: &str) -> Option<OpenTag<'_>> {
    let captures = opening_tag()?.captures(html)?;
    let attributes = captures.get(2).map_or("", |source| source.as_str());
    if attributes.trim_end().ends_with('/') {
        return None;
    }
    Some(OpenTag {
        name: captures.get(1)?.as_str(),
        attributes: parse_attributes(attributes),
        rest: captures.get(3).map_or("", |rest| rest.as_str()),
    })
}

fn close_tag(html: &str) -> Option<&str> {
    Some(closing_tag()?.captures(html)?.get(1)?.as_str())
}

fn custom_element(name: &str, attributes: Vec<JsxAttribute>, children: Vec<Node>) -> Node {
    Node::MdxJsxFlowElement {
        name: Some(name.to_string()),
        attributes,
        children,
    }
}

/// Recognize a custom element tag in the source of an HTML block
fn jsx_block(html: &str) -> Option<JsxBlock> {
    let html = html.trim();
    if let Some(captures) = self_closing_tag()?.captures(html) {
        let attributes = captures
            .get(2)
            .map(|source| parse_attributes(source.as_str()))
            .unwrap_or_default();
        return Some(JsxBlock::Element(custom_element(
            captures.get(1)?.as_str(),
            attributes,
            Vec::new(),
        )));
    }
    if let Some(name) = close_tag(html) {
        return Some(JsxBlock::Close(name.to_string()));
    }

    let tag = open_tag(html)?;
    let closing = format!("</{}>", tag.name);
    Some(match tag.rest.trim_end().strip_suffix(closing.as_str()) {
        Some(inner) => {
            JsxBlock::Element(custom_element(tag.name, tag.attributes, parse_fragment(inner)))
        }
        None => JsxBlock::Open(custom_element(
            tag.name,
            tag.attributes,
            parse_fragment(tag.rest),
        )),
    })
}

/// A paragraph that is exactly `<Name>inline content</Name>`
fn inline_element(children: &[Node]) -> Option<Node> {
    let [Node::Html { value: first }, inner @ .., Node::Html { value: last }] = children else {
        return None;
    };
    let tag = open_tag(first)?;
    if !tag.rest.is_empty() || close_tag(last)? != tag.name {
        return None;
    }
    // `<A>x</A> and <A>y</A>` is two elements, left as html
    let closed_early = inner
        .iter()
        .any(|node| matches!(node, Node::Html { value } if close_tag(value) == Some(tag.name)));
    if closed_early {
        return None;
    }
    Some(custom_element(tag.name, tag.attributes, inner.to_vec()))
}

/// Split a JSX attribute list: `a="x" b='y' c={expr} d {...spread}`
fn parse_attributes(source: &str) -> Vec<JsxAttribute> {
    let mut attributes = Vec::new();
    let mut rest = source.trim_start();

    while !rest.is_empty() {
        if rest.starts_with('{') {
            let Some((expression, after)) = take_braced(rest) else {
                break;
            };
            attributes.push(JsxAttribute::MdxJsxExpressionAttribute {
                value: expression.to_string(),
            });
            rest = after.trim_start();
            continue;
        }

        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '=' || c == '{')
            .unwrap_or(rest.len());
        if name_len == 0 {
            break;
        }
        let name = rest[..name_len].to_string();
        rest = rest[name_len..].trim_start();

        let Some(after_eq) = rest.strip_prefix('=') else {
            attributes.push(JsxAttribute::MdxJsxAttribute { name, value: None });
            continue;
        };
        let after_eq = after_eq.trim_start();

        let (value, after) = match after_eq.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &after_eq[1..];
                let Some(end) = body.find(quote) else {
                    break;
                };
                (
                    AttributeValue::Literal(body[..end].to_string()),
                    &body[end + 1..],
                )
            }
            Some('{') => {
                let Some((expression, after)) = take_braced(after_eq) else {
                    break;
                };
                (
                    AttributeValue::Expression(ValueExpression::new(expression.trim())),
                    after,
                )
            }
            _ => break,
        };
        attributes.push(JsxAttribute::MdxJsxAttribute {
            name,
            value: Some(value),
        });
        rest = after.trim_start();
    }
    attributes
}

/// Split `{...}` (balanced braces) off the front of `source`
fn take_braced(source: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (index, c) in source.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some((&source[1..index], &source[index + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn children(markdown: &str) -> Vec<Node> {
        match parse_markdown(markdown) {
            Node::Root { children } => children,
            other => panic!("expected root, got {other:?}"),
        }
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let nodes = children("# Title\n\nSome *soft*\ntext");
        assert_eq!(
            nodes[0],
            Node::Heading {
                depth: 1,
                children: vec![Node::text("Title")],
            }
        );
        assert_eq!(
            nodes[1],
            Node::paragraph(vec![
                Node::text("Some "),
                Node::Emphasis {
                    children: vec![Node::text("soft")],
                },
                Node::text("\ntext"),
            ])
        );
    }

    #[test]
    fn test_code_blocks() {
        let nodes = children("```rust\nfn main() {}\n```\n\nUse `x` here");
        assert_eq!(
            nodes[0],
            Node::Code {
                lang: Some("rust".to_string()),
                value: "fn main() {}".to_string(),
            }
        );
        assert_eq!(
            nodes[1].children()[1],
            Node::InlineCode {
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_tight_list_items_get_paragraphs() {
        let nodes = children("- one\n- [x] two\n- [ ] three");
        let Node::List {
            ordered, children, ..
        } = &nodes[0]
        else {
            panic!("expected a list");
        };
        assert!(!ordered);
        assert_eq!(
            children[0],
            Node::ListItem {
                checked: None,
                children: vec![Node::paragraph(vec![Node::text("one")])],
            }
        );
        assert_eq!(
            children[1],
            Node::ListItem {
                checked: Some(true),
                children: vec![Node::paragraph(vec![Node::text("two")])],
            }
        );
        assert!(matches!(
            children[2],
            Node::ListItem {
                checked: Some(false),
                ..
            }
        ));
    }

    #[test]
    fn test_ordered_list_start() {
        let nodes = children("3. a\n4. b");
        assert!(matches!(
            nodes[0],
            Node::List {
                ordered: true,
                start: Some(3),
                ..
            }
        ));
    }

    #[test]
    fn test_table_header_is_first_row() {
        let nodes = children("| a | b |\n|---|---|\n| 1 | 2 |");
        let Node::Table { children: rows } = &nodes[0] else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.kind() == crate::NodeKind::TableRow));
        assert_eq!(rows[0].text_content(), "ab");
        assert_eq!(rows[1].text_content(), "12");
    }

    #[test]
    fn test_front_matter_is_yaml_node() {
        let nodes = children("---\ntitle: T\ntags: x,y\n---\n\n# Body");
        assert_eq!(
            nodes[0],
            Node::Yaml {
                value: "title: T\ntags: x,y".to_string()
            }
        );
        assert_eq!(nodes[1].kind(), crate::NodeKind::Heading);
    }

    #[test]
    fn test_links_images_and_strikethrough() {
        let nodes = children("[home](/ \"Home\") ![logo](/logo.png) ~~gone~~");
        let inline = nodes[0].children();
        assert_eq!(
            inline[0],
            Node::Link {
                url: "/".to_string(),
                title: Some("Home".to_string()),
                children: vec![Node::text("home")],
            }
        );
        assert_eq!(
            inline[2],
            Node::Image {
                url: "/logo.png".to_string(),
                alt: Some("logo".to_string()),
                title: None,
            }
        );
        assert_eq!(inline[4].kind(), crate::NodeKind::Delete);
    }

    #[test]
    fn test_custom_element_block() {
        let nodes = children("Intro\n\n<Chart kind=\"bar\" count={3} stacked />\n\nOutro");
        assert_eq!(
            nodes[1],
            Node::MdxJsxFlowElement {
                name: Some("Chart".to_string()),
                attributes: vec![
                    JsxAttribute::MdxJsxAttribute {
                        name: "kind".to_string(),
                        value: Some(AttributeValue::Literal("bar".to_string())),
                    },
                    JsxAttribute::MdxJsxAttribute {
                        name: "count".to_string(),
                        value: Some(AttributeValue::Expression(ValueExpression::new("3"))),
                    },
                    JsxAttribute::MdxJsxAttribute {
                        name: "stacked".to_string(),
                        value: None,
                    },
                ],
                children: vec![],
            }
        );
    }

    #[test]
    fn test_lowercase_html_stays_html() {
        let nodes = children("<div class=\"x\"></div>\n");
        assert_eq!(nodes[0].kind(), crate::NodeKind::Html);
    }

    #[test]
    fn test_parse_attributes() {
        let attributes = parse_attributes(r#"data={{"a": {"b": 1}}} label='hi' {...rest}"#);
        assert_eq!(
            attributes[0],
            JsxAttribute::MdxJsxAttribute {
                name: "data".to_string(),
                value: Some(AttributeValue::Expression(ValueExpression::new(
                    r#"{"a": {"b": 1}}"#
                ))),
            }
        );
        assert_eq!(
            attributes[1],
            JsxAttribute::MdxJsxAttribute {
                name: "label".to_string(),
                value: Some(AttributeValue::Literal("hi".to_string())),
            }
        );
        assert_eq!(
            attributes[2],
            JsxAttribute::MdxJsxExpressionAttribute {
                value: "...rest".to_string()
            }
        );
    }

    #[test]
    fn test_jsx_block_forms() {
        assert!(matches!(jsx_block("<Note></Note>"), Some(JsxBlock::Element(_))));
        assert!(matches!(jsx_block("<Note>\n"), Some(JsxBlock::Open(_))));
        assert!(matches!(jsx_block("</Note>\n"), Some(JsxBlock::Close(name)) if name == "Note"));
        assert!(jsx_block("<note />").is_none());

        // A mismatched close stays raw html inside the still-open element
        let Some(JsxBlock::Open(Node::MdxJsxFlowElement { children, .. })) =
            jsx_block("<Note></Other>")
        else {
            panic!("expected an open element");
        };
        assert_eq!(children[0].kind(), crate::NodeKind::Html);
    }

    fn callout(children: Vec<Node>) -> Node {
        custom_element("Callout", Vec::new(), children)
    }

    #[test]
    fn test_custom_element_content_in_one_block() {
        let nodes = children("<Callout>\nBe careful\n</Callout>\n");
        assert_eq!(
            nodes,
            vec![callout(vec![Node::paragraph(vec![Node::text("Be careful")])])]
        );
    }

    #[test]
    fn test_custom_element_wrapping_inline_content() {
        let nodes = children("<Callout>Be *very* careful</Callout>");
        assert_eq!(
            nodes,
            vec![callout(vec![
                Node::text("Be "),
                Node::Emphasis {
                    children: vec![Node::text("very")],
                },
                Node::text(" careful"),
            ])]
        );

        let nodes = children("<Callout>a</Callout> and <Callout>b</Callout>");
        assert_eq!(nodes[0].kind(), crate::NodeKind::Paragraph);
    }

    #[test]
    fn test_custom_element_across_blocks() {
        let nodes = children(
            "<Callout tone=\"warn\">\n\nBe careful\n\n<Chart />\n\n</Callout>\n\nAfter",
        );
        assert_eq!(nodes.len(), 2);
        let Node::MdxJsxFlowElement {
            attributes,
            children: content,
            ..
        } = &nodes[0]
        else {
            panic!("expected a custom element");
        };
        assert_eq!(
            attributes[0],
            JsxAttribute::MdxJsxAttribute {
                name: "tone".to_string(),
                value: Some(AttributeValue::Literal("warn".to_string())),
            }
        );
        assert_eq!(
            content,
            &vec![
                Node::paragraph(vec![Node::text("Be careful")]),
                custom_element("Chart", Vec::new(), Vec::new()),
            ]
        );
        assert_eq!(nodes[1], Node::paragraph(vec![Node::text("After")]));
    }

    #[test]
    fn test_unclosed_custom_element_ends_with_its_container() {
        let nodes = children("> <Callout>\n>\n> inside\n\noutside");
        let Node::Blockquote { children: quoted } = &nodes[0] else {
            panic!("expected a blockquote");
        };
        assert_eq!(
            quoted,
            &vec![callout(vec![Node::paragraph(vec![Node::text("inside")])])]
        );
        assert_eq!(nodes[1], Node::paragraph(vec![Node::text("outside")]));
    }

    #[test]
    fn test_rule_pair_after_start_is_not_front_matter() {
        let nodes = children("# A\n\nintro\n\n---\ntitle: x\n---\n\nafter\n");
        assert_eq!(
            nodes,
            vec![
                Node::Heading {
                    depth: 1,
                    children: vec![Node::text("A")],
                },
                Node::paragraph(vec![Node::text("intro")]),
                Node::ThematicBreak,
                Node::Heading {
                    depth: 2,
                    children: vec![Node::text("title: x")],
                },
                Node::paragraph(vec![Node::text("after")]),
            ]
        );
    }
}
