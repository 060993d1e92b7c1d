//! Markdown articles
//!
//! A markdown document whose leading `yaml` node is read as front-matter
//! and shown as an article header instead of being rendered as content.

use act_core::{h, Props, UiNode};
use act_markdown::{parse_markdown, MdastRenderer, Node};

use crate::error::Result;
use crate::frontmatter::{ArticleMetadata, FrontMatter};

/// A parsed article: optional metadata and the body nodes
#[derive(Clone, Debug, PartialEq)]
pub struct MarkdownArticle {
    metadata: Option<ArticleMetadata>,
    body: Vec<Node>,
}

impl MarkdownArticle {
    pub fn from_markdown(markdown_text: &str) -> Self {
        Self::from_root(parse_markdown(markdown_text))
    }

    /// Load an article from mdast JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_root(Node::from_json(json)?))
    }

    /// Split a document tree into front-matter and body
    ///
    /// Malformed front-matter is logged and dropped; the body is kept.
    pub fn from_root(root: Node) -> Self {
        let mut body = match root {
            Node::Root { children } => children,
            other => vec![other],
        };

        let front_matter = match body.first() {
            Some(Node::Yaml { value }) => Some(FrontMatter::parse(value)),
            _ => None,
        };
        let metadata = front_matter.and_then(|parsed| {
            body.remove(0);
            match parsed {
                Ok(front_matter) => Some(front_matter.into_metadata()),
                Err(err) => {
                    tracing::warn!(error = %err, "ignoring malformed article front-matter");
                    None
                }
            }
        });

        Self { metadata, body }
    }

    pub fn metadata(&self) -> Option<&ArticleMetadata> {
        self.metadata.as_ref()
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }

    /// Keep these tags in the metadata but leave them out of the header
    pub fn hide_tags<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(metadata) = &mut self.metadata {
            metadata
                .hidden_tag_keys
                .extend(keys.into_iter().map(Into::into));
        }
        self
    }

    /// Render as an `article` element
    pub fn render(&self, renderer: &MdastRenderer) -> UiNode {
        let mut children = Vec::with_capacity(self.body.len() + 1);
        if let Some(metadata) = &self.metadata {
            children.push(render_metadata(metadata));
        }
        children.extend(self.body.iter().map(|node| renderer.render(node)));
        h("article", Props::new().class_name("article"), children)
    }
}

/// Article header: title, byline, description and tags
pub fn render_metadata(metadata: &ArticleMetadata) -> UiNode {
    let mut header = Vec::new();

    if let Some(title) = &metadata.title {
        header.push(h("h1", Props::new(), vec![UiNode::text(title.as_str())]));
    }

    let mut byline = Vec::new();
    if let Some(author) = &metadata.author {
        byline.push(h(
            "span",
            Props::new().class_name("author"),
            vec![UiNode::text(author.as_str())],
        ));
    }
    if let Some(published) = &metadata.published {
        byline.push(h(
            "time",
            Props::new().attr("datetime", published.as_str()),
            vec![UiNode::text(published.as_str())],
        ));
    }
    if !byline.is_empty() {
        header.push(h("p", Props::new().class_name("byline"), byline));
    }

    if let Some(description) = &metadata.description {
        header.push(h(
            "p",
            Props::new().class_name("description"),
            vec![UiNode::text(description.as_str())],
        ));
    }

    let tags: Vec<UiNode> = metadata
        .visible_tag_keys()
        .map(|key| {
            h(
                "li",
                Props::new().attr("data-tag", key),
                vec![UiNode::text(key)],
            )
        })
        .collect();
    if !tags.is_empty() {
        header.push(h("ul", Props::new().class_name("tags"), tags));
    }

    h("header", Props::new().class_name("article-metadata"), header)
}
