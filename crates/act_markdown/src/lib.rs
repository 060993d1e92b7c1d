//! act Markdown
//!
//! Markdown documents as mdast-shaped trees, rendered into UI nodes.
//!
//! # Features
//!
//! - **Document Tree**: mdast node model, deserializable from remark's JSON
//! - **Parser**: markdown text to document tree with GFM tables, task lists,
//!   strikethrough, YAML front-matter and MDX-style custom elements
//! - **Renderer**: document tree to [`act_core::UiNode`] with per-kind class
//!   names, inline styles and named custom components
//!
//! # Example
//!
//! ```rust
//! use act_core::{h, Props, UiNode};
//! use act_markdown::{parse_markdown, MarkdownProps, MdastRenderer, RendererOptions};
//!
//! let renderer = MdastRenderer::new(RendererOptions::new().component(
//!     "Badge",
//!     |props: &MarkdownProps, _children: Vec<UiNode>| {
//!         let label = props.get_str("label").unwrap_or_default().to_string();
//!         h("span", Props::new().class_name("badge"), vec![UiNode::text(label)])
//!     },
//! ));
//!
//! let document = parse_markdown("# Release\n\n<Badge label=\"new\" />\n");
//! assert_eq!(
//!     renderer.render(&document).to_html(),
//!     r#"<h1>Release</h1><span class="badge">new</span>"#
//! );
//! ```

pub mod config;
pub mod error;
pub mod mdast;
pub mod parse;
pub mod renderer;

pub use config::RendererConfig;
pub use error::{MarkdownError, Result};
pub use mdast::{AttributeValue, JsxAttribute, Node, NodeKind, ValueExpression};
pub use parse::parse_markdown;
pub use renderer::{MarkdownComponent, MarkdownProps, MdastRenderer, RendererOptions};
