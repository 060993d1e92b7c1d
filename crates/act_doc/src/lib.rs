//! act Docs
//!
//! Building blocks for documentation sites: markdown articles with
//! front-matter headers, and animated transitions between pages.
//!
//! # Example
//!
//! ```rust
//! use act_doc::{DocPage, MarkdownArticle, PageTransitions};
//! use act_markdown::MdastRenderer;
//!
//! let article = MarkdownArticle::from_markdown("---\ntitle: Intro\n---\n\nWelcome");
//! let element = article.render(&MdastRenderer::default());
//!
//! let mut pages = PageTransitions::new();
//! let slots = pages.show(DocPage::new("/intro", "Intro", element), 0.0);
//! assert_eq!(slots.len(), 1);
//! ```

pub mod article;
pub mod error;
pub mod frontmatter;
pub mod page_transition;

pub use article::{render_metadata, MarkdownArticle};
pub use error::{DocError, Result};
pub use frontmatter::{ArticleMetadata, FrontMatter};
pub use page_transition::{DocPage, DriverStyle, PageSlot, PageTransitionDriver, PageTransitions};
