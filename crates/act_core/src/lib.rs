//! act Core
//!
//! The UI node tree shared by the act crates:
//!
//! - **Nodes**: elements, text, fragments and the empty node
//! - **Props**: class name, inline style and free-form attributes
//! - **HTML**: serialization for inspection and snapshots

pub mod html;
pub mod node;

pub use html::style_to_css;
pub use node::{h, Element, PointerEvents, Props, Style, UiNode};
