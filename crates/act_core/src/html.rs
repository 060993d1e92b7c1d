//! HTML serialization of the UI node tree
//!
//! Used for inspection, snapshots and the CLI. Styles are written with
//! kebab-case property names; `true` attributes are written bare and
//! `false`/`null` attributes are omitted.

use std::fmt;

use serde_json::Value;

use crate::node::{Element, Style, UiNode};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "meta", "source"];

impl UiNode {
    /// Serialize this node to an HTML string
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UiNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiNode::Empty => Ok(()),
            UiNode::Text(text) => f.write_str(&html_escape::encode_text(text)),
            UiNode::Element(element) => element.fmt(f),
            UiNode::Fragment(children) => {
                for child in children {
                    child.fmt(f)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;

        if let Some(class_name) = &self.props.class_name {
            write_attribute(f, "class", class_name)?;
        }
        if let Some(style) = &self.props.style {
            if !style.is_empty() {
                write_attribute(f, "style", &style_to_css(style))?;
            }
        }
        for (name, value) in &self.props.attributes {
            match value {
                Value::Null | Value::Bool(false) => {}
                Value::Bool(true) => write!(f, " {}", name)?,
                Value::String(s) => write_attribute(f, name, s)?,
                other => write_attribute(f, name, &other.to_string())?,
            }
        }

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return f.write_str(" />");
        }

        f.write_str(">")?;
        for child in &self.children {
            child.fmt(f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

fn write_attribute(f: &mut fmt::Formatter<'_>, name: &str, value: &str) -> fmt::Result {
    write!(
        f,
        " {}=\"{}\"",
        name,
        html_escape::encode_double_quoted_attribute(value)
    )
}

/// Render a style object as a CSS declaration list
pub fn style_to_css(style: &Style) -> String {
    style
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(property, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{}: {};", kebab_case(property), value)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
