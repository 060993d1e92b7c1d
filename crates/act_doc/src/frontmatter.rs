//! Article front-matter
//!
//! The YAML block at the top of a markdown article:
//!
//! ```yaml
//! title: Transitions
//! date: 2024-03-01
//! author: Luke
//! description: Animating pages in and out
//! tags: animation, pages
//! ```
//!
//! `tags` may be a comma separated string or a YAML list. Scalars of any
//! type are read as strings, so `date: 2024-03-01` and `title: 1999` work.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

use crate::error::Result;

/// Parsed front-matter fields
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FrontMatter {
    #[serde(default, deserialize_with = "scalar")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "tag_list")]
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Parse the contents of a front-matter block
    ///
    /// An empty block has no fields; anything but a mapping is an error.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn into_metadata(self) -> ArticleMetadata {
        ArticleMetadata {
            title: self.title,
            published: self.date,
            author: self.author,
            description: self.description,
            tag_keys: self.tags,
            hidden_tag_keys: Vec::new(),
        }
    }
}

/// Metadata shown in an article header
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetadata {
    pub title: Option<String>,
    pub published: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub tag_keys: Vec<String>,
    /// Tags that are kept in the metadata but not displayed
    pub hidden_tag_keys: Vec<String>,
}

impl ArticleMetadata {
    /// Tag keys that should be displayed, in order
    pub fn visible_tag_keys(&self) -> impl Iterator<Item = &str> {
        self.tag_keys
            .iter()
            .filter(|key| !self.hidden_tag_keys.contains(*key))
            .map(String::as_str)
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn scalar<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

fn tag_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Vec<String> = match Value::deserialize(deserializer)? {
        Value::Sequence(items) => items.into_iter().filter_map(scalar_to_string).collect(),
        Value::String(list) => list.split(',').map(str::to_string).collect(),
        other => scalar_to_string(other).into_iter().collect(),
    };
    Ok(entries
        .iter()
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect())
}
