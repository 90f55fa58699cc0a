use serde::{Deserialize, Serialize};

/// An immutable corpus document snapshot, as supplied by the corpus
/// collaborator. The engine never mutates these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Free-form document kind, e.g. "analysis", "wiki_node".
    #[serde(default)]
    pub doc_type: String,
    /// Display label for where the document came from.
    #[serde(default)]
    pub source: String,
    /// Curated search keywords, in curation order.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Document {
    /// Display label used in a result's `sources` list:
    /// title, else source, else a generic fallback.
    pub fn source_label(&self) -> &str {
        if !self.title.is_empty() {
            &self.title
        } else if !self.source.is_empty() {
            &self.source
        } else {
            "knowledge base"
        }
    }
}
