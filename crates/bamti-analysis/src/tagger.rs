//! Keyword lexicon tagger that assigns attribute tags to comment text.

use bamti_core::Catalog;

/// At most this many attributes are assigned to one comment.
const MAX_ATTRIBUTES: usize = 2;

/// At most this many matched keywords are reported per attribute.
const MAX_KEYWORDS_PER_ATTRIBUTE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tagging {
    pub attributes: Vec<String>,
    /// Lexicon keywords found in the text, deduplicated, in match order.
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AttributeTagger {
    lexicon: Vec<(String, Vec<String>)>,
    fallback: Option<String>,
}

impl AttributeTagger {
    #[must_use]
    pub fn new(lexicon: Vec<(String, Vec<String>)>, fallback: Option<String>) -> Self {
        Self { lexicon, fallback }
    }

    /// Builds the tagger from the catalog attributes, in catalog order.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let lexicon = catalog
            .attributes
            .iter()
            .map(|a| (a.name.clone(), a.keywords.clone()))
            .collect();
        Self::new(lexicon, catalog.fallback_attribute().map(str::to_string))
    }

    /// Tags `text` with the first attributes (in lexicon order) whose keywords
    /// occur in it. Text matching nothing gets the fallback attribute.
    #[must_use]
    pub fn tag(&self, text: &str) -> Tagging {
        let mut tagging = Tagging::default();

        for (name, keywords) in &self.lexicon {
            let matched: Vec<&String> = keywords
                .iter()
                .filter(|k| text.contains(k.as_str()))
                .collect();
            if matched.is_empty() {
                continue;
            }
            tagging.attributes.push(name.clone());
            for keyword in matched.into_iter().take(MAX_KEYWORDS_PER_ATTRIBUTE) {
                if !tagging.keywords.contains(keyword) {
                    tagging.keywords.push(keyword.clone());
                }
            }
            if tagging.attributes.len() >= MAX_ATTRIBUTES {
                break;
            }
        }

        if tagging.attributes.is_empty() {
            if let Some(fallback) = &self.fallback {
                tagging.attributes.push(fallback.clone());
            }
        }

        tagging
    }
}
