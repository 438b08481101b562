//! Product catalog: registered keywords, channels, and the attribute vocabulary.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const EMBEDDED_CATALOG: &str = include_str!("../../../config/catalog.yaml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConfig {
    pub keyword: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl ProductConfig {
    /// Whether `keyword` names this product, ignoring whitespace.
    #[must_use]
    pub fn matches(&self, keyword: &str) -> bool {
        let wanted = squash(keyword);
        squash(&self.keyword) == wanted || self.aliases.iter().any(|a| squash(a) == wanted)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeConfig {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<ProductConfig>,
    pub channels: Vec<String>,
    pub attributes: Vec<AttributeConfig>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the embedded YAML is invalid.
    pub fn embedded() -> Result<Self, ConfigError> {
        parse_catalog(EMBEDDED_CATALOG)
    }

    /// Attribute names in chart order.
    #[must_use]
    pub fn attribute_names(&self) -> Vec<String> {
        self.attributes.iter().map(|a| a.name.clone()).collect()
    }

    /// Attribute assigned when no keyword matches: the last configured one.
    #[must_use]
    pub fn fallback_attribute(&self) -> Option<&str> {
        self.attributes.last().map(|a| a.name.as_str())
    }

    #[must_use]
    pub fn find_product(&self, keyword: &str) -> Option<&ProductConfig> {
        self.products.iter().find(|p| p.matches(keyword))
    }
}

fn squash(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Load and validate the catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog(&content)
}

/// Parse and validate catalog YAML.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = serde_yaml::from_str(content)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    if catalog.products.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must register at least one product".to_string(),
        ));
    }

    for product in &catalog.products {
        if product.keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "product keyword must be non-empty".to_string(),
            ));
        }
    }

    let mut seen_channels = HashSet::new();
    for channel in &catalog.channels {
        if channel.trim().is_empty() {
            return Err(ConfigError::Validation(
                "channel name must be non-empty".to_string(),
            ));
        }
        if !seen_channels.insert(channel.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate channel: '{channel}'"
            )));
        }
    }

    if catalog.attributes.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must define at least one attribute".to_string(),
        ));
    }

    let mut seen_attributes = HashSet::new();
    for attribute in &catalog.attributes {
        if attribute.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "attribute name must be non-empty".to_string(),
            ));
        }
        if !seen_attributes.insert(attribute.name.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate attribute: '{}'",
                attribute.name
            )));
        }
        if attribute.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "attribute '{}' has an empty keyword",
                attribute.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r"
products:
  - keyword: 밤 티라미수
channels: [유튜브]
attributes:
  - name: 맛
    keywords: [맛있]
";

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        assert_eq!(catalog.channels, vec!["유튜브", "커뮤니티", "틱톡"]);
        assert_eq!(
            catalog.attribute_names(),
            vec!["맛", "식감", "가격", "주관적 평가", "기타"]
        );
        assert_eq!(catalog.fallback_attribute(), Some("기타"));
    }

    #[test]
    fn find_product_ignores_whitespace_and_aliases() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.find_product("밤티라미수").is_some());
        assert!(catalog.find_product("밤 티라미수").is_some());
        assert!(catalog.find_product("밤티").is_some());
        assert!(catalog.find_product("없는제품").is_none());
    }

    #[test]
    fn parse_minimal_catalog() {
        let catalog = parse_catalog(MINIMAL).unwrap();
        assert_eq!(catalog.products.len(), 1);
        assert!(catalog.products[0].aliases.is_empty());
    }

    #[test]
    fn rejects_missing_products() {
        let yaml = "products: []\nchannels: []\nattributes:\n  - name: 맛\n";
        let err = parse_catalog(yaml).unwrap_err();
        assert!(err.to_string().contains("at least one product"));
    }

    #[test]
    fn rejects_duplicate_attribute() {
        let yaml = r"
products:
  - keyword: 밤 티라미수
channels: []
attributes:
  - name: 맛
  - name: 맛
";
        let err = parse_catalog(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate attribute"));
    }

    #[test]
    fn rejects_duplicate_channel() {
        let yaml = r"
products:
  - keyword: 밤 티라미수
channels: [틱톡, 틱톡]
attributes:
  - name: 맛
";
        let err = parse_catalog(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate channel"));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = parse_catalog("products: [").unwrap_err();
        assert!(matches!(err, ConfigError::CatalogFileParse(_)));
    }

    #[test]
    fn load_catalog_reports_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::CatalogFileIo { .. }));
    }
}
