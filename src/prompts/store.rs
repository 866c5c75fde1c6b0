use crate::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Named system prompts loaded from a flat YAML mapping.
///
/// ```yaml
/// default: |
///   You are a helpful assistant.
/// terse: Answer in one sentence.
/// ```
///
/// Values are kept exactly as YAML yields them. An unknown name is simply
/// absent: [`PromptStore::get`] returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptStore {
    prompts: BTreeMap<String, String>,
}

impl PromptStore {
    /// Read and parse the prompt file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::parse(&content).map_err(|source| Error::PromptParse {
            path: Some(path.to_path_buf()),
            source,
        })?;
        debug!(path = %path.display(), prompts = store.len(), "loaded system prompts");
        Ok(store)
    }

    /// Parse an in-memory YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Self::parse(content).map_err(|source| Error::PromptParse { path: None, source })
    }

    fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let prompts: Option<BTreeMap<String, String>> = serde_yaml::from_str(content)?;
        Ok(Self {
            prompts: prompts.unwrap_or_default(),
        })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.prompts.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prompts.contains_key(name)
    }

    /// Prompt names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.prompts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prompts.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.prompts
    }
}

impl std::ops::Index<&str> for PromptStore {
    type Output = str;

    /// Panics if `name` is absent; use [`PromptStore::get`] to check first.
    fn index(&self, name: &str) -> &str {
        &self.prompts[name]
    }
}

impl FromIterator<(String, String)> for PromptStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            prompts: iter.into_iter().collect(),
        }
    }
}

impl From<std::collections::HashMap<String, String>> for PromptStore {
    fn from(map: std::collections::HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

/// Load named system prompts from the YAML file at `path`.
pub fn load_system_prompts(path: impl AsRef<Path>) -> Result<PromptStore> {
    PromptStore::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_mapping() {
        let store = PromptStore::from_yaml_str(
            "default: \"You are a helpful assistant.\"\nterse: Answer briefly.\n",
        )
        .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("default"), Some("You are a helpful assistant."));
        assert_eq!(&store["terse"], "Answer briefly.");
        assert!(store.get("missing").is_none());
        assert!(!store.contains("missing"));
    }

    #[test]
    fn test_block_scalar_keeps_newlines() {
        let yaml = "default: |\n  Line one.\n    Indented line.\n  Line three.\n";
        let store = PromptStore::from_yaml_str(yaml).unwrap();
        assert_eq!(
            store.get("default"),
            Some("Line one.\n  Indented line.\nLine three.\n")
        );
    }

    #[test]
    fn test_names_sorted() {
        let store = PromptStore::from_yaml_str("zeta: z\nalpha: a\nmid: m\n").unwrap();
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_empty_document_is_empty_store() {
        assert!(PromptStore::from_yaml_str("").unwrap().is_empty());
        assert!(PromptStore::from_yaml_str("   \n").unwrap().is_empty());
        assert!(PromptStore::from_yaml_str("~").unwrap().is_empty());
    }

    #[test]
    fn test_nested_mapping_is_parse_error() {
        let err = PromptStore::from_yaml_str("default:\n  nested: value\n").unwrap_err();
        assert!(matches!(err, Error::PromptParse { path: None, .. }));
    }

    #[test]
    fn test_sequence_is_parse_error() {
        let err = PromptStore::from_yaml_str("- one\n- two\n").unwrap_err();
        assert!(matches!(err, Error::PromptParse { .. }));
    }

    #[test]
    fn test_from_hashmap() {
        let mut map = std::collections::HashMap::new();
        map.insert("default".to_string(), "hi".to_string());
        let store = PromptStore::from(map);
        assert_eq!(store.get("default"), Some("hi"));
        assert_eq!(store.into_inner().len(), 1);
    }
}
