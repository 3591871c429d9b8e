//! Locale resources and key lookup
//!
//! Translation trees are embedded JSON documents addressed by dotted paths
//! (`skills.items.aiMl.achievements`). Lookups fall back to the fallback
//! language per key, the way i18n resource loaders do.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::constants::i18n::FALLBACK_LANGUAGE;

const JA_RESOURCE: &str = include_str!("../../locales/ja/translation.json");
const EN_RESOURCE: &str = include_str!("../../locales/en/translation.json");
const ES_RESOURCE: &str = include_str!("../../locales/es/translation.json");

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ja,
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ja, Language::En, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Name of the language in its own script
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Ja => "日本語",
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    /// Parse a language code or locale tag (`en`, `en_US.UTF-8`, `es-MX`)
    pub fn from_tag(tag: &str) -> Option<Self> {
        let prefix = tag
            .split(['_', '-', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| lang.code() == prefix)
    }

    pub fn fallback() -> Self {
        Self::from_tag(FALLBACK_LANGUAGE).unwrap_or(Language::Ja)
    }

    /// Pick the display language
    /// Priority: explicit flag > config file > LC_ALL/LANG environment > fallback
    pub fn detect(flag: Option<Language>, configured: Option<Language>) -> Self {
        if let Some(lang) = flag.or(configured) {
            return lang;
        }

        let from_env = ["LC_ALL", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|tag| Self::from_tag(&tag));

        match from_env {
            Some(lang) => {
                debug!(language = %lang, "Detected language from environment");
                lang
            }
            None => Self::fallback(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parsed translation trees for every supported language
#[derive(Debug)]
pub struct Resources {
    trees: HashMap<Language, Value>,
}

impl Resources {
    /// Parse the resources compiled into the binary
    pub fn embedded() -> Result<Self> {
        let mut trees = HashMap::new();
        for (lang, raw) in [
            (Language::Ja, JA_RESOURCE),
            (Language::En, EN_RESOURCE),
            (Language::Es, ES_RESOURCE),
        ] {
            let tree: Value = serde_json::from_str(raw)
                .with_context(|| format!("Failed to parse '{lang}' translation resource"))?;
            trees.insert(lang, tree);
        }
        info!(languages = trees.len(), "Loaded translation resources");
        Ok(Self { trees })
    }

    #[cfg(test)]
    pub fn from_trees(trees: HashMap<Language, Value>) -> Self {
        Self { trees }
    }
}

/// Synchronous `t(key)` lookup bound to one active language
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    resources: Arc<Resources>,
}

impl Translator {
    pub fn new(language: Language, resources: Arc<Resources>) -> Self {
        Self { language, resources }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Same resources, different active language
    pub fn with_language(&self, language: Language) -> Self {
        Self {
            language,
            resources: Arc::clone(&self.resources),
        }
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let fallback = Language::fallback();
        let mut order = vec![self.language];
        if fallback != self.language {
            order.push(fallback);
        }

        order.into_iter().find_map(|lang| {
            self.resources
                .trees
                .get(&lang)
                .and_then(|tree| resolve_path(tree, key))
        })
    }

    /// Display lookup: the translated string, or the key itself when missing
    pub fn t(&self, key: &str) -> String {
        self.text(key).unwrap_or_else(|| {
            debug!(key, language = %self.language, "Missing translation");
            key.to_string()
        })
    }

    /// String value at `key`, if present
    pub fn text(&self, key: &str) -> Option<String> {
        match self.lookup(key)? {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Ordered list of strings at `key`
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        match self.lookup(key)? {
            Value::Array(items) => Some(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Structured value at `key`, deserialized into `T`
    pub fn object<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.lookup(key)?;
        serde_json::from_value(value.clone())
            .inspect_err(|err| debug!(key, error = %err, "Translation value has unexpected shape"))
            .ok()
    }
}

/// Walk a dotted path through objects (and arrays by numeric index)
fn resolve_path<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(tree, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn translator(language: Language, trees: Vec<(Language, Value)>) -> Translator {
        Translator::new(
            language,
            Arc::new(Resources::from_trees(trees.into_iter().collect())),
        )
    }

    #[test]
    fn test_dotted_path_lookup() {
        let t = translator(
            Language::En,
            vec![(Language::En, json!({ "a": { "b": { "c": "deep" } } }))],
        );
        assert_eq!(t.text("a.b.c"), Some("deep".to_string()));
        assert_eq!(t.text("a.b"), None);
        assert_eq!(t.text("a.x.c"), None);
    }

    #[test]
    fn test_missing_key_falls_back_to_fallback_language() {
        let t = translator(
            Language::Es,
            vec![
                (Language::Ja, json!({ "common": { "close": "閉じる" } })),
                (Language::Es, json!({ "other": "x" })),
            ],
        );
        assert_eq!(t.t("common.close"), "閉じる");
    }

    #[test]
    fn test_display_lookup_returns_key_when_missing_everywhere() {
        let t = translator(Language::En, vec![(Language::En, json!({}))]);
        assert_eq!(t.t("nope.missing"), "nope.missing");
    }

    #[test]
    fn test_list_lookup_preserves_order() {
        let t = translator(
            Language::En,
            vec![(Language::En, json!({ "steps": ["one", "two", "three"] }))],
        );
        assert_eq!(
            t.list("steps"),
            Some(vec!["one".to_string(), "two".to_string(), "three".to_string()])
        );
        assert_eq!(t.text("steps.1"), Some("two".to_string()));
    }

    #[test]
    fn test_language_from_tag() {
        assert_eq!(Language::from_tag("en_US.UTF-8"), Some(Language::En));
        assert_eq!(Language::from_tag("es-MX"), Some(Language::Es));
        assert_eq!(Language::from_tag("ja"), Some(Language::Ja));
        assert_eq!(Language::from_tag("fr_FR"), None);
    }

    #[test]
    fn test_detect_prefers_flag_then_config() {
        assert_eq!(
            Language::detect(Some(Language::Es), Some(Language::En)),
            Language::Es
        );
        assert_eq!(Language::detect(None, Some(Language::En)), Language::En);
    }

    #[test]
    fn test_embedded_resources_parse() {
        let resources = Arc::new(Resources::embedded().unwrap());
        for lang in Language::ALL {
            let t = Translator::new(lang, Arc::clone(&resources));
            assert!(t.text("works.tabs.projects").is_some(), "{lang} missing tab label");
        }
    }
}
