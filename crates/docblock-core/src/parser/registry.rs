//! Maps language identifiers to parser strategies.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use super::{CoffeeParser, DeclarationParser, JavascriptParser};
use crate::error::{EngineError, Result};

/// Language identifier to [`DeclarationParser`] lookup.
///
/// Identifiers are matched case-insensitively. Adding a language means
/// registering another strategy; the engine itself does not change.
///
/// ```
/// use docblock_core::parser::ParserRegistry;
///
/// let registry = ParserRegistry::default();
/// assert_eq!(registry.resolve("TypeScript").name(), "javascript");
/// assert_eq!(registry.resolve("coffee").name(), "coffee");
/// assert_eq!(registry.resolve("cobol").name(), "javascript");
/// ```
#[derive(Clone)]
pub struct ParserRegistry {
    parsers: FxHashMap<String, Arc<dyn DeclarationParser>>,
    fallback: Arc<dyn DeclarationParser>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        let javascript: Arc<dyn DeclarationParser> = Arc::new(JavascriptParser::new());
        let mut registry = Self::new(Arc::clone(&javascript));
        registry.register(JavascriptParser::LANGUAGES, javascript);
        registry.register(CoffeeParser::LANGUAGES, Arc::new(CoffeeParser::new()));
        registry
    }
}

impl ParserRegistry {
    /// An empty registry answering every lookup with `fallback`.
    pub fn new(fallback: Arc<dyn DeclarationParser>) -> Self {
        Self {
            parsers: FxHashMap::default(),
            fallback,
        }
    }

    pub fn register(&mut self, languages: &[&str], parser: Arc<dyn DeclarationParser>) {
        for language in languages {
            self.parsers
                .insert(language.to_ascii_lowercase(), Arc::clone(&parser));
        }
    }

    /// The parser registered for `language`.
    pub fn get(&self, language: &str) -> Result<Arc<dyn DeclarationParser>> {
        self.parsers
            .get(&language.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| EngineError::UnknownLanguage(language.to_string()))
    }

    /// Like [`ParserRegistry::get`], falling back to the default parser.
    pub fn resolve(&self, language: &str) -> Arc<dyn DeclarationParser> {
        self.get(language).unwrap_or_else(|err| {
            debug!("{}, using {}", err, self.fallback.name());
            Arc::clone(&self.fallback)
        })
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut languages: Vec<_> = self.parsers.keys().collect();
        languages.sort();
        f.debug_struct("ParserRegistry")
            .field("languages", &languages)
            .field("fallback", &self.fallback.name())
            .finish()
    }
}
