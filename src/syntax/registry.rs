use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::foundation::error::{CodeshotError, CodeshotResult};
use crate::syntax::json::JsonLexer;
use crate::syntax::languages;
use crate::syntax::lexer::{Lexer, PlainTextLexer};

/// Lexers indexed by id, display name and alias, with content-based guessing.
///
/// The registry is immutable once shared; the language catalog is computed on first use and
/// cached for the registry's lifetime.
#[derive(Default)]
pub struct LexerRegistry {
    lexers: Vec<Arc<dyn Lexer>>,
    by_name: HashMap<String, usize>,
    fallback: Option<Arc<dyn Lexer>>,
    catalog: OnceLock<Vec<String>>,
}

impl std::fmt::Debug for LexerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexerRegistry")
            .field("lexers", &self.lexers.iter().map(|l| l.id()).collect::<Vec<_>>())
            .field("fallback", &self.fallback.as_ref().map(|l| l.id()))
            .finish()
    }
}

impl LexerRegistry {
    /// An empty registry without a fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in lexer, with plain text as the fallback.
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        for lexer in [
            languages::python(),
            languages::rust(),
            languages::javascript(),
            languages::typescript(),
            languages::c(),
            languages::cpp(),
            languages::csharp(),
            languages::java(),
            languages::kotlin(),
            languages::go(),
            languages::swift(),
            languages::php(),
            languages::ruby(),
            languages::bash(),
            languages::lua(),
            languages::sql(),
            languages::css(),
        ] {
            reg.register(Arc::new(lexer));
        }
        reg.register(Arc::new(JsonLexer));
        reg.register(Arc::new(PlainTextLexer));
        reg.with_fallback(Arc::new(PlainTextLexer))
    }

    /// Register a lexer. Names already taken by an earlier lexer keep pointing at it.
    pub fn register(&mut self, lexer: Arc<dyn Lexer>) {
        let index = self.lexers.len();
        let keys = [lexer.id(), lexer.name()]
            .into_iter()
            .chain(lexer.aliases().iter().copied());
        for key in keys {
            let key = key.trim().to_lowercase();
            if !key.is_empty() {
                self.by_name.entry(key).or_insert(index);
            }
        }
        self.lexers.push(lexer);
        self.catalog = OnceLock::new();
    }

    /// Use `lexer` when neither the hint nor guessing selects one.
    pub fn with_fallback(mut self, lexer: Arc<dyn Lexer>) -> Self {
        self.fallback = Some(lexer);
        self
    }

    /// Look up a lexer by id, display name or alias (case-insensitive, trimmed).
    pub fn by_name(&self, name: &str) -> Option<Arc<dyn Lexer>> {
        let key = name.trim().to_lowercase();
        let index = self.by_name.get(&key)?;
        self.lexers.get(*index).cloned()
    }

    /// The lexer with the highest positive `analyse` score for `text`.
    ///
    /// Ties go to the lexer registered first.
    pub fn guess(&self, text: &str) -> Option<Arc<dyn Lexer>> {
        let mut best: Option<(f32, &Arc<dyn Lexer>)> = None;
        for lexer in &self.lexers {
            let score = lexer.analyse(text);
            if score <= 0.0 {
                continue;
            }
            if best.is_none_or(|(s, _)| score > s) {
                best = Some((score, lexer));
            }
        }
        best.map(|(_, lexer)| Arc::clone(lexer))
    }

    /// Select a lexer from an optional hint, falling back to guessing and then to the
    /// registry's fallback lexer.
    pub fn resolve(&self, hint: Option<&str>, text: &str) -> CodeshotResult<Arc<dyn Lexer>> {
        let hint = hint.map(str::trim).filter(|h| !h.is_empty());
        if let Some(h) = hint {
            if let Some(lexer) = self.by_name(h) {
                tracing::debug!(hint = h, lexer = lexer.id(), "lexer from hint");
                return Ok(lexer);
            }
            tracing::debug!(hint = h, "unrecognised language hint, guessing from content");
        }

        if let Some(lexer) = self.guess(text) {
            tracing::debug!(lexer = lexer.id(), "lexer guessed from content");
            return Ok(lexer);
        }

        match &self.fallback {
            Some(lexer) => Ok(Arc::clone(lexer)),
            None => Err(CodeshotError::unknown_language(hint.unwrap_or("<none>"))),
        }
    }

    /// Sorted ids of every registered lexer.
    pub fn list_supported_languages(&self) -> &[String] {
        self.catalog.get_or_init(|| {
            let mut ids: Vec<String> = self.lexers.iter().map(|l| l.id().to_owned()).collect();
            ids.sort();
            ids.dedup();
            ids
        })
    }

    /// Number of registered lexers.
    pub fn len(&self) -> usize {
        self.lexers.len()
    }

    /// Whether no lexer is registered.
    pub fn is_empty(&self) -> bool {
        self.lexers.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/syntax/registry.rs"]
mod tests;
