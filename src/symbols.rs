use crate::{Category, Token};
use std::collections::HashMap;

/// An accumulating record of every numeral and unit literal seen, keyed by
/// the literal text. At most one entry per distinct text; a later occurrence
/// overwrites the earlier entry's category.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: HashMap<String, Category>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// Record `token` if it is a numeral or unit; other categories are
    /// ignored.
    pub fn record(&mut self, token: &Token) {
        if matches!(token.category, Category::Number | Category::Unit) {
            self.entries.insert(token.text.clone(), token.category);
        }
    }

    pub fn lookup(&self, text: &str) -> Option<Category> {
        self.entries.get(text).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> + '_ {
        self.entries
            .iter()
            .map(|(text, category)| (text.as_str(), *category))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry. Entries otherwise persist for the lifetime of the
    /// owning lexer and accumulate across passages.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
