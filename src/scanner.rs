use crate::registry::{BuildError, PatternRegistry};
use crate::Category;
use regex::Regex;

/// Finds the next non-overlapping lexical unit in raw text, tagged with its
/// category. One alternation is compiled with a named group per category, in
/// priority order; the `regex` crate's leftmost-first semantics make the
/// earlier branch win when several categories could match at the same
/// position, which is exactly the registry's tie-break contract.
#[derive(Debug, Clone)]
pub struct Scanner {
    combined: Regex,
    exact: Vec<(Category, Regex)>,
}

/// One matched unit of text, with its byte offset into the passage.
///
/// `category` is `None` when the match could not be attributed to any
/// category. The catch-all design of [`Category::Other`] makes that
/// unreachable with a well-formed numeral resource, but it is handled rather
/// than asserted away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<'s> {
    pub category: Option<Category>,
    pub text: &'s str,
    pub offset: usize,
}

impl Scanner {
    pub fn new(registry: &PatternRegistry) -> Result<Scanner, BuildError> {
        let patterns = registry.patterns();
        let alternation = patterns
            .iter()
            .map(|(category, pattern)| format!("(?P<{}>{})", category.name(), pattern))
            .collect::<Vec<_>>()
            .join("|");
        let combined = Regex::new(&alternation)?;
        let mut exact = Vec::new();
        for (category, pattern) in patterns {
            exact.push((category, Regex::new(&format!("^(?:{})$", pattern))?));
        }
        Ok(Scanner { combined, exact })
    }

    /// Scan `source` left to right, yielding each matched unit in order.
    /// Pure: no state is carried between calls.
    pub fn scan<'s>(&'s self, source: &'s str) -> impl Iterator<Item = Unit<'s>> + 's {
        self.combined.captures_iter(source).map(move |caps| {
            let matched = caps.get(0).unwrap();
            let category = Category::ALL
                .iter()
                .copied()
                .find(|category| caps.name(category.name()).is_some());
            Unit {
                category,
                text: matched.as_str(),
                offset: matched.start(),
            }
        })
    }

    /// Classify `unit` by testing it for a whole-string fit against each
    /// category pattern in priority order. Returns the first exact match, or
    /// `None` if the unit fits no category.
    pub fn classify(&self, unit: &str) -> Option<Category> {
        self.exact
            .iter()
            .find(|(_, regex)| regex.is_match(unit))
            .map(|(category, _)| *category)
    }
}
