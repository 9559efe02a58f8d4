use crate::automaton::State;
use crate::registry::{BuildError, PatternRegistry};
use crate::scanner::Scanner;
use crate::symbols::SymbolTable;
use crate::{Category, Token};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// Tokenizes passages one at a time, validating token order against the
/// sequencing automaton and recording numerals and units in a symbol table.
///
/// A `Lexer` carries mutable state (the automaton state and the symbol
/// table), so every tokenizing entry point takes `&mut self`. Give each
/// session its own `Lexer`, or serialize access externally.
#[derive(Debug, Clone)]
pub struct Lexer {
    scanner: Scanner,
    state: State,
    symbols: SymbolTable,
}

/// The result of tokenizing one passage: every token accepted before the end
/// of the passage or the first failure, plus the failure itself if there was
/// one. `failure: None` means the whole passage was consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub failure: Option<LexFailure>,
}

/// A passage-local lexing failure. Tokens accepted before the failure are
/// retained; the rest of the passage is abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexFailure {
    pub kind: FailureKind,
    /// Byte offset of the offending unit within the passage.
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    /// A matched unit fit no category pattern exactly. Unreachable with a
    /// well-formed numeral resource, but handled rather than asserted away.
    #[error("matched unit fits no category")]
    Unclassified,
    /// The sequencing automaton rejected `category` in `state`.
    #[error("{category} may not follow {state}")]
    GrammarViolation { state: State, category: Category },
}

impl fmt::Display for LexFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

impl Tokenized {
    /// Whether the whole passage was consumed.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// The tokens rendered as `CATEGORY: 'text'`, comma-separated, or a
    /// fixed placeholder when no token was produced.
    pub fn summary(&self) -> String {
        if self.tokens.is_empty() {
            "No question processed.".to_owned()
        } else {
            self.tokens
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

impl Lexer {
    /// Build a lexer whose numeral grammar is read from `path`.
    pub fn from_numeral_file(path: impl AsRef<Path>) -> Result<Lexer, BuildError> {
        Lexer::new(PatternRegistry::from_numeral_file(path)?)
    }

    pub fn new(registry: PatternRegistry) -> Result<Lexer, BuildError> {
        Ok(Lexer {
            scanner: Scanner::new(&registry)?,
            state: State::Start,
            symbols: SymbolTable::new(),
        })
    }

    /// Tokenize a single passage.
    ///
    /// The automaton is reset to START, then each matched unit is run through
    /// the automaton in turn. On rejection or an unclassifiable unit the rest
    /// of the passage is abandoned: the tokens accepted so far are returned
    /// together with the failure, and the automaton is back at START for the
    /// next passage.
    pub fn tokenize(&mut self, text: &str) -> Tokenized {
        let Lexer {
            scanner,
            state,
            symbols,
        } = self;
        *state = State::Start;
        let mut tokens = Vec::new();
        for unit in scanner.scan(text) {
            let Some(category) = unit.category else {
                warn!(offset = unit.offset, unit = unit.text, "unit fits no category");
                return Tokenized {
                    tokens,
                    failure: Some(LexFailure {
                        kind: FailureKind::Unclassified,
                        offset: unit.offset,
                    }),
                };
            };
            match state.step(category) {
                Some(next) => {
                    *state = next;
                    let token = Token::new(category, unit.text);
                    symbols.record(&token);
                    tokens.push(token);
                }
                None => {
                    let kind = FailureKind::GrammarViolation {
                        state: *state,
                        category,
                    };
                    warn!(offset = unit.offset, "{}", kind);
                    *state = State::Start;
                    return Tokenized {
                        tokens,
                        failure: Some(LexFailure {
                            kind,
                            offset: unit.offset,
                        }),
                    };
                }
            }
        }
        Tokenized {
            tokens,
            failure: None,
        }
    }

    /// Tokenize a batch of independent passages, in order.
    ///
    /// The automaton is reset to START before each passage, so one passage's
    /// failure never affects the next. The symbol table is never reset
    /// between passages; concatenating the per-passage `tokens` reproduces
    /// the batch's single cumulative token sequence.
    pub fn tokenize_texts<'a, I>(&mut self, passages: I) -> Vec<Tokenized>
    where
        I: IntoIterator<Item = &'a str>,
    {
        passages
            .into_iter()
            .map(|text| self.tokenize(text))
            .collect()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Forget all recorded symbols, for callers that need per-passage
    /// isolation instead of the default accumulation.
    pub fn clear_symbols(&mut self) {
        self.symbols.clear();
    }
}
