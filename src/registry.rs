use crate::Category;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LEXEME_PATTERN: &str = "今|又|有";
const TYPE_PATTERN: &str = "田|广|从|周|径|弦|矢";
const PREFIX_PATTERN: &str = "圭|邪|箕|圆|宛|弧|环|头|正|畔|舌|踵|下|中|外";
const UNIT_PATTERN: &str = "步|里|人|钱";
const QUESTION_PATTERN: &str = "问|为|馀|得|各|约之|合之|几何|减多益少|孰|多|而|平";
const FUNCTION_PATTERN: &str = "分|之|减其";
const PUNCTUATION_PATTERN: &str = "[，。？、]";
// Everything outside the eight vocabularies and the numeral character set.
const OTHER_PATTERN: &str = "[^一二三四五六七八九零十百千万亿今又有田广从周径弦矢圭邪箕圆宛弧环头正畔舌踵下中外步里人钱问为馀得各约合之几何减多益少孰而平分其，。？、]+";

/// The ordered set of category patterns the lexer is built from.
///
/// Eight of the nine patterns are fixed vocabularies. The ninth, the numeral
/// grammar, is loaded once at construction from an external single-line
/// resource describing arbitrary-magnitude Chinese numeral literals over the
/// 亿/万/千/百/十 positional system with 零 fillers. The resource text is
/// treated as an opaque pattern string.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    numeral_pattern: String,
}

/// Error while constructing a lexer.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read numeral pattern from '{}'", path.display())]
    NumeralResource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("numeral pattern resource '{}' is empty", path.display())]
    EmptyNumeralResource { path: PathBuf },
    #[error(transparent)]
    InvalidRegex(#[from] regex::Error),
}

impl PatternRegistry {
    /// Load the numeral pattern from `path`. Line breaks are stripped so the
    /// resource may be wrapped for readability. The lexer cannot be built
    /// without this resource, so failure to read it is fatal here.
    pub fn from_numeral_file(path: impl AsRef<Path>) -> Result<PatternRegistry, BuildError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| BuildError::NumeralResource {
            path: path.to_owned(),
            source,
        })?;
        let pattern = raw.replace(['\r', '\n'], "");
        if pattern.is_empty() {
            return Err(BuildError::EmptyNumeralResource {
                path: path.to_owned(),
            });
        }
        Ok(PatternRegistry::with_numeral_pattern(&pattern))
    }

    /// Build a registry around an already-loaded numeral pattern.
    pub fn with_numeral_pattern(pattern: &str) -> PatternRegistry {
        PatternRegistry {
            numeral_pattern: pattern.to_owned(),
        }
    }

    /// The `(category, pattern)` pairs in priority order. Both the combined
    /// scanner and the whole-match classifier are derived from this list, in
    /// this order.
    pub fn patterns(&self) -> [(Category, &str); 9] {
        [
            (Category::Number, self.numeral_pattern.as_str()),
            (Category::Lexeme, LEXEME_PATTERN),
            (Category::Type, TYPE_PATTERN),
            (Category::Prefix, PREFIX_PATTERN),
            (Category::Unit, UNIT_PATTERN),
            (Category::Question, QUESTION_PATTERN),
            (Category::Function, FUNCTION_PATTERN),
            (Category::Punctuation, PUNCTUATION_PATTERN),
            (Category::Other, OTHER_PATTERN),
        ]
    }
}
