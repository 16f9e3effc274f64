use std::fmt;

/// The payload a token carries for string and number lexemes. Every other
/// token kind (including `true`/`false`/`nil`, which are keywords, not
/// literals at the scanning level) carries `None`.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    String(String),
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::String(s) => write!(f, "{s}"),
            Literal::Number(n) => write!(f, "{n}"),
        }
    }
}

// NaN never arises here since a scanned numeric lexeme always parses to a
// finite value; Eq lets Token derive it for use as a scope-map key.
impl Eq for Literal {}
