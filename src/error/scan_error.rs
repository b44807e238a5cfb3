#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum ScanError {
    /// A character that belongs to no lexical class.
    UnexpectedCharacter {
        /// The character encountered.
        found: char,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A lexeme was immediately followed by a character that may not follow it,
    /// e.g. the `a` in `12a`.
    IllegalTrailingCharacter {
        /// The lexeme scanned so far.
        lexeme: String,
        /// The offending character.
        found:  char,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A numeric literal does not fit in a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl ScanError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::IllegalTrailingCharacter { line, .. }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line } => {
                write!(f, "Error on line {line}: Unexpected character {found:?}.")
            },
            Self::IllegalTrailingCharacter { lexeme, found, line } => write!(f,
                                                                             "Error on line {line}: Expected white space or an operator after '{lexeme}', found {found:?}."),
            Self::LiteralTooLarge { lexeme, line } => {
                write!(f, "Error on line {line}: Literal {lexeme} is too large.")
            },
        }
    }
}

impl std::error::Error for ScanError {}
