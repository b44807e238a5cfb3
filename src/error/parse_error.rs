#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The lookahead token does not match what the grammar requires here.
    UnexpectedToken {
        /// What the parser was looking for (a token or a construct).
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token stream ended before the construct was complete.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A procedure binds the same name twice among its own name, parameters
    /// and locals.
    DuplicateBinding {
        /// The name bound twice.
        name:      String,
        /// The procedure declaring it.
        procedure: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Parentheses or blocks are nested deeper than the parser accepts.
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Shorthand for [`ParseError::UnexpectedToken`].
    pub fn unexpected(expected: impl Into<String>, found: impl Into<String>, line: usize) -> Self {
        Self::UnexpectedToken { expected: expected.into(),
                                found: found.into(),
                                line }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
            Self::DuplicateBinding { name,
                                     procedure,
                                     line, } => write!(f,
                                                       "Error on line {line}: '{name}' is bound more than once in procedure '{procedure}'."),
            Self::NestingTooDeep { limit, line } => {
                write!(f, "Error on line {line}: Nesting is deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
