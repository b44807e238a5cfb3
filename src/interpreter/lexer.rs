use log::trace;
use logos::Logos;

use crate::error::ScanError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// The `Display` form of a token is its lexeme text; [`Token::Eof`] displays as
/// `end`, the sentinel the lexer reports once the input is exhausted.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `display`
    #[token("display")]
    Display,
    /// `read`
    #[token("read")]
    Read,
    /// `assign`
    #[token("assign")]
    Assign,
    /// `if`
    #[token("if")]
    #[token("IF")]
    If,
    /// `then`
    #[token("then")]
    #[token("THEN")]
    Then,
    /// `else`
    #[token("else")]
    #[token("ELSE")]
    Else,
    /// `while`
    #[token("while")]
    #[token("WHILE")]
    While,
    /// `do`
    #[token("do")]
    #[token("DO")]
    Do,
    /// `end`
    #[token("end")]
    #[token("END")]
    End,
    /// `procedure`
    #[token("procedure")]
    #[token("PROCEDURE")]
    Procedure,
    /// `var`
    #[token("var")]
    #[token("VAR")]
    Var,
    /// Identifier tokens; variable or procedure names such as `x` or `max`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `:=`
    #[token(":=")]
    ColonEquals,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `.` terminates the program text; nothing after it is scanned.
    #[token(".")]
    Period,
    /// Line breaks.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// End of input, reported forever once reached.
    Eof,
}

impl Token {
    /// Whether the token is a number, identifier or keyword.
    ///
    /// Word tokens may only be followed by white space or an operator
    /// character.
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self,
                 Self::Integer(_)
                 | Self::Identifier(_)
                 | Self::Display
                 | Self::Read
                 | Self::Assign
                 | Self::If
                 | Self::Then
                 | Self::Else
                 | Self::While
                 | Self::Do
                 | Self::End
                 | Self::Procedure
                 | Self::Var)
    }

    /// Describes the token for diagnostics.
    ///
    /// Unlike `Display`, end of input is spelled out so that it cannot be
    /// mistaken for the `end` keyword.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Eof => "end of input".to_string(),
            other => format!("'{other}'"),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Integer(n) => return write!(f, "{n}"),
            Self::Identifier(name) => return write!(f, "{name}"),
            Self::Display => "display",
            Self::Read => "read",
            Self::Assign => "assign",
            Self::If => "if",
            Self::Then => "then",
            Self::Else => "else",
            Self::While => "while",
            Self::Do => "do",
            Self::End | Self::Eof => "end",
            Self::Procedure => "procedure",
            Self::Var => "var",
            Self::ColonEquals => ":=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::NotEqual => "<>",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equals => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Period => ".",
            Self::NewLine => "\\n",
            Self::Comment | Self::Ignored => "",
        };
        write!(f, "{text}")
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal does not fit in an `i64`, which the
/// [`Lexer`] reports as [`ScanError::LiteralTooLarge`].
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Whether `c` is white space.
#[must_use]
pub const fn is_white_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Whether `c` is one of the operator and punctuation characters
/// `- = + * / % ( ) ; : < > ,`.
#[must_use]
pub const fn is_operator_char(c: char) -> bool {
    matches!(c,
             '-' | '=' | '+' | '*' | '/' | '%' | '(' | ')' | ';' | ':' | '<' | '>' | ',')
}

/// A pull-based lexer producing one `(Token, line)` pair at a time.
///
/// Once the input is exhausted, or a `.` has been seen, every further call to
/// [`Lexer::next_token`] returns [`Token::Eof`].
pub struct Lexer<'source> {
    inner:    logos::Lexer<'source, Token>,
    finished: bool,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { inner:    Token::lexer_with_extras(source, LexerExtras { line: 1 }),
               finished: false, }
    }

    /// The line the lexer is currently on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.inner.extras.line
    }

    /// Returns the next token together with its source line.
    ///
    /// White space and `//` comments are skipped. A number, identifier or
    /// keyword must be followed by white space, an operator character or the
    /// end of input; an operator must be followed by white space, a letter, a
    /// digit, another operator character or the end of input.
    ///
    /// # Errors
    /// Returns a `ScanError` if:
    /// - a character belongs to no lexical class,
    /// - a lexeme is followed by a character that may not follow it,
    /// - a numeric literal is too large.
    ///
    /// # Example
    /// ```
    /// use simpas::interpreter::lexer::{Lexer, Token};
    ///
    /// let mut lexer = Lexer::new("x := 4");
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Identifier("x".to_string()), 1));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::ColonEquals, 1));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Integer(4), 1));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
    /// assert_eq!(lexer.next_token().unwrap(), (Token::Eof, 1));
    /// ```
    pub fn next_token(&mut self) -> Result<(Token, usize), ScanError> {
        if self.finished {
            return Ok((Token::Eof, self.line()));
        }

        match self.inner.next() {
            None | Some(Ok(Token::Period)) => {
                self.finished = true;
                Ok((Token::Eof, self.line()))
            },
            Some(Ok(token)) => {
                self.check_trailing(&token)?;
                trace!("line {}: token {token:?}", self.line());
                Ok((token, self.line()))
            },
            Some(Err(())) => Err(self.classify_error()),
        }
    }

    /// Enforces the class-transition rule on the character after `token`.
    fn check_trailing(&self, token: &Token) -> Result<(), ScanError> {
        let Some(next) = self.inner.remainder().chars().next() else {
            return Ok(());
        };

        let allowed = if token.is_word() {
            is_white_space(next) || is_operator_char(next)
        } else {
            is_white_space(next) || is_operator_char(next) || next.is_ascii_alphanumeric()
        };

        if allowed {
            Ok(())
        } else {
            Err(ScanError::IllegalTrailingCharacter { lexeme: self.inner.slice().to_string(),
                                                      found:  next,
                                                      line:   self.line(), })
        }
    }

    /// Turns a logos failure into the matching `ScanError`.
    fn classify_error(&self) -> ScanError {
        let slice = self.inner.slice();
        if !slice.is_empty() && slice.chars().all(|c| c.is_ascii_digit()) {
            return ScanError::LiteralTooLarge { lexeme: slice.to_string(),
                                                line:   self.line(), };
        }

        ScanError::UnexpectedCharacter { found: slice.chars().next().unwrap_or('\0'),
                                         line:  self.line(), }
    }
}

/// Tokenizes an entire source string.
///
/// The returned vector always ends with exactly one [`Token::Eof`].
///
/// # Errors
/// Propagates the first `ScanError` raised by [`Lexer::next_token`].
///
/// # Example
/// ```
/// use simpas::interpreter::lexer::tokenize;
///
/// let lexemes: Vec<String> = tokenize("12 + ab").unwrap()
///                                               .iter()
///                                               .map(|(token, _)| token.to_string())
///                                               .collect();
///
/// assert_eq!(lexemes, ["12", "+", "ab", "end"]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ScanError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let (token, line) = lexer.next_token()?;
        let done = token == Token::Eof;
        tokens.push((token, line));
        if done {
            return Ok(tokens);
        }
    }
}
