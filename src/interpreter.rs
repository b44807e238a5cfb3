/// The environment module stores variables and procedures at runtime.
///
/// Variables live in an arena of scopes: the global scope plus one scope per
/// active procedure call, linked to their parent by index. Procedures are kept
/// in a registry shared by all scopes.
///
/// # Responsibilities
/// - Creates and discards call scopes in stack order.
/// - Resolves variables through the scope chain.
/// - Registers procedures and rejects duplicates.
pub mod environment;
/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the tree produced by the parser, evaluates integer
/// expressions, runs statements and control flow, calls procedures and
/// performs all input and output.
///
/// # Responsibilities
/// - Executes statements in order against an environment.
/// - Evaluates expressions with checked integer arithmetic.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the line it appears on. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into numbers, identifiers, keywords
///   and operators.
/// - Skips white space and `//` comments, and stops at a terminating `.`.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent parser with one token of lookahead. It
/// processes the token stream produced by the lexer and constructs the
/// [`Program`](crate::ast::Program) tree.
///
/// # Responsibilities
/// - Converts tokens into procedures, statements and expressions.
/// - Encodes operator precedence in the structure of the grammar.
/// - Stops at the first syntax error, reporting its location.
pub mod parser;
