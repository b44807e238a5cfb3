/// A complete program, or a statement block nested inside control flow.
///
/// The top-level program holds the procedure declarations that precede its
/// statements. Blocks nested in `if`, `while` or a procedure body are
/// programs too, but never carry procedures of their own: a single statement
/// body is simply a one-element program.
///
/// Programs are immutable once parsed. Every consumer (the evaluator, a code
/// generator) receives a shared reference and walks it read-only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Procedures declared before the first statement.
    pub procedures: Vec<ProcedureDecl>,
    /// The statements, executed in order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Builds a block: a program without procedure declarations.
    ///
    /// ## Example
    /// ```
    /// use simpas::ast::{Expr, Program, Statement};
    ///
    /// let block = Program::block(vec![Statement::Display { value: Expr::Number(1),
    ///                                                       read:  None,
    ///                                                       line:  1, }]);
    ///
    /// assert!(block.procedures.is_empty());
    /// assert_eq!(block.statements.len(), 1);
    /// ```
    #[must_use]
    pub const fn block(statements: Vec<Statement>) -> Self {
        Self { procedures: Vec::new(),
               statements }
    }
}

/// A user-defined procedure.
///
/// A call binds `params` to the argument values, zero-initializes every name
/// in `locals` and a return slot named after the procedure itself, runs
/// `body` and yields whatever the body left in the return slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureDecl {
    /// The procedure name, which doubles as the return slot.
    pub name:   String,
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// Local variable names declared with `var`.
    pub locals: Vec<String>,
    /// The statements executed on each call.
    pub body:   Program,
    /// Line number in the source code.
    pub line:   usize,
}

/// The trailing `read <name>` of a display statement, or a stand-alone read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Read {
    /// The variable receiving the value read.
    pub name: String,
    /// Line number in the source code.
    pub line: usize,
}

/// A statement, executed for its effect on the environment or the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `x := e` (or `assign x = e`).
    Assign {
        /// The variable being written.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `display e` with an optional trailing `read x`.
    Display {
        /// The expression whose value is printed.
        value: Expr,
        /// A read performed right after printing.
        read:  Option<Read>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `read x`.
    Read(Read),
    /// `if c then ... [else ...] end`.
    If {
        /// The condition; any value other than `0` is true.
        condition:   Expr,
        /// Executed when the condition is true.
        then_branch: Program,
        /// Executed when the condition is false, if present.
        else_branch: Option<Program>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `while c do ... end`.
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Program,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Assign { line, .. }
            | Self::Display { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::Read(Read { line, .. }) => *line,
        }
    }
}

/// An abstract syntax tree (AST) node representing an integer expression.
///
/// There is no boolean type: relational operators produce `1` or `0`, and
/// unary minus is desugared by the parser into a multiplication by `-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number(i64),
    /// A variable reference.
    Variable {
        /// The name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation, arithmetic or relational.
    BinaryOp {
        /// Left operand, evaluated first.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A call to a user-defined procedure, e.g. `max(a, b)`.
    ProcedureCall {
        /// Name of the procedure being called.
        name:      String,
        /// Arguments, evaluated left to right in the caller's scope.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Builds a boxed binary operation node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, line: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line }
    }

    /// Gets the line number from `self`, or `None` for a bare literal.
    /// ## Example
    /// ```
    /// use simpas::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), Some(5));
    /// assert_eq!(Expr::Number(3).line_number(), None);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::Number(_) => None,
            Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::ProcedureCall { line, .. } => Some(*line),
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons. Comparisons yield `1`
/// for true and `0` for false.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating integer division (`/`)
    Div,
    /// Equal to (`=`)
    Equal,
    /// Not equal to (`<>`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl BinaryOperator {
    /// Whether the operator is one of the relational operators.
    #[must_use]
    pub const fn is_relational(self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::NotEqual
                 | Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "=",
            NotEqual => "<>",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}
