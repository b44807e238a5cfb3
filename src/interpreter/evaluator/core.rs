use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::binary::apply_binary_op,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested procedure calls.
///
/// Sized so that a runaway recursion is reported before it exhausts a 2 MiB
/// thread stack, the default for spawned threads.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 64;

/// Tunable limits of the evaluator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    /// How deeply procedure calls may nest before evaluation fails with
    /// `RuntimeError::StackOverflow`.
    pub max_call_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

/// Executes programs against an [`Environment`].
///
/// The evaluator owns the input that `read` consumes and the output that
/// `display` writes to. All variable state lives in the environment passed to
/// each call, so one environment can be carried across several programs.
///
/// ## Example
/// ```
/// use simpas::{
///     interpreter::{
///         environment::Environment,
///         evaluator::core::Evaluator,
///         lexer::tokenize,
///         parser::core::parse_program,
///     },
/// };
///
/// let tokens = tokenize("x := 6 * 7 ; display x").unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// let mut env = Environment::new();
/// let mut evaluator = Evaluator::new(std::io::empty(), Vec::new());
/// evaluator.exec(&program, &mut env).unwrap();
///
/// assert_eq!(evaluator.into_output(), b"42\n");
/// ```
pub struct Evaluator<R, W> {
    pub(super) input:  R,
    pub(super) output: W,
    pub(super) config: EvalConfig,
    /// Number of procedure calls currently active.
    pub(super) depth:  usize,
}

impl<R: BufRead, W: Write> Evaluator<R, W> {
    /// Creates an evaluator with the default configuration.
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, EvalConfig::default())
    }

    /// Creates an evaluator with an explicit configuration.
    #[must_use]
    pub const fn with_config(input: R, output: W, config: EvalConfig) -> Self {
        Self { input,
               output,
               config,
               depth: 0 }
    }

    /// The output written so far.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the evaluator, handing back its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs a complete program.
    ///
    /// The program's procedures are registered first, then its statements are
    /// executed in the global scope.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised; execution stops there.
    pub fn exec(&mut self, program: &Program, env: &mut Environment) -> EvalResult<()> {
        for decl in &program.procedures {
            env.set_procedure(decl.clone())?;
        }
        self.exec_block(program, env, ScopeId::ROOT)
    }

    /// Executes the statements of `block` in order within `scope`.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by a statement.
    pub fn exec_block(&mut self,
                      block: &Program,
                      env: &mut Environment,
                      scope: ScopeId)
                      -> EvalResult<()> {
        for statement in &block.statements {
            self.exec_statement(statement, env, scope)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// | Statement | Effect |
    /// |---|---|
    /// | `Assign` | evaluates the expression and stores it |
    /// | `Display` | prints the value, then performs the attached `read` |
    /// | `Read` | reads one integer line into the variable |
    /// | `If` | runs the then-block when the condition is nonzero, else the else-block |
    /// | `While` | re-runs the body while the condition is nonzero |
    ///
    /// # Errors
    /// Propagates any `RuntimeError` raised while evaluating expressions,
    /// performing I/O or running nested blocks.
    pub fn exec_statement(&mut self,
                          statement: &Statement,
                          env: &mut Environment,
                          scope: ScopeId)
                          -> EvalResult<()> {
        match statement {
            Statement::Assign { name, value, .. } => {
                let value = self.eval(value, env, scope)?;
                env.set_variable(scope, name, value);
            },
            Statement::Display { value, read, line } => {
                let value = self.eval(value, env, scope)?;
                self.display(value, *line)?;
                if let Some(read) = read {
                    self.read_into(read, env, scope)?;
                }
            },
            Statement::Read(read) => self.read_into(read, env, scope)?,
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                if self.eval(condition, env, scope)? != 0 {
                    self.exec_block(then_branch, env, scope)?;
                } else if let Some(else_branch) = else_branch {
                    self.exec_block(else_branch, env, scope)?;
                }
            },
            Statement::While { condition, body, .. } => {
                while self.eval(condition, env, scope)? != 0 {
                    self.exec_block(body, env, scope)?;
                }
            },
        }
        Ok(())
    }

    /// Evaluates an expression to an integer.
    ///
    /// Binary operands are evaluated left before right, and call arguments left
    /// to right, so side effects of nested procedure calls happen in source
    /// order.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for undefined variables, arithmetic failures
    /// and failing procedure calls.
    pub fn eval(&mut self, expr: &Expr, env: &mut Environment, scope: ScopeId) -> EvalResult<i64> {
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Variable { name, line } => env.get_variable(scope, name, *line),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left, env, scope)?;
                let right = self.eval(right, env, scope)?;
                apply_binary_op(*op, left, right, *line)
            },
            Expr::ProcedureCall { name,
                                  arguments,
                                  line, } => self.call_procedure(name, arguments, env, scope, *line),
        }
    }
}
