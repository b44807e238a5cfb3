use std::io::{BufRead, Write};

use log::debug;

use crate::{
    ast::{Expr, ProcedureDecl},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::core::{EvalResult, Evaluator},
    },
};

impl<R: BufRead, W: Write> Evaluator<R, W> {
    /// Calls a user-defined procedure and returns the value left in its return
    /// slot.
    ///
    /// The steps are, in order:
    /// 1. look the procedure up and check the argument count,
    /// 2. evaluate the arguments left to right in the caller's scope,
    /// 3. push a scope chained to the global scope,
    /// 4. bind the return slot (named after the procedure) to `0`, each
    ///    parameter to its argument and each local to `0`,
    /// 5. run the body and read the return slot.
    ///
    /// The scope is popped again whether or not the body succeeds.
    ///
    /// # Errors
    /// Returns a `RuntimeError` if:
    /// - the procedure is unknown,
    /// - the argument count differs from the parameter count,
    /// - the call would nest deeper than the configured limit,
    /// - evaluating an argument or the body fails.
    pub(super) fn call_procedure(&mut self,
                                 name: &str,
                                 arguments: &[Expr],
                                 env: &mut Environment,
                                 caller: ScopeId,
                                 line: usize)
                                 -> EvalResult<i64> {
        let expected = env.params(name, line)?.len();
        if expected != arguments.len() {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     expected,
                                                     found: arguments.len(),
                                                     line });
        }

        let values = arguments.iter()
                              .map(|argument| self.eval(argument, env, caller))
                              .collect::<EvalResult<Vec<_>>>()?;

        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::StackOverflow { depth: self.config.max_call_depth,
                                                     line });
        }

        let decl = env.get_procedure(name, line)?;
        debug!("line {line}: calling '{name}' with {values:?}");

        let scope = env.push_scope();
        self.depth += 1;
        let result = self.run_body(&decl, &values, env, scope);
        self.depth -= 1;
        env.pop_scope(scope);

        result
    }

    fn run_body(&mut self,
                decl: &ProcedureDecl,
                values: &[i64],
                env: &mut Environment,
                scope: ScopeId)
                -> EvalResult<i64> {
        env.declare_variable(scope, &decl.name, 0);
        for (param, value) in decl.params.iter().zip(values) {
            env.declare_variable(scope, param, *value);
        }
        for local in &decl.locals {
            env.declare_variable(scope, local, 0);
        }

        self.exec_block(&decl.body, env, scope)?;

        env.get_variable(scope, &decl.name, decl.line)
    }
}
