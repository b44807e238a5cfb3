use std::io::{BufRead, Write};

use log::debug;

use crate::{
    ast::Read,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::core::{EvalResult, Evaluator},
    },
};

fn io_error(err: &std::io::Error, line: usize) -> RuntimeError {
    RuntimeError::Io { details: err.to_string(),
                       line }
}

impl<R: BufRead, W: Write> Evaluator<R, W> {
    /// Writes `value` as one decimal line and flushes, so that a prompt is
    /// visible before the following `read` blocks.
    pub(super) fn display(&mut self, value: i64, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").and_then(|()| self.output.flush())
                                        .map_err(|e| io_error(&e, line))
    }

    /// Reads one integer and stores it in the variable named by `read`.
    pub(super) fn read_into(&mut self,
                            read: &Read,
                            env: &mut Environment,
                            scope: ScopeId)
                            -> EvalResult<()> {
        let value = self.read_integer(&read.name, read.line)?;
        debug!("line {}: read {value} into '{}'", read.line, read.name);
        env.set_variable(scope, &read.name, value);
        Ok(())
    }

    /// Consumes one line of input and parses it as a base-10 integer.
    ///
    /// Surrounding white space is ignored.
    fn read_integer(&mut self, name: &str, line: usize) -> EvalResult<i64> {
        let mut buffer = String::new();
        let bytes = self.input
                        .read_line(&mut buffer)
                        .map_err(|e| io_error(&e, line))?;

        if bytes == 0 {
            return Err(RuntimeError::InputExhausted { name: name.to_string(),
                                                      line });
        }

        let text = buffer.trim();
        text.parse()
            .map_err(|_| RuntimeError::InputFormat { input: text.to_string(),
                                                     line })
    }
}
