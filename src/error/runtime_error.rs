#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned or declared.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a procedure that was never declared.
    UnknownProcedure {
        /// The name of the procedure.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared two procedures with the same name.
    ProcedureAlreadyDefined {
        /// The name of the procedure.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a procedure.
    ArityMismatch {
        /// The name of the procedure.
        name:     String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `read` statement received text that is not a base-10 integer.
    InputFormat {
        /// The offending input line, trimmed.
        input: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `read` statement found the input exhausted.
    InputExhausted {
        /// The variable that was to receive the value.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Procedure calls nested deeper than the configured limit.
    StackOverflow {
        /// The configured maximum call depth.
        depth: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reading input or writing output failed.
    Io {
        /// Details reported by the underlying stream.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::UnknownProcedure { name, line } => {
                write!(f, "Error on line {line}: Unknown procedure '{name}'.")
            },
            Self::ProcedureAlreadyDefined { name, line } => write!(f,
                                                                   "Error on line {line}: Procedure '{name}' is already defined."),
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Procedure '{name}' expects {expected} argument(s), but {found} were supplied."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::InputFormat { input, line } => {
                write!(f, "Error on line {line}: Expected an integer as input, found '{input}'.")
            },
            Self::InputExhausted { name, line } => {
                write!(f, "Error on line {line}: No input left to read into '{name}'.")
            },
            Self::StackOverflow { depth, line } => write!(f,
                                                          "Error on line {line}: Procedure calls nested deeper than {depth}."),
            Self::Io { details, line } => write!(f, "Error on line {line}: I/O failure: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
