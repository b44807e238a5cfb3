use std::{collections::HashMap, rc::Rc};

use log::trace;

use crate::{ast::ProcedureDecl, error::RuntimeError};

/// Index of a scope inside an [`Environment`].
///
/// Scopes refer to their parent by index only; the environment owns every
/// scope.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope, created together with the environment.
    pub const ROOT: Self = Self(0);
}

/// A single set of variable bindings.
#[derive(Debug, Default)]
struct Scope {
    variables: HashMap<String, i64>,
    parent:    Option<ScopeId>,
}

/// The runtime store of variables and procedures.
///
/// Variables live in an arena of scopes. The global scope is
/// [`ScopeId::ROOT`]; each procedure call pushes a child scope whose parent is
/// the global scope, so a procedure sees its own parameters and locals plus the
/// globals, but never the locals of its caller. Child scopes are created and
/// discarded in strict call/return order.
///
/// Procedures are registered once, before the top-level statements run, and
/// are shared by every scope.
///
/// ## Example
/// ```
/// use simpas::interpreter::environment::{Environment, ScopeId};
///
/// let mut env = Environment::new();
/// env.set_variable(ScopeId::ROOT, "x", 4);
///
/// let call = env.push_scope();
/// env.declare_variable(call, "y", 1);
///
/// assert_eq!(env.get_variable(call, "x", 1), Ok(4));
/// assert_eq!(env.get_variable(call, "y", 1), Ok(1));
///
/// env.pop_scope(call);
/// assert!(env.get_variable(ScopeId::ROOT, "y", 1).is_err());
/// ```
#[derive(Debug)]
pub struct Environment {
    scopes:     Vec<Scope>,
    procedures: HashMap<String, Rc<ProcedureDecl>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:     vec![Scope::default()],
               procedures: HashMap::new(), }
    }

    /// Creates a fresh scope chained to the global scope.
    pub fn push_scope(&mut self) -> ScopeId {
        self.scopes.push(Scope { variables: HashMap::new(),
                                 parent:    Some(ScopeId::ROOT), });
        ScopeId(self.scopes.len() - 1)
    }

    /// Discards `scope` together with every scope pushed after it.
    ///
    /// Scopes live in stack order, so popping an older scope also releases
    /// the newer ones. The global scope is never removed.
    pub fn pop_scope(&mut self, scope: ScopeId) {
        if scope != ScopeId::ROOT {
            self.scopes.truncate(scope.0);
        }
    }

    /// Number of scopes currently alive, the global scope included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Assigns `value` to `name`.
    ///
    /// The binding is updated in the nearest scope along the parent chain that
    /// already holds `name`; when none does, a new binding is created in
    /// `scope`. Assignment always succeeds.
    pub fn set_variable(&mut self, scope: ScopeId, name: &str, value: i64) {
        let target = self.resolve(scope, name).unwrap_or(scope);
        trace!("set {name} = {value} in scope {}", target.0);
        self.scopes[target.0].variables.insert(name.to_string(), value);
    }

    /// Binds `name` in `scope` itself, shadowing any global of the same name.
    ///
    /// Used when a procedure call sets up its return slot, parameters and
    /// locals.
    pub fn declare_variable(&mut self, scope: ScopeId, name: &str, value: i64) {
        self.scopes[scope.0].variables.insert(name.to_string(), value);
    }

    /// Looks up `name` from `scope`, falling back to the global scope.
    ///
    /// # Errors
    /// Returns `RuntimeError::UndefinedVariable` if no scope on the chain binds
    /// `name`.
    pub fn get_variable(&self, scope: ScopeId, name: &str, line: usize) -> Result<i64, RuntimeError> {
        self.resolve(scope, name)
            .and_then(|found| self.scopes[found.0].variables.get(name).copied())
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Finds the nearest scope on the parent chain of `scope` binding `name`.
    fn resolve(&self, scope: ScopeId, name: &str) -> Option<ScopeId> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let frame = &self.scopes[id.0];
            if frame.variables.contains_key(name) {
                return Some(id);
            }
            current = frame.parent;
        }
        None
    }

    /// Registers a procedure.
    ///
    /// # Errors
    /// Returns `RuntimeError::ProcedureAlreadyDefined` if a procedure with the
    /// same name exists.
    pub fn set_procedure(&mut self, decl: ProcedureDecl) -> Result<(), RuntimeError> {
        if self.procedures.contains_key(&decl.name) {
            return Err(RuntimeError::ProcedureAlreadyDefined { name: decl.name,
                                                               line: decl.line, });
        }
        self.procedures.insert(decl.name.clone(), Rc::new(decl));
        Ok(())
    }

    /// Looks up a procedure by name.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownProcedure` if no such procedure exists.
    pub fn get_procedure(&self, name: &str, line: usize) -> Result<Rc<ProcedureDecl>, RuntimeError> {
        self.procedures
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownProcedure { name: name.to_string(),
                                                            line })
    }

    /// The parameter names of a procedure, in declaration order.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownProcedure` if no such procedure exists.
    pub fn params(&self, name: &str, line: usize) -> Result<&[String], RuntimeError> {
        self.procedures
            .get(name)
            .map(|decl| decl.params.as_slice())
            .ok_or_else(|| RuntimeError::UnknownProcedure { name: name.to_string(),
                                                            line })
    }

    /// The local variable names of a procedure, in declaration order.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownProcedure` if no such procedure exists.
    pub fn local_vars(&self, name: &str, line: usize) -> Result<&[String], RuntimeError> {
        self.procedures
            .get(name)
            .map(|decl| decl.locals.as_slice())
            .ok_or_else(|| RuntimeError::UnknownProcedure { name: name.to_string(),
                                                            line })
    }
}
