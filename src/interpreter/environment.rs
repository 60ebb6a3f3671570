use super::error::RuntimeError;
use crate::ast::Node;
use crate::value::Value;
use indexmap::IndexMap;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a scope frame.
///
/// Frames are reference counted because a frame can outlive the block that
/// created it: any `Function` declared inside it keeps it alive for the
/// closure's lifetime, and child frames hold it as their parent.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A declared function together with the environment it closes over.
#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Rc<Node>,
    pub declared_in: EnvRef,
}

/// A single scope frame: variable bindings, function bindings, and a link
/// to the enclosing frame.
///
/// Variables and functions live in independent namespaces; a variable and a
/// function may share a name without conflict. Lookups and updates walk
/// outward through `parent` links, declarations only ever touch this frame.
#[derive(Debug, Default)]
pub struct Environment {
    variables: IndexMap<String, Value>,
    functions: IndexMap<String, Rc<Function>>,
    parent: Option<EnvRef>,
}

impl Environment {
    /// Create the single global root frame.
    pub fn root() -> EnvRef {
        debug!("new root environment created");
        Rc::new(RefCell::new(Environment::default()))
    }

    /// Create a child frame chained to `parent`.
    pub fn child_of(parent: &EnvRef) -> EnvRef {
        debug!("new child environment created");
        Rc::new(RefCell::new(Environment {
            variables: IndexMap::new(),
            functions: IndexMap::new(),
            parent: Some(Rc::clone(parent)),
        }))
    }

    /// Define a new variable in this frame. Fails if the name is already
    /// declared here (shadowing an outer frame is fine).
    pub fn declare_variable(&mut self, name: &str, value: Value) -> Result<(), RuntimeError> {
        debug!("declaring variable '{}'", name);
        if self.variables.contains_key(name) {
            return Err(RuntimeError::VariableRedeclared(name.to_string()));
        }
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    /// Update an existing variable in this frame or any enclosing one.
    pub fn assign_variable(&mut self, name: &str, value: Value) -> Result<(), RuntimeError> {
        debug!("assigning variable '{}'", name);
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign_variable(name, value),
            None => Err(RuntimeError::VariableNotDeclared(name.to_string())),
        }
    }

    /// Fetch a variable from this frame or any enclosing one.
    pub fn read_variable(&self, name: &str) -> Result<Value, RuntimeError> {
        if let Some(value) = self.variables.get(name) {
            return Ok(value.clone());
        }
        match &self.parent {
            Some(parent) => parent.borrow().read_variable(name),
            None => Err(RuntimeError::VariableNotDeclared(name.to_string())),
        }
    }

    /// Delete a variable from this frame only.
    pub fn remove_variable(&mut self, name: &str) -> Result<(), RuntimeError> {
        debug!("removing variable '{}'", name);
        if self.variables.shift_remove(name).is_none() {
            return Err(RuntimeError::VariableNotDeclared(name.to_string()));
        }
        Ok(())
    }

    /// Define a new function in this frame. Fails if a function of that
    /// name is already declared here.
    pub fn declare_function(&mut self, function: Rc<Function>) -> Result<(), RuntimeError> {
        debug!("declaring function '{}'", function.name);
        if self.functions.contains_key(&function.name) {
            return Err(RuntimeError::FunctionRedeclared(function.name.clone()));
        }
        self.functions.insert(function.name.clone(), function);
        Ok(())
    }

    /// Resolve a function from this frame or any enclosing one.
    ///
    /// The returned `Function` carries `declared_in`, which is what a call
    /// chains its new frame to. Chaining there, not to the call-site frame,
    /// is what makes closures and recursion lexically scoped rather than
    /// dynamic.
    pub fn resolve_function(&self, name: &str) -> Result<Rc<Function>, RuntimeError> {
        if let Some(function) = self.functions.get(name) {
            return Ok(Rc::clone(function));
        }
        match &self.parent {
            Some(parent) => parent.borrow().resolve_function(name),
            None => Err(RuntimeError::FunctionNotDeclared(name.to_string())),
        }
    }
}
