use super::control_flow::Execution;
use super::environment::{EnvRef, Environment, Function};
use super::error::RuntimeError;
use super::operations;
use crate::ast::Node;
use crate::value::Value;
use log::debug;
use std::io::{self, Write};
use std::rc::Rc;

/// The Brine tree-walking interpreter.
///
/// Holds the global scope frame and the sink that `print` writes to. The
/// sink is generic so tests can run programs against an in-memory buffer
/// instead of stdout.
pub struct Interpreter<W: Write> {
    globals: EnvRef,
    out: W,
}

impl Interpreter<io::Stdout> {
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    pub fn with_output(out: W) -> Self {
        Self {
            globals: Environment::root(),
            out,
        }
    }

    /// Execute a whole program in the global scope.
    ///
    /// A `return` that unwinds all the way up here has no call to stop at,
    /// which is an error rather than a silent exit.
    pub fn run(&mut self, program: &Node) -> Result<(), RuntimeError> {
        let Node::Program { body } = program else {
            debug!("run called on a non-program node, executing as statement");
            let globals = Rc::clone(&self.globals);
            return match self.execute_statement(&globals, program)? {
                Execution::Next => Ok(()),
                Execution::Return(_) => Err(RuntimeError::ReturnOutsideCall),
            };
        };

        debug!("running program with {} top-level statements", body.len());
        let globals = Rc::clone(&self.globals);
        for statement in body {
            if let Execution::Return(_) = self.execute_statement(&globals, statement)? {
                return Err(RuntimeError::ReturnOutsideCall);
            }
        }
        Ok(())
    }

    fn execute_statement(&mut self, env: &EnvRef, node: &Node) -> Result<Execution, RuntimeError> {
        match node {
            Node::CodeBlock { .. } => self.execute_block(env, node),

            Node::Print { value } => {
                let value = self.evaluate(env, value)?;
                writeln!(self.out, "{}", value)?;
                Ok(Execution::Next)
            }

            Node::VarDeclaration { name, value } => {
                let value = self.evaluate(env, value)?;
                env.borrow_mut().declare_variable(name, value)?;
                Ok(Execution::Next)
            }

            Node::VarAssignment { name, value } => {
                let value = self.evaluate(env, value)?;
                env.borrow_mut().assign_variable(name, value)?;
                Ok(Execution::Next)
            }

            Node::Conditional {
                condition,
                on_true,
                on_false,
            } => {
                if self.evaluate(env, condition)?.is_truthy() {
                    self.execute_block(env, on_true)
                } else if let Some(on_false) = on_false {
                    // Either a block or a chained conditional.
                    self.execute_statement(env, on_false)
                } else {
                    Ok(Execution::Next)
                }
            }

            Node::While { condition, body } => {
                while self.evaluate(env, condition)?.is_truthy() {
                    if let Execution::Return(value) = self.execute_block(env, body)? {
                        return Ok(Execution::Return(value));
                    }
                }
                Ok(Execution::Next)
            }

            Node::DoWhile { condition, body } => {
                loop {
                    if let Execution::Return(value) = self.execute_block(env, body)? {
                        return Ok(Execution::Return(value));
                    }
                    if !self.evaluate(env, condition)?.is_truthy() {
                        break;
                    }
                }
                Ok(Execution::Next)
            }

            Node::Return { value } => {
                let value = self.evaluate(env, value)?;
                Ok(Execution::Return(value))
            }

            Node::FuncDeclaration {
                name,
                parameters,
                body,
            } => {
                let function = Rc::new(Function {
                    name: name.clone(),
                    parameters: parameters.clone(),
                    body: Rc::clone(body),
                    declared_in: Rc::clone(env),
                });
                env.borrow_mut().declare_function(function)?;
                Ok(Execution::Next)
            }

            // A call in statement position runs for its side effects; a
            // missing return value is fine here.
            Node::FuncCall { name, arguments } => {
                self.call_function(env, name, arguments)?;
                Ok(Execution::Next)
            }

            other => {
                // Expression nodes in statement position evaluate and drop
                // their value.
                self.evaluate(env, other)?;
                Ok(Execution::Next)
            }
        }
    }

    /// Run a block's statements in a fresh child frame. Loops re-enter here
    /// every iteration, so each pass gets its own frame and `let` inside a
    /// loop body does not collide with the previous iteration.
    fn execute_block(&mut self, env: &EnvRef, block: &Node) -> Result<Execution, RuntimeError> {
        let Node::CodeBlock { body } = block else {
            return self.execute_statement(env, block);
        };

        let scope = Environment::child_of(env);
        for statement in body {
            if let Execution::Return(value) = self.execute_statement(&scope, statement)? {
                return Ok(Execution::Return(value));
            }
        }
        Ok(Execution::Next)
    }

    fn evaluate(&mut self, env: &EnvRef, node: &Node) -> Result<Value, RuntimeError> {
        match node {
            Node::NumericLiteral { value, is_float } => Ok(Value::Number(*value, *is_float)),
            Node::StringLiteral { value } => Ok(Value::String(value.clone())),
            Node::BooleanLiteral { value } => Ok(Value::Boolean(*value)),

            Node::Identifier { name } => env.borrow().read_variable(name),

            Node::BinaryExpression {
                operator,
                left,
                right,
            } => {
                let left = self.evaluate(env, left)?;
                let right = self.evaluate(env, right)?;
                operations::apply(*operator, &left, &right)
            }

            // A call in expression position must produce a value.
            Node::FuncCall { name, arguments } => self
                .call_function(env, name, arguments)?
                .ok_or_else(|| RuntimeError::MissingReturn(name.clone())),

            // The parser never places a statement node in an expression
            // slot; this arm only fires on hand-built ASTs.
            other => Err(RuntimeError::NotAnExpression(format!("{:?}", other))),
        }
    }

    /// Call a function: resolve it, check arity, bind arguments in a frame
    /// chained to the declaration environment, then run the body.
    ///
    /// Arguments are evaluated in the caller's environment before the new
    /// frame exists. Chaining to `declared_in` rather than the call site is
    /// what gives lexical scoping.
    fn call_function(
        &mut self,
        env: &EnvRef,
        name: &str,
        arguments: &[Node],
    ) -> Result<Option<Value>, RuntimeError> {
        let function = env.borrow().resolve_function(name)?;
        debug!("calling function '{}' with {} arguments", name, arguments.len());

        if arguments.len() != function.parameters.len() {
            return Err(RuntimeError::ArityMismatch {
                name: name.to_string(),
                expected: function.parameters.len(),
                provided: arguments.len(),
            });
        }

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.evaluate(env, argument)?);
        }

        let frame = Environment::child_of(&function.declared_in);
        for (parameter, value) in function.parameters.iter().zip(values) {
            frame.borrow_mut().declare_variable(parameter, value)?;
        }

        match self.execute_block(&frame, &function.body)? {
            Execution::Return(value) => Ok(Some(value)),
            Execution::Next => Ok(None),
        }
    }
}
