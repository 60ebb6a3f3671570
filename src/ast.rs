use serde_json::{json, Value as Json};
use std::fmt;
use std::rc::Rc;

/// A binary operator appearing in a [`Node::BinaryExpression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEq => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEq => ">=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        };
        write!(f, "{}", symbol)
    }
}

/// An AST node.
///
/// One tagged union covers the whole tree; each variant carries exactly the
/// fields its grammar rule implies. Nodes are immutable once the parser has
/// built them. Function bodies are `Rc` so a declared function can share its
/// body subtree with every closure that captures it.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program {
        body: Vec<Node>,
    },
    CodeBlock {
        body: Vec<Node>,
    },
    Print {
        value: Box<Node>,
    },
    VarDeclaration {
        name: String,
        value: Box<Node>,
    },
    VarAssignment {
        name: String,
        value: Box<Node>,
    },
    Conditional {
        condition: Box<Node>,
        on_true: Box<Node>,
        on_false: Option<Box<Node>>,
    },
    While {
        condition: Box<Node>,
        body: Box<Node>,
    },
    DoWhile {
        condition: Box<Node>,
        body: Box<Node>,
    },
    Return {
        value: Box<Node>,
    },
    FuncDeclaration {
        name: String,
        parameters: Vec<String>,
        body: Rc<Node>,
    },
    FuncCall {
        name: String,
        arguments: Vec<Node>,
    },
    Identifier {
        name: String,
    },
    StringLiteral {
        value: String,
    },
    NumericLiteral {
        value: f64,
        is_float: bool,
    },
    BooleanLiteral {
        value: bool,
    },
    BinaryExpression {
        operator: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Render the tree as tagged JSON for diagnostic display (`--show-ast`).
    pub fn to_json(&self) -> Json {
        match self {
            Node::Program { body } => json!({
                "type": "program",
                "body": body.iter().map(Node::to_json).collect::<Vec<_>>(),
            }),
            Node::CodeBlock { body } => json!({
                "type": "code_block",
                "body": body.iter().map(Node::to_json).collect::<Vec<_>>(),
            }),
            Node::Print { value } => json!({
                "type": "print",
                "value": value.to_json(),
            }),
            Node::VarDeclaration { name, value } => json!({
                "type": "var_declaration",
                "name": name,
                "value": value.to_json(),
            }),
            Node::VarAssignment { name, value } => json!({
                "type": "var_assignment",
                "name": name,
                "value": value.to_json(),
            }),
            Node::Conditional {
                condition,
                on_true,
                on_false,
            } => json!({
                "type": "conditional",
                "condition": condition.to_json(),
                "on_true": on_true.to_json(),
                "on_false": on_false.as_ref().map(|node| node.to_json()),
            }),
            Node::While { condition, body } => json!({
                "type": "while",
                "condition": condition.to_json(),
                "body": body.to_json(),
            }),
            Node::DoWhile { condition, body } => json!({
                "type": "do_while",
                "condition": condition.to_json(),
                "body": body.to_json(),
            }),
            Node::Return { value } => json!({
                "type": "return",
                "value": value.to_json(),
            }),
            Node::FuncDeclaration {
                name,
                parameters,
                body,
            } => json!({
                "type": "func_declaration",
                "name": name,
                "parameters": parameters,
                "body": body.to_json(),
            }),
            Node::FuncCall { name, arguments } => json!({
                "type": "func_call",
                "name": name,
                "arguments": arguments.iter().map(Node::to_json).collect::<Vec<_>>(),
            }),
            Node::Identifier { name } => json!({
                "type": "identifier",
                "name": name,
            }),
            Node::StringLiteral { value } => json!({
                "type": "string_literal",
                "value": value,
            }),
            Node::NumericLiteral { value, is_float } => {
                if *is_float {
                    json!({ "type": "numeric_literal", "value": value })
                } else {
                    json!({ "type": "numeric_literal", "value": *value as i64 })
                }
            }
            Node::BooleanLiteral { value } => json!({
                "type": "boolean_literal",
                "value": value,
            }),
            Node::BinaryExpression {
                operator,
                left,
                right,
            } => json!({
                "type": "binary_expression",
                "operator": operator.to_string(),
                "left": left.to_json(),
                "right": right.to_json(),
            }),
        }
    }
}
