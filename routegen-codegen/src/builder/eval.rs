//! Direct evaluation of generated method bodies.

use routegen_core::TypeToken;
use thiserror::Error;

use super::{Expr, MethodSpec, Statement};

/// A runtime value produced while evaluating a method body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Str(&'a str),
    Type(&'a TypeToken),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("method '{method}' takes {expected} argument(s), got {actual}")]
    Arity {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error("unknown parameter '{0}'")]
    UnknownParam(String),

    #[error("condition must be a boolean")]
    NonBooleanCondition,

    #[error("unknown method '{0}'")]
    UnknownMethod(String),

    #[error("method '{0}' has no return statement")]
    MissingReturn(String),
}

/// Invoke a method with positional arguments.
pub fn call<'a>(method: &'a MethodSpec, args: &[Value<'a>]) -> Result<Value<'a>, EvalError> {
    if method.params.len() != args.len() {
        return Err(EvalError::Arity {
            method: method.name.clone(),
            expected: method.params.len(),
            actual: args.len(),
        });
    }

    let env: Vec<(&str, Value<'a>)> = method
        .params
        .iter()
        .map(|p| p.name.as_str())
        .zip(args.iter().copied())
        .collect();

    for stmt in &method.body {
        match stmt {
            Statement::Return { value } => return eval(value, &env),
        }
    }

    Err(EvalError::MissingReturn(method.name.clone()))
}

fn eval<'a>(expr: &'a Expr, env: &[(&str, Value<'a>)]) -> Result<Value<'a>, EvalError> {
    match expr {
        Expr::Param { name } => env
            .iter()
            .find(|(param, _)| *param == name.as_str())
            .map(|(_, value)| *value)
            .ok_or_else(|| EvalError::UnknownParam(name.clone())),
        Expr::Str { value } => Ok(Value::Str(value)),
        Expr::TypeLiteral { token } => Ok(Value::Type(token)),
        Expr::Null => Ok(Value::Null),
        Expr::Equals { left, right } => {
            let left = eval(left, env)?;
            let right = eval(right, env)?;
            Ok(Value::Bool(left == right))
        }
        Expr::Conditional {
            condition,
            then,
            otherwise,
        } => match eval(condition, env)? {
            Value::Bool(true) => eval(then, env),
            Value::Bool(false) => eval(otherwise, env),
            _ => Err(EvalError::NonBooleanCondition),
        },
    }
}
