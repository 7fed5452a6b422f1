//! Host-facing entry points.
//!
//! The host hands over loosely typed input (a JSON value from a plugin
//! bridge, raw bytes from a text field). Anything that is not text is
//! rejected here with [`QueryError::InvalidArgument`] so the interpreter only
//! ever sees `&str`.

use lazy_static::lazy_static;
use serde_json::Value;

use crate::error::{QueryError, Result};
use crate::interpretation::Interpretation;
use crate::interpreter::QueryInterpreter;

lazy_static! {
    static ref DEFAULT_INTERPRETER: QueryInterpreter = QueryInterpreter::default();
}

/// Interpret a query with the built-in lexicon and rules.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn interpret_query(query: String) -> Interpretation {
    DEFAULT_INTERPRETER.interpret(&query)
}

/// Interpret a JSON value that must be a string.
pub fn interpret_value(interpreter: &QueryInterpreter, value: &Value) -> Result<Interpretation> {
    match value {
        Value::String(query) => Ok(interpreter.interpret(query)),
        other => Err(QueryError::InvalidArgument(format!(
            "query must be a string, got {}",
            json_kind(other)
        ))),
    }
}

/// Interpret raw bytes that must be UTF-8 text.
pub fn interpret_bytes(interpreter: &QueryInterpreter, bytes: &[u8]) -> Result<Interpretation> {
    let query = std::str::from_utf8(bytes)
        .map_err(|e| QueryError::InvalidArgument(format!("query is not valid UTF-8: {}", e)))?;
    Ok(interpreter.interpret(query))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
