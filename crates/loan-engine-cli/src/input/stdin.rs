use serde_json::Value;
use std::io::{self, Read};

/// Read loan terms as JSON from stdin when input is piped in.
///
/// Returns None when stdin is an interactive TTY or carries nothing but
/// whitespace, so flag-based invocation keeps working.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let body = buffer.trim();
    if body.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(body)?;
    Ok(Some(value))
}
