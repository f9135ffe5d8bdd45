//! String parsing utilities

use crate::error::{Result, StatusError};
use once_cell::sync::Lazy;
use regex::Regex;

static PERCENTAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*percentage:[ \t]*(.*?)[ \t]*$").expect("valid regex"));
static STATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*state:[ \t]*(.*?)[ \t]*$").expect("valid regex"));
static PAREN_PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((\d+(?:\.\d+)?%)\)").expect("valid regex"));
static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid regex"));

fn capture(re: &Regex, output: &str, what: &str) -> Result<String> {
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| StatusError::Parse(format!("no {} found", what)))
}

/// Value of the `percentage:` line in upower output
pub fn extract_percentage(output: &str) -> Result<String> {
    capture(&PERCENTAGE_RE, output, "battery percentage")
}

/// Value of the `state:` line in upower output
pub fn extract_state(output: &str) -> Result<String> {
    capture(&STATE_RE, output, "battery state")
}

/// First parenthesized percentage, without the parentheses: `(50%)` -> `50%`
pub fn extract_parenthesized_percentage(output: &str) -> Result<String> {
    capture(&PAREN_PERCENT_RE, output, "brightness percentage")
}

/// The whole (trimmed) output, which must be a plain integer
pub fn extract_integer(output: &str) -> Result<String> {
    let trimmed = output.trim();
    if INTEGER_RE.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(StatusError::Parse(format!("expected an integer, got {:?}", trimmed)))
    }
}
