//! Template engine for placeholder substitution.
//!
//! Excuse phrase templates carry named `{placeholder}` slots that are filled
//! from a context mapping at generation time.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of the context key `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! # Error Handling
//!
//! Two entry points with different policies:
//!
//! - [`substitute`] is strict: an undefined placeholder or malformed syntax
//!   is an error. Used where the caller wants to know a template is broken.
//! - [`render_lenient`] recovers from any substitution failure by returning
//!   the raw template text unfilled. Generation uses this path so that a
//!   malformed or extended template never aborts a request.

use std::collections::HashMap;
use std::fmt;

/// Error type for strict template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder was referenced but not present in the context.
    UndefinedVariable {
        /// The name of the undefined placeholder.
        name: String,
        /// The position in the template where the placeholder was found.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// The position of the unmatched `{`.
        position: usize,
    },
    /// An empty placeholder name was found (e.g., `{}`).
    EmptyVariableName {
        /// The position of the empty placeholder.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined placeholder '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty placeholder name '{{}}' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Render a template string by substituting placeholders, strictly.
///
/// # Arguments
///
/// * `template` - The template string containing `{placeholder}` slots
/// * `context` - A map of placeholder names to their values
///
/// # Returns
///
/// * `Ok(String)` - The rendered string with all placeholders substituted
/// * `Err(TemplateError)` - If a placeholder is undefined or syntax is invalid
pub fn substitute(
    template: &str,
    context: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                // Check for escape sequence {{
                if let Some((_, '{')) = chars.peek() {
                    chars.next(); // consume the second {
                    result.push('{');
                } else {
                    // Parse placeholder name
                    let start_pos = pos;
                    let mut name = String::new();

                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => name.push(c),
                            None => {
                                return Err(TemplateError::UnmatchedBrace {
                                    position: start_pos,
                                });
                            }
                        }
                    }

                    if name.is_empty() {
                        return Err(TemplateError::EmptyVariableName {
                            position: start_pos,
                        });
                    }

                    // Trim whitespace from the name for flexibility
                    let name = name.trim();

                    match context.get(name) {
                        Some(value) => result.push_str(value),
                        None => {
                            return Err(TemplateError::UndefinedVariable {
                                name: name.to_string(),
                                position: start_pos,
                            });
                        }
                    }
                }
            }
            '}' => {
                // Check for escape sequence }}
                if let Some((_, '}')) = chars.peek() {
                    chars.next(); // consume the second }
                    result.push('}');
                } else {
                    // Lone } is just a regular character
                    result.push('}');
                }
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

/// Render a template, falling back to the raw template text on any failure.
///
/// This is the leniency policy of the generation pipeline: a template that
/// references a placeholder absent from the context (or is syntactically
/// malformed) renders literally instead of failing the request. The fallback
/// is silent to the caller; a debug event records the cause.
pub fn render_lenient(template: &str, context: &HashMap<String, String>) -> String {
    match substitute(template, context) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(%err, "template rendered literally");
            template.to_string()
        }
    }
}

/// Helper to create a context map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
