//! Body parser: discovers `if`-like constructs inside a body and parses each
//! one into condition + nested body, recursively.
//!
//! [`parse_conditional`] keeps the plain delimiter rules: the condition is the
//! text between the first `(` and the first `)` after it (nested parentheses
//! truncate it), and the body runs from the next `{` to the end of the span.
//! [`parse_body`] is what bounds that span, by matching braces from the
//! conditional's first `{`.

use crate::core::CONDITIONAL_KEYWORD;
use crate::errors::{StructuralError, excerpt};
use crate::model::declarations::{Body, Conditional, Expression};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static CONDITIONAL_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{CONDITIONAL_KEYWORD}\s*\(")).expect("conditional pattern is valid")
});

/// Parse `text` as a body, collecting top-level conditionals in source order.
///
/// Keyword hits without a `(` … `)` … `{` sequence after them are skipped.
/// Conditionals nested more than `max_nesting` levels deep fail the whole
/// body with [`StructuralError::NestingTooDeep`].
pub fn parse_body(text: &str, max_nesting: usize) -> Result<Body, StructuralError> {
    body_at(text, 0, max_nesting)
}

/// Parse a span that starts at the conditional keyword.
pub fn parse_conditional(span: &str, max_nesting: usize) -> Result<Conditional, StructuralError> {
    conditional_at(span, 1, max_nesting)
}

/// `depth` is the number of conditionals enclosing `text`.
fn body_at(text: &str, depth: usize, max_nesting: usize) -> Result<Body, StructuralError> {
    let mut conditionals = Vec::new();
    let mut cursor = 0;

    while let Some(m) = CONDITIONAL_START.find_at(text, cursor) {
        let start = m.start();
        let parsed = conditional_span_end(text, start)
            .map(|end| (end, conditional_at(&text[start..end], depth + 1, max_nesting)));

        match parsed {
            Some((end, Ok(c))) => {
                conditionals.push(c);
                cursor = end;
            }
            Some((_, Err(err @ StructuralError::NestingTooDeep { .. }))) => return Err(err),
            Some((_, Err(err))) => {
                debug!(error = %err, "body: conditional skipped");
                cursor = m.end();
            }
            None => {
                debug!(at = start, "body: conditional without block skipped");
                cursor = m.end();
            }
        }
    }

    Ok(Body {
        text: text.to_string(),
        conditionals,
    })
}

/// `depth` is the nesting level of this conditional, 1 for one sitting
/// directly in a class body.
fn conditional_at(
    span: &str,
    depth: usize,
    max_nesting: usize,
) -> Result<Conditional, StructuralError> {
    if depth > max_nesting {
        return Err(StructuralError::NestingTooDeep {
            limit: max_nesting,
            fragment: excerpt(span),
        });
    }

    let missing = |delimiter| StructuralError::MissingDelimiter {
        construct: "conditional",
        delimiter,
        fragment: excerpt(span),
    };

    let open = span.find('(').ok_or_else(|| missing('('))?;
    let close = open + span[open..].find(')').ok_or_else(|| missing(')'))?;
    let brace = close + span[close..].find('{').ok_or_else(|| missing('{'))?;

    Ok(Conditional {
        condition: Expression {
            text: span[open + 1..close].to_string(),
        },
        body: body_at(&span[brace..], depth, max_nesting)?,
    })
}

/// End (exclusive) of the conditional starting at `start`: just past the `}`
/// matching its first block brace, or the end of `text` if it never closes.
fn conditional_span_end(text: &str, start: usize) -> Option<usize> {
    let rest = &text[start..];
    let open = rest.find('(')?;
    let close = open + rest[open..].find(')')?;
    let brace = close + rest[close..].find('{')?;

    let mut depth = 0usize;
    for (i, ch) in rest[brace..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + brace + i + 1);
                }
            }
            _ => {}
        }
    }
    Some(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_MAX_NESTING;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Body {
        parse_body(text, DEFAULT_MAX_NESTING).unwrap()
    }

    fn conditional(span: &str) -> Result<Conditional, StructuralError> {
        parse_conditional(span, DEFAULT_MAX_NESTING)
    }

    #[test]
    fn finds_conditional_in_class_body() {
        let body = parse("{ if (a>0) { y=1 } }");
        assert_eq!(body.conditionals.len(), 1);
        let c = &body.conditionals[0];
        assert_eq!(c.condition.text, "a>0");
        assert_eq!(c.body.text, "{ y=1 }");
    }

    #[test]
    fn nested_parentheses_truncate_the_condition() {
        let c = conditional("if ((a+b)>0) { z }").unwrap();
        assert_eq!(c.condition.text, "(a+b");
        assert_eq!(c.body.text, "{ z }");
    }

    #[test]
    fn conditional_body_runs_to_end_of_span() {
        let c = conditional("if(x){ a } trailing").unwrap();
        assert_eq!(c.body.text, "{ a } trailing");
    }

    #[test]
    fn nested_conditionals_are_parsed_recursively() {
        let body = parse("{ void f() { if (a) { if (b) { x } } } }");
        assert_eq!(body.conditionals.len(), 1);
        let outer = &body.conditionals[0];
        assert_eq!(outer.condition.text, "a");
        assert_eq!(outer.body.conditionals.len(), 1);
        assert_eq!(outer.body.conditionals[0].condition.text, "b");
        assert!(outer.body.conditionals[0].body.conditionals.is_empty());
    }

    #[test]
    fn sibling_conditionals_stay_siblings() {
        let body = parse("{ if (a) { x } if(b){ y } }");
        let conds: Vec<_> = body
            .conditionals
            .iter()
            .map(|c| c.condition.text.as_str())
            .collect();
        assert_eq!(conds, vec!["a", "b"]);
        assert!(body.conditionals[0].body.conditionals.is_empty());
    }

    #[test]
    fn identifiers_ending_in_if_are_ignored() {
        let body = parse("{ int d = diff(a, b) notif (c) }");
        assert!(body.conditionals.is_empty());
    }

    #[test]
    fn conditional_without_block_is_skipped() {
        let body = parse("{ if (x) return y }");
        assert!(body.conditionals.is_empty());
    }

    #[test]
    fn unclosed_block_runs_to_end_of_text() {
        let body = parse("{ if (x) { a ");
        assert_eq!(body.conditionals.len(), 1);
        assert_eq!(body.conditionals[0].body.text, "{ a ");
    }

    #[test]
    fn missing_delimiters_are_structural_errors() {
        for (span, delimiter) in [("if x", '('), ("if (x", ')'), ("if (x) y", '{')] {
            let err = conditional(span).unwrap_err();
            assert_eq!(
                err,
                StructuralError::MissingDelimiter {
                    construct: "conditional",
                    delimiter,
                    fragment: span.to_string(),
                }
            );
        }
    }

    fn nested_conditionals(depth: usize) -> String {
        let mut text = String::from("{ ");
        for _ in 0..depth {
            text.push_str("if (a) { ");
        }
        for _ in 0..depth {
            text.push_str("} ");
        }
        text.push('}');
        text
    }

    #[test]
    fn nesting_up_to_the_limit_is_parsed() {
        let body = parse_body(&nested_conditionals(3), 3).unwrap();
        let mut levels = 0;
        let mut current = &body;
        while let Some(c) = current.conditionals.first() {
            levels += 1;
            current = &c.body;
        }
        assert_eq!(levels, 3);
    }

    #[test]
    fn nesting_past_the_limit_fails_the_body() {
        let err = parse_body(&nested_conditionals(4), 3).unwrap_err();
        assert!(matches!(err, StructuralError::NestingTooDeep { limit: 3, .. }));
    }

    #[test]
    fn very_deep_nesting_is_an_error_not_a_crash() {
        let err = parse_body(&nested_conditionals(5_000), DEFAULT_MAX_NESTING).unwrap_err();
        assert!(matches!(
            err,
            StructuralError::NestingTooDeep { limit: DEFAULT_MAX_NESTING, .. }
        ));
    }
}
