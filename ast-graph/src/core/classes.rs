//! Class boundary detection over the non-declaration fragments.
//!
//! Boundaries come from two textual markers: a cut before every occurrence of
//! the class keyword and a cut after every `}}`. Chunks that do not contain the
//! class keyword are modifier text and get prefixed onto the next chunk. Nested
//! classes are not tracked; each keyword occurrence opens a new chunk.

use crate::core::{CLASS_END_MARKER, CLASS_KEYWORD, body::parse_body};
use crate::errors::{StructuralError, excerpt};
use crate::model::declarations::ClassDeclaration;
use tracing::debug;

/// Internal cut marker; a control character that never occurs in source tokens.
const CHUNK_CUT: char = '\u{1F}';

/// Extract one [`ClassDeclaration`] per detected class chunk, in source order.
pub fn extract_classes(
    others: &[String],
    max_nesting: usize,
) -> Result<Vec<ClassDeclaration>, StructuralError> {
    let chunks = split_class_chunks(others);
    let classes = attach_modifiers(chunks)?;
    debug!(count = classes.len(), "classes: chunks attached");
    classes
        .iter()
        .map(|c| split_class(c, max_nesting))
        .collect()
}

/// Rejoin fragments without separators and cut at class boundaries.
pub fn split_class_chunks(others: &[String]) -> Vec<String> {
    let joined = others.concat();
    let marked = joined
        .replace(CLASS_KEYWORD, &format!("{CHUNK_CUT}{CLASS_KEYWORD}"))
        .replace(CLASS_END_MARKER, &format!("{CLASS_END_MARKER}{CHUNK_CUT}"));
    marked.split(CHUNK_CUT).map(str::to_string).collect()
}

/// Prefix every chunk lacking the class keyword onto the following chunk and
/// keep only class-bearing chunks. Consecutive modifier chunks accumulate.
///
/// Whitespace-only leftovers after the last class are dropped; anything else
/// left over is an [`StructuralError::OrphanModifiers`].
pub fn attach_modifiers(chunks: Vec<String>) -> Result<Vec<String>, StructuralError> {
    let mut pending = String::new();
    let mut classes = Vec::new();
    for chunk in chunks {
        pending.push_str(&chunk);
        if chunk.contains(CLASS_KEYWORD) {
            classes.push(std::mem::take(&mut pending));
        }
    }
    if !pending.trim().is_empty() {
        return Err(StructuralError::OrphanModifiers {
            fragment: excerpt(&pending),
        });
    }
    Ok(classes)
}

/// Split a class chunk into modifiers, name and body.
///
/// Left of the keyword: modifier tokens. Right of it, leading whitespace
/// removed: the name runs up to the first `{`, the body from there to the end.
pub fn split_class(chunk: &str, max_nesting: usize) -> Result<ClassDeclaration, StructuralError> {
    let (modifiers, name_and_body) =
        chunk
            .split_once(CLASS_KEYWORD)
            .ok_or_else(|| StructuralError::MissingKeyword {
                keyword: CLASS_KEYWORD,
                fragment: excerpt(chunk),
            })?;

    let name_and_body = name_and_body.trim_start();
    let open = name_and_body
        .find('{')
        .ok_or_else(|| StructuralError::MissingDelimiter {
            construct: "class",
            delimiter: '{',
            fragment: excerpt(chunk),
        })?;
    let (name, body) = name_and_body.split_at(open);

    Ok(ClassDeclaration {
        name: name.to_string(),
        modifiers: split_modifiers(modifiers),
        body: parse_body(body, max_nesting)?,
    })
}

/// Whitespace-separated modifier tokens; no modifiers yields a single empty token.
fn split_modifiers(text: &str) -> Vec<String> {
    let tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        vec![String::new()]
    } else {
        tokens
    }
}
