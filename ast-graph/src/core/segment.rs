//! Statement segmentation and fragment classification.
//!
//! The source is treated as one continuous stream: line breaks are dropped,
//! then the text is split on the statement terminator. Each fragment is
//! classified by plain keyword containment, in this precedence:
//! package → import → static import → other.
//!
//! Classification is a substring test, not a parse. A fragment containing both
//! `import` and `static` anywhere (e.g. `import com.staticutil.Helper`) is a
//! static import.

use crate::core::{IMPORT_KEYWORD, PACKAGE_KEYWORD, STATEMENT_TERMINATOR, STATIC_KEYWORD};
use crate::model::declarations::{
    ImportDeclaration, PackageDeclaration, StaticImportDeclaration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Package,
    Import,
    StaticImport,
    Other,
}

/// A statement-level substring of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
}

/// Classified fragments grouped by category, each group in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    pub packages: Vec<PackageDeclaration>,
    pub imports: Vec<ImportDeclaration>,
    pub static_imports: Vec<StaticImportDeclaration>,
    /// Fragments handed to the class extractor.
    pub others: Vec<String>,
}

/// Drop line breaks and split on the terminator. Trailing empty fragments
/// are discarded.
pub fn split_statements(source: &str) -> Vec<String> {
    let stream: String = source.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
    let mut parts: Vec<String> = stream
        .split(STATEMENT_TERMINATOR)
        .map(str::to_string)
        .collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

pub fn classify(fragment: &str) -> FragmentKind {
    if fragment.contains(PACKAGE_KEYWORD) {
        FragmentKind::Package
    } else if fragment.contains(IMPORT_KEYWORD) && !fragment.contains(STATIC_KEYWORD) {
        FragmentKind::Import
    } else if fragment.contains(IMPORT_KEYWORD) {
        FragmentKind::StaticImport
    } else {
        FragmentKind::Other
    }
}

/// Split and classify the full text of one source file.
pub fn segment(source: &str) -> Vec<Fragment> {
    split_statements(source)
        .into_iter()
        .map(|text| Fragment {
            kind: classify(&text),
            text,
        })
        .collect()
}

/// Turn classified fragments into declarations; `Other` fragments are kept raw.
pub fn partition(fragments: Vec<Fragment>) -> Segments {
    let mut out = Segments::default();
    for f in fragments {
        match f.kind {
            FragmentKind::Package => out.packages.push(PackageDeclaration {
                name: strip_keyword(&f.text, PACKAGE_KEYWORD),
            }),
            FragmentKind::Import => out.imports.push(ImportDeclaration {
                name: strip_keyword(&f.text, IMPORT_KEYWORD),
            }),
            FragmentKind::StaticImport => out.static_imports.push(StaticImportDeclaration {
                name: static_import_name(&f.text),
            }),
            FragmentKind::Other => out.others.push(f.text),
        }
    }
    out
}

fn strip_keyword(fragment: &str, keyword: &str) -> String {
    fragment.replace(keyword, "").trim().to_string()
}

/// Remove `import` and the standalone `static` qualifier token. An identifier
/// that merely contains `static` is left intact.
fn static_import_name(fragment: &str) -> String {
    fragment
        .replace(IMPORT_KEYWORD, "")
        .split_whitespace()
        .filter(|tok| *tok != STATIC_KEYWORD)
        .collect::<Vec<_>>()
        .join(" ")
}
