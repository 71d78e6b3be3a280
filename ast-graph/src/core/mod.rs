//! Structural segmentation core: text → fragments → declarations → tree.
//!
//! Everything here is a pure function over text. Discovery of input files
//! lives in [`fs_scan`]; batch orchestration lives in [`crate::run`].

pub mod body;
pub mod classes;
pub mod fs_scan;
pub mod segment;
pub mod summary;

use crate::errors::StructuralError;
use crate::model::file::SourceTree;

pub const STATEMENT_TERMINATOR: char = ';';
pub const PACKAGE_KEYWORD: &str = "package";
pub const IMPORT_KEYWORD: &str = "import";
pub const STATIC_KEYWORD: &str = "static";
pub const CLASS_KEYWORD: &str = "class";
pub const CONDITIONAL_KEYWORD: &str = "if";
/// Approximate end-of-class marker.
pub const CLASS_END_MARKER: &str = "}}";
/// Deepest conditional nesting accepted by default.
pub const DEFAULT_MAX_NESTING: usize = 256;

/// Parse the full text of one source file into its [`SourceTree`].
pub fn parse_source(name: &str, text: &str) -> Result<SourceTree, StructuralError> {
    parse_source_with_limit(name, text, DEFAULT_MAX_NESTING)
}

/// [`parse_source`] with an explicit cap on conditional nesting.
#[tracing::instrument(level = "debug", skip(text), fields(bytes = text.len()))]
pub fn parse_source_with_limit(
    name: &str,
    text: &str,
    max_nesting: usize,
) -> Result<SourceTree, StructuralError> {
    let segments = segment::partition(segment::segment(text));
    let classes = classes::extract_classes(&segments.others, max_nesting)?;

    Ok(SourceTree {
        name: name.to_string(),
        packages: segments.packages,
        imports: segments.imports,
        static_imports: segments.static_imports,
        classes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        file::{CLASSES_CATEGORY, PACKAGE_CATEGORY},
        graph::{GraphEdgeLabel, NodeKind},
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn package_import_and_bare_class() {
        let tree = parse_source("X.java", "package a.b; import c.d; class X { }").unwrap();
        assert_eq!(tree.packages.len(), 1);
        assert_eq!(tree.packages[0].name, "a.b");
        assert_eq!(tree.imports.len(), 1);
        assert_eq!(tree.imports[0].name, "c.d");
        assert!(tree.static_imports.is_empty());
        assert_eq!(tree.classes.len(), 1);
        assert_eq!(tree.classes[0].name, "X ");
        assert_eq!(tree.classes[0].modifiers, vec![String::new()]);
        assert_eq!(tree.classes[0].body.text, "{ }");
    }

    #[test]
    fn public_class_with_conditional() {
        let tree = parse_source("X.java", "public class X { if (a>0) { y=1; } }").unwrap();
        let class = &tree.classes[0];
        assert_eq!(class.name.trim(), "X");
        assert_eq!(class.modifiers, vec!["public"]);
        assert_eq!(class.body.conditionals.len(), 1);
        let c = &class.body.conditionals[0];
        assert_eq!(c.condition.text, "a>0");
        assert!(c.body.text.starts_with('{'));
    }

    #[test]
    fn file_without_classes_renders_empty_category() {
        let tree = parse_source("Pkg.java", "package only.here;\nimport a.B;\n").unwrap();
        assert!(tree.classes.is_empty());
        let rendered = tree.render();
        let classes = rendered.child_labeled(CLASSES_CATEGORY).unwrap();
        assert_eq!(classes.node.kind, NodeKind::Category);
        assert!(classes.children.is_empty());
    }

    #[test]
    fn counts_match_declarations() {
        let src = "package p.q;\n\
                   import a.A;\n\
                   import b.B;\n\
                   import c.C;\n\
                   public class Main {\n\
                   \x20   void run() {\n\
                   \x20       if (ready) {\n\
                   \x20           go();\n\
                   \x20       }\n\
                   \x20   }\n\
                   }\n";
        let tree = parse_source("Main.java", src).unwrap();
        let rendered = tree.render();
        let count = |label: &str| {
            rendered
                .child_labeled(label)
                .map(|c| c.children_by(GraphEdgeLabel::Declares).count())
                .unwrap_or_default()
        };
        assert_eq!(count(PACKAGE_CATEGORY), 1);
        assert_eq!(count("Import"), 3);
        assert_eq!(count(CLASSES_CATEGORY), 1);
        assert_eq!(tree.classes[0].body.conditionals[0].condition.text, "ready");
    }

    #[test]
    fn missing_class_brace_fails_the_file() {
        let err = parse_source("Bad.java", "public class Broken").unwrap_err();
        assert!(matches!(err, StructuralError::MissingDelimiter { .. }));
    }

    #[test]
    fn nesting_limit_is_configurable() {
        let src = "class N { if (a) { if (b) { if (c) { } } } }";
        assert!(parse_source("N.java", src).is_ok());
        let err = parse_source_with_limit("N.java", src, 2).unwrap_err();
        assert!(matches!(err, StructuralError::NestingTooDeep { limit: 2, .. }));
    }
}
