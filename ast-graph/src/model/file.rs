//! Root entity of one parsed source file.

use crate::model::{
    declarations::{
        ClassDeclaration, Declaration, ImportDeclaration, PackageDeclaration,
        StaticImportDeclaration,
    },
    graph::{GraphEdgeLabel, GraphNode, NodeKind, NodeTree},
};
use serde::{Deserialize, Serialize};

pub const FILE_LABEL: &str = "File";
pub const PACKAGE_CATEGORY: &str = "Package";
pub const IMPORT_CATEGORY: &str = "Import";
pub const STATIC_IMPORT_CATEGORY: &str = "Import Static";
pub const CLASSES_CATEGORY: &str = "Classes";

/// The "File" entity: one list per declaration category, in source order.
/// Built once by [`crate::core::parse_source`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTree {
    /// Source file name, e.g. `Foo.java`.
    pub name: String,
    pub packages: Vec<PackageDeclaration>,
    pub imports: Vec<ImportDeclaration>,
    pub static_imports: Vec<StaticImportDeclaration>,
    pub classes: Vec<ClassDeclaration>,
}

impl SourceTree {
    /// Render the whole file: `File` → four category nodes → declarations.
    pub fn render(&self) -> NodeTree {
        let categories = [
            category(
                PACKAGE_CATEGORY,
                self.packages.iter().map(Declaration::Package),
            ),
            category(IMPORT_CATEGORY, self.imports.iter().map(Declaration::Import)),
            category(
                STATIC_IMPORT_CATEGORY,
                self.static_imports.iter().map(Declaration::StaticImport),
            ),
            category(CLASSES_CATEGORY, self.classes.iter().map(Declaration::Class)),
        ];

        categories.into_iter().fold(
            NodeTree::leaf(GraphNode::new(NodeKind::File, FILE_LABEL)),
            |file, cat| file.with_child(GraphEdgeLabel::Category, cat),
        )
    }
}

fn category<'a>(label: &str, decls: impl Iterator<Item = Declaration<'a>>) -> NodeTree {
    decls.fold(
        NodeTree::leaf(GraphNode::new(NodeKind::Category, label)),
        |cat, d| cat.with_child(GraphEdgeLabel::Declares, d.render()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::declarations::Body;

    #[test]
    fn render_always_has_four_categories() {
        let tree = SourceTree {
            name: "Empty.java".to_string(),
            packages: vec![],
            imports: vec![],
            static_imports: vec![],
            classes: vec![],
        }
        .render();

        assert_eq!(tree.node.label, FILE_LABEL);
        let labels: Vec<_> = tree
            .children_by(GraphEdgeLabel::Category)
            .map(|c| c.node.label.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                PACKAGE_CATEGORY,
                IMPORT_CATEGORY,
                STATIC_IMPORT_CATEGORY,
                CLASSES_CATEGORY
            ]
        );
        assert!(tree.children.iter().all(|(_, c)| c.children.is_empty()));
    }

    #[test]
    fn declarations_hang_under_their_category() {
        let tree = SourceTree {
            name: "A.java".to_string(),
            packages: vec![PackageDeclaration {
                name: "a.b".to_string(),
            }],
            imports: vec![
                ImportDeclaration {
                    name: "c.d".to_string(),
                },
                ImportDeclaration {
                    name: "e.f".to_string(),
                },
            ],
            static_imports: vec![],
            classes: vec![ClassDeclaration {
                name: "A ".to_string(),
                modifiers: vec![String::new()],
                body: Body {
                    text: "{ }".to_string(),
                    conditionals: vec![],
                },
            }],
        }
        .render();

        let imports = tree.child_labeled(IMPORT_CATEGORY).unwrap();
        let names: Vec<_> = imports
            .children_by(GraphEdgeLabel::Declares)
            .map(|c| c.node.label.as_str())
            .collect();
        assert_eq!(names, vec!["c.d", "e.f"]);

        let classes = tree.child_labeled(CLASSES_CATEGORY).unwrap();
        assert_eq!(classes.children[0].1.node.label, "A");
    }
}
