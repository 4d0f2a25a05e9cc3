//! Static extraction of component functions from generated Go sources.
//!
//! A component function is a top-level, exported, zero-argument function
//! whose result type is exactly `templ.Component`. The match is strict by
//! return type; exported zero-argument helpers returning anything else are
//! ignored.

use std::path::{Path, PathBuf};

use miette::NamedSource;
use statempl_core::slash_path;
use tree_sitter::{Node, Parser};

use crate::error::{Error, Result};

/// Result type that marks a function as renderable.
const COMPONENT_TYPE: &str = "templ.Component";

/// One discovered component function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFn {
    /// Exported Go function name.
    pub name: String,
    /// Containing directory, relative to the project root. This is the
    /// package directory the driver imports.
    pub dir: PathBuf,
    /// The generated file the function was found in.
    pub source: PathBuf,
}

impl ComponentFn {
    /// Label used by the driver when reporting render failures,
    /// e.g. `web/pages/a.Page`.
    pub fn label(&self) -> String {
        if self.dir.as_os_str().is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", slash_path(&self.dir), self.name)
        }
    }
}

/// Extract component functions from `files`, in the order given.
///
/// Output order is file order, then in-file declaration order; the driver
/// generator relies on it for reproducible output. A parse error in any
/// file aborts the whole extraction.
pub fn find_component_fns(files: &[PathBuf], project_root: &Path) -> Result<Vec<ComponentFn>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| {
            Box::new(Error::Grammar {
                message: e.to_string(),
            })
        })?;

    let mut found = Vec::new();
    for file in files {
        let src = std::fs::read_to_string(file).map_err(|source| {
            Box::new(Error::Read {
                path: file.clone(),
                source,
            })
        })?;
        scan_file(&mut parser, file, project_root, &src, &mut found)?;
    }
    Ok(found)
}

fn scan_file(
    parser: &mut Parser,
    file: &Path,
    project_root: &Path,
    src: &str,
    found: &mut Vec<ComponentFn>,
) -> Result<()> {
    let parse_error = |span: (usize, usize)| {
        Box::new(Error::Parse {
            src: NamedSource::new(file.display().to_string(), src.to_string()),
            span: span.into(),
            path: file.to_path_buf(),
        })
    };

    let tree = parser.parse(src, None).ok_or_else(|| parse_error((0, 0)))?;
    let root = tree.root_node();
    if root.has_error() {
        let span = first_error_node(root)
            .map(|n| (n.start_byte(), n.end_byte() - n.start_byte()))
            .unwrap_or((0, 0));
        return Err(parse_error(span));
    }

    let parent = file.parent().unwrap_or(Path::new(""));
    let dir = parent.strip_prefix(project_root).unwrap_or(parent);

    for i in 0..root.named_child_count() {
        let decl = match root.named_child(i) {
            Some(node) if node.kind() == "function_declaration" => node,
            _ => continue,
        };
        if let Some(name) = component_fn_name(decl, src) {
            found.push(ComponentFn {
                name,
                dir: dir.to_path_buf(),
                source: file.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Return the function name when the declaration qualifies as a component.
fn component_fn_name(decl: Node<'_>, src: &str) -> Option<String> {
    let name = decl
        .child_by_field_name("name")?
        .utf8_text(src.as_bytes())
        .ok()?;
    if !name.chars().next().is_some_and(char::is_uppercase) {
        return None;
    }
    // Generic functions are not callable without instantiation
    if decl.child_by_field_name("type_parameters").is_some() {
        return None;
    }
    let params = decl.child_by_field_name("parameters")?;
    if params.named_child_count() > 0 {
        return None;
    }
    let result = decl.child_by_field_name("result")?;
    let result_type = result.utf8_text(src.as_bytes()).ok()?;
    if result_type != COMPONENT_TYPE {
        return None;
    }
    Some(name.to_string())
}

/// Depth-first search for the first ERROR or missing node.
fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error_node)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const PAGE_GO: &str = r#"// Code generated by templ - DO NOT EDIT.

package pages

import "github.com/a-h/templ"

func Home() templ.Component {
	return templ.NopComponent
}

func About() templ.Component {
	return templ.NopComponent
}

func header() templ.Component {
	return templ.NopComponent
}

func Post(slug string) templ.Component {
	return templ.NopComponent
}

func Title() string {
	return "title"
}
"#;

    fn write_source(root: &Path, rel: &str, content: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_extracts_exported_zero_arg_component_fns() {
        let temp = TempDir::new().unwrap();
        let file = write_source(temp.path(), "web/pages/a/page_templ.go", PAGE_GO);

        let fns = find_component_fns(&[file.clone()], temp.path()).unwrap();

        let names: Vec<_> = fns.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "About"]);
        assert_eq!(fns[0].dir, Path::new("web/pages/a"));
        assert_eq!(fns[0].source, file);
    }

    #[test]
    fn test_strict_return_type_match() {
        let temp = TempDir::new().unwrap();
        let file = write_source(
            temp.path(),
            "pages/x_templ.go",
            r#"package pages

import "github.com/a-h/templ"

func Multi() (templ.Component, error) {
	return templ.NopComponent, nil
}

func Pointer() *templ.Component {
	return nil
}

func NoResult() {
}

func Page() templ.Component {
	return templ.NopComponent
}
"#,
        );

        let fns = find_component_fns(&[file], temp.path()).unwrap();

        let names: Vec<_> = fns.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Page"]);
    }

    #[test]
    fn test_preserves_file_then_declaration_order() {
        let temp = TempDir::new().unwrap();
        let second = write_source(
            temp.path(),
            "b/second_templ.go",
            "package b\n\nimport \"github.com/a-h/templ\"\n\nfunc Two() templ.Component {\n\treturn templ.NopComponent\n}\n",
        );
        let first = write_source(
            temp.path(),
            "a/first_templ.go",
            "package a\n\nimport \"github.com/a-h/templ\"\n\nfunc Zed() templ.Component {\n\treturn templ.NopComponent\n}\n\nfunc Alpha() templ.Component {\n\treturn templ.NopComponent\n}\n",
        );

        // caller's order wins, not path order
        let fns = find_component_fns(&[second, first], temp.path()).unwrap();

        let labels: Vec<_> = fns.iter().map(ComponentFn::label).collect();
        assert_eq!(labels, vec!["b.Two", "a.Zed", "a.Alpha"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let temp = TempDir::new().unwrap();
        let file = write_source(temp.path(), "pages/page_templ.go", PAGE_GO);
        let files = vec![file];

        assert_eq!(
            find_component_fns(&files, temp.path()).unwrap(),
            find_component_fns(&files, temp.path()).unwrap()
        );
    }

    #[test]
    fn test_parse_error_aborts_whole_extraction() {
        let temp = TempDir::new().unwrap();
        let good = write_source(temp.path(), "a/good_templ.go", PAGE_GO);
        let bad = write_source(temp.path(), "b/bad_templ.go", "package b\n\nfunc Broken(\n");

        let err = find_component_fns(&[good, bad], temp.path()).unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unreadable_file_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("gone_templ.go");

        let err = find_component_fns(&[missing], temp.path()).unwrap_err();

        assert!(matches!(*err, Error::Read { .. }));
    }

    #[test]
    fn test_empty_file_list_yields_no_components() {
        let temp = TempDir::new().unwrap();

        let fns = find_component_fns(&[], temp.path()).unwrap();

        assert!(fns.is_empty());
    }

    #[test]
    fn test_label_for_root_level_component() {
        let component = ComponentFn {
            name: "Index".to_string(),
            dir: PathBuf::new(),
            source: PathBuf::from("index_templ.go"),
        };

        assert_eq!(component.label(), "Index");
    }
}
