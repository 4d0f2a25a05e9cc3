//! Renders the Go driver program from discovery results.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use miette::Diagnostic;
use statempl_core::slash_path;
use statempl_finder::{ComponentFn, ModulePath, import_path};
use thiserror::Error;

use crate::builder::CodeBuilder;

/// File name of the synthesized driver inside the work directory.
pub const SCRIPT_FILE_NAME: &str = "statempl_generate.go";

pub type Result<T> = std::result::Result<T, self::Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no component functions to generate a driver for")]
    #[diagnostic(code(statempl::no_components))]
    NoComponents,

    #[error("no import path covers component '{name}' in '{dir}'")]
    #[diagnostic(
        code(statempl::missing_import),
        help("the import set and the component list must come from the same discovery run")
    )]
    MissingImport { name: String, dir: PathBuf },
}

/// How rendered pages are laid out in the output tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenerationMode {
    /// `<dir>/<Name>.html`, mirroring the source location.
    #[default]
    Standard,
    /// `<dir>/<name>/index.html`, for servers that prefer pretty URLs.
    Index,
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "index" => Ok(Self::Index),
            other => Err(format!(
                "unknown mode '{other}', expected 'standard' or 'index'"
            )),
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Index => f.write_str("index"),
        }
    }
}

/// Output file for one component: the containing directory with the input
/// root replaced by the output root, plus a filename derived from the
/// function name.
pub fn output_path(
    component: &ComponentFn,
    input_dir: &Path,
    output_dir: &Path,
    mode: GenerationMode,
) -> PathBuf {
    let relative = component
        .dir
        .strip_prefix(input_dir)
        .unwrap_or(&component.dir);
    let base = output_dir.join(relative);
    match mode {
        GenerationMode::Standard => base.join(format!("{}.html", component.name)),
        GenerationMode::Index => base.join(component.name.to_lowercase()).join("index.html"),
    }
}

/// The complete driver program text, rendered from discovery results.
///
/// Rendering is a pure function of its inputs; two runs over unchanged
/// discovery output produce byte-identical text.
pub struct DriverScript<'a> {
    module: &'a ModulePath,
    imports: &'a [String],
    components: &'a [ComponentFn],
    input_dir: &'a Path,
    output_dir: &'a Path,
    mode: GenerationMode,
}

impl<'a> DriverScript<'a> {
    pub fn new(
        module: &'a ModulePath,
        imports: &'a [String],
        components: &'a [ComponentFn],
        input_dir: &'a Path,
        output_dir: &'a Path,
        mode: GenerationMode,
    ) -> Self {
        Self {
            module,
            imports,
            components,
            input_dir,
            output_dir,
            mode,
        }
    }

    /// Render the complete, compilable `package main` source.
    ///
    /// Each import is aliased `pkg0..pkgN` in sorted import order, so
    /// same-named Go packages in different directories cannot collide.
    /// The generated program fails fast: the first render or write error
    /// aborts it with the offending component named.
    pub fn render(&self) -> Result<String> {
        if self.components.is_empty() {
            return Err(Error::NoComponents);
        }

        let aliases: HashMap<&str, String> = self
            .imports
            .iter()
            .enumerate()
            .map(|(i, import)| (import.as_str(), format!("pkg{i}")))
            .collect();

        let mut calls = Vec::with_capacity(self.components.len());
        for component in self.components {
            let import = import_path(self.module, component);
            let alias = aliases.get(import.as_str()).ok_or_else(|| Error::MissingImport {
                name: component.name.clone(),
                dir: component.dir.clone(),
            })?;
            let page = slash_path(&output_path(
                component,
                self.input_dir,
                self.output_dir,
                self.mode,
            ));
            calls.push(format!(
                "writePage({}, {}, {}.{}().Render)",
                quoted(&component.label()),
                quoted(&page),
                alias,
                component.name
            ));
        }

        let code = CodeBuilder::new()
            .line("// Code generated by statempl. DO NOT EDIT.")
            .line("package main")
            .blank()
            .line("import (")
            .indent()
            .line("\"context\"")
            .line("\"io\"")
            .line("\"log\"")
            .line("\"os\"")
            .line("\"path/filepath\"")
            .blank()
            .each(self.imports, |b, import| {
                b.line(&format!("{} {}", aliases[import.as_str()], quoted(import)))
            })
            .dedent()
            .line(")")
            .blank()
            .line("func main() {")
            .indent()
            .each(&calls, |b, call| b.line(call))
            .dedent()
            .line("}")
            .blank()
            .line("func writePage(name string, path string, render func(context.Context, io.Writer) error) {")
            .indent()
            .line("if err := os.MkdirAll(filepath.Dir(path), 0o755); err != nil {")
            .indent()
            .line("log.Fatalf(\"statempl: creating directory for %s: %v\", name, err)")
            .dedent()
            .line("}")
            .line("out, err := os.Create(path)")
            .line("if err != nil {")
            .indent()
            .line("log.Fatalf(\"statempl: creating %s: %v\", path, err)")
            .dedent()
            .line("}")
            .line("defer out.Close()")
            .line("if err := render(context.Background(), out); err != nil {")
            .indent()
            .line("log.Fatalf(\"statempl: rendering %s: %v\", name, err)")
            .dedent()
            .line("}")
            .dedent()
            .line("}")
            .build();
        Ok(code)
    }
}

/// Quote a string as a Go string literal.
fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted() {
        assert_eq!(quoted("dist/a/Page.html"), "\"dist/a/Page.html\"");
        assert_eq!(quoted("a\"b"), "\"a\\\"b\"");
        assert_eq!(quoted("a\\b"), "\"a\\\\b\"");
    }

    #[test]
    fn test_mode_round_trip() {
        assert_eq!("standard".parse::<GenerationMode>().unwrap(), GenerationMode::Standard);
        assert_eq!("index".parse::<GenerationMode>().unwrap(), GenerationMode::Index);
        assert!("inline".parse::<GenerationMode>().is_err());
        assert_eq!(GenerationMode::Standard.to_string(), "standard");
        assert_eq!(GenerationMode::Index.to_string(), "index");
    }

    #[test]
    fn test_output_path_standard() {
        let component = ComponentFn {
            name: "Page".to_string(),
            dir: PathBuf::from("web/pages/a"),
            source: PathBuf::from("web/pages/a/page_templ.go"),
        };

        let path = output_path(
            &component,
            Path::new("web/pages"),
            Path::new("dist"),
            GenerationMode::Standard,
        );

        assert_eq!(path, PathBuf::from("dist/a/Page.html"));
    }

    #[test]
    fn test_output_path_index_mode() {
        let component = ComponentFn {
            name: "Page".to_string(),
            dir: PathBuf::from("web/pages/a"),
            source: PathBuf::from("web/pages/a/page_templ.go"),
        };

        let path = output_path(
            &component,
            Path::new("web/pages"),
            Path::new("dist"),
            GenerationMode::Index,
        );

        assert_eq!(path, PathBuf::from("dist/a/page/index.html"));
    }

    #[test]
    fn test_output_path_at_input_root() {
        let component = ComponentFn {
            name: "Home".to_string(),
            dir: PathBuf::from("web/pages"),
            source: PathBuf::from("web/pages/home_templ.go"),
        };

        let path = output_path(
            &component,
            Path::new("web/pages"),
            Path::new("dist"),
            GenerationMode::Standard,
        );

        assert_eq!(path, PathBuf::from("dist/Home.html"));
    }
}
