//! Build command report.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a completed build.
#[derive(Debug)]
pub struct BuildReport {
    /// Module path the driver imported components from.
    pub module: String,

    /// Number of component functions rendered.
    pub component_count: usize,

    /// Written page paths, in discovery order.
    pub pages: Vec<String>,

    /// Output directory, as given on the command line.
    pub output_dir: PathBuf,

    /// Work directory retained by --debug, if any.
    pub kept_work_dir: Option<PathBuf>,
}

impl Report for BuildReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Module", &self.module);
        out.section(&format!("Pages ({})", self.component_count));
        for page in &self.pages {
            out.added_item(page);
        }
        out.newline();
        out.key_value("Output", &self.output_dir.display().to_string());
        if let Some(dir) = &self.kept_work_dir {
            out.key_value("Driver script kept in", &dir.display().to_string());
        }
    }
}
