use crate::error::AlmanacError;
use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use std::path::Path;

/// A Jinja template rendered with minijinja.
///
/// HTML templates auto-escape every value; mark trusted values with `|safe`.
/// Text templates insert values as-is. A trailing newline in the source is kept.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    html: bool,
}

impl Template {
    pub fn html(source: impl Into<String>) -> Self {
        Template {
            source: source.into(),
            html: true,
        }
    }

    pub fn text(source: impl Into<String>) -> Self {
        Template {
            source: source.into(),
            html: false,
        }
    }

    /// Load an HTML template from disk.
    pub fn from_file(path: &Path) -> Result<Self, AlmanacError> {
        let source = std::fs::read_to_string(path).map_err(|e| AlmanacError::TemplateLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Template::html(source))
    }

    pub fn render<S: Serialize>(&self, context: S) -> Result<String, AlmanacError> {
        let html = self.html;
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(move |_name| {
            if html {
                AutoEscape::Html
            } else {
                AutoEscape::None
            }
        });

        let template = env.template_from_str(&self.source)?;
        Ok(template.render(context)?)
    }
}
