//! Template engine
//!
//! This module provides page rendering using Tera.
//! Features:
//! - Templates embedded in the binary, or loaded from a directory
//! - Standard template variables shared by every page
//! - Fallback to an error template or a built-in page when rendering fails

use anyhow::{Context, Result};
use chrono::Datelike;
use rust_embed::RustEmbed;
use serde::Serialize;
use std::error::Error as StdError;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context as TeraContext, Tera};

use crate::config::ThemeConfig;

mod error;

pub use error::ThemeError;

/// Templates compiled into the binary
#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct EmbeddedTemplates;

/// Where the loaded templates came from
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    Embedded,
    Directory(PathBuf),
}

/// Template engine for rendering console pages
pub struct TemplateEngine {
    tera: Tera,
    source: TemplateSource,
}

impl TemplateEngine {
    /// Load templates according to configuration.
    ///
    /// A configured directory replaces the embedded set entirely.
    pub fn load(config: &ThemeConfig) -> Result<Self> {
        match &config.path {
            Some(path) => Self::from_dir(path),
            None => Self::embedded(),
        }
    }

    /// Create an engine from the templates compiled into the binary
    pub fn embedded() -> Result<Self> {
        let mut templates = Vec::new();
        for name in EmbeddedTemplates::iter() {
            let file = EmbeddedTemplates::get(&name)
                .ok_or_else(|| ThemeError::NotFound(name.to_string()))?;
            let content = String::from_utf8(file.data.into_owned())
                .map_err(|e| ThemeError::TemplateError(format!("{} is not UTF-8: {}", name, e)))?;
            templates.push((name.to_string(), content));
        }

        Ok(Self {
            tera: build_tera(templates)?,
            source: TemplateSource::Embedded,
        })
    }

    /// Create an engine from every `.html` file under `path`
    pub fn from_dir(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(ThemeError::NotFound(path.display().to_string()).into());
        }

        let mut templates = Vec::new();
        collect_templates_from_dir(path, path, &mut templates)?;

        Ok(Self {
            tera: build_tera(templates)?,
            source: TemplateSource::Directory(path.to_path_buf()),
        })
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Names of all loaded templates, sorted
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tera.get_template_names().collect();
        names.sort_unstable();
        names
    }

    /// Render a template with context
    pub fn render(&self, template: &str, context: &TeraContext) -> Result<String> {
        self.tera.render(template, context).map_err(|e| {
            let mut error_msg = format!("Failed to render '{}': {}", template, e);
            let mut source = e.source();
            while let Some(s) = source {
                error_msg.push_str(&format!("\n  Caused by: {}", s));
                source = s.source();
            }
            ThemeError::TemplateError(error_msg).into()
        })
    }

    /// Render a page with the standard variables added.
    ///
    /// Never fails: see [`TemplateEngine::render_with_fallback`].
    pub fn render_page(
        &self,
        template: &str,
        context: &TeraContext,
        standard_vars: &StandardTemplateVars,
    ) -> String {
        let mut full_context = context.clone();
        full_context.insert("app_name", &standard_vars.app_name);
        full_context.insert("request_path", &standard_vars.request_path);
        full_context.insert("year", &standard_vars.year);

        self.render_with_fallback(template, &full_context)
    }

    /// Render a template with fallback to `error.html` or simple HTML
    pub fn render_with_fallback(&self, template: &str, context: &TeraContext) -> String {
        match self.render(template, context) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    "Failed to render template '{}': {}, trying error template",
                    template,
                    e
                );

                let mut error_context = context.clone();
                error_context.insert("error_message", &e.to_string());
                error_context.insert("requested_template", template);

                match self.render("error.html", &error_context) {
                    Ok(html) => html,
                    Err(error_template_err) => {
                        tracing::warn!(
                            "Failed to render error template: {}, returning simple HTML error page",
                            error_template_err
                        );
                        Self::simple_error_page(template, &e.to_string())
                    }
                }
            }
        }
    }

    /// Last-resort page when neither the template nor `error.html` renders
    fn simple_error_page(template: &str, error: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Template Error</title>
</head>
<body>
    <h1>Template Error</h1>
    <p>Failed to render template: <code>{}</code></p>
    <pre>{}</pre>
</body>
</html>"#,
            tera::escape_html(template),
            tera::escape_html(error)
        )
    }
}

/// Base templates go first so children can resolve their parent.
fn build_tera(mut templates: Vec<(String, String)>) -> Result<Tera> {
    templates.sort_by(|a, b| {
        let a_is_base = a.0 == "base.html" || a.0.ends_with("/base.html");
        let b_is_base = b.0 == "base.html" || b.0.ends_with("/base.html");
        b_is_base.cmp(&a_is_base).then_with(|| a.0.cmp(&b.0))
    });

    let mut tera = Tera::default();
    for (name, content) in templates {
        tera.add_raw_template(&name, &content).map_err(|e| {
            ThemeError::TemplateError(format!("Failed to add template {}: {}", name, e))
        })?;
    }

    tera.build_inheritance_chains().map_err(|e| {
        ThemeError::TemplateError(format!("Failed to build template inheritance: {}", e))
    })?;

    Ok(tera)
}

fn collect_templates_from_dir(
    base_path: &Path,
    current_path: &Path,
    templates: &mut Vec<(String, String)>,
) -> Result<()> {
    for entry in fs::read_dir(current_path).map_err(ThemeError::IoError)? {
        let path = entry.map_err(ThemeError::IoError)?.path();

        if path.is_dir() {
            collect_templates_from_dir(base_path, &path, templates)?;
        } else if path.extension().is_some_and(|ext| ext == "html") {
            let relative_path = path
                .strip_prefix(base_path)
                .map_err(|_| ThemeError::TemplateError("Failed to get relative path".to_string()))?;

            let template_name = relative_path.to_string_lossy().replace('\\', "/");

            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read template: {:?}", path))?;

            templates.push((template_name, content));
        }
    }

    Ok(())
}

/// Variables every page receives
#[derive(Debug, Clone, Serialize)]
pub struct StandardTemplateVars {
    /// Title shown in the header
    pub app_name: String,
    /// Current request path, used to mark the active navigation link
    pub request_path: String,
    /// Current year (for the footer)
    pub year: i32,
}

impl StandardTemplateVars {
    pub fn new(request_path: impl Into<String>) -> Self {
        Self {
            app_name: "Catalog Console".to_string(),
            request_path: request_path.into(),
            year: chrono::Utc::now().year(),
        }
    }
}
