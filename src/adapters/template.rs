use std::path::Path;

use minijinja::{Environment, ErrorKind, path_loader};

use crate::domain::{AppError, SnmpdAttributes};
use crate::ports::TemplateRenderer;

/// Template renderer using Minijinja with templates loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template_dir: &Path,
        template_name: &str,
        attributes: &SnmpdAttributes,
    ) -> Result<String, AppError> {
        let mut env = Environment::new();
        env.set_loader(path_loader(template_dir.to_path_buf()));

        let template = env
            .get_template(template_name)
            .map_err(|err| template_error(template_dir, template_name, err))?;

        template.render(attributes).map_err(|err| template_error(template_dir, template_name, err))
    }
}

fn template_error(template_dir: &Path, template_name: &str, err: minijinja::Error) -> AppError {
    match err.kind() {
        ErrorKind::TemplateNotFound => AppError::TemplateNotFound {
            name: template_name.to_string(),
            dir: template_dir.display().to_string(),
        },
        ErrorKind::SyntaxError => {
            AppError::TemplateSyntax { name: template_name.to_string(), reason: err.to_string() }
        }
        _ => AppError::TemplateRender { name: template_name.to_string(), reason: err.to_string() },
    }
}
