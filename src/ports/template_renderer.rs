use std::path::Path;

use crate::domain::{AppError, SnmpdAttributes};

pub trait TemplateRenderer {
    /// Render `template_name` from `template_dir` with the given attributes.
    fn render(
        &self,
        template_dir: &Path,
        template_name: &str,
        attributes: &SnmpdAttributes,
    ) -> Result<String, AppError>;
}
