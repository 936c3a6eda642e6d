use std::sync::Arc;

use anyhow::Context;
use contact_form_templates_contracts::{
    Template, TemplateService, BASE_TEMPLATE, BASE_TEMPLATE_NAME, TEMPLATES,
};
use tera::Tera;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct TemplateServiceImpl {
    tera: Arc<Tera>,
}

impl TemplateServiceImpl {
    /// Compiles the base template and all page templates.
    pub fn new() -> anyhow::Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template(BASE_TEMPLATE_NAME, BASE_TEMPLATE)
            .context("Failed to compile base template")?;

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template)
                .with_context(|| format!("Failed to compile template {name}"))?;
        }

        Ok(Self { tera: tera.into() })
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        trace!(template = T::NAME, "render");
        let context = tera::Context::from_serialize(template)?;
        self.tera.render(T::NAME, &context).map_err(Into::into)
    }
}
