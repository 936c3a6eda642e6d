use contact_form_config::Config;
use contact_form_core::FormModel;
use contact_form_templates_impl::TemplateServiceImpl;

use crate::page::render_page;

/// Prints the page of a freshly created, empty form.
pub fn render(config: Config) -> anyhow::Result<()> {
    let templates = TemplateServiceImpl::new()?;
    let page = render_page(&templates, &FormModel::new(), &config.page)?;
    println!("{page}");
    Ok(())
}
