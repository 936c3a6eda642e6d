use contact_form_config::PageConfig;
use contact_form_core::FormModel;
use contact_form_models::form::FieldName;
use contact_form_templates_contracts::{
    ContactFormTemplate, FieldKind, FieldTemplate, SubmittedValueTemplate, TemplateService,
};

/// Projects the current state of the form onto the page template.
pub fn page_template(model: &FormModel, page: &PageConfig) -> ContactFormTemplate {
    let fields = FieldName::ALL
        .into_iter()
        .map(|field| FieldTemplate {
            id: field.as_str().into(),
            label: field.label().into(),
            kind: field_kind(field),
            required: field.is_required(),
            value: model.values().get(field).into(),
            error: model.errors().get(field).map(|error| error.to_string()),
        })
        .collect();

    let submission = model.submission().map(|submission| {
        submission
            .entries()
            .into_iter()
            .map(|(field, value)| SubmittedValueTemplate {
                id: field.as_str().into(),
                label: field.label().into(),
                value: value.into(),
            })
            .collect()
    });

    ContactFormTemplate {
        lang: page.lang.clone(),
        title: page.title.clone(),
        fields,
        submission,
    }
}

pub fn render_page(
    templates: &impl TemplateService,
    model: &FormModel,
    page: &PageConfig,
) -> anyhow::Result<String> {
    templates.render(&page_template(model, page))
}

fn field_kind(field: FieldName) -> FieldKind {
    match field {
        FieldName::FirstName | FieldName::LastName => FieldKind::Text,
        FieldName::Email => FieldKind::Email,
        FieldName::Message => FieldKind::TextArea,
    }
}
