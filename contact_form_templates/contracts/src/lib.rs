use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE_NAME: &str = "base.html";
pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    ContactFormTemplate("contact_form.html"),
}

/// The contact form page: the inputs with their inline errors and, once the
/// form has been submitted successfully, the confirmation display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormTemplate {
    pub lang: String,
    pub title: String,
    pub fields: Vec<FieldTemplate>,
    pub submission: Option<Vec<SubmittedValueTemplate>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldTemplate {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedValueTemplate {
    pub id: String,
    pub label: String,
    pub value: String,
}
