use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Args;
use contact_form_config::{Config, PageConfig};
use contact_form_core::{FormEvent, FormModel};
use contact_form_templates_contracts::TemplateService;
use contact_form_templates_impl::TemplateServiceImpl;
use tracing::{debug, info};

use crate::page::render_page;

#[derive(Debug, Args)]
pub struct ReplayCommand {
    /// File with one JSON form event per line [default: stdin]
    file: Option<PathBuf>,
    /// Print the page after every event instead of only after the last one.
    /// Without any events the page is printed once.
    #[arg(short, long)]
    each: bool,
}

impl ReplayCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let templates = TemplateServiceImpl::new()?;
        let mut out = std::io::stdout().lock();

        match &self.file {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open event file at {}", path.display()))?;
                replay(&templates, &config.page, BufReader::new(file), &mut out, self.each)?;
            }
            None => {
                let input = std::io::stdin().lock();
                replay(&templates, &config.page, input, &mut out, self.each)?;
            }
        }

        Ok(())
    }
}

/// Applies the newline-delimited JSON form events of `input` to a new form
/// in order and writes the rendered page to `out`. Blank lines are skipped.
/// At least one page is written, even if `input` holds no events.
pub fn replay(
    templates: &impl TemplateService,
    page: &PageConfig,
    input: impl BufRead,
    out: &mut impl Write,
    each: bool,
) -> anyhow::Result<FormModel> {
    let mut model = FormModel::new();
    let mut applied = 0;

    for (i, line) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let event = serde_json::from_str::<FormEvent>(&line)
            .with_context(|| format!("Invalid form event on line {line_no}"))?;
        debug!(line = line_no, ?event, "dispatch");
        model.dispatch(event);
        applied += 1;

        if each {
            writeln!(out, "{}", render_page(templates, &model, page)?)?;
        }
    }

    info!(
        events = applied,
        errors = model.errors().len(),
        submitted = model.submission().is_some(),
        "replay finished"
    );

    if !each || applied == 0 {
        writeln!(out, "{}", render_page(templates, &model, page)?)?;
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use contact_form_models::form::{FieldName, ValidationError};
    use contact_form_utils::assert_page_contains;
    use pretty_assertions::assert_eq;

    use super::*;

    fn page_config() -> PageConfig {
        PageConfig {
            title: "Contact Form".into(),
            lang: "en".into(),
        }
    }

    fn run(input: &str, each: bool) -> (anyhow::Result<FormModel>, String) {
        let templates = TemplateServiceImpl::new().unwrap();
        let mut out = Vec::new();
        let result = replay(&templates, &page_config(), input.as_bytes(), &mut out, each);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_final_page() {
        // Arrange
        let input = concat!(
            r#"{"event":"type","field":"firstName","text":"onetwothreefourfive"}"#,
            "\n\n",
            r#"{"event":"change","field":"email","value":"notavalidemailaddress"}"#,
            "\n",
            r#"{"event":"submit"}"#,
            "\n",
        );

        // Act
        let (result, out) = run(input, false);

        // Assert
        let model = result.unwrap();
        assert_eq!(
            model.errors().iter().collect::<Vec<_>>(),
            [
                (FieldName::LastName, ValidationError::LastNameRequired),
                (FieldName::Email, ValidationError::EmailInvalid),
            ]
        );
        assert_eq!(out.matches("<!DOCTYPE html>").count(), 1);
        assert_page_contains!(out, "Error: email must be a valid email address.");
    }

    #[test]
    fn prints_page_after_each_event() {
        let input = "{\"event\":\"submit\"}\n{\"event\":\"submit\"}\n";

        let (result, out) = run(input, true);

        result.unwrap();
        assert_eq!(out.matches("<!DOCTYPE html>").count(), 2);
    }

    #[test]
    fn blank_input_prints_empty_page() {
        for each in [false, true] {
            let (result, out) = run("\n  \n", each);

            assert_eq!(result.unwrap(), FormModel::new());
            assert_eq!(out.matches("<!DOCTYPE html>").count(), 1, "each = {each}");
            assert_page_contains!(out, !"data-testid=\"error\"");
        }
    }

    #[test]
    fn invalid_event() {
        let input = "{\"event\":\"submit\"}\n{\"event\":\"reset\"}\n";

        let (result, out) = run(input, false);

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Invalid form event on line 2");
        assert!(out.is_empty());
    }
}
