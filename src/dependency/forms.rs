use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlInputElement};

use crate::error::{PageError, PageResult};
use crate::types::FormRequest;

/// Performs a full-page form submission
pub trait FormSink {
    fn submit(&self, request: &FormRequest) -> PageResult<()>;
}

/// Builds a hidden `<form method="POST">`, appends it to `<body>` and submits
/// it, handing control to the browser's navigation.
pub struct BrowserFormSink {
    document: Document,
}

impl BrowserFormSink {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Detached form for `request`, not yet in the document
    pub fn build_form(&self, request: &FormRequest) -> PageResult<HtmlFormElement> {
        let form: HtmlFormElement = self
            .document
            .create_element("form")?
            .dyn_into()
            .map_err(|_| PageError::WrongElement("form"))?;
        form.set_method("POST");
        form.set_action(&request.action);

        for (name, value) in &request.fields {
            let input = hidden_input(&self.document, name, value)?;
            form.append_child(&input)?;
        }
        Ok(form)
    }
}

impl FormSink for BrowserFormSink {
    fn submit(&self, request: &FormRequest) -> PageResult<()> {
        let form = self.build_form(request)?;
        let body = self.document.body().ok_or(PageError::NoDocument)?;
        body.append_child(&form)?;
        form.submit()?;
        Ok(())
    }
}

fn hidden_input(document: &Document, name: &str, value: &str) -> PageResult<HtmlInputElement> {
    let input: HtmlInputElement = document
        .create_element("input")?
        .dyn_into()
        .map_err(|_| PageError::WrongElement("input"))?;
    input.set_type("hidden");
    input.set_name(name);
    input.set_value(value);
    Ok(input)
}

/// Sets `name` on an existing hidden input of `form`, or appends one
pub fn upsert_hidden_field(
    document: &Document,
    form: &HtmlFormElement,
    name: &str,
    value: &str,
) -> PageResult<()> {
    let existing = form
        .query_selector(&format!("input[name=\"{name}\"]"))?
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());

    match existing {
        Some(input) => input.set_value(value),
        None => {
            let input = hidden_input(document, name, value)?;
            form.append_child(&input)?;
        }
    }
    Ok(())
}
