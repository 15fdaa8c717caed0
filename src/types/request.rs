use super::cell::CellId;
use super::theme::Theme;
use crate::constants::THEME_FIELD;

/// A server action triggered from the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellAction {
    /// `kind` is the raw `data-type` of the chosen option
    Build { cell: CellId, kind: String },
    /// Release own building, or let the server report the current owner
    Toggle { cell: CellId },
}

impl CellAction {
    pub fn cell(&self) -> &CellId {
        match self {
            CellAction::Build { cell, .. } | CellAction::Toggle { cell } => cell,
        }
    }

    pub fn path(&self) -> String {
        match self {
            CellAction::Build { cell, kind } => format!("/cell/{cell}/build/{kind}"),
            CellAction::Toggle { cell } => format!("/cell/{cell}/toggle"),
        }
    }

    pub fn into_request(self, theme: Theme) -> FormRequest {
        FormRequest::post(self.path()).with_field(THEME_FIELD, theme.as_str())
    }
}

/// A full-page POST form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub action: String,
    pub fields: Vec<(String, String)>,
}

impl FormRequest {
    pub fn post(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(id: &str) -> CellId {
        CellId::parse(id).unwrap()
    }

    #[test]
    fn test_build_path() {
        let action = CellAction::Build {
            cell: cell("12"),
            kind: "3".to_string(),
        };
        assert_eq!(action.path(), "/cell/12/build/3");
    }

    #[test]
    fn test_toggle_request_carries_theme() {
        let request = CellAction::Toggle { cell: cell("7") }.into_request(Theme::Night);
        assert_eq!(request.action, "/cell/7/toggle");
        assert_eq!(request.field("theme"), Some("night"));
        assert_eq!(request.fields.len(), 1);
    }
}
