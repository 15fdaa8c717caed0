use serde::{Deserialize, Serialize};

/// Server-assigned cell identifier, kept verbatim from `data-cell-id`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(String);

impl CellId {
    /// Returns `None` for a blank id, which can never address a cell.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Attributes of one rendered grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellInfo {
    pub id: Option<CellId>,
    /// `data-occupied == "1"`
    pub occupied: bool,
    /// Trimmed `data-owner`, `None` when absent or blank
    pub owner: Option<String>,
    /// Carries the `free` class (menu target)
    pub free: bool,
}

impl CellInfo {
    pub fn new(id: &str) -> Self {
        Self {
            id: CellId::parse(id),
            occupied: false,
            owner: None,
            free: true,
        }
    }

    pub fn with_owner(id: &str, owner: &str) -> Self {
        Self {
            id: CellId::parse(id),
            occupied: true,
            owner: normalize_name(Some(owner)),
            free: false,
        }
    }

    pub fn is_owned_by(&self, viewer: &Viewer) -> bool {
        match (&self.owner, viewer.name()) {
            (Some(owner), Some(name)) => owner == name,
            _ => false,
        }
    }
}

/// The signed-in user from `<body data-username>`, anonymous when blank
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer(Option<String>);

impl Viewer {
    pub fn new(raw: Option<&str>) -> Self {
        Self(normalize_name(raw))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

pub(crate) fn normalize_name(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_id_rejects_blank() {
        assert!(CellId::parse("").is_none());
        assert!(CellId::parse("   ").is_none());
        assert_eq!(CellId::parse(" 12 ").unwrap().as_str(), "12");
    }

    #[test]
    fn test_owner_is_trimmed() {
        let cell = CellInfo::with_owner("3", "  anna ");
        assert_eq!(cell.owner.as_deref(), Some("anna"));
        assert!(cell.is_owned_by(&Viewer::new(Some("anna"))));
    }

    #[test]
    fn test_anonymous_viewer_owns_nothing() {
        let mut cell = CellInfo::with_owner("3", "");
        assert!(cell.owner.is_none());
        assert!(!cell.is_owned_by(&Viewer::anonymous()));
        cell.owner = Some("anna".to_string());
        assert!(!cell.is_owned_by(&Viewer::new(Some("  "))));
    }
}
