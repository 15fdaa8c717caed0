use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::PageResult;

/// Tunables for the page behaviors. Every field falls back to its default,
/// so a partial `data-city-config` object is enough to override one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub highlight_ms: u32,
    pub flash_delay_ms: u32,
    pub popup_margin_px: f64,
    pub popup_gap_px: f64,
    pub tooltip_gap_px: f64,
    pub tooltip_top_margin_px: f64,
    pub labels: Labels,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            highlight_ms: HIGHLIGHT_MS,
            flash_delay_ms: FLASH_DELAY_MS,
            popup_margin_px: POPUP_MARGIN_PX,
            popup_gap_px: POPUP_GAP_PX,
            tooltip_gap_px: TOOLTIP_GAP_PX,
            tooltip_top_margin_px: TOOLTIP_TOP_MARGIN_PX,
            labels: Labels::default(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> PageResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Shown on the toggle button while the day theme is active
    pub switch_to_night: String,
    /// Shown on the toggle button while the night theme is active
    pub switch_to_day: String,
    pub own_house: String,
    /// `{owner}` is replaced with the owner's name
    pub other_house: String,
    pub free_plot: String,
    pub currency: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            switch_to_night: LABEL_SWITCH_TO_NIGHT.to_string(),
            switch_to_day: LABEL_SWITCH_TO_DAY.to_string(),
            own_house: LABEL_OWN_HOUSE.to_string(),
            other_house: LABEL_OTHER_HOUSE.to_string(),
            free_plot: LABEL_FREE_PLOT.to_string(),
            currency: LABEL_CURRENCY.to_string(),
        }
    }
}
