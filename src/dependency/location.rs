use web_sys::{UrlSearchParams, Window};

use crate::constants::{PARAM_NEW_BUILDING, PARAM_REMOVED_CELL};
use crate::error::PageResult;
use crate::types::FocusTarget;

pub fn focus_target(window: &Window) -> PageResult<Option<FocusTarget>> {
    let search = window.location().search()?;
    let params = UrlSearchParams::new_with_str(&search)?;
    Ok(FocusTarget::from_params(
        params.get(PARAM_NEW_BUILDING).as_deref(),
        params.get(PARAM_REMOVED_CELL).as_deref(),
    ))
}

/// Rewrites the visible URL to the bare path without reloading
pub fn strip_query(window: &Window) -> PageResult<()> {
    let path = window.location().pathname()?;
    window
        .history()?
        .replace_state_with_url(&js_sys::Object::new(), "", Some(&path))?;
    Ok(())
}
