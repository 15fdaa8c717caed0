mod cells;

pub use cells::{has_cell_id, read_cell};

use web_sys::{Document, Element, HtmlElement};

use crate::constants::{ATTR_USERNAME, CELL_SELECTOR, WRAPPER_SELECTOR};
use crate::dependency::dom;
use crate::error::{PageError, PageResult};
use crate::types::{CellId, CellInfo, Viewer};

/// Read-only view of the rendered page, captured once at boot
pub struct PageData {
    document: Document,
    root: Element,
    wrapper: Option<HtmlElement>,
    viewer: Viewer,
}

impl PageData {
    pub fn scan(document: Document) -> PageResult<Self> {
        let root = document.document_element().ok_or(PageError::NoDocument)?;
        let wrapper = dom::query::<HtmlElement>(&document, WRAPPER_SELECTOR);
        let viewer = Viewer::new(
            document
                .body()
                .and_then(|body| body.get_attribute(ATTR_USERNAME))
                .as_deref(),
        );

        Ok(Self {
            document,
            root,
            wrapper,
            viewer,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn wrapper(&self) -> Option<&HtmlElement> {
        self.wrapper.as_ref()
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Grid cells matching `selector`, in document order
    pub fn cells(&self, selector: &str) -> Vec<HtmlElement> {
        dom::query_all(&self.document, selector)
    }

    pub fn grid_cells(&self) -> Vec<HtmlElement> {
        self.cells(CELL_SELECTOR)
    }

    pub fn grid_infos(&self) -> Vec<CellInfo> {
        self.grid_cells().iter().map(|cell| read_cell(cell)).collect()
    }

    /// First `.cell` carrying `id`
    pub fn find_cell(&self, id: &CellId) -> Option<HtmlElement> {
        self.cells(".cell")
            .into_iter()
            .find(|cell| has_cell_id(cell, id))
    }
}
