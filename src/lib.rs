//! Browser behavior layer for the city grid page.
//!
//! The server renders the grid; this crate wires the interactive parts on
//! top of it: the day/night theme, the build menu under free cells, the
//! release confirmation for own buildings, hover tooltips, the occupancy
//! readout and flash message dismissal. Build and release actions are
//! ordinary POST form submissions that reload the page.
//!
//! From JavaScript:
//!
//! ```js
//! import init, { boot } from "./pkg/city_ui.js";
//! await init();
//! boot();
//! ```

pub mod config;
pub mod constants;
pub mod data;
pub mod dependency;
pub mod error;
pub mod logic;
pub mod service;
pub mod types;

pub use config::{Labels, PageConfig};
pub use dependency::{BrowserFormSink, FormSink, LocalThemeStore, MemoryThemeStore, ThemeStore};
pub use error::{PageError, PageResult};
pub use service::{boot, boot_with_config, teardown, CityPage};
pub use types::{CellAction, CellId, FormRequest, GridStats, Theme};
