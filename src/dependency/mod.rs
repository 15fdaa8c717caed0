pub mod dom;
mod forms;
mod location;
mod storage;

pub use forms::{upsert_hidden_field, BrowserFormSink, FormSink};
pub use location::{focus_target, strip_query};
pub use storage::{LocalThemeStore, MemoryThemeStore, ThemeStore};
