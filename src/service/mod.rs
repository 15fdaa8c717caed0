mod build_menu_view;
mod delete_modal_view;
mod flash_view;
mod focus_view;
mod form_theme_sync;
mod page_handler;
mod stats_view;
mod theme_view;
mod tooltip_view;

pub use page_handler::{boot, boot_with_config, teardown};

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::config::PageConfig;
use crate::data::PageData;
use crate::dependency::{FormSink, ThemeStore};
use crate::error::{log_failure, PageResult};
use crate::logic::{BuildMenuState, DeleteModalState, ThemeController};
use crate::types::{CellAction, CellId, GridStats, Theme};

/// Listeners and timers owned by a mounted page. Dropping them unbinds
/// every handler and cancels whatever timer has not fired yet.
#[derive(Default)]
pub(crate) struct Bindings {
    listeners: Vec<EventListener>,
    timers: Vec<Timeout>,
}

impl Bindings {
    fn listen(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    fn schedule(&mut self, timer: Timeout) {
        self.timers.push(timer);
    }
}

pub(crate) struct PageContext {
    data: Rc<PageData>,
    config: Rc<PageConfig>,
    theme: Rc<RefCell<ThemeController>>,
    sink: Rc<dyn FormSink>,
}

/// Every request carries the theme on screen so the server renders the same one back
fn submit_action(
    theme: &RefCell<ThemeController>,
    sink: &dyn FormSink,
    action: CellAction,
) -> PageResult<()> {
    let current = theme.borrow().current();
    let request = action.into_request(current);
    log::info!("submitting POST {}", request.action);
    sink.submit(&request)
}

/// All behaviors of the city page, bound to one document
pub struct CityPage {
    _bindings: Bindings,
    stats: GridStats,
    theme: Rc<RefCell<ThemeController>>,
    build_menu: Rc<RefCell<BuildMenuState>>,
    delete_modal: Rc<RefCell<DeleteModalState>>,
}

impl CityPage {
    /// Binds every behavior whose elements are present. A behavior that
    /// fails to bind is logged and skipped; the others still work.
    pub fn mount(
        document: Document,
        config: PageConfig,
        store: Rc<dyn ThemeStore>,
        sink: Rc<dyn FormSink>,
    ) -> PageResult<Self> {
        let theme = Rc::new(RefCell::new(ThemeController::new(store)));
        let ctx = PageContext {
            data: Rc::new(PageData::scan(document)?),
            config: Rc::new(config),
            theme: Rc::clone(&theme),
            sink,
        };
        let mut bindings = Bindings::default();
        let build_menu = Rc::new(RefCell::new(BuildMenuState::new()));
        let delete_modal = Rc::new(RefCell::new(DeleteModalState::new()));

        let stats = stats_view::render(&ctx);
        log_failure("theme", theme_view::bind(&ctx, &mut bindings));
        log_failure("focus", focus_view::bind(&ctx));
        log_failure(
            "build menu",
            build_menu_view::bind(&ctx, &build_menu, &mut bindings),
        );
        log_failure(
            "delete modal",
            delete_modal_view::bind(&ctx, &delete_modal, &mut bindings),
        );
        log_failure("tooltip", tooltip_view::bind(&ctx, &mut bindings));
        flash_view::bind(&ctx, &mut bindings);
        form_theme_sync::bind(&ctx, &mut bindings);

        log::info!(
            "city page mounted: {} cells, {} listeners",
            stats.total,
            bindings.listeners.len()
        );

        Ok(Self {
            _bindings: bindings,
            stats,
            theme,
            build_menu,
            delete_modal,
        })
    }

    pub fn stats(&self) -> GridStats {
        self.stats
    }

    pub fn theme(&self) -> Option<Theme> {
        self.theme.borrow().applied()
    }

    pub fn selected_cell(&self) -> Option<CellId> {
        self.build_menu.borrow().selected().cloned()
    }

    pub fn pending_delete(&self) -> Option<CellId> {
        self.delete_modal.borrow().pending().cloned()
    }
}
