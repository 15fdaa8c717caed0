// Shared page constants

// Rendered markup contract
pub const WRAPPER_SELECTOR: &str = ".city-wrapper";
pub const CELL_SELECTOR: &str = ".city-grid .cell";
pub const FREE_CELL_SELECTOR: &str = ".cell.free";
pub const OCCUPIED_CELL_SELECTOR: &str = ".cell.occupied";
pub const BUILDING_OPTION_SELECTOR: &str = ".building-option";
pub const FLASH_SELECTOR: &str = ".flash-message";
pub const POST_FORM_SELECTOR: &str = "form[method=post i]";

pub const BUILD_MENU_ID: &str = "building-select";
pub const TOGGLE_THEME_ID: &str = "toggleTheme";
pub const TOOLTIP_ID: &str = "cell-tooltip";
pub const DELETE_MODAL_ID: &str = "deleteModal";
pub const MODAL_CONFIRM_ID: &str = "modal-confirm";
pub const MODAL_CANCEL_ID: &str = "modal-cancel";
pub const STAT_OCCUPIED_ID: &str = "stat-occupied";
pub const STAT_FREE_ID: &str = "stat-free";
pub const STAT_LEVEL_ID: &str = "stat-level";

pub const ATTR_CELL_ID: &str = "data-cell-id";
pub const ATTR_OCCUPIED: &str = "data-occupied";
pub const ATTR_OWNER: &str = "data-owner";
pub const ATTR_BUILDING_TYPE: &str = "data-type";
pub const ATTR_USERNAME: &str = "data-username";
pub const ATTR_CONFIG: &str = "data-city-config";
pub const OCCUPIED_MARKER: &str = "1";

// Classes toggled by this layer
pub const CLASS_DAY: &str = "city-day";
pub const CLASS_NIGHT: &str = "city-night";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_FREE: &str = "free";
pub const CLASS_OCCUPIED: &str = "occupied";
pub const CLASS_BUILT_ON_LOAD: &str = "built-on-load";
pub const CLASS_FLASH_HIDE: &str = "flash-hide";

// Query parameters set by the server after a build or release
pub const PARAM_NEW_BUILDING: &str = "new_building";
pub const PARAM_REMOVED_CELL: &str = "removed_cell";

// Form field carrying the theme back to the server
pub const THEME_FIELD: &str = "theme";
pub const DEFAULT_STORAGE_KEY: &str = "theme";

// Timings (ms)
pub const HIGHLIGHT_MS: u32 = 600;
pub const FLASH_DELAY_MS: u32 = 2000;

// Geometry (px)
pub const POPUP_MARGIN_PX: f64 = 12.0; // Minimum distance from the wrapper edges
pub const POPUP_GAP_PX: f64 = 12.0; // Distance below the clicked cell
pub const TOOLTIP_GAP_PX: f64 = 8.0; // Distance above the hovered cell
pub const TOOLTIP_TOP_MARGIN_PX: f64 = 10.0;

// Labels
pub const LABEL_SWITCH_TO_NIGHT: &str = "🌙 Ночь";
pub const LABEL_SWITCH_TO_DAY: &str = "☀️ День";
pub const LABEL_OWN_HOUSE: &str = "Мой дом";
pub const LABEL_OTHER_HOUSE: &str = "Дом пользователя: {owner}";
pub const LABEL_FREE_PLOT: &str = "Свободный участок";
pub const LABEL_CURRENCY: &str = "руб.";
