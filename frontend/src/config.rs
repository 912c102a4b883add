use log::Level;

/// Widths below this are the mobile layout.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
/// Widths below this (and at least `MOBILE_MAX_WIDTH`) are the tablet layout.
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const MENU_FOCUS_DELAY_MS: u32 = 100;
pub const RIPPLE_LIFETIME_MS: u32 = 600;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
