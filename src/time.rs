//! Platform-agnostic time utilities
//!
//! Elapsed time since app start, and the current calendar year.

#[cfg(target_arch = "wasm32")]
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_seconds() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Current year in the user's local time
#[cfg(target_arch = "wasm32")]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Current year in the user's local time
#[cfg(not(target_arch = "wasm32"))]
pub fn current_year() -> i32 {
    use chrono::Datelike;

    chrono::Local::now().year()
}
