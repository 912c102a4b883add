pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// False when the window or `matchMedia` is unavailable.
pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}
