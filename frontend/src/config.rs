//! Build-time configuration.
//!
//! Both values are read with `option_env!`, so they are fixed when the wasm
//! bundle is built (e.g. `BOOKINGS_API_URL=http://localhost:3000/bookings trunk build`).

use log::LevelFilter;

/// Base resource of the bookings API. `/search` is appended for filtering.
pub const DEFAULT_API_URL: &str = "https://susan-hotel-server.glitch.me/bookings";

pub fn api_url() -> &'static str {
    option_env!("BOOKINGS_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// Console verbosity; unknown values fall back to `info`.
pub fn log_level() -> LevelFilter {
    option_env!("BOOKINGS_LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}
