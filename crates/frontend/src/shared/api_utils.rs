//! Connection settings for the hosted club backend.
//!
//! The base URL and API key are baked in at build time (`CLUB_API_URL`,
//! `CLUB_API_KEY`). Without a build-time key the one saved in localStorage
//! is used; without a build-time URL the page origin is used.

use contracts::shared::category_colors::ClubColorConfig;
use web_sys::window;

const API_KEY_STORAGE_KEY: &str = "club_api_key";
const COLOR_CONFIG_STORAGE_KEY: &str = "club_color_config";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get the base URL for API requests
///
/// # Returns
/// - `CLUB_API_URL` if set at build time
/// - otherwise the page origin, like "https://club.example.com"
/// - empty string if window is not available
pub fn api_base() -> String {
    if let Some(url) = option_env!("CLUB_API_URL") {
        return url.trim_end_matches('/').to_string();
    }
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Join the base URL and a path that starts with "/"
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// API key sent as `apikey` and bearer token
pub fn api_key() -> Option<String> {
    option_env!("CLUB_API_KEY")
        .map(str::to_string)
        .or_else(|| get_local_storage()?.get_item(API_KEY_STORAGE_KEY).ok()?)
        .filter(|key| !key.is_empty())
}

/// Club color overrides stored under `club_color_config`, if any
pub fn stored_color_config() -> Option<ClubColorConfig> {
    let json = get_local_storage()?
        .get_item(COLOR_CONFIG_STORAGE_KEY)
        .ok()??;
    parse_color_config(&json)
}

/// Unreadable settings are logged and ignored
fn parse_color_config(json: &str) -> Option<ClubColorConfig> {
    match ClubColorConfig::from_json(json) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("Ignoring stored color configuration: {:#}", e);
            None
        }
    }
}
