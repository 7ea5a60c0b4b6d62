// Small browser and encoding helpers shared by the shell and the splitter.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::config::{BOARD_MAX_PX, BOARD_VIEWPORT_RATIO};
use crate::error::PuzzleError;

pub fn clog(msg: &str) {
    // Native test runs have no console to write to.
    if cfg!(target_arch = "wasm32") {
        gloo::console::log!(msg);
    }
}

/// Blocking alert; the only way errors reach the user.
pub fn alert(msg: &str) {
    clog(&format!("alert: {msg}"));
    gloo::dialogs::alert(msg);
}

pub fn board_size_for_viewport(viewport_width: f64) -> f64 {
    (viewport_width * BOARD_VIEWPORT_RATIO).min(BOARD_MAX_PX).max(0.0)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(BOARD_MAX_PX / BOARD_VIEWPORT_RATIO)
}

pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.trim().is_empty() { "application/octet-stream" } else { mime };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

pub fn from_data_uri(uri: &str) -> Result<Vec<u8>, PuzzleError> {
    let rest = uri.strip_prefix("data:").ok_or(PuzzleError::InvalidDataUri)?;
    let (header, payload) = rest.split_once(',').ok_or(PuzzleError::InvalidDataUri)?;
    if !header.ends_with(";base64") {
        return Err(PuzzleError::InvalidDataUri);
    }
    STANDARD
        .decode(payload.trim())
        .map_err(|_| PuzzleError::InvalidDataUri)
}

/// Seed for the tile scatter, mixed from `Math.random` and the clock.
pub fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = js_sys::Date::now() as u64;
    (hi << 32) ^ lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_size_follows_viewport_until_cap() {
        assert_eq!(board_size_for_viewport(400.0), 320.0);
        assert_eq!(board_size_for_viewport(750.0), 600.0);
        assert_eq!(board_size_for_viewport(3000.0), 600.0);
    }

    #[test]
    fn data_uri_carries_mime_and_payload() {
        let uri = to_data_uri("image/png", &[1, 2, 3, 250]);
        assert!(uri.starts_with("data:image/png;base64,"));
        assert_eq!(from_data_uri(&uri).unwrap(), vec![1, 2, 3, 250]);
        assert!(to_data_uri("", b"x").starts_with("data:application/octet-stream;base64,"));
    }

    #[test]
    fn malformed_data_uris_are_rejected() {
        for bad in ["image/png;base64,AAAA", "data:image/png,AAAA", "data:image/png;base64", "data:image/png;base64,@@"] {
            assert_eq!(from_data_uri(bad), Err(PuzzleError::InvalidDataUri), "{bad}");
        }
    }
}
