//! Card image resolution.
//!
//! A card shows the doctor's photo when there is one. When the photo is
//! missing, blank, or failed to load, a generated avatar keyed by the
//! doctor's name stands in. Image failures are never reported as errors.

use crate::model::Doctor;
use url::Url;

pub const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

/// Generated avatar URL for `name`.
pub fn avatar_url(name: &str) -> String {
    match Url::parse_with_params(
        AVATAR_SERVICE,
        &[
            ("name", name),
            ("background", "0D8ABC"),
            ("color", "fff"),
            ("size", "200"),
            ("font-size", "0.35"),
        ],
    ) {
        Ok(url) => url.to_string(),
        Err(_) => AVATAR_SERVICE.to_string(),
    }
}

/// The URL a card should display. `photo_failed` is set once the photo
/// could not be loaded.
pub fn image_url(doctor: &Doctor, photo_failed: bool) -> String {
    match doctor.photo.as_deref().map(str::trim) {
        Some(photo) if !photo.is_empty() && !photo_failed => photo.to_string(),
        _ => avatar_url(&doctor.name),
    }
}

/// "N+ Years Experience", from the first run of digits in `experience`.
pub fn experience_label(experience: &str) -> String {
    let years: String = experience
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    format!("{}+ Years Experience", years)
}
