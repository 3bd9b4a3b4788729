//! Places API v1 `searchText` wire types and the normalized [`RawPlace`].
//!
//! The API may omit any field on any place, depending on the field mask and
//! on what Google has for the listing. Every wire field is therefore
//! `Option` and [`RawPlace::from`] substitutes fixed sentinels:
//!
//! | Field | Missing becomes |
//! |-------|-----------------|
//! | `displayName.text` | [`NO_NAME`] |
//! | `rating` | `0.0` |
//! | `googleMapsLinks.placeUri` | [`NO_LINK`] |
//! | `currentOpeningHours.weekdayDescriptions` | `[`[`NO_HOURS`]`]` |

use serde::{Deserialize, Serialize};

pub const NO_NAME: &str = "名前なし";
pub const NO_LINK: &str = "リンクなし";
pub const NO_HOURS: &str = "営業時間情報なし";

/// Request body for `POST /v1/places:searchText`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchTextRequest<'a> {
    pub text_query: String,
    pub language_code: &'a str,
}

/// Top-level `searchText` response. An empty result omits `places` entirely.
#[derive(Debug, Default, Deserialize)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<PlaceWire>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceWire {
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub google_maps_links: Option<GoogleMapsLinks>,
    #[serde(default)]
    pub current_opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleMapsLinks {
    #[serde(default)]
    pub place_uri: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub weekday_descriptions: Option<Vec<String>>,
}

/// One place from the search, with every field defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPlace {
    pub name: String,
    pub address: Option<String>,
    pub rating: f64,
    pub map_link: String,
    pub weekday_hours: Vec<String>,
}

impl From<PlaceWire> for RawPlace {
    fn from(wire: PlaceWire) -> Self {
        let name = wire
            .display_name
            .and_then(|d| d.text)
            .unwrap_or_else(|| NO_NAME.to_string());

        let map_link = wire
            .google_maps_links
            .and_then(|l| l.place_uri)
            .unwrap_or_else(|| NO_LINK.to_string());

        // An empty list renders the same as a missing one.
        let weekday_hours = wire
            .current_opening_hours
            .and_then(|h| h.weekday_descriptions)
            .filter(|lines| !lines.is_empty())
            .unwrap_or_else(|| vec![NO_HOURS.to_string()]);

        Self {
            name,
            address: wire.formatted_address.filter(|a| !a.is_empty()),
            rating: wire.rating.unwrap_or(0.0),
            map_link,
            weekday_hours,
        }
    }
}
