//! # DaData Address Suggestions
//!
//! Types mirroring the DaData `suggest/address` response. The suggestion is DaData's own
//! data contract: the form only reads the display value and the coordinates, and forwards
//! the rest to the webhook untouched.
//!
//! ```text
//! {
//!   "value": "г Москва, ул Хабаровская, д 8",
//!   "unrestricted_value": "107589, г Москва, ул Хабаровская, д 8",
//!   "data": {
//!     "postal_code": "107589",
//!     "city_with_type": "г Москва",
//!     "geo_lat": "55.8210",
//!     "geo_lon": "37.8167",
//!     "qc_geo": "0",
//!     ...
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single address candidate returned by DaData.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddressSuggestion {
    /// Display text shown in the dropdown and after selection
    pub value: String,
    /// Full address including postal code and region
    #[serde(default)]
    pub unrestricted_value: String,
    pub data: AddressData,
}

impl AddressSuggestion {
    /// Latitude and longitude, only when both are present and non-empty.
    pub fn coordinates(&self) -> Option<(&str, &str)> {
        let lat = self.data.geo_lat.as_deref().filter(|s| !s.is_empty())?;
        let lon = self.data.geo_lon.as_deref().filter(|s| !s.is_empty())?;
        Some((lat, lon))
    }
}

/// Structured part of a suggestion.
///
/// Only the fields the form or its consumers commonly look at are typed. Everything else
/// DaData sends lands in `extra`, so serializing a suggestion gives back the provider's record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressData {
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub region_with_type: Option<String>,
    pub city_with_type: Option<String>,
    pub settlement_with_type: Option<String>,
    pub street_with_type: Option<String>,
    pub house: Option<String>,
    pub flat: Option<String>,
    pub fias_id: Option<String>,
    pub kladr_id: Option<String>,
    pub geo_lat: Option<String>,
    pub geo_lon: Option<String>,
    /// Coordinate precision code (0 = exact house, 5 = not determined)
    pub qc_geo: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `suggest/address`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestRequest {
    pub query: String,
    pub count: usize,
}

/// Response body of `suggest/address`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuggestResponse {
    #[serde(default)]
    pub suggestions: Vec<AddressSuggestion>,
}
