use url::Url;

use super::inputs::parse_number;

/// Recognized deep link query parameters
pub mod params {
    pub const AMOUNT: &str = "amount";
    pub const TITLE: &str = "title";
    pub const TRIP_NAME: &str = "tripName";
    pub const PAYER_NAME: &str = "payerName";
    pub const PARTICIPANT_NAMES: &str = "participantNames";
}

/// First decoded value of a query parameter
pub fn query_param(uri: &Url, name: &str) -> Option<String> {
    uri.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

pub fn extract_amount(uri: &Url) -> Option<f64> {
    query_param(uri, params::AMOUNT).and_then(|amount| parse_number(&amount))
}

/// Names are split on commas and kept as-is, blanks included. Unlike the
/// action extras path nothing is trimmed here.
pub fn extract_participant_names(uri: &Url) -> Option<Vec<String>> {
    query_param(uri, params::PARTICIPANT_NAMES)
        .map(|names| names.split(',').map(str::to_string).collect())
}
