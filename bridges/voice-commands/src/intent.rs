use domain::{expenses::Extras, Error};
use serde::{Deserialize, Serialize};
use url::Url;

pub const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// An OS intent as delivered to the activity, on launch or while running.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Intent {
    pub action: Option<String>,
    pub data: Option<String>,
    #[serde(default)]
    pub extras: Extras,
}

impl Intent {
    pub fn with_action(action: impl Into<String>, extras: Extras) -> Self {
        Self {
            action: Some(action.into()),
            data: None,
            extras,
        }
    }

    pub fn view(data: impl Into<String>) -> Self {
        Self {
            action: Some(ACTION_VIEW.to_string()),
            data: Some(data.into()),
            extras: Extras::new(),
        }
    }

    pub fn data_uri(&self) -> Result<Option<Url>, Error> {
        self.data
            .as_deref()
            .map(|data| {
                Url::parse(data).map_err(|source| Error::InvalidUri {
                    uri: data.to_string(),
                    source,
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::expenses::Extra;

    #[test]
    fn parses_data_uri() {
        let uri = Intent::view("evenly://expense?amount=1").data_uri().unwrap().unwrap();

        assert_eq!(uri.scheme(), "evenly");
        assert_eq!(uri.host_str(), Some("expense"));
    }

    #[test]
    fn missing_data_is_none() {
        assert!(Intent::default().data_uri().unwrap().is_none());
    }

    #[test]
    fn bad_data_is_invalid_uri() {
        let err = Intent::view("not a uri").data_uri().unwrap_err();

        assert!(matches!(err, Error::InvalidUri { ref uri, .. } if uri == "not a uri"));
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let intent: Intent = serde_json::from_str(
            r#"{ "action": "br.com.kinast.evenly.CREATE_EXPENSE", "extras": { "amount": "180" } }"#,
        )
        .unwrap();

        assert_eq!(intent.data, None);
        assert_eq!(intent.extras["amount"], Extra::from("180"));
    }
}
