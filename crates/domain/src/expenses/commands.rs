use std::fmt;

use derive_new::new;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::errors::Error;

use super::{inputs, links, Extras};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CommandType {
    #[default]
    CreateExpense,
}

/// Where a command came from
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Assistant action delivered with extras
    VoiceAssistant,
    /// `evenly://expense?...` link
    DeepLink,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::VoiceAssistant => "voice_assistant",
            Source::DeepLink => "deep_link",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized expense command handed to the application layer.
///
/// Fields that the triggering event did not carry stay `None` and serialize
/// as `null`, so the receiver can tell "not provided" apart from "empty".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    #[serde(rename = "type")]
    #[new(default)]
    kind: CommandType,
    amount: Option<f64>,
    title: Option<String>,
    trip_name: Option<String>,
    payer_name: Option<String>,
    participant_names: Option<Vec<String>>,
    source: Source,
}

impl Command {
    /// Builds a command from assistant action extras. Never fails.
    pub fn from_extras(extras: &Extras) -> Self {
        Self::new(
            inputs::extract_amount(extras),
            inputs::extract_text(extras, inputs::keys::TITLE),
            inputs::extract_text(extras, inputs::keys::TRIP_NAME),
            inputs::extract_text(extras, inputs::keys::PAYER_NAME),
            inputs::extract_participant_names(extras),
            Source::VoiceAssistant,
        )
    }

    /// Builds a command from a deep link's query string. The host is not
    /// checked here.
    pub fn from_deep_link(uri: &Url) -> Self {
        Self::new(
            links::extract_amount(uri),
            links::query_param(uri, links::params::TITLE),
            links::query_param(uri, links::params::TRIP_NAME),
            links::query_param(uri, links::params::PAYER_NAME),
            links::extract_participant_names(uri),
            Source::DeepLink,
        )
    }

    pub fn kind(&self) -> CommandType {
        self.kind
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn trip_name(&self) -> Option<&str> {
        self.trip_name.as_deref()
    }

    pub fn payer_name(&self) -> Option<&str> {
        self.payer_name.as_deref()
    }

    pub fn participant_names(&self) -> Option<&[String]> {
        self.participant_names.as_deref()
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// String-keyed map passed as the method channel argument
    pub fn to_arguments(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::Extra;
    use serde_json::json;

    #[test]
    fn arguments_keep_absent_fields_as_null() {
        let command = Command::from_extras(&Extras::new());

        assert_eq!(
            command.to_arguments().unwrap(),
            json!({
                "type": "create_expense",
                "amount": null,
                "title": null,
                "tripName": null,
                "payerName": null,
                "participantNames": null,
                "source": "voice_assistant",
            })
        );
    }

    #[test]
    fn arguments_use_wire_names() {
        let extras = Extras::from([
            ("amount".to_string(), Extra::from(42_i64)),
            ("title".to_string(), Extra::from("dinner")),
            ("tripName".to_string(), Extra::from("Lisbon")),
            ("payerName".to_string(), Extra::from("Ana")),
            ("participantNames".to_string(), Extra::from(vec!["Ana", "Bob"])),
        ]);

        let arguments = Command::from_extras(&extras).to_arguments().unwrap();

        assert_eq!(arguments["amount"], json!(42.0));
        assert_eq!(arguments["tripName"], json!("Lisbon"));
        assert_eq!(arguments["payerName"], json!("Ana"));
        assert_eq!(arguments["participantNames"], json!(["Ana", "Bob"]));
    }

    #[test]
    fn deep_link_command_is_tagged() {
        let uri = Url::parse("evenly://expense?title=taxi").unwrap();
        let command = Command::from_deep_link(&uri);

        assert_eq!(command.source(), Source::DeepLink);
        assert_eq!(command.kind(), CommandType::CreateExpense);
        assert_eq!(command.title(), Some("taxi"));
        assert_eq!(command.amount(), None);
        assert_eq!(command.participant_names(), None);
    }

    #[test]
    fn decodes_from_arguments() {
        let command = Command::from_extras(&Extras::from([(
            "amount".to_string(),
            Extra::from("12.5"),
        )]));
        let decoded: Command = serde_json::from_value(command.to_arguments().unwrap()).unwrap();

        assert_eq!(decoded, command);
    }
}
