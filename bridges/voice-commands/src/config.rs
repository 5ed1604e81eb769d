use domain::Error;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHANNEL_NAME: &str = "br.com.kinast.evenly/voice_commands";
pub const DEFAULT_CREATE_EXPENSE_ACTION: &str = "br.com.kinast.evenly.CREATE_EXPENSE";
pub const DEFAULT_DEEP_LINK_SCHEME: &str = "evenly";
pub const DEFAULT_DEEP_LINK_HOST: &str = "expense";
pub const DEFAULT_METHOD_NAME: &str = "onVoiceCommand";

#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct BridgeConfig {
    pub channel_name: String,
    pub create_expense_action: String,
    pub deep_link_scheme: String,
    pub deep_link_host: String,
    pub method_name: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL_NAME.to_string(),
            create_expense_action: DEFAULT_CREATE_EXPENSE_ACTION.to_string(),
            deep_link_scheme: DEFAULT_DEEP_LINK_SCHEME.to_string(),
            deep_link_host: DEFAULT_DEEP_LINK_HOST.to_string(),
            method_name: DEFAULT_METHOD_NAME.to_string(),
        }
    }
}

impl BridgeConfig {
    /// Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
