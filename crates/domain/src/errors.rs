use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid URI {uri}: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Channel closed: {channel}")]
    ChannelClosed { channel: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
