use thiserror::Error;

/// Main error type for the timedtext relay
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response status: {0}")]
    UpstreamStatus(String),

    #[error("XML decode error: {0}")]
    Decode(#[from] quick_xml::de::DeError),

    #[error("XML decode error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML decode error: unexpected end of document")]
    UnexpectedEof,

    #[error("Unable to parse {field} {value:?}: {reason}")]
    InvalidTime {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Missing attribute `{attribute}` on <{element}> element")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Invalid upstream URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RelayError>;
