/// Encoding a request failed, e.g. a string longer than the protocol's `i16` length allows.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("kafka: error encoding packet: {info}")]
pub struct PacketEncodingError {
    pub info: String,
}

/// A broker response could not be decoded (bad CRC, bad length, invalid value).
/// Truncation is reported as [`crate::Sentinel::InsufficientData`] instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("kafka: error decoding packet: {info}")]
pub struct PacketDecodingError {
    pub info: String,
}

/// Returned by constructors when the supplied configuration is invalid.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("kafka: invalid configuration ({0})")]
pub struct ConfigurationError(pub String);

impl PacketEncodingError {
    pub fn new(info: impl Into<String>) -> Self {
        Self { info: info.into() }
    }
}

impl PacketDecodingError {
    pub fn new(info: impl Into<String>) -> Self {
        Self { info: info.into() }
    }
}

impl ConfigurationError {
    pub fn new(info: impl Into<String>) -> Self {
        Self(info.into())
    }

    pub fn info(&self) -> &str {
        &self.0
    }
}
