use crate::compose::SentinelError;
use crate::types::Cause;

/// Client-local failure categories.
///
/// Each variant is one identity; two sentinels are equal only when they are the same
/// variant, whatever their text. The text is fixed per variant.
#[derive(
    thiserror::Error,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
pub enum Sentinel {
    /// Every broker errored or failed to respond.
    #[error("kafka: client has run out of available brokers to talk to")]
    OutOfBrokers,

    #[error("kafka: broker for ID is not found")]
    BrokerNotFound,

    /// A method was called on a client that has been closed.
    #[error("kafka: tried to use a client that was closed")]
    ClosedClient,

    /// The response was syntactically valid but lacked expected topic/partition blocks.
    #[error("kafka: response did not contain all the expected topic/partition blocks")]
    IncompleteResponse,

    /// A partitioner returned an index outside `[0, partitions)`.
    #[error("kafka: partitioner returned an invalid partition index")]
    InvalidPartition,

    #[error("kafka: broker connection already initiated")]
    AlreadyConnected,

    #[error("kafka: broker not connected")]
    NotConnected,

    /// Packet truncated while decoding. Expected for fetches, where the broker may return
    /// a partial message at the end of a set.
    #[error("kafka: insufficient data to decode packet, more bytes expected")]
    InsufficientData,

    #[error("kafka: message received by producer in process of shutting down")]
    ShuttingDown,

    #[error("kafka: message is larger than Consumer.Fetch.Max")]
    MessageTooLarge,

    /// A partition consumer parsed a record batch without advancing its offset.
    #[error("kafka: consumer offset was not advanced after a RecordBatch")]
    ConsumerOffsetNotAdvanced,

    /// The broker did not report a usable controller id (brokers older than 0.10.0.0).
    #[error("kafka: controller is not available")]
    ControllerNotAvailable,

    #[error("kafka: no specific topics to update metadata")]
    NoTopicsToUpdateMetadata,

    #[error("kafka: unknown SCRAM mechanism provided")]
    UnknownScramMechanism,

    #[error("failed to reassign partitions for topic")]
    ReassignPartitions,

    #[error("kafka server: failed to delete records")]
    DeleteRecords,
}

impl Sentinel {
    /// Variant name, e.g. `"ClosedClient"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Shorthand for [`crate::wrap`] with this sentinel.
    pub fn wrap<I>(self, causes: I) -> SentinelError
    where
        I: IntoIterator,
        I::Item: Into<Option<Cause>>,
    {
        crate::compose::wrap(self, causes)
    }
}
