mod messages;

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Error codes defined by the Kafka wire protocol.
///
/// The set is closed and versioned with the protocol; a broker may still send a value
/// outside it, which is why responses carry a [`KError`] rather than an `ErrorCode`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::FromRepr,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
    strum_macros::IntoStaticStr,
)]
#[repr(i16)]
pub enum ErrorCode {
    NoError = 0,
    Unknown = -1,
    OffsetOutOfRange = 1,
    InvalidMessage = 2,
    UnknownTopicOrPartition = 3,
    InvalidMessageSize = 4,
    LeaderNotAvailable = 5,
    NotLeaderForPartition = 6,
    RequestTimedOut = 7,
    BrokerNotAvailable = 8,
    ReplicaNotAvailable = 9,
    MessageSizeTooLarge = 10,
    StaleControllerEpoch = 11,
    OffsetMetadataTooLarge = 12,
    NetworkException = 13,
    OffsetsLoadInProgress = 14,
    ConsumerCoordinatorNotAvailable = 15,
    NotCoordinatorForConsumer = 16,
    InvalidTopic = 17,
    MessageSetSizeTooLarge = 18,
    NotEnoughReplicas = 19,
    NotEnoughReplicasAfterAppend = 20,
    InvalidRequiredAcks = 21,
    IllegalGeneration = 22,
    InconsistentGroupProtocol = 23,
    InvalidGroupId = 24,
    UnknownMemberId = 25,
    InvalidSessionTimeout = 26,
    RebalanceInProgress = 27,
    InvalidCommitOffsetSize = 28,
    TopicAuthorizationFailed = 29,
    GroupAuthorizationFailed = 30,
    ClusterAuthorizationFailed = 31,
    InvalidTimestamp = 32,
    UnsupportedSaslMechanism = 33,
    IllegalSaslState = 34,
    UnsupportedVersion = 35,
    TopicAlreadyExists = 36,
    InvalidPartitions = 37,
    InvalidReplicationFactor = 38,
    InvalidReplicaAssignment = 39,
    InvalidConfig = 40,
    NotController = 41,
    InvalidRequest = 42,
    UnsupportedForMessageFormat = 43,
    PolicyViolation = 44,
    OutOfOrderSequenceNumber = 45,
    DuplicateSequenceNumber = 46,
    InvalidProducerEpoch = 47,
    InvalidTxnState = 48,
    InvalidProducerIdMapping = 49,
    InvalidTransactionTimeout = 50,
    ConcurrentTransactions = 51,
    TransactionCoordinatorFenced = 52,
    TransactionalIdAuthorizationFailed = 53,
    SecurityDisabled = 54,
    OperationNotAttempted = 55,
    KafkaStorage = 56,
    LogDirNotFound = 57,
    SaslAuthenticationFailed = 58,
    UnknownProducerId = 59,
    ReassignmentInProgress = 60,
    DelegationTokenAuthDisabled = 61,
    DelegationTokenNotFound = 62,
    DelegationTokenOwnerMismatch = 63,
    DelegationTokenRequestNotAllowed = 64,
    DelegationTokenAuthorizationFailed = 65,
    DelegationTokenExpired = 66,
    InvalidPrincipalType = 67,
    NonEmptyGroup = 68,
    GroupIdNotFound = 69,
    FetchSessionIdNotFound = 70,
    InvalidFetchSessionEpoch = 71,
    ListenerNotFound = 72,
    TopicDeletionDisabled = 73,
    FencedLeaderEpoch = 74,
    UnknownLeaderEpoch = 75,
    UnsupportedCompressionType = 76,
    StaleBrokerEpoch = 77,
    OffsetNotAvailable = 78,
    MemberIdRequired = 79,
    PreferredLeaderNotAvailable = 80,
    GroupMaxSizeReached = 81,
    FencedInstanceId = 82,
    EligibleLeadersNotAvailable = 83,
    ElectionNotNeeded = 84,
    NoReassignmentInProgress = 85,
    GroupSubscribedToTopic = 86,
    InvalidRecord = 87,
    UnstableOffsetCommit = 88,
}

impl ErrorCode {
    pub fn code(self) -> i16 {
        self as i16
    }

    /// Variant name, e.g. `"TopicAuthorizationFailed"`.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn message(self) -> &'static str {
        messages::message(self)
    }

    pub fn from_code(code: i16) -> Option<Self> {
        Self::from_repr(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A numeric error code as returned by a broker.
///
/// Compared by value. Codes outside [`ErrorCode`] still render, with the raw number
/// embedded in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KError(i16);

impl KError {
    pub const NO_ERROR: Self = Self(0);
    pub const UNKNOWN: Self = Self(-1);

    pub const fn new(code: i16) -> Self {
        Self(code)
    }

    pub const fn code(self) -> i16 {
        self.0
    }

    /// `None` when the broker sent a code this table does not know. Note that `-1`
    /// is known ([`ErrorCode::Unknown`]).
    pub fn known(self) -> Option<ErrorCode> {
        ErrorCode::from_code(self.0)
    }

    /// Code 0 means the request succeeded and must not be treated as a failure.
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    pub fn message(self) -> Cow<'static, str> {
        match self.known() {
            Some(code) => Cow::Borrowed(code.message()),
            None => Cow::Owned(messages::fallback(self.0)),
        }
    }
}

impl fmt::Display for KError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.known() {
            Some(code) => f.write_str(code.message()),
            None => f.write_str(&messages::fallback(self.0)),
        }
    }
}

impl std::error::Error for KError {}

impl From<i16> for KError {
    fn from(code: i16) -> Self {
        Self(code)
    }
}

impl From<ErrorCode> for KError {
    fn from(code: ErrorCode) -> Self {
        Self(code.code())
    }
}

impl From<KError> for i16 {
    fn from(err: KError) -> Self {
        err.0
    }
}

impl PartialEq<ErrorCode> for KError {
    fn eq(&self, other: &ErrorCode) -> bool {
        self.0 == other.code()
    }
}
