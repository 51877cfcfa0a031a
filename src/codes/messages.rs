use super::ErrorCode;

// Adapted from https://kafka.apache.org/protocol#protocol_error_codes
pub(super) fn message(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::NoError => "kafka server: Not an error, why are you printing me?",
        ErrorCode::Unknown => "kafka server: Unexpected (unknown?) server error",
        ErrorCode::OffsetOutOfRange => {
            "kafka server: The requested offset is outside the range of offsets maintained by the server for the given topic/partition"
        }
        ErrorCode::InvalidMessage => "kafka server: Message contents does not match its CRC",
        ErrorCode::UnknownTopicOrPartition => {
            "kafka server: Request was for a topic or partition that does not exist on this broker"
        }
        ErrorCode::InvalidMessageSize => "kafka server: The message has a negative size",
        ErrorCode::LeaderNotAvailable => {
            "kafka server: In the middle of a leadership election, there is currently no leader for this partition and hence it is unavailable for writes"
        }
        ErrorCode::NotLeaderForPartition => {
            "kafka server: Tried to send a message to a replica that is not the leader for some partition. Your metadata is out of date"
        }
        ErrorCode::RequestTimedOut => {
            "kafka server: Request exceeded the user-specified time limit in the request"
        }
        ErrorCode::BrokerNotAvailable => {
            "kafka server: Broker not available. Not a client facing error, we should never receive this!!!"
        }
        ErrorCode::ReplicaNotAvailable => {
            "kafka server: Replica information not available, one or more brokers are down"
        }
        ErrorCode::MessageSizeTooLarge => {
            "kafka server: Message was too large, server rejected it to avoid allocation error"
        }
        ErrorCode::StaleControllerEpoch => {
            "kafka server: StaleControllerEpochCode (internal error code for broker-to-broker communication)"
        }
        ErrorCode::OffsetMetadataTooLarge => {
            "kafka server: Specified a string larger than the configured maximum for offset metadata"
        }
        ErrorCode::NetworkException => {
            "kafka server: The server disconnected before a response was received"
        }
        ErrorCode::OffsetsLoadInProgress => {
            "kafka server: The broker is still loading offsets after a leader change for that offset's topic partition"
        }
        ErrorCode::ConsumerCoordinatorNotAvailable => {
            "kafka server: Offset's topic has not yet been created"
        }
        ErrorCode::NotCoordinatorForConsumer => {
            "kafka server: Request was for a consumer group that is not coordinated by this broker"
        }
        ErrorCode::InvalidTopic => {
            "kafka server: The request attempted to perform an operation on an invalid topic"
        }
        ErrorCode::MessageSetSizeTooLarge => {
            "kafka server: The request included message batch larger than the configured segment size on the server"
        }
        ErrorCode::NotEnoughReplicas => {
            "kafka server: Messages are rejected since there are fewer in-sync replicas than required"
        }
        ErrorCode::NotEnoughReplicasAfterAppend => {
            "kafka server: Messages are written to the log, but to fewer in-sync replicas than required"
        }
        ErrorCode::InvalidRequiredAcks => {
            "kafka server: The number of required acks is invalid (should be either -1, 0, or 1)"
        }
        ErrorCode::IllegalGeneration => {
            "kafka server: The provided generation id is not the current generation"
        }
        ErrorCode::InconsistentGroupProtocol => {
            "kafka server: The provider group protocol type is incompatible with the other members"
        }
        ErrorCode::InvalidGroupId => "kafka server: The provided group id was empty",
        ErrorCode::UnknownMemberId => {
            "kafka server: The provided member is not known in the current generation"
        }
        ErrorCode::InvalidSessionTimeout => {
            "kafka server: The provided session timeout is outside the allowed range"
        }
        ErrorCode::RebalanceInProgress => {
            "kafka server: A rebalance for the group is in progress. Please re-join the group"
        }
        ErrorCode::InvalidCommitOffsetSize => {
            "kafka server: The provided commit metadata was too large"
        }
        ErrorCode::TopicAuthorizationFailed => {
            "kafka server: The client is not authorized to access this topic"
        }
        ErrorCode::GroupAuthorizationFailed => {
            "kafka server: The client is not authorized to access this group"
        }
        ErrorCode::ClusterAuthorizationFailed => {
            "kafka server: The client is not authorized to send this request type"
        }
        ErrorCode::InvalidTimestamp => {
            "kafka server: The timestamp of the message is out of acceptable range"
        }
        ErrorCode::UnsupportedSaslMechanism => {
            "kafka server: The broker does not support the requested SASL mechanism"
        }
        ErrorCode::IllegalSaslState => {
            "kafka server: Request is not valid given the current SASL state"
        }
        ErrorCode::UnsupportedVersion => "kafka server: The version of API is not supported",
        ErrorCode::TopicAlreadyExists => "kafka server: Topic with this name already exists",
        ErrorCode::InvalidPartitions => "kafka server: Number of partitions is invalid",
        ErrorCode::InvalidReplicationFactor => "kafka server: Replication-factor is invalid",
        ErrorCode::InvalidReplicaAssignment => "kafka server: Replica assignment is invalid",
        ErrorCode::InvalidConfig => "kafka server: Configuration is invalid",
        ErrorCode::NotController => {
            "kafka server: This is not the correct controller for this cluster"
        }
        ErrorCode::InvalidRequest => {
            "kafka server: This most likely occurs because of a request being malformed by the client library or the message was sent to an incompatible broker. See the broker logs for more details"
        }
        ErrorCode::UnsupportedForMessageFormat => {
            "kafka server: The requested operation is not supported by the message format version"
        }
        ErrorCode::PolicyViolation => {
            "kafka server: Request parameters do not satisfy the configured policy"
        }
        ErrorCode::OutOfOrderSequenceNumber => {
            "kafka server: The broker received an out of order sequence number"
        }
        ErrorCode::DuplicateSequenceNumber => {
            "kafka server: The broker received a duplicate sequence number"
        }
        ErrorCode::InvalidProducerEpoch => {
            "kafka server: Producer attempted an operation with an old epoch"
        }
        ErrorCode::InvalidTxnState => {
            "kafka server: The producer attempted a transactional operation in an invalid state"
        }
        ErrorCode::InvalidProducerIdMapping => {
            "kafka server: The producer attempted to use a producer id which is not currently assigned to its transactional id"
        }
        ErrorCode::InvalidTransactionTimeout => {
            "kafka server: The transaction timeout is larger than the maximum value allowed by the broker (as configured by max.transaction.timeout.ms)"
        }
        ErrorCode::ConcurrentTransactions => {
            "kafka server: The producer attempted to update a transaction while another concurrent operation on the same transaction was ongoing"
        }
        ErrorCode::TransactionCoordinatorFenced => {
            "kafka server: The transaction coordinator sending a WriteTxnMarker is no longer the current coordinator for a given producer"
        }
        ErrorCode::TransactionalIdAuthorizationFailed => {
            "kafka server: Transactional ID authorization failed"
        }
        ErrorCode::SecurityDisabled => "kafka server: Security features are disabled",
        ErrorCode::OperationNotAttempted => {
            "kafka server: The broker did not attempt to execute this operation"
        }
        ErrorCode::KafkaStorage => {
            "kafka server: Disk error when trying to access log file on the disk"
        }
        ErrorCode::LogDirNotFound => {
            "kafka server: The specified log directory is not found in the broker config"
        }
        ErrorCode::SaslAuthenticationFailed => "kafka server: SASL Authentication failed",
        ErrorCode::UnknownProducerId => {
            "kafka server: The broker could not locate the producer metadata associated with the Producer ID"
        }
        ErrorCode::ReassignmentInProgress => {
            "kafka server: A partition reassignment is in progress"
        }
        ErrorCode::DelegationTokenAuthDisabled => {
            "kafka server: Delegation Token feature is not enabled"
        }
        ErrorCode::DelegationTokenNotFound => {
            "kafka server: Delegation Token is not found on server"
        }
        ErrorCode::DelegationTokenOwnerMismatch => {
            "kafka server: Specified Principal is not valid Owner/Renewer"
        }
        ErrorCode::DelegationTokenRequestNotAllowed => {
            "kafka server: Delegation Token requests are not allowed on PLAINTEXT/1-way SSL channels and on delegation token authenticated channels"
        }
        ErrorCode::DelegationTokenAuthorizationFailed => {
            "kafka server: Delegation Token authorization failed"
        }
        ErrorCode::DelegationTokenExpired => "kafka server: Delegation Token is expired",
        ErrorCode::InvalidPrincipalType => "kafka server: Supplied principalType is not supported",
        ErrorCode::NonEmptyGroup => "kafka server: The group is not empty",
        ErrorCode::GroupIdNotFound => "kafka server: The group id does not exist",
        ErrorCode::FetchSessionIdNotFound => "kafka server: The fetch session ID was not found",
        ErrorCode::InvalidFetchSessionEpoch => "kafka server: The fetch session epoch is invalid",
        ErrorCode::ListenerNotFound => {
            "kafka server: There is no listener on the leader broker that matches the listener on which metadata request was processed"
        }
        ErrorCode::TopicDeletionDisabled => "kafka server: Topic deletion is disabled",
        ErrorCode::FencedLeaderEpoch => {
            "kafka server: The leader epoch in the request is older than the epoch on the broker"
        }
        ErrorCode::UnknownLeaderEpoch => {
            "kafka server: The leader epoch in the request is newer than the epoch on the broker"
        }
        ErrorCode::UnsupportedCompressionType => {
            "kafka server: The requesting client does not support the compression type of given partition"
        }
        ErrorCode::StaleBrokerEpoch => "kafka server: Broker epoch has changed",
        ErrorCode::OffsetNotAvailable => {
            "kafka server: The leader high watermark has not caught up from a recent leader election so the offsets cannot be guaranteed to be monotonically increasing"
        }
        ErrorCode::MemberIdRequired => {
            "kafka server: The group member needs to have a valid member id before actually entering a consumer group"
        }
        ErrorCode::PreferredLeaderNotAvailable => {
            "kafka server: The preferred leader was not available"
        }
        ErrorCode::GroupMaxSizeReached => {
            "kafka server: Consumer group The consumer group has reached its max size. already has the configured maximum number of members"
        }
        ErrorCode::FencedInstanceId => {
            "kafka server: The broker rejected this static consumer since another consumer with the same group.instance.id has registered with a different member.id"
        }
        ErrorCode::EligibleLeadersNotAvailable => {
            "kafka server: Eligible topic partition leaders are not available"
        }
        ErrorCode::ElectionNotNeeded => {
            "kafka server: Leader election not needed for topic partition"
        }
        ErrorCode::NoReassignmentInProgress => {
            "kafka server: No partition reassignment is in progress"
        }
        ErrorCode::GroupSubscribedToTopic => {
            "kafka server: Deleting offsets of a topic is forbidden while the consumer group is actively subscribed to it"
        }
        ErrorCode::InvalidRecord => {
            "kafka server: This record has failed the validation on broker and hence will be rejected"
        }
        ErrorCode::UnstableOffsetCommit => {
            "kafka server: There are unstable offsets that need to be cleared"
        }
    }
}

pub(super) fn fallback(code: i16) -> String {
    format!("Unknown error, how did this happen? Error code = {code}")
}
