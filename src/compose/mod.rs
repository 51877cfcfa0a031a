pub mod format;
pub mod multi;

use std::error::Error as StdError;
use std::fmt;

use crate::compose::format::FormatPolicy;
use crate::compose::multi::MultiError;
use crate::sentinel::Sentinel;
use crate::types::Cause;

/// A [`Sentinel`] with an optional cause.
///
/// Two traversals apply and they differ on purpose:
///
/// - [`StdError::source`] yields the cause only, never the sentinel, so generic
///   chain walkers reach the underlying failure.
/// - [`SentinelError::is`] (and [`is`]) checks the sentinel *and* walks the cause.
#[derive(Debug, Clone)]
pub struct SentinelError {
    sentinel: Sentinel,
    cause: Option<Cause>,
}

impl SentinelError {
    pub fn new(sentinel: Sentinel, cause: Option<Cause>) -> Self {
        Self { sentinel, cause }
    }

    pub fn sentinel(&self) -> Sentinel {
        self.sentinel
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    pub fn is<T>(&self, target: &T) -> bool
    where
        T: StdError + PartialEq + 'static,
    {
        is(&self.sentinel, target) || self.cause.as_ref().is_some_and(|cause| cause.is(target))
    }
}

impl fmt::Display for SentinelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {cause}", self.sentinel),
            None => write!(f, "{}", self.sentinel),
        }
    }
}

impl StdError for SentinelError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(Cause::as_error)
    }
}

impl From<Sentinel> for SentinelError {
    fn from(sentinel: Sentinel) -> Self {
        Self::new(sentinel, None)
    }
}

impl FormatPolicy {
    /// Attach `causes` to `sentinel`. Several causes are aggregated through this policy
    /// first, so the result carries at most one cause.
    pub fn wrap<I>(&self, sentinel: Sentinel, causes: I) -> SentinelError
    where
        I: IntoIterator,
        I::Item: Into<Option<Cause>>,
    {
        SentinelError::new(sentinel, self.aggregate(causes))
    }
}

/// [`FormatPolicy::wrap`] on the process-wide policy.
pub fn wrap<I>(sentinel: Sentinel, causes: I) -> SentinelError
where
    I: IntoIterator,
    I::Item: Into<Option<Cause>>,
{
    FormatPolicy::global().wrap(sentinel, causes)
}

/// Whether `target` is `err` or anything identity-reachable from it.
///
/// Follows sentinels of wrapped errors, every member of an aggregate, and plain
/// `source()` links of foreign errors.
pub fn is<T>(err: &(dyn StdError + 'static), target: &T) -> bool
where
    T: StdError + PartialEq + 'static,
{
    let mut current = Some(err);
    while let Some(err) = current {
        if err
            .downcast_ref::<T>()
            .is_some_and(|candidate| candidate == target)
        {
            return true;
        }
        if let Some(wrapped) = err.downcast_ref::<SentinelError>() {
            return wrapped.is(target);
        }
        if let Some(multi) = err.downcast_ref::<MultiError>() {
            return multi.is(target);
        }
        current = err.source();
    }
    false
}

/// `err` followed by its `source()` chain. Sentinels of wrapped errors are not visited.
pub fn chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |&err| err.source())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use std::error::Error as StdError;

    use super::{SentinelError, chain, is};
    use crate::compose::format::FormatPolicy;
    use crate::compose::multi::MultiError;
    use crate::types::Cause;
    use crate::{ConfigurationError, KError, Sentinel};

    #[derive(thiserror::Error, Debug)]
    #[error("dial tcp: connection refused")]
    struct Refused;

    #[derive(thiserror::Error, Debug)]
    #[error("metadata refresh failed")]
    struct Refresh {
        #[source]
        inner: SentinelError,
    }

    #[test]
    fn bare_wrap_renders_as_the_sentinel() {
        let policy = FormatPolicy::default();
        let err = policy.wrap(Sentinel::OutOfBrokers, Vec::<Cause>::new());
        assert_eq!(err.to_string(), Sentinel::OutOfBrokers.to_string());
        assert!(err.cause().is_none());
        assert!(err.source().is_none());
        assert_eq!(
            SentinelError::from(Sentinel::OutOfBrokers).to_string(),
            err.to_string()
        );
    }

    #[test]
    fn single_cause_is_joined_with_a_colon() {
        let policy = FormatPolicy::default();
        let err = policy.wrap(Sentinel::OutOfBrokers, [Cause::from(Refused)]);
        assert_eq!(
            err.to_string(),
            "kafka: client has run out of available brokers to talk to: dial tcp: connection refused"
        );
    }

    #[test]
    fn several_causes_are_aggregated_first() {
        let policy = FormatPolicy::default();
        let causes = [Cause::from(Refused), Cause::from(KError::new(8))];
        let err = policy.wrap(Sentinel::OutOfBrokers, causes.clone());
        let expected = format!(
            "{}: {}",
            Sentinel::OutOfBrokers,
            policy.aggregate(causes).unwrap()
        );
        assert_eq!(err.to_string(), expected);
        assert!(err.cause().unwrap().downcast_ref::<MultiError>().is_some());
    }

    #[test]
    fn identity_checks_sentinel_and_cause() {
        let policy = FormatPolicy::default();
        let err = policy.wrap(
            Sentinel::IncompleteResponse,
            [Cause::from(Sentinel::ClosedClient)],
        );
        assert!(err.is(&Sentinel::IncompleteResponse));
        assert!(err.is(&Sentinel::ClosedClient));
        assert!(!err.is(&Sentinel::OutOfBrokers));
    }

    #[test]
    fn identity_survives_nested_wraps() {
        let policy = FormatPolicy::default();
        let inner = policy.wrap(Sentinel::NotConnected, [Cause::from(KError::new(13))]);
        let outer = policy.wrap(
            Sentinel::OutOfBrokers,
            [
                Cause::from(inner),
                Cause::from(ConfigurationError::new("x")),
            ],
        );
        assert!(is(&outer, &Sentinel::OutOfBrokers));
        assert!(is(&outer, &Sentinel::NotConnected));
        assert!(is(&outer, &KError::new(13)));
        assert!(is(&outer, &ConfigurationError::new("x")));
        assert!(!is(&outer, &ConfigurationError::new("y")));
    }

    #[test]
    fn identity_follows_foreign_sources() {
        let policy = FormatPolicy::default();
        let err = Refresh {
            inner: policy.wrap(Sentinel::ControllerNotAvailable, [Cause::from(Refused)]),
        };
        assert!(is(&err, &Sentinel::ControllerNotAvailable));
        assert!(!is(&err, &Sentinel::ClosedClient));
    }

    #[test]
    fn unwrap_yields_the_cause_never_the_sentinel() {
        let policy = FormatPolicy::default();
        let cause = Cause::from(KError::new(29));
        let err = policy.wrap(Sentinel::DeleteRecords, [cause.clone()]);

        assert!(err.cause().unwrap().ptr_eq(&cause));
        let source = err.source().unwrap();
        assert_eq!(source.downcast_ref::<KError>(), Some(&KError::new(29)));
        assert!(source.downcast_ref::<Sentinel>().is_none());

        let walked: Vec<String> = chain(&err).map(ToString::to_string).collect();
        assert_eq!(walked, vec![err.to_string(), KError::new(29).to_string()]);
    }

    #[test]
    fn rendering_is_repeatable() {
        let policy = FormatPolicy::default();
        let err = policy.wrap(
            Sentinel::InvalidPartition,
            [Cause::from(Refused), Cause::from(KError::new(37))],
        );
        assert_eq!(err.to_string(), err.to_string());
    }
}
