use std::error::Error as StdError;
use std::fmt;

use crate::compose::format::{ErrorFormat, FormatPolicy};
use crate::types::Cause;

/// Several independent failures from one logical operation, reported as one error.
///
/// Members keep their input order. The text comes from the [`FormatPolicy`] the
/// aggregate was built with, looked up at render time.
#[derive(Clone)]
pub struct MultiError {
    errors: Vec<Cause>,
    policy: FormatPolicy,
}

impl MultiError {
    pub fn errors(&self) -> &[Cause] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn policy(&self) -> &FormatPolicy {
        &self.policy
    }

    /// Render with `format` instead of the policy's current one.
    pub fn render_with(&self, format: &ErrorFormat) -> String {
        format.render(&self.errors)
    }

    /// True when any member matches `target`. Member order does not matter here.
    pub fn is<T>(&self, target: &T) -> bool
    where
        T: StdError + PartialEq + 'static,
    {
        self.errors.iter().any(|err| err.is(target))
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.policy.render(&self.errors))
    }
}

impl fmt::Debug for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiError")
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

// No `source()`: a single-parent chain cannot hold siblings. `is` visits every member.
impl StdError for MultiError {}

impl FormatPolicy {
    /// Fold `errors` into at most one error rendered through this policy.
    ///
    /// Absent entries are dropped. Nothing left gives `None`; a single survivor is
    /// returned as is; otherwise a [`MultiError`] is built. Members that are
    /// themselves aggregates are flattened into the new one.
    pub fn aggregate<I>(&self, errors: I) -> Option<Cause>
    where
        I: IntoIterator,
        I::Item: Into<Option<Cause>>,
    {
        let mut present: Vec<Cause> = errors.into_iter().filter_map(Into::into).collect();
        if present.len() <= 1 {
            return present.pop();
        }

        let mut members = Vec::with_capacity(present.len());
        for cause in present {
            if let Some(multi) = cause.downcast_ref::<MultiError>() {
                members.extend(multi.errors.iter().cloned());
                continue;
            }
            members.push(cause);
        }
        tracing::trace!(count = members.len(), "aggregated errors");

        Some(Cause::new(MultiError {
            errors: members,
            policy: self.clone(),
        }))
    }
}

/// [`FormatPolicy::aggregate`] on the process-wide policy.
pub fn aggregate<I>(errors: I) -> Option<Cause>
where
    I: IntoIterator,
    I::Item: Into<Option<Cause>>,
{
    FormatPolicy::global().aggregate(errors)
}
