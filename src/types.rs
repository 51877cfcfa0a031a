use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// A shared handle to any error participating in a wrap or an aggregate.
///
/// Cloning is a reference-count bump, so wrapped and aggregate errors stay cheap to
/// copy between tasks. Built from any `Error + Send + Sync + 'static` via `From`.
#[derive(Clone)]
pub struct Cause(Arc<dyn StdError + Send + Sync + 'static>);

impl Cause {
    pub fn new<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(err))
    }

    /// Adopt an already shared error without adding another layer.
    pub fn from_arc(err: Arc<dyn StdError + Send + Sync + 'static>) -> Self {
        Self(err)
    }

    /// Adopt a boxed error as the cause itself. `Box<dyn Error>` does not implement
    /// `Error`, so it cannot go through `From`.
    pub fn from_boxed(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self(Arc::from(err))
    }

    pub fn as_error(&self) -> &(dyn StdError + 'static) {
        &*self.0
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.as_error().downcast_ref::<E>()
    }

    /// Identity test, see [`crate::is`].
    pub fn is<T>(&self, target: &T) -> bool
    where
        T: StdError + PartialEq + 'static,
    {
        crate::compose::is(self.as_error(), target)
    }

    /// True when both handles point at the same error value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self::new(err)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;
    use std::sync::Arc;

    use super::Cause;
    use crate::{KError, Sentinel};

    #[test]
    fn renders_like_the_inner_error() {
        let cause = Cause::from(Sentinel::NotConnected);
        assert_eq!(cause.to_string(), Sentinel::NotConnected.to_string());
        assert_eq!(format!("{cause:?}"), "NotConnected");
    }

    #[test]
    fn clones_share_the_value() {
        let cause = Cause::from(KError::new(7));
        let copy = cause.clone();
        assert!(cause.ptr_eq(&copy));
        assert!(!cause.ptr_eq(&Cause::from(KError::new(7))));
    }

    #[test]
    fn boxed_errors_keep_their_concrete_type() {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(KError::new(13));
        let cause = Cause::from_boxed(boxed);
        assert_eq!(cause.downcast_ref::<KError>(), Some(&KError::new(13)));
        assert!(cause.is(&KError::new(13)));

        let reset = Cause::from_boxed("connection reset by peer".into());
        assert_eq!(reset.to_string(), "connection reset by peer");
        let wrapped = Sentinel::NotConnected.wrap([reset]);
        assert_eq!(
            wrapped.to_string(),
            "kafka: broker not connected: connection reset by peer"
        );
    }

    #[test]
    fn downcast_reaches_concrete_type() {
        let cause = Cause::from_arc(Arc::new(KError::new(3)));
        assert_eq!(cause.downcast_ref::<KError>(), Some(&KError::new(3)));
        assert!(cause.downcast_ref::<Sentinel>().is_none());
    }
}
