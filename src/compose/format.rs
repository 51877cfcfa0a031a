use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::types::Cause;

pub type FormatFn = dyn Fn(&[Cause]) -> String + Send + Sync;

/// Renders the members of an aggregate into one string.
#[derive(Clone)]
pub struct ErrorFormat(Arc<FormatFn>);

impl ErrorFormat {
    pub fn new<F>(format: F) -> Self
    where
        F: Fn(&[Cause]) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(format))
    }

    pub fn condensed() -> Self {
        Self::new(condensed)
    }

    pub fn list() -> Self {
        Self::new(list)
    }

    pub fn render(&self, errors: &[Cause]) -> String {
        (self.0)(errors)
    }
}

impl Default for ErrorFormat {
    fn default() -> Self {
        Self::condensed()
    }
}

impl fmt::Debug for ErrorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ErrorFormat(..)")
    }
}

impl From<FormatStyle> for ErrorFormat {
    fn from(style: FormatStyle) -> Self {
        match style {
            FormatStyle::Condensed => Self::condensed(),
            FormatStyle::List => Self::list(),
        }
    }
}

/// Built-in layouts, selectable from a host application's config file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FormatStyle {
    #[default]
    Condensed,
    List,
}

/// A single error renders as itself. Several render as an `"<n> errors occurred:"` header
/// followed by one `* <error>` bullet per line, each bullet prefixed by a tab.
pub fn condensed(errors: &[Cause]) -> String {
    if let [only] = errors {
        return only.to_string();
    }
    format!("{} errors occurred:\n\t{}\n", errors.len(), bullets(errors))
}

/// The classic multi-error layout: always a header, and a trailing blank line.
pub fn list(errors: &[Cause]) -> String {
    if let [only] = errors {
        return format!("1 error occurred:\n\t* {only}\n\n");
    }
    format!(
        "{} errors occurred:\n\t{}\n\n",
        errors.len(),
        bullets(errors)
    )
}

fn bullets(errors: &[Cause]) -> String {
    errors
        .iter()
        .map(|err| format!("* {err}"))
        .collect::<Vec<_>>()
        .join("\n\t")
}

static GLOBAL: LazyLock<FormatPolicy> = LazyLock::new(FormatPolicy::default);

/// Shared slot holding the current [`ErrorFormat`].
///
/// Aggregates built through a policy keep a handle to it and look the format up each
/// time they are rendered, so [`FormatPolicy::set`] also changes the text of aggregates
/// that already exist. Writes are not ordered against concurrent renders; set the
/// format once before errors start flowing.
#[derive(Clone, Default)]
pub struct FormatPolicy {
    current: Arc<RwLock<ErrorFormat>>,
}

impl FormatPolicy {
    pub fn new(format: ErrorFormat) -> Self {
        Self {
            current: Arc::new(RwLock::new(format)),
        }
    }

    pub fn from_style(style: FormatStyle) -> Self {
        Self::new(style.into())
    }

    /// The process-wide policy used by [`crate::wrap`] and [`crate::aggregate`].
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    pub fn current(&self) -> ErrorFormat {
        let guard = self.current.read().unwrap_or_else(|poisoned| {
            tracing::warn!("multi-error format lock poisoned, reading last value");
            PoisonError::into_inner(poisoned)
        });
        guard.clone()
    }

    pub fn set(&self, format: ErrorFormat) {
        let mut guard = self.current.write().unwrap_or_else(|poisoned| {
            tracing::warn!("multi-error format lock poisoned, overwriting");
            PoisonError::into_inner(poisoned)
        });
        *guard = format;
        tracing::debug!("multi-error format replaced");
    }

    pub fn set_style(&self, style: FormatStyle) {
        self.set(style.into());
    }

    pub fn reset(&self) {
        self.set(ErrorFormat::default());
    }

    // The lock is released before the format runs: members may be aggregates
    // sharing this policy.
    pub fn render(&self, errors: &[Cause]) -> String {
        self.current().render(errors)
    }

    /// True when both handles share one slot.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.current, &other.current)
    }
}

impl fmt::Debug for FormatPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatPolicy").finish_non_exhaustive()
    }
}

/// Replace the format of the process-wide policy.
pub fn set_multi_error_format(format: ErrorFormat) {
    FormatPolicy::global().set(format);
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::{ErrorFormat, FormatPolicy, FormatStyle, condensed, list};
    use crate::types::Cause;
    use crate::{KError, Sentinel};

    fn causes() -> Vec<Cause> {
        vec![
            Cause::from(Sentinel::NotConnected),
            Cause::from(KError::new(7)),
        ]
    }

    #[test]
    fn condensed_passes_a_single_error_through() {
        let one = vec![Cause::from(Sentinel::ShuttingDown)];
        assert_eq!(condensed(&one), Sentinel::ShuttingDown.to_string());
    }

    #[test]
    fn condensed_bullets_several_errors() {
        assert_eq!(
            condensed(&causes()),
            "2 errors occurred:\n\
             \t* kafka: broker not connected\n\
             \t* kafka server: Request exceeded the user-specified time limit in the request\n"
        );
    }

    #[test]
    fn list_always_has_a_header() {
        let one = vec![Cause::from(Sentinel::ShuttingDown)];
        assert_eq!(
            list(&one),
            "1 error occurred:\n\t* kafka: message received by producer in process of shutting down\n\n"
        );
        let several = list(&causes());
        let header = "2 errors occurred:\n\t* kafka: broker not connected\n\t* ";
        assert!(several.starts_with(header));
        assert!(several.ends_with("\n\n"));
    }

    #[test]
    fn style_parses_from_config_strings() {
        assert_eq!("list".parse::<FormatStyle>().unwrap(), FormatStyle::List);
        assert_eq!(
            "condensed".parse::<FormatStyle>().unwrap(),
            FormatStyle::Condensed
        );
        assert!("verbose".parse::<FormatStyle>().is_err());
        assert_eq!(FormatStyle::default(), FormatStyle::Condensed);
        assert_eq!(FormatStyle::List.to_string(), "list");
    }

    #[test]
    fn policy_set_and_reset() {
        let policy = FormatPolicy::default();
        let errors = causes();
        let default_text = policy.render(&errors);

        policy.set(ErrorFormat::new(|errs| format!("{} failures", errs.len())));
        assert_eq!(policy.render(&errors), "2 failures");

        policy.reset();
        assert_eq!(policy.render(&errors), default_text);

        policy.set_style(FormatStyle::List);
        assert_eq!(policy.render(&errors), list(&errors));
    }

    #[test]
    fn clones_share_one_slot() {
        let policy = FormatPolicy::from_style(FormatStyle::Condensed);
        let handle = policy.clone();
        assert!(policy.same_as(&handle));
        assert!(!policy.same_as(&FormatPolicy::default()));

        handle.set(ErrorFormat::new(|_| "shared".to_string()));
        assert_eq!(policy.render(&causes()), "shared");
    }
}
