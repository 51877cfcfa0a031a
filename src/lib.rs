#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod codes;
pub mod compose;
pub mod error;
pub mod sentinel;
pub mod types;

pub use codes::{ErrorCode, KError};
pub use compose::format::{
    ErrorFormat, FormatPolicy, FormatStyle, condensed, list, set_multi_error_format,
};
pub use compose::multi::{MultiError, aggregate};
pub use compose::{SentinelError, chain, is, wrap};
pub use error::{ConfigurationError, PacketDecodingError, PacketEncodingError};
pub use sentinel::Sentinel;
pub use types::Cause;
