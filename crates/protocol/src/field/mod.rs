//! Field validation module
//!
//! Proves application-supplied strings safe to embed into an outgoing
//! RFC 5424 record before any serialization happens. A string that passes
//! is guaranteed two properties, and only these two: its byte length is
//! within its field kind's bound, and every byte satisfies the kind's
//! character-set role. Nothing here normalizes, truncates, or escapes.
//!
//! - `model.rs`: field kinds, charset roles, and the error type
//! - `charset.rs`: the two byte scanners
//! - `check.rs`: length check, the generic validator, per-kind entry points

pub mod charset;
pub mod check;
pub mod model;

// Re-export the working surface
pub use check::{
    validate, validate_app_name, validate_app_name_length, validate_element_name,
    validate_element_name_length, validate_hostname, validate_hostname_length, validate_length,
    validate_msgid, validate_msgid_length, validate_param_name, validate_param_name_length,
    validate_procid, validate_procid_length, validate_with,
};
pub use model::{CharsetRole, FieldError, FieldKind};

// Default maxima, in bytes (RFC 5424 field widths)
pub const MAX_APP_NAME_LENGTH: usize = 48;
pub const MAX_HOSTNAME_LENGTH: usize = 255;
pub const MAX_MSGID_LENGTH: usize = 32;
pub const MAX_PROCID_LENGTH: usize = 128;
pub const MAX_ELEMENT_NAME_LENGTH: usize = 32;
pub const MAX_PARAM_NAME_LENGTH: usize = 32;
