//! Length check and the per-kind validation pipeline.
//!
//! Every validator is a two-stage pipeline: length first, charset second,
//! short-circuiting on the first failure so exactly one error is produced
//! per call. Success returns the computed byte length for reuse by entry
//! construction; a length failure carries it inside the error instead.

use super::charset;
use super::model::{CharsetRole, FieldError, FieldKind};
use crate::conf::FieldLimits;

impl FieldKind {
    /// The default maximum byte length for this kind.
    pub fn max_len(&self) -> usize {
        match self {
            FieldKind::AppName => super::MAX_APP_NAME_LENGTH,
            FieldKind::Hostname => super::MAX_HOSTNAME_LENGTH,
            FieldKind::MsgId => super::MAX_MSGID_LENGTH,
            FieldKind::ProcId => super::MAX_PROCID_LENGTH,
            FieldKind::ElementName => super::MAX_ELEMENT_NAME_LENGTH,
            FieldKind::ParamName => super::MAX_PARAM_NAME_LENGTH,
        }
    }
}

/// Compare the string's byte length against `max`.
///
/// Lengths are counted in raw bytes, never decoded characters, because the
/// downstream wire-format length fields are byte-counted.
fn check_length(value: &str, max: usize, kind: FieldKind) -> Result<usize, FieldError> {
    let length = value.len();
    if length > max {
        return Err(FieldError::TooLong { kind, length, max });
    }

    Ok(length)
}

/// Validate `value` for `kind` against the default limits.
///
/// Returns the byte length on success. The length stage runs first; an
/// over-long string is rejected before any byte is inspected.
pub fn validate(kind: FieldKind, value: &str) -> Result<usize, FieldError> {
    run(kind, value, kind.max_len())
}

/// Validate `value` for `kind` against caller-supplied limits.
pub fn validate_with(
    kind: FieldKind,
    value: &str,
    limits: &FieldLimits,
) -> Result<usize, FieldError> {
    run(kind, value, limits.max_len(kind))
}

/// Length-only validation for `kind` against the default limits.
///
/// Public contract, not a shortcut: callers that apply their own character
/// policy, or want a cheap pre-check before the scan, use this directly.
pub fn validate_length(kind: FieldKind, value: &str) -> Result<usize, FieldError> {
    checked(kind, check_length(value, kind.max_len(), kind))
}

fn run(kind: FieldKind, value: &str, max: usize) -> Result<usize, FieldError> {
    let length = checked(kind, check_length(value, max, kind))?;

    let scanned = match kind.charset() {
        CharsetRole::PrintableAscii => charset::printable_ascii(value),
        CharsetRole::Identifier => charset::name_chars(value),
    };
    checked(kind, scanned)?;

    Ok(length)
}

/// Trace rejections on their way out. The event is diagnostic only; the
/// error value itself is the caller's signal.
fn checked<T>(kind: FieldKind, result: Result<T, FieldError>) -> Result<T, FieldError> {
    if let Err(ref err) = result {
        tracing::debug!(field = kind.as_str(), %err, "field validation failed");
    }
    result
}

/// Validate an APP-NAME value: at most 48 bytes of printable ASCII.
pub fn validate_app_name(value: &str) -> Result<usize, FieldError> {
    validate(FieldKind::AppName, value)
}

/// Length-only check for an APP-NAME value.
pub fn validate_app_name_length(value: &str) -> Result<usize, FieldError> {
    validate_length(FieldKind::AppName, value)
}

/// Validate a HOSTNAME value: at most 255 bytes of printable ASCII.
pub fn validate_hostname(value: &str) -> Result<usize, FieldError> {
    validate(FieldKind::Hostname, value)
}

/// Length-only check for a HOSTNAME value.
pub fn validate_hostname_length(value: &str) -> Result<usize, FieldError> {
    validate_length(FieldKind::Hostname, value)
}

/// Validate a MSGID value: at most 32 bytes of printable ASCII.
pub fn validate_msgid(value: &str) -> Result<usize, FieldError> {
    validate(FieldKind::MsgId, value)
}

/// Length-only check for a MSGID value.
pub fn validate_msgid_length(value: &str) -> Result<usize, FieldError> {
    validate_length(FieldKind::MsgId, value)
}

/// Validate a PROCID value: at most 128 bytes of printable ASCII.
pub fn validate_procid(value: &str) -> Result<usize, FieldError> {
    validate(FieldKind::ProcId, value)
}

/// Length-only check for a PROCID value.
pub fn validate_procid_length(value: &str) -> Result<usize, FieldError> {
    validate_length(FieldKind::ProcId, value)
}

/// Validate a structured-data SD-ID: at most 32 bytes of identifier
/// characters (printable ASCII minus `=`, `]`, `"`).
pub fn validate_element_name(value: &str) -> Result<usize, FieldError> {
    validate(FieldKind::ElementName, value)
}

/// Length-only check for an SD-ID value.
pub fn validate_element_name_length(value: &str) -> Result<usize, FieldError> {
    validate_length(FieldKind::ElementName, value)
}

/// Validate a structured-data PARAM-NAME: at most 32 bytes of identifier
/// characters (printable ASCII minus `=`, `]`, `"`).
pub fn validate_param_name(value: &str) -> Result<usize, FieldError> {
    validate(FieldKind::ParamName, value)
}

/// Length-only check for a PARAM-NAME value.
pub fn validate_param_name_length(value: &str) -> Result<usize, FieldError> {
    validate_length(FieldKind::ParamName, value)
}
