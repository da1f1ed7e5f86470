//! Model — field kinds, character-set roles, and the validation error type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The categories of application-supplied string that get embedded into an
/// outgoing RFC 5424 record. Each kind has a fixed maximum byte length and a
/// fixed character-set role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// APP-NAME header field
    AppName,
    /// HOSTNAME header field
    Hostname,
    /// MSGID header field
    MsgId,
    /// PROCID header field
    ProcId,
    /// SD-ID of a structured-data element
    ElementName,
    /// PARAM-NAME of a structured-data parameter
    ParamName,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::AppName => "app name",
            FieldKind::Hostname => "hostname",
            FieldKind::MsgId => "msgid",
            FieldKind::ProcId => "procid",
            FieldKind::ElementName => "element name",
            FieldKind::ParamName => "param name",
        }
    }

    /// The character-set role this kind must satisfy.
    ///
    /// Header fields take free printable text; structured-data names also
    /// exclude the bytes that delimit parameter syntax on the wire.
    pub fn charset(&self) -> CharsetRole {
        match self {
            FieldKind::AppName
            | FieldKind::Hostname
            | FieldKind::MsgId
            | FieldKind::ProcId => CharsetRole::PrintableAscii,
            FieldKind::ElementName | FieldKind::ParamName => CharsetRole::Identifier,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character-set roles a validated string can be held to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharsetRole {
    /// Any byte in the inclusive range [33, 126]
    PrintableAscii,
    /// Printable ASCII minus `=`, `]`, `"` (structured-data delimiters)
    Identifier,
}

impl CharsetRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharsetRole::PrintableAscii => "printable ascii",
            CharsetRole::Identifier => "identifier",
        }
    }
}

impl std::fmt::Display for CharsetRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a string was rejected. The two variants are mutually exclusive per
/// call: the length stage runs first and short-circuits, so an over-long
/// string is never also reported for its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The string's byte length exceeds the kind's maximum. Carries the
    /// computed length so callers keep it even on the failure path.
    #[error("{kind} is {length} bytes, exceeding the maximum of {max}")]
    TooLong {
        kind: FieldKind,
        length: usize,
        max: usize,
    },

    /// A byte outside the permitted set was found.
    #[error("string contains a character not allowed in {role} fields")]
    InvalidEncoding { role: CharsetRole },
}
