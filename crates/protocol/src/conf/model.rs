//! Model — FieldLimits and its defaults.

use serde::{Deserialize, Serialize};

use crate::field::{self, FieldKind};

/// The six maximum-length bounds, one per field kind, in bytes.
///
/// The validation layer consumes these read-only; it never decides them.
/// Defaults are the RFC 5424 field widths. Deployments that relay through
/// stricter collectors tighten them in the limits file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldLimits {
    pub max_app_name: usize,
    pub max_hostname: usize,
    pub max_msgid: usize,
    pub max_procid: usize,
    pub max_element_name: usize,
    pub max_param_name: usize,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            max_app_name: field::MAX_APP_NAME_LENGTH,
            max_hostname: field::MAX_HOSTNAME_LENGTH,
            max_msgid: field::MAX_MSGID_LENGTH,
            max_procid: field::MAX_PROCID_LENGTH,
            max_element_name: field::MAX_ELEMENT_NAME_LENGTH,
            max_param_name: field::MAX_PARAM_NAME_LENGTH,
        }
    }
}

impl FieldLimits {
    /// The bound for `kind` under this configuration.
    pub fn max_len(&self, kind: FieldKind) -> usize {
        match kind {
            FieldKind::AppName => self.max_app_name,
            FieldKind::Hostname => self.max_hostname,
            FieldKind::MsgId => self.max_msgid,
            FieldKind::ProcId => self.max_procid,
            FieldKind::ElementName => self.max_element_name,
            FieldKind::ParamName => self.max_param_name,
        }
    }
}
