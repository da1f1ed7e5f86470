//! Byte-level character-set scanners.
//!
//! Pure helpers used by [`super::check`] after the length stage has passed.
//! Both scanners return at the first offending byte and allocate nothing.

use super::model::{CharsetRole, FieldError};

/// Reserved structured-data delimiter bytes. PARAM-NAME and SD-ID appear
/// unescaped inside `[name key="value"]` blocks on the wire, so these bytes
/// would break parameter syntax.
const SD_RESERVED: [u8; 3] = [b'=', b']', b'"'];

/// Accept every byte in the inclusive printable range [33, 126].
///
/// Multi-byte UTF-8 sequences fail here as well: every continuation byte is
/// above 126. A zero-length string trivially passes.
pub fn printable_ascii(value: &str) -> Result<(), FieldError> {
    for byte in value.bytes() {
        if !(33..=126).contains(&byte) {
            return Err(FieldError::InvalidEncoding {
                role: CharsetRole::PrintableAscii,
            });
        }
    }

    Ok(())
}

/// Accept printable ASCII minus the structured-data delimiters `=`, `]`, `"`.
pub fn name_chars(value: &str) -> Result<(), FieldError> {
    for byte in value.bytes() {
        if !(33..=126).contains(&byte) || SD_RESERVED.contains(&byte) {
            return Err(FieldError::InvalidEncoding {
                role: CharsetRole::Identifier,
            });
        }
    }

    Ok(())
}
