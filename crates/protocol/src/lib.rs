// Structured-field validation for RFC 5424 entry construction.

// Core validation
pub mod field;

// Limit configuration
pub mod conf;

pub use conf::FieldLimits;
pub use field::{CharsetRole, FieldError, FieldKind};
