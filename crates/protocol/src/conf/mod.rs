//! Conf module — field limit configuration model and loading.

pub mod load;
pub mod model;

pub use load::ConfError;
pub use model::FieldLimits;
