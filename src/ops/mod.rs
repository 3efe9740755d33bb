//! Versor-style operations built on the facade products.

pub mod projection;
pub mod reflection;
