//! Flutter-facing bridge over `wellness_core`.

pub mod api;
