//! Reusable widgets shared by the entity screens.

pub mod form;
