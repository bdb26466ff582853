//! Wind energy models.

pub mod turbine;
