//! Supporting utilities used by models.
//!
//! These modules are public because they're useful on their own, but their
//! APIs are not stable.

pub mod actuator_disk;
pub mod angle;
pub mod constraint;
pub mod cubature;
pub mod curve;
