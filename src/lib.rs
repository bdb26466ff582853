//! # Turbine Models
//!
//! Rotor-level wind turbine aerodynamics built on
//! [Twine](https://github.com/isentropic-dev/twine): velocity averaging over
//! the rotor, yaw and tilt corrections, floating platform tilt, and thrust and
//! power from performance curves.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations, such
//!   as [`models::wind::turbine::Turbine`].
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models or outside this crate.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and installs no subscriber. Tilt
//! iteration outcomes are logged at `debug`, per-evaluation summaries at
//! `trace`.

pub mod models;
pub mod support;
