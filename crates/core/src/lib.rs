//! Core capability model and backend contract for DockPilot.
//!
//! The crate defines what a taskbar/dock integration can do ([`Feature`]),
//! the value types those operations exchange, and the [`Taskbar`] trait
//! platform crates implement. Backends self-register through [`inventory`]
//! and are discovered with [`acquire`].

mod error;
mod feature;
mod image;
mod menu;
mod progress;
mod registration;
mod taskbar;

pub use error::TaskbarError;
pub use feature::{Feature, FeatureSet};
pub use image::BadgeImage;
pub use menu::TaskbarMenu;
pub use progress::{ProgressState, ProgressValue};
pub use registration::{TaskbarRegistration, acquire, taskbars};
pub use taskbar::{Taskbar, WindowHandle};
