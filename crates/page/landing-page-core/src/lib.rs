//! Landing page interaction state (host-agnostic).
//!
//! Peripheral page behaviour that sits next to the reveal engine: the mobile
//! navigation menu, randomized ordering of link/profile lists, link click
//! feedback and a simple call throttle. Each piece is a plain state machine
//! returning effects for the host to apply.

pub mod nav;
pub mod shuffle;
pub mod throttle;
pub mod tracking;

pub use nav::{MenuIcon, MobileNav, NavEffect};
pub use shuffle::{fisher_yates, staggered_order, Staggered, LINK_STAGGER_S, PROFILE_STAGGER_S};
pub use throttle::Throttle;
pub use tracking::{LinkClick, PressFeedback, PRESS_RELEASE_MS, PRESS_SCALE};
