//! Network classification for scan-target vetting.
//!
//! The classifier answers the four questions the validation engine asks about
//! a submitted target set: is this string a CIDR network, does that network
//! fall inside the denylist, does this hostname actually resolve, and does a
//! named interface exist on this host. DNS resolution and interface
//! enumeration sit behind the [`Resolve`] and [`NicSource`] traits so callers
//! (and tests) can substitute deterministic implementations.

pub mod classifier;
pub mod error;
pub mod nics;
pub mod resolver;

pub use classifier::{NetworkClassifier, default_denylist};
pub use error::NetError;
pub use nics::{NicSource, SystemNics};
pub use resolver::{Resolve, SystemResolver};
