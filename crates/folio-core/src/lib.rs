//! Platform-free orchestration core for the single-page portfolio.
//!
//! Nothing in here touches the DOM. The web frontend implements the host
//! traits ([`PageHost`], [`ScrollDriver`], [`DeferredScheduler`],
//! [`CapabilityProbe`]) and feeds browser events into a [`PageSession`].

pub mod capability;
pub mod config;
pub mod constants;
pub mod decoration;
pub mod easing;
pub mod error;
pub mod gate;
pub mod layout;
pub mod schedule;
pub mod scroll;
pub mod section;
pub mod session;
pub mod theme;
pub mod tracker;

pub use capability::*;
pub use config::*;
pub use decoration::*;
pub use easing::*;
pub use error::*;
pub use gate::*;
pub use layout::*;
pub use schedule::*;
pub use scroll::*;
pub use section::*;
pub use session::*;
pub use theme::*;
pub use tracker::*;
