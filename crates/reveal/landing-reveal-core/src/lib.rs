//! Landing Reveal Core (host-agnostic)
//!
//! Scroll-triggered reveal and counter animation for the landing page. Regions are
//! revealed once when they enter the viewport; counters inside a revealed region
//! animate from 0 to their target on the render-frame schedule with an
//! exponential ease-out. Hosts (the wasm adapter, tests) feed visibility changes
//! and frame timestamps in and apply the returned [`Outputs`].

pub mod config;
pub mod counter;
pub mod easing;
pub mod engine;
pub mod error;
pub mod format;
pub mod geometry;
pub mod ids;
pub mod observer;
pub mod outputs;
pub mod page;
pub mod region;
pub mod scheduler;

// Re-exports for consumers (adapters)
pub use config::{Config, CounterConfig, ObserverConfig};
pub use counter::{counter_value, Counter, CounterFrame};
pub use easing::{ease_out_expo, progress};
pub use engine::Engine;
pub use error::{Result, RevealError};
pub use format::group_digits;
pub use geometry::{intersection_ratio, Rect, RootMargin};
pub use ids::{CounterId, IdAllocator, RegionId};
pub use observer::{GeometryTracker, HostVisibility, VisibilityChange, VisibilitySource};
pub use outputs::{Change, CoreEvent, Outputs};
pub use page::{parse_page_json, CounterSpec, PageSpec, RawTarget, RegionSpec};
pub use region::Region;
pub use scheduler::{FrameScheduler, FrameTask};
