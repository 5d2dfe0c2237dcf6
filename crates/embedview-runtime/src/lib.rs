pub mod cache;
pub mod card;
pub mod editor;
pub mod host;
pub mod location;
pub mod stream;
mod wait;

pub use cache::ConfigCache;
pub use card::{Card, ResolutionState};
pub use editor::{collect_dashboards, views_for_dashboard, DashboardOption};
pub use host::{DashboardHandle, HostLookup, HostRequest, HostRoot, RenderAdapter, ViewDescriptor};
pub use location::{current_location, Location};
pub use stream::drive;
