pub mod config;
pub mod dashboard;
pub mod error;
pub mod host;
pub mod style;

pub use config::{normalize, CardConfig, Mode, RawCardConfig};
pub use dashboard::{DashboardConfig, ViewConfig};
pub use error::{Error, Result};
pub use host::{CurrentUser, EntityState, HostState, PanelInfo};
pub use style::StyleOptions;
