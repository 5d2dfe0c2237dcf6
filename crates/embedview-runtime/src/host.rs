use embedview_types::{DashboardConfig, HostState, ViewConfig};

/// Handle onto the host's currently active dashboard. `None` from
/// [`HostLookup::root`] means the host has not finished mounting.
#[derive(Debug, Clone, PartialEq)]
pub struct HostRoot {
    pub url_path: String,
    pub config: DashboardConfig,
}

/// Lookup capability: reach the host's active dashboard root. Abstracts
/// whatever component-tree traversal the host needs to produce the handle,
/// so the engine never depends on traversal mechanics.
pub trait HostLookup {
    fn root(&self) -> Option<HostRoot>;

    /// Current navigation path, e.g. "/dashboard-rooms/kitchen".
    fn nav_path(&self) -> String;
}

/// Request capability: one asynchronous round trip returning a dashboard's
/// full configuration. No pagination, no partial fetch; failures propagate
/// to the caller.
#[allow(async_fn_in_trait)]
pub trait HostRequest {
    async fn dashboard_config(&self, url_path: &str) -> anyhow::Result<DashboardConfig>;
}

/// The dashboard context a resolved view renders under.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardHandle {
    pub url_path: String,
    pub config: DashboardConfig,
    pub edit_mode: bool,
}

/// Bundle handed to the render adapter when swapping content.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewDescriptor {
    pub view: ViewConfig,
    pub dashboard: DashboardHandle,
    /// Position of `view` within its dashboard's view list
    pub index: usize,
    pub narrow: bool,
    pub strategy_view: bool,
}

/// The host's view-rendering primitive. The controller only configures and
/// swaps it; it never renders content itself.
pub trait RenderAdapter {
    /// Replace the rendered content with a newly resolved view.
    fn show_view(&mut self, descriptor: ViewDescriptor, state: &HostState);

    /// Forward a live state snapshot to the already-rendered view.
    fn update_state(&mut self, state: &HostState);

    /// Replace the rendered content with an inline error message.
    fn show_error(&mut self, message: &str);

    /// Rendered content height in pixels, when known. Feeds the card size
    /// estimate for the host's layout engine.
    fn content_height(&self) -> Option<u32> {
        None
    }
}
