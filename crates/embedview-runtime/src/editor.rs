use embedview_engine::{view_options, ViewOption};
use embedview_types::HostState;

use crate::cache::ConfigCache;
use crate::host::HostRequest;

/// Component name of panels that are dashboards
const DASHBOARD_COMPONENT: &str = "lovelace";

/// Reserved url paths that never show up in the dashboard picker
const RESERVED_URL_PATHS: [&str; 2] = ["lovelace", "map"];

/// One selectable dashboard in the editor's picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOption {
    pub url_path: String,
    pub label: String,
}

/// Collect the dashboards a user can pick as an embedding target: dashboard
/// panels only, reserved paths skipped, dashboards with no views visible to
/// the user dropped, deduplicated by url path, sorted case-insensitively by
/// label. A failing per-panel fetch drops that panel, never the listing.
pub async fn collect_dashboards<H: HostRequest>(
    host: &H,
    state: &HostState,
    cache: &mut ConfigCache,
) -> Vec<DashboardOption> {
    let mut options: Vec<DashboardOption> = Vec::new();

    for (key, panel) in &state.panels {
        let component = panel
            .component_name
            .as_deref()
            .or(panel.component.as_deref());
        if component != Some(DASHBOARD_COMPONENT) {
            continue;
        }

        let url_path = panel
            .url_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .unwrap_or(key);
        if RESERVED_URL_PATHS.contains(&url_path) {
            continue;
        }
        if options.iter().any(|option| option.url_path == url_path) {
            continue;
        }

        let Ok(config) = cache.fetch(host, url_path, false).await else {
            continue;
        };
        if view_options(&config.views, state.user_id()).is_empty() {
            continue;
        }

        let label = match panel.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => format!("{} ({})", title, url_path),
            None => url_path.to_string(),
        };
        options.push(DashboardOption {
            url_path: url_path.to_string(),
            label,
        });
    }

    options.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
    options
}

/// Picker options for one dashboard's views, visibility-filtered. Fetch
/// failures produce an empty list rather than an editor error.
pub async fn views_for_dashboard<H: HostRequest>(
    host: &H,
    state: &HostState,
    cache: &mut ConfigCache,
    url_path: &str,
) -> Vec<ViewOption> {
    match cache.fetch(host, url_path, false).await {
        Ok(config) => view_options(&config.views, state.user_id()),
        Err(_) => Vec::new(),
    }
}
