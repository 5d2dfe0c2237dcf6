use embedview_types::{CardConfig, Error, Result};

/// A parsed (dashboard, view) pair, not yet looked up against a view list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCandidate {
    pub dashboard: String,
    pub view: String,
}

impl TargetCandidate {
    /// Whether this target lives on a dashboard other than the current one,
    /// and therefore needs a config fetch instead of the live root.
    pub fn is_external(&self, current_dashboard: &str) -> bool {
        self.dashboard != current_dashboard
    }
}

/// Resolve the static-mode fields into a candidate. An empty or absent
/// dashboard means the current one.
pub fn parse_static(config: &CardConfig, current_dashboard: &str) -> Result<TargetCandidate> {
    let view = config
        .view
        .clone()
        .ok_or_else(|| Error::MissingConfiguration("no view".to_string()))?;
    let dashboard = config
        .dashboard
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| current_dashboard.to_string());
    Ok(TargetCandidate { dashboard, view })
}

/// Parse a combined "dashboard/view" string into a candidate.
///
/// Accepts "dashboard/view", "/dashboard/view" (leading slash ignored),
/// "current/view" (literal `current` means the current dashboard), and a
/// single "view" or "/view" segment (implies the current dashboard). Any
/// other segment count fails.
pub fn parse_target_string(value: &str, current_dashboard: &str) -> Option<TargetCandidate> {
    let parts: Vec<&str> = value.trim().split('/').filter(|p| !p.is_empty()).collect();
    match parts.as_slice() {
        [view] => Some(TargetCandidate {
            dashboard: current_dashboard.to_string(),
            view: view.to_string(),
        }),
        [dashboard, view] => Some(TargetCandidate {
            dashboard: if *dashboard == "current" {
                current_dashboard.to_string()
            } else {
                dashboard.to_string()
            },
            view: view.to_string(),
        }),
        _ => None,
    }
}

/// Interpret a view identifier as a zero-based positional index. Accepts
/// bare digits ("0", "1", ...) and the "index-0" token form. Evaluated only
/// after a direct path match has failed.
pub fn index_token(view_id: &str) -> Option<usize> {
    let re = regex::Regex::new(r"^(?:index-)?(\d+)$").ok()?;
    re.captures(view_id)?.get(1)?.as_str().parse().ok()
}
