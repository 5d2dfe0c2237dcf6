use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Snapshot of live host state, delivered with every update. The host is
/// the source of truth; nothing here is cached by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostState {
    pub states: HashMap<String, EntityState>,
    pub user: Option<CurrentUser>,
    pub panels: HashMap<String, PanelInfo>,
}

impl HostState {
    /// Non-empty state string of an entity, if the entity exists.
    pub fn entity_state(&self, entity_id: &str) -> Option<&str> {
        self.states
            .get(entity_id)
            .map(|entity| entity.state.as_str())
            .filter(|state| !state.is_empty())
    }

    /// Id of the signed-in user, if the host reports one.
    pub fn user_id(&self) -> Option<&str> {
        self.user
            .as_ref()
            .map(|user| user.id.as_str())
            .filter(|id| !id.is_empty())
    }
}

/// State of one entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityState {
    pub state: String,
    pub attributes: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentUser {
    pub id: String,
    pub name: Option<String>,
}

/// Host panel record, as exposed on the state snapshot. Dashboards are the
/// panels whose component names the dashboard renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelInfo {
    pub component_name: Option<String>,
    pub component: Option<String>,
    pub url_path: Option<String>,
    pub title: Option<String>,
}
