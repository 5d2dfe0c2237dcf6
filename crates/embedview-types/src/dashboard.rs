use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Full configuration of one dashboard: an ordered list of views plus
/// whatever metadata the host attaches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: Option<String>,
    pub views: Vec<ViewConfig>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One view within a dashboard, read-only to this engine. Identity for
/// lookup purposes is `path`, falling back to the positional index within
/// the owning list.
///
/// The visibility declarations are kept as raw values: hosts are known to
/// ship them as rule objects, bare id strings, or not-a-list garbage, and a
/// malformed declaration must not reject the whole view record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub path: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,

    pub visible: Option<Value>,
    pub visibility: Option<Value>,
    pub users: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
