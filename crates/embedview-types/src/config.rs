use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::style::StyleOptions;

/// Which parser branch resolves the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Static,
    Dynamic,
}

/// Card configuration as it arrives from the editor or declarative setup.
/// Deliberately permissive: every field is optional, legacy keys are
/// accepted, unknown keys are captured and carried along.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCardConfig {
    pub mode: Option<String>,

    // static mode
    pub dashboard: Option<String>,
    pub view: Option<String>,
    /// Legacy alias of `view` (read-only, never written back)
    pub view_path: Option<String>,

    // dynamic mode
    pub target_entity: Option<String>,
    /// Legacy alias of `target_entity` (read-only, never written back)
    pub view_path_entity: Option<String>,

    // style
    pub wrap_in_card: Option<bool>,
    pub bleed: Option<bool>,
    pub bleed_inline: Option<u32>,
    pub bleed_block: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Canonical card configuration. Static and dynamic fields are mutually
/// exclusive: normalization drops whatever belongs to the inactive mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardConfig {
    pub mode: Mode,

    // static mode
    pub dashboard: Option<String>,
    pub view: Option<String>,

    // dynamic mode
    pub target_entity: Option<String>,

    pub style: StyleOptions,

    /// Unknown keys from the raw configuration, preserved verbatim
    pub extra: Map<String, Value>,
}

impl CardConfig {
    /// Minimal default configuration for a freshly added card. The view is
    /// left unset, prompting selection through the editor.
    pub fn stub() -> Self {
        Self {
            mode: Mode::Static,
            dashboard: None,
            view: None,
            target_entity: None,
            style: StyleOptions::default(),
            extra: Map::new(),
        }
    }

    /// Canonical raw form, as the editor boundary emits it. Style flags are
    /// only written when they differ from the defaults; legacy keys never
    /// reappear.
    pub fn to_raw(&self) -> RawCardConfig {
        let defaults = StyleOptions::default();
        RawCardConfig {
            mode: Some(
                match self.mode {
                    Mode::Static => "static",
                    Mode::Dynamic => "dynamic",
                }
                .to_string(),
            ),
            dashboard: self.dashboard.clone(),
            view: self.view.clone(),
            view_path: None,
            target_entity: self.target_entity.clone(),
            view_path_entity: None,
            wrap_in_card: (self.style.wrap_in_card != defaults.wrap_in_card)
                .then_some(self.style.wrap_in_card),
            bleed: (self.style.bleed_enabled != defaults.bleed_enabled)
                .then_some(self.style.bleed_enabled),
            bleed_inline: (self.style.bleed_inline != defaults.bleed_inline)
                .then_some(self.style.bleed_inline),
            bleed_block: (self.style.bleed_block != defaults.bleed_block)
                .then_some(self.style.bleed_block),
            extra: self.extra.clone(),
        }
    }
}

/// Normalize a raw configuration into canonical form. Total: garbage values
/// never fail here, they simply fail to resolve later.
///
/// Legacy migration runs once per assignment: a `view_path_entity` with no
/// `target_entity` switches the card to dynamic mode and drops the
/// static-only fields to avoid an ambiguous mixed state.
pub fn normalize(raw: RawCardConfig) -> CardConfig {
    let target_entity = non_empty(raw.target_entity).or_else(|| non_empty(raw.view_path_entity));

    // an effective target entity always means dynamic mode, whatever `mode` says
    let mode = if target_entity.is_some() {
        Mode::Dynamic
    } else {
        match raw.mode.as_deref() {
            Some(m) if m.eq_ignore_ascii_case("dynamic") => Mode::Dynamic,
            _ => Mode::Static,
        }
    };

    let (dashboard, view, target_entity) = match mode {
        Mode::Dynamic => (None, None, target_entity),
        Mode::Static => (
            non_empty(raw.dashboard),
            non_empty(raw.view).or_else(|| non_empty(raw.view_path)),
            None,
        ),
    };

    let style = StyleOptions {
        wrap_in_card: raw.wrap_in_card.unwrap_or(true),
        bleed_enabled: raw.bleed.unwrap_or(false),
        bleed_inline: raw.bleed_inline.unwrap_or(16),
        bleed_block: raw.bleed_block.unwrap_or(8),
    };

    CardConfig {
        mode,
        dashboard,
        view,
        target_entity,
        style,
        extra: raw.extra,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
