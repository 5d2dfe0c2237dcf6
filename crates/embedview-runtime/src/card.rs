use std::time::Duration;

use embedview_engine::{find_view, is_view_visible, parse_static, parse_target_string, TargetCandidate};
use embedview_types::{
    normalize, CardConfig, DashboardConfig, Error, HostState, Mode, RawCardConfig, ViewConfig,
};

use crate::cache::ConfigCache;
use crate::host::{DashboardHandle, HostLookup, HostRequest, RenderAdapter, ViewDescriptor};
use crate::location::current_location;
use crate::wait::wait_for;

/// How long to poll for the host root before giving up on one update cycle
const HOST_READY_CEILING: Duration = Duration::from_secs(10);

/// Rough content height of one layout row, in pixels
const ROW_HEIGHT: u32 = 50;

/// Controller state. `Resolved` is entered only after a successful swap;
/// error states exist to suppress duplicate inline messages and are never
/// treated as terminal: every update re-evaluates from scratch.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionState {
    /// No resolution attempted since the last (re)configuration
    Idle,
    /// The host root was unavailable; resolution is suspended until it mounts
    AwaitingHost,
    /// This target produced the currently rendered view
    Resolved(TargetCandidate),
    /// This message is currently rendered inline
    Error(String),
}

/// A single embedding card instance: owns the configuration, the remote
/// config cache, and the resolution state machine, and drives the render
/// adapter on every host update.
///
/// Updates are serialized through `&mut self`; a resolution in flight for
/// one update always completes before the next is processed.
pub struct Card<E, R> {
    host: E,
    renderer: R,
    config: CardConfig,
    cache: ConfigCache,
    state: ResolutionState,
    host_wait: Duration,
}

impl<E, R> Card<E, R>
where
    E: HostLookup + HostRequest,
    R: RenderAdapter,
{
    pub fn new(host: E, renderer: R) -> Self {
        Self {
            host,
            renderer,
            config: CardConfig::stub(),
            cache: ConfigCache::new(),
            state: ResolutionState::Idle,
            host_wait: HOST_READY_CEILING,
        }
    }

    /// Shorten or lengthen the host-readiness poll ceiling.
    pub fn with_host_wait(mut self, ceiling: Duration) -> Self {
        self.host_wait = ceiling;
        self
    }

    /// Replace the configuration wholesale. The next update re-resolves.
    pub fn set_config(&mut self, raw: RawCardConfig) {
        self.config = normalize(raw);
        self.state = ResolutionState::Idle;
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn state(&self) -> &ResolutionState {
        &self.state
    }

    /// Estimated card height in rows, for the host's layout engine.
    pub fn card_size(&self) -> u32 {
        match self.renderer.content_height() {
            Some(height) if height > 0 => height.div_ceil(ROW_HEIGHT),
            _ => 5,
        }
    }

    /// React to a host state update: re-render if the resolved target
    /// changed, forward the snapshot if it did not, or surface an inline
    /// error. Never panics and never propagates errors to the host.
    pub async fn handle_state_update(&mut self, state: &HostState) {
        match self.resolve(state).await {
            Ok(()) => {}
            // transient startup: stay silent, the next update retries
            Err(Error::HostUnavailable) => {}
            Err(err) => self.show_error(&err),
        }
    }

    async fn resolve(&mut self, state: &HostState) -> Result<(), Error> {
        let (current_dashboard, current_view) = match self.read_location().await {
            Some(location) => location,
            None => return Err(Error::HostUnavailable),
        };

        let candidate = self.parse_candidate(state, &current_dashboard)?;

        // Hard rule: embedding the view this card is displayed on would
        // recurse into the host's own render tree. Only direct self-embedding
        // is detected; a cycle across two separate card instances is not.
        if candidate.dashboard == current_dashboard
            && current_view.as_deref() == Some(candidate.view.as_str())
        {
            return Err(Error::SelfEmbedding {
                current: format!(
                    "{}/{}",
                    current_dashboard,
                    current_view.as_deref().unwrap_or_default()
                ),
                candidate: format!("{}/{}", candidate.dashboard, candidate.view),
            });
        }

        // unchanged target: cheap path, no re-render
        if let ResolutionState::Resolved(resolved) = &self.state
            && *resolved == candidate
        {
            self.renderer.update_state(state);
            return Ok(());
        }

        self.render_target(candidate, &current_dashboard, state).await
    }

    /// Current location, suspending on an unmounted host. The first update
    /// that finds no root runs one bounded poll; while the card stays in
    /// `AwaitingHost`, later updates probe once and bail instead of
    /// stacking fresh polls.
    async fn read_location(&mut self) -> Option<(String, Option<String>)> {
        let location = current_location(&self.host);
        if let Some(dashboard) = location.dashboard {
            return Some((dashboard, location.view));
        }

        if matches!(self.state, ResolutionState::AwaitingHost) {
            return None;
        }
        self.state = ResolutionState::AwaitingHost;
        wait_for(|| self.host.root(), self.host_wait).await?;

        let location = current_location(&self.host);
        location.dashboard.map(|dashboard| (dashboard, location.view))
    }

    fn parse_candidate(
        &self,
        state: &HostState,
        current_dashboard: &str,
    ) -> Result<TargetCandidate, Error> {
        match self.config.mode {
            Mode::Static => parse_static(&self.config, current_dashboard),
            Mode::Dynamic => {
                let entity = self
                    .config
                    .target_entity
                    .as_deref()
                    .ok_or_else(|| missing_target_entity())?;
                let value = state
                    .entity_state(entity)
                    .ok_or_else(|| missing_target_entity())?;
                parse_target_string(value, current_dashboard)
                    .ok_or_else(|| Error::InvalidDynamicTarget(value.to_string()))
            }
        }
    }

    /// Full resolution: obtain the view list, locate the view with the
    /// one-shot forced-refresh fallback, filter by visibility, swap the
    /// rendered content. Only success records the target as resolved.
    async fn render_target(
        &mut self,
        candidate: TargetCandidate,
        current_dashboard: &str,
        state: &HostState,
    ) -> Result<(), Error> {
        let external = candidate.is_external(current_dashboard);

        let config = if external {
            self.cache
                .fetch(&self.host, &candidate.dashboard, false)
                .await
                .map_err(|err| Error::LoadFailed(err.to_string()))?
        } else {
            // the current dashboard is read live, never through the cache
            let root = wait_for(|| self.host.root(), self.host_wait)
                .await
                .ok_or_else(|| Error::LoadFailed("dashboard root not found".to_string()))?;
            root.config
        };

        let (config, index, view) = match locate(&config, &candidate.view) {
            Some((index, view)) => (config, index, view),
            None if external => {
                // A remote dashboard's views can change between the last
                // fetch and now; one forced refresh keeps a stale cache from
                // permanently hiding a newly added view. Local misses are
                // always errors, the live list has no caching indirection.
                let fresh = self
                    .cache
                    .fetch(&self.host, &candidate.dashboard, true)
                    .await
                    .map_err(|err| Error::LoadFailed(err.to_string()))?;
                match locate(&fresh, &candidate.view) {
                    Some((index, view)) => (fresh, index, view),
                    None => return Err(Error::ViewNotFound(candidate.view.clone())),
                }
            }
            None => return Err(Error::ViewNotFound(candidate.view.clone())),
        };

        // hidden views report exactly like missing ones
        if !is_view_visible(&view, state.user_id()) {
            return Err(Error::ViewNotFound(candidate.view.clone()));
        }

        let descriptor = ViewDescriptor {
            view,
            dashboard: DashboardHandle {
                url_path: candidate.dashboard.clone(),
                config,
                edit_mode: false,
            },
            index,
            narrow: false,
            strategy_view: false,
        };
        self.renderer.show_view(descriptor, state);
        self.state = ResolutionState::Resolved(candidate);
        Ok(())
    }

    /// Render an inline error, skipping the swap when the identical message
    /// is already on screen. The failing target is never recorded as
    /// resolved, so the same input is attempted again on the next update.
    fn show_error(&mut self, err: &Error) {
        let message = err.to_string();
        if let ResolutionState::Error(current) = &self.state
            && *current == message
        {
            return;
        }
        self.renderer.show_error(&message);
        self.state = ResolutionState::Error(message);
    }
}

fn missing_target_entity() -> Error {
    Error::MissingConfiguration("no target entity or empty entity state".to_string())
}

fn locate(config: &DashboardConfig, view_id: &str) -> Option<(usize, ViewConfig)> {
    find_view(&config.views, view_id).map(|(index, view)| (index, view.clone()))
}
