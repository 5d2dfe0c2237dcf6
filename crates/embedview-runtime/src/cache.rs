use std::collections::HashMap;

use embedview_types::DashboardConfig;

use crate::host::HostRequest;

/// Per-card memo of fetched dashboard configurations, keyed by url path.
/// Entries live for the card's lifetime; only a forced fetch overwrites
/// (last write wins, no TTL).
#[derive(Debug, Default)]
pub struct ConfigCache {
    entries: HashMap<String, DashboardConfig>,
}

impl ConfigCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the configuration for `url_path`, issuing a host request only
    /// on a cache miss. With `force` the request is always issued and the
    /// entry overwritten; the locate fallback uses this exactly once per
    /// miss on an external dashboard.
    pub async fn fetch<H: HostRequest>(
        &mut self,
        host: &H,
        url_path: &str,
        force: bool,
    ) -> anyhow::Result<DashboardConfig> {
        if !force && let Some(cached) = self.entries.get(url_path) {
            return Ok(cached.clone());
        }
        let config = host.dashboard_config(url_path).await?;
        self.entries.insert(url_path.to_string(), config.clone());
        Ok(config)
    }

    pub fn contains(&self, url_path: &str) -> bool {
        self.entries.contains_key(url_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedview_types::ViewConfig;
    use std::sync::Mutex;

    struct CountingHost {
        requests: Mutex<Vec<String>>,
        views: Mutex<Vec<ViewConfig>>,
    }

    impl CountingHost {
        fn new() -> Self {
            Self {
                requests: Mutex::new(vec![]),
                views: Mutex::new(vec![]),
            }
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn set_views(&self, views: Vec<ViewConfig>) {
            *self.views.lock().unwrap() = views;
        }
    }

    impl HostRequest for CountingHost {
        async fn dashboard_config(&self, url_path: &str) -> anyhow::Result<DashboardConfig> {
            self.requests.lock().unwrap().push(url_path.to_string());
            Ok(DashboardConfig {
                views: self.views.lock().unwrap().clone(),
                ..DashboardConfig::default()
            })
        }
    }

    fn view(path: &str) -> ViewConfig {
        ViewConfig {
            path: Some(path.to_string()),
            ..ViewConfig::default()
        }
    }

    #[tokio::test]
    async fn consecutive_fetches_issue_one_request() {
        let host = CountingHost::new();
        let mut cache = ConfigCache::new();

        cache.fetch(&host, "rooms", false).await.unwrap();
        cache.fetch(&host, "rooms", false).await.unwrap();

        assert_eq!(host.request_count(), 1);
        assert!(cache.contains("rooms"));
    }

    #[tokio::test]
    async fn distinct_dashboards_are_cached_separately() {
        let host = CountingHost::new();
        let mut cache = ConfigCache::new();

        cache.fetch(&host, "rooms", false).await.unwrap();
        cache.fetch(&host, "garden", false).await.unwrap();

        assert_eq!(host.request_count(), 2);
    }

    #[tokio::test]
    async fn forced_fetch_always_issues_a_request_and_overwrites() {
        let host = CountingHost::new();
        let mut cache = ConfigCache::new();

        let stale = cache.fetch(&host, "rooms", false).await.unwrap();
        assert!(stale.views.is_empty());

        host.set_views(vec![view("kitchen")]);
        let fresh = cache.fetch(&host, "rooms", true).await.unwrap();
        assert_eq!(fresh.views.len(), 1);
        assert_eq!(host.request_count(), 2);

        // the overwritten entry serves subsequent non-forced fetches
        let cached = cache.fetch(&host, "rooms", false).await.unwrap();
        assert_eq!(cached.views.len(), 1);
        assert_eq!(host.request_count(), 2);
    }

    #[tokio::test]
    async fn request_failures_propagate_and_are_not_cached() {
        struct FailingHost;
        impl HostRequest for FailingHost {
            async fn dashboard_config(&self, _url_path: &str) -> anyhow::Result<DashboardConfig> {
                Err(anyhow::anyhow!("socket closed"))
            }
        }

        let mut cache = ConfigCache::new();
        assert!(cache.fetch(&FailingHost, "rooms", false).await.is_err());
        assert!(!cache.contains("rooms"));
    }
}
