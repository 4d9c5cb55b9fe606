use chrono::NaiveDate;
use reqwest::Method;
use tracing::debug;

use shared_config::AppConfig;
use shared_feed::ehr::EhrFeedClient;

use crate::models::{Pod, ScheduleError, ScheduleGrid, SchedulePayload, ViewMode};
use crate::services::calendar::{self, PracticeClock};
use crate::services::{grid, roster};

/// Glue between the feed and the pure core: resolve the date range, fetch
/// the raw payload, match the roster, build the grid. Constructed fresh per
/// request; nothing is cached across calls.
pub struct ScheduleService {
    feed: EhrFeedClient,
    clock: PracticeClock,
    pods: Vec<Pod>,
}

impl ScheduleService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            feed: EhrFeedClient::new(config),
            clock: PracticeClock::from_config(config),
            pods: roster::default_pods(),
        }
    }

    /// Swap in a roster other than the built-in pods.
    pub fn with_pods(mut self, pods: Vec<Pod>) -> Self {
        self.pods = pods;
        self
    }

    pub fn clock(&self) -> &PracticeClock {
        &self.clock
    }

    /// Fetch the feed for the resolved range and assemble the display grid.
    /// An absent anchor means "today at the practice".
    pub async fn fetch_grid(
        &self,
        anchor: Option<NaiveDate>,
        mode: ViewMode,
    ) -> Result<ScheduleGrid, ScheduleError> {
        let anchor = anchor.unwrap_or_else(|| self.clock.today());
        let days = calendar::resolve_range(anchor, mode);
        let start = *days.first().unwrap_or(&anchor);
        let end = *days.last().unwrap_or(&anchor);

        debug!("Fetching schedule for {} through {}", start, end);

        let path = format!("/schedule?start={}&end={}", start, end);
        let payload: SchedulePayload = self
            .feed
            .request(Method::GET, &path)
            .await
            .map_err(|e| ScheduleError::Feed(e.to_string()))?;

        let resolved = roster::resolve_pods(&self.pods, &payload.practitioner_names);
        debug!(
            "Resolved {} roster rows across {} pods",
            resolved.iter().map(|p| p.practitioner_ids.len()).sum::<usize>(),
            resolved.len()
        );

        grid::build_grid(&days, &resolved, &payload)
    }
}
