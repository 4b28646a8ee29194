use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::mapper;
use crate::query::{self, TimeFrame, Venue};
use crate::transport::{HttpTransport, Transport};
use crate::types::*;

/// Client for the football-data.org API.
///
/// Every method issues exactly one request. An empty response body yields
/// the result type's default (empty lists, default records) rather than an
/// error. Transport and parsing failures are returned as they are.
pub struct FootballDataClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl FootballDataClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new()?))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> FootballDataClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn fetch<R, F>(&self, path: String, map: F) -> Result<R>
    where
        R: Default,
        F: FnOnce(&str, &str) -> Result<R>,
    {
        let body = self
            .transport
            .get(&self.config.url(&path), self.config.token())
            .await?;

        if body.is_empty() {
            debug!(%path, "empty body, using default");
            return Ok(R::default());
        }

        map(&path, &body)
    }

    /// `competitions?season=<season>`
    pub async fn competitions(&self, season: i32) -> Result<Vec<Competition>> {
        self.fetch(query::competitions(season), mapper::competitions)
            .await
    }

    /// `competitions/<id>/teams`
    pub async fn competition_teams(&self, competition_id: i64) -> Result<Teams> {
        self.fetch(query::competition_teams(competition_id), mapper::teams)
            .await
    }

    /// `competitions/<id>/leagueTable`
    pub async fn league_table(&self, competition_id: i64) -> Result<LeagueTable> {
        self.fetch(query::league_table(competition_id), mapper::league_table)
            .await
    }

    /// `competitions/<id>/leagueTable?matchday=<matchday>`
    pub async fn league_table_at_matchday(
        &self,
        competition_id: i64,
        matchday: i32,
    ) -> Result<LeagueTable> {
        self.fetch(
            query::league_table_at_matchday(competition_id, matchday),
            mapper::league_table,
        )
        .await
    }

    /// `teams/<id>`
    pub async fn team(&self, team_id: i64) -> Result<Team> {
        self.fetch(query::team(team_id), mapper::team).await
    }

    /// `teams/<id>/players`
    pub async fn team_players(&self, team_id: i64) -> Result<Players> {
        self.fetch(query::team_players(team_id), mapper::players)
            .await
    }

    /// All fixtures of a competition.
    pub async fn fixtures(&self, competition_id: i64) -> Result<Fixtures> {
        self.fetch(query::fixtures(competition_id), mapper::fixtures)
            .await
    }

    pub async fn fixtures_by_matchday(&self, competition_id: i64, matchday: i32) -> Result<Fixtures> {
        self.fetch(
            query::fixtures_by_matchday(competition_id, matchday),
            mapper::fixtures,
        )
        .await
    }

    /// Fixtures of a competition within the next or past `day_range` days.
    pub async fn fixtures_by_time_frame(
        &self,
        competition_id: i64,
        time_frame: TimeFrame,
        day_range: i32,
    ) -> Result<Fixtures> {
        self.fetch(
            query::fixtures_by_time_frame(competition_id, time_frame, day_range),
            mapper::fixtures,
        )
        .await
    }

    /// Fixtures across several competitions, or all of them when
    /// `league_codes` is empty or `None`.
    pub async fn fixtures_by_leagues<S: AsRef<str>>(
        &self,
        time_frame: TimeFrame,
        day_range: i32,
        league_codes: Option<&[S]>,
    ) -> Result<Fixtures> {
        self.fetch(
            query::fixtures_by_leagues(time_frame, day_range, league_codes),
            mapper::fixtures,
        )
        .await
    }

    /// A single fixture with its head-to-head summary over the last
    /// `head2head` meetings (10 when `None`).
    pub async fn fixture(&self, fixture_id: i64, head2head: Option<u32>) -> Result<SingleFixture> {
        self.fetch(query::fixture(fixture_id, head2head), mapper::single_fixture)
            .await
    }

    pub async fn team_fixtures(
        &self,
        season: i32,
        team_id: i64,
        venue: Option<Venue>,
        time_frame: TimeFrame,
        day_range: i32,
    ) -> Result<Fixtures> {
        self.fetch(
            query::team_fixtures(season, team_id, venue, time_frame, day_range),
            mapper::fixtures,
        )
        .await
    }
}
