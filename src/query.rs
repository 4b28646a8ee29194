//! Resource paths and query strings for every API call.
//!
//! Everything here is pure: ids, seasons and matchdays are passed through
//! untouched. The only rewriting done is the day range clamp in
//! [`encode_time_frame`].

use std::fmt;

const MIN_DAY_RANGE: i32 = 1;
const MAX_DAY_RANGE: i32 = 99;
const DEFAULT_HEAD2HEAD: u32 = 10;

/// Direction of a relative date window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    Next,
    Past,
}

impl TimeFrame {
    fn prefix(self) -> char {
        match self {
            TimeFrame::Next => 'n',
            TimeFrame::Past => 'p',
        }
    }
}

/// Home/away filter for a team's fixtures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Venue {
    Home,
    Away,
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Venue::Home => f.write_str("home"),
            Venue::Away => f.write_str("away"),
        }
    }
}

/// `n<days>` or `p<days>`, with `days` clamped to `1..=99`.
pub fn encode_time_frame(time_frame: TimeFrame, day_range: i32) -> String {
    let mut days = day_range;
    if days > MAX_DAY_RANGE {
        days = MAX_DAY_RANGE;
    }
    if days < MIN_DAY_RANGE {
        days = MIN_DAY_RANGE;
    }
    format!("{}{days}", time_frame.prefix())
}

pub fn competitions(season: i32) -> String {
    format!("competitions?season={season}")
}

pub fn competition_teams(competition_id: i64) -> String {
    format!("competitions/{competition_id}/teams")
}

pub fn league_table(competition_id: i64) -> String {
    format!("competitions/{competition_id}/leagueTable")
}

pub fn league_table_at_matchday(competition_id: i64, matchday: i32) -> String {
    format!("competitions/{competition_id}/leagueTable?matchday={matchday}")
}

pub fn team(team_id: i64) -> String {
    format!("teams/{team_id}")
}

pub fn team_players(team_id: i64) -> String {
    format!("teams/{team_id}/players")
}

pub fn fixtures(competition_id: i64) -> String {
    format!("competitions/{competition_id}/fixtures")
}

pub fn fixtures_by_matchday(competition_id: i64, matchday: i32) -> String {
    format!("competitions/{competition_id}/fixtures?matchday={matchday}")
}

pub fn fixtures_by_time_frame(competition_id: i64, time_frame: TimeFrame, day_range: i32) -> String {
    format!(
        "competitions/{competition_id}/fixtures/?timeFrame={}",
        encode_time_frame(time_frame, day_range)
    )
}

/// Fixtures across competitions. `league` always precedes `timeFrame` and is
/// left out entirely when no codes are given.
pub fn fixtures_by_leagues<S: AsRef<str>>(
    time_frame: TimeFrame,
    day_range: i32,
    league_codes: Option<&[S]>,
) -> String {
    let mut query = String::from("?");
    if let Some(codes) = league_codes.filter(|codes| !codes.is_empty()) {
        let joined = codes
            .iter()
            .map(|code| code.as_ref())
            .collect::<Vec<&str>>()
            .join(",");
        query.push_str(&format!("league={joined}&"));
    }
    query.push_str(&format!("timeFrame={}", encode_time_frame(time_frame, day_range)));
    format!("fixtures/{query}")
}

pub fn team_fixtures(
    season: i32,
    team_id: i64,
    venue: Option<Venue>,
    time_frame: TimeFrame,
    day_range: i32,
) -> String {
    let mut path = format!(
        "teams/{team_id}/fixtures?season={season}&timeFrame={}",
        encode_time_frame(time_frame, day_range)
    );
    if let Some(venue) = venue {
        path.push_str(&format!("&venue={venue}"));
    }
    path
}

pub fn fixture(fixture_id: i64, head2head: Option<u32>) -> String {
    format!(
        "fixtures/{fixture_id}?head2head={}",
        head2head.unwrap_or(DEFAULT_HEAD2HEAD)
    )
}
