use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Competition {
    pub id: i64,
    #[serde(alias = "caption", deserialize_with = "null_as_default")]
    pub name: String,
    pub code: Option<String>,
    pub league: Option<String>,
    #[serde(alias = "year")]
    pub season: Option<String>,
    pub current_matchday: Option<u32>,
    pub number_of_matchdays: Option<u32>,
    pub number_of_teams: Option<u32>,
    pub number_of_games: Option<u32>,
    pub last_updated: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub code: Option<String>,
    pub short_name: Option<String>,
    pub squad_market_value: Option<String>,
    pub crest_url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Teams {
    pub count: u32,
    pub teams: Vec<Team>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub position: Option<String>,
    pub jersey_number: Option<u32>,
    #[serde(with = "date_only::option")]
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    #[serde(with = "date_only::option")]
    pub contract_until: Option<NaiveDate>,
    pub market_value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Players {
    pub count: u32,
    pub players: Vec<Player>,
}

/// One row of a league table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StandingTeam {
    #[serde(alias = "position")]
    pub rank: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub team_name: String,
    #[serde(alias = "crestURI")]
    pub crest_uri: Option<String>,
    pub played_games: u32,
    pub points: i32,
    pub goals: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

/// Standings in the order the API returned them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeagueTable {
    #[serde(deserialize_with = "null_as_default")]
    pub league_caption: String,
    pub matchday: u32,
    pub standing: Vec<StandingTeam>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixtureStatus {
    Scheduled,
    Timed,
    Postponed,
    InPlay,
    Canceled,
    Finished,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FixtureResult {
    pub goals_home_team: Option<u32>,
    pub goals_away_team: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fixture {
    pub id: Option<i64>,
    pub competition_id: Option<i64>,
    #[serde(with = "date_only::option")]
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: FixtureStatus,
    pub matchday: Option<u32>,
    pub home_team_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub home_team_name: String,
    pub away_team_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub away_team_name: String,
    pub result: FixtureResult,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fixtures {
    #[serde(with = "date_only::option")]
    pub time_frame_start: Option<NaiveDate>,
    #[serde(with = "date_only::option")]
    pub time_frame_end: Option<NaiveDate>,
    pub count: u32,
    pub fixtures: Vec<Fixture>,
}

/// Summary of previous meetings between the two sides of a fixture.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Head2Head {
    pub count: u32,
    #[serde(with = "date_only::option")]
    pub time_frame_start: Option<NaiveDate>,
    #[serde(with = "date_only::option")]
    pub time_frame_end: Option<NaiveDate>,
    pub home_team_wins: u32,
    pub away_team_wins: u32,
    pub draws: u32,
    pub last_home_win_home_team: Option<Fixture>,
    pub last_win_home_team: Option<Fixture>,
    pub last_away_win_away_team: Option<Fixture>,
    pub last_win_away_team: Option<Fixture>,
    pub fixtures: Vec<Fixture>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleFixture {
    pub fixture: Fixture,
    pub head2head: Head2Head,
}

// `null` on the wire reads as the field's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Calendar dates without a time of day. Accepts `yyyy-MM-dd` as well as
/// full timestamps, whose time part is dropped.
pub mod date_only {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT)
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
            .or_else(|| {
                NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|d| d.date())
            })
    }

    pub mod option {
        use chrono::NaiveDate;
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match date {
                Some(d) => serializer.serialize_str(&d.format(super::FORMAT).to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                None => Ok(None),
                Some(raw) if raw.trim().is_empty() => Ok(None),
                Some(raw) => super::parse(&raw)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("invalid date: {raw}"))),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_of_birth_drops_time_of_day() {
        let with_time: Player =
            serde_json::from_str(r#"{"name":"A","dateOfBirth":"1990-05-12T00:00:00Z"}"#).unwrap();
        let date_only: Player =
            serde_json::from_str(r#"{"name":"A","dateOfBirth":"1990-05-12"}"#).unwrap();
        let local: Player =
            serde_json::from_str(r#"{"name":"A","dateOfBirth":"1990-05-12T21:30:00"}"#).unwrap();

        assert_eq!(with_time.date_of_birth, Some(ymd(1990, 5, 12)));
        assert_eq!(with_time, date_only);
        assert_eq!(local.date_of_birth, Some(ymd(1990, 5, 12)));
    }

    #[test]
    fn test_null_and_missing_dates_are_absent() {
        let fixtures: Fixtures =
            serde_json::from_str(r#"{"timeFrameStart":null,"count":0,"fixtures":[]}"#).unwrap();
        assert_eq!(fixtures.time_frame_start, None);
        assert_eq!(fixtures.time_frame_end, None);
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let res = serde_json::from_str::<Player>(r#"{"dateOfBirth":"12/05/1990"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_dates_serialize_date_only() {
        let player = Player {
            name: "A".into(),
            date_of_birth: Some(ymd(1990, 5, 12)),
            ..Default::default()
        };
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["dateOfBirth"], "1990-05-12");
        assert_eq!(json["contractUntil"], serde_json::Value::Null);
    }

    #[test]
    fn test_unknown_fixture_status() {
        let fixture: Fixture =
            serde_json::from_str(r#"{"status":"SUSPENDED","homeTeamName":"A"}"#).unwrap();
        assert_eq!(fixture.status, FixtureStatus::Unknown);

        let fixture: Fixture = serde_json::from_str(r#"{"status":"IN_PLAY"}"#).unwrap();
        assert_eq!(fixture.status, FixtureStatus::InPlay);
    }

    #[test]
    fn test_standing_accepts_position_alias() {
        let row: StandingTeam = serde_json::from_str(
            r#"{"position":3,"teamName":"Chelsea FC","crestURI":"http://x/chelsea.svg","points":20}"#,
        )
        .unwrap();
        assert_eq!(row.rank, 3);
        assert_eq!(row.points, 20);
        assert_eq!(row.crest_uri.as_deref(), Some("http://x/chelsea.svg"));
    }

    #[test]
    fn test_null_strings_and_status_read_as_defaults() {
        let team: Team = serde_json::from_str(r#"{"id":66,"name":null}"#).unwrap();
        assert_eq!(team.id, 66);
        assert_eq!(team.name, "");

        let fixture: Fixture = serde_json::from_str(
            r#"{"status":null,"homeTeamName":null,"awayTeamName":"SSC Napoli"}"#,
        )
        .unwrap();
        assert_eq!(fixture.status, FixtureStatus::Unknown);
        assert_eq!(fixture.home_team_name, "");
        assert_eq!(fixture.away_team_name, "SSC Napoli");
    }
}
