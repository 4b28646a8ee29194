use clap::{Args, Parser, ValueEnum};
use tracing::debug;

use football_data::types::{Fixture, Fixtures};
use football_data::{FootballDataClient, TimeFrame, Venue};

#[derive(Parser, Debug)]
pub enum Cmd {
    /// Competitions of a season
    Competitions { season: i32 },
    /// Teams of a competition
    Teams { competition: i64 },
    /// League table of a competition
    Table {
        competition: i64,
        #[arg(long)]
        matchday: Option<i32>,
    },
    Team { id: i64 },
    /// Squad of a team
    Players { team: i64 },
    /// Fixtures of a competition
    Fixtures {
        competition: i64,
        #[arg(long, conflicts_with = "time_frame")]
        matchday: Option<i32>,
        #[arg(long, value_enum)]
        time_frame: Option<TimeFrameArg>,
        /// Window length for --time-frame, 7 when left out
        #[arg(long, requires = "time_frame")]
        days: Option<i32>,
    },
    /// Fixtures across competitions
    LeagueFixtures {
        /// League codes, e.g. PL,SA
        #[arg(long, value_delimiter = ',')]
        league: Vec<String>,
        #[command(flatten)]
        window: Window,
    },
    /// A single fixture with its head-to-head record
    Fixture {
        id: i64,
        #[arg(long)]
        head2head: Option<u32>,
    },
    /// Fixtures of a team in a season
    TeamFixtures {
        team: i64,
        season: i32,
        #[arg(long, value_enum)]
        venue: Option<VenueArg>,
        #[command(flatten)]
        window: Window,
    },
}

#[derive(Args, Debug)]
pub struct Window {
    #[arg(long, value_enum, default_value_t = TimeFrameArg::Next)]
    time_frame: TimeFrameArg,
    #[arg(long, default_value_t = 7)]
    days: i32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TimeFrameArg {
    Next,
    Past,
}

impl From<TimeFrameArg> for TimeFrame {
    fn from(arg: TimeFrameArg) -> Self {
        match arg {
            TimeFrameArg::Next => TimeFrame::Next,
            TimeFrameArg::Past => TimeFrame::Past,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum VenueArg {
    Home,
    Away,
}

impl From<VenueArg> for Venue {
    fn from(arg: VenueArg) -> Self {
        match arg {
            VenueArg::Home => Venue::Home,
            VenueArg::Away => Venue::Away,
        }
    }
}

fn score(goals: Option<u32>) -> String {
    goals.map_or_else(|| "-".into(), |g| g.to_string())
}

fn print_fixture(fixture: &Fixture) {
    let date = fixture
        .date
        .map_or_else(|| "----------".into(), |d| d.to_string());
    println!(
        " {} | {:?} | {} {} - {} {}",
        date,
        fixture.status,
        fixture.home_team_name,
        score(fixture.result.goals_home_team),
        score(fixture.result.goals_away_team),
        fixture.away_team_name
    );
}

fn print_fixtures(fixtures: &Fixtures) {
    if let (Some(start), Some(end)) = (fixtures.time_frame_start, fixtures.time_frame_end) {
        println!("{start} .. {end}");
    }
    println!("Date | Status | Fixture");
    for fixture in &fixtures.fixtures {
        print_fixture(fixture);
    }
}

impl Cmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let client = FootballDataClient::from_env()?;
        debug!(base_url = client.config().base_url(), "client ready");

        match self {
            Cmd::Competitions { season } => {
                println!("Id | League | Competition");
                for competition in client.competitions(season).await? {
                    println!(
                        " {} | {} | {}",
                        competition.id,
                        competition.league.unwrap_or_default(),
                        competition.name
                    );
                }
            }
            Cmd::Teams { competition } => {
                println!("Id | Code | Team");
                for team in client.competition_teams(competition).await?.teams {
                    println!(" {} | {} | {}", team.id, team.code.unwrap_or_default(), team.name);
                }
            }
            Cmd::Table {
                competition,
                matchday,
            } => {
                let table = match matchday {
                    Some(matchday) => client.league_table_at_matchday(competition, matchday).await?,
                    None => client.league_table(competition).await?,
                };
                println!("{} (matchday {})", table.league_caption, table.matchday);
                println!("# | Played | Goals | Diff | Points | Team");
                for row in table.standing {
                    println!(
                        " {} | {} | {}:{} | {} | {} | {}",
                        row.rank,
                        row.played_games,
                        row.goals,
                        row.goals_against,
                        row.goal_difference,
                        row.points,
                        row.team_name
                    );
                }
            }
            Cmd::Team { id } => {
                let team = client.team(id).await?;
                println!("{} ({})", team.name, team.code.unwrap_or_default());
                if let Some(value) = team.squad_market_value {
                    println!("squad market value: {value}");
                }
                if let Some(crest) = team.crest_url {
                    println!("crest: {crest}");
                }
            }
            Cmd::Players { team } => {
                println!("No | Position | Born | Player");
                for player in client.team_players(team).await?.players {
                    println!(
                        " {} | {} | {} | {}",
                        player.jersey_number.map_or_else(|| "-".into(), |n| n.to_string()),
                        player.position.unwrap_or_default(),
                        player
                            .date_of_birth
                            .map_or_else(|| "-".into(), |d| d.to_string()),
                        player.name
                    );
                }
            }
            Cmd::Fixtures {
                competition,
                matchday,
                time_frame,
                days,
            } => {
                let fixtures = match (matchday, time_frame) {
                    (Some(matchday), _) => client.fixtures_by_matchday(competition, matchday).await?,
                    (None, Some(time_frame)) => {
                        client
                            .fixtures_by_time_frame(competition, time_frame.into(), days.unwrap_or(7))
                            .await?
                    }
                    (None, None) => client.fixtures(competition).await?,
                };
                print_fixtures(&fixtures);
            }
            Cmd::LeagueFixtures { league, window } => {
                let fixtures = client
                    .fixtures_by_leagues(window.time_frame.into(), window.days, Some(league.as_slice()))
                    .await?;
                print_fixtures(&fixtures);
            }
            Cmd::Fixture { id, head2head } => {
                let single = client.fixture(id, head2head).await?;
                print_fixture(&single.fixture);
                let h2h = single.head2head;
                println!(
                    "last {} meetings: {} home wins, {} away wins, {} draws",
                    h2h.count, h2h.home_team_wins, h2h.away_team_wins, h2h.draws
                );
                for fixture in &h2h.fixtures {
                    print_fixture(fixture);
                }
            }
            Cmd::TeamFixtures {
                team,
                season,
                venue,
                window,
            } => {
                let fixtures = client
                    .team_fixtures(
                        season,
                        team,
                        venue.map(Venue::from),
                        window.time_frame.into(),
                        window.days,
                    )
                    .await?;
                print_fixtures(&fixtures);
            }
        }

        Ok(())
    }
}
