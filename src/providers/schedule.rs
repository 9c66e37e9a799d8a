//! ESPN scoreboard client: the NFL games played on a date.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::reference::StadiumTable;
use crate::scoring::ScheduledGame;
use crate::Result;


/// Base path for the ESPN site API, NFL section.
pub const ESPN_NFL_BASE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl";

#[derive(Debug, Deserialize)]
struct Scoreboard {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
struct Event {
    date: Option<String>,
    #[serde(default)]
    competitions: Vec<Competition>,
    status: Option<Status>,
}

#[derive(Debug, Deserialize)]
struct Competition {
    date: Option<String>,
    venue: Option<Venue>,
    #[serde(default)]
    competitors: Vec<Competitor>,
    status: Option<Status>,
}

#[derive(Debug, Deserialize)]
struct Venue {
    #[serde(rename = "fullName")]
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct Competitor {
    #[serde(rename = "homeAway")]
    home_away: String,
    team: Team,
}

#[derive(Debug, Deserialize)]
struct Team {
    #[serde(rename = "displayName")]
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(rename = "type")]
    kind: StatusType,
}

#[derive(Debug, Deserialize)]
struct StatusType {
    description: String,
}

impl Competition {
    fn team(&self, side: &str) -> Option<&str> {
        self.competitors
            .iter()
            .find(|c| c.home_away == side)
            .map(|c| c.team.display_name.as_str())
    }
}

/// Turn one scoreboard event into a game; events without both teams are dropped.
fn game_from_event(
    event: Event,
    date: NaiveDate,
    stadiums: &StadiumTable,
) -> Option<ScheduledGame> {
    let competition = event.competitions.into_iter().next()?;
    let home_team = competition.team("home")?.to_string();
    let away_team = competition.team("away")?.to_string();

    let stadium_name = stadiums
        .for_home_team(&home_team)
        .map(|(name, _)| name.to_string())
        .or_else(|| competition.venue.as_ref().map(|v| v.full_name.clone()))
        .unwrap_or_else(|| format!("{home_team} home stadium"));

    let status = competition
        .status
        .or(event.status)
        .map(|s| s.kind.description);

    Some(ScheduledGame {
        stadium_name,
        home_team,
        away_team,
        kickoff_time: competition.date.or(event.date),
        date,
        status,
    })
}

async fn request_scoreboard(
    client: &Client,
    base_url: &str,
    date: NaiveDate,
) -> Result<Scoreboard> {
    let url = format!("{base_url}/scoreboard");
    let params = [("dates", date.format("%Y%m%d").to_string())];

    let scoreboard = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<Scoreboard>()
        .await?;

    Ok(scoreboard)
}

/// Games on `date` from a scoreboard at `base_url`.
///
/// Any provider failure yields an empty schedule.
pub async fn fetch_schedule_with_base_url(
    client: &Client,
    base_url: &str,
    date: NaiveDate,
    stadiums: &StadiumTable,
) -> Vec<ScheduledGame> {
    match request_scoreboard(client, base_url, date).await {
        Ok(scoreboard) => {
            let games: Vec<ScheduledGame> = scoreboard
                .events
                .into_iter()
                .filter_map(|event| game_from_event(event, date, stadiums))
                .collect();
            debug!(%date, games = games.len(), "schedule loaded");
            games
        }
        Err(error) => {
            warn!(%date, %error, "schedule lookup failed");
            Vec::new()
        }
    }
}
