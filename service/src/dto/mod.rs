mod mutation;

use chrono::NaiveTime;
use sea_orm::prelude::{DateTimeWithTimeZone, Uuid};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::ServiceError;

/// Status of a match request as stored in `match_requests.status`.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MatchRequestStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl MatchRequestStatus {
    pub fn can_become(self, next: Self) -> bool {
        use MatchRequestStatus::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Pending, Completed)
                | (Processing, Completed)
                | (Pending, Cancelled)
                | (Processing, Cancelled)
        )
    }
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum InvitationStatus {
    Invited,
    Confirmed,
    Rejected,
}

impl InvitationStatus {
    /// An invitation is answered once.
    pub fn can_become(self, next: Self) -> bool {
        use InvitationStatus::*;
        matches!((self, next), (Invited, Confirmed) | (Invited, Rejected))
    }
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SuggestionStatus {
    Pending,
    Accepted,
    Rejected,
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ParticipantStatus {
    Registered,
    Confirmed,
    Cancelled,
}

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TournamentFormat {
    Knockout,
    RoundRobin,
    Groups,
}

/// Reads a status column back into its enum.
pub fn parse_status<S>(entity: &'static str, status: &str) -> Result<S, ServiceError>
where
    S: std::str::FromStr,
{
    status.parse().map_err(|_| ServiceError::UnknownStatus {
        entity,
        status: status.to_owned(),
    })
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewClubAdmin {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub club_id: Uuid,
    #[serde(default)]
    pub is_super_admin: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AdminLogin {
    pub username: String,
    pub password: String,
}

/// Partial update of a club's matchmaking thresholds; `None` keeps the stored value.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub min_skill_difference: Option<f64>,
    pub max_skill_difference: Option<f64>,
    pub min_matches_for_trueskill: Option<i32>,
    pub consider_preferred_side: Option<bool>,
    pub consider_gender: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewAvailability {
    pub player_id: Uuid,
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewMatchRequest {
    pub club_id: Uuid,
    pub requested_by_id: Uuid,
    pub preferred_date: Option<DateTimeWithTimeZone>,
    pub notes: Option<String>,
    #[serde(default)]
    pub invited_player_ids: Vec<Uuid>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewSuggestion {
    pub club_id: Uuid,
    /// Seats 1 and 2 play together against seats 3 and 4.
    pub players: [Uuid; 4],
    pub team1_skill: f64,
    pub team2_skill: f64,
    pub balance_score: Option<f64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewTournament {
    pub event_id: Uuid,
    pub format: TournamentFormat,
    pub rounds: Option<i32>,
    pub players_per_match: Option<i32>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NewTournamentMatch {
    pub tournament_id: Uuid,
    pub match_id: Uuid,
    pub round: i32,
    pub position: i32,
}
