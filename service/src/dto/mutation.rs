use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use entity::{
    club_admin, match_request, match_request_player, matchmaking_settings,
    matchmaking_suggestion, player_availability, tournament, tournament_match, Fetched,
};
use itertools::Itertools;
use log::{info, warn};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, IntoActiveModel, TransactionTrait,
};

use super::*;
use crate::query::{club_admin_by_username, event_exists};

impl NewClubAdmin {
    pub async fn insert(self, db: &impl ConnectionTrait) -> Result<club_admin::Model, ServiceError> {
        self.insert_with_cost(db, DEFAULT_COST).await
    }

    /// Same as [`insert`](Self::insert) with an explicit bcrypt cost.
    pub async fn insert_with_cost(
        self,
        db: &impl ConnectionTrait,
        cost: u32,
    ) -> Result<club_admin::Model, ServiceError> {
        let hashed_password = hash(&self.password, cost)?;
        let admin = club_admin::ActiveModel {
            username: Set(self.username),
            password: Set(hashed_password),
            email: Set(self.email),
            first_name: Set(self.first_name),
            last_name: Set(self.last_name),
            club_id: Set(self.club_id),
            is_super_admin: Set(self.is_super_admin),
            ..Default::default()
        };
        let admin = admin.insert(db).await?;
        info!("Created club admin {} for club {}", admin.username, admin.club_id);
        Ok(admin)
    }
}

impl AdminLogin {
    /// Checks the password and stamps `last_login` on success.
    pub async fn authenticate(
        &self,
        db: &impl ConnectionTrait,
    ) -> Result<club_admin::Model, ServiceError> {
        let Some(admin) = club_admin_by_username(db, &self.username).await? else {
            warn!("Login attempt for unknown club admin {}", self.username);
            return Err(ServiceError::WrongCredentials);
        };
        if !verify(&self.password, &admin.password)? {
            warn!("Wrong password for club admin {}", self.username);
            return Err(ServiceError::WrongCredentials);
        }
        let mut admin = admin.into_active_model();
        admin.last_login = Set(Some(Utc::now().into()));
        Ok(admin.update(db).await?)
    }
}

impl SettingsUpdate {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.min_matches_for_trueskill.is_some_and(|value| value < 0) {
            return Err(ServiceError::InvalidSettings(
                "minimum matches for trueskill cannot be negative",
            ));
        }
        Ok(())
    }

    pub(crate) fn apply(self, settings: &mut matchmaking_settings::ActiveModel) {
        if let Some(value) = self.min_skill_difference {
            settings.min_skill_difference = Set(value);
        }
        if let Some(value) = self.max_skill_difference {
            settings.max_skill_difference = Set(value);
        }
        if let Some(value) = self.min_matches_for_trueskill {
            settings.min_matches_for_trueskill = Set(value);
        }
        if let Some(value) = self.consider_preferred_side {
            settings.consider_preferred_side = Set(value);
        }
        if let Some(value) = self.consider_gender {
            settings.consider_gender = Set(value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_skill_difference.is_none()
            && self.max_skill_difference.is_none()
            && self.min_matches_for_trueskill.is_none()
            && self.consider_preferred_side.is_none()
            && self.consider_gender.is_none()
    }
}

impl NewAvailability {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if !(0..=6).contains(&self.day_of_week) {
            return Err(ServiceError::InvalidAvailability(
                "day of week must be between 0 (Sunday) and 6 (Saturday)",
            ));
        }
        if self.start_time >= self.end_time {
            return Err(ServiceError::InvalidAvailability(
                "start time must be before end time",
            ));
        }
        Ok(())
    }

    pub async fn insert(
        self,
        db: &impl ConnectionTrait,
    ) -> Result<player_availability::Model, ServiceError> {
        self.validate()?;
        let availability = player_availability::ActiveModel {
            player_id: Set(self.player_id),
            day_of_week: Set(self.day_of_week),
            start_time: Set(self.start_time),
            end_time: Set(self.end_time),
            ..Default::default()
        };
        Ok(availability.insert(db).await?)
    }
}

impl NewMatchRequest {
    /// Inserts the request together with one `invited` row per distinct invitee.
    /// The requester is never invited to their own request.
    pub async fn insert(
        self,
        db: &DatabaseConnection,
    ) -> Result<match_request::Record, ServiceError> {
        let txn = db.begin().await?;
        let request = match_request::ActiveModel {
            club_id: Set(self.club_id),
            requested_by_id: Set(self.requested_by_id),
            preferred_date: Set(self.preferred_date),
            notes: Set(self.notes),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut invitees = Vec::new();
        for player_id in self
            .invited_player_ids
            .into_iter()
            .unique()
            .filter(|player_id| *player_id != request.requested_by_id)
        {
            let invitee = match_request_player::ActiveModel {
                match_request_id: Set(request.id),
                player_id: Set(player_id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            invitees.push(match_request_player::Record::from(invitee));
        }
        txn.commit().await?;
        info!(
            "Match request {} created with {} invitees",
            request.id,
            invitees.len()
        );

        let mut record = match_request::Record::from(request);
        record.players = Fetched::Loaded(invitees);
        Ok(record)
    }
}

impl NewSuggestion {
    pub fn balance_score(&self) -> f64 {
        self.balance_score
            .unwrap_or_else(|| (self.team1_skill - self.team2_skill).abs())
    }

    pub async fn insert(
        self,
        db: &impl ConnectionTrait,
    ) -> Result<matchmaking_suggestion::Model, ServiceError> {
        if !self.players.iter().all_unique() {
            return Err(ServiceError::DuplicatePlayers);
        }
        let [player1, player2, player3, player4] = self.players;
        let suggestion = matchmaking_suggestion::ActiveModel {
            club_id: Set(self.club_id),
            player1_id: Set(player1),
            player2_id: Set(player2),
            player3_id: Set(player3),
            player4_id: Set(player4),
            team1_skill: Set(self.team1_skill),
            team2_skill: Set(self.team2_skill),
            balance_score: Set(self.balance_score()),
            ..Default::default()
        };
        Ok(suggestion.insert(db).await?)
    }
}

impl NewTournament {
    /// Attaches bracket data to an existing event, reusing the event's id.
    pub async fn insert(self, db: &impl ConnectionTrait) -> Result<tournament::Model, ServiceError> {
        if !event_exists(db, self.event_id).await? {
            warn!("Refusing tournament for unknown event {}", self.event_id);
            return Err(ServiceError::NotFound("event"));
        }
        let mut tournament = tournament::ActiveModel {
            id: Set(self.event_id),
            format: Set(self.format.to_string()),
            ..Default::default()
        };
        if let Some(rounds) = self.rounds {
            tournament.rounds = Set(rounds);
        }
        if let Some(players_per_match) = self.players_per_match {
            tournament.players_per_match = Set(players_per_match);
        }
        Ok(tournament.insert(db).await?)
    }
}

impl NewTournamentMatch {
    pub async fn insert(
        self,
        db: &impl ConnectionTrait,
    ) -> Result<tournament_match::Model, ServiceError> {
        let slot = tournament_match::ActiveModel {
            tournament_id: Set(self.tournament_id),
            match_id: Set(self.match_id),
            round: Set(self.round),
            position: Set(self.position),
            ..Default::default()
        };
        Ok(slot.insert(db).await?)
    }
}
