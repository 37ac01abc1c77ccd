//! Relationship loaders. These are the only place a [`Fetched`] slot is moved to
//! `Loaded`; serialization only ever reads what was put there.

use async_trait::async_trait;
use entity::prelude::*;
use entity::{
    club_admin, event_participant, match_request, match_request_player, matchmaking_settings,
    matchmaking_suggestion, player_availability, tournament, tournament_match, Fetched,
};
use sea_orm::prelude::Uuid;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, ModelTrait, PrimaryKeyTrait, QueryOrder};

#[async_trait]
pub trait Load: Sized + Send {
    type Entity: EntityTrait;
    /// The entity's sea-orm relation enum doubles as the name of what to load.
    /// Back-references from a child to the parent that owns it in a collection
    /// (`match_request_player::Relation::MatchRequest`) have no slot on the
    /// record and are not loadable: loading them leaves the record unchanged.
    type Relation: Copy + Send + Sync;

    async fn load<C>(&mut self, db: &C, relation: Self::Relation) -> Result<(), DbErr>
    where
        C: ConnectionTrait;

    async fn load_all<C>(&mut self, db: &C, relations: &[Self::Relation]) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        for relation in relations {
            self.load(db, *relation).await?;
        }
        Ok(())
    }
}

/// Fetches a row by id and loads the listed relationships onto its record.
pub async fn find_with<R, C>(
    db: &C,
    id: Uuid,
    include: &[R::Relation],
) -> Result<Option<R>, DbErr>
where
    R: Load + From<<R::Entity as EntityTrait>::Model>,
    Uuid: Into<<<R::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    C: ConnectionTrait,
{
    let Some(model) = <R::Entity as EntityTrait>::find_by_id(id).one(db).await? else {
        return Ok(None);
    };
    let mut record = R::from(model);
    record.load_all(db, include).await?;
    Ok(Some(record))
}

/// Loads one relationship on every record of an already loaded collection.
pub async fn load_each<R, C>(db: &C, records: &mut [R], relation: R::Relation) -> Result<(), DbErr>
where
    R: Load,
    C: ConnectionTrait,
{
    for record in records.iter_mut() {
        record.load(db, relation).await?;
    }
    Ok(())
}

/// A missing foreign key still counts as loaded: there is simply nothing on the other side.
async fn fetch_one<E, C>(db: &C, id: Option<Uuid>) -> Result<Fetched<Option<E::Model>>, DbErr>
where
    E: EntityTrait,
    Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    C: ConnectionTrait,
{
    match id {
        Some(id) => E::find_by_id(id).one(db).await.map(Fetched::Loaded),
        None => Ok(Fetched::Loaded(None)),
    }
}

#[async_trait]
impl Load for club_admin::Record {
    type Entity = ClubAdmin;
    type Relation = club_admin::Relation;

    async fn load<C>(&mut self, db: &C, relation: Self::Relation) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        match relation {
            club_admin::Relation::Club => {
                self.club = fetch_one::<Club, _>(db, Some(self.model.club_id)).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Load for matchmaking_settings::Record {
    type Entity = MatchmakingSettings;
    type Relation = matchmaking_settings::Relation;

    async fn load<C>(&mut self, db: &C, relation: Self::Relation) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        match relation {
            matchmaking_settings::Relation::Club => {
                self.club = fetch_one::<Club, _>(db, Some(self.model.club_id)).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Load for player_availability::Record {
    type Entity = PlayerAvailability;
    type Relation = player_availability::Relation;

    async fn load<C>(&mut self, db: &C, relation: Self::Relation) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        match relation {
            player_availability::Relation::Player => {
                self.player = fetch_one::<Player, _>(db, Some(self.model.player_id)).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Load for match_request::Record {
    type Entity = MatchRequest;
    type Relation = match_request::Relation;

    async fn load<C>(&mut self, db: &C, relation: Self::Relation) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        match relation {
            match_request::Relation::Club => {
                self.club = fetch_one::<Club, _>(db, Some(self.model.club_id)).await?;
            }
            match_request::Relation::RequestedBy => {
                self.requested_by =
                    fetch_one::<Player, _>(db, Some(self.model.requested_by_id)).await?;
            }
            match_request::Relation::Match => {
                self.r#match = fetch_one::<Match, _>(db, self.model.match_id).await?;
            }
            match_request::Relation::Players => {
                let invitees = self
                    .model
                    .find_related(MatchRequestPlayer)
                    .order_by_asc(match_request_player::Column::CreatedAt)
                    .order_by_asc(match_request_player::Column::PlayerId)
                    .all(db)
                    .await?;
                self.players = Fetched::Loaded(invitees.into_iter().map(Into::into).collect());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Load for match_request_player::Record {
    type Entity = MatchRequestPlayer;
    type Relation = match_request_player::Relation;

    /// The invitee has no slot for its parent request; it is only ever reached
    /// through `match_request::Record::players`, so `MatchRequest` loads nothing.
    async fn load<C>(&mut self, db: &C, relation: Self::Relation) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        match relation {
            match_request_player::Relation::Player => {
                self.player = fetch_one::<Player, _>(db, Some(self.model.player_id)).await?;
            }
            match_request_player::Relation::MatchRequest => {}
        }
        Ok(())
    }
}

#[async_trait]
impl Load for matchmaking_suggestion::Record {
    type Entity = MatchmakingSuggestion;
    type Relation = matchmaking_suggestion::Relation;

    async fn load<C>(&mut self, db: &C, relation: Self::Relation) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        use matchmaking_suggestion::Relation;

        match relation {
            Relation::Club => {
                self.club = fetch_one::<Club, _>(db, Some(self.model.club_id)).await?;
            }
            Relation::Player1 => {
                self.player1 = fetch_one::<Player, _>(db, Some(self.model.player1_id)).await?;
            }
            Relation::Player2 => {
                self.player2 = fetch_one::<Player, _>(db, Some(self.model.player2_id)).await?;
            }
            Relation::Player3 => {
                self.player3 = fetch_one::<Player, _>(db, Some(self.model.player3_id)).await?;
            }
            Relation::Player4 => {
                self.player4 = fetch_one::<Player, _>(db, Some(self.model.player4_id)).await?;
            }
            Relation::Match => {
                self.r#match = fetch_one::<Match, _>(db, self.model.match_id).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Load for event_participant::Record {
    type Entity = EventParticipant;
    type Relation = event_participant::Relation;

    async fn load<C>(&mut self, db: &C, relation: Self::Relation) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        match relation {
            event_participant::Relation::Event => {
                self.event = fetch_one::<Event, _>(db, Some(self.model.event_id)).await?;
            }
            event_participant::Relation::Player => {
                self.player = fetch_one::<Player, _>(db, Some(self.model.player_id)).await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Load for tournament::Record {
    type Entity = Tournament;
    type Relation = tournament::Relation;

    async fn load<C>(&mut self, db: &C, relation: Self::Relation) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        match relation {
            tournament::Relation::Event => {
                self.event = fetch_one::<Event, _>(db, Some(self.model.id)).await?;
            }
            tournament::Relation::Matches => {
                let slots = self
                    .model
                    .find_related(TournamentMatch)
                    .order_by_asc(tournament_match::Column::Round)
                    .order_by_asc(tournament_match::Column::Position)
                    .all(db)
                    .await?;
                self.matches = Fetched::Loaded(slots.into_iter().map(Into::into).collect());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Load for tournament_match::Record {
    type Entity = TournamentMatch;
    type Relation = tournament_match::Relation;

    async fn load<C>(&mut self, db: &C, relation: Self::Relation) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        match relation {
            tournament_match::Relation::Tournament => {
                let tournament = Tournament::find_by_id(self.model.tournament_id)
                    .one(db)
                    .await?;
                self.tournament =
                    Fetched::Loaded(tournament.map(|model| Box::new(model.into())));
            }
            tournament_match::Relation::Match => {
                self.r#match = fetch_one::<Match, _>(db, Some(self.model.match_id)).await?;
            }
        }
        Ok(())
    }
}
