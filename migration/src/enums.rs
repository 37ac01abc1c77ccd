use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub(crate) enum Timestamps {
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Club {
    #[sea_orm(iden = "clubs")]
    Table,
    Id,
    Name,
    NameFep,
    SearchKey,
    Logo,
    Url,
    Email,
    PhoneNumber,
    PostalCode,
    IsPremium,
    IsPartner,
}

#[derive(DeriveIden)]
pub(crate) enum Player {
    #[sea_orm(iden = "players")]
    Table,
    Id,
    PhoneNumber,
    Name,
    ClubId,
    Mu,
    Sigma,
    Trueskill,
    PreferredSide,
    Sex,
    MatchesPlayed,
    MatchesWon,
}

#[derive(DeriveIden)]
pub(crate) enum Match {
    #[sea_orm(iden = "matches")]
    Table,
    Id,
    ClubId,
    CreatedById,
    IsResultValidated,
    PlayedOn,
    Result,
}

#[derive(DeriveIden)]
pub(crate) enum Event {
    #[sea_orm(iden = "events")]
    Table,
    Id,
    ClubId,
    #[sea_orm(iden = "type")]
    EventType,
    Title,
    Description,
    Price,
    StartDate,
    EndDate,
    RegistrationDeadline,
    TotalSlots,
}

#[derive(DeriveIden)]
pub(crate) enum ClubAdmin {
    #[sea_orm(iden = "club_admins")]
    Table,
    Id,
    Username,
    Password,
    Email,
    FirstName,
    LastName,
    ClubId,
    IsSuperAdmin,
    LastLogin,
}

#[derive(DeriveIden)]
pub(crate) enum MatchmakingSettings {
    #[sea_orm(iden = "matchmaking_settings")]
    Table,
    Id,
    ClubId,
    MinSkillDifference,
    MaxSkillDifference,
    MinMatchesForTrueskill,
    ConsiderPreferredSide,
    ConsiderGender,
}

#[derive(DeriveIden)]
pub(crate) enum PlayerAvailability {
    #[sea_orm(iden = "player_availability")]
    Table,
    Id,
    PlayerId,
    DayOfWeek,
    StartTime,
    EndTime,
}

#[derive(DeriveIden)]
pub(crate) enum MatchRequest {
    #[sea_orm(iden = "match_requests")]
    Table,
    Id,
    ClubId,
    RequestedById,
    Status,
    PreferredDate,
    Notes,
    MatchId,
}

#[derive(DeriveIden)]
pub(crate) enum MatchRequestPlayer {
    #[sea_orm(iden = "match_request_players")]
    Table,
    MatchRequestId,
    PlayerId,
    Status,
}

#[derive(Clone, Copy, DeriveIden)]
pub(crate) enum MatchmakingSuggestion {
    #[sea_orm(iden = "matchmaking_suggestions")]
    Table,
    Id,
    ClubId,
    #[sea_orm(iden = "player1_id")]
    Player1Id,
    #[sea_orm(iden = "player2_id")]
    Player2Id,
    #[sea_orm(iden = "player3_id")]
    Player3Id,
    #[sea_orm(iden = "player4_id")]
    Player4Id,
    #[sea_orm(iden = "team1_skill")]
    Team1Skill,
    #[sea_orm(iden = "team2_skill")]
    Team2Skill,
    BalanceScore,
    Status,
    MatchId,
}

#[derive(DeriveIden)]
pub(crate) enum EventParticipant {
    #[sea_orm(iden = "event_participants")]
    Table,
    EventId,
    PlayerId,
    Status,
}

#[derive(DeriveIden)]
pub(crate) enum Tournament {
    #[sea_orm(iden = "tournaments")]
    Table,
    Id,
    Format,
    Rounds,
    PlayersPerMatch,
}

#[derive(DeriveIden)]
pub(crate) enum TournamentMatch {
    #[sea_orm(iden = "tournament_matches")]
    Table,
    Id,
    TournamentId,
    MatchId,
    Round,
    Position,
}
