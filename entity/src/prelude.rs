pub use super::club::Entity as Club;
pub use super::club_admin::Entity as ClubAdmin;
pub use super::event::Entity as Event;
pub use super::event_participant::Entity as EventParticipant;
pub use super::match_request::Entity as MatchRequest;
pub use super::match_request_player::Entity as MatchRequestPlayer;
pub use super::matches::Entity as Match;
pub use super::matchmaking_settings::Entity as MatchmakingSettings;
pub use super::matchmaking_suggestion::Entity as MatchmakingSuggestion;
pub use super::player::Entity as Player;
pub use super::player_availability::Entity as PlayerAvailability;
pub use super::tournament::Entity as Tournament;
pub use super::tournament_match::Entity as TournamentMatch;
