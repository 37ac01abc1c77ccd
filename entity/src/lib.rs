//! Table mappings for the padel club application.
//!
//! Every entity module carries the sea-orm `Model` for its table plus, for the
//! tables this crate owns, a `Record` that pairs the model with the
//! relationships the data-access layer has fetched for it.

pub mod prelude;

mod macros;

pub mod dict;
pub mod fetched;
pub mod rating;
pub mod schema;

pub mod club;
pub mod event;
pub mod matches;
pub mod player;

pub mod club_admin;
pub mod event_participant;
pub mod match_request;
pub mod match_request_player;
pub mod matchmaking_settings;
pub mod matchmaking_suggestion;
pub mod player_availability;
pub mod tournament;
pub mod tournament_match;

pub use dict::{Dict, ToDict};
pub use fetched::Fetched;
