use sea_orm::DbErr;
use thiserror::Error;

/// Failures of the data-access layer. Storage errors, including foreign key and
/// uniqueness violations, are passed through unchanged in `Db`.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("missing configuration value {0}")]
    MissingConfig(&'static str),
    #[error("invalid availability: {0}")]
    InvalidAvailability(&'static str),
    #[error("{entity} cannot go from {from} to {to}")]
    InvalidStatusTransition {
        entity: &'static str,
        from: String,
        to: String,
    },
    #[error("unknown {entity} status {status}")]
    UnknownStatus { entity: &'static str, status: String },
    #[error("invalid matchmaking settings: {0}")]
    InvalidSettings(&'static str),
    #[error("event {0} has no free slots")]
    EventFull(sea_orm::prelude::Uuid),
    #[error("a match needs {needed} confirmed players, found {confirmed}")]
    NotEnoughConfirmed { needed: u64, confirmed: u64 },
    #[error("a suggestion needs four different players")]
    DuplicatePlayers,
    #[error("wrong username or password")]
    WrongCredentials,
    #[error("unable to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}
