pub mod config;
pub mod dto;
pub mod error;
pub mod load;
pub mod mutation;
pub mod query;

pub use load::{find_with, load_each, Load};
pub use mutation::*;
pub use query::*;

pub use entity;
pub use sea_orm;
