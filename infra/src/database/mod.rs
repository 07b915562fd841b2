//! Database module - PostgreSQL implementations using SQLx

pub mod connection;
pub mod postgres;

pub use connection::DatabasePool;
pub use postgres::PgAccountStore;
