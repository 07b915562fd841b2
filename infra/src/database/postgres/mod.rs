//! PostgreSQL implementations of the core repository traits

mod account_store_impl;

pub use account_store_impl::PgAccountStore;
