//! Token service module for the stateless bearer credential
//!
//! Issues and validates signed, time-limited JWTs carrying the
//! authenticated identity. Validation is a pure function of the token and
//! the clock; no store lookup happens here.

mod service;

#[cfg(test)]
mod tests;

pub use service::TokenService;
