//! Turns response bodies into the typed models.
//!
//! Callers only get here with a non-empty body; an empty body is answered
//! with the model's default by the client before any parsing happens.

use serde::de::DeserializeOwned;

use crate::error::{JSONError, Result};
use crate::types::*;

/// Parse `body`, fetched from `resource`, into `T`.
pub fn map<T: DeserializeOwned>(resource: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| JSONError::new(resource, e).into())
}

pub fn competitions(resource: &str, body: &str) -> Result<Vec<Competition>> {
    map(resource, body)
}

pub fn teams(resource: &str, body: &str) -> Result<Teams> {
    map(resource, body)
}

pub fn league_table(resource: &str, body: &str) -> Result<LeagueTable> {
    map(resource, body)
}

pub fn team(resource: &str, body: &str) -> Result<Team> {
    map(resource, body)
}

pub fn players(resource: &str, body: &str) -> Result<Players> {
    map(resource, body)
}

pub fn fixtures(resource: &str, body: &str) -> Result<Fixtures> {
    map(resource, body)
}

pub fn single_fixture(resource: &str, body: &str) -> Result<SingleFixture> {
    map(resource, body)
}
