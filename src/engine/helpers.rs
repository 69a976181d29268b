use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::{
    catalog::Catalog,
    entities::{Place, Session},
    error::{place_not_found_error, session_not_found_error, Error},
};

pub fn fetch_session<'a>(
    sessions: &'a HashMap<Uuid, Session>,
    id: &Uuid,
) -> Result<&'a Session, Error> {
    sessions.get(id).ok_or_else(session_not_found_error)
}

pub fn fetch_session_for_update<'a>(
    sessions: &'a mut HashMap<Uuid, Session>,
    id: &Uuid,
) -> Result<&'a mut Session, Error> {
    sessions.get_mut(id).ok_or_else(session_not_found_error)
}

/// Mutations only accept names that exist in the catalog.
pub fn require_place<'a>(catalog: &'a Catalog, name: &str) -> Result<&'a Place, Error> {
    catalog.find(name).ok_or_else(|| place_not_found_error(name))
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
