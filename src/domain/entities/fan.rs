//! Domain entity representing a registered fan.

use chrono::NaiveDate;
use serde::Serialize;

use crate::utils::cpf::normalize_cpf;

/// A fan stored in the record store.
///
/// Social links are kept exactly as submitted (trimmed); an empty link is
/// stored as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fan {
    pub name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub tiktok: Option<String>,
    pub interests: String,
    pub events: String,
    pub purchases: String,
}

impl Fan {
    /// CPF digits without formatting, used for duplicate detection.
    pub fn cpf_digits(&self) -> String {
        normalize_cpf(&self.cpf)
    }
}

/// Input data for registering a new fan.
///
/// Built by the registration service once every field has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFan {
    pub name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub tiktok: Option<String>,
    pub interests: String,
    pub events: String,
    pub purchases: String,
}

impl From<NewFan> for Fan {
    fn from(new: NewFan) -> Self {
        Self {
            name: new.name,
            cpf: new.cpf,
            birth_date: new.birth_date,
            address: new.address,
            instagram: new.instagram,
            twitter: new.twitter,
            tiktok: new.tiktok,
            interests: new.interests,
            events: new.events,
            purchases: new.purchases,
        }
    }
}
