//! # Domain models for user records
//!
//! Defines the records returned by a [`crate::UserSource`]. The shapes follow the
//! JSON served by the demo users API (camelCase keys), so they derive
//! `Serialize + Deserialize` and decode straight from a response body.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserRecord`] | One user. Only a handful of fields are displayed (names, contact, company, address) and a few more are charted (age, height, weight, blood group, eye color, gender, university); the rest are carried along as fetched. |
//! | [`UsersPage`] | The envelope of the list endpoints: a page of users plus the `total`, `skip` and `limit` echoed by the server. |
//! | [`Address`], [`Company`], [`Hair`], [`Bank`], [`Crypto`], [`Coordinates`] | Nested sub-objects of a user. |
//!
//! Every field except `id` falls back to its default when missing, so a partial
//! record still decodes. `id` is the only field the views key on.

use serde::{Deserialize, Serialize};

/// A single user as served by the remote source.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u32,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub maiden_name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub birth_date: String,
    /// Avatar URL.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub hair: Hair,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub mac_address: String,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub bank: Bank,
    #[serde(default)]
    pub company: Company,
    #[serde(default)]
    pub ein: String,
    #[serde(default)]
    pub ssn: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub crypto: Crypto,
    #[serde(default)]
    pub role: String,
}

impl UserRecord {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Avatar fallback: first letter of the first and last name.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }
}

/// Postal address. `address` is the street line and is not always shown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address: Option<String>,
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub postal_code: String,
    pub coordinates: Coordinates,
    pub country: String,
}

impl Address {
    /// "City, State 12345"
    pub fn locality(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.postal_code)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hair {
    pub color: String,
    pub r#type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bank {
    pub card_expire: String,
    pub card_number: String,
    pub card_type: String,
    pub currency: String,
    pub iban: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub department: String,
    pub name: String,
    pub title: String,
    pub address: Address,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Crypto {
    pub coin: String,
    pub wallet: String,
    pub network: String,
}

/// Envelope returned by `GET /users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersPage {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}
