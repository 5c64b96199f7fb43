//! Profile documents sliced from the key's alphabet.
//!
//! Every field is a fixed-offset slice or transform of the 64-character
//! alphabet. The offsets are part of the data format: datasets produced by
//! other tools with the same layout can be queried with the same catalog.

use super::states;
use super::DocumentGenerator;
use crate::hash::Alphabet;
use crate::keys::KeyFormat;
use chrono::{DateTime, Datelike, TimeDelta, Timelike, Utc};
use workload_core::{Document, FieldValue};

const BASE_YEAR: i16 = 1985;
const GMTIME_STEP_DAYS: i64 = 396;
const MIN_COINS: f64 = 0.1;

/// Typed view of a profile document.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub city: String,
    pub realm: String,
    pub country: String,
    pub county: String,
    pub street: String,
    pub coins: f64,
    pub category: i16,
    pub year: i16,
    pub state: &'static str,
    pub full_state: &'static str,
    pub gmtime: [i16; 9],
    pub achievements: Vec<i16>,
}

impl Profile {
    pub fn from_key(key: &str) -> Self {
        Self::from_alphabet(&Alphabet::from_key(key))
    }

    pub fn from_alphabet(a: &Alphabet) -> Self {
        Self {
            name: format!("{} {}", a.slice(0..6), a.slice(6..12)),
            email: format!("{}@{}.com", a.slice(12..18), a.slice(18..24)),
            city: a.slice(24..30).to_string(),
            realm: a.slice(30..36).to_string(),
            country: a.slice(42..48).to_string(),
            county: a.slice(48..54).to_string(),
            street: a.slice(54..62).to_string(),
            coins: coins(a),
            category: (a.digit(41, 16) % 3) as i16,
            year: BASE_YEAR + a.digit(62, 32) as i16,
            state: states::lookup(a.position('7')).0,
            full_state: states::lookup(a.position('8')).1,
            gmtime: gmtime(a),
            achievements: achievements(a),
        }
    }

    pub fn to_document(&self) -> Document {
        let mut document = Document::new();
        let mut text = |name: &str, value: &str| {
            document.insert(name.to_string(), FieldValue::Text(value.to_string()));
        };
        text("name", &self.name);
        text("email", &self.email);
        text("city", &self.city);
        text("realm", &self.realm);
        text("country", &self.country);
        text("county", &self.county);
        text("street", &self.street);
        text("state", self.state);
        text("full_state", self.full_state);

        document.insert("coins".to_string(), FieldValue::Float(self.coins));
        document.insert("category".to_string(), FieldValue::Int(self.category.into()));
        document.insert("year".to_string(), FieldValue::Int(self.year.into()));
        document.insert(
            "gmtime".to_string(),
            FieldValue::IntArray(self.gmtime.iter().map(|v| i64::from(*v)).collect()),
        );
        document.insert(
            "achievements".to_string(),
            FieldValue::IntArray(self.achievements.iter().map(|v| i64::from(*v)).collect()),
        );
        document
    }
}

fn coins(a: &Alphabet) -> f64 {
    (f64::from(a.hex_window(36..40)) / 100.0).max(MIN_COINS)
}

/// Broken-down UTC time `396 * (digit % 12)` days after the epoch:
/// year, month, day, hour, minute, second, weekday, day of year, 0.
///
/// The weekday counts from Monday = 0, with Sunday = -1 rather than 6.
fn gmtime(a: &Alphabet) -> [i16; 9] {
    let steps = i64::from(a.digit(63, 16) % 12);
    let t: DateTime<Utc> =
        DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(GMTIME_STEP_DAYS * steps);
    [
        t.year() as i16,
        t.month() as i16,
        t.day() as i16,
        t.hour() as i16,
        t.minute() as i16,
        t.second() as i16,
        t.weekday().num_days_from_sunday() as i16 - 1,
        t.ordinal() as i16,
        0,
    ]
}

/// Running value over 16 characters, kept only while it stays below 256.
fn achievements(a: &Alphabet) -> Vec<i16> {
    let mut achievement: i16 = 256;
    let mut out = Vec::new();
    for (position, c) in a.slice(42..58).chars().enumerate() {
        let digit = c.to_digit(16).unwrap_or(0) as i16;
        achievement = (achievement + digit * position as i16) % 512;
        if achievement < 256 {
            out.push(achievement);
        }
    }
    out
}

/// Generator for profile documents keyed by padded record index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileGenerator;

impl ProfileGenerator {
    pub fn profile(&self, key: &str) -> Profile {
        Profile::from_key(key)
    }
}

impl DocumentGenerator for ProfileGenerator {
    fn key_format(&self) -> KeyFormat {
        KeyFormat::Padded
    }

    fn generate(&self, key: &str) -> Document {
        self.profile(key).to_document()
    }
}
