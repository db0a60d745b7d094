//! Note identifiers.
//!
//! An id is the current time in milliseconds, base 36, followed by a random
//! base-36 suffix taken from a v4 UUID. Ids are unique with overwhelming
//! probability but collisions are not detected: two notes created in the same
//! millisecond rely on the random suffix alone.

use crate::model::NoteId;
use chrono::Utc;
use uuid::Uuid;

const RADIX: u64 = 36;
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Default, Clone, Copy)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn next(&self) -> NoteId {
        let millis = Utc::now().timestamp_millis().max(0) as u64;
        let random = Uuid::new_v4().as_u128() as u64;
        NoteId::new(format!("{}{}", to_base36(millis), to_base36(random)))
    }

    /// Random token without the time prefix, used for confirmation handles.
    pub fn token(&self) -> String {
        to_base36(Uuid::new_v4().as_u128() as u64)
    }
}

pub(crate) fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % RADIX) as usize]);
        value /= RADIX;
    }
    out.reverse();
    // DIGITS is ASCII
    String::from_utf8(out).unwrap_or_default()
}
