use std::{
    collections::{BTreeMap, BTreeSet},
    num::NonZeroU32,
};

use serde::Serialize;

/// German minimum-age rating used when no certificate link exists.
pub const NO_CERTIFICATE: u8 = 99;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Actor,
    Director,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Actor => "actor",
            Role::Director => "director",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Award {
    pub description: String,
    pub outcome: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Ratings {
    pub rating_imdb: f64,
    pub rating_imdb_count: u64,
}

/// Metadata of one movie, assembled from its profile page and sub-pages.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MovieRecord {
    pub external_id: NonZeroU32,
    pub title_orig: String,
    pub year: u16,
    pub duration_minutes: Option<u32>,
    pub content_rating: u8,
    pub storyline: String,
    pub synopsis: String,
    pub genres: BTreeSet<String>,
    pub persons: BTreeMap<Role, Vec<u32>>,
    pub awards: BTreeMap<String, Vec<Award>>,
    pub ratings: Ratings,
    pub budget: Option<u64>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Listing {
    Top250,
    Bottom100,
    Top250English,
}

impl Listing {
    pub fn name(self) -> &'static str {
        match self {
            Listing::Top250 => "top250",
            Listing::Bottom100 => "bottom100",
            Listing::Top250English => "top250-english",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Listing::Top250 => "/chart/top",
            Listing::Bottom100 => "/chart/bottom",
            Listing::Top250English => "/chart/top-english-movies",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "top250" | "url_top250" => Some(Listing::Top250),
            "bottom100" | "url_bottom100" => Some(Listing::Bottom100),
            "top250-english" | "url_top250_engl" => Some(Listing::Top250English),
            _ => None,
        }
    }
}
