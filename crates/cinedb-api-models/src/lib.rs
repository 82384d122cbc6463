#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the CineDB movie collection.
//!
//! The backend speaks Spanish field names (`pelicula`, `genero`, `estreno`,
//! `calificacion`); the Rust side exposes English field names and maps them
//! with serde renames so the wire contract stays in one place.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned movie identifier.
pub type MovieId = i64;

/// Genre labels accepted by the catalog.
///
/// Values outside the fixed list are kept verbatim in [`Genre::Other`] so a
/// single unexpected record does not fail decoding of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
    /// `Accion`.
    Action,
    /// `Comedia`.
    Comedy,
    /// `Drama`.
    Drama,
    /// `Terror`.
    Horror,
    /// `Romance`.
    Romance,
    /// `Ciencia Ficcion`.
    ScienceFiction,
    /// `Animacion`.
    Animation,
    /// `Documental`.
    Documentary,
    /// `Musical`.
    Musical,
    /// Any label the backend returns that is not part of the fixed list.
    Other(String),
}

impl Genre {
    /// Genres offered by the create/edit form and the genre filter, in display order.
    pub const ALL: [Self; 9] = [
        Self::Action,
        Self::Comedy,
        Self::Drama,
        Self::Horror,
        Self::Romance,
        Self::ScienceFiction,
        Self::Animation,
        Self::Documentary,
        Self::Musical,
    ];

    /// Wire label for the genre.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Action => "Accion",
            Self::Comedy => "Comedia",
            Self::Drama => "Drama",
            Self::Horror => "Terror",
            Self::Romance => "Romance",
            Self::ScienceFiction => "Ciencia Ficcion",
            Self::Animation => "Animacion",
            Self::Documentary => "Documental",
            Self::Musical => "Musical",
            Self::Other(label) => label,
        }
    }

    /// Parse one of the fixed labels; returns `None` for anything else.
    #[must_use]
    pub fn from_known(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|genre| genre.as_str() == label)
    }

    /// Whether the genre belongs to the fixed list.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Genre {
    fn from(value: String) -> Self {
        Self::from_known(&value).unwrap_or(Self::Other(value))
    }
}

impl From<Genre> for String {
    fn from(value: Genre) -> Self {
        match value {
            Genre::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movie record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Identifier assigned by the backend on create.
    pub id: MovieId,
    /// Movie title.
    #[serde(rename = "pelicula")]
    pub title: String,
    /// Movie genre.
    #[serde(rename = "genero")]
    pub genre: Genre,
    /// Release year.
    #[serde(rename = "estreno")]
    pub year: i32,
    /// Personal rating on a 1–10 scale.
    #[serde(rename = "calificacion")]
    pub rating: f64,
}

impl Movie {
    /// Strip the identifier, producing the body used for updates.
    #[must_use]
    pub fn to_input(&self) -> MovieInput {
        MovieInput {
            title: self.title.clone(),
            genre: self.genre.clone(),
            year: self.year,
            rating: self.rating,
        }
    }
}

/// Request body for create (`POST`) and full replace (`PUT`) calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieInput {
    /// Movie title.
    #[serde(rename = "pelicula")]
    pub title: String,
    /// Movie genre.
    #[serde(rename = "genero")]
    pub genre: Genre,
    /// Release year.
    #[serde(rename = "estreno")]
    pub year: i32,
    /// Personal rating on a 1–10 scale.
    #[serde(rename = "calificacion")]
    pub rating: f64,
}
