//! Derived views over the fetched movie list.
//!
//! # Design
//! - Filtering and statistics are recomputed from the full list on every render.
//! - Statistics never look at the filtered view.
//! - Colour bands are closed enums mapped exhaustively to classes.

use crate::models::{Genre, Movie};
use std::collections::HashSet;

/// Ratings at or above this value count as excellent.
pub const EXCELLENT_RATING: f64 = 8.0;

/// Search text plus optional genre restriction.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MovieFilters {
    /// Case-insensitive substring matched against titles.
    pub search: String,
    /// Exact genre to keep; `None` keeps every genre.
    pub genre: Option<Genre>,
}

impl MovieFilters {
    /// Whether `movie` passes both predicates.
    #[must_use]
    pub fn matches(&self, movie: &Movie) -> bool {
        let needle = self.search.to_lowercase();
        let title_ok = movie.title.to_lowercase().contains(&needle);
        let genre_ok = self.genre.as_ref().is_none_or(|genre| *genre == movie.genre);
        title_ok && genre_ok
    }
}

/// Map the genre `<select>` value to a filter; the empty option means "all".
#[must_use]
pub fn genre_filter_from_value(value: &str) -> Option<Genre> {
    if value.is_empty() {
        None
    } else {
        Some(Genre::from(value.to_string()))
    }
}

/// Movies that pass `filters`, in list order.
#[must_use]
pub fn filter_movies<'a>(movies: &'a [Movie], filters: &MovieFilters) -> Vec<&'a Movie> {
    movies.iter().filter(|movie| filters.matches(movie)).collect()
}

/// Headline numbers shown above the list.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieStats {
    /// Number of movies in the catalog.
    pub total: usize,
    /// Mean rating, `None` for an empty catalog.
    pub average_rating: Option<f64>,
    /// Movies rated [`EXCELLENT_RATING`] or higher.
    pub excellent: usize,
    /// Distinct genres present.
    pub genres: usize,
}

impl MovieStats {
    /// Compute statistics over the full, unfiltered list.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_movies(movies: &[Movie]) -> Self {
        let total = movies.len();
        let average_rating = if total == 0 {
            None
        } else {
            Some(movies.iter().map(|movie| movie.rating).sum::<f64>() / total as f64)
        };
        let excellent = movies
            .iter()
            .filter(|movie| movie.rating >= EXCELLENT_RATING)
            .count();
        let genres = movies
            .iter()
            .map(|movie| &movie.genre)
            .collect::<HashSet<_>>()
            .len();
        Self {
            total,
            average_rating,
            excellent,
            genres,
        }
    }

    /// Average rating with one decimal, `0.0` when there is nothing to average.
    ///
    /// Halves round away from zero (`8.25` shows as `8.3`).
    #[must_use]
    pub fn average_label(&self) -> String {
        let average = self.average_rating.unwrap_or(0.0);
        format!("{:.1}", (average * 10.0).round() / 10.0)
    }
}

/// Colour band for a rating chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingBand {
    /// 8 and above.
    High,
    /// 6 up to 8.
    Mid,
    /// Below 6.
    Low,
}

impl RatingBand {
    /// Band for `rating`.
    #[must_use]
    pub fn for_rating(rating: f64) -> Self {
        if rating >= EXCELLENT_RATING {
            Self::High
        } else if rating >= 6.0 {
            Self::Mid
        } else {
            Self::Low
        }
    }

    /// Badge class for the band.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::High => "badge-success",
            Self::Mid => "badge-warning",
            Self::Low => "badge-error",
        }
    }
}

/// Badge class for a genre; genres without a dedicated colour stay neutral.
#[must_use]
pub const fn genre_badge_class(genre: &Genre) -> &'static str {
    match genre {
        Genre::Action => "badge-error",
        Genre::Comedy => "badge-warning",
        Genre::Drama => "badge-info",
        Genre::Horror => "badge-secondary",
        Genre::Romance => "badge-accent",
        Genre::ScienceFiction => "badge-primary",
        Genre::Animation => "badge-success",
        Genre::Documentary | Genre::Musical | Genre::Other(_) => "badge-neutral",
    }
}

/// Width of the rating bar as a percentage in `0..=100`.
#[must_use]
pub fn rating_percent(rating: f64) -> f64 {
    (rating / 10.0 * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, genre: Genre, rating: f64) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            genre,
            year: 2000,
            rating,
        }
    }

    fn catalog() -> Vec<Movie> {
        vec![
            movie(1, "The Matrix", Genre::ScienceFiction, 9.0),
            movie(2, "Matrix Reloaded", Genre::ScienceFiction, 5.0),
            movie(3, "Mamma Mia", Genre::Musical, 8.0),
            movie(4, "Amélie", Genre::Romance, 7.5),
        ]
    }

    #[test]
    fn empty_filters_keep_everything() {
        let movies = catalog();
        let filters = MovieFilters::default();
        assert_eq!(filter_movies(&movies, &filters).len(), movies.len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let movies = catalog();
        let filters = MovieFilters {
            search: "MATRIX".to_string(),
            genre: None,
        };
        let ids: Vec<_> = filter_movies(&movies, &filters)
            .iter()
            .map(|movie| movie.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn search_and_genre_must_both_match() {
        let movies = catalog();
        let filters = MovieFilters {
            search: "ma".to_string(),
            genre: Some(Genre::Musical),
        };
        let visible = filter_movies(&movies, &filters);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Mamma Mia");

        for movie in &movies {
            let expected = movie.title.to_lowercase().contains("ma") && movie.genre == Genre::Musical;
            assert_eq!(filters.matches(movie), expected);
        }
    }

    #[test]
    fn genre_select_value_maps_to_filter() {
        assert_eq!(genre_filter_from_value(""), None);
        assert_eq!(genre_filter_from_value("Drama"), Some(Genre::Drama));
        assert_eq!(
            genre_filter_from_value("Ciencia Ficcion"),
            Some(Genre::ScienceFiction)
        );
    }

    #[test]
    fn stats_use_the_full_list() {
        let movies = vec![
            movie(1, "A", Genre::Drama, 9.0),
            movie(2, "B", Genre::Drama, 5.0),
            movie(3, "C", Genre::Comedy, 8.0),
        ];
        let stats = MovieStats::from_movies(&movies);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.average_label(), "7.3");
        assert_eq!(stats.excellent, 2);
        assert_eq!(stats.genres, 2);
    }

    #[test]
    fn average_halves_round_up() {
        let pair = |a: f64, b: f64| {
            MovieStats::from_movies(&[
                movie(1, "A", Genre::Drama, a),
                movie(2, "B", Genre::Drama, b),
            ])
            .average_label()
        };
        assert_eq!(pair(8.5, 8.0), "8.3");
        assert_eq!(pair(6.5, 6.0), "6.3");
        assert_eq!(pair(7.0, 7.0), "7.0");
    }

    #[test]
    fn empty_catalog_averages_to_zero() {
        let stats = MovieStats::from_movies(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_rating, None);
        assert_eq!(stats.average_label(), "0.0");
        assert_eq!(stats.genres, 0);
    }

    #[test]
    fn rating_bands_follow_thresholds() {
        assert_eq!(RatingBand::for_rating(8.0), RatingBand::High);
        assert_eq!(RatingBand::for_rating(7.9), RatingBand::Mid);
        assert_eq!(RatingBand::for_rating(6.0), RatingBand::Mid);
        assert_eq!(RatingBand::for_rating(5.9), RatingBand::Low);
    }

    #[test]
    fn uncoloured_genres_are_neutral() {
        assert_eq!(genre_badge_class(&Genre::Documentary), "badge-neutral");
        assert_eq!(
            genre_badge_class(&Genre::Other("Western".to_string())),
            "badge-neutral"
        );
        assert_ne!(genre_badge_class(&Genre::Action), "badge-neutral");
    }

    #[test]
    fn rating_percent_is_clamped() {
        assert!((rating_percent(7.5) - 75.0).abs() < f64::EPSILON);
        assert!((rating_percent(12.0) - 100.0).abs() < f64::EPSILON);
    }
}
