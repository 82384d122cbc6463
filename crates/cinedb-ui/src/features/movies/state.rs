//! Movie editor state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Validate and convert to the API payload only on submit.
//! - The editor mode is an explicit state machine; the modal is open exactly
//!   when the mode is not [`EditorMode::Viewing`].

use crate::models::{Genre, Movie, MovieId, MovieInput};

/// Earliest accepted release year.
pub const MIN_YEAR: i32 = 1900;
/// Lowest accepted rating.
pub const MIN_RATING: f64 = 1.0;
/// Highest accepted rating.
pub const MAX_RATING: f64 = 10.0;
/// Minimum title length, in characters.
pub const MIN_TITLE_CHARS: usize = 2;

const TITLE_REQUIRED: &str = "El título es obligatorio";
const TITLE_TOO_SHORT: &str = "Mínimo 2 caracteres";
const GENRE_REQUIRED: &str = "El género es obligatorio";
const YEAR_REQUIRED: &str = "El año es obligatorio";
const YEAR_NOT_INTEGER: &str = "El año debe ser un número entero";
const RATING_REQUIRED: &str = "La calificación es obligatoria";
const RATING_NOT_NUMBER: &str = "La calificación debe ser un número";
const RATING_TOO_LOW: &str = "Calificación mínima: 1";
const RATING_TOO_HIGH: &str = "Calificación máxima: 10";

/// Latest accepted release year given the current calendar year.
#[must_use]
pub const fn max_year(current_year: i32) -> i32 {
    current_year + 1
}

/// Raw form inputs for the create/edit modal.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MovieFormState {
    /// Title input.
    pub title: String,
    /// Genre `<select>` value; empty until chosen.
    pub genre: String,
    /// Release year input.
    pub year: String,
    /// Rating input.
    pub rating: String,
}

/// Inline validation messages, one slot per field.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MovieFormErrors {
    /// Title message.
    pub title: Option<String>,
    /// Genre message.
    pub genre: Option<String>,
    /// Year message.
    pub year: Option<String>,
    /// Rating message.
    pub rating: Option<String>,
}

impl MovieFormErrors {
    /// Whether every field passed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.genre.is_none() && self.year.is_none() && self.rating.is_none()
    }
}

impl MovieFormState {
    /// Pre-fill the form from an existing movie.
    #[must_use]
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            genre: movie.genre.as_str().to_string(),
            year: movie.year.to_string(),
            rating: movie.rating.to_string(),
        }
    }

    /// Validate every field and build the request payload.
    ///
    /// # Errors
    /// Returns per-field messages when any required/min/max rule fails; no
    /// payload is produced in that case.
    pub fn to_input(&self, current_year: i32) -> Result<MovieInput, MovieFormErrors> {
        let title = validate_title(&self.title);
        let genre = validate_genre(&self.genre);
        let year = validate_year(&self.year, current_year);
        let rating = validate_rating(&self.rating);
        match (title, genre, year, rating) {
            (Ok(title), Ok(genre), Ok(year), Ok(rating)) => Ok(MovieInput {
                title,
                genre,
                year,
                rating,
            }),
            (title, genre, year, rating) => Err(MovieFormErrors {
                title: title.err(),
                genre: genre.err(),
                year: year.err(),
                rating: rating.err(),
            }),
        }
    }
}

/// The title is kept exactly as typed; only the empty string counts as missing.
fn validate_title(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Err(TITLE_REQUIRED.to_string());
    }
    if value.chars().count() < MIN_TITLE_CHARS {
        return Err(TITLE_TOO_SHORT.to_string());
    }
    Ok(value.to_string())
}

fn validate_genre(value: &str) -> Result<Genre, String> {
    Genre::from_known(value.trim()).ok_or_else(|| GENRE_REQUIRED.to_string())
}

fn validate_year(value: &str, current_year: i32) -> Result<i32, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(YEAR_REQUIRED.to_string());
    }
    let year = trimmed
        .parse::<i32>()
        .map_err(|_| YEAR_NOT_INTEGER.to_string())?;
    if year < MIN_YEAR {
        return Err(format!("Año mínimo: {MIN_YEAR}"));
    }
    let max = max_year(current_year);
    if year > max {
        return Err(format!("Año máximo: {max}"));
    }
    Ok(year)
}

fn validate_rating(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RATING_REQUIRED.to_string());
    }
    let rating = trimmed
        .parse::<f64>()
        .ok()
        .filter(|rating| rating.is_finite())
        .ok_or_else(|| RATING_NOT_NUMBER.to_string())?;
    if rating < MIN_RATING {
        return Err(RATING_TOO_LOW.to_string());
    }
    if rating > MAX_RATING {
        return Err(RATING_TOO_HIGH.to_string());
    }
    Ok(rating)
}

/// Dashboard editor mode.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum EditorMode {
    /// List only; modal closed.
    #[default]
    Viewing,
    /// Modal open for a new movie.
    Creating,
    /// Modal open for an existing movie.
    Editing(Movie),
}

/// Request the editor wants issued after a valid submit.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitPlan {
    /// `POST` a new movie.
    Create(MovieInput),
    /// `PUT` a full replacement for `id`.
    Update {
        /// Target movie id.
        id: MovieId,
        /// Replacement body.
        input: MovieInput,
    },
}

/// Modal form state machine driven by the dashboard.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MovieEditor {
    /// Current mode.
    pub mode: EditorMode,
    /// Form inputs.
    pub form: MovieFormState,
    /// Messages from the last submit attempt.
    pub errors: MovieFormErrors,
}

impl MovieEditor {
    /// Whether the modal is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.mode, EditorMode::Viewing)
    }

    /// Movie being edited, if any.
    #[must_use]
    pub const fn editing(&self) -> Option<&Movie> {
        match &self.mode {
            EditorMode::Editing(movie) => Some(movie),
            EditorMode::Viewing | EditorMode::Creating => None,
        }
    }

    /// Open an empty form for a new movie, discarding previous input.
    pub fn open_create(&mut self) {
        self.mode = EditorMode::Creating;
        self.form = MovieFormState::default();
        self.errors = MovieFormErrors::default();
    }

    /// Open the form pre-filled from `movie`.
    pub fn open_edit(&mut self, movie: &Movie) {
        self.form = MovieFormState::from_movie(movie);
        self.errors = MovieFormErrors::default();
        self.mode = EditorMode::Editing(movie.clone());
    }

    /// Close the modal and reset inputs and edit target.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Validate the form and pick the request to issue.
    ///
    /// Validation messages are stored on the editor either way; on failure
    /// the mode and inputs are left untouched and `None` is returned.
    pub fn submit(&mut self, current_year: i32) -> Option<SubmitPlan> {
        if !self.is_open() {
            return None;
        }
        match self.form.to_input(current_year) {
            Ok(input) => {
                self.errors = MovieFormErrors::default();
                Some(match &self.mode {
                    EditorMode::Editing(movie) => SubmitPlan::Update {
                        id: movie.id,
                        input,
                    },
                    EditorMode::Creating | EditorMode::Viewing => SubmitPlan::Create(input),
                })
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2025;

    fn valid_form() -> MovieFormState {
        MovieFormState {
            title: "Parasite".to_string(),
            genre: "Drama".to_string(),
            year: "2019".to_string(),
            rating: "9.1".to_string(),
        }
    }

    fn stored_movie() -> Movie {
        Movie {
            id: 42,
            title: "Up".to_string(),
            genre: Genre::Animation,
            year: 2009,
            rating: 8.3,
        }
    }

    #[test]
    fn valid_form_builds_payload() {
        let input = valid_form().to_input(YEAR).expect("form should validate");
        assert_eq!(input.title, "Parasite");
        assert_eq!(input.genre, Genre::Drama);
        assert_eq!(input.year, 2019);
        assert!((input.rating - 9.1).abs() < f64::EPSILON);
    }

    #[test]
    fn one_character_title_is_rejected() {
        let form = MovieFormState {
            title: "A".to_string(),
            ..valid_form()
        };
        let errors = form.to_input(YEAR).expect_err("title too short");
        assert_eq!(errors.title.as_deref(), Some("Mínimo 2 caracteres"));
        assert!(errors.genre.is_none());
    }

    #[test]
    fn title_length_counts_raw_characters() {
        for title in [" A", "  ", "É!"] {
            let form = MovieFormState {
                title: title.to_string(),
                ..valid_form()
            };
            let input = form.to_input(YEAR).expect("two characters as typed");
            assert_eq!(input.title, title);
        }
        let single_space = MovieFormState {
            title: " ".to_string(),
            ..valid_form()
        };
        let errors = single_space.to_input(YEAR).expect_err("one character");
        assert_eq!(errors.title.as_deref(), Some("Mínimo 2 caracteres"));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = MovieFormState::default()
            .to_input(YEAR)
            .expect_err("empty form");
        assert_eq!(errors.title.as_deref(), Some("El título es obligatorio"));
        assert_eq!(errors.genre.as_deref(), Some("El género es obligatorio"));
        assert_eq!(errors.year.as_deref(), Some("El año es obligatorio"));
        assert_eq!(
            errors.rating.as_deref(),
            Some("La calificación es obligatoria")
        );
    }

    #[test]
    fn year_bounds_follow_current_year() {
        let too_old = MovieFormState {
            year: "1899".to_string(),
            ..valid_form()
        };
        let errors = too_old.to_input(YEAR).expect_err("1899 rejected");
        assert_eq!(errors.year.as_deref(), Some("Año mínimo: 1900"));

        let next_year = MovieFormState {
            year: (YEAR + 1).to_string(),
            ..valid_form()
        };
        assert!(next_year.to_input(YEAR).is_ok());

        let too_new = MovieFormState {
            year: (YEAR + 2).to_string(),
            ..valid_form()
        };
        let errors = too_new.to_input(YEAR).expect_err("future year rejected");
        assert_eq!(errors.year.as_deref(), Some("Año máximo: 2026"));
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for (raw, ok) in [("1", true), ("10", true), ("0.9", false), ("10.1", false)] {
            let form = MovieFormState {
                rating: raw.to_string(),
                ..valid_form()
            };
            assert_eq!(form.to_input(YEAR).is_ok(), ok, "rating {raw}");
        }
        let garbage = MovieFormState {
            rating: "nueve".to_string(),
            ..valid_form()
        };
        let errors = garbage.to_input(YEAR).expect_err("not a number");
        assert_eq!(
            errors.rating.as_deref(),
            Some("La calificación debe ser un número")
        );
    }

    #[test]
    fn unknown_genre_is_not_selectable() {
        let form = MovieFormState {
            genre: "Western".to_string(),
            ..valid_form()
        };
        let errors = form.to_input(YEAR).expect_err("genre outside list");
        assert!(errors.genre.is_some());
    }

    #[test]
    fn open_create_clears_previous_values() {
        let mut editor = MovieEditor::default();
        editor.open_edit(&stored_movie());
        editor.open_create();
        assert_eq!(editor.mode, EditorMode::Creating);
        assert_eq!(editor.form, MovieFormState::default());
        assert!(editor.editing().is_none());
    }

    #[test]
    fn open_edit_prefills_form() {
        let mut editor = MovieEditor::default();
        let movie = stored_movie();
        editor.open_edit(&movie);
        assert!(editor.is_open());
        assert_eq!(editor.editing(), Some(&movie));
        assert_eq!(editor.form.title, "Up");
        assert_eq!(editor.form.genre, "Animacion");
        assert_eq!(editor.form.year, "2009");
        assert_eq!(editor.form.rating, "8.3");
    }

    #[test]
    fn submit_branches_on_edit_target() {
        let mut editor = MovieEditor::default();
        editor.open_create();
        editor.form = valid_form();
        assert!(matches!(editor.submit(YEAR), Some(SubmitPlan::Create(_))));

        editor.open_edit(&stored_movie());
        match editor.submit(YEAR) {
            Some(SubmitPlan::Update { id, input }) => {
                assert_eq!(id, 42);
                assert_eq!(input.title, "Up");
            }
            other => panic!("expected update plan, got {other:?}"),
        }
    }

    #[test]
    fn invalid_submit_keeps_form_open_with_input() {
        let mut editor = MovieEditor::default();
        editor.open_create();
        editor.form.title = "X".to_string();
        assert_eq!(editor.submit(YEAR), None);
        assert!(editor.is_open());
        assert_eq!(editor.form.title, "X");
        assert!(!editor.errors.is_empty());
    }

    #[test]
    fn closed_editor_never_plans_requests() {
        let mut editor = MovieEditor {
            form: valid_form(),
            ..MovieEditor::default()
        };
        assert_eq!(editor.submit(YEAR), None);
    }

    #[test]
    fn close_returns_to_viewing() {
        let mut editor = MovieEditor::default();
        editor.open_edit(&stored_movie());
        editor.close();
        assert_eq!(editor, MovieEditor::default());
        assert!(!editor.is_open());
    }

    #[test]
    fn edit_round_trip_sends_wire_fields_without_id() {
        let form = MovieFormState::from_movie(&stored_movie());
        let input = form.to_input(YEAR).expect("stored movie should validate");
        let body = serde_json::to_value(&input).expect("payload encodes");
        assert_eq!(
            body,
            serde_json::json!({
                "pelicula": "Up",
                "genero": "Animacion",
                "estreno": 2009,
                "calificacion": 8.3
            })
        );
    }
}
