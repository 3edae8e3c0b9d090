//! Metadata gathered from TMDB for a single event.

use crate::tmdb::models::TmdbDetails;

/// Everything TMDB told us about a title. Every field is optional: a failed lookup produces
/// [EnrichedMetadata::default()] and callers treat that as a valid, if unhelpful, answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichedMetadata {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub poster_id: Option<String>,
    pub release_year: Option<String>,
    /// Primary language trailer first, secondary language trailer second.
    pub trailer_links: Vec<String>,
    pub imdb_link: Option<String>,
    pub tmdb_link: Option<String>,
}

impl EnrichedMetadata {
    /// True when any of the fields a details lookup can fill is still missing.
    pub fn is_incomplete(&self) -> bool {
        self.title.is_none()
            || self.overview.is_none()
            || self.poster_id.is_none()
            || self.release_year.is_none()
    }

    /// Fill the fields still missing from `self` with those of `fallback`. Fields already present
    /// are left untouched.
    pub fn fill_missing_from(&mut self, fallback: EnrichedMetadata) {
        let EnrichedMetadata {
            title,
            overview,
            poster_id,
            release_year,
            ..
        } = fallback;
        self.title = self.title.take().or(title);
        self.overview = self.overview.take().or(overview);
        self.poster_id = self.poster_id.take().or(poster_id);
        self.release_year = self.release_year.take().or(release_year);
    }

    /// The title with its release year appended, if TMDB returned a title at all.
    pub fn formatted_title(&self) -> Option<String> {
        self.title
            .as_deref()
            .map(|t| format_title(t, self.release_year.as_deref()))
    }
}

impl From<TmdbDetails> for EnrichedMetadata {
    fn from(details: TmdbDetails) -> Self {
        let release_year = non_empty(details.release_date)
            .and_then(|d| d.split('-').next().map(String::from))
            .filter(|y| !y.is_empty());
        EnrichedMetadata {
            title: non_empty(details.title),
            overview: non_empty(details.overview),
            poster_id: non_empty(details.poster_path),
            release_year,
            ..Default::default()
        }
    }
}

/// Append the year of `release_date` (everything before the first `-`) to `title`, e.g.
/// `Fight Club (1999)`. Without a release date the title is returned as-is.
pub fn format_title(title: &str, release_date: Option<&str>) -> String {
    match release_date
        .and_then(|d| d.split('-').next())
        .filter(|y| !y.is_empty())
    {
        Some(year) => format!("{} ({})", title, year),
        None => String::from(title),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
