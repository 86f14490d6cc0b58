//! Catalog page state: the fetched movie list plus the filter, search, sort
//! and "show more" controls applied over it.
//!
//! The movie list is authoritative and never reordered. Every query derives a
//! fresh index view from it, so re-rendering the same state always yields the
//! same order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::Movie;

/// Genre tab selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GenreFilter {
    #[default]
    All,
    Genre(String),
}

impl GenreFilter {
    pub fn as_str(&self) -> &str {
        match self {
            GenreFilter::All => "all",
            GenreFilter::Genre(g) => g,
        }
    }

    fn matches(&self, movie: &Movie) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Genre(g) => movie.genre.to_lowercase() == g.to_lowercase(),
        }
    }
}

impl From<&str> for GenreFilter {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            GenreFilter::All
        } else {
            GenreFilter::Genre(s.to_string())
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog sort order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Title, A to Z, ignoring case.
    #[default]
    Title,
    /// Review score, best first. Unscored movies count as 0.
    Score,
    /// Ticket price, cheapest first.
    Price,
    /// Running time, longest first.
    Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0:?}")]
pub struct SortKeyError(String);

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Title,
        SortKey::Score,
        SortKey::Price,
        SortKey::Duration,
    ];

    /// Value used in the sort dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Score => "rating",
            SortKey::Price => "price",
            SortKey::Duration => "duration",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Score => "Rating",
            SortKey::Price => "Price",
            SortKey::Duration => "Duration",
        }
    }

    fn compare(&self, a: &Movie, b: &Movie) -> Ordering {
        match self {
            SortKey::Title => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title)),
            SortKey::Score => b.score.unwrap_or(0.0).total_cmp(&a.score.unwrap_or(0.0)),
            SortKey::Price => a.ticket_price.total_cmp(&b.ticket_price),
            SortKey::Duration => b.duration.cmp(&a.duration),
        }
    }
}

impl FromStr for SortKey {
    type Err = SortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SortKeyError(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    movies: Vec<Movie>,
    status: LoadStatus,
    genre: GenreFilter,
    search: String,
    sort: SortKey,
    page_size: usize,
    pages: usize,
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        Self {
            movies: Vec::new(),
            status: LoadStatus::Loading,
            genre: GenreFilter::All,
            search: String::new(),
            sort: SortKey::Title,
            page_size: page_size.max(1),
            pages: 1,
        }
    }

    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        tracing::debug!(count = movies.len(), "catalog loaded");
        self.movies = movies;
        self.status = LoadStatus::Loaded;
        self.pages = 1;
    }

    pub fn set_failed(&mut self) {
        self.status = LoadStatus::Failed;
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn genre(&self) -> &GenreFilter {
        &self.genre
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn set_genre(&mut self, genre: GenreFilter) {
        self.genre = genre;
        self.pages = 1;
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.pages = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.pages = 1;
    }

    /// Back to all genres, no search, title order.
    pub fn clear_filters(&mut self) {
        self.genre = GenreFilter::All;
        self.search.clear();
        self.sort = SortKey::Title;
        self.pages = 1;
    }

    /// Reveal one more page.
    pub fn show_more(&mut self) {
        if self.has_more() {
            self.pages += 1;
        }
    }

    fn matches_search(&self, movie: &Movie) -> bool {
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&movie.title, &movie.genre, &movie.language]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Every movie passing the genre and search filters, in sort order.
    pub fn filtered(&self) -> Vec<&Movie> {
        let mut matches: Vec<&Movie> = self
            .movies
            .iter()
            .filter(|m| self.genre.matches(m) && self.matches_search(m))
            .collect();
        // sort_by is stable: ties keep fetch order
        matches.sort_by(|a, b| self.sort.compare(a, b));
        matches
    }

    /// The revealed prefix of [`filtered`](Self::filtered).
    pub fn visible(&self) -> Vec<&Movie> {
        let mut matches = self.filtered();
        matches.truncate(self.pages * self.page_size);
        matches
    }

    pub fn has_more(&self) -> bool {
        self.filtered().len() > self.pages * self.page_size
    }

    /// Distinct genres in first-seen order, for the filter tabs.
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = Vec::new();
        for movie in &self.movies {
            if !genres.iter().any(|g| g.eq_ignore_ascii_case(&movie.genre)) {
                genres.push(&movie.genre);
            }
        }
        genres
    }

    pub fn find(&self, id: u64) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// The first `count` movies in fetch order, for the home page.
    pub fn featured(&self, count: usize) -> &[Movie] {
        &self.movies[..count.min(self.movies.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(
        id: u64,
        title: &str,
        genre: &str,
        price: f64,
        duration: u32,
        score: Option<f64>,
    ) -> Movie {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "genre": genre,
            "language": if id % 2 == 0 { "Hindi" } else { "English" },
            "ticketPrice": price,
            "duration": duration,
            "score": score,
        }))
        .unwrap()
    }

    fn state() -> CatalogState {
        let mut state = CatalogState::new(2);
        state.set_movies(vec![
            movie(1, "Heat", "Crime", 250.0, 170, Some(8.3)),
            movie(2, "Arrival", "Sci-Fi", 299.0, 116, None),
            movie(3, "Brazil", "Sci-Fi", 150.0, 142, Some(7.9)),
            movie(4, "Amelie", "Romance", 150.0, 122, Some(8.3)),
            movie(5, "Zodiac", "Crime", 199.0, 157, Some(7.7)),
        ]);
        state
    }

    fn ids(movies: &[&Movie]) -> Vec<u64> {
        movies.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_sort_keys() {
        let mut state = state();
        assert_eq!(ids(&state.filtered()), vec![4, 2, 3, 1, 5]);

        state.set_sort(SortKey::Score);
        // 8.3 tie keeps fetch order; unscored sorts last
        assert_eq!(ids(&state.filtered()), vec![1, 4, 3, 5, 2]);

        state.set_sort(SortKey::Price);
        assert_eq!(ids(&state.filtered()), vec![3, 4, 5, 1, 2]);

        state.set_sort(SortKey::Duration);
        assert_eq!(ids(&state.filtered()), vec![1, 5, 3, 4, 2]);
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let mut state = CatalogState::new(12);
        state.set_movies(vec![
            movie(1, "avatar", "Sci-Fi", 250.0, 162, None),
            movie(2, "Brazil", "Sci-Fi", 150.0, 142, None),
            movie(3, "Avatar", "Sci-Fi", 250.0, 162, None),
        ]);
        // Case-only ties fall back to the raw title
        assert_eq!(ids(&state.filtered()), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_is_stable_across_calls() {
        let mut state = state();
        state.set_sort(SortKey::Price);
        assert_eq!(ids(&state.filtered()), ids(&state.filtered()));
        assert_eq!(state.movies()[0].id, 1);
    }

    #[test]
    fn test_genre_and_search_are_conjunctive() {
        let mut state = state();
        state.set_genre(GenreFilter::from("sci-fi"));
        assert_eq!(ids(&state.filtered()), vec![2, 3]);

        state.set_search("HINDI");
        assert_eq!(ids(&state.filtered()), vec![2]);

        state.set_genre(GenreFilter::from("Crime"));
        assert!(state.filtered().is_empty());

        state.clear_filters();
        assert_eq!(state.filtered().len(), 5);
        assert_eq!(state.sort(), SortKey::Title);
        assert_eq!(state.search(), "");
    }

    #[test]
    fn test_search_matches_title_genre_language() {
        let mut state = state();
        state.set_search("zod");
        assert_eq!(ids(&state.filtered()), vec![5]);
        state.set_search("crime");
        assert_eq!(ids(&state.filtered()), vec![1, 5]);
        state.set_search("  ");
        assert_eq!(state.filtered().len(), 5);
    }

    #[test]
    fn test_show_more_and_reset() {
        let mut state = state();
        assert_eq!(state.visible().len(), 2);
        assert!(state.has_more());

        state.show_more();
        state.show_more();
        assert_eq!(state.visible().len(), 5);
        assert!(!state.has_more());
        state.show_more();
        assert_eq!(state.visible().len(), 5);

        state.set_sort(SortKey::Price);
        assert_eq!(state.visible().len(), 2);
    }

    #[test]
    fn test_genres_find_featured() {
        let state = state();
        assert_eq!(state.genres(), vec!["Crime", "Sci-Fi", "Romance"]);
        assert_eq!(state.find(3).unwrap().title, "Brazil");
        assert!(state.find(42).is_none());
        assert_eq!(state.featured(3).len(), 3);
        assert_eq!(state.featured(10).len(), 5);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("rating".parse::<SortKey>().unwrap(), SortKey::Score);
        assert_eq!("duration".parse::<SortKey>().unwrap(), SortKey::Duration);
        assert!("popularity".parse::<SortKey>().is_err());
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
    }

    #[test]
    fn test_load_status() {
        let mut state = CatalogState::new(12);
        assert_eq!(state.status(), LoadStatus::Loading);
        state.set_failed();
        assert_eq!(state.status(), LoadStatus::Failed);
        assert!(state.visible().is_empty());
        assert_eq!(GenreFilter::from("ALL"), GenreFilter::All);
    }
}
