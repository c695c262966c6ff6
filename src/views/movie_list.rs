use crate::{api::ApiClient, error::ApiResult, favorites, models::Movie};

/// State behind the all-movies grid: the full catalog with per-movie
/// favorite flags.
pub struct MovieListPage {
    client: ApiClient,
    pub movies: Vec<Movie>,
}

impl MovieListPage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            movies: Vec::new(),
        }
    }

    /// Fetches the catalog, then reconciles favorite flags for the session
    /// user. Anonymous visitors get the list with every flag false.
    pub async fn load(&mut self) -> ApiResult<()> {
        self.movies = self.client.get_movies().await?;
        favorites::reconcile(&self.client, &mut self.movies).await
    }

    /// Adds a movie to favorites, flipping the local flag only after the
    /// server call succeeds. Skipped silently with no session.
    pub async fn add_favorite(&mut self, movie_id: &str) -> ApiResult<()> {
        if super::set_favorite(&self.client, movie_id, true).await? {
            self.set_flag(movie_id, true);
        }
        Ok(())
    }

    /// Removes a movie from favorites; same after-success flag discipline.
    pub async fn remove_favorite(&mut self, movie_id: &str) -> ApiResult<()> {
        if super::set_favorite(&self.client, movie_id, false).await? {
            self.set_flag(movie_id, false);
        }
        Ok(())
    }

    fn set_flag(&mut self, movie_id: &str, favorite: bool) {
        if let Some(movie) = self.movies.iter_mut().find(|m| m.id == movie_id) {
            movie.favorite = favorite;
        }
    }
}
