use crate::{api::ApiClient, error::ApiResult, favorites, models::Movie};

/// State behind the single-movie detail page.
pub struct MovieInfoPage {
    client: ApiClient,
    pub movie: Option<Movie>,
}

impl MovieInfoPage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            movie: None,
        }
    }

    /// Fetches one movie by title, then reconciles its favorite flag.
    pub async fn load(&mut self, title: &str) -> ApiResult<()> {
        let mut movie = self.client.get_movie(title).await?;
        favorites::reconcile_one(&self.client, &mut movie).await?;
        self.movie = Some(movie);
        Ok(())
    }

    pub async fn add_favorite(&mut self) -> ApiResult<()> {
        self.toggle(true).await
    }

    pub async fn remove_favorite(&mut self) -> ApiResult<()> {
        self.toggle(false).await
    }

    async fn toggle(&mut self, favorite: bool) -> ApiResult<()> {
        let Some(movie_id) = self.movie.as_ref().map(|m| m.id.clone()) else {
            return Ok(());
        };
        if super::set_favorite(&self.client, &movie_id, favorite).await? {
            if let Some(movie) = self.movie.as_mut() {
                movie.favorite = favorite;
            }
        }
        Ok(())
    }
}
