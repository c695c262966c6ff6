use crate::{
    api::ApiClient,
    error::ApiResult,
    favorites,
    models::{Movie, User, UserRecord, UserUpdate},
    session::Session,
};

/// State behind the user-profile page: the profile fields plus the user's
/// favorite movies.
pub struct ProfilePage {
    client: ApiClient,
    pub user: Option<User>,
    pub favorites: Vec<Movie>,
}

impl ProfilePage {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            user: None,
            favorites: Vec::new(),
        }
    }

    /// Fetches the session user's profile and favorite movies. The favorites
    /// list is the full catalog reconciled against the favorite-ID list,
    /// narrowed to the marked movies. A no-op for anonymous visitors.
    pub async fn load(&mut self) -> ApiResult<()> {
        let Some(username) = self.client.session().username() else {
            tracing::debug!("No session user, profile load skipped");
            return Ok(());
        };

        self.user = Some(self.client.get_user(&username).await?);

        let mut movies = self.client.get_movies().await?;
        favorites::reconcile(&self.client, &mut movies).await?;
        movies.retain(|m| m.favorite);
        self.favorites = movies;
        Ok(())
    }

    /// Updates the profile. On success the local user record is refreshed
    /// and, if the username changed, the stored session is rewritten so
    /// subsequent calls hit the renamed account.
    pub async fn update_profile(&mut self, update: &UserUpdate) -> ApiResult<()> {
        let Some(username) = self.client.session().username() else {
            return Ok(());
        };

        let result = self.client.update_user(&username, update).await?;
        if let Ok(record) = serde_json::from_value::<UserRecord>(result) {
            self.user = Some(User::from(record));
        }

        if update.username != username {
            if let Some(token) = self.client.session().token() {
                self.client.session().set(Session {
                    token,
                    username: update.username.clone(),
                })?;
            }
        }
        Ok(())
    }

    /// Deletes the account. The API client clears the session; local page
    /// state is dropped too.
    pub async fn delete_account(&mut self) -> ApiResult<()> {
        let Some(username) = self.client.session().username() else {
            return Ok(());
        };

        self.client.delete_user(&username).await?;
        self.user = None;
        self.favorites.clear();
        Ok(())
    }

    pub async fn add_favorite(&mut self, movie: Movie) -> ApiResult<()> {
        if super::set_favorite(&self.client, &movie.id, true).await? {
            let mut movie = movie;
            movie.favorite = true;
            if !self.favorites.iter().any(|m| m.id == movie.id) {
                self.favorites.push(movie);
            }
        }
        Ok(())
    }

    pub async fn remove_favorite(&mut self, movie_id: &str) -> ApiResult<()> {
        if super::set_favorite(&self.client, movie_id, false).await? {
            self.favorites.retain(|m| m.id != movie_id);
        }
        Ok(())
    }
}
