use reqwest::{Client as HttpClient, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    models::{
        Director, DirectorRecord, Genre, GenreRecord, LoginResponse, Movie, MovieRecord, NewUser,
        OneOrMany, User, UserRecord, UserUpdate,
    },
    session::{Session, SessionStore},
};

/// Typed client for the myFlix REST API.
///
/// One method per endpoint; every method issues exactly one HTTP request and
/// reshapes the raw JSON into the client view models. Authenticated calls
/// read the bearer token from the session store at call time, so a token
/// rotated mid-session takes effect on the next call. No retries: a failed
/// call surfaces once.
#[derive(Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: HttpClient::new(),
            base_url,
            session,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.myflix_api_url,
            SessionStore::open(&config.myflix_session_file),
        )
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends one request, attaching `Authorization: Bearer <token>` when
    /// `auth` is set, and returns the body of a 2xx response. Transport
    /// failures and non-2xx statuses both surface as `ApiError`.
    async fn send(&self, request: RequestBuilder, auth: bool) -> ApiResult<String> {
        let request = match (auth, self.session.token()) {
            (true, Some(token)) => request.bearer_auth(token),
            _ => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        Ok(response.text().await?)
    }

    fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
        serde_json::from_str(body).map_err(ApiError::Decode)
    }

    /// Fetches the full movie catalog. Every movie comes back with
    /// `favorite == false`; reconciliation happens separately.
    pub async fn get_movies(&self) -> ApiResult<Vec<Movie>> {
        let body = self.send(self.http.get(self.url("/movies")), true).await?;
        let records: Vec<MovieRecord> = Self::decode(&body)?;
        let movies: Vec<Movie> = records.into_iter().map(Movie::from).collect();

        tracing::info!(movies = movies.len(), "Movie list fetched");
        Ok(movies)
    }

    /// Fetches a single movie by title.
    pub async fn get_movie(&self, title: &str) -> ApiResult<Movie> {
        let body = self
            .send(self.http.get(self.url(&format!("/movies/{}", title))), true)
            .await?;
        let record: MovieRecord = Self::decode(&body)?;
        Ok(Movie::from(record))
    }

    /// Fetches director details by name, taking the first record when the
    /// server returns an array.
    pub async fn get_director(&self, name: &str) -> ApiResult<Director> {
        let body = self
            .send(
                self.http
                    .get(self.url(&format!("/movies/directors/{}", name))),
                true,
            )
            .await?;
        let record: OneOrMany<DirectorRecord> = Self::decode(&body)?;
        Ok(record.into_first().unwrap_or_default().into())
    }

    /// Fetches genre details by name, taking the first record when the
    /// server returns an array.
    pub async fn get_genre(&self, name: &str) -> ApiResult<Genre> {
        let body = self
            .send(
                self.http.get(self.url(&format!("/movies/genres/{}", name))),
                true,
            )
            .await?;
        let record: OneOrMany<GenreRecord> = Self::decode(&body)?;
        Ok(record.into_first().unwrap_or_default().into())
    }

    /// Fetches a user profile. An empty response body maps to an all-empty
    /// `User`, not an error.
    pub async fn get_user(&self, username: &str) -> ApiResult<User> {
        let body = self
            .send(self.http.get(self.url(&format!("/users/{}", username))), true)
            .await?;
        if body.trim().is_empty() {
            return Ok(User::default());
        }
        let record: UserRecord = Self::decode(&body)?;
        Ok(User::from(record))
    }

    /// Fetches the user's favorite movie IDs, extracted from the user
    /// record. Failures on this path carry the favorites-specific message.
    pub async fn get_favorite_ids(&self, username: &str) -> ApiResult<Vec<String>> {
        let result: ApiResult<Vec<String>> = async {
            let body = self
                .send(self.http.get(self.url(&format!("/users/{}", username))), true)
                .await?;
            let record: UserRecord = Self::decode(&body)?;
            Ok(record.favorite_movies)
        }
        .await;

        result.map_err(ApiError::into_favorites)
    }

    /// Registers a new user. Unauthenticated.
    pub async fn register(&self, new_user: &NewUser) -> ApiResult<serde_json::Value> {
        let body = self
            .send(self.http.post(self.url("/users")).json(new_user), false)
            .await?;

        tracing::info!(username = %new_user.username, "User registered");
        Self::decode(&body)
    }

    /// Logs in with credentials passed as query parameters (the documented
    /// endpoint shape). On success the returned session is written to the
    /// session store; a failed login writes nothing.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<Session> {
        let body = self
            .send(
                self.http
                    .post(self.url("/login"))
                    .query(&[("Username", username), ("Password", password)]),
                false,
            )
            .await?;
        let response: LoginResponse = Self::decode(&body)?;

        let session = Session {
            token: response.token,
            username: response.user.username,
        };
        self.session.set(session.clone())?;

        tracing::info!(username = %session.username, "Login successful");
        Ok(session)
    }

    /// Clears the stored session. Purely client-side; the token is simply
    /// forgotten.
    pub fn logout(&self) -> ApiResult<()> {
        self.session.clear()
    }

    /// Adds a movie to the user's favorites. Empty request body.
    pub async fn add_favorite(&self, username: &str, movie_id: &str) -> ApiResult<serde_json::Value> {
        let body = self
            .send(
                self.http
                    .post(self.url(&format!("/users/{}/movies/{}", username, movie_id))),
                true,
            )
            .await?;

        tracing::info!(username = %username, movie_id = %movie_id, "Favorite added");
        Self::decode(&body)
    }

    /// Removes a movie from the user's favorites.
    pub async fn remove_favorite(
        &self,
        username: &str,
        movie_id: &str,
    ) -> ApiResult<serde_json::Value> {
        let body = self
            .send(
                self.http
                    .delete(self.url(&format!("/users/{}/movies/{}", username, movie_id))),
                true,
            )
            .await?;

        tracing::info!(username = %username, movie_id = %movie_id, "Favorite removed");
        Self::decode(&body)
    }

    /// Updates the user's profile fields.
    pub async fn update_user(
        &self,
        username: &str,
        update: &UserUpdate,
    ) -> ApiResult<serde_json::Value> {
        let body = self
            .send(
                self.http
                    .put(self.url(&format!("/users/{}", username)))
                    .json(update),
                true,
            )
            .await?;

        tracing::info!(username = %username, "Profile updated");
        Self::decode(&body)
    }

    /// Deletes the user's account. On success the stored session is cleared
    /// when it belongs to the deleted user.
    pub async fn delete_user(&self, username: &str) -> ApiResult<String> {
        let body = self
            .send(
                self.http.delete(self.url(&format!("/users/{}", username))),
                true,
            )
            .await?;

        if self.session.username().as_deref() == Some(username) {
            self.session.clear()?;
        }

        tracing::info!(username = %username, "Account deleted");
        Ok(body)
    }
}
