//! Typed async client for the myFlix movie-catalog REST API.
//!
//! The crate is the non-visual core of the catalog client: the API client
//! layer ([`api::ApiClient`], one method per endpoint), the persisted
//! session store ([`session::SessionStore`]), the view models
//! ([`models`]), the favorites reconciliation ([`favorites`]), and the
//! per-page state holders ([`views`]) a UI renders from.
//!
//! ```no_run
//! use myflix_client::{api::ApiClient, config::Config, views::MovieListPage};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let client = ApiClient::from_config(&config);
//! client.login("claire", "hunter2").await?;
//!
//! let mut page = MovieListPage::new(client);
//! page.load().await?;
//! for movie in &page.movies {
//!     println!("{} ({}){}", movie.title, movie.release_year,
//!         if movie.favorite { " *" } else { "" });
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod favorites;
pub mod models;
pub mod session;
pub mod views;

pub use api::ApiClient;
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use session::{Session, SessionStore};
