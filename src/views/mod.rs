//! Per-page view models
//!
//! Each page owns the state a UI would render: it fetches its resource,
//! delegates the favorites join to [`crate::favorites`], and flips local
//! `favorite` flags only after the server call succeeds. Nothing here spawns
//! tasks; a page's work is scoped to the future the caller awaits, so
//! dropping it cancels any in-flight request.

pub mod movie_info;
pub mod movie_list;
pub mod profile;

pub use movie_info::MovieInfoPage;
pub use movie_list::MovieListPage;
pub use profile::ProfilePage;

use crate::{api::ApiClient, error::ApiResult};

/// Adds or removes a favorite for the session user. Returns `false` when no
/// user is logged in, in which case the call is silently skipped and the
/// caller must not flip any local flag.
pub(crate) async fn set_favorite(
    client: &ApiClient,
    movie_id: &str,
    favorite: bool,
) -> ApiResult<bool> {
    let Some(username) = client.session().username() else {
        tracing::debug!(movie_id = %movie_id, "No session user, favorite toggle skipped");
        return Ok(false);
    };

    if favorite {
        client.add_favorite(&username, movie_id).await?;
    } else {
        client.remove_favorite(&username, movie_id).await?;
    }
    Ok(true)
}
