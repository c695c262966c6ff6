//! Favorites reconciliation
//!
//! A movie's `favorite` flag is derived state: it is false on every fetch and
//! recomputed here by cross-referencing the user's favorite-ID list against
//! the freshly loaded movies. The join is a deliberate linear scan — the
//! catalog is small and no index is worth building.

use crate::{api::ApiClient, error::ApiResult, models::Movie};

/// Marks every movie whose ID appears in `favorite_ids` as a favorite.
///
/// IDs with no matching movie are ignored; the movie may simply not be in
/// the currently loaded list.
pub fn mark_favorites(movies: &mut [Movie], favorite_ids: &[String]) {
    for id in favorite_ids {
        if let Some(movie) = movies.iter_mut().find(|m| &m.id == id) {
            movie.favorite = true;
        }
    }
}

/// Fetches the session user's favorite IDs and applies them to `movies`.
///
/// With no session username this is a no-op: anonymous browsing leaves every
/// flag false. The fetch happens strictly after the movie list was loaded,
/// so the two calls are sequential by construction.
pub async fn reconcile(client: &ApiClient, movies: &mut [Movie]) -> ApiResult<()> {
    let Some(username) = client.session().username() else {
        tracing::debug!("No session user, skipping favorites reconciliation");
        return Ok(());
    };

    let favorite_ids = client.get_favorite_ids(&username).await?;
    mark_favorites(movies, &favorite_ids);

    tracing::debug!(
        username = %username,
        favorites = favorite_ids.len(),
        "Favorites reconciled"
    );
    Ok(())
}

/// Single-movie variant used by the detail page.
pub async fn reconcile_one(client: &ApiClient, movie: &mut Movie) -> ApiResult<()> {
    reconcile(client, std::slice::from_mut(movie)).await
}
