use serde::{Deserialize, Serialize};

use super::normalize_date;

/// Raw user document as the server sends it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub birthday: String,
    /// Movie IDs the user has marked as favorites. Semantically a set; the
    /// server returns it as a list.
    #[serde(default)]
    pub favorite_movies: Vec<String>,
}

/// A user profile as the client views it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Normalized to `YYYY-MM-DD`
    pub birthday: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            username: record.username,
            email: record.email,
            birthday: normalize_date(&record.birthday),
        }
    }
}

/// Registration request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub birthday: String,
}

impl NewUser {
    /// Builds a registration request, normalizing the birthday before it is
    /// sent.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        birthday: &str,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            birthday: normalize_date(birthday),
        }
    }
}

/// Profile-update request body; the same four fields the server accepts on
/// registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserUpdate {
    pub username: String,
    pub password: String,
    pub email: String,
    pub birthday: String,
}

/// Response body of the login endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: UserRecord,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_extraction_normalizes_birthday() {
        let record: UserRecord = serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "Username": "claire",
            "Email": "claire@example.com",
            "Birthday": "1990-05-01T00:00:00Z",
            "FavoriteMovies": ["42", "77"]
        }))
        .unwrap();

        assert_eq!(record.favorite_movies, vec!["42", "77"]);
        let user = User::from(record);
        assert_eq!(user.username, "claire");
        assert_eq!(user.birthday, "1990-05-01");
    }

    #[test]
    fn test_new_user_serializes_server_field_names() {
        let new_user = NewUser::new("claire", "hunter2", "claire@example.com", "1990-5-1");
        let json = serde_json::to_value(&new_user).unwrap();

        assert_eq!(json["Username"], "claire");
        assert_eq!(json["Password"], "hunter2");
        assert_eq!(json["Email"], "claire@example.com");
        assert_eq!(json["Birthday"], "1990-05-01");
    }

    #[test]
    fn test_login_response_shape() {
        let response: LoginResponse = serde_json::from_value(serde_json::json!({
            "user": { "_id": "u1", "Username": "claire" },
            "token": "jwt-token"
        }))
        .unwrap();

        assert_eq!(response.user.username, "claire");
        assert_eq!(response.token, "jwt-token");
    }
}
