use serde::{Deserialize, Serialize};

use super::normalize_date;

/// Raw movie document as the server sends it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub genre: GenreRecord,
    /// The server stores directors as an array; only the first is shown.
    #[serde(default)]
    pub director: Vec<DirectorRecord>,
    #[serde(default)]
    pub cast: Vec<String>,
    #[serde(default)]
    pub image_path: String,
    /// Array of release timestamps; only the first entry is meaningful.
    #[serde(default)]
    pub release_year: Vec<String>,
}

/// Raw genre document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenreRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Raw director document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectorRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub birth: String,
    #[serde(default)]
    pub image_path: String,
}

/// A movie as the client views it
///
/// `favorite` is derived UI state: set to false on every fetch and recomputed
/// from the user's favorite-ID list afterwards. It is never sent back to the
/// server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub director: String,
    pub cast: Vec<String>,
    pub image_path: String,
    pub description: String,
    /// Normalized to `YYYY-MM-DD`
    pub release_year: String,
    #[serde(skip_serializing)]
    pub favorite: bool,
}

impl From<MovieRecord> for Movie {
    fn from(record: MovieRecord) -> Self {
        let director = record
            .director
            .into_iter()
            .next()
            .map(|d| d.name)
            .unwrap_or_default();
        let release_year = record
            .release_year
            .first()
            .map(|raw| normalize_date(raw))
            .unwrap_or_default();

        Movie {
            id: record.id,
            title: record.title,
            genre: record.genre.name,
            director,
            cast: record.cast,
            image_path: record.image_path,
            description: record.description,
            release_year,
            favorite: false,
        }
    }
}

/// A genre as the client views it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Genre {
    pub name: String,
    pub description: String,
}

impl From<GenreRecord> for Genre {
    fn from(record: GenreRecord) -> Self {
        Genre {
            name: record.name,
            description: record.description,
        }
    }
}

/// A director as the client views it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Director {
    pub name: String,
    pub bio: String,
    /// Normalized to `YYYY-MM-DD`
    pub birth_year: String,
    pub image_path: String,
}

impl From<DirectorRecord> for Director {
    fn from(record: DirectorRecord) -> Self {
        Director {
            name: record.name,
            bio: record.bio,
            birth_year: normalize_date(&record.birth),
            image_path: record.image_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception_record() -> MovieRecord {
        serde_json::from_value(serde_json::json!({
            "_id": "42",
            "Title": "Inception",
            "Description": "A thief who steals corporate secrets",
            "Genre": { "Name": "Sci-Fi", "Description": "Speculative fiction" },
            "Director": [
                { "Name": "Christopher Nolan", "Bio": "British-American director", "Birth": "1970-07-30" }
            ],
            "Cast": ["Leonardo DiCaprio", "Elliot Page"],
            "ImagePath": "inception.png",
            "ReleaseYear": ["2010-07-16T00:00:00Z"]
        }))
        .unwrap()
    }

    #[test]
    fn test_movie_extraction() {
        let movie = Movie::from(inception_record());
        assert_eq!(movie.id, "42");
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.genre, "Sci-Fi");
        assert_eq!(movie.director, "Christopher Nolan");
        assert_eq!(movie.cast, vec!["Leonardo DiCaprio", "Elliot Page"]);
        assert_eq!(movie.release_year, "2010-07-16");
        assert!(!movie.favorite);
    }

    #[test]
    fn test_movie_extraction_tolerates_missing_fields() {
        let record: MovieRecord = serde_json::from_value(serde_json::json!({
            "_id": "7",
            "Title": "Lost Reel"
        }))
        .unwrap();

        let movie = Movie::from(record);
        assert_eq!(movie.title, "Lost Reel");
        assert_eq!(movie.genre, "");
        assert_eq!(movie.director, "");
        assert_eq!(movie.release_year, "");
        assert!(movie.cast.is_empty());
    }

    #[test]
    fn test_favorite_flag_is_not_serialized() {
        let mut movie = Movie::from(inception_record());
        movie.favorite = true;

        let json = serde_json::to_value(&movie).unwrap();
        assert!(json.get("favorite").is_none());
        assert_eq!(json["title"], "Inception");
    }

    #[test]
    fn test_director_birth_year_is_normalized() {
        let record = DirectorRecord {
            name: "Akira Kurosawa".to_string(),
            bio: "Japanese filmmaker".to_string(),
            birth: "1910-03-23T00:00:00Z".to_string(),
            image_path: String::new(),
        };

        let director = Director::from(record);
        assert_eq!(director.birth_year, "1910-03-23");
    }
}
