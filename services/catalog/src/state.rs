use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbDirectorRepository, DbMovieRepository, DbReviewRepository, DbUserRepository,
};
use crate::infra::notify::LogNotifier;
use crate::infra::password::Argon2Hasher;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn director_repo(&self) -> DbDirectorRepository {
        DbDirectorRepository {
            db: self.db.clone(),
        }
    }

    pub fn movie_repo(&self) -> DbMovieRepository {
        DbMovieRepository {
            db: self.db.clone(),
        }
    }

    pub fn review_repo(&self) -> DbReviewRepository {
        DbReviewRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn notifier(&self) -> LogNotifier {
        LogNotifier
    }

    pub fn password_hasher(&self) -> Argon2Hasher {
        Argon2Hasher
    }
}
