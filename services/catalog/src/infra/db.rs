use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use kinoteka_catalog_schema::{directors, movies, reviews, users};

use crate::domain::repository::{
    DirectorRepository, MovieRepository, ReviewRepository, UserRepository,
};
use crate::domain::types::{Director, Movie, NewMovie, NewReview, Review, User};
use crate::error::CatalogError;

// ── Director repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDirectorRepository {
    pub db: DatabaseConnection,
}

impl DirectorRepository for DbDirectorRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Director>, CatalogError> {
        let model = directors::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find director by id")?;
        Ok(model.map(director_from_model))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Director>, CatalogError> {
        let model = directors::Entity::find()
            .filter(directors::Column::Name.eq(name))
            .one(&self.db)
            .await
            .context("find director by name")?;
        Ok(model.map(director_from_model))
    }

    async fn list(&self) -> Result<Vec<Director>, CatalogError> {
        let models = directors::Entity::find()
            .order_by_asc(directors::Column::Id)
            .all(&self.db)
            .await
            .context("list directors")?;
        Ok(models.into_iter().map(director_from_model).collect())
    }

    async fn movies_count(&self, director_id: i32) -> Result<u64, CatalogError> {
        let count = movies::Entity::find()
            .filter(movies::Column::DirectorId.eq(director_id))
            .count(&self.db)
            .await
            .context("count movies for director")?;
        Ok(count)
    }

    async fn create(&self, name: &str) -> Result<Director, CatalogError> {
        let model = directors::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create director")?;
        Ok(director_from_model(model))
    }

    async fn update_name(&self, id: i32, name: &str) -> Result<(), CatalogError> {
        directors::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
        }
        .update(&self.db)
        .await
        .context("update director name")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogError> {
        // Dependents go first, inside one transaction. The FKs are RESTRICT,
        // so this routine is the only way a director with movies disappears.
        let deleted = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    let movie_ids: Vec<i32> = movies::Entity::find()
                        .filter(movies::Column::DirectorId.eq(id))
                        .select_only()
                        .column(movies::Column::Id)
                        .into_tuple()
                        .all(txn)
                        .await?;

                    if !movie_ids.is_empty() {
                        reviews::Entity::delete_many()
                            .filter(reviews::Column::MovieId.is_in(movie_ids.iter().copied()))
                            .exec(txn)
                            .await?;
                        movies::Entity::delete_many()
                            .filter(movies::Column::Id.is_in(movie_ids))
                            .exec(txn)
                            .await?;
                    }

                    let result = directors::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("cascade delete director")?;
        Ok(deleted)
    }
}

fn director_from_model(model: directors::Model) -> Director {
    Director {
        id: model.id,
        name: model.name,
    }
}

// ── Movie repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMovieRepository {
    pub db: DatabaseConnection,
}

impl MovieRepository for DbMovieRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, CatalogError> {
        let model = movies::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find movie by id")?;
        Ok(model.map(movie_from_model))
    }

    async fn list(&self) -> Result<Vec<Movie>, CatalogError> {
        let models = movies::Entity::find()
            .order_by_asc(movies::Column::Id)
            .all(&self.db)
            .await
            .context("list movies")?;
        Ok(models.into_iter().map(movie_from_model).collect())
    }

    async fn create(&self, movie: &NewMovie) -> Result<Movie, CatalogError> {
        let model = movies::ActiveModel {
            title: Set(movie.title.clone()),
            description: Set(movie.description.clone()),
            duration: Set(movie.duration),
            director_id: Set(movie.director_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create movie")?;
        Ok(movie_from_model(model))
    }

    async fn update(&self, movie: &Movie) -> Result<(), CatalogError> {
        movies::ActiveModel {
            id: Set(movie.id),
            title: Set(movie.title.clone()),
            description: Set(movie.description.clone()),
            duration: Set(movie.duration),
            director_id: Set(movie.director_id),
        }
        .update(&self.db)
        .await
        .context("update movie")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogError> {
        let deleted = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    reviews::Entity::delete_many()
                        .filter(reviews::Column::MovieId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = movies::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("cascade delete movie")?;
        Ok(deleted)
    }

    async fn review_stars(&self, movie_id: i32) -> Result<Vec<i16>, CatalogError> {
        let stars: Vec<i16> = reviews::Entity::find()
            .filter(reviews::Column::MovieId.eq(movie_id))
            .select_only()
            .column(reviews::Column::Stars)
            .into_tuple()
            .all(&self.db)
            .await
            .context("collect review stars")?;
        Ok(stars)
    }
}

fn movie_from_model(model: movies::Model) -> Movie {
    Movie {
        id: model.id,
        title: model.title,
        description: model.description,
        duration: model.duration,
        director_id: model.director_id,
    }
}

// ── Review repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub db: DatabaseConnection,
}

impl ReviewRepository for DbReviewRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Review>, CatalogError> {
        let model = reviews::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find review by id")?;
        Ok(model.map(review_from_model))
    }

    async fn list(&self) -> Result<Vec<Review>, CatalogError> {
        let models = reviews::Entity::find()
            .order_by_asc(reviews::Column::Id)
            .all(&self.db)
            .await
            .context("list reviews")?;
        Ok(models.into_iter().map(review_from_model).collect())
    }

    async fn create(&self, review: &NewReview) -> Result<Review, CatalogError> {
        let model = reviews::ActiveModel {
            text: Set(review.text.clone()),
            stars: Set(review.stars),
            movie_id: Set(review.movie_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create review")?;
        Ok(review_from_model(model))
    }

    async fn update(&self, review: &Review) -> Result<(), CatalogError> {
        reviews::ActiveModel {
            id: Set(review.id),
            text: Set(review.text.clone()),
            stars: Set(review.stars),
            movie_id: Set(review.movie_id),
        }
        .update(&self.db)
        .await
        .context("update review")?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogError> {
        let result = reviews::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete review")?;
        Ok(result.rows_affected > 0)
    }
}

fn review_from_model(model: reviews::Model) -> Review {
    Review {
        id: model.id,
        text: model.text,
        stars: model.stars,
        movie_id: model.movie_id,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, CatalogError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), CatalogError> {
        users::ActiveModel {
            id: Set(user.id),
            username: Set(user.username.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            is_active: Set(user.is_active),
            confirmation_code: Set(user.confirmation_code.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn mark_confirmed(&self, id: Uuid) -> Result<(), CatalogError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        am.is_active = Set(true);
        am.confirmation_code = Set(None);
        am.update(&self.db).await.context("mark user confirmed")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        is_active: model.is_active,
        confirmation_code: model.confirmation_code,
        created_at: model.created_at,
    }
}
