use crate::domain::repository::DirectorRepository;
use crate::domain::types::Director;
use crate::domain::validate::{ValidationErrors, validate_director_name};
use crate::error::CatalogError;

/// A director together with its derived movie count.
#[derive(Debug, Clone)]
pub struct DirectorWithCount {
    pub director: Director,
    pub movies_count: u64,
}

// ── ListDirectors ────────────────────────────────────────────────────────────

pub struct ListDirectorsUseCase<R: DirectorRepository> {
    pub repo: R,
}

impl<R: DirectorRepository> ListDirectorsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<DirectorWithCount>, CatalogError> {
        let directors = self.repo.list().await?;
        let mut out = Vec::with_capacity(directors.len());
        for director in directors {
            let movies_count = self.repo.movies_count(director.id).await?;
            out.push(DirectorWithCount {
                director,
                movies_count,
            });
        }
        Ok(out)
    }
}

// ── GetDirector ──────────────────────────────────────────────────────────────

pub struct GetDirectorUseCase<R: DirectorRepository> {
    pub repo: R,
}

impl<R: DirectorRepository> GetDirectorUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<DirectorWithCount, CatalogError> {
        let director = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::DirectorNotFound)?;
        let movies_count = self.repo.movies_count(director.id).await?;
        Ok(DirectorWithCount {
            director,
            movies_count,
        })
    }
}

// ── CreateDirector ───────────────────────────────────────────────────────────

pub struct CreateDirectorInput {
    pub name: String,
}

pub struct CreateDirectorUseCase<R: DirectorRepository> {
    pub repo: R,
}

impl<R: DirectorRepository> CreateDirectorUseCase<R> {
    pub async fn execute(
        &self,
        input: CreateDirectorInput,
    ) -> Result<DirectorWithCount, CatalogError> {
        let mut errors = ValidationErrors::new();
        validate_director_name(&input.name, &mut errors);
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }
        // Name uniqueness is a conflict, not a field validation failure
        if self.repo.find_by_name(&input.name).await?.is_some() {
            return Err(CatalogError::DirectorNameTaken);
        }
        let director = self.repo.create(&input.name).await?;
        Ok(DirectorWithCount {
            director,
            movies_count: 0,
        })
    }
}

// ── UpdateDirector ───────────────────────────────────────────────────────────

pub struct UpdateDirectorInput {
    pub name: String,
}

pub struct UpdateDirectorUseCase<R: DirectorRepository> {
    pub repo: R,
}

impl<R: DirectorRepository> UpdateDirectorUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        input: UpdateDirectorInput,
    ) -> Result<DirectorWithCount, CatalogError> {
        // Target existence first — a missing director is NotFound, not a
        // field validation failure.
        let mut director = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::DirectorNotFound)?;

        let mut errors = ValidationErrors::new();
        validate_director_name(&input.name, &mut errors);
        if !errors.is_empty() {
            return Err(CatalogError::Validation(errors));
        }
        // Uniqueness check excludes the director being updated: renaming a
        // director to its own current name is allowed.
        if let Some(other) = self.repo.find_by_name(&input.name).await? {
            if other.id != id {
                return Err(CatalogError::DirectorNameTaken);
            }
        }

        self.repo.update_name(id, &input.name).await?;
        director.name = input.name;
        let movies_count = self.repo.movies_count(id).await?;
        Ok(DirectorWithCount {
            director,
            movies_count,
        })
    }
}

// ── DeleteDirector ───────────────────────────────────────────────────────────

pub struct DeleteDirectorUseCase<R: DirectorRepository> {
    pub repo: R,
}

impl<R: DirectorRepository> DeleteDirectorUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), CatalogError> {
        if !self.repo.delete(id).await? {
            return Err(CatalogError::DirectorNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockDirectorRepo {
        directors: Mutex<HashMap<i32, Director>>,
        next_id: Mutex<i32>,
    }

    impl MockDirectorRepo {
        fn new() -> Self {
            Self {
                directors: Mutex::new(HashMap::new()),
                next_id: Mutex::new(1),
            }
        }

        fn with(names: &[&str]) -> Self {
            let repo = Self::new();
            {
                let mut directors = repo.directors.lock().unwrap();
                let mut next = repo.next_id.lock().unwrap();
                for name in names {
                    directors.insert(
                        *next,
                        Director {
                            id: *next,
                            name: (*name).to_owned(),
                        },
                    );
                    *next += 1;
                }
            }
            repo
        }
    }

    impl DirectorRepository for MockDirectorRepo {
        async fn find_by_id(&self, id: i32) -> Result<Option<Director>, CatalogError> {
            Ok(self.directors.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Director>, CatalogError> {
            Ok(self
                .directors
                .lock()
                .unwrap()
                .values()
                .find(|d| d.name == name)
                .cloned())
        }

        async fn list(&self) -> Result<Vec<Director>, CatalogError> {
            let mut all: Vec<_> = self.directors.lock().unwrap().values().cloned().collect();
            all.sort_by_key(|d| d.id);
            Ok(all)
        }

        async fn movies_count(&self, _director_id: i32) -> Result<u64, CatalogError> {
            Ok(0)
        }

        async fn create(&self, name: &str) -> Result<Director, CatalogError> {
            let mut next = self.next_id.lock().unwrap();
            let director = Director {
                id: *next,
                name: name.to_owned(),
            };
            *next += 1;
            self.directors
                .lock()
                .unwrap()
                .insert(director.id, director.clone());
            Ok(director)
        }

        async fn update_name(&self, id: i32, name: &str) -> Result<(), CatalogError> {
            if let Some(d) = self.directors.lock().unwrap().get_mut(&id) {
                d.name = name.to_owned();
            }
            Ok(())
        }

        async fn delete(&self, id: i32) -> Result<bool, CatalogError> {
            Ok(self.directors.lock().unwrap().remove(&id).is_some())
        }
    }

    #[tokio::test]
    async fn should_create_director() {
        let usecase = CreateDirectorUseCase {
            repo: MockDirectorRepo::new(),
        };
        let created = usecase
            .execute(CreateDirectorInput {
                name: "Nolan".into(),
            })
            .await
            .unwrap();
        assert_eq!(created.director.name, "Nolan");
        assert_eq!(created.movies_count, 0);
    }

    #[tokio::test]
    async fn should_reject_duplicate_name_with_conflict() {
        let usecase = CreateDirectorUseCase {
            repo: MockDirectorRepo::with(&["Nolan"]),
        };
        let result = usecase
            .execute(CreateDirectorInput {
                name: "Nolan".into(),
            })
            .await;
        assert!(matches!(result, Err(CatalogError::DirectorNameTaken)));
    }

    #[tokio::test]
    async fn should_reject_empty_name_on_create() {
        let usecase = CreateDirectorUseCase {
            repo: MockDirectorRepo::new(),
        };
        let result = usecase.execute(CreateDirectorInput { name: "  ".into() }).await;
        match result {
            Err(CatalogError::Validation(errors)) => {
                assert!(errors.as_map().contains_key("name"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_allow_self_update_to_same_name() {
        let usecase = UpdateDirectorUseCase {
            repo: MockDirectorRepo::with(&["Nolan"]),
        };
        let updated = usecase
            .execute(
                1,
                UpdateDirectorInput {
                    name: "Nolan".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.director.name, "Nolan");
    }

    #[tokio::test]
    async fn should_reject_update_to_another_directors_name() {
        let usecase = UpdateDirectorUseCase {
            repo: MockDirectorRepo::with(&["Nolan", "Villeneuve"]),
        };
        let result = usecase
            .execute(
                2,
                UpdateDirectorInput {
                    name: "Nolan".into(),
                },
            )
            .await;
        assert!(matches!(result, Err(CatalogError::DirectorNameTaken)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_director() {
        let usecase = UpdateDirectorUseCase {
            repo: MockDirectorRepo::new(),
        };
        let result = usecase
            .execute(
                7,
                UpdateDirectorInput {
                    name: "Nolan".into(),
                },
            )
            .await;
        assert!(matches!(result, Err(CatalogError::DirectorNotFound)));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_director() {
        let usecase = DeleteDirectorUseCase {
            repo: MockDirectorRepo::new(),
        };
        let result = usecase.execute(7).await;
        assert!(matches!(result, Err(CatalogError::DirectorNotFound)));
    }

    #[tokio::test]
    async fn should_list_directors_in_id_order() {
        let usecase = ListDirectorsUseCase {
            repo: MockDirectorRepo::with(&["Nolan", "Villeneuve"]),
        };
        let all = usecase.execute().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].director.name, "Nolan");
        assert_eq!(all[1].director.name, "Villeneuve");
    }
}
