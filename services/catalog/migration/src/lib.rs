use sea_orm_migration::prelude::*;

mod m20260801_000001_create_directors;
mod m20260801_000002_create_movies;
mod m20260801_000003_create_reviews;
mod m20260801_000004_create_users;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_directors::Migration),
            Box::new(m20260801_000002_create_movies::Migration),
            Box::new(m20260801_000003_create_reviews::Migration),
            Box::new(m20260801_000004_create_users::Migration),
        ]
    }
}
