use sea_orm_migration::prelude::*;

use kinoteka_catalog_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
