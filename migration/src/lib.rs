pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_topics_and_users;
mod m20240101_000002_create_articles;
mod m20240101_000003_create_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_topics_and_users::Migration),
            Box::new(m20240101_000002_create_articles::Migration),
            Box::new(m20240101_000003_create_comments::Migration),
        ]
    }
}
