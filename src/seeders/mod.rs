pub mod article_seeder;
pub mod comment_seeder;
pub mod topic_seeder;
pub mod user_seeder;

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use crate::entities::topic;

/// Seeds the fixture dataset unless topics are already present.
pub async fn run_seeders(db: &DatabaseConnection) -> Result<(), DbErr> {
    if topic::Entity::find().count(db).await? > 0 {
        tracing::info!("Database already seeded, skipping");
        return Ok(());
    }

    seed_fixture(db).await
}

/// Inserts every fixture row. Order matters: each table references the ones before it.
pub async fn seed_fixture(db: &DatabaseConnection) -> Result<(), DbErr> {
    topic_seeder::seed_topics(db).await?;
    user_seeder::seed_users(db).await?;
    article_seeder::seed_articles(db).await?;
    comment_seeder::seed_comments(db).await?;

    tracing::info!("Seeding complete");
    Ok(())
}

pub(crate) fn timestamp(millis: i64) -> Result<DateTime<Utc>, DbErr> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| DbErr::Custom(format!("fixture timestamp out of range: {}", millis)))
}
