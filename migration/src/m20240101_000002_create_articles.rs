use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Articles::Table)
                .if_not_exists()
                .col(ColumnDef::new(Articles::ArticleId).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Articles::Title).text().not_null())
                .col(ColumnDef::new(Articles::Body).text().not_null())
                .col(ColumnDef::new(Articles::Votes).integer().not_null().default(0))
                .col(ColumnDef::new(Articles::Topic).text().not_null())
                .col(ColumnDef::new(Articles::Author).text().not_null())
                .col(ColumnDef::new(Articles::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                // Declared inline so SQLite gets the constraints too
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_articles_topic")
                        .from(Articles::Table, Articles::Topic)
                        .to(Topics::Table, Topics::Slug)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_articles_author")
                        .from(Articles::Table, Articles::Author)
                        .to(Users::Table, Users::Username)
                )
                .to_owned(),
        ).await?;

        manager.create_index(Index::create().name("idx_articles_topic").table(Articles::Table).col(Articles::Topic).to_owned()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Articles::Table).to_owned()).await
    }
}

#[derive(Iden)]
enum Articles {
    Table,
    ArticleId,
    Title,
    Body,
    Votes,
    Topic,
    Author,
    CreatedAt,
}

#[derive(Iden)]
enum Topics {
    Table,
    Slug,
}

#[derive(Iden)]
enum Users {
    Table,
    Username,
}
