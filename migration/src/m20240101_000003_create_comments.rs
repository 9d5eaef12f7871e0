use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Comments::Table)
                .if_not_exists()
                .col(ColumnDef::new(Comments::CommentId).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Comments::Author).text().not_null())
                .col(ColumnDef::new(Comments::ArticleId).integer().not_null())
                .col(ColumnDef::new(Comments::Votes).integer().not_null().default(0))
                .col(ColumnDef::new(Comments::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Comments::Body).text().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_comments_author")
                        .from(Comments::Table, Comments::Author)
                        .to(Users::Table, Users::Username)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_comments_article_id")
                        .from(Comments::Table, Comments::ArticleId)
                        .to(Articles::Table, Articles::ArticleId)
                )
                .to_owned(),
        ).await?;

        // Comment listing always filters by article
        manager.create_index(Index::create().name("idx_comments_article_id").table(Comments::Table).col(Comments::ArticleId).to_owned()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Comments::Table).to_owned()).await
    }
}

#[derive(Iden)]
enum Comments {
    Table,
    CommentId,
    Author,
    ArticleId,
    Votes,
    CreatedAt,
    Body,
}

#[derive(Iden)]
enum Articles {
    Table,
    ArticleId,
}

#[derive(Iden)]
enum Users {
    Table,
    Username,
}
