use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Topics are keyed by their slug, users by their username
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Topics::Slug).text().not_null().primary_key())
                    .col(ColumnDef::new(Topics::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Username).text().not_null().primary_key())
                    .col(ColumnDef::new(Users::AvatarUrl).text().not_null())
                    .col(ColumnDef::new(Users::Name).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Topics::Table).to_owned()).await
    }
}

#[derive(Iden)]
enum Topics {
    Table,
    Slug,
    Description,
}

#[derive(Iden)]
enum Users {
    Table,
    Username,
    AvatarUrl,
    Name,
}
