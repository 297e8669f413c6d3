use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251101_000001_create_user_table::User, m20251101_000002_create_bootcamp_table::Bootcamp,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(string_len(Review::Title, 100))
                    .col(text(Review::Text))
                    .col(integer(Review::Rating))
                    .col(
                        timestamp_with_time_zone(Review::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Review::BootcampId))
                    .col(integer(Review::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_bootcamp_id")
                            .from(Review::Table, Review::BootcampId)
                            .to(Bootcamp::Table, Bootcamp::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_user_id")
                            .from(Review::Table, Review::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One review per user per bootcamp
        manager
            .create_index(
                Index::create()
                    .name("idx_review_bootcamp_user")
                    .table(Review::Table)
                    .col(Review::BootcampId)
                    .col(Review::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    Title,
    Text,
    Rating,
    CreatedAt,
    BootcampId,
    UserId,
}
