use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bootcamp::Table)
                    .if_not_exists()
                    .col(pk_auto(Bootcamp::Id))
                    .col(string_len_uniq(Bootcamp::Name, 50))
                    .col(string_uniq(Bootcamp::Slug))
                    .col(text(Bootcamp::Description))
                    .col(string_null(Bootcamp::Website))
                    .col(string_len_null(Bootcamp::Phone, 20))
                    .col(string_null(Bootcamp::Email))
                    .col(double(Bootcamp::Latitude))
                    .col(double(Bootcamp::Longitude))
                    .col(string_null(Bootcamp::FormattedAddress))
                    .col(string_null(Bootcamp::Street))
                    .col(string_null(Bootcamp::City))
                    .col(string_null(Bootcamp::State))
                    .col(string_null(Bootcamp::Zipcode))
                    .col(string_null(Bootcamp::Country))
                    .col(json(Bootcamp::Careers))
                    .col(double_null(Bootcamp::AverageRating))
                    .col(double_null(Bootcamp::AverageCost))
                    .col(string(Bootcamp::Photo).default("no-photo.jpg"))
                    .col(boolean(Bootcamp::Housing).default(false))
                    .col(boolean(Bootcamp::JobAssistance).default(false))
                    .col(boolean(Bootcamp::JobGuarantee).default(false))
                    .col(boolean(Bootcamp::AcceptGi).default(false))
                    .col(
                        timestamp_with_time_zone(Bootcamp::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer(Bootcamp::UserId))
                    .col(integer_null(Bootcamp::ExclusiveOwnerId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bootcamp_user_id")
                            .from(Bootcamp::Table, Bootcamp::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bootcamp_coordinates")
                    .table(Bootcamp::Table)
                    .col(Bootcamp::Latitude)
                    .col(Bootcamp::Longitude)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bootcamp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bootcamp {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Website,
    Phone,
    Email,
    Latitude,
    Longitude,
    FormattedAddress,
    Street,
    City,
    State,
    Zipcode,
    Country,
    Careers,
    AverageRating,
    AverageCost,
    Photo,
    Housing,
    JobAssistance,
    JobGuarantee,
    AcceptGi,
    CreatedAt,
    UserId,
    ExclusiveOwnerId,
}
