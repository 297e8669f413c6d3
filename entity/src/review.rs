use sea_orm::entity::prelude::*;

/// Name of the unique index over (`bootcamp_id`, `user_id`).
pub const UNIQUE_AUTHOR_INDEX: &str = "idx_review_bootcamp_user";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub rating: i32,
    pub created_at: DateTimeUtc,
    pub bootcamp_id: i32,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bootcamp::Entity",
        from = "Column::BootcampId",
        to = "super::bootcamp::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Bootcamp,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::bootcamp::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bootcamp.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
