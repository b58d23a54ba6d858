use sea_orm::entity::prelude::*;

/// Password records are append-only: rows are never updated except for the
/// one-way `deactivate_timestamp` transition, and are removed only by the
/// cascading delete of their principal.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "iam_passwords")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub principal_id: Uuid,
    pub password_hash: String,
    pub create_timestamp: DateTimeWithTimeZone,
    pub deactivate_timestamp: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::iam_principals::Entity",
        from = "Column::PrincipalId",
        to = "super::iam_principals::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    IamPrincipals,
}

impl Related<super::iam_principals::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IamPrincipals.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
