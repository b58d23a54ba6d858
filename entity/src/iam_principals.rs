use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "iam_principals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub login: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub name: String,
    pub status: String,
    pub create_timestamp: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::iam_passwords::Entity")]
    IamPasswords,
}

impl Related<super::iam_passwords::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IamPasswords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
