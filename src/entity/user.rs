//! User row as stored in `integra_partners.users`.
//!
//! Only used to decode returned rows; statements are built by
//! [`crate::db::statements`].

use sea_orm::entity::prelude::*;

use crate::models::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(schema_name = "integra_partners", table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    #[sea_orm(unique)]
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub user_status: String,
    pub department: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(m: Model) -> Self {
        User {
            user_id: m.user_id,
            user_name: m.user_name,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            user_status: m.user_status,
            department: m.department,
        }
    }
}
