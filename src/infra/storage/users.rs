use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::contract::model::User;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Field values for a user row; the store assigns the id on insert.
pub struct NewUserEntity {
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub is_active: bool,
}

/// All users in id order.
pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
    Entity::find().order_by_asc(Column::Id).all(conn).await
}

/// Find a user by id.
pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(conn).await
}

/// Users whose active flag matches, in id order.
pub async fn filter_by_active<C: ConnectionTrait>(
    conn: &C,
    is_active: bool,
) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::IsActive.eq(is_active))
        .order_by_asc(Column::Id)
        .all(conn)
        .await
}

/// Insert a new user and return the persisted row with its assigned id.
pub async fn insert<C: ConnectionTrait>(conn: &C, new_user: NewUserEntity) -> Result<Model, DbErr> {
    let active_model = ActiveModel {
        forename: Set(new_user.forename),
        surname: Set(new_user.surname),
        email: Set(new_user.email),
        date_of_birth: Set(new_user.date_of_birth),
        is_active: Set(new_user.is_active),
        ..Default::default()
    };

    active_model.insert(conn).await
}

/// Replace every stored field of the user with the given id.
pub async fn update<C: ConnectionTrait>(
    conn: &C,
    id: i64,
    fields: NewUserEntity,
) -> Result<Model, DbErr> {
    let active_model = ActiveModel {
        id: Set(id),
        forename: Set(fields.forename),
        surname: Set(fields.surname),
        email: Set(fields.email),
        date_of_birth: Set(fields.date_of_birth),
        is_active: Set(fields.is_active),
    };

    active_model.update(conn).await
}

/// Delete a user by id, returns true if a row was deleted.
pub async fn delete_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}

/// Remove every user row (reset only).
pub async fn delete_all<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    Entity::delete_many().exec(conn).await?;
    Ok(())
}

/// Insert a seed user under its original id (reset only).
pub async fn insert_seed<C: ConnectionTrait>(conn: &C, user: User) -> Result<(), DbErr> {
    let active_model = ActiveModel {
        id: Set(user.id),
        forename: Set(user.forename),
        surname: Set(user.surname),
        email: Set(user.email),
        date_of_birth: Set(user.date_of_birth),
        is_active: Set(user.is_active),
    };

    let _ = active_model.insert(conn).await?;
    Ok(())
}
