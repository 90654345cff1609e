use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::contract::model::Log;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub changes: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Field values for a log row; the store assigns the id on insert.
pub struct NewLogEntity {
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub kind: String,
    pub changes: String,
}

/// All logs in id order.
pub async fn find_all<C: ConnectionTrait>(conn: &C) -> Result<Vec<Model>, DbErr> {
    Entity::find().order_by_asc(Column::Id).all(conn).await
}

/// Find a log by id.
pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: i64) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(conn).await
}

/// Logs whose kind exactly equals the argument, in id order.
pub async fn filter_by_kind<C: ConnectionTrait>(
    conn: &C,
    kind: &str,
) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::Kind.eq(kind))
        .order_by_asc(Column::Id)
        .all(conn)
        .await
}

/// Logs describing the given user, in id order.
pub async fn find_by_user<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::Id)
        .all(conn)
        .await
}

/// Insert a new log and return the persisted row with its assigned id.
pub async fn insert<C: ConnectionTrait>(conn: &C, new_log: NewLogEntity) -> Result<Model, DbErr> {
    let active_model = ActiveModel {
        user_id: Set(new_log.user_id),
        created_at: Set(new_log.created_at),
        kind: Set(new_log.kind),
        changes: Set(new_log.changes),
        ..Default::default()
    };

    active_model.insert(conn).await
}

/// Remove every log row (reset only).
pub async fn delete_all<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    Entity::delete_many().exec(conn).await?;
    Ok(())
}

/// Insert a seed log under its original id (reset only).
pub async fn insert_seed<C: ConnectionTrait>(conn: &C, log: Log) -> Result<(), DbErr> {
    let active_model = ActiveModel {
        id: Set(log.id),
        user_id: Set(log.user_id),
        created_at: Set(log.created_at),
        kind: Set(log.kind),
        changes: Set(log.changes),
    };

    let _ = active_model.insert(conn).await?;
    Ok(())
}
