use std::sync::Arc;

use tracing::{debug, instrument};

use crate::contract::model::Log;
use crate::domain::error::DomainError;
use crate::infra::storage::{logs, mapper, Store};

/// Read-only projection over the audit log.
#[derive(Clone)]
pub struct LogService {
    store: Arc<Store>,
}

impl LogService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    #[instrument(name = "user_management.logs.all_logs", skip(self))]
    pub async fn all_logs(&self) -> Result<Vec<Log>, DomainError> {
        let rows = logs::find_all(self.store.connection()).await?;
        Ok(rows.into_iter().map(mapper::log_to_contract).collect())
    }

    /// Lookup by id; an unknown id is an absent result, not an error.
    #[instrument(name = "user_management.logs.get_log", skip(self), fields(log_id = %id))]
    pub async fn get_log(&self, id: i64) -> Result<Option<Log>, DomainError> {
        debug!("Getting log by id");
        let row = logs::find_by_id(self.store.connection(), id).await?;
        Ok(row.map(mapper::log_to_contract))
    }

    /// Logs whose kind exactly equals the argument (case-sensitive).
    /// Treating an empty argument as "no filter" is the caller's decision,
    /// not this service's.
    #[instrument(name = "user_management.logs.filter_by_kind", skip(self))]
    pub async fn filter_by_kind(&self, kind: &str) -> Result<Vec<Log>, DomainError> {
        let rows = logs::filter_by_kind(self.store.connection(), kind).await?;
        Ok(rows.into_iter().map(mapper::log_to_contract).collect())
    }

    /// Logs describing the given user, including users since deleted.
    #[instrument(
        name = "user_management.logs.logs_for_user",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn logs_for_user(&self, user_id: i64) -> Result<Vec<Log>, DomainError> {
        let rows = logs::find_by_user(self.store.connection(), user_id).await?;
        Ok(rows.into_iter().map(mapper::log_to_contract).collect())
    }
}
