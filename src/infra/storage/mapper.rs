use crate::contract::model::{Log, User};
use crate::infra::storage::{logs, users};

/// Convert a user row to its contract model
pub fn user_to_contract(entity: users::Model) -> User {
    User {
        id: entity.id,
        forename: entity.forename,
        surname: entity.surname,
        email: entity.email,
        date_of_birth: entity.date_of_birth,
        is_active: entity.is_active,
    }
}

/// Convert a log row to its contract model
pub fn log_to_contract(entity: logs::Model) -> Log {
    Log {
        id: entity.id,
        user_id: entity.user_id,
        created_at: entity.created_at,
        kind: entity.kind,
        changes: entity.changes,
    }
}
