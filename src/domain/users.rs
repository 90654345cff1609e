use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use tracing::{debug, info, instrument};

use crate::contract::model::{LogKind, NewUser, User};
use crate::domain::error::DomainError;
use crate::infra::storage::{logs, mapper, users, Store};

/// Date rendering used in audit log change lines.
const DATE_OF_BIRTH_FORMAT: &str = "%m/%d/%Y";

/// Birth years at or before this are rejected.
const BIRTH_YEAR_FLOOR: i32 = 1900;

/// User queries plus the mutations that keep `users` and `logs` in sync.
/// Stateless over an injected store handle; safe to construct per request.
#[derive(Clone)]
pub struct UserService {
    store: Arc<Store>,
}

impl UserService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    #[instrument(name = "user_management.users.all_users", skip(self))]
    pub async fn all_users(&self) -> Result<Vec<User>, DomainError> {
        let rows = users::find_all(self.store.connection()).await?;
        Ok(rows.into_iter().map(mapper::user_to_contract).collect())
    }

    #[instrument(name = "user_management.users.filter_by_active", skip(self))]
    pub async fn filter_by_active(&self, is_active: bool) -> Result<Vec<User>, DomainError> {
        let rows = users::filter_by_active(self.store.connection(), is_active).await?;
        Ok(rows.into_iter().map(mapper::user_to_contract).collect())
    }

    /// Lookup by id; an unknown id is an absent result, not an error.
    #[instrument(name = "user_management.users.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError> {
        debug!("Getting user by id");
        let row = users::find_by_id(self.store.connection(), id).await?;
        Ok(row.map(mapper::user_to_contract))
    }

    /// Create a user together with its "Created User" audit log. Both rows
    /// commit in one transaction, so neither is visible without the other.
    #[instrument(
        name = "user_management.users.add_user",
        skip(self, new_user),
        fields(email = %new_user.email)
    )]
    pub async fn add_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        let date_of_birth = validate_new_user(&new_user)?;

        let txn = self.store.begin().await?;

        let row = users::insert(
            &txn,
            users::NewUserEntity {
                forename: new_user.forename,
                surname: new_user.surname,
                email: new_user.email,
                date_of_birth,
                is_active: new_user.is_active,
            },
        )
        .await?;
        let user = mapper::user_to_contract(row);

        logs::insert(
            &txn,
            logs::NewLogEntity {
                user_id: user.id,
                created_at: Utc::now(),
                kind: LogKind::CreatedUser.to_string(),
                changes: field_summary(&user),
            },
        )
        .await?;

        txn.commit().await?;

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    /// Replace the stored fields of the user and write the paired
    /// "Updated User" log listing `old set to new` per field.
    #[instrument(
        name = "user_management.users.edit_user",
        skip(self, new_user),
        fields(user_id = %id)
    )]
    pub async fn edit_user(&self, id: i64, new_user: NewUser) -> Result<User, DomainError> {
        info!("Updating user");

        let date_of_birth = validate_new_user(&new_user)?;

        let txn = self.store.begin().await?;

        let before = users::find_by_id(&txn, id)
            .await?
            .map(mapper::user_to_contract)
            .ok_or_else(|| DomainError::user_not_found(id))?;

        let row = users::update(
            &txn,
            id,
            users::NewUserEntity {
                forename: new_user.forename,
                surname: new_user.surname,
                email: new_user.email,
                date_of_birth,
                is_active: new_user.is_active,
            },
        )
        .await?;
        let after = mapper::user_to_contract(row);

        logs::insert(
            &txn,
            logs::NewLogEntity {
                user_id: id,
                created_at: Utc::now(),
                kind: LogKind::UpdatedUser.to_string(),
                changes: update_changes(&before, &after),
            },
        )
        .await?;

        txn.commit().await?;

        info!("Successfully updated user");
        Ok(after)
    }

    /// Remove the user and write the paired "Deleted User" log carrying the
    /// last known field values. Returns the removed user.
    #[instrument(name = "user_management.users.delete_user", skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: i64) -> Result<User, DomainError> {
        info!("Deleting user");

        let txn = self.store.begin().await?;

        let user = users::find_by_id(&txn, id)
            .await?
            .map(mapper::user_to_contract)
            .ok_or_else(|| DomainError::user_not_found(id))?;

        users::delete_by_id(&txn, id).await?;

        logs::insert(
            &txn,
            logs::NewLogEntity {
                user_id: id,
                created_at: Utc::now(),
                kind: LogKind::DeletedUser.to_string(),
                changes: field_summary(&user),
            },
        )
        .await?;

        txn.commit().await?;

        info!("Successfully deleted user");
        Ok(user)
    }
}

// --- validation ---

fn validate_new_user(new_user: &NewUser) -> Result<NaiveDate, DomainError> {
    if new_user.forename.trim().is_empty() {
        return Err(DomainError::validation("forename", "Forename is required"));
    }
    if new_user.surname.trim().is_empty() {
        return Err(DomainError::validation("surname", "Surname is required"));
    }
    if new_user.email.trim().is_empty() || !new_user.email.contains('@') {
        return Err(DomainError::validation(
            "email",
            "A valid email address is required",
        ));
    }
    let date_of_birth = new_user
        .date_of_birth
        .ok_or_else(|| DomainError::validation("date_of_birth", "Date of birth is required"))?;
    if date_of_birth.year() <= BIRTH_YEAR_FLOOR {
        return Err(DomainError::validation(
            "date_of_birth",
            "Date of birth must be past the year 1900",
        ));
    }
    Ok(date_of_birth)
}

// --- audit change lines ---

/// One `Field: value` line per field; used by creation and deletion logs.
fn field_summary(user: &User) -> String {
    format!(
        "Forename: {}\nSurname: {}\nEmail: {}\nDate Of Birth: {}",
        user.forename,
        user.surname,
        user.email,
        user.date_of_birth.format(DATE_OF_BIRTH_FORMAT)
    )
}

/// One `Field: old set to new` line per field.
fn update_changes(before: &User, after: &User) -> String {
    format!(
        "Forename: {} set to {}\nSurname: {} set to {}\nEmail: {} set to {}\nDate Of Birth: {} set to {}",
        before.forename,
        after.forename,
        before.surname,
        after.surname,
        before.email,
        after.email,
        before.date_of_birth.format(DATE_OF_BIRTH_FORMAT),
        after.date_of_birth.format(DATE_OF_BIRTH_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewUser {
        NewUser {
            forename: "John".to_string(),
            surname: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
            is_active: true,
        }
    }

    fn stored(user_id: i64, forename: &str) -> User {
        User {
            id: user_id,
            forename: forename.to_string(),
            surname: "Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            is_active: true,
        }
    }

    #[test]
    fn test_validate_accepts_a_complete_draft() {
        let date_of_birth = validate_new_user(&draft()).expect("draft must validate");
        assert_eq!(date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
    }

    #[test]
    fn test_validate_rejects_blank_names() {
        let mut missing_forename = draft();
        missing_forename.forename = "  ".to_string();
        assert!(validate_new_user(&missing_forename).is_err());

        let mut missing_surname = draft();
        missing_surname.surname = String::new();
        assert!(validate_new_user(&missing_surname).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_or_mangled_email() {
        let mut missing_email = draft();
        missing_email.email = String::new();
        assert!(validate_new_user(&missing_email).is_err());

        let mut mangled_email = draft();
        mangled_email.email = "john.doe.example.com".to_string();
        assert!(validate_new_user(&mangled_email).is_err());
    }

    #[test]
    fn test_validate_rejects_missing_date_of_birth() {
        let mut missing_date = draft();
        missing_date.date_of_birth = None;
        let error = validate_new_user(&missing_date).unwrap_err();
        assert!(matches!(error, DomainError::Validation { .. }));
    }

    #[test]
    fn test_validate_enforces_the_birth_year_floor() {
        let mut too_old = draft();
        too_old.date_of_birth = NaiveDate::from_ymd_opt(1900, 12, 31);
        assert!(validate_new_user(&too_old).is_err());

        let mut just_young_enough = draft();
        just_young_enough.date_of_birth = NaiveDate::from_ymd_opt(1901, 1, 1);
        assert!(validate_new_user(&just_young_enough).is_ok());
    }

    #[test]
    fn test_field_summary_lists_each_field_on_its_own_line() {
        let summary = field_summary(&stored(1, "John"));
        assert_eq!(
            summary,
            "Forename: John\nSurname: Doe\nEmail: john.doe@example.com\nDate Of Birth: 01/01/1990"
        );
    }

    #[test]
    fn test_update_changes_lists_old_set_to_new_per_field() {
        let changes = update_changes(&stored(1, "John"), &stored(1, "Johnny"));
        assert!(changes.contains("Forename: John set to Johnny"));
        assert!(changes.contains("Surname: Doe set to Doe"));
        assert!(changes.contains("Date Of Birth: 01/01/1990 set to 01/01/1990"));
    }
}
