//! Fixed sample dataset used for first-run initialization and full reset.
//!
//! The dataset is versioned: [`Store::reset_and_reseed`] must reproduce the
//! same rows, ids included, every time it runs.
//!
//! [`Store::reset_and_reseed`]: crate::infra::storage::Store::reset_and_reseed

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::contract::model::{Log, LogKind, User};

/// Highest user id in the seed dataset.
pub const MAX_USER_ID: i64 = 11;
/// Highest log id in the seed dataset.
pub const MAX_LOG_ID: i64 = 15;

/// The 11 sample users, ids 1-11.
pub fn users() -> Vec<User> {
    vec![
        user(1, "Peter", "Loew", "ploew@example.com", date(1985, 1, 15), true),
        user(2, "Benjamin Franklin", "Gates", "bfgates@example.com", date(1990, 3, 27), true),
        user(3, "Castor", "Troy", "ctroy@example.com", date(1976, 6, 8), false),
        user(4, "Memphis", "Raines", "mraines@example.com", date(2002, 9, 5), true),
        user(5, "Stanley", "Goodspeed", "sgodspeed@example.com", date(1995, 12, 20), true),
        user(6, "H.I.", "McDunnough", "himcdunnough@example.com", date(2005, 1, 23), true),
        user(7, "Cameron", "Poe", "cpoe@example.com", date(1998, 4, 10), false),
        user(8, "Edward", "Malus", "emalus@example.com", date(1980, 7, 3), false),
        user(9, "Damon", "Macready", "dmacready@example.com", date(2005, 11, 18), false),
        user(10, "Johnny", "Blaze", "jblaze@example.com", date(1972, 2, 28), true),
        user(11, "Robin", "Feld", "rfeld@example.com", date(1993, 9, 15), true),
    ]
}

/// The 15 sample logs, ids 1-15: one creation log per seeded user, two
/// updates, two deletions.
pub fn logs() -> Vec<Log> {
    vec![
        log(1, 1, 36, LogKind::CreatedUser, "Changes"),
        log(2, 2, 37, LogKind::CreatedUser, "Changes"),
        log(3, 3, 38, LogKind::CreatedUser, "Changes"),
        log(4, 4, 39, LogKind::CreatedUser, "Changes"),
        log(5, 5, 40, LogKind::CreatedUser, "Changes"),
        log(6, 6, 41, LogKind::CreatedUser, "Changes"),
        log(7, 7, 42, LogKind::CreatedUser, "Changes"),
        log(8, 8, 43, LogKind::CreatedUser, "Changes"),
        log(9, 9, 44, LogKind::CreatedUser, "Changes"),
        log(10, 10, 45, LogKind::CreatedUser, "Changes"),
        log(11, 11, 46, LogKind::CreatedUser, "Changes"),
        log(12, 3, 36, LogKind::UpdatedUser, "Changes for Update"),
        log(13, 4, 36, LogKind::UpdatedUser, "Changes for Update"),
        log(14, 5, 36, LogKind::DeletedUser, "Changes for Deletion"),
        log(15, 6, 36, LogKind::DeletedUser, "Changes for Deletion"),
    ]
}

fn user(
    id: i64,
    forename: &str,
    surname: &str,
    email: &str,
    date_of_birth: NaiveDate,
    is_active: bool,
) -> User {
    User {
        id,
        forename: forename.to_string(),
        surname: surname.to_string(),
        email: email.to_string(),
        date_of_birth,
        is_active,
    }
}

fn log(id: i64, user_id: i64, second: u32, kind: LogKind, changes: &str) -> Log {
    Log {
        id,
        user_id,
        created_at: timestamp(second),
        kind: kind.to_string(),
        changes: changes.to_string(),
    }
}

// Every seed log falls within the 2024-03-11 13:52 minute; only the seconds
// differ.
fn timestamp(second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 11, 13, 52, second).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_dense_and_match_the_declared_maxima() {
        let users = users();
        assert_eq!(users.len(), 11);
        assert!(users.iter().enumerate().all(|(i, u)| u.id == i as i64 + 1));
        assert_eq!(users.last().map(|u| u.id), Some(MAX_USER_ID));

        let logs = logs();
        assert_eq!(logs.len(), 15);
        assert!(logs.iter().enumerate().all(|(i, l)| l.id == i as i64 + 1));
        assert_eq!(logs.last().map(|l| l.id), Some(MAX_LOG_ID));
    }

    #[test]
    fn test_seed_logs_reference_seeded_users() {
        let logs = logs();
        assert!(logs.iter().all(|l| (1..=MAX_USER_ID).contains(&l.user_id)));
        let created = logs.iter().filter(|l| l.kind == "Created User").count();
        assert_eq!(created, 11);
    }
}
