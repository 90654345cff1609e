use chrono::{DateTime, NaiveDate, Utc};

/// Pure user model for the service boundary (no serde)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub forename: String,
    pub surname: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub is_active: bool,
}

/// Candidate record for create/edit; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub forename: String,
    pub surname: String,
    pub email: String,
    /// `None` is rejected by validation before any write.
    pub date_of_birth: Option<NaiveDate>,
    pub is_active: bool,
}

/// Audit log entry paired with a user mutation.
///
/// `user_id` is a plain integer reference, not a foreign key: a log must
/// outlive the user it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Log {
    pub id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub kind: String,
    pub changes: String,
}

/// The log kinds the user service produces. `Log::kind` itself stays free
/// text so foreign writers are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    CreatedUser,
    UpdatedUser,
    DeletedUser,
}

impl LogKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LogKind::CreatedUser => "Created User",
            LogKind::UpdatedUser => "Updated User",
            LogKind::DeletedUser => "Deleted User",
        }
    }
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
