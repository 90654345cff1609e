pub mod model;

pub use model::{Log, LogKind, NewUser, User};
