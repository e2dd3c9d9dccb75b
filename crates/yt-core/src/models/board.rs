use serde::{Deserialize, Serialize};

/// An agile board; only used to turn a board name into an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
}
