use serde::{Deserialize, Serialize};

use crate::domain::common::RestCollection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl RestCollection for User {
    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }
}
