use crate::shared::collection::use_collection;
use crate::shared::components::collection_table::{CollectionTable, Column};
use contracts::system::users::User;
use leptos::prelude::*;

const COLUMNS: &[Column] = &[
    Column::text("id"),
    Column::text("name"),
    Column::number("age"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub age: String,
}

impl From<User> for UserRow {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name,
            age: u.age.to_string(),
        }
    }
}

impl UserRow {
    pub fn cells(self) -> Vec<String> {
        vec![self.id, self.name, self.age]
    }
}

fn user_cells(u: User) -> Vec<String> {
    UserRow::from(u).cells()
}

#[component]
#[allow(non_snake_case)]
pub fn UserList() -> impl IntoView {
    view! {
        <CollectionTable
            resource={use_collection::<User>()}
            icon_name="users"
            columns=COLUMNS
            cells=user_cells
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::collection_table::table_cells;

    #[test]
    fn test_user_row() {
        let cells = user_cells(User {
            id: 2,
            name: "bob".to_string(),
            age: 30,
        });
        assert_eq!(cells, vec!["2", "bob", "30"]);
        assert_eq!(cells.len(), COLUMNS.len());
    }

    #[test]
    fn test_empty_list_has_no_rows() {
        let users: Vec<User> = serde_json::from_str("[]").unwrap();
        let rows = table_cells(users, user_cells);
        assert!(rows.is_empty());
    }
}
