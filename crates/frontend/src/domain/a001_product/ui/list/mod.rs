use crate::shared::collection::use_collection;
use crate::shared::components::collection_table::{CollectionTable, Column};
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

const COLUMNS: &[Column] = &[
    Column::text("id"),
    Column::text("name"),
    Column::number("price"),
];

#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            // null price renders as an empty cell
            price: p.price.map(|v| v.to_string()).unwrap_or_default(),
        }
    }
}

impl ProductRow {
    pub fn cells(self) -> Vec<String> {
        vec![self.id, self.name, self.price]
    }
}

fn product_cells(p: Product) -> Vec<String> {
    ProductRow::from(p).cells()
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    view! {
        <CollectionTable
            resource={use_collection::<Product>()}
            icon_name="products"
            columns=COLUMNS
            cells=product_cells
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::collection_table::table_cells;
    use contracts::domain::a001_product::aggregate::Price;

    #[test]
    fn test_single_product_renders_one_row() {
        let products: Vec<Product> =
            serde_json::from_str(r#"[{"id":1,"name":"pen","price":1.5}]"#).unwrap();
        let rows = table_cells(products, product_cells);

        assert_eq!(rows, vec![vec!["1", "pen", "1.5"]]);
    }

    #[test]
    fn test_null_price_is_blank() {
        let row = ProductRow::from(Product {
            id: 4,
            name: "gift".to_string(),
            price: None,
        });
        assert_eq!(row.price, "");
    }

    #[test]
    fn test_whole_price_has_no_fraction() {
        let row = ProductRow::from(Product {
            id: 5,
            name: "cup".to_string(),
            price: Some(Price::Number(3.0)),
        });
        assert_eq!(row.price, "3");
    }

    #[test]
    fn test_text_price_is_shown_verbatim() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[{"id":1,"name":"pen","price":1.5},{"id":2,"name":"cup","price":"3.00"}]"#,
        )
        .unwrap();
        let cells = table_cells(products, product_cells);

        assert_eq!(cells[0], vec!["1", "pen", "1.5"]);
        assert_eq!(cells[1], vec!["2", "cup", "3.00"]);
        assert_eq!(cells[1].len(), COLUMNS.len());
    }
}
