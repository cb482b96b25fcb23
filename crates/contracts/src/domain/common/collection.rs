use serde::de::DeserializeOwned;

/// Трейт для записей, которые живут в именованной REST-коллекции
///
/// A collection is addressed as `GET /<name>` (list) and `POST /<name>` (create)
/// under the client's base URL.
pub trait RestCollection: DeserializeOwned + Clone + std::fmt::Debug + 'static {
    /// Имя коллекции в REST API (например, "products")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Путь коллекции относительно базового URL, например "/products"
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }
}
