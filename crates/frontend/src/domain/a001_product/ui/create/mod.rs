//! Product Create UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API function (create)
//! - view_model.rs: ViewModel with the submit command and form state
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use model::create_product;
pub use view::ProductCreate;
pub use view_model::ProductCreateViewModel;
