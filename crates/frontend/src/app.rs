use crate::domain::a001_product::ui::create::ProductCreate;
use crate::domain::a001_product::ui::list::ProductList;
use crate::shared::api_context::ApiContext;
use crate::system::users::ui::list::UserList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One client for the whole page, resolved from window.location once.
    match ApiContext::for_current_page() {
        Ok(api) => {
            provide_context(api);
            view! {
                <div class="app">
                    <ProductList />
                    <ProductCreate />
                    <UserList />
                </div>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("Cannot start REST client: {}", e);
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{format!("Cannot start: {}", e)}</span>
                </div>
            }
            .into_any()
        }
    }
}
