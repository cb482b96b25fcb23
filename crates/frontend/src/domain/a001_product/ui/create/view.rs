use super::view_model::ProductCreateViewModel;
use crate::shared::api_context::use_api;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ProductCreate() -> impl IntoView {
    let vm = ProductCreateViewModel::new();
    let api = use_api();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(api.clone());
    };

    view! {
        <div class="details-container products">
            <div class="details-header">
                <h3>{ProductCreateViewModel::title()}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || vm.status.get().map(|s| view! { <div class="success">{s}</div> })}

            <form class="details-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="product-name">{"Product name"}</label>
                    <input
                        type="text"
                        id="product-name"
                        name="name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.set_name(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-price">{"Product price"}</label>
                    <input
                        type="text"
                        id="product-price"
                        name="price"
                        prop:value=move || vm.form.get().price.unwrap_or_default()
                        on:input=move |ev| vm.set_price(event_target_value(&ev))
                    />
                </div>

                <div class="details-actions">
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || vm.submitting.get()
                    >
                        {icon("plus")}
                        {move || if vm.submitting.get() { "Adding..." } else { "Add" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
