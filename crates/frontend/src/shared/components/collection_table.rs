//! Page frame shared by every collection list: header, refresh, error banner, table

use crate::shared::collection::CollectionResource;
use crate::shared::icons::icon;
use contracts::domain::common::RestCollection;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub title: &'static str,
    pub numeric: bool,
}

impl Column {
    pub const fn text(title: &'static str) -> Self {
        Self {
            title,
            numeric: false,
        }
    }

    pub const fn number(title: &'static str) -> Self {
        Self {
            title,
            numeric: true,
        }
    }

    fn cell_class(&self) -> &'static str {
        if self.numeric {
            "table__cell table__cell--number"
        } else {
            "table__cell"
        }
    }
}

/// The table body as text, one inner list per record
pub fn table_cells<T>(items: Vec<T>, cells: fn(T) -> Vec<String>) -> Vec<Vec<String>> {
    items.into_iter().map(cells).collect()
}

/// `cells` yields one string per entry of `columns`, in the same order
#[component]
#[allow(non_snake_case)]
pub fn CollectionTable<T>(
    resource: CollectionResource<T>,
    icon_name: &'static str,
    columns: &'static [Column],
    cells: fn(T) -> Vec<String>,
) -> impl IntoView
where
    T: RestCollection + Send + Sync,
{
    let items = resource.items;
    let error = resource.error;
    let loading = resource.loading;
    let reload = resource.clone();

    view! {
        <div class=format!("page {}", T::collection_name())>
            <div class="header">
                <div class="header__content">
                    {icon(icon_name)}
                    <h1 class="header__title">{T::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| reload.load()
                        disabled=move || loading.get()
                    >
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns.iter().map(|c| view! {
                                <th class="table__header-cell">{c.title}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || table_cells(items.get(), cells).into_iter().map(|row| {
                            view! {
                                <tr class="table__row">
                                    {row.into_iter().zip(columns.iter()).map(|(value, column)| view! {
                                        <td class=column.cell_class()>{value}</td>
                                    }).collect_view()}
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
