//! 商品目录页
//!
//! 左侧过滤栏（库存/折扣开关 + 价格区间），顶部排序下拉框，
//! 右侧商品网格。展示视图 = 先过滤再排序的副本。

use crate::api::use_api;
use crate::components::plant_card::PlantCard;
use crate::components::price_filter::PriceFilter;
use crate::session::use_session;
use crate::stores::{fetch_inventory, use_inventory};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 目录页排序下拉框的选项
const SORT_LABELS: [&str; 6] = [
    "Low to High",
    "High to Low",
    "Top Rated",
    "Lowest Rated",
    "A to Z",
    "Z to A",
];

#[component]
pub fn CatalogPage() -> impl IntoView {
    let inventory = use_inventory();
    let session = use_session();
    let api = use_api();

    // 挂载时拉取一次商品列表
    spawn_local(async move {
        fetch_inventory(inventory, &api, session).await;
    });

    // 下拉框未选择时为空串，不命中任何排序（过滤后原序展示）
    let (sort_label, set_sort_label) = signal(String::new());

    let is_loading = Signal::derive(move || inventory.state.get().is_loading);
    let error = Signal::derive(move || inventory.state.get().error);
    let in_stock = Signal::derive(move || inventory.state.get().filter.in_stock);
    let on_discount = Signal::derive(move || inventory.state.get().filter.on_discount);

    let view_items = Signal::derive(move || {
        let label = sort_label.get();
        inventory.state.get().sorted_filtered(&label)
    });

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-7xl mx-auto">
                <div class="flex items-center justify-between flex-wrap gap-4 mb-6">
                    <h1 class="text-3xl font-bold">"Catalog"</h1>
                    <select
                        class="select select-bordered w-48"
                        on:change=move |ev| set_sort_label.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || sort_label.get().is_empty()>
                            "Sort by"
                        </option>
                        {SORT_LABELS
                            .into_iter()
                            .map(|label| {
                                view! {
                                    <option value=label selected=move || sort_label.get() == label>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="flex flex-col lg:flex-row gap-6">
                    <aside class="card bg-base-100 shadow-md p-5 lg:w-64 shrink-0 h-fit space-y-4">
                        <h2 class="font-bold text-lg">"Filters"</h2>

                        <label class="label cursor-pointer justify-start gap-3">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-primary checkbox-sm"
                                prop:checked=in_stock
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    inventory.set_state.update(|state| state.filter.in_stock = checked);
                                }
                            />
                            <span class="label-text">"In stock only"</span>
                        </label>

                        <label class="label cursor-pointer justify-start gap-3">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-primary checkbox-sm"
                                prop:checked=on_discount
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    inventory.set_state.update(|state| state.filter.on_discount = checked);
                                }
                            />
                            <span class="label-text">"On discount"</span>
                        </label>

                        <div class="divider my-1"></div>
                        <PriceFilter />
                    </aside>

                    <main class="flex-1">
                        <Show when=move || error.get().is_some()>
                            <div role="alert" class="alert alert-error mb-4">
                                <span>{move || error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <Show when=move || is_loading.get() && view_items.get().is_empty()>
                            <div class="flex justify-center py-16">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        </Show>

                        <Show when=move || !is_loading.get() && view_items.get().is_empty() && error.get().is_none()>
                            <p class="text-center text-base-content/60 py-16">
                                "No plants match your filters."
                            </p>
                        </Show>

                        <div class="flex flex-wrap gap-4">
                            <For
                                each=move || view_items.get()
                                key=|plant| plant.id.clone()
                                children=move |plant| view! { <PlantCard plant=plant /> }
                            />
                        </div>
                    </main>
                </div>
            </div>
        </div>
    }
}
