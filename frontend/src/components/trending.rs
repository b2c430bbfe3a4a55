//! 首页 Trending Products 区块
//!
//! 横向轮播展示商品列表，附 featured / cheapest / name
//! 三个快捷排序标签；选中标签会就地重排存储的列表。

use crate::api::use_api;
use crate::components::icons::{ChevronLeft, ChevronRight};
use crate::components::plant_card::PlantCard;
use crate::session::use_session;
use crate::stores::{fetch_inventory, update_sort_method, use_inventory};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 快捷排序标签，顺序即展示顺序
const QUICK_SORTS: [&str; 3] = ["featured", "cheapest", "name"];

/// 单张卡片占用的横向像素（含间距），用于轮播位移
const CARD_STRIDE: f64 = 256.0;

#[component]
pub fn TrendingProductsBlock() -> impl IntoView {
    let inventory = use_inventory();
    let session = use_session();
    let api = use_api();

    // 挂载时拉取一次商品列表
    spawn_local(async move {
        fetch_inventory(inventory, &api, session).await;
    });

    let (scroll_index, set_scroll_index) = signal(0usize);

    let items = Signal::derive(move || inventory.state.get().inventory);
    let is_loading = Signal::derive(move || inventory.state.get().is_loading);
    let error = Signal::derive(move || inventory.state.get().error);
    let active_sort = Signal::derive(move || inventory.state.get().sort_method);

    let scroll_prev = move |_| {
        set_scroll_index.update(|index| *index = index.saturating_sub(1));
    };
    let scroll_next = move |_| {
        let last = items.get_untracked().len().saturating_sub(1);
        set_scroll_index.update(|index| *index = (*index + 1).min(last));
    };

    let track_style = move || {
        format!(
            "transform: translateX(-{}px); transition: transform 0.3s ease;",
            scroll_index.get() as f64 * CARD_STRIDE
        )
    };

    view! {
        <section class="trending-products py-10 px-4 max-w-7xl mx-auto">
            <div class="flex items-center justify-between flex-wrap gap-4">
                <h2 class="trending-products__title text-3xl font-bold">"Trending Products"</h2>
                <ul class="trending-products__sorting-bar flex gap-2">
                    {QUICK_SORTS
                        .into_iter()
                        .map(|label| {
                            view! {
                                <li class="trending-products__sorting-bar__item">
                                    <button
                                        class="btn btn-sm"
                                        class=("btn-primary", move || active_sort.get() == label)
                                        on:click=move |_| update_sort_method(inventory, label)
                                    >
                                        {label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error mt-4">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || is_loading.get() && items.get().is_empty()>
                <div class="flex justify-center py-12">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            <div class="relative mt-6">
                <div class="overflow-hidden">
                    <div class="flex gap-4" style=track_style>
                        <For
                            each=move || items.get()
                            key=|plant| plant.id.clone()
                            children=move |plant| view! { <PlantCard plant=plant /> }
                        />
                    </div>
                </div>
                <button
                    class="btn btn-circle btn-sm absolute left-0 top-1/2 -translate-y-1/2 shadow"
                    on:click=scroll_prev
                >
                    <ChevronLeft attr:class="h-4 w-4" />
                </button>
                <button
                    class="btn btn-circle btn-sm absolute right-0 top-1/2 -translate-y-1/2 shadow"
                    on:click=scroll_next
                >
                    <ChevronRight attr:class="h-4 w-4" />
                </button>
            </div>
        </section>
    }
}
