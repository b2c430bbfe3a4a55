//! 价格区间过滤控件
//!
//! 双滑块 + 两个数字输入框，同步到商品列表上下文的过滤状态。
//! 编辑策略是双重的，必须完整保留：
//! - 输入过程中（input 事件）：违反 min <= max 的值被拒绝，
//!   控件回退到上一次接受的值；
//! - 失焦提交（blur 事件）：非法的待定值被钳制到最近的合法边界。

use crate::stores::{reset_filters, use_inventory};
use leptos::prelude::*;
use leptos::web_sys::HtmlInputElement;
use plantarium_shared::catalog::{PRICE_CEIL, PRICE_FLOOR};

/// 从输入事件中取出元素，便于拒绝后回写显示值
fn input_element(ev: &leptos::web_sys::Event) -> HtmlInputElement {
    event_target::<HtmlInputElement>(ev)
}

#[component]
pub fn PriceFilter() -> impl IntoView {
    let inventory = use_inventory();

    let min_value = Signal::derive(move || inventory.state.get().filter.price.min());
    let max_value = Signal::derive(move || inventory.state.get().filter.price.max());

    // 实时编辑：拒绝越界提议并回退控件显示
    let on_min_input = move |ev: leptos::web_sys::Event| {
        let element = input_element(&ev);
        let accepted = element
            .value()
            .parse::<f64>()
            .ok()
            .map(|proposal| {
                let mut accepted = false;
                inventory.set_state.update(|state| {
                    accepted = state.filter.price.try_set_min(proposal);
                });
                accepted
            })
            .unwrap_or(false);

        if !accepted {
            element.set_value(&format_price(min_value.get_untracked()));
        }
    };

    let on_max_input = move |ev: leptos::web_sys::Event| {
        let element = input_element(&ev);
        let accepted = element
            .value()
            .parse::<f64>()
            .ok()
            .map(|proposal| {
                let mut accepted = false;
                inventory.set_state.update(|state| {
                    accepted = state.filter.price.try_set_max(proposal);
                });
                accepted
            })
            .unwrap_or(false);

        if !accepted {
            element.set_value(&format_price(max_value.get_untracked()));
        }
    };

    // 失焦提交：钳制到最近的合法边界
    let on_min_blur = move |ev: leptos::web_sys::FocusEvent| {
        let element = input_element(&ev);
        let pending = element
            .value()
            .parse::<f64>()
            .unwrap_or_else(|_| min_value.get_untracked());
        let mut committed = pending;
        inventory.set_state.update(|state| {
            committed = state.filter.price.commit_min(pending);
        });
        element.set_value(&format_price(committed));
    };

    let on_max_blur = move |ev: leptos::web_sys::FocusEvent| {
        let element = input_element(&ev);
        let pending = element
            .value()
            .parse::<f64>()
            .unwrap_or_else(|_| max_value.get_untracked());
        let mut committed = pending;
        inventory.set_state.update(|state| {
            committed = state.filter.price.commit_max(pending);
        });
        element.set_value(&format_price(committed));
    };

    // 高亮区间条的位置，按滑块量程折算百分比
    let highlight_style = move || {
        let left = min_value.get() / PRICE_CEIL * 100.0;
        let right = 100.0 - max_value.get() / PRICE_CEIL * 100.0;
        format!("left: {left}%; right: {right}%;")
    };

    view! {
        <div class="space-y-3">
            <div class="flex items-center justify-between">
                <span class="font-semibold">"Price"</span>
                <button class="btn btn-ghost btn-xs" on:click=move |_| reset_filters(inventory)>
                    "Reset"
                </button>
            </div>

            <div class="relative h-8">
                <div class="absolute top-1/2 h-1 w-full bg-base-300 rounded"></div>
                <div class="highlighted-range absolute top-1/2 h-1 bg-primary rounded" style=highlight_style></div>
                <input
                    id="minRange"
                    type="range"
                    min=PRICE_FLOOR
                    max=PRICE_CEIL
                    prop:value=move || format_price(min_value.get())
                    on:input=on_min_input
                    class="range range-primary range-xs absolute w-full"
                />
                <input
                    id="maxRange"
                    type="range"
                    min=PRICE_FLOOR
                    max=PRICE_CEIL
                    prop:value=move || format_price(max_value.get())
                    on:input=on_max_input
                    class="range range-primary range-xs absolute w-full"
                />
            </div>

            <div class="flex items-center gap-2">
                <label class="form-control flex-1">
                    <span class="label-text text-xs">"Min"</span>
                    <input
                        id="min-price"
                        type="number"
                        prop:value=move || format_price(min_value.get())
                        on:input=on_min_input
                        on:blur=on_min_blur
                        class="input input-bordered input-sm w-full"
                    />
                </label>
                <span class="mt-4">"–"</span>
                <label class="form-control flex-1">
                    <span class="label-text text-xs">"Max"</span>
                    <input
                        id="max-price"
                        type="number"
                        prop:value=move || format_price(max_value.get())
                        on:input=on_max_input
                        on:blur=on_max_blur
                        class="input input-bordered input-sm w-full"
                    />
                </label>
            </div>
        </div>
    }
}

/// 整数值不带小数位展示
fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
