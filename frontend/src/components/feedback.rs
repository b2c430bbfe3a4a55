//! 首页顾客反馈轮播
//!
//! 列表复制一份拼接成双倍轨道实现无缝循环；
//! 由周期定时器推进偏移量，指针悬停时暂停。

use crate::api::use_api;
use crate::components::feedback_card::FeedbackCard;
use crate::session::use_session;
use crate::stores::{fetch_feedbacks, use_feedbacks};
use crate::web::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use plantarium_shared::Feedback;

/// 单张反馈卡片占用的横向像素（含间距）
const CARD_STRIDE: f64 = 336.0;
/// 定时器间隔（毫秒）
const TICK_MILLIS: u32 = 30;
/// 每次 tick 的位移（像素）
const TICK_STEP: f64 = 0.5;

#[component]
pub fn FeedbackBlock() -> impl IntoView {
    let feedbacks = use_feedbacks();
    let session = use_session();
    let api = use_api();

    // 挂载时拉取一次反馈列表
    spawn_local(async move {
        fetch_feedbacks(feedbacks, &api, session).await;
    });

    let items = Signal::derive(move || feedbacks.state.get().feedbacks);
    let is_loading = Signal::derive(move || feedbacks.state.get().is_loading);
    let error = Signal::derive(move || feedbacks.state.get().error);
    let is_empty = Signal::derive(move || items.get().is_empty());

    // 轨道 = 列表 + 复制，偏移到半程时归零即无缝回绕
    let duplicated = Signal::derive(move || {
        let list = items.get();
        let mut track: Vec<Feedback> = list.clone();
        track.extend(list);
        track
    });

    let (offset, set_offset) = signal(0.0f64);
    let (paused, set_paused) = signal(false);

    let interval = Interval::new(TICK_MILLIS, move || {
        if paused.try_get_untracked().unwrap_or(true) {
            return;
        }
        let half_track = items.try_get_untracked().map(|list| list.len()).unwrap_or(0) as f64
            * CARD_STRIDE;
        let _ = set_offset.try_update(|value| {
            *value += TICK_STEP;
            if half_track > 0.0 && *value >= half_track {
                *value = 0.0;
            }
        });
    });
    // 组件卸载时随 owner 一起清理定时器
    let _held = StoredValue::new_local(interval);

    let track_style = move || format!("transform: translateX(-{}px);", offset.get());

    view! {
        <section class="feedback py-10 px-4 max-w-7xl mx-auto">
            <h2 class="text-3xl font-bold">"What our customers say"</h2>

            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error mt-4">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show when=move || is_loading.get() && is_empty.get()>
                <div class="flex justify-center py-12">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>

            <Show when=move || !is_loading.get() && is_empty.get() && error.get().is_none()>
                <p class="text-base-content/60 py-12 text-center">"No feedbacks available"</p>
            </Show>

            <Show when=move || !is_empty.get()>
                <div
                    class="feedback__list overflow-hidden mt-6"
                    on:mouseenter=move |_| set_paused.set(true)
                    on:mouseleave=move |_| set_paused.set(false)
                >
                    <div class="flex gap-4 w-max" style=track_style>
                        <For
                            each=move || duplicated.get().into_iter().enumerate()
                            key=|(index, feedback)| (*index, feedback.id.clone())
                            children=move |(_, feedback)| view! { <FeedbackCard feedback=feedback /> }
                        />
                    </div>
                </div>
            </Show>
        </section>
    }
}
