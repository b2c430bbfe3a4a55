//! 反馈卡片组件

use crate::components::icons::UserRound;
use crate::components::plant_card::StarRating;
use leptos::prelude::*;
use plantarium_shared::{Feedback, date};

#[component]
pub fn FeedbackCard(feedback: Feedback) -> impl IntoView {
    let is_author = feedback.is_current_user;

    view! {
        <div class="card bg-base-100 shadow-md w-80 shrink-0">
            <div class="card-body p-5 gap-3">
                <div class="flex items-center gap-3">
                    <div class="p-2 bg-primary/10 rounded-full text-primary">
                        <UserRound attr:class="h-5 w-5" />
                    </div>
                    <div class="flex-1 min-w-0">
                        <div class="flex items-center gap-2">
                            <span class="font-semibold truncate">{feedback.user.name.clone()}</span>
                            <Show when=move || is_author>
                                <span class="badge badge-primary badge-sm">"You"</span>
                            </Show>
                        </div>
                        <p class="text-xs text-base-content/60">
                            "Member since " {date::month_year(&feedback.user.date_joined)}
                        </p>
                    </div>
                    <StarRating rating={feedback.rating as f64} />
                </div>
                <p class="text-sm text-base-content/80">{feedback.content.clone()}</p>
                <p class="text-xs text-base-content/50 text-right">
                    {date::short_date(&feedback.added_at)}
                </p>
            </div>
        </div>
    }
}
