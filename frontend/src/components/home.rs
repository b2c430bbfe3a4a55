//! 首页

use crate::components::feedback::FeedbackBlock;
use crate::components::trending::TrendingProductsBlock;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <div class="hero bg-base-100 py-16">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <h1 class="text-5xl font-bold">"Bring your home to life"</h1>
                        <p class="py-6 text-base-content/70">
                            "Hand-picked plants, delivered to your door. Browse the catalog or see what's trending below."
                        </p>
                    </div>
                </div>
            </div>
            <TrendingProductsBlock />
            <FeedbackBlock />
        </div>
    }
}
