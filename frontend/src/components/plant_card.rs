//! 商品卡片组件

use crate::api::image_url;
use crate::components::icons::Star;
use leptos::prelude::*;
use plantarium_shared::Plant;

/// 星级展示，满分 5 星
#[component]
pub fn StarRating(rating: f64) -> impl IntoView {
    view! {
        <div class="flex text-warning" title=format!("{rating:.1} / 5")>
            {(1..=5)
                .map(|step| {
                    let filled = rating >= step as f64 - 0.5;
                    view! { <Star filled=filled attr:class="h-4 w-4" /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn PlantCard(plant: Plant) -> impl IntoView {
    let Plant {
        name,
        description,
        price,
        discount_percentage,
        discounted_price,
        in_stock,
        rating,
        image,
        ..
    } = plant;

    let on_discount = discount_percentage > 0;
    let final_price = discounted_price.unwrap_or(price);

    view! {
        <div class="card bg-base-100 shadow-md w-60 shrink-0">
            <figure class="relative h-40 bg-base-200">
                <img src=image_url(&image) alt=name.clone() class="object-cover h-full w-full" />
                <Show when=move || on_discount>
                    <span class="badge badge-secondary absolute top-2 left-2">
                        {format!("-{discount_percentage}%")}
                    </span>
                </Show>
                <Show when=move || !in_stock>
                    <span class="badge badge-neutral absolute top-2 right-2">"Out of stock"</span>
                </Show>
            </figure>
            <div class="card-body p-4">
                <h3 class="card-title text-base">{name}</h3>
                <p class="text-sm text-base-content/70 line-clamp-2">{description}</p>
                <StarRating rating=rating />
                <div class="flex items-baseline gap-2 mt-1">
                    {if on_discount {
                        view! {
                            <span class="line-through text-sm text-base-content/50">
                                {format!("${price:.2}")}
                            </span>
                            <span class="text-lg font-bold text-primary">
                                {format!("${final_price:.2}")}
                            </span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <span class="text-lg font-bold">{format!("${price:.2}")}</span>
                        }
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
