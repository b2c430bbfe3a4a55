//! 顶部导航栏

use crate::components::icons::{Leaf, LogOut, ShoppingBag};
use crate::session::{logout, use_session};
use crate::web::router::use_navigate;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let to_home = use_navigate();
    let to_catalog = use_navigate();
    let to_login = use_navigate();

    let is_authenticated = session.is_authenticated_signal();

    view! {
        <div class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1 gap-2">
                <a class="btn btn-ghost text-xl gap-2" on:click=move |_| to_home("/")>
                    <Leaf attr:class="h-6 w-6 text-primary" />
                    "Plantarium"
                </a>
                <a class="btn btn-ghost gap-2" on:click=move |_| to_catalog("/catalog")>
                    <ShoppingBag attr:class="h-4 w-4" />
                    "Catalog"
                </a>
            </div>
            <div class="flex-none">
                <Show
                    when=move || is_authenticated.get()
                    fallback=move || {
                        let to_login = to_login.clone();
                        view! {
                            <a class="btn btn-primary btn-outline" on:click=move |_| to_login("/auth/login")>
                                "Log in"
                            </a>
                        }
                    }
                >
                    <button
                        class="btn btn-ghost gap-2"
                        on:click=move |_| logout(&session)
                    >
                        <LogOut attr:class="h-4 w-4" />
                        "Log out"
                    </button>
                </Show>
            </div>
        </div>
    }
}
