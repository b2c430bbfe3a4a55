use crate::api::use_api;
use crate::components::icons::Leaf;
use crate::session::{login, use_session};
use crate::web::router::use_navigate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use plantarium_shared::LoginRequest;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let navigate = use_navigate();
    let to_signup = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (local_error, set_local_error) = signal(Option::<String>::None);

    let errors = Signal::derive(move || session.state.get().errors);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_local_error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_local_error.set(None);

        let navigate = navigate.clone();
        let api = api.clone();
        spawn_local(async move {
            let payload = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            login(session, &api, payload).await;

            // 成功登录后离开认证页；失败时错误列表会展示在表单上
            if session.state.get_untracked().errors.is_empty() {
                navigate("/");
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Leaf attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"Welcome back"</h1>
                        <p class="text-base-content/70">"Log in to continue to Plantarium"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || local_error.get().is_some()>
                            <div role="alert" class="alert alert-warning text-sm py-2">
                                <span>{move || local_error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>
                        <Show when=move || !errors.get().is_empty()>
                            <ul class="form-errors alert alert-error text-sm py-2 list-none">
                                <For
                                    each=move || errors.get()
                                    key=|error| error.clone()
                                    children=move |error| view! { <li>{error}</li> }
                                />
                            </ul>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Logging in..." }.into_any()
                                } else {
                                    "Log in".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-sm text-center mt-2">
                            "No account yet? "
                            <a
                                class="link link-primary"
                                on:click=move |_| to_signup("/auth/signup")
                            >
                                "Sign up"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
