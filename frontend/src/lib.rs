//! Plantarium 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由定义与路由服务
//! - `session`: 认证会话状态管理
//! - `stores`: 商品与反馈集合状态
//! - `components`: UI 组件层

mod api;
mod components {
    pub mod catalog;
    pub mod feedback;
    mod feedback_card;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod navbar;
    mod plant_card;
    mod price_filter;
    pub mod signup;
    mod trending;
}
mod session;
mod stores;

use crate::components::catalog::CatalogPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::signup::SignupPage;
use crate::session::{SessionContext, init_session};
use crate::stores::{FeedbackContext, InventoryContext};

use leptos::prelude::*;

// 原生 Web API 封装模块
// 对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod http;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::HttpClient;
    pub use storage::BrowserTokens;
    pub use timer::Interval;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Catalog => view! { <CatalogPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建共享上下文
    let session_ctx = SessionContext::new();
    provide_context(session_ctx);
    provide_context(InventoryContext::new());
    provide_context(FeedbackContext::new());

    // 2. 启动时从 LocalStorage 恢复会话（乐观，无服务端校验）
    init_session(&session_ctx);

    // 3. 认证状态信号注入路由服务，实现解耦
    let is_authenticated = session_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <Navbar />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
