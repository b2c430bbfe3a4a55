//! 会话状态管理
//!
//! 管理认证会话的响应式状态，与路由系统解耦：
//! 路由服务通过注入的认证信号检查状态。
//! 纯转换逻辑在 `plantarium_shared::session`，此处只做
//! 信号更新、远程调用与错误文案。

use crate::api::{ApiError, StorefrontApi};
use crate::web::BrowserTokens;
use leptos::prelude::*;
use plantarium_shared::session::Session;
use plantarium_shared::{LoginRequest, RefreshRequest, SignupRequest};

/// 注册失败时的兜底文案
pub const SIGNUP_FAILED: &str = "Something went wrong during signup.";
/// 登录失败时的兜底文案
pub const LOGIN_FAILED: &str = "Something went wrong during login.";

/// 会话状态
#[derive(Clone, Default)]
pub struct SessionState {
    /// 凭证状态机
    pub session: Session,
    /// 是否有认证请求进行中
    pub is_loading: bool,
    /// 最近一次 signup/login 的错误列表
    pub errors: Vec<String>,
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().session.is_authenticated())
    }

    /// 发起请求时读取当前的 `Authorization` 头值
    ///
    /// 在调用时刻读取，不维护任何全局默认头。
    pub fn bearer(&self) -> Option<String> {
        self.state.get_untracked().session.bearer()
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 启动时从 LocalStorage 恢复会话
///
/// 只要两个凭证都在就乐观地视为已认证，不做服务端校验；
/// 过期凭证由首个失败请求后的刷新流程处理。
pub fn init_session(ctx: &SessionContext) {
    let session = Session::restore(&BrowserTokens);
    if session.is_authenticated() {
        web_sys::console::log_1(&"[Session] Restored credentials from storage.".into());
    }
    ctx.set_state.update(|state| {
        state.session = session;
        state.is_loading = false;
    });
}

/// 将 API 错误映射为展示用的错误列表
fn surface_errors(error: ApiError, fallback: &str) -> Vec<String> {
    match error {
        ApiError::Validation(errors) => errors,
        ApiError::Transport(_) => vec![fallback.to_string()],
    }
}

/// 注册新用户
///
/// 成功后会话保持未认证（不自动登录），由表单导航到登录页。
pub async fn signup(ctx: SessionContext, api: &StorefrontApi, payload: SignupRequest) {
    ctx.set_state.update(|state| {
        state.is_loading = true;
        state.errors.clear();
    });

    let result = api.signup(&payload).await;

    ctx.set_state.update(|state| {
        if let Err(error) = result {
            state.errors = surface_errors(error, SIGNUP_FAILED);
        }
        state.is_loading = false;
    });
}

/// 登录
///
/// 成功时成对保存 access/refresh 凭证（内存 + LocalStorage）；
/// 失败时展示服务端错误或兜底文案，会话保持未认证。
pub async fn login(ctx: SessionContext, api: &StorefrontApi, payload: LoginRequest) {
    ctx.set_state.update(|state| {
        state.is_loading = true;
        state.errors.clear();
    });

    let result = api.login(&payload).await;

    ctx.set_state.update(|state| {
        match result {
            Ok(tokens) => {
                state.session.begin(
                    plantarium_shared::session::TokenPair {
                        access: tokens.access,
                        refresh: tokens.refresh,
                    },
                    &BrowserTokens,
                );
            }
            Err(error) => {
                state.errors = surface_errors(error, LOGIN_FAILED);
            }
        }
        state.is_loading = false;
    });
}

/// 刷新访问凭证
///
/// 任何失败（网络错误、凭证过期）都无条件登出，
/// 不重试也不向用户展示错误。
pub async fn refresh(ctx: SessionContext, api: &StorefrontApi) {
    let Some(refresh_token) = ctx.state.get_untracked().session.refresh_token().map(String::from)
    else {
        return;
    };

    let payload = RefreshRequest {
        refresh: refresh_token,
    };

    match api.refresh(&payload).await {
        Ok(renewed) => {
            ctx.set_state.update(|state| {
                state.session.renew(renewed.access, &BrowserTokens);
            });
        }
        Err(_) => {
            web_sys::console::log_1(&"[Session] Refresh failed, logging out.".into());
            logout(&ctx);
        }
    }
}

/// 登出：清空内存与持久化凭证
///
/// 幂等，已登出时调用安全。
pub fn logout(ctx: &SessionContext) {
    ctx.set_state.update(|state| {
        state.session.end(&BrowserTokens);
        state.errors.clear();
    });
}
