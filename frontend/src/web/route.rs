//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义店面应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 商品目录页
    Catalog,
    /// 登录页
    Login,
    /// 注册页
    Signup,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/catalog" => Self::Catalog,
            // 访问 /auth 时默认进入登录页
            "/auth" | "/auth/login" => Self::Login,
            "/auth/signup" => Self::Signup,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Catalog => "/catalog",
            Self::Login => "/auth/login",
            Self::Signup => "/auth/signup",
            Self::NotFound => "/404",
        }
    }

    /// 已认证用户是否应该离开此路由（登录/注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    /// 已认证用户访问认证页时的重定向目标
    pub fn auth_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/catalog"), AppRoute::Catalog);
        assert_eq!(AppRoute::from_path("/auth"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/auth/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/auth/signup"), AppRoute::Signup);
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn auth_pages_redirect_authenticated_users() {
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(AppRoute::Signup.should_redirect_when_authenticated());
        assert!(!AppRoute::Home.should_redirect_when_authenticated());
        assert!(!AppRoute::Catalog.should_redirect_when_authenticated());
        assert_eq!(AppRoute::auth_redirect(), AppRoute::Home);
    }

    #[test]
    fn round_trips_through_paths() {
        for route in [AppRoute::Home, AppRoute::Catalog, AppRoute::Login, AppRoute::Signup] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }
}
