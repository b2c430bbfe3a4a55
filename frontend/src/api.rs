//! 远程 API 客户端
//!
//! 店面后端是外部协作方（JSON over HTTP）。此客户端只负责
//! 拼装请求与区分两类失败：
//! - 服务端返回的结构化校验错误（`{"errors": [...]}`），原样上抛；
//! - 其余传输/意外错误，折叠为一条文本。
//!
//! 认证头不走全局默认值：需要凭证的调用在发起时显式传入
//! 当前的 Bearer 值。

use crate::web::HttpClient;
use crate::web::http::HttpResponse;
use plantarium_shared::{
    ApiErrorBody, Feedback, LoginRequest, LoginResponse, Plant, RefreshRequest, RefreshResponse,
    SignupRequest,
};

/// 默认 API 基地址
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api/v1";
/// 商品图片的基地址（后端以相对路径返回图片）
pub const DEFAULT_IMAGE_BASE: &str = "http://127.0.0.1:8000";

/// API 调用错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 服务端结构化校验错误，逐条展示给用户
    Validation(Vec<String>),
    /// 传输层或意外错误
    Transport(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Validation(errors) => write!(f, "{}", errors.join("; ")),
            ApiError::Transport(msg) => write!(f, "{}", msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontApi {
    base_url: String,
}

/// 从 Context 获取 API 客户端；未提供时退回默认基地址
pub fn use_api() -> StorefrontApi {
    leptos::prelude::use_context::<StorefrontApi>().unwrap_or_default()
}

impl Default for StorefrontApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE.to_string())
    }
}

impl StorefrontApi {
    pub fn new(base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 从非 2xx 响应中提取错误
    async fn extract_error(response: HttpResponse) -> ApiError {
        let status = response.status();
        match response.text().await {
            Ok(body) => match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) if !parsed.errors.is_empty() => ApiError::Validation(parsed.errors),
                _ => ApiError::Transport(format!("HTTP {}", status)),
            },
            Err(_) => ApiError::Transport(format!("HTTP {}", status)),
        }
    }

    /// 获取商品列表
    pub async fn get_inventory(&self, bearer: Option<&str>) -> Result<Vec<Plant>, ApiError> {
        let mut request = HttpClient::get(&self.url("inventory"));
        if let Some(bearer) = bearer {
            request = request.bearer(bearer);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(Self::extract_error(response).await);
        }

        response
            .json::<Vec<Plant>>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// 获取反馈列表
    pub async fn get_feedbacks(&self, bearer: Option<&str>) -> Result<Vec<Feedback>, ApiError> {
        let mut request = HttpClient::get(&self.url("feedback"));
        if let Some(bearer) = bearer {
            request = request.bearer(bearer);
        }
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(Self::extract_error(response).await);
        }

        response
            .json::<Vec<Feedback>>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// 注册新用户；成功时响应体被丢弃，不做自动登录
    pub async fn signup(&self, payload: &SignupRequest) -> Result<(), ApiError> {
        let response = HttpClient::post(&self.url("user/signup/"))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(Self::extract_error(response).await);
        }

        Ok(())
    }

    /// 登录，成功返回 access + refresh 凭证对
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = HttpClient::post(&self.url("user/login/"))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(Self::extract_error(response).await);
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }

    /// 用刷新凭证换取新的访问凭证
    pub async fn refresh(&self, payload: &RefreshRequest) -> Result<RefreshResponse, ApiError> {
        let response = HttpClient::post(&self.url("user/refresh/"))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(Self::extract_error(response).await);
        }

        response
            .json::<RefreshResponse>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

/// 解析商品图片地址：绝对 URL 原样返回，相对路径拼上图片基地址
pub fn image_url(image: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        image.to_string()
    } else {
        format!("{}/{}", DEFAULT_IMAGE_BASE, image.trim_start_matches('/'))
    }
}
