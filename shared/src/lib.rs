//! Plantarium 共享领域层
//!
//! 存放前端与远程 API 之间的领域模型与纯逻辑：
//! - `catalog`: 商品过滤/排序引擎
//! - `session`: 凭证生命周期状态机
//! - `date`: 时间解析与展示辅助
//!
//! 本 crate 不依赖 DOM / wasm，单元测试可在原生环境直接运行。

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod date;
pub mod session;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中访问凭证的键名
pub const STORAGE_KEY_ACCESS: &str = "access";
/// LocalStorage 中刷新凭证的键名
pub const STORAGE_KEY_REFRESH: &str = "refresh";
/// 认证请求头名称
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 商品（植物）条目
///
/// 由 `GET inventory` 返回，取回后不可变；
/// 排序只改变集合顺序，不修改字段。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub discount_percentage: u32,
    /// 折后价，由服务端派生；无折扣时为 null
    pub discounted_price: Option<f64>,
    pub stock_count: u32,
    pub in_stock: bool,
    pub rating: f64,
    pub image: String,
}

impl Plant {
    /// 是否有折扣（折扣百分比 > 0）
    pub fn on_discount(&self) -> bool {
        self.discount_percentage > 0
    }
}

/// 用户概要，嵌套在反馈条目中
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub name: String,
    pub date_joined: String,
    pub is_superuser: bool,
}

/// 顾客反馈条目，由 `GET feedback` 批量返回，只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub user: UserSummary,
    pub content: String,
    pub rating: u8,
    pub added_at: String,
    /// 当前查看者是否为作者
    pub is_current_user: bool,
}

// =========================================================
// 认证请求/响应体 (Auth Payloads)
// =========================================================

/// `POST user/signup/` 请求体
///
/// password1/password2 均取自表单中同一个密码字段。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password1: String,
    pub password2: String,
}

impl SignupRequest {
    pub fn new(email: String, name: String, password: String) -> Self {
        Self {
            email,
            name,
            password1: password.clone(),
            password2: password,
        }
    }
}

/// `POST user/login/` 请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST user/login/` 成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
}

/// `POST user/refresh/` 请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// `POST user/refresh/` 成功响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
}

/// 服务端校验失败时的结构化错误响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub errors: Vec<String>,
}
