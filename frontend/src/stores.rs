//! 集合状态容器
//!
//! 商品与反馈两个列表共用同一套取数约定：
//! 置 loading、清旧错误、发请求；成功整体替换集合，
//! 失败写入错误并保留已有内容；无论结果如何清掉 loading。

use crate::api::StorefrontApi;
use crate::session::SessionContext;
use leptos::prelude::*;
use plantarium_shared::catalog::{self, CatalogFilter};
use plantarium_shared::{Feedback, Plant};

/// 商品列表取数失败的兜底文案
pub const INVENTORY_FAILED: &str = "Failed to load inventory.";
/// 反馈列表取数失败的兜底文案
pub const FEEDBACKS_FAILED: &str = "Failed to load feedbacks.";

/// 传输错误自带文本时优先展示，空文本退回兜底文案
fn fetch_error_text(message: String, fallback: &str) -> String {
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

// =========================================================
// 商品列表 (Inventory)
// =========================================================

/// 商品列表状态
#[derive(Clone)]
pub struct InventoryState {
    pub inventory: Vec<Plant>,
    /// 首页快捷排序的当前标签；初始值 "rating" 不命中任何排序
    pub sort_method: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub filter: CatalogFilter,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self {
            inventory: Vec::new(),
            sort_method: "rating".to_string(),
            is_loading: false,
            error: None,
            filter: CatalogFilter::default(),
        }
    }
}

impl InventoryState {
    /// 过滤后的商品视图
    pub fn filtered(&self) -> Vec<Plant> {
        catalog::filtered(&self.inventory, &self.filter)
    }

    /// 按目录页排序标签过滤并排序后的视图
    pub fn sorted_filtered(&self, sort_label: &str) -> Vec<Plant> {
        catalog::catalog_view(&self.inventory, &self.filter, sort_label)
    }
}

/// 商品列表上下文
#[derive(Clone, Copy)]
pub struct InventoryContext {
    pub state: ReadSignal<InventoryState>,
    pub set_state: WriteSignal<InventoryState>,
}

impl InventoryContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(InventoryState::default());
        Self { state, set_state }
    }
}

impl Default for InventoryContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_inventory() -> InventoryContext {
    use_context::<InventoryContext>().expect("InventoryContext should be provided")
}

/// 拉取商品列表（整体替换）
pub async fn fetch_inventory(ctx: InventoryContext, api: &StorefrontApi, session: SessionContext) {
    ctx.set_state.update(|state| {
        state.is_loading = true;
        state.error = None;
    });

    let result = api.get_inventory(session.bearer().as_deref()).await;

    ctx.set_state.update(|state| {
        match result {
            Ok(inventory) => state.inventory = inventory,
            Err(error) => {
                state.error = Some(fetch_error_text(error.to_string(), INVENTORY_FAILED));
            }
        }
        state.is_loading = false;
    });
}

/// 更新首页快捷排序标签并就地重排已存储的列表
pub fn update_sort_method(ctx: InventoryContext, sort_method: &str) {
    ctx.set_state.update(|state| {
        state.sort_method = sort_method.to_string();
        catalog::quick_sort_in_place(&mut state.inventory, sort_method);
    });
}

/// 重置所有过滤条件到默认值
pub fn reset_filters(ctx: InventoryContext) {
    ctx.set_state.update(|state| state.filter.reset());
}

// =========================================================
// 反馈列表 (Feedback)
// =========================================================

/// 反馈列表状态
#[derive(Clone, Default)]
pub struct FeedbackState {
    pub feedbacks: Vec<Feedback>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// 反馈列表上下文
#[derive(Clone, Copy)]
pub struct FeedbackContext {
    pub state: ReadSignal<FeedbackState>,
    pub set_state: WriteSignal<FeedbackState>,
}

impl FeedbackContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(FeedbackState::default());
        Self { state, set_state }
    }
}

impl Default for FeedbackContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_feedbacks() -> FeedbackContext {
    use_context::<FeedbackContext>().expect("FeedbackContext should be provided")
}

/// 拉取反馈列表（整体替换）
pub async fn fetch_feedbacks(ctx: FeedbackContext, api: &StorefrontApi, session: SessionContext) {
    ctx.set_state.update(|state| {
        state.is_loading = true;
        state.error = None;
    });

    let result = api.get_feedbacks(session.bearer().as_deref()).await;

    ctx.set_state.update(|state| {
        match result {
            Ok(feedbacks) => state.feedbacks = feedbacks,
            Err(error) => {
                state.error = Some(fetch_error_text(error.to_string(), FEEDBACKS_FAILED));
            }
        }
        state.is_loading = false;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_is_shown_when_present() {
        assert_eq!(
            fetch_error_text("HTTP 500".to_string(), INVENTORY_FAILED),
            "HTTP 500"
        );
    }

    #[test]
    fn empty_transport_message_falls_back_to_fixed_text() {
        // An error carrying no message must never surface as an empty string
        assert_eq!(
            fetch_error_text(String::new(), INVENTORY_FAILED),
            INVENTORY_FAILED
        );
        assert_eq!(
            fetch_error_text(String::new(), FEEDBACKS_FAILED),
            FEEDBACKS_FAILED
        );
    }
}
