//! LocalStorage 封装模块
//!
//! 对浏览器 LocalStorage 的轻量封装，以及会话凭证的
//! [`TokenStore`] 持久化实现。

use plantarium_shared::session::{TokenPair, TokenStore};
use plantarium_shared::{STORAGE_KEY_ACCESS, STORAGE_KEY_REFRESH};

/// 本地存储操作封装
pub struct LocalStorage;

impl LocalStorage {
    /// 获取 LocalStorage 实例
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值；键不存在或出错时返回 None
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值，返回操作是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对，返回操作是否成功
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// 基于 LocalStorage 的凭证持久化
///
/// 键名固定为 `access` / `refresh`，写入均为整值替换。
pub struct BrowserTokens;

impl TokenStore for BrowserTokens {
    fn load(&self) -> Option<TokenPair> {
        let access = LocalStorage::get(STORAGE_KEY_ACCESS)?;
        let refresh = LocalStorage::get(STORAGE_KEY_REFRESH)?;
        Some(TokenPair { access, refresh })
    }

    fn save(&self, tokens: &TokenPair) {
        LocalStorage::set(STORAGE_KEY_ACCESS, &tokens.access);
        LocalStorage::set(STORAGE_KEY_REFRESH, &tokens.refresh);
    }

    fn save_access(&self, access: &str) {
        LocalStorage::set(STORAGE_KEY_ACCESS, access);
    }

    fn clear(&self) {
        LocalStorage::delete(STORAGE_KEY_ACCESS);
        LocalStorage::delete(STORAGE_KEY_REFRESH);
    }
}
