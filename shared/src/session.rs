//! 凭证生命周期状态机
//!
//! 会话只有两个状态：匿名 (Anonymous) 与已认证 (Authenticated)。
//! 状态转换：
//! - 登录成功: Anonymous -> Authenticated
//! - 刷新成功: Authenticated -> Authenticated（仅替换访问凭证）
//! - 登出 / 刷新失败: -> Anonymous
//!
//! 持久化通过注入的 [`TokenStore`] 完成，测试中可替换为内存实现。
//! 不变量：两个凭证成对写入、成对清除，活跃会话中不会只存在其一。

use serde::{Deserialize, Serialize};

/// 访问凭证 + 刷新凭证对
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// 凭证的持久化接口
///
/// 浏览器端由 LocalStorage 实现；写入均为整字段替换。
pub trait TokenStore {
    /// 读取持久化的凭证对；任一缺失视为无会话
    fn load(&self) -> Option<TokenPair>;
    /// 成对写入两个凭证
    fn save(&self, tokens: &TokenPair);
    /// 仅替换访问凭证（刷新成功时）
    fn save_access(&self, access: &str);
    /// 清除两个凭证
    fn clear(&self);
}

/// 客户端会话
///
/// 进程内唯一持有；字段只通过下面的转换方法变更。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    access: Option<String>,
    refresh: Option<String>,
}

impl Session {
    /// 启动时从持久化存储恢复会话
    ///
    /// 两个凭证都存在才视为已认证（乐观恢复，不做服务端校验，
    /// 过期凭证会在首个请求失败时被刷新流程处理）。
    /// 只剩单个残留凭证时顺带清除，维持成对不变量。
    pub fn restore(store: &impl TokenStore) -> Self {
        match store.load() {
            Some(tokens) => Self {
                access: Some(tokens.access),
                refresh: Some(tokens.refresh),
            },
            None => {
                store.clear();
                Self::default()
            }
        }
    }

    /// 是否处于已认证状态
    pub fn is_authenticated(&self) -> bool {
        self.access.is_some()
    }

    pub fn access(&self) -> Option<&str> {
        self.access.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh.as_deref()
    }

    /// 在发起请求时派生 `Authorization` 头的值
    pub fn bearer(&self) -> Option<String> {
        self.access.as_ref().map(|access| format!("Bearer {access}"))
    }

    /// 登录成功：成对写入内存与持久化存储
    pub fn begin(&mut self, tokens: TokenPair, store: &impl TokenStore) {
        store.save(&tokens);
        self.access = Some(tokens.access);
        self.refresh = Some(tokens.refresh);
    }

    /// 刷新成功：仅替换访问凭证
    pub fn renew(&mut self, access: String, store: &impl TokenStore) {
        store.save_access(&access);
        self.access = Some(access);
    }

    /// 登出：清空内存字段并移除持久化凭证
    ///
    /// 幂等，已登出时调用无副作用差异。
    pub fn end(&mut self, store: &impl TokenStore) {
        self.access = None;
        self.refresh = None;
        store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{STORAGE_KEY_ACCESS, STORAGE_KEY_REFRESH};
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory stand-in for the browser LocalStorage
    struct MemoryTokens {
        entries: RefCell<HashMap<String, String>>,
    }

    impl MemoryTokens {
        fn new() -> Self {
            Self {
                entries: RefCell::new(HashMap::new()),
            }
        }

        fn with(pairs: &[(&str, &str)]) -> Self {
            let store = Self::new();
            for (key, value) in pairs {
                store
                    .entries
                    .borrow_mut()
                    .insert(key.to_string(), value.to_string());
            }
            store
        }

        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }
    }

    impl TokenStore for MemoryTokens {
        fn load(&self) -> Option<TokenPair> {
            let access = self.get(STORAGE_KEY_ACCESS)?;
            let refresh = self.get(STORAGE_KEY_REFRESH)?;
            Some(TokenPair { access, refresh })
        }

        fn save(&self, tokens: &TokenPair) {
            let mut entries = self.entries.borrow_mut();
            entries.insert(STORAGE_KEY_ACCESS.to_string(), tokens.access.clone());
            entries.insert(STORAGE_KEY_REFRESH.to_string(), tokens.refresh.clone());
        }

        fn save_access(&self, access: &str) {
            self.entries
                .borrow_mut()
                .insert(STORAGE_KEY_ACCESS.to_string(), access.to_string());
        }

        fn clear(&self) {
            let mut entries = self.entries.borrow_mut();
            entries.remove(STORAGE_KEY_ACCESS);
            entries.remove(STORAGE_KEY_REFRESH);
        }
    }

    fn pair(access: &str, refresh: &str) -> TokenPair {
        TokenPair {
            access: access.to_string(),
            refresh: refresh.to_string(),
        }
    }

    #[test]
    fn default_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn login_stores_both_tokens_and_derives_bearer() {
        let store = MemoryTokens::new();
        let mut session = Session::default();

        session.begin(pair("a1", "r1"), &store);

        assert!(session.is_authenticated());
        assert_eq!(session.bearer().as_deref(), Some("Bearer a1"));
        assert_eq!(store.get(STORAGE_KEY_ACCESS).as_deref(), Some("a1"));
        assert_eq!(store.get(STORAGE_KEY_REFRESH).as_deref(), Some("r1"));
    }

    #[test]
    fn renew_replaces_only_the_access_token() {
        let store = MemoryTokens::new();
        let mut session = Session::default();
        session.begin(pair("a1", "r1"), &store);

        session.renew("a2".to_string(), &store);

        assert_eq!(session.access(), Some("a2"));
        assert_eq!(session.refresh_token(), Some("r1"));
        assert_eq!(store.get(STORAGE_KEY_ACCESS).as_deref(), Some("a2"));
        assert_eq!(store.get(STORAGE_KEY_REFRESH).as_deref(), Some("r1"));
    }

    #[test]
    fn logout_clears_memory_and_storage() {
        let store = MemoryTokens::new();
        let mut session = Session::default();
        session.begin(pair("a1", "r1"), &store);

        session.end(&store);

        assert!(!session.is_authenticated());
        assert_eq!(session.refresh_token(), None);
        assert_eq!(store.get(STORAGE_KEY_ACCESS), None);
        assert_eq!(store.get(STORAGE_KEY_REFRESH), None);
    }

    #[test]
    fn logout_is_idempotent() {
        let store = MemoryTokens::new();
        let mut session = Session::default();
        session.begin(pair("a1", "r1"), &store);

        session.end(&store);
        let after_once = session.clone();
        session.end(&store);

        assert_eq!(session, after_once);
        assert_eq!(store.get(STORAGE_KEY_ACCESS), None);
    }

    #[test]
    fn restore_with_both_tokens_is_authenticated() {
        let store = MemoryTokens::with(&[(STORAGE_KEY_ACCESS, "a1"), (STORAGE_KEY_REFRESH, "r1")]);

        let session = Session::restore(&store);

        assert!(session.is_authenticated());
        assert_eq!(session.bearer().as_deref(), Some("Bearer a1"));
    }

    #[test]
    fn restore_with_a_single_stray_token_clears_it() {
        let store = MemoryTokens::with(&[(STORAGE_KEY_ACCESS, "a1")]);

        let session = Session::restore(&store);

        assert!(!session.is_authenticated());
        assert_eq!(store.get(STORAGE_KEY_ACCESS), None);
    }

    #[test]
    fn failed_refresh_recovery_restores_the_anonymous_state() {
        // On any refresh failure the caller abandons `renew` and calls
        // `end`; afterwards the session must be indistinguishable from a
        // fresh anonymous one, in memory and across a restart.
        let store = MemoryTokens::new();
        let mut session = Session::default();
        session.begin(pair("a1", "expired"), &store);

        session.end(&store);

        assert_eq!(session, Session::default());
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
        assert_eq!(store.get(STORAGE_KEY_ACCESS), None);
        assert_eq!(store.get(STORAGE_KEY_REFRESH), None);
        assert_eq!(Session::restore(&store), Session::default());
    }
}
