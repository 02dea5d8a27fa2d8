//! 认证协调器
//!
//! 负责登录 / 当前用户 / 登出三条流程，本身不持有状态，
//! 会话全部委托给注入的 `SessionStore`。
//! 登录、取用户失败时原样上抛后端错误；登出对调用方永不失败。

use leptos::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::session::SessionStore;
use clinicboard_shared::protocol::{LoginRequest, LoginResponse, RegisterRequest, endpoints};
use clinicboard_shared::{Session, User};

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    store: SessionStore,
}

impl AuthService {
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        Self { api, store }
    }

    /// 登录并持久化归一化后的会话
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, ApiError> {
        let response: LoginResponse = self.api.post_json(endpoints::AUTH_LOGIN, credentials).await?;
        let session = response.into_session();
        self.store.save(&session);
        Ok(session)
    }

    /// 刷新当前用户并合并进已持久化的会话；token 保持原样不动
    pub async fn fetch_me(&self) -> Result<User, ApiError> {
        let me: User = self.api.get_json(endpoints::AUTH_ME, &[]).await?;
        let token = self.store.load().and_then(|session| session.token);
        self.store.save(&Session {
            token,
            user: Some(me.clone()),
        });
        Ok(me)
    }

    /// 尽力通知后端，无论成败都清掉本地会话。
    /// 这是唯一一处吞错误的地方，吞之前会留下日志。
    pub async fn logout(&self) {
        if let Err(err) = self.api.post_empty(endpoints::AUTH_LOGOUT).await {
            web_sys::console::warn_1(
                &format!("[auth] 登出接口调用失败: {err}，本地会话照常清除").into(),
            );
        }
        self.store.clear();
    }

    /// 诊所注册：发完即止，成功也不会让用户登录
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.api.post_unit(endpoints::AUTH_REGISTER, request).await
    }
}

// =========================================================
// 认证上下文
// =========================================================

/// 组件树共享的当前用户信号
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

pub fn use_auth_service() -> AuthService {
    use_context::<AuthService>().expect("AuthService should be provided")
}
