//! 会话存储服务
//!
//! 持久化认证记录的唯一入口：其他组件一律通过这个显式实例
//! 读写 `auth` 键，而不是各自摸 LocalStorage。
//! 网关和认证协调器都持有同一个 `SessionStore` 值。

use crate::web::LocalStore;
use clinicboard_shared::{STORAGE_KEY_AUTH, Session};

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    pub fn new() -> Self {
        Self
    }

    /// 无条件覆盖写入序列化后的 `{token, user}`
    pub fn save(&self, session: &Session) {
        LocalStore::set(STORAGE_KEY_AUTH, &session.encode());
    }

    /// 键不存在或内容无法解析时返回 None，绝不抛错
    pub fn load(&self) -> Option<Session> {
        LocalStore::get(STORAGE_KEY_AUTH).and_then(|raw| Session::decode(&raw))
    }

    /// 幂等删除
    pub fn clear(&self) {
        LocalStore::delete(STORAGE_KEY_AUTH);
    }

    /// 当前持有的凭据；网关每次请求前读取
    pub fn token(&self) -> Option<String> {
        self.load().and_then(|session| session.token)
    }
}
