//! LocalStorage 封装模块
//!
//! 只做字符串级别的读写；会话记录的解析放在 shared crate，
//! 以便脱离浏览器环境测试。

use gloo_storage::{LocalStorage, Storage};

/// 本地存储操作封装
pub struct LocalStore;

impl LocalStore {
    /// 读取字符串值；键不存在或存储不可用时返回 None
    pub fn get(key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    /// 写入字符串值；返回是否成功
    pub fn set(key: &str, value: &str) -> bool {
        LocalStorage::raw().set_item(key, value).is_ok()
    }

    /// 删除键值对；键不存在也不报错
    pub fn delete(key: &str) {
        LocalStorage::delete(key);
    }
}
