//! 哈希路由服务
//!
//! 所有对 `window.location.hash` 的读写都集中在此模块；
//! `Route` 本身保持纯粹，这里只做 DOM 粘合。
//! 监听器以 RAII 句柄交还调用方，离开 Dashboard 时随句柄
//! 一起被移除，不会泄漏闭包或留下陈旧监听。

use wasm_bindgen::prelude::*;

use super::route::Route;

fn location_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// 解析当前地址栏里的路由
pub fn current_route() -> Route {
    Route::from_fragment(&location_hash())
}

/// 地址栏是否还没有任何片段
pub fn fragment_is_empty() -> bool {
    location_hash().is_empty()
}

/// 把路由写进地址栏（触发 hashchange）
pub fn navigate(route: Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(&route.fragment());
    }
}

/// 登出时清空片段
pub fn clear_fragment() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash("");
    }
}

/// hashchange 监听句柄。
///
/// drop 时从 window 上移除监听器，保证订阅只在 Dashboard
/// 存活期间有效。
pub struct HashChangeListener {
    closure: Closure<dyn Fn()>,
}

impl HashChangeListener {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let closure = Closure::<dyn Fn()>::new(callback);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }
        Self { closure }
    }
}

impl Drop for HashChangeListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "hashchange",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
