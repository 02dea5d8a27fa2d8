//! 列表视图控制器
//!
//! 把搜索输入、防抖窗口、分页游标和数据获取捆成一个可复用单元，
//! 用户、诊所、套餐三个屏幕各自实例化一份，互不共享状态。
//!
//! 纯逻辑收在 `ListViewCore` 里（可脱离浏览器测试）；
//! 信号、定时器和 spawn_local 的粘合放在 `ListView`。
//!
//! 同一控制器上防抖触发的获取和分页触发的获取可能同时在途，
//! 每次获取带上单调递增的序号，完成时只有"最后发出"的那次
//! 允许落地，迟到的陈旧响应直接丢弃。

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;
use clinicboard_shared::protocol::{ListEnvelope, PaginationMeta};

/// 搜索防抖窗口
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// 一次计划好的获取：序号 + 页码 + 页大小 + 搜索词
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSpec {
    pub seq: u64,
    pub page: u32,
    pub limit: u32,
    pub search: String,
}

// =========================================================
// 纯状态机
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ListViewCore<T> {
    pub query: String,
    pub pagination: PaginationMeta,
    pub results: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    issued: u64,
}

impl<T> ListViewCore<T> {
    pub fn new(limit: u32) -> Self {
        Self {
            query: String::new(),
            pagination: PaginationMeta {
                page: 1,
                limit,
                ..Default::default()
            },
            results: Vec::new(),
            loading: false,
            error: None,
            issued: 0,
        }
    }

    /// 每次计划获取都先置 loading、清掉旧错误，并占用下一个序号
    fn plan(&mut self, page: u32, limit: u32) -> FetchSpec {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        FetchSpec {
            seq: self.issued,
            page,
            limit,
            search: self.query.trim().to_string(),
        }
    }

    /// 挂载时的首次获取：第 1 页，空搜索
    pub fn initial_fetch(&mut self) -> FetchSpec {
        self.plan(1, self.pagination.limit)
    }

    /// 记录新的搜索词；防抖定时器的重启由调用方负责
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    /// 防抖窗口安静期结束：带当前搜索词回到第 1 页
    pub fn debounce_fire(&mut self) -> FetchSpec {
        self.plan(1, self.pagination.limit)
    }

    /// 分页控件交互：立即获取请求的页，搜索词取当前值
    /// （可能还没等到防抖落地）
    pub fn goto(&mut self, page: u32, limit: u32) -> FetchSpec {
        self.plan(page.max(1), limit.max(1))
    }

    fn is_current(&self, seq: u64) -> bool {
        seq == self.issued
    }

    /// 落地成功响应；非最后发出的获取被视为陈旧，返回 false 并丢弃。
    /// 服务端省略的分页字段回落到请求值或零值。
    pub fn apply_success(&mut self, spec: &FetchSpec, envelope: ListEnvelope<T>) -> bool {
        if !self.is_current(spec.seq) {
            return false;
        }
        let meta = envelope.meta.unwrap_or_default();
        self.pagination = PaginationMeta {
            page: if meta.page >= 1 { meta.page } else { spec.page },
            limit: if meta.limit >= 1 { meta.limit } else { spec.limit },
            ..meta
        };
        self.results = envelope.data;
        self.loading = false;
        true
    }

    /// 落地失败：记录消息并清空结果；陈旧响应同样被丢弃
    pub fn apply_failure(&mut self, spec: &FetchSpec, message: String) -> bool {
        if !self.is_current(spec.seq) {
            return false;
        }
        self.error = Some(message);
        self.results.clear();
        self.loading = false;
        true
    }
}

// =========================================================
// Leptos 粘合层
// =========================================================

/// 信号化的列表控制器，Copy 便于在闭包间传递
pub struct ListView<T: Send + Sync + 'static> {
    pub state: RwSignal<ListViewCore<T>>,
    debounce: StoredValue<Option<Timeout>, LocalStorage>,
    dispatch: StoredValue<Rc<dyn Fn(FetchSpec)>, LocalStorage>,
}

impl<T: Send + Sync + 'static> Clone for ListView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListView<T> {}

impl<T: Clone + Send + Sync + 'static> ListView<T> {
    /// 创建控制器并立刻发出首屏获取。
    ///
    /// `fallback_error` 是该资源的兜底文案；`fetch` 把一次计划好的
    /// 获取变成真正的 HTTP 调用。
    pub fn new<F, Fut>(limit: u32, fallback_error: &'static str, fetch: F) -> Self
    where
        F: Fn(FetchSpec) -> Fut + 'static,
        Fut: Future<Output = Result<ListEnvelope<T>, ApiError>> + 'static,
    {
        let state = RwSignal::new(ListViewCore::new(limit));
        let fetch = Rc::new(fetch);
        let dispatch: Rc<dyn Fn(FetchSpec)> = Rc::new(move |spec: FetchSpec| {
            let fetch = fetch.clone();
            spawn_local(async move {
                match fetch(spec.clone()).await {
                    Ok(envelope) => {
                        state.update(|core| {
                            core.apply_success(&spec, envelope);
                        });
                    }
                    Err(err) => {
                        let message = err.user_message(fallback_error);
                        state.update(|core| {
                            core.apply_failure(&spec, message);
                        });
                    }
                }
            });
        });

        if let Some(spec) = state.try_update(|core| core.initial_fetch()) {
            dispatch(spec);
        }

        Self {
            state,
            debounce: StoredValue::new_local(None),
            dispatch: StoredValue::new_local(dispatch),
        }
    }

    /// 搜索框每次输入：记下新词并重启防抖窗口。
    /// 旧定时器被取消，只有安静期的幸存者会触发获取（总是第 1 页）。
    pub fn on_query_input(&self, query: String) {
        let state = self.state;
        let dispatch = self.dispatch;
        state.update(|core| core.set_query(query));

        let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            if let Some(spec) = state.try_update(|core| core.debounce_fire()) {
                dispatch.with_value(|run| run(spec));
            }
        });
        self.debounce.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.cancel();
            }
            *slot = Some(timer);
        });
    }

    /// 分页交互立即生效，不取消任何搜索定时器
    pub fn goto(&self, page: u32, limit: u32) {
        if let Some(spec) = self.state.try_update(|core| core.goto(page, limit)) {
            self.dispatch.with_value(|run| run(spec));
        }
    }

    /// 新增/编辑/删除成功后按当前页、当前搜索词重新拉取
    pub fn refresh(&self) {
        let (page, limit) = self
            .state
            .with_untracked(|core| (core.pagination.page, core.pagination.limit));
        self.goto(page, limit);
    }
}

#[cfg(test)]
mod tests;
