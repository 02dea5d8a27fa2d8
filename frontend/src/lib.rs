//! clinicboard 前端应用
//!
//! 多租户诊所管理平台的管理控制台，采用高内聚低耦合的分层：
//! - `web::route` / `web::router`: 哈希路由（领域模型 + DOM 粘合）
//! - `session`: 持久化会话的唯一入口
//! - `api`: HTTP 网关，所有出站请求的唯一通道
//! - `auth`: 认证协调器（登录 / 当前用户 / 登出）
//! - `list_view`: 搜索防抖 + 分页 + 序号守卫的可复用列表控制器
//! - `components`: UI 组件层

mod api;
mod auth;
mod i18n;
mod list_view;
mod services;
mod session;

mod components {
    pub mod clinic_form;
    pub mod clinics;
    pub mod confirm_dialog;
    pub mod data_table;
    pub mod icons;
    pub mod layout;
    pub mod login;
    pub mod overview;
    pub mod package_form;
    pub mod packages;
    pub mod register;
    pub mod users;
}

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStore;
}

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::auth::{AuthContext, AuthService};
use crate::components::clinics::ClinicsPage;
use crate::components::layout::DashboardShell;
use crate::components::login::LoginPage;
use crate::components::overview::OverviewPage;
use crate::components::packages::PackagesPage;
use crate::components::register::RegisterPage;
use crate::components::users::UsersPage;
use crate::session::SessionStore;
use crate::web::route::Route;
use crate::web::router;
use crate::web::router::HashChangeListener;

/// 顶层视图状态机：Loading -> {Login, Register, Dashboard}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellView {
    /// 会话引导尚未完成，什么都不渲染
    Loading,
    Login,
    Register,
    Dashboard,
}

/// 路由匹配函数：当前路由返回对应的页面视图。
/// 尚未实现的页面暂时落在概览页。
fn route_view(route: Route) -> AnyView {
    match route {
        Route::UserManagement => view! { <UsersPage /> }.into_any(),
        Route::ClinicManagement => view! { <ClinicsPage /> }.into_any(),
        Route::Packages => view! { <PackagesPage /> }.into_any(),
        Route::Overview
        | Route::Appointments
        | Route::Notifications
        | Route::RolePermissions
        | Route::SystemSettings => view! { <OverviewPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 组装服务：会话存储注入网关和认证协调器，单一事实来源
    let store = SessionStore::new();
    let api = ApiClient::new(store);
    let auth = AuthService::new(api.clone(), store);
    let auth_ctx = AuthContext::new();
    provide_context(api);
    provide_context(auth.clone());
    provide_context(auth_ctx);

    let (view_state, set_view_state) = signal(ShellView::Loading);
    let (current_route, set_route) = signal(Route::default());

    // 2. 会话引导：异步读取持久化会话，完成前不渲染任何内容。
    //    URL 里已有合法路由也必须等引导结束才能进入 Dashboard。
    spawn_local(async move {
        match store.load().and_then(|session| session.user) {
            Some(user) => {
                auth_ctx.user.set(Some(user));
                // 地址栏没有片段时把默认路由写回去
                if router::fragment_is_empty() {
                    router::navigate(Route::default());
                }
                set_route.set(router::current_route());
                set_view_state.set(ShellView::Dashboard);
            }
            None => set_view_state.set(ShellView::Login),
        }
    });

    // 3. hashchange 订阅只在 Dashboard 存活；离开时句柄被丢弃，
    //    监听器随之移除
    let hash_listener = StoredValue::new_local(None::<HashChangeListener>);
    Effect::new(move |_| {
        if view_state.get() == ShellView::Dashboard {
            hash_listener.set_value(Some(HashChangeListener::new(move || {
                set_route.set(router::current_route());
            })));
        } else {
            hash_listener.set_value(None);
        }
    });

    // 登录成功（login + fetch_me 都完成）后进入控制台
    let on_logged_in = Callback::new(move |user: clinicboard_shared::User| {
        auth_ctx.user.set(Some(user));
        if router::fragment_is_empty() {
            router::navigate(Route::default());
        }
        set_route.set(router::current_route());
        set_view_state.set(ShellView::Dashboard);
    });

    let on_show_register = Callback::new(move |_: ()| set_view_state.set(ShellView::Register));
    let on_show_login = Callback::new(move |_: ()| set_view_state.set(ShellView::Login));

    let on_navigate = Callback::new(move |route: Route| {
        router::navigate(route);
        set_route.set(route);
    });

    // 登出对调用方不可失败：后端挂了也照样清本地状态
    let on_logout = {
        let auth = auth.clone();
        Callback::new(move |_: ()| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.logout().await;
                auth_ctx.user.set(None);
                router::clear_fragment();
                set_view_state.set(ShellView::Login);
            });
        })
    };

    view! {
        {move || match view_state.get() {
            ShellView::Loading => ().into_any(),
            ShellView::Login => view! {
                <LoginPage on_logged_in=on_logged_in on_show_register=on_show_register />
            }
            .into_any(),
            ShellView::Register => view! { <RegisterPage on_show_login=on_show_login /> }.into_any(),
            ShellView::Dashboard => view! {
                <DashboardShell
                    current_route=current_route
                    on_navigate=on_navigate
                    on_logout=on_logout
                    matcher=route_view
                />
            }
            .into_any(),
        }}
    }
}
