//! 控制台外壳：侧边导航 + 路由出口
//!
//! 导航点击走注入的回调（pushState 式的哈希写入由外层 Shell 负责），
//! 本组件不直接摸 window。

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::icons::*;
use crate::web::route::Route;

fn route_icon(route: Route) -> AnyView {
    match route {
        Route::Overview => view! { <IconGrid /> }.into_any(),
        Route::UserManagement => view! { <IconUsers /> }.into_any(),
        Route::ClinicManagement => view! { <IconClinic /> }.into_any(),
        Route::Packages => view! { <IconPackage /> }.into_any(),
        Route::Appointments => view! { <IconCalendar /> }.into_any(),
        Route::Notifications => view! { <IconBell /> }.into_any(),
        Route::RolePermissions => view! { <IconShield /> }.into_any(),
        Route::SystemSettings => view! { <IconSettings /> }.into_any(),
    }
}

#[component]
pub fn DashboardShell(
    #[prop(into)] current_route: Signal<Route>,
    #[prop(into)] on_navigate: Callback<Route>,
    #[prop(into)] on_logout: Callback<()>,
    /// 路由匹配函数：当前路由 -> 视图
    matcher: fn(Route) -> AnyView,
) -> impl IntoView {
    let auth_ctx = use_auth();

    let email = move || {
        auth_ctx
            .user
            .get()
            .and_then(|user| user.email)
            .unwrap_or_else(|| "admin@clinic.com".to_string())
    };

    view! {
        <div class="flex min-h-screen bg-base-200">
            <aside class="w-64 bg-base-100 shadow-xl flex flex-col">
                <div class="p-4 text-xl font-bold text-primary">"ClinicBoard"</div>

                <nav class="flex-1 px-2 space-y-1">
                    {Route::ALL
                        .into_iter()
                        .map(|route| {
                            view! {
                                <a
                                    href=format!("#{}", route.fragment())
                                    class=move || {
                                        if current_route.get() == route {
                                            "flex items-center gap-3 px-3 py-2 rounded-lg bg-primary text-primary-content"
                                        } else {
                                            "flex items-center gap-3 px-3 py-2 rounded-lg hover:bg-base-200"
                                        }
                                    }
                                    on:click=move |ev: leptos::web_sys::MouseEvent| {
                                        ev.prevent_default();
                                        on_navigate.run(route);
                                    }
                                >
                                    {route_icon(route)}
                                    <span class="text-sm">{route.label()}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="p-4 border-t border-base-200 space-y-3">
                    <div class="flex items-center gap-3">
                        <div class="avatar placeholder">
                            <div class="bg-primary text-primary-content rounded-full w-10">
                                <span>"A"</span>
                            </div>
                        </div>
                        <div class="min-w-0">
                            <div class="text-sm font-semibold">"Admin User"</div>
                            <div class="text-xs text-base-content/60 truncate">{email}</div>
                        </div>
                    </div>
                    <button
                        class="btn btn-outline btn-error btn-sm w-full gap-2"
                        on:click=move |_| on_logout.run(())
                    >
                        <IconLogOut />
                        "Logout"
                    </button>
                </div>
            </aside>

            <main class="flex-1 p-6 overflow-y-auto">
                {move || matcher(current_route.get())}
            </main>
        </div>
    }
}
