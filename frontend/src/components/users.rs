//! 用户管理屏幕
//!
//! 列表状态完全由 `ListView` 驱动；统计卡的数字来自 /users/stats，
//! 拉取失败只记日志，卡片保持 0。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::data_table::DataTable;
use crate::components::icons::*;
use crate::list_view::{FetchSpec, ListView};
use crate::services::users;
use clinicboard_shared::protocol::ListQuery;
use clinicboard_shared::{User, UserStats};

fn join_date(user: &User) -> String {
    user.created_at
        .as_deref()
        .map(|date| date.chars().take(10).collect())
        .unwrap_or_else(|| "N/A".to_string())
}

fn role_badge_class(role: &str) -> &'static str {
    match role {
        "doctor" => "badge badge-info badge-sm",
        "admin" => "badge badge-primary badge-sm",
        "staff" => "badge badge-secondary badge-sm",
        "patient" => "badge badge-accent badge-sm",
        _ => "badge badge-ghost badge-sm",
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = use_api();

    let list: ListView<User> = {
        let api = api.clone();
        ListView::new(10, "Failed to fetch users", move |spec: FetchSpec| {
            let api = api.clone();
            async move {
                let query = ListQuery::new(spec.page, spec.limit).with_search(&spec.search);
                users::list(&api, &query).await
            }
        })
    };
    let state = list.state;

    // 统计卡（尽力而为）
    let (stats, set_stats) = signal(UserStats::default());
    {
        let api = api.clone();
        spawn_local(async move {
            match users::stats(&api).await {
                Ok(loaded) => set_stats.set(loaded),
                Err(err) => web_sys::console::warn_1(
                    &format!("[users] 用户统计加载失败: {err}").into(),
                ),
            }
        });
    }

    let empty_message = Signal::derive(move || {
        if state.with(|core| core.query.trim().is_empty()) {
            "No users found.".to_string()
        } else {
            "No users found matching your search.".to_string()
        }
    });

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"User Management"</h1>
                <p class="text-base-content/70 text-sm">
                    "Manage all system users including admins, doctors, staff and patients"
                </p>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                <div class="card bg-primary text-primary-content shadow">
                    <div class="card-body py-4">
                        <div class="text-sm">"All Customers"</div>
                        <div class="text-2xl font-bold">{move || stats.get().total}</div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body py-4">
                        <div class="text-sm text-base-content/70">"Admins"</div>
                        <div class="text-2xl font-bold">{move || stats.get().admins}</div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body py-4">
                        <div class="text-sm text-base-content/70">"Doctors"</div>
                        <div class="text-2xl font-bold">{move || stats.get().doctors}</div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body py-4">
                        <div class="text-sm text-base-content/70">"Staff"</div>
                        <div class="text-2xl font-bold">{move || stats.get().staff}</div>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body py-4">
                        <div class="text-sm text-base-content/70">"Patients"</div>
                        <div class="text-2xl font-bold">{move || stats.get().patients}</div>
                    </div>
                </div>
            </div>

            <div class="flex items-center gap-3">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <IconSearch />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search users by name, email ..."
                        prop:value=move || state.with(|core| core.query.clone())
                        on:input=move |ev| list.on_query_input(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn-primary gap-2">
                    <IconPlus />
                    "Add New User"
                </button>
            </div>

            <Show when=move || state.with(|core| core.error.is_some())>
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>{move || state.with(|core| core.error.clone().unwrap_or_default())}</span>
                </div>
            </Show>

            <DataTable
                loading=Signal::derive(move || state.with(|core| core.loading))
                empty=Signal::derive(move || state.with(|core| core.results.is_empty()))
                empty_message=empty_message
                pagination=Signal::derive(move || state.with(|core| core.pagination))
                on_page_change=Callback::new(move |(page, limit): (u32, u32)| list.goto(page, limit))
            >
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Role"</th>
                            <th>"Specialty"</th>
                            <th>"Status"</th>
                            <th>"Join Date"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|core| core.results.clone())
                            key=|user: &User| (user.id, user.email.clone())
                            children=move |user: User| {
                                let role_name = user
                                    .role
                                    .as_ref()
                                    .and_then(|role| role.name.clone())
                                    .unwrap_or_else(|| "N/A".to_string());
                                let badge = role_badge_class(&role_name.to_lowercase());
                                let status = user
                                    .status
                                    .clone()
                                    .unwrap_or_else(|| "active".to_string());
                                view! {
                                    <tr>
                                        <td>
                                            <div class="flex items-center gap-3">
                                                <div class="avatar placeholder">
                                                    <div class="bg-base-300 rounded-full w-9">
                                                        <span class="text-xs">{user.initials()}</span>
                                                    </div>
                                                </div>
                                                <div>
                                                    <div class="font-semibold text-sm">
                                                        {user.display_name().to_string()}
                                                    </div>
                                                    <div class="text-xs text-base-content/60">
                                                        {user.contact().to_string()}
                                                    </div>
                                                </div>
                                            </div>
                                        </td>
                                        <td>
                                            <span class=badge>{role_name.clone()}</span>
                                        </td>
                                        <td class="text-sm">
                                            {user.specialty.clone().unwrap_or_else(|| "N/A".to_string())}
                                        </td>
                                        <td>
                                            <span class="badge badge-outline badge-sm">{status}</span>
                                        </td>
                                        <td class="text-sm">{join_date(&user)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </DataTable>
        </div>
    }
}
