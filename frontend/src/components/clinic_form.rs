//! 新增/编辑诊所的模态表单
//!
//! 打开时拉取角色和套餐下拉数据；角色锁定为 clinic。
//! 编辑模式下密码留空表示保持不变。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::services::{packages as packages_service, roles as roles_service, users as users_service};
use clinicboard_shared::protocol::{ListQuery, UserPayload};
use clinicboard_shared::{PackagePlan, Role, User, roles as role_slugs};

/// 表单字段集合；RwSignal 实现 Copy，方便整体传递
#[derive(Clone, Copy)]
struct ClinicFormState {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    password: RwSignal<String>,
    package_id: RwSignal<String>,
    role_id: RwSignal<String>,
}

impl ClinicFormState {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            package_id: RwSignal::new(String::new()),
            role_id: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.name.set(String::new());
        self.email.set(String::new());
        self.phone.set(String::new());
        self.password.set(String::new());
        self.package_id.set(String::new());
        self.role_id.set(String::new());
    }

    /// 编辑模式：用已有诊所数据填充；密码永远不回填
    fn populate(&self, clinic: &User) {
        self.name.set(clinic.display_name().to_string());
        self.email.set(clinic.email.clone().unwrap_or_default());
        self.phone.set(clinic.phone.clone().unwrap_or_default());
        self.password.set(String::new());
        self.package_id
            .set(clinic.package_id.map(|id| id.to_string()).unwrap_or_default());
        self.role_id.set(
            clinic
                .role
                .as_ref()
                .and_then(|role| role.id)
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
    }

    fn to_payload(&self) -> UserPayload {
        let password = self.password.get_untracked();
        UserPayload {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            password: (!password.is_empty()).then_some(password),
            package_id: self.package_id.get_untracked().parse().ok(),
            role_id: self.role_id.get_untracked().parse().ok(),
        }
    }
}

#[component]
pub fn ClinicForm(
    open: RwSignal<bool>,
    editing: RwSignal<Option<User>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let form = ClinicFormState::new();

    let roles = RwSignal::new(Vec::<Role>::new());
    let packages = RwSignal::new(Vec::<PackagePlan>::new());
    let (saving, set_saving) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    // 打开时填充表单并拉取下拉数据
    Effect::new({
        let api = api.clone();
        move |_| {
            if !open.get() {
                return;
            }
            match editing.get() {
                Some(clinic) => form.populate(&clinic),
                None => form.reset(),
            }
            set_error_msg.set(None);

            let api_for_roles = api.clone();
            spawn_local(async move {
                match roles_service::list(&api_for_roles).await {
                    Ok(loaded) => {
                        // 新建时默认锁定 clinic 角色
                        if editing.get_untracked().is_none() {
                            if let Some(clinic_role) = loaded
                                .iter()
                                .find(|role| role.slug.as_deref() == Some(role_slugs::CLINIC))
                            {
                                form.role_id.set(
                                    clinic_role
                                        .id
                                        .map(|id| id.to_string())
                                        .unwrap_or_default(),
                                );
                            }
                        }
                        roles.set(loaded);
                    }
                    Err(err) => web_sys::console::warn_1(
                        &format!("[clinics] 角色加载失败: {err}").into(),
                    ),
                }
            });

            let api_for_packages = api.clone();
            spawn_local(async move {
                // 下拉里要全量套餐
                let query = ListQuery::new(1, 100);
                match packages_service::list(&api_for_packages, &query).await {
                    Ok(envelope) => packages.set(envelope.data),
                    Err(err) => web_sys::console::warn_1(
                        &format!("[clinics] 套餐加载失败: {err}").into(),
                    ),
                }
            });
        }
    });

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_error_msg.set(None);
            set_saving.set(true);

            let api = api.clone();
            spawn_local(async move {
                let payload = form.to_payload();
                let result = match editing.get_untracked().and_then(|clinic| clinic.id) {
                    Some(id) => users_service::update(&api, id, &payload).await.map(|_| ()),
                    None => users_service::create(&api, &payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        open.set(false);
                        editing.set(None);
                        on_saved.run(());
                    }
                    Err(err) => {
                        set_error_msg.set(Some(err.user_message("Failed to save clinic")));
                    }
                }
                set_saving.set(false);
            });
        }
    };

    let is_edit = move || editing.get().is_some();

    view! {
        <dialog node_ref=dialog_ref class="modal">
            <div class="modal-box">
                <div class="flex items-center justify-between">
                    <h3 class="font-bold text-lg">
                        {move || if is_edit() { "Edit Clinic" } else { "Add New Clinic" }}
                    </h3>
                    <button class="btn btn-sm btn-circle btn-ghost" on:click=move |_| open.set(false)>
                        "✕"
                    </button>
                </div>

                <form class="space-y-4 mt-4" on:submit=on_submit>
                    <div class="form-control">
                        <label class="label" for="clinic-name">
                            <span class="label-text">"Clinic Name *"</span>
                        </label>
                        <input
                            id="clinic-name"
                            type="text"
                            class="input input-bordered"
                            placeholder="Enter clinic name"
                            prop:value=form.name
                            on:input=move |ev| form.name.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="clinic-email">
                            <span class="label-text">"Email *"</span>
                        </label>
                        <input
                            id="clinic-email"
                            type="email"
                            class="input input-bordered"
                            placeholder="Enter email address"
                            prop:value=form.email
                            on:input=move |ev| form.email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="clinic-phone">
                            <span class="label-text">"Phone *"</span>
                        </label>
                        <input
                            id="clinic-phone"
                            type="tel"
                            class="input input-bordered"
                            placeholder="Enter phone number"
                            prop:value=form.phone
                            on:input=move |ev| form.phone.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <Show when=move || !is_edit()>
                        <div class="form-control">
                            <label class="label" for="clinic-role">
                                <span class="label-text">"Role *"</span>
                            </label>
                            // 角色固定为 clinic，仅作展示
                            <select id="clinic-role" class="select select-bordered" disabled prop:value=form.role_id>
                                <option value="">"Select a role"</option>
                                {move || {
                                    roles
                                        .get()
                                        .into_iter()
                                        .map(|role| {
                                            let id = role.id.map(|i| i.to_string()).unwrap_or_default();
                                            view! {
                                                <option value=id.clone()>{role.display_name().to_string()}</option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label class="label" for="clinic-package">
                            <span class="label-text">"Package"</span>
                        </label>
                        <select
                            id="clinic-package"
                            class="select select-bordered"
                            prop:value=form.package_id
                            on:change=move |ev| form.package_id.set(event_target_value(&ev))
                        >
                            <option value="">"Select a package (optional)"</option>
                            {move || {
                                packages
                                    .get()
                                    .into_iter()
                                    .map(|pkg| {
                                        let id = pkg.id.map(|i| i.to_string()).unwrap_or_default();
                                        let label = format!("{} - {}", pkg.display_name(), pkg.cost_label());
                                        view! { <option value=id.clone()>{label}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label" for="clinic-password">
                            <span class="label-text">
                                {move || {
                                    if is_edit() {
                                        "Password (leave blank to keep current)"
                                    } else {
                                        "Password *"
                                    }
                                }}
                            </span>
                        </label>
                        <input
                            id="clinic-password"
                            type="password"
                            class="input input-bordered"
                            placeholder=move || {
                                if is_edit() { "Enter new password (optional)" } else { "Enter password" }
                            }
                            prop:value=form.password
                            on:input=move |ev| form.password.set(event_target_value(&ev))
                            required=move || !is_edit()
                        />
                    </div>

                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="modal-action">
                        <button
                            type="button"
                            class="btn"
                            disabled=move || saving.get()
                            on:click=move |_| open.set(false)
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                            {move || {
                                if saving.get() {
                                    "Saving..."
                                } else if is_edit() {
                                    "Update Clinic"
                                } else {
                                    "Add Clinic"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
