//! 诊所管理屏幕
//!
//! 诊所就是带 clinic 角色的用户：列表复用 /users 端点加 role_id 过滤，
//! 新增/编辑走同一个用户端点。

use leptos::prelude::*;

use crate::api::use_api;
use crate::components::clinic_form::ClinicForm;
use crate::components::data_table::DataTable;
use crate::components::icons::*;
use crate::list_view::{FetchSpec, ListView};
use crate::services::users;
use clinicboard_shared::protocol::ListQuery;
use clinicboard_shared::{User, roles};

#[component]
pub fn ClinicsPage() -> impl IntoView {
    let api = use_api();

    let list: ListView<User> = {
        let api = api.clone();
        ListView::new(10, "Failed to fetch clinics", move |spec: FetchSpec| {
            let api = api.clone();
            async move {
                let query = ListQuery::new(spec.page, spec.limit)
                    .with_search(&spec.search)
                    .with_role(roles::CLINIC);
                users::list(&api, &query).await
            }
        })
    };
    let state = list.state;

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<User>::None);

    let open_add = move |_| {
        editing.set(None);
        form_open.set(true);
    };

    let on_saved = Callback::new(move |_: ()| list.refresh());

    let empty_message = Signal::derive(move || {
        if state.with(|core| core.query.trim().is_empty()) {
            "No clinics found.".to_string()
        } else {
            "No clinics found matching your search.".to_string()
        }
    });

    // 总数直接取分页 meta 的 total
    let total = Signal::derive(move || state.with(|core| core.pagination.total));

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"Clinic Management"</h1>
                <p class="text-base-content/70 text-sm">"Manage all clinics and their information"</p>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                <div class="card bg-primary text-primary-content shadow">
                    <div class="card-body py-4">
                        <div class="text-sm">"Total Clinics"</div>
                        <div class="text-2xl font-bold">{move || total.get()}</div>
                    </div>
                </div>
            </div>

            <div class="flex items-center gap-3">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <IconSearch />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search clinics by name, email ..."
                        prop:value=move || state.with(|core| core.query.clone())
                        on:input=move |ev| list.on_query_input(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn-primary gap-2" on:click=open_add>
                    <IconPlus />
                    "Add New Clinic"
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
                            <th>"Clinic"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|core| core.results.clone())
                            key=|clinic: &User| (clinic.id, clinic.email.clone())
                            children=move |clinic: User| {
                                let status = clinic
                                    .status
                                    .clone()
                                    .unwrap_or_else(|| "active".to_string());
                                let clinic_for_edit = clinic.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <div class="flex items-center gap-3">
                                                <div class="avatar placeholder">
                                                    <div class="bg-base-300 rounded-full w-9">
                                                        <span class="text-xs">{clinic.initials()}</span>
                                                    </div>
                                                </div>
                                                <div class="font-semibold text-sm">
                                                    {clinic.display_name().to_string()}
                                                </div>
                                            </div>
                                        </td>
                                        <td class="text-sm">
                                            {clinic.email.clone().unwrap_or_else(|| "N/A".to_string())}
                                        </td>
                                        <td class="text-sm">
                                            {clinic.phone.clone().unwrap_or_else(|| "N/A".to_string())}
                                        </td>
                                        <td>
                                            <span class="badge badge-outline badge-sm">{status}</span>
                                        </td>
                                        <td>
                                            <button
                                                class="btn btn-ghost btn-sm btn-square"
                                                title="Edit"
                                                on:click=move |_| {
                                                    editing.set(Some(clinic_for_edit.clone()));
                                                    form_open.set(true);
                                                }
                                            >
                                                <IconPencil />
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </DataTable>

            <ClinicForm open=form_open editing=editing on_saved=on_saved />
        </div>
    }
}
