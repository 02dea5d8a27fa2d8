//! 套餐管理屏幕：列表 + 新增/编辑模态 + 删除确认

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::data_table::DataTable;
use crate::components::icons::*;
use crate::components::package_form::PackageForm;
use crate::list_view::{FetchSpec, ListView};
use crate::services::packages as packages_service;
use clinicboard_shared::PackagePlan;
use clinicboard_shared::protocol::ListQuery;

#[component]
pub fn PackagesPage() -> impl IntoView {
    let api = use_api();

    let list: ListView<PackagePlan> = {
        let api = api.clone();
        ListView::new(10, "Failed to fetch packages", move |spec: FetchSpec| {
            let api = api.clone();
            async move {
                let query = ListQuery::new(spec.page, spec.limit).with_search(&spec.search);
                packages_service::list(&api, &query).await
            }
        })
    };
    let state = list.state;

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<PackagePlan>::None);
    let delete_open = RwSignal::new(false);
    let delete_target = RwSignal::new(Option::<PackagePlan>::None);
    let (action_error, set_action_error) = signal(Option::<String>::None);

    let open_add = move |_| {
        editing.set(None);
        form_open.set(true);
    };

    let on_saved = Callback::new(move |_: ()| list.refresh());

    let on_delete_confirm = {
        let api = api.clone();
        Callback::new(move |_: ()| {
            let Some(id) = delete_target.get_untracked().and_then(|pkg| pkg.id) else {
                return;
            };
            let api = api.clone();
            set_action_error.set(None);
            spawn_local(async move {
                match packages_service::delete(&api, id).await {
                    Ok(()) => list.refresh(),
                    Err(err) => {
                        set_action_error.set(Some(err.user_message("Failed to delete package")));
                    }
                }
                delete_target.set(None);
            });
        })
    };

    let delete_message = Signal::derive(move || {
        let name = delete_target
            .get()
            .map(|pkg| pkg.display_name().to_string())
            .unwrap_or_else(|| "this package".to_string());
        format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            name
        )
    });

    let empty_message = Signal::derive(move || {
        if state.with(|core| core.query.trim().is_empty()) {
            "No packages found.".to_string()
        } else {
            "No packages found matching your search.".to_string()
        }
    });

    let total = Signal::derive(move || state.with(|core| core.pagination.total));

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold">"Package Management"</h1>
                <p class="text-base-content/70 text-sm">"Manage all subscription packages and pricing"</p>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-5 gap-4">
                <div class="card bg-primary text-primary-content shadow">
                    <div class="card-body py-4">
                        <div class="text-sm">"Total Packages"</div>
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
                        placeholder="Search packages by name..."
                        prop:value=move || state.with(|core| core.query.clone())
                        on:input=move |ev| list.on_query_input(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn-primary gap-2" on:click=open_add>
                    <IconPlus />
                    "Add New Package"
                </button>
            </div>

            <Show when=move || state.with(|core| core.error.is_some()) || action_error.get().is_some()>
                <div role="alert" class="alert alert-error text-sm py-2">
                    <span>
                        {move || {
                            state
                                .with(|core| core.error.clone())
                                .or_else(|| action_error.get())
                                .unwrap_or_default()
                        }}
                    </span>
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
                            <th>"Package Name"</th>
                            <th>"Cost"</th>
                            <th>"Languages"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || state.with(|core| core.results.clone())
                            key=|pkg: &PackagePlan| pkg.id
                            children=move |pkg: PackagePlan| {
                                let pkg_for_edit = pkg.clone();
                                let pkg_for_delete = pkg.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <div class="font-semibold text-sm">
                                                {pkg.display_name().to_string()}
                                            </div>
                                            <div class="text-xs text-base-content/60">
                                                {pkg.display_content().to_string()}
                                            </div>
                                        </td>
                                        <td>
                                            <span class="font-semibold text-primary">{pkg.cost_label()}</span>
                                        </td>
                                        <td>
                                            <div class="flex gap-1">
                                                {pkg
                                                    .translations
                                                    .iter()
                                                    .map(|translation| {
                                                        view! {
                                                            <span class="badge badge-outline badge-sm uppercase">
                                                                {translation.lang.as_str()}
                                                            </span>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </td>
                                        <td>
                                            <div class="flex gap-1">
                                                <button
                                                    class="btn btn-ghost btn-sm btn-square"
                                                    title="Edit"
                                                    on:click=move |_| {
                                                        editing.set(Some(pkg_for_edit.clone()));
                                                        form_open.set(true);
                                                    }
                                                >
                                                    <IconPencil />
                                                </button>
                                                <button
                                                    class="btn btn-ghost btn-sm btn-square text-error"
                                                    title="Delete"
                                                    on:click=move |_| {
                                                        delete_target.set(Some(pkg_for_delete.clone()));
                                                        delete_open.set(true);
                                                    }
                                                >
                                                    <IconTrash />
                                                </button>
                                            </div>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </DataTable>

            <PackageForm open=form_open editing=editing on_saved=on_saved />

            <ConfirmDialog
                open=delete_open
                title=Signal::derive(|| "Delete Package".to_string())
                message=delete_message
                on_confirm=on_delete_confirm
            />
        </div>
    }
}
