//! 新增/编辑套餐的模态表单
//!
//! 提交前要求至少一条非空翻译，这是整个控制台唯一的本地校验。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::services::packages as packages_service;
use clinicboard_shared::protocol::PackagePayload;
use clinicboard_shared::{Language, PackagePlan, PackageTranslation};

#[derive(Clone, Copy)]
struct PackageFormState {
    cost: RwSignal<String>,
    en_name: RwSignal<String>,
    en_content: RwSignal<String>,
    ar_name: RwSignal<String>,
    ar_content: RwSignal<String>,
}

impl PackageFormState {
    fn new() -> Self {
        Self {
            cost: RwSignal::new(String::new()),
            en_name: RwSignal::new(String::new()),
            en_content: RwSignal::new(String::new()),
            ar_name: RwSignal::new(String::new()),
            ar_content: RwSignal::new(String::new()),
        }
    }

    fn reset(&self) {
        self.cost.set(String::new());
        self.en_name.set(String::new());
        self.en_content.set(String::new());
        self.ar_name.set(String::new());
        self.ar_content.set(String::new());
    }

    fn populate(&self, pkg: &PackagePlan) {
        self.reset();
        self.cost
            .set(pkg.cost.map(|cost| cost.to_string()).unwrap_or_default());
        for translation in &pkg.translations {
            match translation.lang {
                Language::En => {
                    self.en_name.set(translation.name.clone());
                    self.en_content.set(translation.content.clone());
                }
                Language::Ar => {
                    self.ar_name.set(translation.name.clone());
                    self.ar_content.set(translation.content.clone());
                }
            }
        }
    }

    /// 本地校验在 PackagePayload::from_form 里：空翻译集被拒绝
    fn to_payload(&self) -> Result<PackagePayload, &'static str> {
        let cost = self.cost.get_untracked().parse::<f64>().unwrap_or(0.0);
        PackagePayload::from_form(
            cost,
            vec![
                PackageTranslation {
                    lang: Language::En,
                    name: self.en_name.get_untracked(),
                    content: self.en_content.get_untracked(),
                },
                PackageTranslation {
                    lang: Language::Ar,
                    name: self.ar_name.get_untracked(),
                    content: self.ar_content.get_untracked(),
                },
            ],
        )
    }
}

#[component]
pub fn PackageForm(
    open: RwSignal<bool>,
    editing: RwSignal<Option<PackagePlan>>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let form = PackageFormState::new();

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

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        match editing.get() {
            Some(pkg) => form.populate(&pkg),
            None => form.reset(),
        }
        set_error_msg.set(None);
    });

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            set_error_msg.set(None);

            let payload = match form.to_payload() {
                Ok(payload) => payload,
                Err(message) => {
                    set_error_msg.set(Some(message.to_string()));
                    return;
                }
            };

            set_saving.set(true);
            let api = api.clone();
            spawn_local(async move {
                let result = match editing.get_untracked().and_then(|pkg| pkg.id) {
                    Some(id) => packages_service::update(&api, id, &payload).await.map(|_| ()),
                    None => packages_service::create(&api, &payload).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        open.set(false);
                        editing.set(None);
                        on_saved.run(());
                    }
                    Err(err) => {
                        set_error_msg.set(Some(err.user_message("Failed to save package")));
                    }
                }
                set_saving.set(false);
            });
        }
    };

    let is_edit = move || editing.get().is_some();

    view! {
        <dialog node_ref=dialog_ref class="modal">
            <div class="modal-box max-w-xl">
                <div class="flex items-center justify-between">
                    <h3 class="font-bold text-lg">
                        {move || if is_edit() { "Edit Package" } else { "Add New Package" }}
                    </h3>
                    <button class="btn btn-sm btn-circle btn-ghost" on:click=move |_| open.set(false)>
                        "✕"
                    </button>
                </div>

                <form class="space-y-4 mt-4" on:submit=on_submit>
                    <div class="form-control">
                        <label class="label" for="package-cost">
                            <span class="label-text">"Cost *"</span>
                        </label>
                        <input
                            id="package-cost"
                            type="number"
                            step="0.01"
                            min="0"
                            class="input input-bordered"
                            placeholder="Enter package cost (e.g., 99.99)"
                            prop:value=form.cost
                            on:input=move |ev| form.cost.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="space-y-3">
                        <h4 class="font-semibold text-sm">"Translations"</h4>

                        <div class="border border-base-300 rounded-lg p-3 space-y-2">
                            <div class="text-xs font-semibold text-base-content/60">"English (EN)"</div>
                            <input
                                type="text"
                                class="input input-bordered input-sm w-full"
                                placeholder="Enter package name in English"
                                prop:value=form.en_name
                                on:input=move |ev| form.en_name.set(event_target_value(&ev))
                            />
                            <textarea
                                class="textarea textarea-bordered w-full"
                                rows="3"
                                placeholder="Enter package description in English"
                                prop:value=form.en_content
                                on:input=move |ev| form.en_content.set(event_target_value(&ev))
                            ></textarea>
                        </div>

                        <div class="border border-base-300 rounded-lg p-3 space-y-2">
                            <div class="text-xs font-semibold text-base-content/60">"Arabic (AR)"</div>
                            <input
                                type="text"
                                class="input input-bordered input-sm w-full"
                                placeholder="Enter package name in Arabic"
                                prop:value=form.ar_name
                                on:input=move |ev| form.ar_name.set(event_target_value(&ev))
                            />
                            <textarea
                                class="textarea textarea-bordered w-full"
                                rows="3"
                                placeholder="Enter package description in Arabic"
                                prop:value=form.ar_content
                                on:input=move |ev| form.ar_content.set(event_target_value(&ev))
                            ></textarea>
                        </div>
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
                                    "Update Package"
                                } else {
                                    "Add Package"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
