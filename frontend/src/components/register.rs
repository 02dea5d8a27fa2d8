//! 诊所注册页
//!
//! 发完即止：注册成功只展示提示，不会让用户登录。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth_service;
use crate::i18n;
use clinicboard_shared::Language;
use clinicboard_shared::protocol::RegisterRequest;

#[component]
pub fn RegisterPage(#[prop(into)] on_show_login: Callback<()>) -> impl IntoView {
    let auth = use_auth_service();

    let (locale, set_locale) = signal(i18n::current_language());
    let (clinic_name, set_clinic_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (plan, set_plan) = signal("professional".to_string());
    let (loading, set_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    let t = move || i18n::translations(locale.get());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_success_msg.set(None);
        set_loading.set(true);

        let auth = auth.clone();
        spawn_local(async move {
            let request = RegisterRequest {
                clinic_name: clinic_name.get_untracked(),
                email: email.get_untracked(),
                phone: phone.get_untracked(),
                plan: plan.get_untracked(),
            };
            let copy = i18n::translations(locale.get_untracked());
            match auth.register(&request).await {
                Ok(()) => set_success_msg.set(Some(copy.success.to_string())),
                Err(err) => set_error_msg.set(Some(err.user_message(copy.fallback_error))),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div
            class="min-h-screen bg-base-200 py-8"
            dir=move || if locale.get().is_rtl() { "rtl" } else { "ltr" }
        >
            <div class="max-w-3xl mx-auto px-4 space-y-6">
                <div class="join flex justify-end">
                    <button
                        type="button"
                        class=move || {
                            if locale.get() == Language::En {
                                "join-item btn btn-xs btn-primary"
                            } else {
                                "join-item btn btn-xs"
                            }
                        }
                        on:click=move |_| {
                            set_locale.set(Language::En);
                            i18n::set_current_language(Language::En);
                        }
                    >
                        "EN"
                    </button>
                    <button
                        type="button"
                        class=move || {
                            if locale.get() == Language::Ar {
                                "join-item btn btn-xs btn-primary"
                            } else {
                                "join-item btn btn-xs"
                            }
                        }
                        on:click=move |_| {
                            set_locale.set(Language::Ar);
                            i18n::set_current_language(Language::Ar);
                        }
                    >
                        "AR"
                    </button>
                </div>

                <header class="text-center">
                    <h1 class="text-3xl font-bold">{move || t().header_title}</h1>
                    <p class="text-base-content/70 mt-2">{move || t().header_subtitle}</p>
                </header>

                <form on:submit=on_submit class="space-y-6">
                    <section class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">{move || t().clinic_info_title}</h2>

                            <div class="form-control">
                                <label class="label" for="clinicName">
                                    <span class="label-text">{move || t().clinic_name_label}</span>
                                </label>
                                <input
                                    id="clinicName"
                                    type="text"
                                    placeholder=move || t().clinic_name_placeholder
                                    on:input=move |ev| set_clinic_name.set(event_target_value(&ev))
                                    prop:value=clinic_name
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="email">
                                    <span class="label-text">{move || t().email_label}</span>
                                </label>
                                <input
                                    id="email"
                                    type="email"
                                    placeholder=move || t().email_placeholder
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="regPhone">
                                    <span class="label-text">{move || t().phone_label}</span>
                                </label>
                                <input
                                    id="regPhone"
                                    type="tel"
                                    placeholder=move || t().phone_placeholder
                                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                                    prop:value=phone
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                        </div>
                    </section>

                    <section class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h2 class="card-title">{move || t().subscription_title}</h2>
                            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                                {move || {
                                    t()
                                        .plans
                                        .iter()
                                        .map(|p| {
                                            let id = p.id;
                                            let active = move || plan.get() == id;
                                            view! {
                                                <button
                                                    type="button"
                                                    class=move || {
                                                        if active() {
                                                            "card border-2 border-primary bg-primary/5 p-4 text-left"
                                                        } else {
                                                            "card border border-base-300 p-4 text-left hover:border-primary/50"
                                                        }
                                                    }
                                                    on:click=move |_| set_plan.set(id.to_string())
                                                >
                                                    <div class="font-bold">{p.name}</div>
                                                    <div class="text-primary text-lg font-semibold">{p.price}</div>
                                                    <ul class="text-sm text-base-content/70 mt-2 space-y-1">
                                                        {p
                                                            .features
                                                            .iter()
                                                            .map(|feature| view! { <li>"✓ " {*feature}</li> })
                                                            .collect_view()}
                                                    </ul>
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </div>
                    </section>

                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>
                    <Show when=move || success_msg.get().is_some()>
                        <div role="alert" class="alert alert-success text-sm py-2">
                            <span>{move || success_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <button type="submit" class="btn btn-primary w-full" disabled=move || loading.get()>
                        {move || if loading.get() { t().registering } else { t().register_button }}
                    </button>
                </form>

                <p class="text-sm text-center text-base-content/70">
                    "Already have an account? "
                    <button type="button" class="link link-primary" on:click=move |_| on_show_login.run(())>
                        {move || t().login_button}
                    </button>
                </p>
            </div>
        </div>
    }
}
