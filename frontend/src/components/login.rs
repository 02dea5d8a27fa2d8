//! 登录页
//!
//! 提交流程：login -> fetch_me，两步都成功才算登录完成；
//! 任何一步失败都留在本页，错误消息优先取服务端的 message 字段。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::use_auth_service;
use crate::i18n;
use clinicboard_shared::protocol::LoginRequest;
use clinicboard_shared::{Language, User};

#[component]
pub fn LoginPage(
    #[prop(into)] on_logged_in: Callback<User>,
    #[prop(into)] on_show_register: Callback<()>,
) -> impl IntoView {
    let auth = use_auth_service();

    let (locale, set_locale) = signal(i18n::current_language());
    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let t = move || i18n::translations(locale.get());

    let switch_locale = move |lang: Language| {
        set_locale.set(lang);
        i18n::set_current_language(lang);
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if phone.get().is_empty() || password.get().is_empty() {
            return;
        }

        set_submitting.set(true);
        set_error_msg.set(None);

        let auth = auth.clone();
        spawn_local(async move {
            let credentials = LoginRequest {
                phone: phone.get_untracked(),
                password: password.get_untracked(),
            };
            let fallback = i18n::translations(locale.get_untracked()).fallback_error;
            let result: Result<User, _> = async {
                auth.login(&credentials).await?;
                auth.fetch_me().await
            }
            .await;
            match result {
                Ok(user) => on_logged_in.run(user),
                Err(err) => set_error_msg.set(Some(err.user_message(fallback))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div
            class="hero min-h-screen bg-base-200"
            dir=move || if locale.get().is_rtl() { "rtl" } else { "ltr" }
        >
            <div class="hero-content flex-col w-full max-w-md">
                <div class="join self-end">
                    <button
                        type="button"
                        class=move || {
                            if locale.get() == Language::En {
                                "join-item btn btn-xs btn-primary"
                            } else {
                                "join-item btn btn-xs"
                            }
                        }
                        on:click=move |_| switch_locale(Language::En)
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
                        on:click=move |_| switch_locale(Language::Ar)
                    >
                        "AR"
                    </button>
                </div>

                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">{move || t().login_title}</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="phone">
                                <span class="label-text">{move || t().phone_label}</span>
                            </label>
                            <input
                                id="phone"
                                type="tel"
                                placeholder=move || t().phone_placeholder
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                                prop:value=phone
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">{move || t().password_label}</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder=move || t().password_placeholder
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                {move || {
                                    if submitting.get() {
                                        t().login_submitting
                                    } else {
                                        t().login_button
                                    }
                                }}
                            </button>
                        </div>

                        <p class="text-sm text-center mt-2 text-base-content/70">
                            "Don't have an account? "
                            <button
                                type="button"
                                class="link link-primary"
                                on:click=move |_| on_show_register.run(())
                            >
                                {move || t().register_button}
                            </button>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
