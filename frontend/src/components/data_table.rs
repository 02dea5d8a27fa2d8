//! 通用表格外壳
//!
//! 只负责加载态、空态和分页条；列与行由各资源屏幕提供。
//! 分页按钮的可用性完全来自服务端的 hasPreviousPage / hasNextPage，
//! 客户端不自行推算。

use leptos::prelude::*;

use clinicboard_shared::protocol::PaginationMeta;

#[component]
pub fn DataTable(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] empty: Signal<bool>,
    #[prop(into)] empty_message: Signal<String>,
    #[prop(into)] pagination: Signal<PaginationMeta>,
    /// 分页交互，参数为 (page, limit)
    #[prop(into)] on_page_change: Callback<(u32, u32)>,
    children: ChildrenFn,
) -> impl IntoView {
    // "Showing X to Y of Z results"
    let range_label = move || {
        let p = pagination.get();
        let from = (p.page.max(1) as u64 - 1) * p.limit as u64 + 1;
        let to = (p.page as u64 * p.limit as u64).min(p.total);
        format!("Showing {} to {} of {} results", from, to, p.total)
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="overflow-x-auto w-full">
                    {move || {
                        if loading.get() {
                            view! {
                                <div class="text-center py-12 text-base-content/50">
                                    <span class="loading loading-spinner loading-md"></span>
                                    " Loading..."
                                </div>
                            }
                            .into_any()
                        } else if empty.get() {
                            view! {
                                <div class="text-center py-12 text-base-content/50">
                                    {empty_message.get()}
                                </div>
                            }
                            .into_any()
                        } else {
                            children().into_any()
                        }
                    }}
                </div>

                <Show when=move || (pagination.get().total_pages > 1)>
                    <div class="flex items-center justify-between px-6 py-4 border-t border-base-200">
                        <div class="text-sm text-base-content/70">{range_label}</div>
                        <div class="join">
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || !pagination.get().has_previous_page
                                on:click=move |_| {
                                    let p = pagination.get();
                                    on_page_change.run((1, p.limit));
                                }
                            >
                                "First"
                            </button>
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || !pagination.get().has_previous_page
                                on:click=move |_| {
                                    let p = pagination.get();
                                    on_page_change.run((p.page.saturating_sub(1).max(1), p.limit));
                                }
                            >
                                "Previous"
                            </button>
                            <span class="join-item btn btn-sm btn-ghost no-animation">
                                {move || {
                                    let p = pagination.get();
                                    format!("Page {} of {}", p.page, p.total_pages)
                                }}
                            </span>
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || !pagination.get().has_next_page
                                on:click=move |_| {
                                    let p = pagination.get();
                                    on_page_change.run((p.page + 1, p.limit));
                                }
                            >
                                "Next"
                            </button>
                            <button
                                class="join-item btn btn-sm"
                                disabled=move || !pagination.get().has_next_page
                                on:click=move |_| {
                                    let p = pagination.get();
                                    on_page_change.run((p.total_pages, p.limit));
                                }
                            >
                                "Last"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
