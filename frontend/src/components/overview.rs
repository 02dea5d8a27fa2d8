//! 概览页：静态指标卡 + 按权限显示的两个面板

use leptos::prelude::*;

use crate::auth::use_auth;
use clinicboard_shared::has_permission;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let auth_ctx = use_auth();

    let can_view_appointments = Signal::derive(move || {
        auth_ctx
            .user
            .with(|user| has_permission(user.as_ref(), "appointments:view"))
    });
    let can_view_doctors = Signal::derive(move || {
        auth_ctx
            .user
            .with(|user| has_permission(user.as_ref(), "doctors:view"))
    });

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="text-sm text-base-content/70">"Total Patients"</h2>
                        <p class="text-3xl font-bold">"248"</p>
                        <p class="text-xs text-success">"+12 this week"</p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="text-sm text-base-content/70">"Today's Appointments"</h2>
                        <p class="text-3xl font-bold">"32"</p>
                        <p class="text-xs text-base-content/60">"Across all doctors"</p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="text-sm text-base-content/70">"Active Doctors"</h2>
                        <p class="text-3xl font-bold">"18"</p>
                        <p class="text-xs text-base-content/60">"Including specialists"</p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="text-sm text-base-content/70">"Pending Approvals"</h2>
                        <p class="text-3xl font-bold">"5"</p>
                        <p class="text-xs text-warning">"Need your attention"</p>
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title text-base">"Upcoming appointments"</h2>
                        <Show
                            when=move || can_view_appointments.get()
                            fallback=|| {
                                view! {
                                    <p class="text-base-content/60">
                                        "You don't have permission to view appointments."
                                    </p>
                                }
                            }
                        >
                            <table class="table table-sm">
                                <thead>
                                    <tr>
                                        <th>"Patient"</th>
                                        <th>"Doctor"</th>
                                        <th>"Time"</th>
                                        <th>"Status"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <tr>
                                        <td>"John Carter"</td>
                                        <td>"Dr. Smith"</td>
                                        <td>"09:30"</td>
                                        <td>
                                            <span class="badge badge-success badge-sm">"Confirmed"</span>
                                        </td>
                                    </tr>
                                    <tr>
                                        <td>"Emily Clark"</td>
                                        <td>"Dr. Lopez"</td>
                                        <td>"10:15"</td>
                                        <td>
                                            <span class="badge badge-warning badge-sm">"Pending"</span>
                                        </td>
                                    </tr>
                                </tbody>
                            </table>
                        </Show>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title text-base">"Doctor availability"</h2>
                        <Show
                            when=move || can_view_doctors.get()
                            fallback=|| {
                                view! {
                                    <p class="text-base-content/60">
                                        "You don't have permission to view doctor stats."
                                    </p>
                                }
                            }
                        >
                            <ul class="space-y-2 text-sm">
                                <li class="flex justify-between">
                                    <span>"Doctors on duty"</span>
                                    <span class="font-semibold">"12"</span>
                                </li>
                                <li class="flex justify-between">
                                    <span>"In consultation"</span>
                                    <span class="font-semibold">"7"</span>
                                </li>
                                <li class="flex justify-between">
                                    <span>"On break"</span>
                                    <span class="font-semibold">"3"</span>
                                </li>
                            </ul>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
