//! 内联 SVG 图标组件，固定描边风格

use leptos::prelude::*;

#[component]
pub fn IconGrid() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
            <rect x="3" y="3" width="6" height="6" stroke="currentColor" stroke-width="1.5" fill="none"></rect>
            <rect x="11" y="3" width="6" height="6" stroke="currentColor" stroke-width="1.5" fill="none"></rect>
            <rect x="3" y="11" width="6" height="6" stroke="currentColor" stroke-width="1.5" fill="none"></rect>
            <rect x="11" y="11" width="6" height="6" stroke="currentColor" stroke-width="1.5" fill="none"></rect>
        </svg>
    }
}

#[component]
pub fn IconUsers() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
            <path d="M10 10C12.2 10 14 8.2 14 6C14 3.8 12.2 2 10 2C7.8 2 6 3.8 6 6C6 8.2 7.8 10 10 10Z" stroke="currentColor" stroke-width="1.5" fill="none"></path>
            <path d="M4 18C4 14.7 6.7 12 10 12C13.3 12 16 14.7 16 18" stroke="currentColor" stroke-width="1.5" fill="none"></path>
        </svg>
    }
}

#[component]
pub fn IconClinic() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
            <rect x="3" y="8" width="14" height="10" stroke="currentColor" stroke-width="1.5" fill="none"></rect>
            <path d="M10 2L17 6V8H3V6L10 2Z" stroke="currentColor" stroke-width="1.5" fill="none"></path>
            <line x1="9" y1="6" x2="11" y2="6" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"></line>
            <line x1="10" y1="5" x2="10" y2="7" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"></line>
        </svg>
    }
}

#[component]
pub fn IconPackage() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
            <rect x="3" y="6" width="14" height="12" rx="2" stroke="currentColor" stroke-width="1.5" fill="none"></rect>
            <path d="M3 10H17" stroke="currentColor" stroke-width="1.5"></path>
            <path d="M10 6V18" stroke="currentColor" stroke-width="1.5"></path>
        </svg>
    }
}

#[component]
pub fn IconCalendar() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
            <rect x="3" y="4" width="14" height="14" rx="2" stroke="currentColor" stroke-width="1.5" fill="none"></rect>
            <path d="M3 8H17" stroke="currentColor" stroke-width="1.5"></path>
            <path d="M7 2V6" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"></path>
            <path d="M13 2V6" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"></path>
        </svg>
    }
}

#[component]
pub fn IconBell() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
            <path d="M4 7.5C4 6.7 4.7 6 5.5 6H14.5C15.3 6 16 6.7 16 7.5V13.5C16 14.3 15.3 15 14.5 15H5.5C4.7 15 4 14.3 4 13.5V7.5Z" stroke="currentColor" stroke-width="1.5" fill="none"></path>
            <path d="M7 15V16.5C7 17.3 7.7 18 8.5 18H11.5C12.3 18 13 17.3 13 16.5V15" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"></path>
            <circle cx="15" cy="5" r="2" fill="currentColor"></circle>
        </svg>
    }
}

#[component]
pub fn IconShield() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
            <path d="M10 2L3 5V9C3 13.5 6.5 17.5 10 18.5C13.5 17.5 17 13.5 17 9V5L10 2Z" stroke="currentColor" stroke-width="1.5" fill="none"></path>
        </svg>
    }
}

#[component]
pub fn IconSettings() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
            <circle cx="10" cy="10" r="3" stroke="currentColor" stroke-width="1.5" fill="none"></circle>
            <path d="M10 2V4M10 16V18M18 10H16M4 10H2M15.7 4.3L14.2 5.8M5.8 14.2L4.3 15.7M15.7 15.7L14.2 14.2M5.8 5.8L4.3 4.3" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"></path>
        </svg>
    }
}

#[component]
pub fn IconSearch() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
            <circle cx="9" cy="9" r="6" stroke="currentColor" stroke-width="1.5" fill="none"></circle>
            <path d="M13 13L17 17" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"></path>
        </svg>
    }
}

#[component]
pub fn IconPlus() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 16 16" fill="none">
            <path d="M8 3V13M3 8H13" stroke="currentColor" stroke-width="1.5" stroke-linecap="round"></path>
        </svg>
    }
}

#[component]
pub fn IconPencil() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 16 16" fill="none">
            <path d="M11.3 2C11.7 1.6 12.2 1.5 12.7 1.5C13.2 1.5 13.6 1.6 14 2C14.4 2.4 14.5 2.8 14.5 3.3C14.5 3.8 14.4 4.3 14 4.7L5 13.7L1.3 14.7L2.3 11L11.3 2Z" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"></path>
        </svg>
    }
}

#[component]
pub fn IconTrash() -> impl IntoView {
    view! {
        <svg width="16" height="16" viewBox="0 0 16 16" fill="none">
            <path d="M2 4H14M6 4V3C6 2.5 6.2 2 6.6 1.6C7 1.2 7.5 1 8 1C8.5 1 9 1.2 9.4 1.6C9.8 2 10 2.5 10 3V4M12.7 4V13.3C12.7 13.9 12.5 14.4 12.1 14.7C11.7 15.1 11.2 15.3 10.7 15.3H5.3C4.8 15.3 4.3 15.1 3.9 14.7C3.5 14.4 3.3 13.9 3.3 13.3V4H12.7Z" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"></path>
        </svg>
    }
}

#[component]
pub fn IconLogOut() -> impl IntoView {
    view! {
        <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
            <path d="M13 7L16 10M16 10L13 13M16 10H7M11 4C9.7 4 8.4 4.5 7.5 5.5C6.5 6.4 6 7.7 6 9V11C6 12.3 6.5 13.6 7.5 14.5C8.4 15.5 9.7 16 11 16H13" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"></path>
        </svg>
    }
}
