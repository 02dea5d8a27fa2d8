//! 语言偏好与静态翻译。
//!
//! 语言偏好独立于会话持久化（`app_language` 键），
//! 网关在每个请求上读取它作为 `lang` 头。

use crate::web::LocalStore;
use clinicboard_shared::{Language, STORAGE_KEY_LANGUAGE};

/// 读取当前语言；缺失或非法值回落到英文
pub fn current_language() -> Language {
    LocalStore::get(STORAGE_KEY_LANGUAGE)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn set_current_language(lang: Language) {
    LocalStore::set(STORAGE_KEY_LANGUAGE, lang.as_str());
}

/// 订阅方案的静态文案
pub struct PlanCopy {
    pub id: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

/// 认证页面用到的全部文案
pub struct Translations {
    pub header_title: &'static str,
    pub header_subtitle: &'static str,
    pub clinic_info_title: &'static str,
    pub clinic_name_label: &'static str,
    pub clinic_name_placeholder: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub phone_label: &'static str,
    pub phone_placeholder: &'static str,
    pub subscription_title: &'static str,
    pub plans: [PlanCopy; 3],
    pub register_button: &'static str,
    pub registering: &'static str,
    pub success: &'static str,
    pub fallback_error: &'static str,
    pub login_title: &'static str,
    pub login_button: &'static str,
    pub login_submitting: &'static str,
    pub password_label: &'static str,
    pub password_placeholder: &'static str,
}

pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

static EN: Translations = Translations {
    header_title: "Welcome to Your Clinic Management System",
    header_subtitle: "Register your clinic and get started in minutes",
    clinic_info_title: "Clinic Information",
    clinic_name_label: "Clinic Name",
    clinic_name_placeholder: "Enter your clinic name",
    email_label: "Email Address",
    email_placeholder: "admin@clinic.com",
    phone_label: "Phone Number",
    phone_placeholder: "+1 (555) 123-4567",
    subscription_title: "Choose Your Subscription Plan",
    plans: [
        PlanCopy {
            id: "basic",
            name: "Basic",
            price: "$29/month",
            features: &["Up to 5 doctors", "Basic scheduling", "Email support"],
        },
        PlanCopy {
            id: "professional",
            name: "Professional",
            price: "$79/month",
            features: &[
                "Up to 20 doctors",
                "Advanced scheduling",
                "Priority support",
                "Analytics",
            ],
        },
        PlanCopy {
            id: "enterprise",
            name: "Enterprise",
            price: "$199/month",
            features: &[
                "Unlimited doctors",
                "Full features",
                "24/7 support",
                "Custom integrations",
            ],
        },
    ],
    register_button: "Register & Continue",
    registering: "Registering…",
    success: "Clinic registered successfully.",
    fallback_error: "Request failed. Please try again.",
    login_title: "Sign in to your account",
    login_button: "Sign in",
    login_submitting: "Signing in…",
    password_label: "Password",
    password_placeholder: "Enter your password",
};

static AR: Translations = Translations {
    header_title: "مرحباً بك في نظام إدارة العيادة",
    header_subtitle: "سجّل عيادتك وابدأ خلال دقائق",
    clinic_info_title: "معلومات العيادة",
    clinic_name_label: "اسم العيادة",
    clinic_name_placeholder: "أدخل اسم العيادة",
    email_label: "البريد الإلكتروني",
    email_placeholder: "admin@clinic.com",
    phone_label: "رقم الهاتف",
    phone_placeholder: "+1 (555) 123-4567",
    subscription_title: "اختر خطة الاشتراك",
    plans: [
        PlanCopy {
            id: "basic",
            name: "الأساسية",
            price: "$29 / شهرياً",
            features: &["حتى 5 أطباء", "جدولة أساسية", "دعم عبر البريد الإلكتروني"],
        },
        PlanCopy {
            id: "professional",
            name: "المحترفة",
            price: "$79 / شهرياً",
            features: &["حتى 20 طبيباً", "جدولة متقدمة", "دعم أولوية", "تحليلات"],
        },
        PlanCopy {
            id: "enterprise",
            name: "الشركات",
            price: "$199 / شهرياً",
            features: &["عدد غير محدود من الأطباء", "كل المميزات", "دعم 24/7", "تكاملات مخصصة"],
        },
    ],
    register_button: "تسجيل ومتابعة",
    registering: "جاري التسجيل…",
    success: "تم تسجيل العيادة بنجاح.",
    fallback_error: "فشل الطلب. حاول مرة أخرى.",
    login_title: "تسجيل الدخول إلى حسابك",
    login_button: "تسجيل الدخول",
    login_submitting: "جاري تسجيل الدخول…",
    password_label: "كلمة المرور",
    password_placeholder: "أدخل كلمة المرور",
};
