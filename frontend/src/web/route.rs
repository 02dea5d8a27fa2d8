//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 路由是一个封闭集合：未知的 URL 片段永远解析为默认路由，
//! 而不是错误状态。

/// 控制台的全部路由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// 概览页（默认路由）
    #[default]
    Overview,
    UserManagement,
    ClinicManagement,
    Packages,
    Appointments,
    Notifications,
    RolePermissions,
    SystemSettings,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Overview,
        Route::UserManagement,
        Route::ClinicManagement,
        Route::Packages,
        Route::Appointments,
        Route::Notifications,
        Route::RolePermissions,
        Route::SystemSettings,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Route::Overview => "overview",
            Route::UserManagement => "user-management",
            Route::ClinicManagement => "clinic-management",
            Route::Packages => "packages",
            Route::Appointments => "appointments",
            Route::Notifications => "notifications",
            Route::RolePermissions => "role-permissions",
            Route::SystemSettings => "system-settings",
        }
    }

    /// 侧边栏显示名
    pub fn label(&self) -> &'static str {
        match self {
            Route::Overview => "Overview",
            Route::UserManagement => "User Management",
            Route::ClinicManagement => "Clinic Management",
            Route::Packages => "Packages",
            Route::Appointments => "Appointments & Bookings",
            Route::Notifications => "Notifications & Alerts",
            Route::RolePermissions => "Role & Permissions",
            Route::SystemSettings => "System Settings",
        }
    }

    fn from_slug(slug: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|route| route.slug() == slug)
    }

    /// 从 `location.hash` 解析路由。
    ///
    /// 接受带或不带 `#` 的输入，剥掉一个前导 `/`；
    /// 空串或集合外的值回落到默认路由。
    pub fn from_fragment(fragment: &str) -> Route {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment);
        let raw = raw.strip_prefix('/').unwrap_or(raw);
        Route::from_slug(raw).unwrap_or_default()
    }

    /// 渲染回 URL 片段，`from_fragment` 的精确逆函数
    pub fn fragment(&self) -> String {
        format!("/{}", self.slug())
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_roundtrip() {
        // 每个合法路由都能原样往返
        for route in Route::ALL {
            assert_eq!(Route::from_fragment(&format!("#{}", route.fragment())), route);
            assert_eq!(Route::from_fragment(&route.fragment()), route);
        }
    }

    #[test]
    fn test_unknown_fragment_falls_back_to_default() {
        assert_eq!(Route::from_fragment("#/does-not-exist"), Route::Overview);
        assert_eq!(Route::from_fragment("banana"), Route::Overview);
        assert_eq!(Route::from_fragment("#/overview/extra"), Route::Overview);
    }

    #[test]
    fn test_empty_fragment_is_default() {
        assert_eq!(Route::from_fragment(""), Route::Overview);
        assert_eq!(Route::from_fragment("#"), Route::Overview);
        assert_eq!(Route::from_fragment("#/"), Route::Overview);
    }

    #[test]
    fn test_fragment_shape() {
        assert_eq!(Route::UserManagement.fragment(), "/user-management");
        assert_eq!(Route::RolePermissions.slug(), "role-permissions");
    }
}
