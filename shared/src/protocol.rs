//! 与后端约定的请求/响应形状。
//!
//! 后端在若干地方是"鸭子类型"的（token 字段名、user 的位置、
//! roles 的包裹层），这里把每一种歧义都建模为一次显式的解码步骤，
//! 优先级只在此处定义一次。

use crate::{Role, Session, User};
use serde::{Deserialize, Serialize};

// =========================================================
// 端点路径 (Endpoints)
// =========================================================

/// 后端端点路径，集中定义避免散落的字符串字面量
pub mod endpoints {
    pub const AUTH_REGISTER: &str = "/auth/register";
    pub const AUTH_LOGIN: &str = "/auth/login";
    pub const AUTH_LOGOUT: &str = "/auth/logout";
    pub const AUTH_ME: &str = "/auth/me";
    pub const USERS: &str = "/users";
    pub const USERS_STATS: &str = "/users/stats";
    pub const PACKAGES: &str = "/packages";
    pub const ROLES: &str = "/roles";

    /// 详情/更新共用同一个 id 路径
    pub fn users_detail(id: u64) -> String {
        format!("{USERS}/{id}")
    }

    /// 详情/更新/删除共用同一个 id 路径
    pub fn packages_detail(id: u64) -> String {
        format!("{PACKAGES}/{id}")
    }
}

// =========================================================
// 列表查询与分页 (List Query & Pagination)
// =========================================================

/// 列表端点的查询参数
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub role_id: Option<String>,
}

impl ListQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            search: None,
            role_id: None,
        }
    }

    /// 空白搜索词不会出现在查询串中
    pub fn with_search(mut self, search: &str) -> Self {
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_role(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = Some(role_id.into());
        self
    }

    /// 展开为 URL 查询键值对
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(role_id) = &self.role_id {
            pairs.push(("role_id", role_id.clone()));
        }
        pairs
    }
}

/// 服务端返回的分页元数据。
///
/// 客户端从不自行推算 totalPages / hasNextPage，只照单全收；
/// 缺失字段回落到零值/false。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// 列表响应信封 `{data: [], meta: {}}`，两个字段都可能缺失
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

// =========================================================
// 认证 (Auth)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

/// 诊所注册请求；注册成功不会让用户登录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "clinicName")]
    pub clinic_name: String,
    pub email: String,
    pub phone: String,
    pub plan: String,
}

/// 登录响应的显式归一化。
///
/// 后端可能用 `access_token` 或 `token` 命名凭据；用户要么是
/// `user` 字段，要么是去掉凭据字段之后的剩余响应体。
/// 优先级：`access_token` > `token`；`user` 字段 > 剩余字段。
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<User>,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

impl LoginResponse {
    pub fn into_session(self) -> Session {
        let token = self.access_token.or(self.token);
        let user = self.user.or_else(|| {
            serde_json::from_value(serde_json::Value::Object(self.rest)).ok()
        });
        Session { token, user }
    }
}

// =========================================================
// 用户与套餐的写操作 (Write Payloads)
// =========================================================

/// 创建/更新用户共用的请求体；编辑时不带密码表示保持不变
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackagePayload {
    pub cost: f64,
    pub translations: Vec<crate::PackageTranslation>,
}

impl PackagePayload {
    /// 过滤掉名称和内容都为空的翻译；一条都不剩则拒绝提交。
    /// 这是唯一的本地校验失败来源。
    pub fn from_form(
        cost: f64,
        translations: Vec<crate::PackageTranslation>,
    ) -> Result<Self, &'static str> {
        let valid: Vec<_> = translations
            .into_iter()
            .filter(|t| !t.name.trim().is_empty() || !t.content.trim().is_empty())
            .map(|t| crate::PackageTranslation {
                lang: t.lang,
                name: t.name.trim().to_string(),
                content: t.content.trim().to_string(),
            })
            .collect();
        if valid.is_empty() {
            return Err("At least one translation (name or content) is required");
        }
        Ok(Self {
            cost,
            translations: valid,
        })
    }
}

// =========================================================
// 角色 (Roles)
// =========================================================

/// GET /roles 可能返回裸数组，也可能返回 `{data: [...]}` 包裹
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RolesResponse {
    Wrapped { data: Vec<Role> },
    Bare(Vec<Role>),
}

impl RolesResponse {
    pub fn into_roles(self) -> Vec<Role> {
        match self {
            RolesResponse::Wrapped { data } => data,
            RolesResponse::Bare(roles) => roles,
        }
    }
}

// =========================================================
// 测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_normalizes_access_token() {
        // access_token 存在而 token 缺失时，归一化为会话 token
        let response: LoginResponse = serde_json::from_str(
            r#"{"access_token": "tok-1", "user": {"id": 3, "name": "Admin"}}"#,
        )
        .unwrap();
        let session = response.into_session();
        assert_eq!(session.token.as_deref(), Some("tok-1"));
        assert_eq!(session.user.unwrap().id, Some(3));
    }

    #[test]
    fn test_login_access_token_wins_over_token() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"access_token": "a", "token": "b"}"#).unwrap();
        assert_eq!(response.into_session().token.as_deref(), Some("a"));
    }

    #[test]
    fn test_login_user_as_remainder() {
        // 没有 user 字段时，剩余字段整体作为用户记录
        let response: LoginResponse = serde_json::from_str(
            r#"{"token": "tok-2", "id": 9, "name": "Root", "email": "root@clinic.com"}"#,
        )
        .unwrap();
        let session = response.into_session();
        assert_eq!(session.token.as_deref(), Some("tok-2"));
        let user = session.user.unwrap();
        assert_eq!(user.id, Some(9));
        assert_eq!(user.email.as_deref(), Some("root@clinic.com"));
    }

    #[test]
    fn test_pagination_meta_adopted_verbatim() {
        let envelope: ListEnvelope<User> = serde_json::from_str(
            r#"{"data": [{"id": 1}, {"id": 2}],
                "meta": {"page": 2, "limit": 10, "total": 25, "totalPages": 3,
                         "hasNextPage": true, "hasPreviousPage": true}}"#,
        )
        .unwrap();
        assert_eq!(envelope.data.len(), 2);
        let meta = envelope.meta.unwrap();
        assert_eq!(meta.page, 2);
        assert_eq!(meta.limit, 10);
        assert_eq!(meta.total, 25);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_envelope_missing_fields_default() {
        let envelope: ListEnvelope<User> = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_empty());
        assert!(envelope.meta.is_none());

        let envelope: ListEnvelope<User> =
            serde_json::from_str(r#"{"data": [], "meta": {}}"#).unwrap();
        let meta = envelope.meta.unwrap();
        assert_eq!(meta.page, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
    }

    #[test]
    fn test_roles_bare_and_wrapped() {
        let bare: RolesResponse =
            serde_json::from_str(r#"[{"id": 1, "slug": "admin"}]"#).unwrap();
        assert_eq!(bare.into_roles().len(), 1);

        let wrapped: RolesResponse =
            serde_json::from_str(r#"{"data": [{"id": 2, "slug": "clinic"}]}"#).unwrap();
        let roles = wrapped.into_roles();
        assert_eq!(roles[0].slug.as_deref(), Some("clinic"));
    }

    #[test]
    fn test_list_query_pairs() {
        let query = ListQuery::new(2, 10)
            .with_search("  cli  ")
            .with_role(crate::roles::CLINIC);
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page", "2".to_string()),
                ("limit", "10".to_string()),
                ("search", "cli".to_string()),
                ("role_id", "clinic".to_string()),
            ]
        );

        // 空白搜索词被省略
        let query = ListQuery::new(1, 10).with_search("   ");
        assert_eq!(query.to_pairs().len(), 2);
    }

    #[test]
    fn test_package_payload_requires_translation() {
        use crate::{Language, PackageTranslation};

        let blank = vec![
            PackageTranslation {
                lang: Language::En,
                name: "  ".to_string(),
                content: String::new(),
            },
            PackageTranslation {
                lang: Language::Ar,
                name: String::new(),
                content: String::new(),
            },
        ];
        assert!(PackagePayload::from_form(99.9, blank).is_err());

        let partial = vec![
            PackageTranslation {
                lang: Language::En,
                name: " Basic ".to_string(),
                content: String::new(),
            },
            PackageTranslation {
                lang: Language::Ar,
                name: String::new(),
                content: String::new(),
            },
        ];
        let payload = PackagePayload::from_form(29.0, partial).unwrap();
        assert_eq!(payload.translations.len(), 1);
        assert_eq!(payload.translations[0].name, "Basic");
    }

    #[test]
    fn test_user_payload_skips_absent_fields() {
        let payload = UserPayload {
            name: "City Clinic".to_string(),
            email: "c@clinic.com".to_string(),
            phone: "+1555".to_string(),
            password: None,
            package_id: Some(4),
            role_id: Some(2),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["package_id"], 4);
    }
}
