use serde::{Deserialize, Serialize};

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中持久化会话的键
pub const STORAGE_KEY_AUTH: &str = "auth";
/// LocalStorage 中语言偏好的键
pub const STORAGE_KEY_LANGUAGE: &str = "app_language";
/// 每个请求都携带的语言头
pub const HEADER_LANG: &str = "lang";

/// 后端角色 slug 常量
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const CLINIC: &str = "clinic";
    pub const DOCTOR: &str = "doctor";
    pub const PATIENT: &str = "patient";
    pub const STAFF: &str = "staff";
    pub const SUPER_ADMIN: &str = "super_admin";
}

// =========================================================
// 语言 (Language)
// =========================================================

/// 受支持的界面语言，封闭集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// 从存储的代码解析；未知代码返回 None，由调用方回退到默认值
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ar" => Some(Language::Ar),
            _ => None,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }
}

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 后端用户记录。
///
/// 字段全部可选：同一条记录可能来自 /auth/me、登录响应的剩余字段
/// 或列表结果，后端在不同端点下的字段覆盖并不一致。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub permissions: Option<Vec<String>>,
    pub status: Option<String>,
    pub specialty: Option<String>,
    pub clinic: Option<String>,
    pub package_id: Option<u64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl User {
    /// 显示名：name 优先，其次 fullName
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.full_name.as_deref())
            .unwrap_or("N/A")
    }

    /// 联系方式：email 优先，其次 phone
    pub fn contact(&self) -> &str {
        self.email
            .as_deref()
            .or(self.phone.as_deref())
            .unwrap_or("N/A")
    }

    /// 头像首字母（取名字首尾两个单词，最多两个字母）
    pub fn initials(&self) -> String {
        let name = match self.name.as_deref().or(self.full_name.as_deref()) {
            Some(n) if !n.trim().is_empty() => n.trim(),
            _ => return "U".to_string(),
        };
        let mut words = name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());
        match (first, last) {
            (Some(a), Some(b)) => format!("{}{}", a, b).to_uppercase(),
            (Some(a), None) => a.to_uppercase().to_string(),
            _ => "U".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
}

impl Role {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or("N/A")
    }
}

/// 订阅套餐
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagePlan {
    pub id: Option<u64>,
    pub cost: Option<f64>,
    pub translations: Vec<PackageTranslation>,
}

impl PackagePlan {
    /// 套餐名：优先英文翻译，否则取第一条
    pub fn display_name(&self) -> &str {
        self.preferred_translation()
            .map(|t| t.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("N/A")
    }

    pub fn display_content(&self) -> &str {
        self.preferred_translation()
            .map(|t| t.content.as_str())
            .filter(|c| !c.is_empty())
            .unwrap_or("N/A")
    }

    pub fn cost_label(&self) -> String {
        match self.cost {
            Some(cost) => format!("${:.2}", cost),
            None => "N/A".to_string(),
        }
    }

    fn preferred_translation(&self) -> Option<&PackageTranslation> {
        self.translations
            .iter()
            .find(|t| t.lang == Language::En)
            .or_else(|| self.translations.first())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageTranslation {
    pub lang: Language,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
}

/// GET /users/stats 的聚合计数，缺失字段一律记 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub total: u64,
    pub admins: u64,
    pub doctors: u64,
    pub staff: u64,
    pub patients: u64,
}

// =========================================================
// 会话 (Session)
// =========================================================

/// 持久化的认证记录：`{token, user}` 整体序列化为一个存储条目。
///
/// 引导时若 user 非空则进入控制台，否则回到登录页；
/// 损坏的存储数据等同于未登录。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    /// 解析持久化的原始字符串；任何解析失败都视为没有会话
    pub fn decode(raw: &str) -> Option<Session> {
        serde_json::from_str(raw).ok()
    }

    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// 纯谓词：用户缺失、权限列表缺失或不包含该权限时一律为 false，绝不报错
pub fn has_permission(user: Option<&User>, permission: &str) -> bool {
    user.and_then(|u| u.permissions.as_ref())
        .map(|perms| perms.iter().any(|p| p == permission))
        .unwrap_or(false)
}

// =========================================================
// 测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_decode_roundtrip() {
        let session = Session {
            token: Some("abc123".to_string()),
            user: Some(User {
                id: Some(7),
                name: Some("Dr. Smith".to_string()),
                ..Default::default()
            }),
        };
        let decoded = Session::decode(&session.encode()).unwrap();
        assert_eq!(decoded, session);
    }

    #[test]
    fn test_session_decode_malformed_is_none() {
        // 损坏的存储内容等同于未登录
        assert!(Session::decode("not json at all").is_none());
        assert!(Session::decode("{\"token\": 5}").is_none());
        assert!(Session::decode("[1, 2, 3]").is_none());
        assert!(Session::decode("").is_none());
    }

    #[test]
    fn test_session_decode_missing_fields_defaults() {
        let session = Session::decode("{}").unwrap();
        assert!(session.token.is_none());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_has_permission_membership() {
        let user = User {
            permissions: Some(vec![
                "appointments:view".to_string(),
                "doctors:view".to_string(),
            ]),
            ..Default::default()
        };
        assert!(has_permission(Some(&user), "appointments:view"));
        assert!(!has_permission(Some(&user), "packages:delete"));
    }

    #[test]
    fn test_has_permission_absent_user_or_list() {
        assert!(!has_permission(None, "appointments:view"));
        let user = User::default();
        assert!(!has_permission(Some(&user), "appointments:view"));
    }

    #[test]
    fn test_language_from_code() {
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_user_display_helpers() {
        let user = User {
            full_name: Some("Sara Ali".to_string()),
            phone: Some("+123".to_string()),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "Sara Ali");
        assert_eq!(user.contact(), "+123");
        assert_eq!(user.initials(), "SA");
        assert_eq!(User::default().initials(), "U");
    }

    #[test]
    fn test_package_prefers_english_translation() {
        let pkg = PackagePlan {
            id: Some(1),
            cost: Some(79.0),
            translations: vec![
                PackageTranslation {
                    lang: Language::Ar,
                    name: "المحترفة".to_string(),
                    content: String::new(),
                },
                PackageTranslation {
                    lang: Language::En,
                    name: "Professional".to_string(),
                    content: "Advanced scheduling".to_string(),
                },
            ],
        };
        assert_eq!(pkg.display_name(), "Professional");
        assert_eq!(pkg.cost_label(), "$79.00");
        assert_eq!(PackagePlan::default().display_name(), "N/A");
        assert_eq!(PackagePlan::default().cost_label(), "N/A");
    }
}
