//! HTTP 网关
//!
//! 所有出站请求的唯一通道：统一附加凭据与语言头、
//! 统一做错误分类与日志。网关从不重试、从不缓存、
//! 从不吞掉错误——分类之后原样交还调用方。

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::use_context;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::i18n;
use crate::session::SessionStore;
use clinicboard_shared::HEADER_LANG;

/// 本地开发时的后端地址
const LOCAL_DEV_BASE: &str = "http://localhost:3000/api";

/// 解析基址：构建期配置优先；发布构建缺配置时退到同源相对路径
/// 并留下警告；其余情况用本地开发默认值。
fn resolve_base_url() -> String {
    if let Some(configured) = option_env!("CLINICBOARD_API_BASE") {
        return configured.trim_end_matches('/').to_string();
    }
    if cfg!(debug_assertions) {
        LOCAL_DEV_BASE.to_string()
    } else {
        console_warn("[api] CLINICBOARD_API_BASE 未配置，回退到同源 /api");
        "/api".to_string()
    }
}

fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}

fn console_warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

// =========================================================
// 错误类型
// =========================================================

/// 出站请求的失败分类
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 服务端返回了错误状态码，附带可选的 message / error 字段
    Status {
        status: u16,
        message: Option<String>,
        error: Option<String>,
    },
    /// 请求已发出但没有收到响应（网络/超时）
    Network(String),
    /// 请求根本没能构建或发出
    Request(String),
    /// 2xx 响应体无法解析为期望的类型
    Decode(String),
}

impl ApiError {
    /// 提取给用户看的消息：服务端 message > error > 调用方的兜底文案
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message, error, .. } => message
                .clone()
                .or_else(|| error.clone())
                .unwrap_or_else(|| fallback.to_string()),
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Status { status, .. } => write!(f, "服务端错误: {}", status),
            ApiError::Network(msg) => write!(f, "网络错误: {}", msg),
            ApiError::Request(msg) => write!(f, "请求构建失败: {}", msg),
            ApiError::Decode(msg) => write!(f, "响应解析失败: {}", msg),
        }
    }
}

/// 服务端错误响应体（两个字段都可能缺失）
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

// =========================================================
// 网关客户端
// =========================================================

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    store: SessionStore,
}

impl ApiClient {
    pub fn new(store: SessionStore) -> Self {
        Self {
            base_url: resolve_base_url(),
            store,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 每个请求都重新构建，所以上一次的凭据头不可能残留；
    /// 语言头不区分认证状态，始终携带。
    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header("Content-Type", "application/json")
            .header(HEADER_LANG, i18n::current_language().as_str());
        match self.store.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    fn build_error(&self, url: &str, err: gloo_net::Error) -> ApiError {
        console_error(&format!("[api] 请求构建失败: {err} (url: {url})"));
        ApiError::Request(err.to_string())
    }

    /// 发送并分类：网络失败记录目标与基址；错误状态记录状态码与响应体
    async fn dispatch(&self, url: &str, request: Request) -> Result<Response, ApiError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                console_error(&format!(
                    "[api] 网络错误: {err} (url: {url}, base: {})",
                    self.base_url
                ));
                return Err(ApiError::Network(err.to_string()));
            }
        };
        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            console_error(&format!("[api] 服务端错误: {status} {body}"));
            let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
            return Err(ApiError::Status {
                status,
                message: parsed.message,
                error: parsed.error,
            });
        }
        Ok(response)
    }

    async fn complete<T: DeserializeOwned>(
        &self,
        url: &str,
        request: Request,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(url, request).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn complete_unit(&self, url: &str, request: Request) -> Result<(), ApiError> {
        self.dispatch(url, request).await.map(|_| ())
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let mut builder = self.with_headers(Request::get(&url));
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        let request = builder.build().map_err(|err| self.build_error(&url, err))?;
        self.complete(&url, request).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = self
            .with_headers(Request::post(&url))
            .json(body)
            .map_err(|err| self.build_error(&url, err))?;
        self.complete(&url, request).await
    }

    /// POST 后端不关心响应体的端点（如注册）
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(path);
        let request = self
            .with_headers(Request::post(&url))
            .json(body)
            .map_err(|err| self.build_error(&url, err))?;
        self.complete_unit(&url, request).await
    }

    /// 无请求体的 POST（如登出）
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        let request = self
            .with_headers(Request::post(&url))
            .build()
            .map_err(|err| self.build_error(&url, err))?;
        self.complete_unit(&url, request).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = self
            .with_headers(Request::put(&url))
            .json(body)
            .map_err(|err| self.build_error(&url, err))?;
        self.complete(&url, request).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = self
            .with_headers(Request::patch(&url))
            .json(body)
            .map_err(|err| self.build_error(&url, err))?;
        self.complete(&url, request).await
    }

    pub async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        let request = self
            .with_headers(Request::delete(&url))
            .build()
            .map_err(|err| self.build_error(&url, err))?;
        self.complete_unit(&url, request).await
    }
}

/// 从 Context 获取网关客户端
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = ApiError::Status {
            status: 422,
            message: Some("Phone already taken".to_string()),
            error: Some("VALIDATION".to_string()),
        };
        assert_eq!(err.user_message("fallback"), "Phone already taken");
    }

    #[test]
    fn test_user_message_falls_back_to_error_then_default() {
        let err = ApiError::Status {
            status: 500,
            message: None,
            error: Some("boom".to_string()),
        };
        assert_eq!(err.user_message("fallback"), "boom");

        let err = ApiError::Status {
            status: 500,
            message: None,
            error: None,
        };
        assert_eq!(err.user_message("fallback"), "fallback");

        let err = ApiError::Network("timeout".to_string());
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_error_body_tolerates_unknown_shapes() {
        let parsed: ErrorBody = serde_json::from_str(r#"{"message": "m"}"#).unwrap();
        assert_eq!(parsed.message.as_deref(), Some("m"));
        let parsed: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(parsed.message.is_none() && parsed.error.is_none());
        assert!(serde_json::from_str::<ErrorBody>("not json").is_err());
    }
}
