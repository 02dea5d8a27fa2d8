//! /roles 端点的类型化封装

use crate::api::{ApiClient, ApiError};
use clinicboard_shared::Role;
use clinicboard_shared::protocol::{RolesResponse, endpoints};

/// 裸数组和 `{data}` 包裹两种响应形状都接受
pub async fn list(api: &ApiClient) -> Result<Vec<Role>, ApiError> {
    let response: RolesResponse = api.get_json(endpoints::ROLES, &[]).await?;
    Ok(response.into_roles())
}
