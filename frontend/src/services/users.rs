//! /users 端点的类型化封装

use crate::api::{ApiClient, ApiError};
use clinicboard_shared::protocol::{ListEnvelope, ListQuery, UserPayload, endpoints};
use clinicboard_shared::{User, UserStats};

pub async fn list(api: &ApiClient, query: &ListQuery) -> Result<ListEnvelope<User>, ApiError> {
    api.get_json(endpoints::USERS, &query.to_pairs()).await
}

#[allow(dead_code)]
pub async fn get(api: &ApiClient, id: u64) -> Result<User, ApiError> {
    api.get_json(&endpoints::users_detail(id), &[]).await
}

pub async fn create(api: &ApiClient, payload: &UserPayload) -> Result<User, ApiError> {
    api.post_json(endpoints::USERS, payload).await
}

pub async fn update(api: &ApiClient, id: u64, payload: &UserPayload) -> Result<User, ApiError> {
    api.put_json(&endpoints::users_detail(id), payload).await
}

pub async fn stats(api: &ApiClient) -> Result<UserStats, ApiError> {
    api.get_json(endpoints::USERS_STATS, &[]).await
}
