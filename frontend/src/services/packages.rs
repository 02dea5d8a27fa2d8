//! /packages 端点的类型化封装

use crate::api::{ApiClient, ApiError};
use clinicboard_shared::protocol::{ListEnvelope, ListQuery, PackagePayload, endpoints};
use clinicboard_shared::PackagePlan;

pub async fn list(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<ListEnvelope<PackagePlan>, ApiError> {
    api.get_json(endpoints::PACKAGES, &query.to_pairs()).await
}

#[allow(dead_code)]
pub async fn get(api: &ApiClient, id: u64) -> Result<PackagePlan, ApiError> {
    api.get_json(&endpoints::packages_detail(id), &[]).await
}

pub async fn create(api: &ApiClient, payload: &PackagePayload) -> Result<PackagePlan, ApiError> {
    api.post_json(endpoints::PACKAGES, payload).await
}

pub async fn update(
    api: &ApiClient,
    id: u64,
    payload: &PackagePayload,
) -> Result<PackagePlan, ApiError> {
    api.patch_json(&endpoints::packages_detail(id), payload).await
}

pub async fn delete(api: &ApiClient, id: u64) -> Result<(), ApiError> {
    api.delete_unit(&endpoints::packages_detail(id)).await
}
