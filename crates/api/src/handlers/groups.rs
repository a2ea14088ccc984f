use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use rbac_admin_application::params::GroupParam;
use rbac_admin_domain::PageRequest;
use tracing::debug;

use crate::{
    dto::{
        CreateGroupRequest, GroupListResponse, GroupResponse, PagedGroupsResponse,
        UpdateGroupRequest,
    },
    errors::ApiError,
    state::AppState,
};

const INDEX_MESSAGE: &str = "Groups retrieved successfully";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/groups", get(get_all_groups))
        .route("/groups", post(create_group))
        .route("/groups/page", get(get_groups_page))
        .route("/groups/by-name/{name}", get(get_group_by_name))
        .route("/groups/{id}", get(get_group_by_id))
        .route("/groups/{id}", put(update_group))
        .route("/groups/{id}", delete(delete_group))
}

async fn get_all_groups(
    State(state): State<AppState>,
) -> Result<Json<GroupListResponse>, ApiError> {
    let groups = state.get_groups.get_all().await?;
    let groups: Vec<GroupResponse> = groups
        .into_iter()
        .map(|g| GroupResponse::from_group(g, None))
        .collect();
    debug!(count = groups.len(), "Groups retrieved successfully");
    Ok(Json(GroupListResponse {
        message: INDEX_MESSAGE.to_string(),
        groups,
    }))
}

async fn get_groups_page(
    State(state): State<AppState>,
    Query(request): Query<PageRequest>,
) -> Result<Json<PagedGroupsResponse>, ApiError> {
    let page = state.get_groups.get_page(request).await?;
    let data: Vec<GroupResponse> = page
        .items
        .into_iter()
        .map(|g| GroupResponse::from_group(g, None))
        .collect();
    debug!(
        count = data.len(),
        total = page.total,
        "Group page retrieved successfully"
    );
    Ok(Json(PagedGroupsResponse {
        message: INDEX_MESSAGE.to_string(),
        data,
        total: page.total,
        page: page.page,
        size: page.size,
    }))
}

async fn get_group_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GroupResponse>, ApiError> {
    let group = state.get_groups.get_by_id(id).await?;
    Ok(Json(GroupResponse::from_group(group, None)))
}

async fn get_group_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<GroupResponse>, ApiError> {
    let group = state.get_groups.get_by_name(&name).await?;
    Ok(Json(GroupResponse::from_group(group, None)))
}

async fn create_group(
    State(state): State<AppState>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<(StatusCode, Json<GroupResponse>), ApiError> {
    let param = GroupParam {
        name: req.name,
        resource_ids: req.resource_ids,
        role_ids: req.role_ids,
    };
    let group = state.create_group.execute(param).await?;
    Ok((
        StatusCode::CREATED,
        Json(GroupResponse::from_group(
            group,
            Some("Group created successfully".to_string()),
        )),
    ))
}

async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateGroupRequest>,
) -> Result<Json<GroupResponse>, ApiError> {
    let param = GroupParam {
        name: req.name,
        resource_ids: req.resource_ids,
        role_ids: req.role_ids,
    };
    let group = state.update_group.execute(id, param).await?;
    Ok(Json(GroupResponse::from_group(
        group,
        Some("Group updated successfully".to_string()),
    )))
}

async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.delete_group.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
