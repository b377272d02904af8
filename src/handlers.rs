use crate::errors::AppError;
use crate::models::{ItemEnvelope, ItemList, ToDoItem};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::surface::{HtmlSurface, Tab};
use crate::ui::render_index;
use crate::views::{ChronologicalView, RenderInput, TagsView, View};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub deployment: Option<String>,
    #[serde(default)]
    pub tab: Tab,
}

pub async fn index(State(state): State<AppState>, Query(query): Query<IndexQuery>) -> Html<String> {
    let deployment = query
        .deployment
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| state.default_deployment.clone());

    let items = {
        let data = state.data.lock().await;
        data.deployments
            .get(&deployment)
            .map(|stored| stored.items.clone())
            .unwrap_or_default()
    };

    let mut surface = HtmlSurface::new();
    let input = RenderInput::Items(&items);
    match query.tab {
        Tab::Newest => ChronologicalView::newest().render(input, &mut surface),
        Tab::Oldest => ChronologicalView::oldest().render(input, &mut surface),
        Tab::Tags => TagsView.render(input, &mut surface),
    }

    Html(render_index(&deployment, query.tab, &surface))
}

pub async fn list(State(state): State<AppState>, Path(deployment): Path<String>) -> Json<ItemList> {
    let data = state.data.lock().await;
    let items = data
        .deployments
        .get(&deployment)
        .map(|stored| stored.items.clone())
        .unwrap_or_default();
    Json(ItemList { items })
}

pub async fn add(
    State(state): State<AppState>,
    Path(deployment): Path<String>,
    Json(item): Json<ToDoItem>,
) -> Result<(StatusCode, Json<ItemEnvelope>), AppError> {
    if item.description.trim().is_empty() {
        return Err(AppError::bad_request("description must not be empty"));
    }

    let mut data = state.data.lock().await;
    let stored = data.deployments.entry(deployment.clone()).or_default().insert(item);
    persist_data(&state.data_path, &data).await?;

    info!(%deployment, id = ?stored.id, "item added");
    Ok((StatusCode::CREATED, Json(ItemEnvelope { item: stored })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path((deployment, id)): Path<(String, u64)>,
) -> Result<Json<ItemEnvelope>, AppError> {
    let mut data = state.data.lock().await;
    let removed = data
        .deployments
        .get_mut(&deployment)
        .and_then(|stored| stored.remove(id))
        .ok_or_else(|| AppError::not_found(format!("no item with id {id}")))?;
    persist_data(&state.data_path, &data).await?;

    info!(%deployment, id, "item removed");
    Ok(Json(ItemEnvelope { item: removed }))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path((deployment, id)): Path<(String, u64)>,
) -> Result<Json<ItemEnvelope>, AppError> {
    let data = state.data.lock().await;
    let item = data
        .deployments
        .get(&deployment)
        .and_then(|stored| stored.find(id))
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("no item with id {id}")))?;
    Ok(Json(ItemEnvelope { item }))
}

pub async fn update(
    State(state): State<AppState>,
    Path(deployment): Path<String>,
    Json(item): Json<ToDoItem>,
) -> Result<Json<ItemEnvelope>, AppError> {
    let Some(id) = item.id else {
        return Err(AppError::bad_request("item id is required"));
    };

    let mut data = state.data.lock().await;
    let updated = data
        .deployments
        .get_mut(&deployment)
        .and_then(|stored| stored.replace(item))
        .ok_or_else(|| AppError::not_found(format!("no item with id {id}")))?;
    persist_data(&state.data_path, &data).await?;

    info!(%deployment, id, "item updated");
    Ok(Json(ItemEnvelope { item: updated }))
}
