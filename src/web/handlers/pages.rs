// Page handlers for HTML rendering with Askama

use std::sync::Arc;

use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use crate::api_server::{AppError, AppState};
use crate::binder::ViewBinder;
use crate::params::RouteParams;
use crate::section::SectionDescriptor;
use crate::view_model::ViewModel;

// ============================================================================
// Dynamic Section Test Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/dyna_test.html")]
pub struct DynaTestTemplate {
    pub title: String,
    pub parent_kind: String,
    pub parent_id: String,
    pub entity_kind: String,
    pub entity_id: String,
    pub section: Option<Arc<SectionDescriptor>>,
}

impl From<ViewModel> for DynaTestTemplate {
    fn from(vm: ViewModel) -> Self {
        let (entity_kind, entity_id) = vm
            .entity_ref
            .as_ref()
            .map(|r| (r.kind_display().to_string(), r.id_display()))
            .unwrap_or_default();

        let title = match &vm.section {
            Some(section) => format!("{} - Dynamic Section Test", section.name),
            None => "Dynamic Section Test".to_string(),
        };

        Self {
            title,
            parent_kind: vm.parent_entity_ref.kind_display().to_string(),
            parent_id: vm.parent_entity_ref.id_display(),
            entity_kind,
            entity_id,
            section: vm.section,
        }
    }
}

pub fn render_view_model(vm: ViewModel) -> Result<String, AppError> {
    DynaTestTemplate::from(vm)
        .render()
        .map_err(|e| AppError::Template(e.to_string()))
}

pub async fn dyna_test_page(
    State(state): State<AppState>,
    Path(params): Path<RouteParams>,
) -> Result<Html<String>, AppError> {
    let cache_key = params.cache_key();

    if let Some(cached) = state.page_cache.get(&cache_key).await {
        tracing::debug!("Cache hit for page {}", cache_key);
        return Ok(Html(cached));
    }

    let mut binder = ViewBinder::new(state.registry.clone());
    binder.activate(&params);
    let page = render_view_model(binder.into_view_model())?;

    state.page_cache.insert(cache_key, page.clone()).await;

    Ok(Html(page))
}
