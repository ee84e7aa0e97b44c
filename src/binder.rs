//! View Binder - populates the view model from route parameters
//!
//! One binder per page view. Activation reads the entity reference straight
//! from the route and resolves the requested section against the shared
//! registry. A missing section is not an error; the view model simply has
//! no section.

use std::sync::Arc;

use crate::params::RouteParams;
use crate::registry::SectionRegistry;
use crate::view_model::ViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderPhase {
    Uninitialized,
    Activated,
}

pub struct ViewBinder {
    registry: Arc<SectionRegistry>,
    view_model: ViewModel,
    phase: BinderPhase,
}

impl ViewBinder {
    pub fn new(registry: Arc<SectionRegistry>) -> Self {
        Self {
            registry,
            view_model: ViewModel::initial(),
            phase: BinderPhase::Uninitialized,
        }
    }

    /// Bind the view model to a route parameter snapshot
    pub fn activate(&mut self, params: &RouteParams) -> &ViewModel {
        tracing::debug!(?params, "init");

        self.view_model.entity_ref = Some(params.entity_ref());
        self.view_model.section = params
            .section_id
            .as_deref()
            .and_then(|raw| self.registry.get(raw))
            .cloned();

        if self.view_model.section.is_none() {
            tracing::debug!(section_id = ?params.section_id, "no registered section for id");
        }

        self.phase = BinderPhase::Activated;
        &self.view_model
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn phase(&self) -> BinderPhase {
        self.phase
    }

    pub fn into_view_model(self) -> ViewModel {
        self.view_model
    }
}
