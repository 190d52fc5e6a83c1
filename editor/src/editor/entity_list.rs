//! Entity list with component filters
//!
//! The filter set lives in [`EntityListState`], owned by the caller and
//! passed in every frame. With no filters the list shows orphan entities;
//! otherwise it shows entities holding every filtered component.

use super::{component_scope, EntityEditor};
use crate::storage;
use crate::ui::EditorUi;
use crate::widgets;
use hecs::{Entity, World};
use std::any::TypeId;
use std::collections::BTreeSet;
use tracing::debug;

/// Component filter set for the entity list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityListState {
    pub filter: BTreeSet<TypeId>,
}

impl EntityListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove `type_id` from the filter
    pub fn set(&mut self, type_id: TypeId, enabled: bool) {
        if enabled {
            self.filter.insert(type_id);
        } else {
            self.filter.remove(&type_id);
        }
    }

    /// Flip the membership of `type_id`
    pub fn toggle(&mut self, type_id: TypeId) {
        let enabled = !self.filter.contains(&type_id);
        self.set(type_id, enabled);
    }

    pub fn contains(&self, type_id: TypeId) -> bool {
        self.filter.contains(&type_id)
    }

    pub fn clear(&mut self) {
        self.filter.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.filter.is_empty()
    }
}

/// Selection and list filter for the combined view
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    pub selected: Option<Entity>,
    pub list: EntityListState,
}

/// Entities the list shows for `state`, read fresh from the world
pub fn visible_entities(world: &World, state: &EntityListState) -> Vec<Entity> {
    if state.is_empty() {
        storage::orphans(world)
    } else {
        storage::entities_with_all(world, &state.filter)
    }
}

impl<U: EditorUi + 'static> EntityEditor<U> {
    /// Draw the filter checkboxes and the matching entities
    ///
    /// Clicking an entity selects it.
    pub fn render_entity_list(
        &self,
        ui: &U,
        world: &World,
        state: &mut EntityListState,
        selected: &mut Option<Entity>,
    ) {
        ui.text("Components Filter:");
        ui.same_line();
        if ui.small_button("clear") {
            debug!("Cleared entity list filter");
            state.clear();
        }

        ui.indent_by(self.settings.component_indent);
        for (type_id, info) in self.registry.iter() {
            ui.with_id(&component_scope(type_id), &mut || {
                let mut enabled = state.contains(type_id);
                if ui.checkbox(&info.name, &mut enabled) {
                    debug!(component = %info.name, enabled, "Toggled entity list filter");
                    state.set(type_id, enabled);
                }
            });
        }
        ui.unindent_by(self.settings.component_indent);
        ui.separator();

        let entities = visible_entities(world, state);
        if state.is_empty() {
            ui.text(&format!("Orphans: {}", entities.len()));
        } else {
            ui.text(&format!("Filtered Entities: {}", entities.len()));
        }

        let drag_drop = self.settings.entity_drag_drop;
        ui.child("entity list", self.settings.list_height, &mut || {
            for &entity in &entities {
                ui.with_id(&format!("entity{}", entity.to_bits()), &mut || {
                    let mut handle = Some(entity);
                    let is_selected = *selected == handle;
                    let clicked = if drag_drop {
                        widgets::entity_widget(ui, world, &mut handle, is_selected, false)
                    } else {
                        ui.selectable(&widgets::entity_label(world, handle), is_selected)
                    };

                    if clicked && *selected != handle {
                        debug!(entity = ?entity, "Selected entity from list");
                        *selected = handle;
                    }
                });
            }
        });
    }

    /// Draw the entity list in its own window
    pub fn render_entity_list_window(
        &mut self,
        ui: &U,
        world: &World,
        state: &mut EntityListState,
        selected: &mut Option<Entity>,
    ) {
        if !self.show_list_window {
            return;
        }

        let mut open = self.show_list_window;
        let title = self.settings.list_window_title.clone();
        ui.window(&title, &mut open, &mut || {
            self.render_entity_list(ui, world, state, selected)
        });
        self.show_list_window = open;
    }
}
