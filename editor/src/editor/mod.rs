//! Entity editor
//!
//! Per-frame rendering of one entity's components against the component
//! registry. The editor keeps no per-entity state: the selected entity is
//! owned by the caller and component presence is read from the world each
//! time it is drawn.

pub mod entity_list;

use crate::registry::{ComponentInfo, ComponentRegistry};
use crate::settings::EditorSettings;
use crate::storage;
use crate::ui::EditorUi;
use hecs::{Entity, World};
use std::any::TypeId;
use tracing::{debug, warn};

pub use entity_list::{visible_entities, EditorSession, EntityListState};

/// ID of the popup listing components the entity does not have
pub const ADD_COMPONENT_POPUP: &str = "Add Component";

/// ID scope for a component's widgets; display names need not be unique
pub fn component_scope(type_id: TypeId) -> String {
    format!("{type_id:?}")
}

/// ImGui entity editor over a component registry
pub struct EntityEditor<U = imgui::Ui> {
    registry: ComponentRegistry<U>,
    settings: EditorSettings,
    /// Whether `render` draws its window; cleared by the window's close button
    pub show_window: bool,
    /// Whether `render_entity_list_window` draws its window
    pub show_list_window: bool,
}

impl<U: EditorUi + 'static> Default for EntityEditor<U> {
    fn default() -> Self {
        Self::with_settings(EditorSettings::default())
    }
}

impl<U: EditorUi + 'static> EntityEditor<U> {
    /// Create an editor with default settings and no registered components
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: EditorSettings) -> Self {
        Self {
            registry: ComponentRegistry::new(),
            settings,
            show_window: true,
            show_list_window: true,
        }
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EditorSettings {
        &mut self.settings
    }

    pub fn registry(&self) -> &ComponentRegistry<U> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ComponentRegistry<U> {
        &mut self.registry
    }

    /// Register `T` without a field widget
    pub fn register<T>(&mut self, name: impl Into<String>) -> &mut ComponentInfo<U>
    where
        T: hecs::Component + Default,
    {
        self.registry.register::<T>(name)
    }

    /// Register `T` with a field widget
    pub fn register_with<T>(
        &mut self,
        name: impl Into<String>,
        render: impl Fn(&U, &mut World, Entity) + 'static,
    ) -> &mut ComponentInfo<U>
    where
        T: hecs::Component + Default,
    {
        self.registry.register_with::<T>(name, render)
    }

    /// Register `T` with a complete record
    pub fn register_info<T: 'static>(&mut self, info: ComponentInfo<U>) -> &mut ComponentInfo<U> {
        self.registry.register_info::<T>(info)
    }

    /// Draw the editor window for `selected`
    pub fn render(&mut self, ui: &U, world: &mut World, selected: &mut Option<Entity>) {
        if !self.show_window {
            return;
        }

        let mut open = self.show_window;
        let title = self.settings.editor_window_title.clone();
        ui.window(&title, &mut open, &mut || self.render_editor(ui, world, selected));

        if !open {
            debug!("Entity editor window closed");
        }
        self.show_window = open;
    }

    /// Draw the editor contents without a window
    pub fn render_editor(&self, ui: &U, world: &mut World, selected: &mut Option<Entity>) {
        ui.text("Editing:");
        ui.same_line();
        match storage::live(world, *selected) {
            Some(entity) => ui.text(&crate::widgets::entity_label(world, Some(entity))),
            None => ui.text_disabled("Invalid Entity"),
        }

        if ui.button("New Entity") {
            let entity = world.spawn(());
            debug!(entity = ?entity, "Created entity");
            *selected = Some(entity);
        }

        let Some(entity) = storage::live(world, *selected) else {
            ui.separator();
            return;
        };

        ui.same_line();
        if ui.button("Destroy Entity") {
            if let Err(e) = world.despawn(entity) {
                warn!(entity = ?entity, "Failed to destroy entity: {}", e);
            } else {
                debug!(entity = ?entity, "Destroyed entity");
            }
            *selected = None;
            ui.separator();
            return;
        }

        ui.separator();

        let scope = format!("entity{}", entity.to_bits());
        ui.with_id(&scope, &mut || self.render_components(ui, world, entity));
    }

    fn render_components(&self, ui: &U, world: &mut World, entity: Entity) {
        let mut missing: Vec<(TypeId, &ComponentInfo<U>)> = Vec::new();

        for (type_id, info) in self.registry.iter() {
            if !storage::has_component(world, entity, type_id) {
                missing.push((type_id, info));
                continue;
            }

            ui.with_id(&component_scope(type_id), &mut || {
                if ui.small_button("-") {
                    match (info.destroy)(world, entity) {
                        Ok(()) => debug!(entity = ?entity, component = %info.name, "Removed component"),
                        Err(e) => warn!(
                            entity = ?entity,
                            component = %info.name,
                            "Failed to remove component: {}", e
                        ),
                    }
                    // the component is gone; do not draw or render it this frame
                    return;
                }
                ui.same_line();

                if ui.collapsing_header(&info.name) {
                    ui.indent_by(self.settings.component_indent);
                    (info.render)(ui, world, entity);
                    ui.unindent_by(self.settings.component_indent);
                }
            });
        }

        if missing.is_empty() {
            return;
        }

        if ui.button("+ Add Component") {
            ui.open_popup(ADD_COMPONENT_POPUP);
        }

        ui.popup(ADD_COMPONENT_POPUP, &mut || {
            ui.text("Available:");
            ui.separator();

            for &(type_id, info) in &missing {
                ui.with_id(&component_scope(type_id), &mut || {
                    if ui.selectable(&info.name, false) {
                        match (info.create)(world, entity) {
                            Ok(()) => {
                                debug!(entity = ?entity, component = %info.name, "Added component")
                            }
                            Err(e) => warn!(
                                entity = ?entity,
                                component = %info.name,
                                "Failed to add component: {}", e
                            ),
                        }
                    }
                });
            }
        });
    }

    /// Draw the entity list and the editor in one window
    pub fn render_combo(&mut self, ui: &U, world: &mut World, session: &mut EditorSession) {
        if !self.show_window {
            return;
        }

        let mut open = self.show_window;
        let title = self.settings.combo_window_title.clone();
        ui.window(&title, &mut open, &mut || {
            self.render_entity_list(ui, world, &mut session.list, &mut session.selected);
            ui.separator();
            self.render_editor(ui, world, &mut session.selected);
        });
        self.show_window = open;
    }
}
