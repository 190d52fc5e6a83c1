//! Reusable widgets for entity handles and component fields
//!
//! These are what component render callbacks are expected to build with.

use crate::storage;
use crate::ui::EditorUi;
use glam::Vec3;
use hecs::{Entity, World};
use tracing::debug;

/// Label for an entity handle: its id, or "Invalid Entity" when dead or unset
pub fn entity_label(world: &World, entity: Option<Entity>) -> String {
    match storage::live(world, entity) {
        Some(entity) => format!("ID: {}", entity.id()),
        None => "Invalid Entity".to_string(),
    }
}

/// Draw an entity handle
///
/// Live entities act as drag sources. With `drop_target`, an entity dropped
/// onto the widget replaces `entity`. `selected` highlights the entry.
/// Returns true when clicked.
pub fn entity_widget<U: EditorUi>(
    ui: &U,
    world: &World,
    entity: &mut Option<Entity>,
    selected: bool,
    drop_target: bool,
) -> bool {
    let clicked = ui.selectable(&entity_label(world, *entity), selected);

    if let Some(live) = storage::live(world, *entity) {
        ui.entity_drag_source(live);
    }

    if drop_target {
        if let Some(dropped) = ui.entity_drop_target() {
            debug!(from = ?*entity, to = ?dropped, "Entity reference dropped");
            *entity = Some(dropped);
        }
    }

    clicked
}

/// Editable entity reference for component fields
///
/// Accepts entities dragged from the entity list; "x" clears the reference.
/// Returns true when the reference changed.
pub fn entity_ref_field<U: EditorUi>(
    ui: &U,
    label: &str,
    world: &World,
    entity: &mut Option<Entity>,
) -> bool {
    let before = *entity;

    ui.with_id(label, &mut || {
        ui.text(label);
        ui.same_line();
        entity_widget(ui, world, entity, false, true);
        if entity.is_some() {
            ui.same_line();
            if ui.small_button("x") {
                *entity = None;
            }
        }
    });

    before != *entity
}

/// Drag a single float; returns true when it changed
pub fn drag_f32<U: EditorUi>(ui: &U, label: &str, value: &mut f32) -> bool {
    ui.drag_float(label, value, 0.01)
}

/// Drag the three axes of a vector; returns true when any axis changed
pub fn drag_vec3<U: EditorUi>(ui: &U, label: &str, value: &mut Vec3) -> bool {
    let mut changed = false;

    ui.with_id(label, &mut || {
        ui.text(&format!("{label}:"));
        for (axis, name) in ["X", "Y", "Z"].into_iter().enumerate() {
            let mut component = value[axis];
            if ui.drag_float(name, &mut component, 0.01) {
                value[axis] = component;
                changed = true;
            }
        }
    });

    changed
}
