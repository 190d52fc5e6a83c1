//! ImGui entity editor for hecs worlds
//!
//! Register component types once with a display name and an optional field
//! widget, then call one of the render methods every frame:
//!
//! - [`EntityEditor::render`] edits the selected entity's components,
//! - [`EntityEditor::render_entity_list`] lists entities by component filter,
//! - [`EntityEditor::render_combo`] shows both in one window.
//!
//! ```no_run
//! use entity_editor::{widgets, EditorSession, EntityEditor};
//!
//! #[derive(Default)]
//! struct Position(glam::Vec3);
//!
//! let mut editor: EntityEditor = EntityEditor::new();
//! editor.register_with::<Position>("Position", |ui, world, entity| {
//!     if let Ok(mut position) = world.get::<&mut Position>(entity) {
//!         widgets::drag_vec3(ui, "Position", &mut position.0);
//!     }
//! });
//!
//! let mut world = hecs::World::new();
//! let mut session = EditorSession::default();
//! # let ui: &imgui::Ui = unimplemented!();
//! editor.render_combo(ui, &mut world, &mut session);
//! ```

pub mod editor;
pub mod error;
pub mod registry;
pub mod settings;
pub mod storage;
pub mod ui;
pub mod widgets;

#[cfg(test)]
mod test_ui;

pub use editor::{visible_entities, EditorSession, EntityEditor, EntityListState};
pub use error::EditorError;
pub use registry::{ComponentInfo, ComponentRegistry};
pub use settings::EditorSettings;
pub use ui::{EditorUi, ENTITY_PAYLOAD};

/// Initialize logging for applications embedding the editor
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
