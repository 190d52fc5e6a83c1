//! Immediate-mode GUI capability used by the editor
//!
//! The editor only draws through [`EditorUi`], which keeps the rendering
//! routines independent of a live Dear ImGui frame. The implementation for
//! [`imgui::Ui`] is the one used by applications.

use hecs::Entity;
use imgui::{Condition, DragDropFlags, TreeNodeFlags};

/// Drag-and-drop payload type carrying the raw bits of a [`hecs::Entity`]
pub const ENTITY_PAYLOAD: &str = "HECS_ENTITY";

/// The widget primitives the entity editor is drawn with
///
/// Scoped operations (`popup`, `window`, `child`, `with_id`) take the
/// contents as a closure so that begin/end pairs cannot be unbalanced.
pub trait EditorUi {
    fn text(&self, text: &str);
    fn text_disabled(&self, text: &str);
    fn same_line(&self);
    fn separator(&self);
    fn indent_by(&self, width: f32);
    fn unindent_by(&self, width: f32);

    /// Returns true when the button was clicked this frame
    fn button(&self, label: &str) -> bool;
    fn small_button(&self, label: &str) -> bool;
    fn selectable(&self, label: &str, selected: bool) -> bool;

    /// Returns true when the value was toggled this frame
    fn checkbox(&self, label: &str, value: &mut bool) -> bool;

    /// Returns true when the value changed this frame
    fn drag_float(&self, label: &str, value: &mut f32, speed: f32) -> bool;

    /// Returns true while the header is expanded
    fn collapsing_header(&self, label: &str) -> bool;

    fn open_popup(&self, id: &str);

    /// Draws `contents` only while the popup `id` is open
    fn popup(&self, id: &str, contents: &mut dyn FnMut());

    /// Draws a top-level window; `opened` is cleared when the user closes it
    fn window(&self, title: &str, opened: &mut bool, contents: &mut dyn FnMut());

    /// Draws a bordered child region of the given height
    fn child(&self, id: &str, height: f32, contents: &mut dyn FnMut());

    /// Pushes `id` onto the ID stack for the duration of `contents`
    fn with_id(&self, id: &str, contents: &mut dyn FnMut());

    /// Makes the last drawn item a drag source carrying `entity`
    fn entity_drag_source(&self, entity: Entity);

    /// Makes the last drawn item a drop target, returning a delivered entity
    fn entity_drop_target(&self) -> Option<Entity>;
}

impl EditorUi for imgui::Ui {
    fn text(&self, text: &str) {
        imgui::Ui::text(self, text);
    }

    fn text_disabled(&self, text: &str) {
        imgui::Ui::text_disabled(self, text);
    }

    fn same_line(&self) {
        imgui::Ui::same_line(self);
    }

    fn separator(&self) {
        imgui::Ui::separator(self);
    }

    fn indent_by(&self, width: f32) {
        imgui::Ui::indent_by(self, width);
    }

    fn unindent_by(&self, width: f32) {
        imgui::Ui::unindent_by(self, width);
    }

    fn button(&self, label: &str) -> bool {
        imgui::Ui::button(self, label)
    }

    fn small_button(&self, label: &str) -> bool {
        imgui::Ui::small_button(self, label)
    }

    fn selectable(&self, label: &str, selected: bool) -> bool {
        self.selectable_config(label).selected(selected).build()
    }

    fn checkbox(&self, label: &str, value: &mut bool) -> bool {
        imgui::Ui::checkbox(self, label, value)
    }

    fn drag_float(&self, label: &str, value: &mut f32, speed: f32) -> bool {
        imgui::Drag::new(label)
            .display_format("%.3f")
            .speed(speed)
            .build(self, value)
    }

    fn collapsing_header(&self, label: &str) -> bool {
        imgui::Ui::collapsing_header(self, label, TreeNodeFlags::empty())
    }

    fn open_popup(&self, id: &str) {
        imgui::Ui::open_popup(self, id);
    }

    fn popup(&self, id: &str, contents: &mut dyn FnMut()) {
        if let Some(_token) = self.begin_popup(id) {
            contents();
        }
    }

    fn window(&self, title: &str, opened: &mut bool, contents: &mut dyn FnMut()) {
        imgui::Ui::window(self, title)
            .size([400.0, 500.0], Condition::FirstUseEver)
            .opened(opened)
            .build(|| contents());
    }

    fn child(&self, id: &str, height: f32, contents: &mut dyn FnMut()) {
        self.child_window(id)
            .size([0.0, height])
            .border(true)
            .build(|| contents());
    }

    fn with_id(&self, id: &str, contents: &mut dyn FnMut()) {
        let _id = self.push_id(id);
        contents();
    }

    fn entity_drag_source(&self, entity: Entity) {
        if let Some(tooltip) = self
            .drag_drop_source_config(ENTITY_PAYLOAD)
            .begin_payload(entity.to_bits().get())
        {
            imgui::Ui::text(self, format!("ID: {}", entity.id()));
            tooltip.end();
        }
    }

    fn entity_drop_target(&self) -> Option<Entity> {
        let target = self.drag_drop_target()?;
        let dropped = target
            .accept_payload::<u64, _>(ENTITY_PAYLOAD, DragDropFlags::empty())
            .and_then(Result::ok)
            .and_then(|payload| Entity::from_bits(payload.data));
        target.pop();
        dropped
    }
}
