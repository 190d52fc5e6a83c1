//! Scripted [`EditorUi`] used by unit tests
//!
//! Records every widget with its ID path (`scope/scope/label`), replays
//! queued clicks and drops, and keeps popups open across frames the way
//! Dear ImGui does.

use crate::ui::EditorUi;
use hecs::Entity;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Text,
    TextDisabled,
    Button,
    SmallButton,
    Selectable,
    Checkbox,
    Drag,
    Header,
    Popup,
    Window,
    Child,
    DragSource,
}

#[derive(Debug, Clone)]
pub(crate) struct Drawn {
    pub kind: Kind,
    pub path: String,
    pub label: String,
    pub entity: Option<Entity>,
    pub selected: bool,
}

#[derive(Default)]
pub(crate) struct ScriptedUi {
    id_stack: RefCell<Vec<String>>,
    drawn: RefCell<Vec<Drawn>>,
    last_item: RefCell<String>,
    clicks: RefCell<Vec<String>>,
    drops: RefCell<Vec<(String, Entity)>>,
    drags: RefCell<HashMap<String, f32>>,
    open_popups: RefCell<HashSet<String>>,
    popup_stack: RefCell<Vec<String>>,
    collapsed: RefCell<HashSet<String>>,
    close_windows: RefCell<HashSet<String>>,
    indent: Cell<f32>,
}

fn visible(label: &str) -> &str {
    label.split("##").next().unwrap_or(label)
}

fn matches(path: &str, pattern: &str) -> bool {
    path == pattern || path.ends_with(&format!("/{pattern}"))
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a click on the next widget whose path ends with `pattern`
    pub fn click(&self, pattern: &str) {
        self.clicks.borrow_mut().push(pattern.to_string());
    }

    /// Queue an entity drop on the next drop target whose path ends with `pattern`
    pub fn drop_entity(&self, pattern: &str, entity: Entity) {
        self.drops.borrow_mut().push((pattern.to_string(), entity));
    }

    /// Queue a new value for the next drag widget whose path ends with `pattern`
    pub fn drag(&self, pattern: &str, value: f32) {
        self.drags.borrow_mut().insert(pattern.to_string(), value);
    }

    pub fn collapse(&self, pattern: &str) {
        self.collapsed.borrow_mut().insert(pattern.to_string());
    }

    /// Simulate the close button of the window titled `title`
    pub fn close_window(&self, title: &str) {
        self.close_windows.borrow_mut().insert(title.to_string());
    }

    /// Forget what was drawn; queued input and open popups are kept
    pub fn new_frame(&self) {
        self.drawn.borrow_mut().clear();
        self.id_stack.borrow_mut().clear();
    }

    pub fn drawn(&self) -> Vec<Drawn> {
        self.drawn.borrow().clone()
    }

    pub fn labels(&self, kind: Kind) -> Vec<String> {
        self.drawn
            .borrow()
            .iter()
            .filter(|drawn| drawn.kind == kind)
            .map(|drawn| drawn.label.clone())
            .collect()
    }

    pub fn paths(&self, kind: Kind) -> Vec<String> {
        self.drawn
            .borrow()
            .iter()
            .filter(|drawn| drawn.kind == kind)
            .map(|drawn| drawn.path.clone())
            .collect()
    }

    pub fn has(&self, kind: Kind, pattern: &str) -> bool {
        self.paths(kind).iter().any(|path| matches(path, pattern))
    }

    /// Labels of selectables drawn highlighted
    pub fn selected_labels(&self) -> Vec<String> {
        self.drawn
            .borrow()
            .iter()
            .filter(|drawn| drawn.kind == Kind::Selectable && drawn.selected)
            .map(|drawn| drawn.label.clone())
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.labels(Kind::Text)
    }

    pub fn drag_sources(&self) -> Vec<Entity> {
        self.drawn
            .borrow()
            .iter()
            .filter(|drawn| drawn.kind == Kind::DragSource)
            .filter_map(|drawn| drawn.entity)
            .collect()
    }

    pub fn indent(&self) -> f32 {
        self.indent.get()
    }

    fn path_of(&self, label: &str) -> String {
        let mut path = self.id_stack.borrow().join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(visible(label));
        path
    }

    fn record(&self, kind: Kind, label: &str) -> String {
        let path = self.path_of(label);
        self.drawn.borrow_mut().push(Drawn {
            kind,
            path: path.clone(),
            label: visible(label).to_string(),
            entity: None,
            selected: false,
        });
        *self.last_item.borrow_mut() = path.clone();
        path
    }

    fn take_click(&self, path: &str) -> bool {
        let mut clicks = self.clicks.borrow_mut();
        match clicks.iter().position(|pattern| matches(path, pattern)) {
            Some(index) => {
                clicks.remove(index);
                true
            }
            None => false,
        }
    }

    fn scoped(&self, id: &str, contents: &mut dyn FnMut()) {
        self.id_stack.borrow_mut().push(visible(id).to_string());
        contents();
        self.id_stack.borrow_mut().pop();
    }
}

impl EditorUi for ScriptedUi {
    fn text(&self, text: &str) {
        self.record(Kind::Text, text);
    }

    fn text_disabled(&self, text: &str) {
        self.record(Kind::TextDisabled, text);
    }

    fn same_line(&self) {}

    fn separator(&self) {}

    fn indent_by(&self, width: f32) {
        self.indent.set(self.indent.get() + width);
    }

    fn unindent_by(&self, width: f32) {
        self.indent.set(self.indent.get() - width);
    }

    fn button(&self, label: &str) -> bool {
        let path = self.record(Kind::Button, label);
        self.take_click(&path)
    }

    fn small_button(&self, label: &str) -> bool {
        let path = self.record(Kind::SmallButton, label);
        self.take_click(&path)
    }

    fn selectable(&self, label: &str, selected: bool) -> bool {
        let path = self.record(Kind::Selectable, label);
        if let Some(drawn) = self.drawn.borrow_mut().last_mut() {
            drawn.selected = selected;
        }
        let clicked = self.take_click(&path);
        if clicked {
            if let Some(popup) = self.popup_stack.borrow().last() {
                self.open_popups.borrow_mut().remove(popup);
            }
        }
        clicked
    }

    fn checkbox(&self, label: &str, value: &mut bool) -> bool {
        let path = self.record(Kind::Checkbox, label);
        let clicked = self.take_click(&path);
        if clicked {
            *value = !*value;
        }
        clicked
    }

    fn drag_float(&self, label: &str, value: &mut f32, _speed: f32) -> bool {
        let path = self.record(Kind::Drag, label);
        let mut drags = self.drags.borrow_mut();
        let key = drags
            .keys()
            .find(|pattern| matches(&path, pattern))
            .cloned();
        match key.and_then(|key| drags.remove(&key)) {
            Some(new_value) => {
                *value = new_value;
                true
            }
            None => false,
        }
    }

    fn collapsing_header(&self, label: &str) -> bool {
        let path = self.record(Kind::Header, label);
        !self
            .collapsed
            .borrow()
            .iter()
            .any(|pattern| matches(&path, pattern))
    }

    fn open_popup(&self, id: &str) {
        let path = self.path_of(id);
        self.open_popups.borrow_mut().insert(path);
    }

    fn popup(&self, id: &str, contents: &mut dyn FnMut()) {
        let path = self.path_of(id);
        if !self.open_popups.borrow().contains(&path) {
            return;
        }
        self.record(Kind::Popup, id);
        self.popup_stack.borrow_mut().push(path);
        self.scoped(id, contents);
        self.popup_stack.borrow_mut().pop();
    }

    fn window(&self, title: &str, opened: &mut bool, contents: &mut dyn FnMut()) {
        if !*opened {
            return;
        }
        self.record(Kind::Window, title);
        self.scoped(title, contents);
        if self.close_windows.borrow_mut().remove(title) {
            *opened = false;
        }
    }

    fn child(&self, id: &str, _height: f32, contents: &mut dyn FnMut()) {
        self.record(Kind::Child, id);
        self.scoped(id, contents);
    }

    fn with_id(&self, id: &str, contents: &mut dyn FnMut()) {
        self.scoped(id, contents);
    }

    fn entity_drag_source(&self, entity: Entity) {
        let path = self.last_item.borrow().clone();
        self.drawn.borrow_mut().push(Drawn {
            kind: Kind::DragSource,
            path,
            label: format!("{}", entity.id()),
            entity: Some(entity),
            selected: false,
        });
    }

    fn entity_drop_target(&self) -> Option<Entity> {
        let path = self.last_item.borrow().clone();
        let mut drops = self.drops.borrow_mut();
        let index = drops
            .iter()
            .position(|(pattern, _)| matches(&path, pattern))?;
        Some(drops.remove(index).1)
    }
}
