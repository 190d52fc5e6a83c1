//! Component registry mapping component types to editor callbacks
//!
//! Each registered component type gets a display name and three callbacks:
//! one drawing its fields, one attaching a new instance to an entity and one
//! removing it. Records are keyed by [`TypeId`] and kept in key order.

use crate::error::EditorError;
use crate::ui::EditorUi;
use hecs::{Entity, World};
use std::any::TypeId;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// Draws the fields of a component on an entity
pub type RenderFn<U> = Box<dyn Fn(&U, &mut World, Entity)>;

/// Attaches or removes a component on an entity
pub type ActionFn = Box<dyn Fn(&mut World, Entity) -> Result<(), EditorError>>;

/// Editor record for one component type
pub struct ComponentInfo<U = imgui::Ui> {
    /// Name shown in headers, filters and the add popup
    pub name: String,
    pub render: RenderFn<U>,
    pub create: ActionFn,
    pub destroy: ActionFn,
}

impl<U: EditorUi + 'static> ComponentInfo<U> {
    /// Record with a no-op render callback and default create/destroy
    pub fn new<T>(name: impl Into<String>) -> Self
    where
        T: hecs::Component + Default,
    {
        Self {
            name: name.into(),
            render: Box::new(render_nothing::<U>),
            create: Box::new(add_default::<T>),
            destroy: Box::new(remove::<T>),
        }
    }

    /// Replace the render callback
    pub fn with_render(mut self, render: impl Fn(&U, &mut World, Entity) + 'static) -> Self {
        self.render = Box::new(render);
        self
    }

    /// Replace the create callback
    pub fn with_create(
        mut self,
        create: impl Fn(&mut World, Entity) -> Result<(), EditorError> + 'static,
    ) -> Self {
        self.create = Box::new(create);
        self
    }

    /// Replace the destroy callback
    pub fn with_destroy(
        mut self,
        destroy: impl Fn(&mut World, Entity) -> Result<(), EditorError> + 'static,
    ) -> Self {
        self.destroy = Box::new(destroy);
        self
    }
}

impl<U> std::fmt::Debug for ComponentInfo<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentInfo")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

fn render_nothing<U>(_ui: &U, _world: &mut World, _entity: Entity) {}

/// Default create action: insert `T::default()`
pub fn add_default<T: hecs::Component + Default>(
    world: &mut World,
    entity: Entity,
) -> Result<(), EditorError> {
    world.insert_one(entity, T::default())?;
    Ok(())
}

/// Default destroy action: remove `T`
pub fn remove<T: hecs::Component>(world: &mut World, entity: Entity) -> Result<(), EditorError> {
    world.remove_one::<T>(entity)?;
    Ok(())
}

/// Ordered table of component records
pub struct ComponentRegistry<U = imgui::Ui> {
    components: BTreeMap<TypeId, ComponentInfo<U>>,
}

impl<U> Default for ComponentRegistry<U> {
    fn default() -> Self {
        Self {
            components: BTreeMap::new(),
        }
    }
}

impl<U: EditorUi + 'static> ComponentRegistry<U> {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` with a no-op render callback
    pub fn register<T>(&mut self, name: impl Into<String>) -> &mut ComponentInfo<U>
    where
        T: hecs::Component + Default,
    {
        self.register_info::<T>(ComponentInfo::new::<T>(name))
    }

    /// Register `T` with a render callback and default create/destroy
    pub fn register_with<T>(
        &mut self,
        name: impl Into<String>,
        render: impl Fn(&U, &mut World, Entity) + 'static,
    ) -> &mut ComponentInfo<U>
    where
        T: hecs::Component + Default,
    {
        self.register_info::<T>(ComponentInfo::new::<T>(name).with_render(render))
    }

    /// Insert or overwrite the record for `T`
    pub fn register_info<T: 'static>(&mut self, info: ComponentInfo<U>) -> &mut ComponentInfo<U> {
        match self.components.entry(TypeId::of::<T>()) {
            Entry::Occupied(mut entry) => {
                debug!(
                    component = std::any::type_name::<T>(),
                    previous_name = %entry.get().name,
                    name = %info.name,
                    "Overwrote component registration"
                );
                entry.insert(info);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!(
                    component = std::any::type_name::<T>(),
                    name = %info.name,
                    "Registered component"
                );
                entry.insert(info)
            }
        }
    }

    /// Get the record for a component type
    pub fn get(&self, type_id: TypeId) -> Option<&ComponentInfo<U>> {
        self.components.get(&type_id)
    }

    /// Get the record for `T`
    pub fn get_by_type<T: 'static>(&self) -> Option<&ComponentInfo<U>> {
        self.get(TypeId::of::<T>())
    }

    /// Check if a component type is registered
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.components.contains_key(&type_id)
    }

    /// Iterate records in key order
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &ComponentInfo<U>)> {
        self.components.iter().map(|(type_id, info)| (*type_id, info))
    }

    /// Get the number of registered component types
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl<U> std::fmt::Debug for ComponentRegistry<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field(
                "components",
                &self.components.values().map(|info| &info.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
