//! Runtime-typed queries over a hecs world
//!
//! The editor only knows component types by [`TypeId`], so presence checks
//! and filtered enumeration go through the entity's archetype rather than a
//! typed query. Nothing here is cached; every call reads the world as it is.

use hecs::{Entity, EntityRef, World};
use std::any::TypeId;
use std::collections::BTreeSet;

/// Returns the entity if it is still alive in `world`
pub fn live(world: &World, entity: Option<Entity>) -> Option<Entity> {
    entity.filter(|&e| world.contains(e))
}

/// Check if `entity` currently holds a component of type `type_id`
pub fn has_component(world: &World, entity: Entity, type_id: TypeId) -> bool {
    world
        .entity(entity)
        .map(|entity_ref| entity_ref.component_types().any(|ty| ty == type_id))
        .unwrap_or(false)
}

/// Entities with no components at all
pub fn orphans(world: &World) -> Vec<Entity> {
    world
        .iter()
        .filter(|entity_ref| entity_ref.component_types().next().is_none())
        .map(|entity_ref| entity_ref.entity())
        .collect()
}

/// Entities whose component set is a superset of `filter`
///
/// An empty filter matches every entity.
pub fn entities_with_all(world: &World, filter: &BTreeSet<TypeId>) -> Vec<Entity> {
    world
        .iter()
        .filter(|entity_ref| holds_all(entity_ref, filter))
        .map(|entity_ref| entity_ref.entity())
        .collect()
}

fn holds_all(entity_ref: &EntityRef<'_>, filter: &BTreeSet<TypeId>) -> bool {
    let types: BTreeSet<TypeId> = entity_ref.component_types().collect();
    filter.is_subset(&types)
}
