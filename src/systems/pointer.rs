use bevy_ecs::prelude::*;

use crate::components::SceneName;
use crate::events::{PickEvent, PointerDownEvent};
use crate::interaction::SelectionTracker;
use crate::logging::printlog;
use crate::physics_world::PhysicsWorld;

pub fn pick_from_pointer(
    physics: Res<PhysicsWorld>,
    mut pointer_events: EventReader<PointerDownEvent>,
    mut pick_events: EventWriter<PickEvent>,
) {
    for event in pointer_events.iter() {
        let picked = physics
            .cast_pick_ray(event.origin, event.direction)
            .map(|(entity, _)| entity);
        pick_events.send(PickEvent::new(picked));
    }
}

pub fn select_picked(
    mut events: EventReader<PickEvent>,
    mut selection: ResMut<SelectionTracker>,
    names: Query<&SceneName>,
) {
    for event in events.iter() {
        if !event.hit {
            continue;
        }
        if let Some(picked) = event.picked {
            let name = names.get(picked).map(SceneName::as_str).unwrap_or("<unnamed>");
            printlog(&format!("selected mesh: {}", name));
        }
        selection.on_pick(event.picked);
    }
}
