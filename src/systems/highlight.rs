use bevy_ecs::prelude::*;

use crate::components::Visibility;
use crate::config::SceneConfig;
use crate::interaction::SelectionTracker;
use crate::math::Color3;

/// Objects the renderer should draw with a glow, rebuilt every frame.
#[derive(Resource, Debug, Default)]
pub struct HighlightLayer {
    meshes: Vec<(Entity, Color3)>,
}

impl HighlightLayer {
    pub fn remove_all_meshes(&mut self) {
        self.meshes.clear();
    }

    pub fn add_mesh(&mut self, entity: Entity, color: Color3) {
        self.meshes.push((entity, color));
    }

    pub fn meshes(&self) -> &[(Entity, Color3)] {
        &self.meshes
    }
}

/// Clear, then add the current selection. Running it twice in a frame is harmless.
/// A selection that was despawned or hidden is dropped, since it can't be picked again.
pub fn update_highlight(
    mut layer: ResMut<HighlightLayer>,
    mut selection: ResMut<SelectionTracker>,
    config: Res<SceneConfig>,
    visibility: Query<Option<&Visibility>>,
) {
    layer.remove_all_meshes();
    let Some(selected) = selection.current_selection() else {
        return;
    };
    match visibility.get(selected) {
        Ok(v) if v.map_or(true, |v| v.enabled) => {
            layer.add_mesh(selected, config.highlight_color());
        }
        _ => selection.clear(),
    }
}
