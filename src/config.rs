use anyhow::{bail, Context, Result};
use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use log::warn;

use crate::components::Hand;
use crate::interaction::Waypoint;
use crate::math::{Color3, Vec3f};

pub const DEFAULT_SCENE_PATH: &str = "config/scene.toml";

fn v3(a: [f32; 3]) -> Vec3f {
    Vec3f::new(a[0], a[1], a[2])
}

/// Layout and tuning of the whole scene. `Default` is the desert outpost.
#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub skybox: SkyboxConfig,
    pub props: Vec<PropConfig>,
    pub highlight_color: [f32; 3],
    pub guidance: GuidanceConfig,
    pub controllers: ControllerPropsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
    pub aspect: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LightConfig {
    pub direction: [f32; 3],
    pub diffuse: [f32; 3],
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SkyboxConfig {
    pub texture: String,
    pub size: f32,
}

/// A static mesh placed in the scene.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PropConfig {
    pub name: String,
    pub model: String,
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "unit_scale")]
    pub scaling: [f32; 3],
    /// Half extents of the pick box in world units. Props without one can't be picked.
    #[serde(default)]
    pub pick_half_extents: Option<[f32; 3]>,
    /// World-space shift from `position` to the pick box centre. Mesh origins
    /// often sit below the ground; the box has to reach above it.
    #[serde(default)]
    pub pick_offset: [f32; 3],
    #[serde(default)]
    pub teleport_floor: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GuidanceConfig {
    /// Per-axis arrival tolerance on the ground plane.
    pub tolerance: f32,
    pub waypoints: Vec<Waypoint>,
    pub beacon_model: String,
    pub beacon_height: f32,
    pub beacon_pick_half_extents: [f32; 3],
    pub indicator_model: String,
    /// Indicator placement relative to the viewer.
    pub indicator_offset: [f32; 3],
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerPropsConfig {
    pub bat: AttachedPropConfig,
    pub tablet: AttachedPropConfig,
}

/// A prop parented to a controller's grip.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AttachedPropConfig {
    pub name: String,
    pub model: String,
    pub hand: Hand,
    pub scaling: [f32; 3],
    pub offset: [f32; 3],
}

fn unit_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            skybox: SkyboxConfig::default(),
            props: default_props(),
            highlight_color: [0.44, 1.0, 0.0],
            guidance: GuidanceConfig::default(),
            controllers: ControllerPropsConfig::default(),
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 2.5, 20.0],
            target: [0.05, 1.61, -2.0],
            fov_degrees: 90.0,
            znear: 0.1,
            zfar: 1000.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            direction: [0.0, 1.0, 0.0],
            diffuse: [1.0, 0.7, 0.7],
        }
    }
}

impl Default for SkyboxConfig {
    fn default() -> Self {
        Self {
            texture: "textures/skybox/sky".to_string(),
            size: 100.0,
        }
    }
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            tolerance: 10.0,
            waypoints: vec![
                Waypoint::new(-15.0, 15.0),
                Waypoint::new(30.0, 12.0),
                Waypoint::new(97.0, 106.0),
                Waypoint::new(15.0, 0.0),
            ],
            beacon_model: "textures/beacon/scene.gltf".to_string(),
            beacon_height: 0.0,
            beacon_pick_half_extents: [0.5, 2.0, 0.5],
            indicator_model: "textures/arrow/scene.gltf".to_string(),
            indicator_offset: [0.0, -0.4, -1.0],
        }
    }
}

impl Default for ControllerPropsConfig {
    fn default() -> Self {
        Self {
            bat: AttachedPropConfig {
                name: "bat".to_string(),
                model: "textures/bat/scene.gltf".to_string(),
                hand: Hand::Right,
                scaling: [0.3, 0.3, 0.3],
                offset: [-0.5, 0.5, 0.0],
            },
            tablet: AttachedPropConfig {
                name: "tablet".to_string(),
                model: "textures/tablet/scene.gltf".to_string(),
                hand: Hand::Left,
                scaling: [0.2, 0.2, 0.2],
                offset: [0.0, 0.1, -0.1],
            },
        }
    }
}

fn prop(name: &str, dir: &str, position: [f32; 3], rotation: [f32; 3], scaling: [f32; 3]) -> PropConfig {
    PropConfig {
        name: name.to_string(),
        model: format!("textures/{dir}/scene.gltf"),
        position,
        rotation,
        scaling,
        pick_half_extents: None,
        pick_offset: [0.0; 3],
        teleport_floor: false,
    }
}

fn default_props() -> Vec<PropConfig> {
    let mut ground = prop("DesertBiome", "desert_biome", [0.0, -158.0, 0.0], [0.0; 3], [1000.0; 3]);
    ground.teleport_floor = true;
    // Mesh origin is far below the walkable surface; a thin slab with its top at y=0.
    ground.pick_half_extents = Some([500.0, 0.25, 500.0]);
    ground.pick_offset = [0.0, 157.75, 0.0];

    let mut props = vec![
        ground,
        prop("house", "abandoned_house", [0.0, -1.0, -5.0], [0.0, 4.7, 0.0], [2.5, 3.0, 3.0]),
        prop("rock", "sandstone_mesa", [-50.0, -25.0, 5.0], [6.1, 1.2, 0.0], [100.0; 3]),
        prop("skull", "lion_skull", [0.0, 0.3, 5.0], [0.0, 1.047, 0.0], [0.01; 3]),
        prop("sign", "old_sign", [-10.0, 0.0, 5.0], [0.0, 3.49, 0.0], [0.5, 0.5, -0.5]),
        prop("fenceA", "old_fence", [30.0, -3.0, 0.0], [0.0, 1.57, 0.0], [0.05; 3]),
        prop("fenceB", "old_fence", [30.0, -3.0, 23.0], [0.0, 1.57, 0.0], [0.05; 3]),
        prop("bush", "bush", [10.0, -1.0, -5.0], [0.0; 3], [4.0; 3]),
        prop("cactus", "cactus", [15.0, -2.0, 0.0], [0.0; 3], [5.0, 5.0, -5.0]),
        prop("iron_hand", "iron_hand", [0.0; 3], [0.0; 3], [1.0; 3]),
    ];

    // (name, half extents, offset) with every box reaching above the ground.
    let pick_boxes: [(&str, [f32; 3], [f32; 3]); 9] = [
        ("house", [4.0, 3.0, 4.0], [0.0, 2.0, 0.0]),
        ("rock", [15.0, 20.0, 15.0], [0.0, 20.0, 0.0]),
        ("skull", [0.4, 0.3, 0.4], [0.0; 3]),
        ("sign", [0.6, 1.2, 0.2], [0.0; 3]),
        ("fenceA", [0.3, 1.5, 10.0], [0.0, 3.5, 0.0]),
        ("fenceB", [0.3, 1.5, 10.0], [0.0, 3.5, 0.0]),
        ("bush", [1.5, 1.5, 1.5], [0.0, 1.5, 0.0]),
        ("cactus", [0.8, 3.0, 0.8], [0.0, 3.0, 0.0]),
        ("iron_hand", [0.3, 0.3, 0.3], [0.0, 0.3, 0.0]),
    ];
    for (name, half_extents, offset) in pick_boxes {
        if let Some(p) = props.iter_mut().find(|p| p.name == name) {
            p.pick_half_extents = Some(half_extents);
            p.pick_offset = offset;
        }
    }
    props
}

impl SceneConfig {
    /// Load the scene from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_SCENE_PATH))
    }

    /// Load from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match Self::read(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("{err:#}. Using default scene");
                SceneConfig::default()
            }
        }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: SceneConfig = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.guidance.waypoints.is_empty() {
            bail!("guidance.waypoints must not be empty");
        }
        if !self.guidance.tolerance.is_finite() || self.guidance.tolerance < 0.0 {
            bail!("guidance.tolerance must be a non-negative number, got {}", self.guidance.tolerance);
        }
        if self.camera.fov_degrees <= 0.0 || self.camera.fov_degrees >= 180.0 {
            bail!("camera.fov_degrees must be in (0, 180), got {}", self.camera.fov_degrees);
        }
        Ok(())
    }

    pub fn highlight_color(&self) -> Color3 {
        v3(self.highlight_color)
    }
}

impl CameraConfig {
    pub fn position(&self) -> Vec3f {
        v3(self.position)
    }

    pub fn target(&self) -> Vec3f {
        v3(self.target)
    }
}

impl LightConfig {
    pub fn direction(&self) -> Vec3f {
        v3(self.direction)
    }

    pub fn diffuse(&self) -> Color3 {
        v3(self.diffuse)
    }
}

impl PropConfig {
    pub fn position(&self) -> Vec3f {
        v3(self.position)
    }

    pub fn rotation(&self) -> Vec3f {
        v3(self.rotation)
    }

    pub fn scaling(&self) -> Vec3f {
        v3(self.scaling)
    }

    pub fn pick_half_extents(&self) -> Option<Vec3f> {
        self.pick_half_extents.map(v3)
    }

    pub fn pick_center(&self) -> Vec3f {
        self.position() + v3(self.pick_offset)
    }
}

impl GuidanceConfig {
    pub fn beacon_pick_half_extents(&self) -> Vec3f {
        v3(self.beacon_pick_half_extents)
    }

    pub fn indicator_offset(&self) -> Vec3f {
        v3(self.indicator_offset)
    }
}

impl AttachedPropConfig {
    pub fn scaling(&self) -> Vec3f {
        v3(self.scaling)
    }

    pub fn offset(&self) -> Vec3f {
        v3(self.offset)
    }
}
