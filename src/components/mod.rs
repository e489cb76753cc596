mod beacon;
mod camera;
mod controller;
mod heading_indicator;
mod light;
mod model_spec;
mod name;
mod physics_body;
mod player;
mod scene_prop;
mod skybox;
mod transform;
mod visibility;

pub use beacon::Beacon;
pub use camera::Camera;
pub use controller::{input_source_id, AttachedProp, Controller, Hand};
pub use heading_indicator::HeadingIndicator;
pub use light::HemisphericLight;
pub use model_spec::ModelSpec;
pub use name::SceneName;
pub use physics_body::{PhysicsBody, PhysicsBodyParams};
pub use player::Player;
pub use scene_prop::{SceneProp, TeleportFloor};
pub use skybox::Skybox;
pub use transform::Transform;
pub use visibility::Visibility;
