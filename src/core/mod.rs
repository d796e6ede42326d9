//! Camera glue and startup configuration shared by the other modules.

pub mod orbit_camera;
pub mod settings;

pub use orbit_camera::{MainCamera, OrbitPose};
pub use settings::SceneSettings;
