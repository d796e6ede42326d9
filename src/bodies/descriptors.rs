//! Static description of the bodies in the scene
//!
//! Sizes and distances are scene units, not physical ones. Speeds are radians
//! per frame at speed 1; a negative rotation speed spins retrograde.

/// Ring laid flat around a body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingDescriptor {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub texture: &'static str,
}

/// Small body orbiting a planet
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SatelliteDescriptor {
    pub name: &'static str,
    pub size: f32,
    pub texture: &'static str,
    /// Distance from the parent body's center.
    pub distance: f32,
    pub orbit_speed: f32,
}

/// Translucent shell slightly larger than the body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereDescriptor {
    pub radius: f32,
    /// sRGB color
    pub color: [f32; 3],
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetDescriptor {
    pub name: &'static str,
    pub size: f32,
    pub texture: &'static str,
    pub normal_map: Option<&'static str>,
    pub distance_from_sun: f32,
    pub rotation_speed: f32,
    pub orbit_speed: f32,
    /// Radians
    pub axial_tilt: f32,
    pub ring: Option<RingDescriptor>,
    pub satellites: &'static [SatelliteDescriptor],
    pub atmosphere: Option<AtmosphereDescriptor>,
}

impl PlanetDescriptor {
    const fn new(
        name: &'static str,
        size: f32,
        texture: &'static str,
        distance_from_sun: f32,
        rotation_speed: f32,
        orbit_speed: f32,
        axial_tilt_deg: f32,
    ) -> Self {
        Self {
            name,
            size,
            texture,
            normal_map: None,
            distance_from_sun,
            rotation_speed,
            orbit_speed,
            axial_tilt: axial_tilt_deg.to_radians(),
            ring: None,
            satellites: &[],
            atmosphere: None,
        }
    }

    const fn with_ring(mut self, inner_radius: f32, outer_radius: f32, texture: &'static str) -> Self {
        self.ring = Some(RingDescriptor {
            inner_radius,
            outer_radius,
            texture,
        });
        self
    }
}

pub const SUN_NAME: &str = "Sun";
pub const SUN_RADIUS: f32 = 16.0;
pub const SUN_TEXTURE: &str = "textures/sun.jpg";

pub const MOON: SatelliteDescriptor = SatelliteDescriptor {
    name: "Moon",
    size: 1.3,
    texture: "textures/moon.jpg",
    distance: 10.0,
    orbit_speed: 0.01,
};

const EARTH: PlanetDescriptor = PlanetDescriptor {
    normal_map: Some("textures/earth_normal_map.jpg"),
    satellites: &[MOON],
    atmosphere: Some(AtmosphereDescriptor {
        radius: 6.1,
        // #1f94f3
        color: [0.122, 0.580, 0.953],
        opacity: 0.15,
    }),
    ..PlanetDescriptor::new("Earth", 6.0, "textures/earth.jpg", 62.0, 0.02, 0.01, 23.5)
};

/// The nine bodies orbiting the sun, innermost first.
pub const PLANETS: [PlanetDescriptor; 9] = [
    PlanetDescriptor::new("Mercury", 3.2, "textures/mercury.jpg", 28.0, 0.004, 0.017, 0.034),
    PlanetDescriptor::new("Venus", 5.5, "textures/venus.jpg", 44.0, -0.002, 0.012, 177.4),
    EARTH,
    PlanetDescriptor::new("Mars", 3.5, "textures/mars.jpg", 78.0, 0.018, 0.008, 25.0),
    PlanetDescriptor::new("Jupiter", 12.0, "textures/jupiter.jpg", 100.0, 0.04, 0.004, 3.0),
    PlanetDescriptor::new("Saturn", 10.0, "textures/saturn.jpg", 138.0, 0.038, 0.003, 26.7)
        .with_ring(11.0, 18.0, "textures/saturn_ring.png"),
    PlanetDescriptor::new("Uranus", 7.0, "textures/uranus.jpg", 176.0, 0.03, 0.002, 97.8)
        .with_ring(7.0, 12.0, "textures/uranus_ring.png"),
    PlanetDescriptor::new("Neptune", 7.0, "textures/neptune.jpg", 200.0, 0.032, 0.0017, 28.3),
    PlanetDescriptor::new("Pluto", 2.8, "textures/pluto.jpg", 216.0, 0.008, 0.001, 122.5),
];
