use glam::{Vec2, Vec3};

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Material description a physics engine needs to build a round body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub radius: f32,
    pub mass: f32,
    pub friction_air: f32,
    pub restitution: f32,
}

/// Static rink geometry handed to the physics engine at start-up
#[derive(Debug, Clone)]
pub struct Rink {
    pub size: Vec2,
    pub walls: Vec<Aabb>,
    /// x range of the opening in both goal lines
    pub goal_mouth: (f32, f32),
    pub paddle: BodySpec,
    pub puck: BodySpec,
}

impl Rink {
    pub fn new(config: &Config) -> Self {
        let (w, h) = (config.rink_width, config.rink_height);
        let t = config.wall_thickness;
        let mouth = config.goal_mouth_width();
        let segment = (w - mouth) / 2.0;

        let walls = vec![
            // Sides
            Aabb::from_center_size(Vec2::new(t / 2.0, h / 2.0), Vec2::new(t, h)),
            Aabb::from_center_size(Vec2::new(w - t / 2.0, h / 2.0), Vec2::new(t, h)),
            // AI goal line
            Aabb::from_center_size(Vec2::new(segment / 2.0, t / 2.0), Vec2::new(segment, t)),
            Aabb::from_center_size(Vec2::new(w - segment / 2.0, t / 2.0), Vec2::new(segment, t)),
            // Human goal line
            Aabb::from_center_size(Vec2::new(segment / 2.0, h - t / 2.0), Vec2::new(segment, t)),
            Aabb::from_center_size(
                Vec2::new(w - segment / 2.0, h - t / 2.0),
                Vec2::new(segment, t),
            ),
        ];

        Self {
            size: config.size(),
            walls,
            goal_mouth: (segment, w - segment),
            paddle: BodySpec {
                radius: config.paddle_radius,
                mass: config.paddle_mass,
                friction_air: config.paddle_friction_air,
                restitution: 0.0,
            },
            puck: BodySpec {
                radius: config.puck_radius,
                mass: config.puck_mass,
                friction_air: config.puck_friction_air,
                restitution: config.puck_restitution,
            },
        }
    }

    pub fn in_goal_mouth(&self, x: f32) -> bool {
        x > self.goal_mouth.0 && x < self.goal_mouth.1
    }

    /// Map a world position to a renderer frame centred on the rink, y up.
    pub fn to_scene(&self, pos: Vec2) -> Vec3 {
        Vec3::new(pos.x - self.size.x / 2.0, -(pos.y - self.size.y / 2.0), 0.0)
    }
}
