use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::math::Vec3f;

/// Position on the ground plane. Height is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct Waypoint {
    pub x: f32,
    pub z: f32,
}

impl Waypoint {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    pub fn from_world(pos: Vec3f) -> Self {
        Self { x: pos.x, z: pos.z }
    }

    pub fn to_world(self, y: f32) -> Vec3f {
        Vec3f::new(self.x, y, self.z)
    }
}

/// True when the viewer is within `tolerance` of the target on both ground
/// axes independently. This is a square gate, not a radius.
pub fn check_arrival(viewer: Waypoint, target: Waypoint, tolerance: f32) -> bool {
    (viewer.x - target.x).abs() <= tolerance && (viewer.z - target.z).abs() <= tolerance
}

/// Progress along a cyclic, non-empty list of waypoints.
#[derive(Resource, Debug, Clone)]
pub struct GuidanceState {
    waypoints: Vec<Waypoint>,
    tolerance: f32,
    current_waypoint_index: usize,
    arrived: bool,
}

impl GuidanceState {
    /// Returns `None` for an empty route.
    pub fn new(waypoints: Vec<Waypoint>, tolerance: f32) -> Option<Self> {
        if waypoints.is_empty() {
            return None;
        }
        Some(Self {
            waypoints,
            tolerance,
            current_waypoint_index: 0,
            arrived: false,
        })
    }

    pub fn current_waypoint_index(&self) -> usize {
        self.current_waypoint_index
    }

    pub fn current_waypoint(&self) -> Waypoint {
        self.waypoints[self.current_waypoint_index]
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn arrived(&self) -> bool {
        self.arrived
    }

    /// Re-evaluates the gate against the current waypoint.
    pub fn update_arrival(&mut self, viewer: Waypoint) -> bool {
        self.arrived = check_arrival(viewer, self.current_waypoint(), self.tolerance);
        self.arrived
    }

    /// Advances to the next waypoint if the viewer has arrived at the current
    /// one. Returns the `(previous, next)` indices when it does.
    pub fn confirm_arrival(&mut self) -> Option<(usize, usize)> {
        if !self.arrived {
            return None;
        }
        let previous = self.current_waypoint_index;
        self.current_waypoint_index = (previous + 1) % self.waypoints.len();
        self.arrived = false;
        Some((previous, self.current_waypoint_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_accepts_viewer_within_tolerance() {
        let target = Waypoint::new(97.0, 106.0);
        assert!(check_arrival(Waypoint::new(95.0, 104.0), target, 10.0));
        assert!(!check_arrival(Waypoint::new(80.0, 106.0), target, 10.0));
    }

    #[test]
    fn gate_is_per_axis_not_radial() {
        let target = Waypoint::new(0.0, 0.0);
        // Corner of the square is ~14.1 away but still inside.
        assert!(check_arrival(Waypoint::new(10.0, 10.0), target, 10.0));
        assert!(check_arrival(Waypoint::new(-10.0, 10.0), target, 10.0));
        assert!(!check_arrival(Waypoint::new(10.01, 0.0), target, 10.0));
    }

    #[test]
    fn empty_route_is_rejected() {
        assert!(GuidanceState::new(vec![], 1.0).is_none());
    }

    #[test]
    fn index_cycles_through_four_waypoints() {
        let route = vec![
            Waypoint::new(0.0, 0.0),
            Waypoint::new(10.0, 0.0),
            Waypoint::new(10.0, 10.0),
            Waypoint::new(0.0, 10.0),
        ];
        let mut guidance = GuidanceState::new(route.clone(), 1.0).unwrap();
        let mut visited = vec![guidance.current_waypoint_index()];
        for _ in 0..4 {
            let at = guidance.current_waypoint();
            assert!(guidance.update_arrival(at));
            guidance.confirm_arrival().unwrap();
            assert!(guidance.current_waypoint_index() < route.len());
            visited.push(guidance.current_waypoint_index());
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn confirmation_without_arrival_does_nothing() {
        let mut guidance =
            GuidanceState::new(vec![Waypoint::new(50.0, 50.0), Waypoint::new(0.0, 0.0)], 5.0).unwrap();
        assert!(!guidance.update_arrival(Waypoint::new(0.0, 0.0)));
        assert_eq!(guidance.confirm_arrival(), None);
        assert_eq!(guidance.current_waypoint_index(), 0);
    }

    #[test]
    fn arrival_is_cleared_after_advancing() {
        let mut guidance =
            GuidanceState::new(vec![Waypoint::new(0.0, 0.0), Waypoint::new(30.0, 0.0)], 5.0).unwrap();
        guidance.update_arrival(Waypoint::new(1.0, 1.0));
        assert_eq!(guidance.confirm_arrival(), Some((0, 1)));
        assert!(!guidance.arrived());
        // A second confirm without re-checking the gate must not skip ahead.
        assert_eq!(guidance.confirm_arrival(), None);
    }
}
