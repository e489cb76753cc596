use std::f32::consts::PI;

use dev_wayfinder::config::SceneConfig;
use dev_wayfinder::interaction::Waypoint;
use dev_wayfinder::math::{Mat4f, UnitQuatf, Vec3f};
use dev_wayfinder::App;

const RIGHT: &str = "controller-0-tracked-pointer-right";
const LEFT: &str = "controller-1-tracked-pointer-left";

fn new_app() -> App {
    App::new(SceneConfig::default()).expect("default scene builds")
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn scene_spawns_props_and_first_beacon_only() {
    let mut app = new_app();
    assert!(app.find_named("house").is_some());
    assert!(app.find_named("cactus").is_some());
    assert_eq!(app.teleport_floors().len(), 1);
    assert_eq!(app.is_visible("beacon-0"), Some(true));
    assert_eq!(app.is_visible("beacon-1"), Some(false));
    assert_eq!(app.guidance().current_waypoint_index(), 0);
    assert!(!app.guidance().arrived());
}

#[test]
fn pointer_pick_toggles_highlight() {
    let mut app = new_app();
    let house = app.find_named("house").unwrap();

    app.pointer_down(Vec3f::new(0.0, 1.0, 20.0), Vec3f::new(0.0, 0.0, -1.0));
    assert_eq!(app.selection(), Some(house));
    app.update_scene();
    let highlighted = app.highlighted();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].0, house);
    assert!((highlighted[0].1 - Vec3f::new(0.44, 1.0, 0.0)).norm() < 1e-6);

    // Re-running the frame doesn't accumulate highlights.
    app.update_scene();
    assert_eq!(app.highlighted().len(), 1);

    app.pointer_down(Vec3f::new(0.0, 1.0, 20.0), Vec3f::new(0.0, 0.0, -1.0));
    assert_eq!(app.selection(), None);
    app.update_scene();
    assert!(app.highlighted().is_empty());
}

#[test]
fn every_prop_with_a_pick_box_can_be_picked() {
    let config = SceneConfig::default();
    let mut app = new_app();
    for prop in config.props.iter().filter(|p| p.pick_half_extents.is_some()) {
        // Floors are covered by props at their own origin; aim at open ground.
        let (x, z) = if prop.teleport_floor { (200.0, 200.0) } else { (prop.position[0], prop.position[2]) };
        app.pointer_down(Vec3f::new(x, 100.0, z), Vec3f::new(0.0, -1.0, 0.0));
        assert_eq!(app.selection(), app.find_named(&prop.name), "{} not picked", prop.name);
    }
}

#[test]
fn fence_is_picked_over_the_ground() {
    let mut app = new_app();
    let fence = app.find_named("fenceA");
    app.pointer_down(Vec3f::new(30.0, 1.7, 0.0), Vec3f::new(0.0, -1.0, 0.0));
    assert_eq!(app.selection(), fence);

    let mut app = new_app();
    app.pointer_down(Vec3f::new(20.0, 1.0, 0.0), Vec3f::new(1.0, -0.05, 0.0));
    assert_eq!(app.selection(), fence);
}

#[test]
fn a_miss_keeps_the_selection() {
    let mut app = new_app();
    let skull = app.find_named("skull").unwrap();
    app.pick(Some(skull));
    app.pointer_down(Vec3f::new(0.0, 2.0, 20.0), Vec3f::new(0.0, 1.0, 0.0));
    assert_eq!(app.selection(), Some(skull));
}

#[test]
fn host_picks_switch_between_objects() {
    let mut app = new_app();
    let bush = app.find_named("bush").unwrap();
    let sign = app.find_named("sign").unwrap();
    app.pick(Some(bush));
    app.pick(Some(sign));
    app.update_scene();
    assert_eq!(app.selection(), Some(sign));
    assert_eq!(app.highlighted().len(), 1);
    assert_eq!(app.highlighted()[0].0, sign);
}

#[test]
fn beacon_advances_only_after_arriving() {
    let mut app = new_app();
    let beacon_ray_origin = Vec3f::new(-15.0, 1.9, 20.0);
    let beacon_ray_dir = Vec3f::new(0.0, 0.0, -1.0);

    // Far away: picking the beacon only selects it.
    app.update_scene();
    app.pointer_down(beacon_ray_origin, beacon_ray_dir);
    assert_eq!(app.selection(), app.find_named("beacon-0"));
    assert_eq!(app.guidance().current_waypoint_index(), 0);

    // Walk up to waypoint 0 at (-15, 15).
    app.update_camera(Vec3f::new(-13.0, 1.7, 17.0), UnitQuatf::identity(), None);
    app.update_scene();
    assert!(app.guidance().arrived());

    app.pointer_down(beacon_ray_origin, beacon_ray_dir);
    assert_eq!(app.guidance().current_waypoint_index(), 1);
    assert_eq!(app.is_visible("beacon-0"), Some(false));
    assert_eq!(app.is_visible("beacon-1"), Some(true));

    // The hidden beacon can't be picked any more.
    app.update_scene();
    let before = app.selection();
    app.pointer_down(beacon_ray_origin, beacon_ray_dir);
    assert_eq!(app.selection(), before);
    assert_eq!(app.guidance().current_waypoint_index(), 1);
}

#[test]
fn confirmed_beacon_leaves_the_highlight() {
    let mut app = new_app();
    let beacon = app.find_named("beacon-0").unwrap();
    app.update_camera(Vec3f::new(-15.0, 1.7, 15.0), UnitQuatf::identity(), None);
    app.update_scene();
    app.pick(Some(beacon));
    assert_eq!(app.is_visible("beacon-0"), Some(false));

    app.update_scene();
    assert!(app.highlighted().is_empty());
    assert_eq!(app.selection(), None);
}

#[test]
fn pick_right_after_moving_uses_the_new_pose() {
    let mut app = new_app();
    let beacon = app.find_named("beacon-0").unwrap();
    app.update_camera(Vec3f::new(-15.0, 1.7, 15.0), UnitQuatf::identity(), None);
    app.pick(Some(beacon));
    assert_eq!(app.guidance().current_waypoint_index(), 1);
}

#[test]
fn picking_a_stale_beacon_does_not_advance() {
    let mut app = new_app();
    let beacon_2 = app.find_named("beacon-2").unwrap();
    // Standing on waypoint 2 doesn't help while waypoint 0 is current.
    app.update_camera(Vec3f::new(97.0, 1.7, 106.0), UnitQuatf::identity(), None);
    app.update_scene();
    app.pick(Some(beacon_2));
    assert_eq!(app.guidance().current_waypoint_index(), 0);
}

#[test]
fn route_wraps_around() {
    let mut app = new_app();
    let route = app.guidance().waypoints().to_vec();
    for (step, waypoint) in route.iter().enumerate() {
        app.update_camera(waypoint.to_world(1.7), UnitQuatf::identity(), None);
        app.update_scene();
        let beacon = app.find_named(&format!("beacon-{}", step)).unwrap();
        app.pick(Some(beacon));
        assert_eq!(app.guidance().current_waypoint_index(), (step + 1) % route.len());
    }
    assert_eq!(app.guidance().current_waypoint_index(), 0);
    assert_eq!(app.is_visible("beacon-0"), Some(true));
}

#[test]
fn indicator_points_at_current_waypoint() {
    let mut app = new_app();
    // Waypoint 0 is at (-15, 15); the viewer looks down -Z.
    app.update_camera(Vec3f::new(-15.0, 1.7, 25.0), UnitQuatf::identity(), None);
    app.update_scene();
    assert!(approx(app.indicator_yaw().unwrap(), 0.0));

    app.update_camera(Vec3f::new(-15.0, 1.7, 5.0), UnitQuatf::identity(), None);
    app.update_scene();
    assert!(approx(app.indicator_yaw().unwrap(), -PI));
}

#[test]
fn right_controller_gets_the_bat() {
    let mut app = new_app();
    app.controller_added(RIGHT);
    let bat = app.find_named("bat").expect("bat attached");
    assert_eq!(app.is_visible("bat"), Some(true));
    assert!(app.find_named("tablet").is_none());

    app.update_controller_pose(RIGHT, Vec3f::new(1.0, 1.0, 1.0), UnitQuatf::identity());
    let pos = app.world_position(bat).unwrap();
    assert!((pos - Vec3f::new(0.5, 1.5, 1.0)).norm() < 1e-5);

    app.controller_removed(RIGHT);
    assert!(app.controller(RIGHT).is_none());
    assert!(app.find_named("bat").is_none());
}

#[test]
fn squeeze_edges_toggle_the_tablet() {
    let mut app = new_app();
    app.controller_added(LEFT);
    assert_eq!(app.is_visible("tablet"), Some(false));

    let frames = [(false, false), (true, true), (true, false), (false, true)];
    let mut seen = Vec::new();
    for (pressed, changed) in frames {
        app.squeeze(LEFT, pressed, changed);
        app.update_scene();
        seen.push(app.is_visible("tablet").unwrap());
    }
    assert_eq!(seen, vec![false, true, true, false]);
}

#[test]
fn squeezing_the_bat_hand_changes_nothing() {
    let mut app = new_app();
    app.controller_added(RIGHT);
    app.squeeze(RIGHT, true, true);
    assert_eq!(app.is_visible("bat"), Some(true));
}

#[test]
fn duplicate_controller_is_ignored() {
    let mut app = new_app();
    app.controller_added(LEFT);
    app.controller_added(LEFT);
    let mut q = app.world.query::<&dev_wayfinder::components::Controller>();
    assert_eq!(q.iter(&app.world).count(), 1);
}

#[test]
fn xr_projection_reaches_the_camera() {
    let mut app = new_app();
    let projection = Mat4f::new_nonuniform_scaling(&Vec3f::new(2.0, 3.0, 1.0));
    app.update_camera(Vec3f::zeros(), UnitQuatf::identity(), Some(projection));
    let vp = app.view_projection().unwrap();
    assert!((vp - projection).norm() < 1e-5);
}

#[test]
fn bundled_scene_file_loads() {
    let mut app = App::load().unwrap();
    assert_eq!(app.guidance().waypoints()[0], Waypoint::new(-15.0, 15.0));
    assert_eq!(app.guidance().tolerance(), 10.0);
    assert!(app.find_named("house").is_some());
}

#[test]
fn scene_without_waypoints_is_rejected() {
    let mut config = SceneConfig::default();
    config.guidance.waypoints.clear();
    assert!(App::new(config).is_err());
}

#[test]
fn scenes_are_independent() {
    let mut a = new_app();
    let mut b = new_app();
    let skull = a.find_named("skull").unwrap();
    a.pick(Some(skull));
    assert_eq!(a.selection(), Some(skull));
    assert_eq!(b.selection(), None);
    b.update_scene();
    assert!(b.highlighted().is_empty());
}
