use meshline_engine::Engine;
use meshline_engine::material::{MaterialEvent, MaterialHandle};
use meshline_engine::shape::{ShapeError, ShapeOptions};

fn opts(json: &str) -> ShapeOptions {
    serde_json::from_str(json).expect("parse options")
}

#[test]
fn engine_creates_shapes_with_fresh_ids() {
    let mut engine = Engine::new();
    let first = engine.apply(opts("{\"points\": [0, 0, 0, 1, 0, 0]}")).expect("create");
    let second = engine.apply(opts("{\"points\": [5, 5, 5]}")).expect("create");

    assert_ne!(first, second);
    assert_eq!(engine.shape_count(), 2);
    assert_eq!(engine.state(first).expect("state").point_count(), 2);
    assert_eq!(engine.state(second).expect("state").point_count(), 1);
}

#[test]
fn extend_on_an_unknown_instance_errors() {
    let mut engine = Engine::new();
    let err = engine
        .apply(opts("{\"points\": [0, 0, 0], \"instance\": 42}"))
        .expect_err("unknown instance");
    assert!(matches!(err, ShapeError::UnknownShape { id: 42 }));
}

#[test]
fn create_then_extend_grows_one_shape() {
    let mut engine = Engine::new();
    let id = engine
        .apply(opts(
            "{\"points\": [0, 0, 0, 1, 0, 0], \"widths\": [1, 1, 2, 2]}",
        ))
        .expect("create");

    let extended = engine
        .apply(opts(&format!(
            "{{\"points\": [2, 0, 0], \"widths\": [3, 3], \"instance\": {id}}}"
        )))
        .expect("extend");

    assert_eq!(extended, id);
    assert_eq!(engine.shape_count(), 1);

    let state = engine.state(id).expect("state");
    assert_eq!(state.point_count(), 3);
    assert_eq!(state.widths, vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
}

#[test]
fn grouped_points_share_one_shape() {
    let mut engine = Engine::new();
    let id = engine
        .apply(opts("{\"points\": [[0, 0, 0, 1, 0, 0], [9, 9, 9]]}"))
        .expect("create");

    let state = engine.state(id).expect("state");
    assert_eq!(state.point_count(), 3);
    assert_eq!(state.points[2], [9.0, 9.0, 9.0]);
    assert_eq!(state.widths.len(), 6);
}

#[test]
fn create_with_colors_attaches_a_material_and_queues_it() {
    let mut engine = Engine::new();
    let id = engine
        .apply(opts(
            "{\"points\": [0, 0, 0, 1, 0, 0, 2, 0, 0], \"colors\": [[1, 0, 0]], \
             \"colorDistribution\": \"repeat\"}",
        ))
        .expect("create");

    let state = engine.state(id).expect("state");
    assert!(state.has_material());
    assert_eq!(state.colors, vec![[1.0, 0.0, 0.0]; 3]);

    let events = engine.drain_material_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(
        &events[0],
        MaterialEvent::AttachMaterial { colors, .. } if colors.len() == 3
    ));
    assert!(matches!(events[1], MaterialEvent::GeometryChanged { deferred: false }));
}

#[test]
fn extend_pushes_the_merged_color_table() {
    let mut engine = Engine::new();
    let id = engine
        .apply(opts("{\"points\": [0, 0, 0], \"colors\": [[1, 0, 0]]}"))
        .expect("create");
    engine.drain_material_events();

    engine
        .apply(opts(&format!(
            "{{\"points\": [1, 0, 0], \"colors\": [[0, 0, 1]], \"lazy\": true, \
             \"instance\": {id}}}"
        )))
        .expect("extend");

    let events = engine.drain_material_events();
    assert_eq!(
        events,
        vec![
            MaterialEvent::UpdateColors {
                handle: MaterialHandle(0),
                colors: vec![[1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
                deferred: true,
            },
            MaterialEvent::GeometryChanged { deferred: true },
        ]
    );
}

#[test]
fn extend_colors_without_a_material_are_dropped() {
    let mut engine = Engine::new();
    let id = engine
        .apply(opts("{\"points\": [0, 0, 0]}"))
        .expect("create");
    engine.drain_material_events();

    engine
        .apply(opts(&format!(
            "{{\"points\": [1, 0, 0], \"colors\": [[0, 1, 0]], \"instance\": {id}}}"
        )))
        .expect("extend");

    let state = engine.state(id).expect("state");
    assert!(state.colors.is_empty());
    assert_eq!(
        engine.drain_material_events(),
        vec![MaterialEvent::GeometryChanged { deferred: false }]
    );
}

#[test]
fn create_mode_honors_material_opt_out() {
    let mut engine = Engine::new();
    let id = engine
        .apply(opts(
            "{\"points\": [0, 0, 0], \"colors\": [[1, 0, 0]], \
             \"createAndAssignMaterial\": false}",
        ))
        .expect("create");

    let state = engine.state(id).expect("state");
    assert!(!state.has_material());
    assert_eq!(state.colors, vec![[1.0, 0.0, 0.0]]);

    let events = engine.drain_material_events();
    assert!(events.iter().all(|e| matches!(e, MaterialEvent::GeometryChanged { .. })));
}

#[test]
fn deferred_is_an_alias_for_lazy() {
    let mut engine = Engine::new();
    engine
        .apply(opts("{\"points\": [0, 0, 0], \"deferred\": true}"))
        .expect("create");

    assert_eq!(
        engine.drain_material_events(),
        vec![MaterialEvent::GeometryChanged { deferred: true }]
    );
}

#[test]
fn removing_a_shape_forgets_its_id() {
    let mut engine = Engine::new();
    let id = engine.apply(opts("{\"points\": [0, 0, 0]}")).expect("create");

    assert!(engine.remove_shape(id));
    assert!(!engine.remove_shape(id));
    assert!(matches!(
        engine.state(id),
        Err(ShapeError::UnknownShape { .. })
    ));
}

#[test]
fn default_widths_fill_a_bare_point_batch() {
    let mut engine = Engine::new();
    let id = engine
        .apply(opts("{\"points\": [0, 0, 0, 1, 1, 1]}"))
        .expect("create");

    let state = engine.state(id).expect("state");
    assert_eq!(state.widths, vec![1.0; 4]);
}
