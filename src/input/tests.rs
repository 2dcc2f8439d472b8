use super::*;
use crate::config::{Config, OverflowPolicy, PartialEndPolicy};
use crate::draw::{BLACK, BLUE, Color, RED};

const A: ContactId = ContactId(1);
const B: ContactId = ContactId(2);
const C: ContactId = ContactId(3);

fn create_test_engine() -> StrokeEngine {
    StrokeEngine::new(BLACK)
}

fn last_path(engine: &StrokeEngine) -> String {
    engine.surface().last().expect("stroke present").path_data()
}

/// Draws a short single-contact stroke and lifts it.
fn scribble(engine: &mut StrokeEngine, x: f64) {
    engine.begin_contact(A, x, 0.0);
    engine.update_contact(A, x + 1.0, 1.0);
    engine.end_contact(A);
}

/// Starts a pair: A at (0,0)->(5,0), B at (10,10)->(5,10).
fn start_pair(engine: &mut StrokeEngine) {
    engine.begin_contact(A, 0.0, 0.0);
    engine.begin_contact(B, 10.0, 10.0);
    engine.update_contact(A, 5.0, 0.0);
    engine.update_contact(B, 5.0, 10.0);
}

#[test]
fn single_contact_draws_open_path() {
    let mut engine = create_test_engine();
    assert!(engine.begin_contact(A, 0.0, 0.0));
    engine.update_contact(A, 10.0, 0.0);
    engine.update_contact(A, 10.0, 10.0);
    engine.end_contact(A);

    assert_eq!(engine.surface().len(), 1);
    let stroke = engine.surface().last().unwrap();
    assert_eq!(stroke.fill(), None);
    assert!(!stroke.geometry.is_closed());
    assert_eq!(stroke.path_data(), "M 0 0 L 10 0 L 10 10");
    assert_eq!(engine.state(), DrawingState::Idle);
}

#[test]
fn path_tracks_every_update_while_drawing() {
    let mut engine = create_test_engine();
    engine.begin_contact(A, 1.0, 1.0);
    assert_eq!(last_path(&engine), "M 1 1");
    engine.update_contact(A, 2.0, 2.0);
    assert_eq!(last_path(&engine), "M 1 1 L 2 2");
    assert_eq!(engine.state(), DrawingState::Drawing);
    assert_eq!(engine.mode(), ContactMode::Single);
}

#[test]
fn two_contacts_fill_a_closed_ring() {
    let mut engine = create_test_engine();
    engine.set_color(RED);
    start_pair(&mut engine);

    assert_eq!(engine.surface().len(), 1);
    assert_eq!(engine.mode(), ContactMode::Paired);
    let stroke = engine.surface().last().unwrap();
    assert_eq!(stroke.fill(), Some(RED));
    assert_eq!(stroke.color, RED);
    assert_eq!(stroke.path_data(), "M 0 0 L 5 0 L 5 10 L 10 10 L 0 0");
}

#[test]
fn second_contact_reuses_the_existing_stroke() {
    let mut engine = create_test_engine();
    engine.begin_contact(A, 0.0, 0.0);
    engine.begin_contact(B, 4.0, 4.0);
    assert_eq!(engine.surface().len(), 1);
    assert_eq!(last_path(&engine), "M 0 0 L 4 4 L 0 0");
}

#[test]
fn undo_removes_most_recent_strokes_one_at_a_time() {
    let mut engine = create_test_engine();
    for x in [0.0, 10.0, 20.0] {
        scribble(&mut engine, x);
    }
    assert_eq!(engine.surface().len(), 3);

    engine.undo();
    assert_eq!(last_path(&engine), "M 10 0 L 11 1");
    engine.undo();
    engine.undo();
    assert!(engine.surface().is_empty());

    engine.undo();
    assert!(engine.surface().is_empty());
}

#[test]
fn clear_on_empty_surface_is_a_no_op() {
    let mut engine = create_test_engine();
    engine.clear();
    assert!(engine.surface().is_empty());

    scribble(&mut engine, 0.0);
    scribble(&mut engine, 5.0);
    engine.clear();
    engine.clear();
    assert!(engine.surface().is_empty());
}

#[test]
fn color_is_captured_when_the_stroke_begins() {
    let mut engine = create_test_engine();
    engine.set_color(RED);
    scribble(&mut engine, 0.0);
    engine.set_color(BLUE);
    engine.begin_contact(A, 0.0, 0.0);
    engine.set_color(Color::new(1, 2, 3));
    engine.update_contact(A, 1.0, 1.0);
    engine.end_contact(A);

    let colors: Vec<_> = engine.surface().iter().map(|s| s.color).collect();
    assert_eq!(colors, vec![RED, BLUE]);
    assert_eq!(engine.current_color(), Color::new(1, 2, 3));
}

#[test]
fn set_color_str_accepts_palette_hex() {
    let mut engine = create_test_engine();
    assert_eq!(engine.set_color_str("0000ff"), Ok(BLUE));
    assert!(engine.set_color_str("zzz").is_err());
    assert_eq!(engine.current_color(), BLUE);
}

#[test]
fn begin_then_end_leaves_single_point_stroke() {
    let mut engine = create_test_engine();
    engine.begin_contact(A, 3.0, 3.0);
    engine.end_contact(A);

    assert_eq!(engine.surface().len(), 1);
    assert_eq!(engine.surface().last().unwrap().geometry.points().len(), 1);
    assert_eq!(last_path(&engine), "M 3 3");
}

#[test]
fn out_of_order_calls_are_ignored() {
    let mut engine = create_test_engine();
    engine.update_contact(A, 1.0, 1.0);
    engine.end_contact(A);
    assert!(engine.surface().is_empty());
    assert_eq!(engine.state(), DrawingState::Idle);

    engine.begin_contact(A, 0.0, 0.0);
    engine.update_contact(B, 9.0, 9.0);
    engine.end_contact(B);
    assert_eq!(last_path(&engine), "M 0 0");
    assert_eq!(engine.active_contacts(), 1);
}

#[test]
fn duplicate_begin_is_rejected() {
    let mut engine = create_test_engine();
    assert!(engine.begin_contact(A, 0.0, 0.0));
    assert!(!engine.begin_contact(A, 5.0, 5.0));
    assert_eq!(engine.active_contacts(), 1);
    assert_eq!(last_path(&engine), "M 0 0");
}

#[test]
fn contact_id_can_be_reused_after_it_ends() {
    let mut engine = create_test_engine();
    scribble(&mut engine, 0.0);
    scribble(&mut engine, 0.0);
    assert_eq!(engine.surface().len(), 2);
}

#[test]
fn third_contact_is_ignored_by_default() {
    let mut engine = create_test_engine();
    start_pair(&mut engine);
    assert!(!engine.begin_contact(C, 50.0, 50.0));
    engine.update_contact(C, 60.0, 60.0);
    engine.end_contact(C);

    assert_eq!(engine.mode(), ContactMode::Paired);
    assert_eq!(last_path(&engine), "M 0 0 L 5 0 L 5 10 L 10 10 L 0 0");
}

#[test]
fn third_contact_concatenates_when_configured() {
    let mut engine = create_test_engine();
    engine.overflow = OverflowPolicy::Concatenate;
    start_pair(&mut engine);
    assert!(engine.begin_contact(C, 50.0, 50.0));

    assert_eq!(engine.mode(), ContactMode::Overflow);
    let stroke = engine.surface().last().unwrap();
    assert_eq!(stroke.fill(), None);
    assert_eq!(stroke.path_data(), "M 0 0 L 5 0 L 10 10 L 5 10 L 50 50");

    // Dropping back to two contacts restores the ring from the remaining pair.
    engine.end_contact(A);
    assert_eq!(engine.mode(), ContactMode::Paired);
    assert_eq!(last_path(&engine), "M 10 10 L 5 10 L 50 50 L 10 10");
}

#[test]
fn broken_pair_freezes_fill_by_default() {
    let mut engine = create_test_engine();
    start_pair(&mut engine);
    engine.end_contact(B);

    assert!(engine.is_frozen());
    assert_eq!(engine.state(), DrawingState::Drawing);
    engine.update_contact(A, 100.0, 100.0);
    let stroke = engine.surface().last().unwrap();
    assert!(stroke.geometry.is_closed());
    assert_eq!(stroke.path_data(), "M 0 0 L 5 0 L 5 10 L 10 10 L 0 0");

    // A frozen gesture accepts no new contacts until the survivor lifts.
    assert!(!engine.begin_contact(C, 1.0, 1.0));
    engine.end_contact(A);
    assert_eq!(engine.state(), DrawingState::Idle);
    assert_eq!(engine.surface().len(), 1);
}

#[test]
fn broken_pair_reverts_to_survivor_path_when_configured() {
    let mut engine = create_test_engine();
    engine.partial_end = PartialEndPolicy::Revert;
    start_pair(&mut engine);
    engine.end_contact(B);

    assert!(!engine.is_frozen());
    assert_eq!(engine.mode(), ContactMode::Single);
    let stroke = engine.surface().last().unwrap();
    assert_eq!(stroke.fill(), None);
    assert_eq!(stroke.path_data(), "M 0 0 L 5 0");

    engine.update_contact(A, 5.0, 5.0);
    assert_eq!(last_path(&engine), "M 0 0 L 5 0 L 5 5");

    // A new contact re-forms the pair on the same stroke.
    assert!(engine.begin_contact(C, 9.0, 9.0));
    assert_eq!(engine.surface().len(), 1);
    assert_eq!(last_path(&engine), "M 0 0 L 5 0 L 5 5 L 9 9 L 0 0");
}

#[test]
fn undo_mid_gesture_ends_the_gesture() {
    let mut engine = create_test_engine();
    scribble(&mut engine, 0.0);
    engine.begin_contact(A, 20.0, 20.0);
    engine.undo();

    assert_eq!(engine.state(), DrawingState::Idle);
    assert_eq!(engine.surface().len(), 1);
    engine.update_contact(A, 30.0, 30.0);
    assert_eq!(last_path(&engine), "M 0 0 L 1 1");
}

#[test]
fn clear_mid_gesture_ends_the_gesture() {
    let mut engine = create_test_engine();
    engine.begin_contact(A, 0.0, 0.0);
    engine.clear();
    assert_eq!(engine.state(), DrawingState::Idle);
    engine.update_contact(A, 1.0, 1.0);
    assert!(engine.surface().is_empty());
}

#[test]
fn stroke_limit_refuses_new_gestures() {
    let mut engine = create_test_engine();
    engine.max_strokes = 1;
    scribble(&mut engine, 0.0);
    assert!(!engine.begin_contact(A, 5.0, 5.0));
    assert_eq!(engine.state(), DrawingState::Idle);
    assert_eq!(engine.surface().len(), 1);

    engine.undo();
    assert!(engine.begin_contact(A, 5.0, 5.0));
}

#[test]
fn non_finite_begin_starts_nothing() {
    let mut engine = create_test_engine();
    assert!(!engine.begin_contact(A, f64::NAN, 0.0));
    assert!(!engine.begin_contact(A, 0.0, f64::INFINITY));
    assert!(engine.surface().is_empty());
    assert_eq!(engine.state(), DrawingState::Idle);

    engine.begin_contact(A, 0.0, 0.0);
    assert!(!engine.begin_contact(B, f64::NEG_INFINITY, 1.0));
    assert_eq!(engine.mode(), ContactMode::Single);
}

#[test]
fn non_finite_update_is_dropped() {
    let mut engine = create_test_engine();
    engine.begin_contact(A, 0.0, 0.0);
    engine.update_contact(A, f64::NAN, 3.0);
    engine.update_contact(A, 4.0, f64::INFINITY);
    engine.update_contact(A, 5.0, 5.0);
    engine.end_contact(A);
    assert_eq!(last_path(&engine), "M 0 0 L 5 5");
    assert!(!engine.export_document().contains("NaN"));
}

#[test]
fn from_config_applies_policies_and_styling() {
    let config: Config = toml::from_str(
        r##"
[drawing]
default_color = "#00ff00"
stroke_width = 8.0
opacity = 0.5

[engine]
overflow = "concatenate"
partial_end = "revert"
max_strokes = 1
"##,
    )
    .unwrap();
    let mut engine = StrokeEngine::from_config(&config, BLUE);
    assert_eq!(engine.current_color(), Color::new(0, 255, 0));

    engine.begin_contact(A, 0.0, 0.0);
    engine.begin_contact(B, 10.0, 10.0);
    assert!(engine.begin_contact(C, 20.0, 20.0));
    assert_eq!(engine.mode(), ContactMode::Overflow);

    engine.end_contact(C);
    engine.end_contact(A);
    assert!(!engine.is_frozen());
    assert_eq!(last_path(&engine), "M 10 10");
    engine.end_contact(B);

    assert!(!engine.begin_contact(A, 1.0, 1.0));
    assert_eq!(engine.surface().len(), 1);

    let document = engine.export_document();
    assert!(document.contains(r##"stroke="#00ff00""##));
    assert!(document.contains(r#"stroke-width="8""#));
    assert!(document.contains(r#"opacity="0.5""#));
}

#[test]
fn from_config_uses_fallback_color_when_unset() {
    let engine = StrokeEngine::from_config(&Config::default(), BLUE);
    assert_eq!(engine.current_color(), BLUE);
    assert_eq!(engine.overflow, OverflowPolicy::Ignore);
    assert_eq!(engine.partial_end, PartialEndPolicy::Freeze);
    assert_eq!(engine.max_strokes, 0);
    assert_eq!(engine.style.width, 5.0);
}

#[test]
fn export_round_trips_path_data() {
    let mut engine = create_test_engine();
    scribble(&mut engine, 0.0);
    start_pair(&mut engine);
    engine.end_contact(A);
    engine.end_contact(B);
    engine.begin_contact(A, 3.5, 3.0);
    engine.end_contact(A);

    let document = engine.export_document();
    let parsed = roxmltree::Document::parse(&document).unwrap();
    let root = parsed.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
    assert_eq!(root.attribute("version"), Some("1.1"));

    let paths: Vec<_> = root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
        .collect();
    assert_eq!(paths.len(), engine.surface().len());
    for (node, stroke) in paths.iter().zip(engine.surface()) {
        assert_eq!(node.attribute("d"), Some(stroke.path_data().as_str()));
        assert_eq!(node.attribute("stroke-width"), Some("5"));
        assert_eq!(node.attribute("stroke-linecap"), Some("round"));
        assert_eq!(node.attribute("stroke-linejoin"), Some("round"));
    }
    assert_eq!(paths[0].attribute("fill"), Some("none"));
    assert_eq!(paths[1].attribute("fill"), Some("#000000"));
}

#[test]
fn export_of_empty_surface_is_valid() {
    let engine = create_test_engine();
    let document = engine.export_document();
    let parsed = roxmltree::Document::parse(&document).unwrap();
    assert_eq!(parsed.root_element().children().filter(|n| n.is_element()).count(), 0);
}
