use super::*;
use crate::draw::font::FixedMetrics;
use crate::draw::viewport::Viewport;
use crate::draw::{BLUE, GREEN, RED};
use crate::image::PhotoImage;
use crate::input::events::{Key, MouseButton};
use crate::model::{PhotoModel, StrokeEntry};

fn metrics() -> FixedMetrics {
    FixedMetrics {
        advance: 10,
        height: 10,
    }
}

/// Unit scale, origin (0, 0), 200x200 image area.
fn viewport() -> Viewport {
    Viewport::fit(200, 200, 200, 200)
}

fn create_test_state() -> (PhotoModel, UiState) {
    let model = PhotoModel::new(PhotoImage::blank(200, 200).unwrap());
    let state = UiState::new(RED, 5);
    (model, state)
}

fn create_flipped_state() -> (PhotoModel, UiState) {
    let (mut model, state) = create_test_state();
    model.flip();
    (model, state)
}

#[test]
fn typing_builds_and_edits_an_annotation() {
    let (mut model, mut state) = create_flipped_state();
    let vp = viewport();

    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 10, 10);
    assert!(model.annotations().is_empty());

    state.on_key_press(&mut model, Key::Char('H'));
    assert_eq!(model.annotations().len(), 1);
    assert_eq!(model.annotations()[0].text(), "H|");
    assert!(model.annotations()[0].has_cursor());
    assert_eq!(model.annotations()[0].origin(), (10, 10));
    assert_eq!(state.cursor_position(), 1);
    assert_eq!(state.mode(), InteractionMode::EditingText);

    state.on_key_press(&mut model, Key::Char('i'));
    assert_eq!(model.annotations()[0].text(), "Hi|");
    assert_eq!(state.cursor_position(), 2);

    state.on_key_press(&mut model, Key::Left);
    assert_eq!(model.annotations()[0].text(), "H|i");
    assert_eq!(state.cursor_position(), 1);

    state.on_key_press(&mut model, Key::Backspace);
    assert_eq!(model.annotations()[0].text(), "|i");
    assert_eq!(state.cursor_position(), 0);

    // Backspace at position 0 is a guarded no-op.
    state.on_key_press(&mut model, Key::Backspace);
    assert_eq!(model.annotations()[0].text(), "|i");
    assert_eq!(state.cursor_position(), 0);
}

#[test]
fn dragging_on_empty_area_draws_a_stroke() {
    let (mut model, mut state) = create_flipped_state();
    let vp = viewport();

    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 10, 10);
    assert_eq!(state.mode(), InteractionMode::Idle);

    state.on_mouse_drag(&mut model, &vp, &metrics(), 20, 20);
    assert_eq!(state.mode(), InteractionMode::Drawing);
    state.on_mouse_drag(&mut model, &vp, &metrics(), 30, 30);

    state.on_mouse_release(&mut model, &vp, MouseButton::Left, 30, 30);
    assert_eq!(state.mode(), InteractionMode::Idle);
    assert_eq!(model.stroke_count(), 1);

    let points: Vec<_> = model
        .stroke_points(0)
        .iter()
        .map(|p| (p.x, p.y))
        .collect();
    assert_eq!(points, vec![(20, 20), (30, 30)]);
    assert!(model.stroke_points(0).iter().all(|p| p.color == RED));
}

#[test]
fn key_presses_are_ignored_while_drawing() {
    let (mut model, mut state) = create_flipped_state();
    let vp = viewport();

    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 10, 10);
    state.on_mouse_drag(&mut model, &vp, &metrics(), 20, 20);

    state.on_key_press(&mut model, Key::Char('x'));
    assert!(model.annotations().is_empty());
}

#[test]
fn key_presses_require_a_held_button() {
    let (mut model, mut state) = create_flipped_state();

    state.on_key_press(&mut model, Key::Char('x'));
    assert!(model.annotations().is_empty());
}

#[test]
fn events_outside_the_image_area_are_no_ops() {
    let (mut model, mut state) = create_flipped_state();
    // Image occupies the left half of a 400-wide component.
    let vp = Viewport::fit(400, 200, 200, 200);
    assert_eq!(vp.origin(), (100, 0));

    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 20, 50);
    state.on_mouse_drag(&mut model, &vp, &metrics(), 30, 60);
    state.on_key_press(&mut model, Key::Char('x'));

    assert!(model.entries().is_empty());
    assert!(model.annotations().is_empty());
}

#[test]
fn plain_display_mode_ignores_presses() {
    let (mut model, mut state) = create_test_state();
    let vp = viewport();

    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 10, 10);
    state.on_mouse_drag(&mut model, &vp, &metrics(), 20, 20);

    assert!(model.entries().is_empty());
}

#[test]
fn double_click_toggles_flip_inside_the_area_only() {
    let (mut model, mut state) = create_test_state();
    let vp = Viewport::fit(400, 200, 200, 200);

    state.on_double_click(&mut model, &vp, 20, 50);
    assert!(!model.flipped());

    state.on_double_click(&mut model, &vp, 150, 50);
    assert!(model.flipped());

    state.on_double_click(&mut model, &vp, 150, 50);
    assert!(!model.flipped());
}

#[test]
fn pressing_a_stroke_starts_dragging_it() {
    let (mut model, mut state) = create_flipped_state();
    let vp = viewport();

    model.add_point((0, 50), RED);
    model.add_point((100, 50), RED);
    model.end_stroke();

    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 50, 52);
    assert_eq!(state.selected_stroke(), Some(0));
    assert_eq!(state.mode(), InteractionMode::DraggingStroke);

    // Nearest point to (60, 62) is (100, 50); the whole stroke shifts by
    // the same delta and the anchor lands exactly on the pointer.
    state.on_mouse_drag(&mut model, &vp, &metrics(), 60, 62);
    let points: Vec<_> = model
        .stroke_points(0)
        .iter()
        .map(|p| (p.x, p.y))
        .collect();
    assert_eq!(points, vec![(-40, 62), (60, 62)]);

    state.on_mouse_release(&mut model, &vp, MouseButton::Left, 60, 62);
    assert_eq!(state.mode(), InteractionMode::Idle);
    // Selection survives the release for recoloring.
    assert_eq!(state.selected_stroke(), Some(0));
}

#[test]
fn pressing_text_resumes_editing_with_a_trailing_cursor() {
    let (mut model, mut state) = create_flipped_state();
    let vp = viewport();

    model.add_annotation("Hi".into(), (10, 50), RED);

    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 15, 45);
    assert_eq!(state.selected_text(), Some(0));
    assert_eq!(state.mode(), InteractionMode::EditingText);
    assert_eq!(model.annotations()[0].text(), "Hi|");
    assert!(model.annotations()[0].has_cursor());
    assert_eq!(state.cursor_position(), 2);
}

#[test]
fn pressing_elsewhere_commits_the_edit() {
    let (mut model, mut state) = create_flipped_state();
    let vp = viewport();

    model.add_annotation("Hi".into(), (10, 50), RED);
    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 15, 45);
    assert_eq!(model.annotations()[0].text(), "Hi|");

    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 150, 150);
    assert_eq!(model.annotations()[0].text(), "Hi");
    assert!(!model.annotations()[0].has_cursor());
    assert_eq!(state.selected_text(), None);
}

#[test]
fn dragging_text_recenters_it_on_the_pointer() {
    let (mut model, mut state) = create_flipped_state();
    let vp = viewport();

    model.add_annotation("abcd".into(), (10, 50), RED);
    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 15, 45);
    assert_eq!(model.annotations()[0].text(), "abcd|");

    // Rendered width of "abcd|" is 50; the origin lands half that to the
    // left of the pointer.
    state.on_mouse_drag(&mut model, &vp, &metrics(), 100, 60);
    assert_eq!(model.annotations()[0].origin(), (75, 60));
    assert_eq!(state.mode(), InteractionMode::EditingText);
}

#[test]
fn color_change_targets_selection_else_pen() {
    let (mut model, mut state) = create_flipped_state();
    let vp = viewport();

    // No selection: the picked color becomes the pen color.
    state.apply_color(&mut model, BLUE);
    assert_eq!(state.pen_color(), BLUE);

    // Stroke selected: the stroke recolors, the pen color is untouched.
    model.add_point((0, 50), RED);
    model.add_point((100, 50), RED);
    model.end_stroke();
    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 50, 50);
    state.apply_color(&mut model, GREEN);
    assert!(model.stroke_points(0).iter().all(|p| p.color == GREEN));
    assert_eq!(state.pen_color(), BLUE);

    // Text selected: the annotation recolors.
    model.add_annotation("Hi".into(), (10, 100), RED);
    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 15, 95);
    assert_eq!(state.selected_text(), Some(0));
    state.apply_color(&mut model, BLUE);
    assert_eq!(model.annotations()[0].color(), BLUE);
}

#[test]
fn release_inside_the_area_always_ends_the_stroke() {
    let (mut model, mut state) = create_flipped_state();
    let vp = viewport();

    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 10, 10);
    state.on_mouse_release(&mut model, &vp, MouseButton::Left, 10, 10);

    // No points were drawn; the lone boundary leaves an empty stroke.
    assert_eq!(model.entries(), &[StrokeEntry::Break]);
    assert_eq!(model.stroke_count(), 1);
    assert!(model.stroke_points(0).is_empty());
}

#[test]
fn release_outside_the_area_leaves_the_stroke_open() {
    let (mut model, mut state) = create_flipped_state();
    let vp = viewport();

    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 10, 10);
    state.on_mouse_drag(&mut model, &vp, &metrics(), 20, 20);
    state.on_mouse_release(&mut model, &vp, MouseButton::Left, 250, 250);

    assert_eq!(model.stroke_count(), 1);
    assert!(
        !model
            .entries()
            .iter()
            .any(|entry| matches!(entry, StrokeEntry::Break))
    );
}

#[test]
fn typing_while_holding_a_stroke_creates_text_at_the_press_point() {
    let (mut model, mut state) = create_flipped_state();
    let vp = viewport();

    model.add_point((0, 50), RED);
    model.add_point((100, 50), RED);
    model.end_stroke();

    state.on_mouse_press(&mut model, &vp, &metrics(), MouseButton::Left, 50, 50);
    assert_eq!(state.selected_stroke(), Some(0));

    state.on_key_press(&mut model, Key::Char('x'));
    assert_eq!(model.annotations().len(), 1);
    assert_eq!(model.annotations()[0].text(), "x|");
    assert_eq!(model.annotations()[0].origin(), (50, 50));
    // The annotation takes over as the interaction target.
    assert_eq!(state.selected_stroke(), None);
    assert_eq!(state.mode(), InteractionMode::EditingText);
}
