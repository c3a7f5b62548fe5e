use creativity_castle::input::route_event;
use creativity_castle::stamps::{Stamp, StampLibrary};
use creativity_castle::state::PickerKind;
use creativity_castle::{AppConfig, AppState, Effect, InputEvent, InputLocation, Region, Screen};
use egui::{Color32, PointerButton, Pos2};
use image::{Rgba, RgbaImage};

// Toolbar button centers in the default layout
const COLOR_BUTTON: Pos2 = Pos2::new(50.0, 575.0);
const SIZE_BUTTON: Pos2 = Pos2::new(140.0, 575.0);
const BACKGROUND_BUTTON: Pos2 = Pos2::new(230.0, 575.0);
const STAMPS_BUTTON: Pos2 = Pos2::new(320.0, 575.0);
const UNDO_BUTTON: Pos2 = Pos2::new(410.0, 575.0);
const CLEAR_BUTTON: Pos2 = Pos2::new(500.0, 575.0);
const SAVE_BUTTON: Pos2 = Pos2::new(590.0, 575.0);
const MENU_BUTTON: Pos2 = Pos2::new(750.0, 575.0);

/// Center of the `index`-th 20x20 swatch in the color, size and background pickers
fn swatch(index: usize) -> Pos2 {
    Pos2::new(20.0 + 30.0 * index as f32, 570.0)
}

fn stamp_slot(index: usize) -> Pos2 {
    Pos2::new(40.0 + 70.0 * index as f32, 530.0)
}

fn location(pos: Pos2) -> InputLocation {
    let region = if AppConfig::default().is_on_canvas(pos) {
        Region::Canvas
    } else {
        Region::Toolbar
    };
    InputLocation { position: pos, region }
}

fn press(state: &mut AppState, pos: Pos2) -> Option<Effect> {
    let event = InputEvent::PointerDown {
        location: location(pos),
        button: PointerButton::Primary,
    };
    route_event(&event, state)
}

fn release(state: &mut AppState, pos: Pos2) {
    let event = InputEvent::PointerUp {
        location: location(pos),
        button: PointerButton::Primary,
    };
    assert_eq!(route_event(&event, state), None);
}

fn move_to(state: &mut AppState, pos: Pos2) {
    let event = InputEvent::PointerMove {
        location: location(pos),
        held_buttons: vec![PointerButton::Primary],
    };
    assert_eq!(route_event(&event, state), None);
}

fn click(state: &mut AppState, pos: Pos2) -> Option<Effect> {
    let effect = press(state, pos);
    release(state, pos);
    effect
}

fn drag(state: &mut AppState, from: Pos2, to: Pos2) {
    press(state, from);
    move_to(state, to);
    release(state, to);
}

fn red_stamp_library() -> StampLibrary {
    let mut image = RgbaImage::from_pixel(9, 9, Rgba([255, 0, 0, 255]));
    image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
    StampLibrary::new(vec![
        Stamp::new(1, RgbaImage::from_pixel(3, 3, Rgba([0, 0, 255, 255]))),
        Stamp::new(2, image),
    ])
}

fn drawing_state() -> AppState {
    let mut state = AppState::new(AppConfig::default(), red_stamp_library());
    assert_eq!(click(&mut state, Pos2::new(450.0, 300.0)), Some(Effect::PlayDrawingMusic));
    assert_eq!(state.screen(), Screen::Drawing);
    state
}

fn pixel(state: &AppState, x: u32, y: u32) -> Option<Color32> {
    state.canvas().pixel(x, y)
}

#[test]
fn test_title_click_starts_drawing_without_painting() {
    let mut state = AppState::new(AppConfig::default(), StampLibrary::default());
    assert_eq!(state.startup_effect(), Effect::PlayTitleMusic);
    assert_eq!(state.screen(), Screen::Title);

    let effect = press(&mut state, Pos2::new(100.0, 100.0));
    assert_eq!(effect, Some(Effect::PlayDrawingMusic));
    assert_eq!(state.screen(), Screen::Drawing);
    assert_eq!(pixel(&state, 100, 100), Some(Color32::WHITE));
    assert!(state.history().is_empty());
}

#[test]
fn test_any_button_leaves_title() {
    let mut state = AppState::new(AppConfig::default(), StampLibrary::default());
    let event = InputEvent::PointerDown {
        location: location(Pos2::new(5.0, 5.0)),
        button: PointerButton::Secondary,
    };
    assert_eq!(route_event(&event, &mut state), Some(Effect::PlayDrawingMusic));
}

#[test]
fn test_press_draws_a_dot_and_snapshots() {
    let mut state = drawing_state();
    press(&mut state, Pos2::new(100.0, 100.0));

    assert_eq!(pixel(&state, 100, 100), Some(Color32::BLACK));
    assert_eq!(pixel(&state, 110, 100), Some(Color32::WHITE));
    assert_eq!(state.history().len(), 1);
    assert!(state.is_stroking());
}

#[test]
fn test_secondary_button_does_not_draw() {
    let mut state = drawing_state();
    let event = InputEvent::PointerDown {
        location: location(Pos2::new(100.0, 100.0)),
        button: PointerButton::Secondary,
    };
    assert_eq!(route_event(&event, &mut state), None);
    assert_eq!(pixel(&state, 100, 100), Some(Color32::WHITE));
    assert!(state.history().is_empty());
}

#[test]
fn test_drag_draws_connected_line() {
    let mut state = drawing_state();
    drag(&mut state, Pos2::new(100.0, 100.0), Pos2::new(200.0, 100.0));

    for x in (100..200).step_by(10) {
        assert_eq!(pixel(&state, x, 100), Some(Color32::BLACK), "gap at x={x}");
    }
    // One snapshot per press, not per motion
    assert_eq!(state.history().len(), 1);
    assert!(!state.is_stroking());
}

#[test]
fn test_motion_without_press_does_nothing() {
    let mut state = drawing_state();
    move_to(&mut state, Pos2::new(100.0, 100.0));
    move_to(&mut state, Pos2::new(200.0, 100.0));
    assert_eq!(pixel(&state, 150, 100), Some(Color32::WHITE));
}

#[test]
fn test_stroke_continues_into_toolbar_but_is_clipped() {
    let mut state = drawing_state();
    drag(&mut state, Pos2::new(300.0, 500.0), Pos2::new(300.0, 590.0));
    assert_eq!(pixel(&state, 300, 549), Some(Color32::BLACK));
    assert_eq!(pixel(&state, 300, 550), None);
}

#[test]
fn test_color_selection_only_affects_later_strokes() {
    let mut state = drawing_state();
    drag(&mut state, Pos2::new(50.0, 50.0), Pos2::new(150.0, 50.0));

    assert_eq!(click(&mut state, COLOR_BUTTON), None);
    assert_eq!(state.screen(), Screen::Picker(PickerKind::PenColor));

    // Clicks off the swatches keep the picker open
    click(&mut state, Pos2::new(400.0, 200.0));
    assert_eq!(state.screen(), Screen::Picker(PickerKind::PenColor));
    assert_eq!(pixel(&state, 400, 200), Some(Color32::WHITE));

    click(&mut state, swatch(0));
    assert_eq!(state.screen(), Screen::Drawing);
    assert_eq!(state.tools().pen_color, Color32::RED);

    drag(&mut state, Pos2::new(50.0, 150.0), Pos2::new(150.0, 150.0));
    assert_eq!(pixel(&state, 100, 150), Some(Color32::RED));
    assert_eq!(pixel(&state, 100, 50), Some(Color32::BLACK));
}

#[test]
fn test_picker_clicks_do_not_snapshot() {
    let mut state = drawing_state();
    click(&mut state, COLOR_BUTTON);
    click(&mut state, swatch(2));
    click(&mut state, SIZE_BUTTON);
    click(&mut state, swatch(4));
    assert!(state.history().is_empty());
    assert_eq!(state.tools().pen_color, Color32::BLUE);
    assert_eq!(state.tools().pen_size, 20);
}

#[test]
fn test_size_selection_widens_strokes() {
    let mut state = drawing_state();
    click(&mut state, SIZE_BUTTON);
    assert_eq!(state.screen(), Screen::Picker(PickerKind::PenSize));
    click(&mut state, swatch(3));
    assert_eq!(state.tools().pen_size, 10);

    drag(&mut state, Pos2::new(100.0, 100.0), Pos2::new(300.0, 100.0));
    assert_eq!(pixel(&state, 200, 108), Some(Color32::BLACK));
    assert_eq!(pixel(&state, 200, 115), Some(Color32::WHITE));
}

#[test]
fn test_background_fill_is_undoable() {
    let mut state = drawing_state();
    press(&mut state, Pos2::new(10.0, 10.0));
    release(&mut state, Pos2::new(10.0, 10.0));
    let before = state.canvas().clone();

    click(&mut state, BACKGROUND_BUTTON);
    assert_eq!(state.screen(), Screen::Picker(PickerKind::Background));
    click(&mut state, swatch(1));

    assert_eq!(state.screen(), Screen::Drawing);
    assert_eq!(pixel(&state, 10, 10), Some(Color32::GREEN));
    assert_eq!(pixel(&state, 899, 549), Some(Color32::GREEN));
    // Pen color is untouched by the background picker
    assert_eq!(state.tools().pen_color, Color32::BLACK);

    click(&mut state, UNDO_BUTTON);
    assert_eq!(state.canvas(), &before);
}

#[test]
fn test_undo_and_clear_buttons() {
    let mut state = drawing_state();
    press(&mut state, Pos2::new(60.0, 60.0));
    release(&mut state, Pos2::new(60.0, 60.0));
    press(&mut state, Pos2::new(120.0, 60.0));
    release(&mut state, Pos2::new(120.0, 60.0));

    click(&mut state, UNDO_BUTTON);
    assert_eq!(pixel(&state, 60, 60), Some(Color32::BLACK));
    assert_eq!(pixel(&state, 120, 60), Some(Color32::WHITE));

    click(&mut state, CLEAR_BUTTON);
    assert_eq!(pixel(&state, 60, 60), Some(Color32::WHITE));
    click(&mut state, UNDO_BUTTON);
    assert_eq!(pixel(&state, 60, 60), Some(Color32::BLACK));
}

#[test]
fn test_save_button_requests_save() {
    let mut state = drawing_state();
    assert_eq!(click(&mut state, SAVE_BUTTON), Some(Effect::SavePicture));
    assert_eq!(state.screen(), Screen::Drawing);
}

#[test]
fn test_toolbar_gap_does_nothing() {
    let mut state = drawing_state();
    assert_eq!(click(&mut state, Pos2::new(670.0, 575.0)), None);
    assert_eq!(state.screen(), Screen::Drawing);
    assert!(state.history().is_empty());
}

#[test]
fn test_stamp_placement_and_deselection() {
    let mut state = drawing_state();
    click(&mut state, STAMPS_BUTTON);
    assert_eq!(state.screen(), Screen::Picker(PickerKind::Stamp));

    click(&mut state, stamp_slot(1));
    assert_eq!(state.screen(), Screen::Drawing);
    assert_eq!(state.tools().stamp, Some(1));

    // A 9x9 stamp is centered on the click; dragging does not smear it
    drag(&mut state, Pos2::new(200.0, 200.0), Pos2::new(260.0, 200.0));
    assert_eq!(pixel(&state, 200, 200), Some(Color32::RED));
    assert_eq!(pixel(&state, 204, 204), Some(Color32::RED));
    assert_eq!(pixel(&state, 205, 200), Some(Color32::WHITE));
    assert_eq!(pixel(&state, 230, 200), Some(Color32::WHITE));
    // The transparent corner left the canvas alone
    assert_eq!(pixel(&state, 196, 196), Some(Color32::WHITE));
    assert_eq!(state.history().len(), 1);

    // Clicking above the strip closes the picker with no stamp
    click(&mut state, STAMPS_BUTTON);
    click(&mut state, Pos2::new(600.0, 100.0));
    assert_eq!(state.screen(), Screen::Drawing);
    assert_eq!(state.tools().stamp, None);

    press(&mut state, Pos2::new(400.0, 300.0));
    assert_eq!(pixel(&state, 400, 300), Some(Color32::BLACK));
}

#[test]
fn test_stamp_picker_ignores_clicks_in_strip_band() {
    let mut state = drawing_state();
    click(&mut state, STAMPS_BUTTON);
    click(&mut state, Pos2::new(600.0, 530.0));
    assert_eq!(state.screen(), Screen::Picker(PickerKind::Stamp));
    click(&mut state, Pos2::new(600.0, 580.0));
    assert_eq!(state.screen(), Screen::Picker(PickerKind::Stamp));
}

#[test]
fn test_menu_returns_to_title_and_keeps_drawing() {
    let mut state = drawing_state();
    press(&mut state, Pos2::new(100.0, 100.0));
    release(&mut state, Pos2::new(100.0, 100.0));

    assert_eq!(click(&mut state, MENU_BUTTON), Some(Effect::PlayTitleMusic));
    assert_eq!(state.screen(), Screen::Title);

    assert_eq!(click(&mut state, Pos2::new(100.0, 100.0)), Some(Effect::PlayDrawingMusic));
    assert_eq!(pixel(&state, 100, 100), Some(Color32::BLACK));
    assert_eq!(state.history().len(), 1);
}
