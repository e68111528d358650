use super::*;
use crate::canvas::SettleOutcome;
use crate::selection::LinkSelection;

/// Run a single headless egui frame that draws the canvas with the provided input.
fn run_frame(
    ctx: &egui::Context,
    app: &mut CanvasApp,
    events: Vec<egui::Event>,
    modifiers: egui::Modifiers,
) {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1000.0, 800.0),
    ));
    raw.modifiers = modifiers;
    raw.events = events;
    let _ = ctx.run(raw, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            app.draw_canvas(ui);
        });
    });
}

fn press(pos: egui::Pos2, pressed: bool, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers,
    }
}

/// Presses and releases the primary button at a scene position over two frames.
fn click_at(ctx: &egui::Context, app: &mut CanvasApp, world: egui::Pos2, modifiers: egui::Modifiers) {
    let screen = app.world_to_screen(world);
    run_frame(
        ctx,
        app,
        vec![egui::Event::PointerMoved(screen), press(screen, true, modifiers)],
        modifiers,
    );
    run_frame(ctx, app, vec![press(screen, false, modifiers)], modifiers);
}

/// Runs one idle frame so the viewport origin is known.
fn settle_layout(ctx: &egui::Context, app: &mut CanvasApp) {
    run_frame(ctx, app, Vec::new(), egui::Modifiers::NONE);
}

#[test]
fn coordinate_mapping_round_trips_through_origin() {
    let mut app = CanvasApp::default();
    app.viewport.origin = egui::vec2(8.0, 12.0);
    let world = egui::pos2(100.0, 75.0);
    assert_eq!(app.world_to_screen(world), egui::pos2(108.0, 87.0));
    assert_eq!(app.screen_to_world(egui::pos2(108.0, 87.0)), world);
}

#[test]
fn ctrl_clicking_two_shapes_toggles_a_link() {
    let mut app = CanvasApp::default();
    let a = app.canvas.create_shape(egui::pos2(50.0, 50.0)).unwrap();
    let b = app.canvas.create_shape(egui::pos2(200.0, 50.0)).unwrap();
    let ctx = egui::Context::default();
    settle_layout(&ctx, &mut app);

    click_at(&ctx, &mut app, egui::pos2(100.0, 75.0), egui::Modifiers::COMMAND);
    assert_eq!(app.canvas.selection(), LinkSelection::OneSelected(a));
    click_at(&ctx, &mut app, egui::pos2(250.0, 75.0), egui::Modifiers::COMMAND);
    assert_eq!(app.canvas.links().len(), 1);
    assert!(app.canvas.link_between(a, b).is_some());

    click_at(&ctx, &mut app, egui::pos2(100.0, 75.0), egui::Modifiers::COMMAND);
    click_at(&ctx, &mut app, egui::pos2(250.0, 75.0), egui::Modifiers::COMMAND);
    assert!(app.canvas.links().is_empty());
    assert_eq!(app.canvas.shapes().len(), 2);
}

#[test]
fn plain_click_clears_pending_selection() {
    let mut app = CanvasApp::default();
    app.canvas.create_shape(egui::pos2(50.0, 50.0)).unwrap();
    let ctx = egui::Context::default();
    settle_layout(&ctx, &mut app);

    click_at(&ctx, &mut app, egui::pos2(100.0, 75.0), egui::Modifiers::COMMAND);
    assert!(app.canvas.selection().pending().is_some());
    click_at(&ctx, &mut app, egui::pos2(500.0, 400.0), egui::Modifiers::NONE);
    assert_eq!(app.canvas.selection(), LinkSelection::Idle);
}

#[test]
fn dragging_a_shape_moves_it_with_the_pointer() {
    let mut app = CanvasApp::default();
    let a = app.canvas.create_shape(egui::pos2(50.0, 50.0)).unwrap();
    let ctx = egui::Context::default();
    settle_layout(&ctx, &mut app);

    let start = app.world_to_screen(egui::pos2(100.0, 75.0));
    let end = app.world_to_screen(egui::pos2(300.0, 275.0));
    run_frame(
        &ctx,
        &mut app,
        vec![egui::Event::PointerMoved(start), press(start, true, egui::Modifiers::NONE)],
        egui::Modifiers::NONE,
    );
    assert_eq!(app.canvas.dragging(), Some(a));

    run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(end)], egui::Modifiers::NONE);
    assert_eq!(app.canvas.shape(a).unwrap().position(), egui::pos2(250.0, 250.0));

    run_frame(&ctx, &mut app, vec![press(end, false, egui::Modifiers::NONE)], egui::Modifiers::NONE);
    assert_eq!(app.canvas.dragging(), None);
}

#[test]
fn dragging_into_another_shape_leaves_it_in_place() {
    let mut app = CanvasApp::default();
    let a = app.canvas.create_shape(egui::pos2(50.0, 50.0)).unwrap();
    let b = app.canvas.create_shape(egui::pos2(200.0, 50.0)).unwrap();
    let ctx = egui::Context::default();
    settle_layout(&ctx, &mut app);

    let start = app.world_to_screen(egui::pos2(100.0, 75.0));
    let end = app.world_to_screen(egui::pos2(260.0, 80.0));
    run_frame(
        &ctx,
        &mut app,
        vec![egui::Event::PointerMoved(start), press(start, true, egui::Modifiers::NONE)],
        egui::Modifiers::NONE,
    );
    run_frame(&ctx, &mut app, vec![egui::Event::PointerMoved(end)], egui::Modifiers::NONE);
    run_frame(&ctx, &mut app, vec![press(end, false, egui::Modifiers::NONE)], egui::Modifiers::NONE);

    assert_eq!(app.canvas.shape(a).unwrap().position(), egui::pos2(50.0, 50.0));
    assert_eq!(app.canvas.shape(b).unwrap().position(), egui::pos2(200.0, 50.0));
    assert_eq!(app.canvas.settle(a), Ok(SettleOutcome::AlreadyClear));
}

#[test]
fn plain_click_beside_the_scene_clears_pending_selection() {
    let mut app = CanvasApp::default();
    app.canvas.create_shape(egui::pos2(50.0, 50.0)).unwrap();
    let ctx = egui::Context::default();
    settle_layout(&ctx, &mut app);

    click_at(&ctx, &mut app, egui::pos2(100.0, 75.0), egui::Modifiers::COMMAND);
    assert!(app.canvas.selection().pending().is_some());

    // Right of the 800-wide scene but still inside the 1000-wide panel.
    let beside = app.screen_to_world(egui::pos2(900.0, 300.0));
    assert!(!app.canvas.config().scene_rect().contains(beside));
    click_at(&ctx, &mut app, beside, egui::Modifiers::NONE);
    assert_eq!(app.canvas.selection(), LinkSelection::Idle);
    assert_eq!(app.canvas.shapes().len(), 1);
}

#[test]
fn double_clicking_empty_scene_creates_a_centred_shape() {
    let mut app = CanvasApp::default();
    let ctx = egui::Context::default();
    settle_layout(&ctx, &mut app);

    click_at(&ctx, &mut app, egui::pos2(400.0, 300.0), egui::Modifiers::NONE);
    click_at(&ctx, &mut app, egui::pos2(400.0, 300.0), egui::Modifiers::NONE);

    assert_eq!(app.canvas.shapes().len(), 1);
    assert_eq!(app.canvas.shapes()[0].position(), egui::pos2(350.0, 275.0));
}
