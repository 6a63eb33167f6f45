use defectscope_core::consts::{WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
use defectscope_core::viewport::DragState;

use crate::app::DefectscopeApp;
use crate::states::TextureSurface;

const ORIGINAL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(173, 216, 230);
const EDGES_BACKGROUND: egui::Color32 = egui::Color32::from_gray(211);

pub fn show(ctx: &egui::Context, app: &mut DefectscopeApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if !app.viewport.is_loaded() {
            show_placeholder(ui);
            return;
        }

        let full = ui.available_rect_before_wrap();
        let gap = 8.0;
        let half = (full.width() - gap) / 2.0;
        let left_rect = egui::Rect::from_min_size(full.min, egui::vec2(half, full.height()));
        let right_rect = egui::Rect::from_min_size(
            egui::pos2(full.min.x + half + gap, full.min.y),
            egui::vec2(half, full.height()),
        );

        let left = ui.interact(left_rect, ui.id().with("original"), egui::Sense::drag());
        let right = ui.interact(right_rect, ui.id().with("edges"), egui::Sense::drag());

        handle_zoom(ui, &left, &right, app);
        handle_pan(ui, &left, &right, app);
        // After gestures, so a zoom in this frame paints the resampled raster.
        upload_surfaces(ui.ctx(), app);

        paint_surface(ui, left_rect, app.viewport.original_surface(), ORIGINAL_BACKGROUND, "Original");
        paint_surface(ui, right_rect, app.viewport.derived_surface(), EDGES_BACKGROUND, "Edges");
        ui.advance_cursor_after_rect(full);
    });
}

/// One zoom step per scroll tick over either display.
fn handle_zoom(
    ui: &egui::Ui,
    left: &egui::Response,
    right: &egui::Response,
    app: &mut DefectscopeApp,
) {
    if !(left.hovered() || right.hovered()) {
        return;
    }
    let scroll = ui.input(|i| i.raw_scroll_delta.y);
    apply_scroll(app, scroll);
}

/// Zoom by one wheel step in the direction of `scroll`. Returns the new zoom.
fn apply_scroll(app: &mut DefectscopeApp, scroll: f32) -> Option<f32> {
    if scroll == 0.0 {
        return None;
    }
    let multiplier = if scroll > 0.0 {
        WHEEL_ZOOM_IN
    } else {
        WHEEL_ZOOM_OUT
    };
    app.viewport.adjust_zoom(multiplier)
}

/// Dragging either display moves both.
fn handle_pan(
    ui: &egui::Ui,
    left: &egui::Response,
    right: &egui::Response,
    app: &mut DefectscopeApp,
) {
    for response in [left, right] {
        if !response.dragged() {
            continue;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            continue;
        };
        // egui reports the drag only once the pointer has passed its drag
        // threshold, so the drag starts from where the button went down.
        let press = response
            .drag_started()
            .then(|| ui.input(|i| i.pointer.press_origin()).unwrap_or(pos))
            .map(to_pixel);

        if let Some((dx, dy)) = drag_step(&mut app.ui_state.drag, press, to_pixel(pos)) {
            app.viewport.pan(dx, dy);
        }
    }
    if left.drag_stopped() || right.drag_stopped() {
        app.ui_state.drag.end();
    }
}

/// Start the drag at `press` if given, then move it to `current`.
///
/// Returns the movement to pan by, or `None` when nothing moved.
fn drag_step(
    drag: &mut DragState,
    press: Option<(i32, i32)>,
    current: (i32, i32),
) -> Option<(i32, i32)> {
    if let Some((x, y)) = press {
        drag.begin(x, y);
    }
    if !drag.is_active() {
        return None;
    }
    drag.drag_to(current.0, current.1)
        .filter(|&(dx, dy)| dx != 0 || dy != 0)
}

fn to_pixel(pos: egui::Pos2) -> (i32, i32) {
    (pos.x.round() as i32, pos.y.round() as i32)
}

fn upload_surfaces(ctx: &egui::Context, app: &mut DefectscopeApp) {
    let (original, derived) = app.viewport.surfaces_mut();
    original.upload(ctx);
    derived.upload(ctx);
}

fn paint_surface(
    ui: &egui::Ui,
    rect: egui::Rect,
    surface: &TextureSurface,
    background: egui::Color32,
    label: &str,
) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, background);

    if let Some((texture_id, size)) = surface.drawable() {
        let img_rect = egui::Rect::from_min_size(rect.min + surface.offset, size);
        painter.image(
            texture_id,
            img_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }

    painter.text(
        rect.left_top() + egui::vec2(8.0, 8.0),
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_black_alpha(180),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Upload an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

#[cfg(test)]
mod tests {
    use defectscope_core::raster::Raster;

    use super::*;

    #[test]
    fn test_drag_pans_from_press_origin() {
        let mut drag = DragState::default();

        // Button went down at (10, 10); egui reports the drag at (16, 12).
        assert_eq!(drag_step(&mut drag, Some((10, 10)), (16, 12)), Some((6, 2)));
        assert_eq!(drag_step(&mut drag, None, (18, 12)), Some((2, 0)));
        assert_eq!(drag_step(&mut drag, None, (18, 12)), None);
    }

    #[test]
    fn test_drag_without_start_is_ignored() {
        let mut drag = DragState::default();
        assert_eq!(drag_step(&mut drag, None, (5, 5)), None);
    }

    #[test]
    fn test_scroll_zoom_uploads_resampled_texture() {
        let ctx = egui::Context::default();
        let mut app = DefectscopeApp::new(&ctx);
        assert!(app.viewport.set_images(Raster::new(20, 10), Raster::new(20, 10)));
        upload_surfaces(&ctx, &mut app);

        assert_eq!(apply_scroll(&mut app, 1.0), Some(1.1));
        upload_surfaces(&ctx, &mut app);

        for surface in [app.viewport.original_surface(), app.viewport.derived_surface()] {
            let texture = surface.texture.as_ref().unwrap();
            assert_eq!(Some(texture.size()), surface.image_size);
            assert_eq!(texture.size(), [22, 11]);
        }
    }

    #[test]
    fn test_no_scroll_keeps_zoom() {
        let ctx = egui::Context::default();
        let mut app = DefectscopeApp::new(&ctx);
        assert!(app.viewport.set_images(Raster::new(20, 10), Raster::new(20, 10)));
        assert_eq!(apply_scroll(&mut app, 0.0), None);
        assert_eq!(app.viewport.zoom(), 1.0);
    }
}
