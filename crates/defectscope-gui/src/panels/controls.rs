use defectscope_core::consts::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

use crate::app::DefectscopeApp;

pub fn show(ctx: &egui::Context, app: &mut DefectscopeApp) {
    egui::SidePanel::left("controls")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            file_section(ui, ctx, app);
            ui.separator();
            zoom_section(ui, app);
            ui.separator();
            report_section(ui, app);
        });
}

fn file_section(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut DefectscopeApp) {
    super::section_header(ui, "Image", None);
    ui.add_space(4.0);

    let button = egui::Button::new("Upload Your Image");
    if ui.add_enabled(!app.ui_state.dialog_open, button).clicked() {
        app.request_open(ctx);
    }

    if let Some(name) = app.ui_state.file_name() {
        ui.label(name);
    }
    if let Some(source) = app.viewport.source() {
        ui.small(format!("{}x{}", source.width(), source.height()));
    }
}

fn zoom_section(ui: &mut egui::Ui, app: &mut DefectscopeApp) {
    let status = format!("{:.0}%", app.viewport.zoom() * 100.0);
    super::section_header(ui, "Zoom", Some(&status));
    ui.add_space(4.0);

    let loaded = app.viewport.is_loaded();
    let mut zoom = app.viewport.zoom();
    let response = ui.add_enabled(
        loaded,
        egui::Slider::new(&mut zoom, MIN_ZOOM..=MAX_ZOOM)
            .step_by(0.01)
            .clamping(egui::SliderClamping::Always),
    );
    if response.changed() {
        app.viewport.set_zoom(zoom);
    }

    if ui.add_enabled(loaded, egui::Button::new("Actual Size")).clicked() {
        app.viewport.set_zoom(DEFAULT_ZOOM);
    }
    ui.small("Scroll to zoom, drag to pan");
}

fn report_section(ui: &mut egui::Ui, app: &mut DefectscopeApp) {
    super::section_header(ui, "Report", None);
    ui.add_space(4.0);

    if ui.button("Generate Report").clicked() {
        app.generate_report();
    }
}
