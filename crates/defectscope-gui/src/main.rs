mod app;
mod convert;
mod messages;
mod panels;
mod states;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Image Viewer with Zoom and Report"),
        ..Default::default()
    };

    eframe::run_native(
        "Defectscope",
        options,
        Box::new(|cc| Ok(Box::new(app::DefectscopeApp::new(&cc.egui_ctx)))),
    )
}
