use std::path::Path;
use std::sync::mpsc;

use defectscope_core::edges::CannyEdgeDetector;
use defectscope_core::io::image_io::load_session;
use defectscope_core::report::DefectReporter;
use defectscope_core::viewport::ViewportController;
use defectscope_core::DefectscopeError;
use tracing::{debug, info, warn};

use crate::messages::AppEvent;
use crate::panels;
use crate::states::{Dialog, DialogKind, TextureSurface, UIState};

pub struct DefectscopeApp {
    pub event_tx: mpsc::Sender<AppEvent>,
    pub event_rx: mpsc::Receiver<AppEvent>,
    pub ui_state: UIState,
    pub viewport: ViewportController<TextureSurface>,
    detector: CannyEdgeDetector,
    reporter: DefectReporter,
}

impl DefectscopeApp {
    pub fn new(_ctx: &egui::Context) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            event_tx,
            event_rx,
            ui_state: UIState::default(),
            viewport: ViewportController::new(
                TextureSurface::new("original"),
                TextureSurface::new("edges"),
            ),
            detector: CannyEdgeDetector::default(),
            reporter: DefectReporter::default(),
        }
    }

    /// Drain all pending events from the file dialog thread.
    fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.ui_state.dialog_open = false;
            match event {
                AppEvent::FileChosen { path } => self.open_image(&path),
                AppEvent::DialogDismissed => {
                    debug!("{}", DefectscopeError::NoFileSelected);
                }
            }
        }
    }

    /// Show the native open dialog without blocking the UI thread.
    pub fn request_open(&mut self, ctx: &egui::Context) {
        if self.ui_state.dialog_open {
            return;
        }
        self.ui_state.dialog_open = true;

        let event_tx = self.event_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let event = match rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"])
                .add_filter("All files", &["*"])
                .pick_file()
            {
                Some(path) => AppEvent::FileChosen { path },
                None => AppEvent::DialogDismissed,
            };
            let _ = event_tx.send(event);
            ctx.request_repaint();
        });
    }

    /// Decode, derive the edge view and hand both to the viewport.
    ///
    /// On failure the previous image stays on screen.
    pub fn open_image(&mut self, path: &Path) {
        match load_session(path, &self.detector) {
            Ok(session) => {
                let (w, h) = (session.source.width(), session.source.height());
                if self.viewport.set_images(session.source.raster, session.derived) {
                    info!(path = %path.display(), w, h, "Image opened");
                    self.ui_state.file_path = Some(session.source.path);
                    self.ui_state
                        .add_log(format!("Opened: {} ({w}x{h})", path.display()));
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not open image");
                self.ui_state.add_log(format!("ERROR: {e}"));
                self.ui_state.dialog = Some(Dialog::error(e.to_string()));
            }
        }
    }

    /// Build the defect report for the loaded image and show it.
    pub fn generate_report(&mut self) {
        match self.reporter.generate(self.viewport.source()) {
            Ok(report) => {
                self.ui_state
                    .add_log(format!("Report: {} defect(s)", report.len()));
                self.ui_state.dialog = Some(Dialog::info("Defect Report", report.to_string()));
            }
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
                self.ui_state.dialog = Some(Dialog::error(e.to_string()));
            }
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.ui_state.dialog.as_ref() else {
            return;
        };

        let mut close = false;
        egui::Window::new(dialog.title.as_str())
            .collapsible(false)
            .resizable(true)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let text = egui::RichText::new(&dialog.body);
                let text = if dialog.kind == DialogKind::Error {
                    text.color(ui.visuals().error_fg_color)
                } else {
                    text
                };
                egui::ScrollArea::vertical()
                    .max_height(400.0)
                    .show(ui, |ui| ui.label(text));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
            });

        if close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.ui_state.dialog = None;
        }
    }

    fn show_about(&mut self, ctx: &egui::Context) {
        if !self.ui_state.show_about {
            return;
        }
        egui::Window::new("About Defectscope")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Defectscope");
                    ui.label("Edge view and defect report");
                    ui.add_space(8.0);
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(8.0);
                    if ui.button("Close").clicked() {
                        self.ui_state.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for DefectscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        self.show_dialog(ctx);
        self.show_about(ctx);
    }
}
