//! Top-Menü (File, View, Curve).

use crate::app::{AppIntent, AppState};
use crate::core::CurveMode;
use crate::shared::ImageStyle;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_label = if state.view.background_image.is_some() {
                    "Bild wechseln... (Ctrl+O)"
                } else {
                    "Bild öffnen... (Ctrl+O)"
                };
                if ui.button(open_label).clicked() {
                    events.push(AppIntent::OpenImageRequested);
                    ui.close();
                }

                if ui.button("Optionen speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset Camera (Home)").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                if ui.button("Zoom In (+)").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out (-)").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                let points_label = if state.editor.show_control_points {
                    "Kontrollpunkte ausblenden (P)"
                } else {
                    "Kontrollpunkte einblenden (P)"
                };
                if ui.button(points_label).clicked() {
                    events.push(AppIntent::ToggleControlPointsRequested);
                    ui.close();
                }

                ui.menu_button("Bildstil", |ui| {
                    for (index, style) in ImageStyle::ALL.into_iter().enumerate() {
                        let label = format!("{} ({})", style.label(), index + 1);
                        if ui
                            .selectable_label(state.view.image_style == style, label)
                            .clicked()
                        {
                            events.push(AppIntent::ImageStyleChanged { style });
                            ui.close();
                        }
                    }
                });
            });

            ui.menu_button("Curve", |ui| {
                let active = state.active_point_count();

                if ui
                    .add_enabled(
                        active >= CurveMode::Open.min_control_points(),
                        egui::Button::new("Offene Kurve abschließen (Enter)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::FinalizeOpenCurveRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        active >= CurveMode::Closed.min_control_points(),
                        egui::Button::new("Schleife schließen (L)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::FinalizeClosedLoopRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("CatmullRom-Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
