//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{use_cases, AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportClicked { world_pos } => {
            vec![AppCommand::AppendControlPoint { world_pos }]
        }
        AppIntent::FinalizeOpenCurveRequested => vec![AppCommand::FinalizeOpenCurve],
        AppIntent::FinalizeClosedLoopRequested => vec![AppCommand::FinalizeClosedLoop],
        AppIntent::ToggleControlPointsRequested => {
            vec![AppCommand::ToggleControlPointVisibility]
        }
        AppIntent::ImageStyleChanged { style } => {
            // Gleicher Stil: nichts zu tun
            if state.view.image_style == style {
                Vec::new()
            } else {
                vec![AppCommand::SetImageStyle { style }]
            }
        }

        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraPanStepRequested { direction } => vec![AppCommand::PanCamera {
            delta: use_cases::camera::pan_step_world(state, direction),
        }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],

        AppIntent::OpenImageRequested => vec![AppCommand::RequestImageDialog],
        AppIntent::ImageSelected { path } => vec![
            AppCommand::LoadImage { path },
            AppCommand::ResetCamera,
        ],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
