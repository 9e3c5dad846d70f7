//! Bank Term Deposit Subscription Predictor - Desktop GUI Application
//!
//! Loads the model named in the settings file, then opens the single-page
//! prediction form. A model that cannot be loaded stops the program before
//! any window appears.

use std::process::ExitCode;

use eframe::egui;
use tdp_classifier::load_model;
use tdp_gui::app::{APP_TITLE, PredictorApp};
use tdp_gui::settings::load_settings;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = load_settings();
    let model = match load_model(&settings.model_path) {
        Ok(model) => model,
        Err(error) => {
            tracing::error!(%error, "model load failed");
            eprintln!(
                "error: failed to load model {}: {error}",
                settings.model_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1024.0, 820.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(PredictorApp::new(cc, settings, &model)))),
    );
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
