#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[allow(unused_imports)]
use sentiment_dashboard::{
    Cli, // The struct from lib.rs
    DashboardSettings,
    create_source,
    run_app, // The function from lib.rs
};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    use sentiment_dashboard::config::API;

    // A. Init Logging
    console_error_panic_hook::set_once();
    fern::Dispatch::new()
        .level(log::LevelFilter::Info)
        .chain(fern::Output::call(|record| {
            let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            web_sys::console::log_1(&line.into());
        }))
        .apply()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    log::info!("🚀 Sentiment dashboard starting in WASM mode...");

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    // B. The page is served by the API itself, so talk to its origin
    let location = window.location();
    let api_base = location
        .origin()
        .unwrap_or_else(|_| API.default_base_url.to_string());
    let demo = location.search().map(|s| s.contains("demo")).unwrap_or(false);

    let source = create_source(&api_base, demo, API.timeout_secs)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or_else(|| JsValue::from_str("Failed to find canvas with id 'the_canvas_id'"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    // C. Start the App
    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(run_app(cc, DashboardSettings::default(), source)?)),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use eframe::NativeOptions;
    use sentiment_dashboard::ui::UI_TEXT;

    // A. Init Logging
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panicked: {:?}", panic_info);
    }));
    // A .env file may carry SENTIMENT_API_BASE
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    let source = create_source(&args.api_base, args.demo, args.timeout_secs)
        .context("Failed to set up the sentiment source")?;
    let settings = args.settings();

    // C. Run Native App
    eframe::run_native(
        UI_TEXT.app_title,
        NativeOptions::default(),
        Box::new(move |cc| Ok(run_app(cc, settings, source)?)),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))
}
