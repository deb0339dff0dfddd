#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use bar_graph::{Cli, run_app};

#[cfg(not(target_arch = "wasm32"))]
use {
    bar_graph::config::BAR_GRAPH_CONFIG,
    clap::Parser,
    eframe::NativeOptions,
    eframe::egui::{ViewportBuilder, vec2},
    std::panic,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, prelude::*};

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
pub fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Debug)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let _ = fern::Dispatch::new()
        .level(global_level)
        .level_for(env!("CARGO_CRATE_NAME"), my_code_level)
        .chain(fern::Output::call(|record| {
            let msg = record.args().to_string();
            match record.level() {
                log::Level::Error => web_sys::console::error_1(&msg.into()),
                log::Level::Warn => web_sys::console::warn_1(&msg.into()),
                log::Level::Info => web_sys::console::info_1(&msg.into()),
                log::Level::Debug | log::Level::Trace => web_sys::console::log_1(&msg.into()),
            }
        }))
        .apply();
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    init_log();

    let window = web_sys::window().ok_or("no global `window` exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    let args = Cli::default();

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(run_app(cc, args)))),
        )
        .await
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("bar_graph"), my_code_level)
        .parse_default_env() // RUST_LOG overrides the defaults above
        .init();

    let args = Cli::parse();

    // Room for the toolbar and panel margins around the control minimum
    let min_size = BAR_GRAPH_CONFIG.min_size + vec2(64.0, 96.0);
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(720.0, 200.0))
            .with_min_inner_size(min_size)
            .with_title("Bar Graph"),
        ..Default::default()
    };

    eframe::run_native(
        "Bar Graph",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
}
