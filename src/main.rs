use course_viewer::{Route, ViewerApp, ViewerConfig};

const APP_NAME: &str = "Visor de cursos";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // RUST_LOG=info (o debug) para ver la navegación y las cargas
    pretty_env_logger::init();

    let config = ViewerConfig::load();
    let route = Route::from_arg(std::env::args().nth(1).as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::with_creation_context(cc, config, route)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let config = ViewerConfig::load();
    let route = Route::current();

    wasm_bindgen_futures::spawn_local(async move {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("the_canvas_id"))
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok());
        let Some(canvas) = canvas else {
            log::error!("No existe el canvas 'the_canvas_id' en la página");
            return;
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| Ok(Box::new(ViewerApp::with_creation_context(cc, config, route)))),
            )
            .await;
        if let Err(err) = result {
            log::error!("No se pudo arrancar {APP_NAME}: {err:?}");
        }
    });
}
