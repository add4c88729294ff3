// src/fetch.rs
//
// Transporte del contenido (JSON del curso, markdown de lecciones, tests).
// Nativo: sistema de ficheros o HTTP bloqueante, ejecutado en un hilo aparte.
// WASM: `fetch` del navegador.

use crate::error::{Result, ViewerError};

/// Une la raíz de contenido con una ruta relativa sin duplicar barras.
pub fn join(root: &str, path: &str) -> String {
    let root = root.trim().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if root.is_empty() {
        path.to_string()
    } else {
        format!("{root}/{path}")
    }
}

pub fn is_http(root: &str) -> bool {
    let root = root.trim();
    root.starts_with("http://") || root.starts_with("https://")
}

fn no_candidates() -> ViewerError {
    ViewerError::load("", "no hay rutas candidatas")
}

// ---------- Nativo ----------

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    /// Origen de contenido con rutas relativas a una raíz.
    pub trait ContentSource: Send + Sync {
        fn fetch_text(&self, path: &str) -> Result<String>;

        /// Ruta completa, para mensajes y logs.
        fn locate(&self, path: &str) -> String;
    }

    pub struct DirSource {
        root: PathBuf,
    }

    impl DirSource {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }
    }

    impl ContentSource for DirSource {
        fn fetch_text(&self, path: &str) -> Result<String> {
            let full = self.root.join(path.trim_start_matches('/'));
            std::fs::read_to_string(&full)
                .map_err(|e| ViewerError::load(&full.display().to_string(), e))
        }

        fn locate(&self, path: &str) -> String {
            self.root
                .join(path.trim_start_matches('/'))
                .display()
                .to_string()
        }
    }

    pub struct HttpSource {
        base: String,
        client: reqwest::blocking::Client,
    }

    impl HttpSource {
        pub fn new(base: &str) -> Self {
            Self {
                base: base.trim().trim_end_matches('/').to_string(),
                client: reqwest::blocking::Client::new(),
            }
        }
    }

    impl ContentSource for HttpSource {
        fn fetch_text(&self, path: &str) -> Result<String> {
            let url = self.locate(path);
            let response = self
                .client
                .get(&url)
                .send()
                .map_err(|e| ViewerError::load(&url, format!("error de conexión: {e}")))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ViewerError::load(&url, format!("HTTP {status}")));
            }
            response
                .text()
                .map_err(|e| ViewerError::load(&url, format!("no se pudo leer el cuerpo: {e}")))
        }

        fn locate(&self, path: &str) -> String {
            join(&self.base, path)
        }
    }

    /// `HttpSource` para raíces `http(s)://`, `DirSource` para el resto.
    pub fn source_for(root: &str) -> Arc<dyn ContentSource> {
        if is_http(root) {
            log::info!("Contenido servido por HTTP desde {root}");
            Arc::new(HttpSource::new(root))
        } else {
            log::info!("Contenido leído del directorio {root}");
            Arc::new(DirSource::new(root.trim()))
        }
    }

    /// Prueba las rutas en orden; devuelve `(ruta, texto)` de la primera que
    /// funcione o el error de la última.
    pub fn fetch_first(source: &dyn ContentSource, paths: &[String]) -> Result<(String, String)> {
        let mut last_error = None;
        for path in paths {
            match source.fetch_text(path) {
                Ok(text) => return Ok((path.clone(), text)),
                Err(err) => {
                    log::debug!("{err}");
                    last_error = Some(err);
                }
            }
        }
        Err(last_error.unwrap_or_else(no_candidates))
    }
}

// ---------- WASM ----------

#[cfg(target_arch = "wasm32")]
pub async fn fetch_text(root: &str, path: &str) -> Result<String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let url = join(root, path);
    let window = web_sys::window().ok_or_else(|| ViewerError::load(&url, "no existe window"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(if is_http(root) {
        RequestMode::Cors
    } else {
        RequestMode::SameOrigin
    });

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ViewerError::load(&url, format!("no se pudo crear la petición: {e:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ViewerError::load(&url, format!("fetch falló: {e:?}")))?;

    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| ViewerError::load(&url, "la respuesta no es un Response válido"))?;

    if !response.ok() {
        return Err(ViewerError::load(&url, format!("HTTP {}", response.status())));
    }

    let promise = response
        .text()
        .map_err(|e| ViewerError::load(&url, format!("{e:?}")))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| ViewerError::load(&url, format!("no se pudo leer el cuerpo: {e:?}")))?;

    text.as_string()
        .ok_or_else(|| ViewerError::load(&url, "response.text() no devolvió string"))
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_first(root: &str, paths: &[String]) -> Result<(String, String)> {
    let mut last_error = None;
    for path in paths {
        match fetch_text(root, path).await {
            Ok(text) => return Ok((path.clone(), text)),
            Err(err) => {
                log::debug!("{err}");
                last_error = Some(err);
            }
        }
    }
    Err(last_error.unwrap_or_else(no_candidates))
}
