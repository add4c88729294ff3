use super::*;
use crate::data::{parse_course, parse_test};
use crate::error::{Result, ViewerError};
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

/// Qué se está cargando y para qué página.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadRequest {
    Course,
    Lesson { lesson_id: String },
    Test { test_id: String },
}

/// Carga en curso: el hilo (o la future en WASM) solo devuelve el texto.
pub struct PendingLoad {
    pub request: LoadRequest,
    rx: Receiver<Result<(String, String)>>,
}

impl ViewerApp {
    /// Lanza la carga de la primera ruta disponible entre `paths`.
    /// Sustituye a cualquier carga anterior que siguiera pendiente.
    pub(crate) fn start_load(&mut self, request: LoadRequest, paths: Vec<String>) {
        let (tx, rx) = std::sync::mpsc::channel();
        log::info!("Cargando {request:?} desde {paths:?}");
        if let Some(previous) = self.pending.take() {
            log::debug!("Carga descartada: {:?}", previous.request);
        }
        self.pending = Some(PendingLoad { request, rx });
        let ctx = self.egui_ctx.clone();

        #[cfg(not(target_arch = "wasm32"))]
        {
            let source = Arc::clone(&self.source);
            std::thread::spawn(move || {
                let result = crate::fetch::fetch_first(source.as_ref(), &paths);
                let _ = tx.send(result);
                if let Some(ctx) = ctx {
                    ctx.request_repaint();
                }
            });
        }

        #[cfg(target_arch = "wasm32")]
        {
            let root = self.config.content_root.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = crate::fetch::fetch_first(&root, &paths).await;
                let _ = tx.send(result);
                if let Some(ctx) = ctx {
                    ctx.request_repaint();
                }
            });
        }
    }

    /// Se llama una vez por frame.
    pub fn poll_loads(&mut self, now: Duration) {
        let received = match self.pending.as_ref().map(|p| p.rx.try_recv()) {
            Some(Ok(result)) => Some(result),
            Some(Err(TryRecvError::Empty)) | None => None,
            Some(Err(TryRecvError::Disconnected)) => {
                Some(Err(ViewerError::load("", "la carga terminó sin respuesta")))
            }
        };
        if let Some(result) = received {
            if let Some(pending) = self.pending.take() {
                self.finish_load(pending.request, result, now);
            }
        }
    }

    fn finish_load(&mut self, request: LoadRequest, result: Result<(String, String)>, now: Duration) {
        match request {
            LoadRequest::Course => match result.and_then(|(path, text)| parse_course(&path, &text)) {
                Ok(structure) => {
                    self.course = Some(CourseTree::new(structure));
                    let route = self.pending_route.take().unwrap_or_default();
                    self.open_route(route);
                }
                Err(err) => {
                    log::error!("No se pudo cargar el curso: {err}");
                    self.set_page(Page::Error(err.to_string()));
                }
            },
            LoadRequest::Lesson { lesson_id } => match result {
                Ok((_, markdown)) => self.show_lesson(&lesson_id, markdown),
                Err(err) => self.redirect(err, Page::KnowledgeBase),
            },
            LoadRequest::Test { test_id } => {
                let session = result
                    .and_then(|(path, text)| parse_test(&test_id, &path, &text))
                    .and_then(|document| QuizSession::new(test_id.as_str(), document, now));
                match session {
                    Ok(session) => self.show_test(session),
                    Err(err) => self.redirect(err, Page::Tests),
                }
            }
        }
    }

    /// Espera (bloqueando) a que terminen todas las cargas encadenadas.
    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub(crate) fn wait_for_loads(&mut self) {
        while let Some(pending) = self.pending.take() {
            let result = pending
                .rx
                .recv_timeout(Duration::from_secs(10))
                .unwrap_or_else(|e| Err(ViewerError::load("", e)));
            self.finish_load(pending.request, result, Duration::ZERO);
        }
    }
}
