// src/config.rs

use serde::Deserialize;
use std::time::Duration;

pub const CONTENT_ROOT_ENV: &str = "COURSE_VIEWER_CONTENT_ROOT";
#[cfg(not(target_arch = "wasm32"))]
pub const CONFIG_PATH_ENV: &str = "COURSE_VIEWER_CONFIG";
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_CONFIG_FILE: &str = "course_viewer.yaml";

/// Ajustes del visor. Todos los campos son opcionales en el YAML.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directorio local o URL base (`http(s)://`) de donde se lee el contenido.
    pub content_root: String,
    pub course_file: String,
    /// Probar también `tests/{id}.json` si falla la ruta jerárquica.
    pub legacy_test_paths: bool,
    pub tick_interval_ms: u64,
    pub dark_mode: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            content_root: "data".into(),
            course_file: "course-structure.json".into(),
            legacy_test_paths: true,
            tick_interval_ms: 1000,
            dark_mode: true,
        }
    }
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl ViewerConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        // Un fichero vacío es YAML nulo: se queda con los valores por defecto.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    pub fn with_content_root(mut self, root: Option<&str>) -> Self {
        if let Some(root) = root.and_then(normalize) {
            self.content_root = root;
        }
        self
    }

    /// Nunca por debajo de 100 ms, para no repintar sin parar.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(100))
    }

    /// Valores por defecto ← fichero YAML ← variable de entorno.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let explicit = std::env::var(CONFIG_PATH_ENV).ok().and_then(|v| normalize(&v));
        let root_override = std::env::var(CONTENT_ROOT_ENV).ok();
        Self::load_from(explicit.as_deref(), root_override.as_deref())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(explicit_path: Option<&str>, root_override: Option<&str>) -> Self {
        let path = explicit_path.unwrap_or(DEFAULT_CONFIG_FILE);
        let base = match std::fs::read_to_string(path) {
            Ok(text) => match Self::from_yaml_str(&text) {
                Ok(cfg) => {
                    log::info!("Configuración leída de {path}");
                    cfg
                }
                Err(e) => {
                    log::warn!("Configuración inválida en {path}: {e}. Se usan valores por defecto");
                    Self::default()
                }
            },
            // Sin fichero explícito, que no exista el de por defecto es lo normal.
            Err(e) if explicit_path.is_some() => {
                log::warn!("No se pudo leer {path}: {e}. Se usan valores por defecto");
                Self::default()
            }
            Err(_) => Self::default(),
        };
        base.with_content_root(root_override)
    }

    /// Valores por defecto ← variable en tiempo de compilación ← `?content_root=`.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
            .with_content_root(option_env!("COURSE_VIEWER_CONTENT_ROOT"))
            .with_content_root(query_param("content_root").as_deref())
    }
}

/// Parámetro de la query string de la página, ya decodificado.
#[cfg(target_arch = "wasm32")]
pub fn query_param(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    crate::app::route::find_param(&search, name)
        .and_then(|raw| js_sys::decode_uri_component(raw).ok())
        .and_then(|decoded| decoded.as_string())
}
