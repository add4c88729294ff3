/// Página inicial pedida al arrancar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    KnowledgeBase,
    Tests,
    Lesson(String),
    Test(String),
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Valor crudo (sin decodificar) de `name` en una query string (`?a=1&b=2`).
pub fn find_param<'a>(search: &'a str, name: &str) -> Option<&'a str> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == name).then_some(value)
    })
}

impl Route {
    /// Argumento de línea de comandos: `lesson:<id>`, `test:<id>`, `tests`, `kb`.
    pub fn from_arg(arg: Option<&str>) -> Self {
        let Some(arg) = arg.map(str::trim) else {
            return Route::KnowledgeBase;
        };
        if let Some(id) = arg.strip_prefix("lesson:").and_then(non_empty) {
            return Route::Lesson(id);
        }
        if let Some(id) = arg.strip_prefix("test:").and_then(non_empty) {
            return Route::Test(id);
        }
        match arg {
            "tests" => Route::Tests,
            _ => Route::KnowledgeBase,
        }
    }

    /// Ruta de la página web: `lesson.html?id=…`, `test.html?id=…`,
    /// `tests.html` o `?page=…&id=…`.
    pub fn from_location(pathname: &str, search: &str) -> Self {
        let file = pathname.rsplit('/').next().unwrap_or_default();
        let page = match file {
            "lesson.html" => Some("lesson"),
            "test.html" => Some("test"),
            "tests.html" => Some("tests"),
            _ => find_param(search, "page"),
        };
        let id = find_param(search, "id").and_then(non_empty);

        match (page, id) {
            (Some("lesson"), Some(id)) => Route::Lesson(id),
            (Some("test"), Some(id)) => Route::Test(id),
            (Some("tests"), _) => Route::Tests,
            _ => Route::KnowledgeBase,
        }
    }

    /// Ruta de la página actual del navegador, con el id decodificado.
    #[cfg(target_arch = "wasm32")]
    pub fn current() -> Self {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return Route::KnowledgeBase;
        };
        let pathname = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();

        let decode = |id: String| {
            js_sys::decode_uri_component(&id)
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or(id)
        };
        match Self::from_location(&pathname, &search) {
            Route::Lesson(id) => Route::Lesson(decode(id)),
            Route::Test(id) => Route::Test(decode(id)),
            other => other,
        }
    }
}
