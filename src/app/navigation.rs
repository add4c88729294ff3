use super::*;
use crate::course::{ContentKind, after_test, content_path, legacy_test_path, lesson_path};
use crate::error::ViewerError;
use crate::quiz::QuizSession;
use super::view_models::lesson_header;

impl ViewerApp {
    pub fn open_route(&mut self, route: Route) {
        match route {
            Route::KnowledgeBase => self.open_knowledge_base(),
            Route::Tests => self.open_tests(),
            Route::Lesson(id) => self.open_lesson(&id),
            Route::Test(id) => self.open_test(&id),
        }
    }

    pub fn follow(&mut self, target: NavTarget) {
        match target {
            NavTarget::Lesson(id) => self.open_lesson(&id),
            NavTarget::Test(id) => self.open_test(&id),
            NavTarget::Listing => self.open_knowledge_base(),
        }
    }

    pub fn open_knowledge_base(&mut self) {
        self.message.clear();
        self.set_page(Page::KnowledgeBase);
    }

    pub fn open_tests(&mut self) {
        self.message.clear();
        self.set_page(Page::Tests);
    }

    pub fn open_lesson(&mut self, lesson_id: &str) {
        let Some(course) = &self.course else {
            self.pending_route = Some(Route::Lesson(lesson_id.to_owned()));
            return;
        };
        let path = course
            .resolve_lesson_location(lesson_id)
            .map(|loc| lesson_path(&loc));

        match path {
            Ok(path) => {
                self.message.clear();
                self.set_page(Page::Loading);
                self.start_load(
                    LoadRequest::Lesson {
                        lesson_id: lesson_id.to_owned(),
                    },
                    vec![path],
                );
            }
            Err(err) => self.redirect(err, Page::KnowledgeBase),
        }
    }

    pub fn open_test(&mut self, test_id: &str) {
        let Some(course) = &self.course else {
            self.pending_route = Some(Route::Test(test_id.to_owned()));
            return;
        };
        let legacy = self.config.legacy_test_paths;
        let paths = course.resolve_test_location(test_id).map(|loc| {
            let mut paths: Vec<String> = content_path(ContentKind::Test, &loc).into_iter().collect();
            if legacy {
                paths.push(legacy_test_path(test_id));
            }
            paths
        });

        match paths {
            Ok(paths) => {
                self.message.clear();
                self.set_page(Page::Loading);
                self.start_load(
                    LoadRequest::Test {
                        test_id: test_id.to_owned(),
                    },
                    paths,
                );
            }
            Err(err) => self.redirect(err, Page::Tests),
        }
    }

    /// Termina la página actual y vuelve a un listado con el aviso.
    pub(crate) fn redirect(&mut self, err: ViewerError, fallback: Page) {
        log::warn!("{err}; volviendo a {}", fallback.name());
        self.message = err.to_string();
        self.set_page(fallback);
    }

    pub(crate) fn show_lesson(&mut self, lesson_id: &str, markdown: String) {
        let header = match &self.course {
            Some(course) => course
                .resolve_lesson_location(lesson_id)
                .map(|loc| lesson_header(&loc, &markdown)),
            None => return,
        };
        match header {
            Ok(header) => self.set_page(Page::Lesson(LessonPage { header, markdown })),
            Err(err) => self.redirect(err, Page::KnowledgeBase),
        }
    }

    pub(crate) fn show_test(&mut self, session: QuizSession) {
        let context = match &self.course {
            Some(course) => course
                .resolve_test_location(session.test_id())
                .map(|loc| (loc.lesson.title.clone(), after_test(&loc))),
            None => return,
        };
        match context {
            Ok((lesson_title, after)) => self.set_page(Page::Test(TestPage {
                session,
                lesson_title,
                after,
            })),
            Err(err) => self.redirect(err, Page::Tests),
        }
    }
}
