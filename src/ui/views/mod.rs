pub mod error;
pub mod knowledge_base;
pub mod lesson;
pub mod loading;
pub mod test;
pub mod tests_list;
