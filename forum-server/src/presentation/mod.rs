use std::sync::Arc;

use crate::application::directory_service::DirectoryService;
use crate::application::forum_service::ForumService;
use crate::data::repositories::postgres::post_repository::PostgresPostRepository;
use crate::data::repositories::postgres::user_repository::PostgresUserRepository;

pub(crate) mod app_error;
pub(crate) mod handlers;
pub(crate) mod http_handlers;
pub(crate) mod middleware;
pub(crate) mod openapi;
pub(crate) mod routes;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) directory_service: Arc<DirectoryService<PostgresUserRepository>>,
    pub(crate) forum_service: Arc<ForumService<PostgresPostRepository>>,
}

impl AppState {
    pub(crate) fn new(
        directory_service: Arc<DirectoryService<PostgresUserRepository>>,
        forum_service: Arc<ForumService<PostgresPostRepository>>,
    ) -> Self {
        Self {
            directory_service,
            forum_service,
        }
    }
}
