use utoipa::OpenApi;

use crate::presentation::handlers::posts::{CreatePostDto, CreateReplyDto, PostDto, ReplyDto};
use crate::presentation::handlers::users::{LoginDto, RegisterDto, SessionDto, UserDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::users::register,
        crate::presentation::handlers::users::fetch_user,
        crate::presentation::handlers::users::login,
        crate::presentation::handlers::posts::list_posts,
        crate::presentation::handlers::posts::create_post,
        crate::presentation::handlers::posts::create_reply
    ),
    components(
        schemas(
            RegisterDto,
            LoginDto,
            SessionDto,
            UserDto,
            CreatePostDto,
            CreateReplyDto,
            PostDto,
            ReplyDto
        )
    ),
    tags(
        (name = "users", description = "Identity and user directory endpoints"),
        (name = "posts", description = "Post and reply endpoints")
    )
)]
pub(crate) struct ApiDoc;
