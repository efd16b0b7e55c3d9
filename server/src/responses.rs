#![allow(unused)]
use crate::features::{
    auth::LoginResponse,
    blogs::BlogResponse,
    users::{
        User,
        UserWithNotes,
    },
};
use error_set::error_set;
use utoipa::{
    IntoResponses,
    ToSchema,
};

error_set! {
    #[derive(ToSchema)]
    struct ErrorResponse {
        error: String,
    }

    #[derive(IntoResponses)]
    InternalServerError {
        /// Internal server error
        #[response(status = INTERNAL_SERVER_ERROR)]
        InternalServerError(ErrorResponse),
    }
    #[derive(IntoResponses)]
    BadRequest {
        /// Invalid json, malformed id or failed validation
        #[response(status = BAD_REQUEST)]
        BadRequest(ErrorResponse),
    }
    #[derive(IntoResponses)]
    Unauthorized {
        /// Token is missing, invalid or does not grant access
        #[response(status = UNAUTHORIZED)]
        Unauthorized(ErrorResponse),
    }

    // USERS

    #[derive(IntoResponses)]
    #[skip(Error,Display,Debug)]
    PostUser := BadRequest || InternalServerError || {
        /// User created successfully
        #[response(status = CREATED)]
        Created(User),
    }
    #[derive(IntoResponses)]
    #[skip(Error,Display,Debug)]
    GetUsers := InternalServerError || {
        /// Got users with their blogs
        #[response(status = OK)]
        Success(Vec<UserWithNotes>),
    }
    #[derive(IntoResponses)]
    #[skip(Error,Display,Debug)]
    GetUser := BadRequest || InternalServerError || {
        /// Got user with their blogs
        #[response(status = OK)]
        Success(UserWithNotes),
        /// User does not exist
        #[response(status = NOT_FOUND)]
        NotFound(ErrorResponse),
    }


    // LOGIN

    #[derive(IntoResponses)]
    #[skip(Error,Display,Debug)]
    Login := BadRequest || Unauthorized || InternalServerError || {
        /// Login successful
        #[response(status = OK)]
        Success(LoginResponse),
    }


    // BLOGS

    #[derive(IntoResponses)]
    BlogNotFound {
        /// Blog does not exist
        #[response(status = NOT_FOUND)]
        NotFound(ErrorResponse),
    }

    #[derive(IntoResponses)]
    #[skip(Error,Display,Debug)]
    GetBlogs := InternalServerError || {
        /// Got all blogs with their owners
        #[response(status = OK)]
        Success(Vec<BlogResponse>),
    }
    #[derive(IntoResponses)]
    #[skip(Error,Display,Debug)]
    GetBlog := BadRequest || InternalServerError || BlogNotFound || {
        /// Got blog successfully
        #[response(status = OK)]
        Success(BlogResponse),
    }
    #[derive(IntoResponses)]
    #[skip(Error,Display,Debug)]
    PostBlog := BadRequest || Unauthorized || InternalServerError || {
        /// Blog created successfully
        #[response(status = CREATED)]
        Created(BlogResponse),
    }
    #[derive(IntoResponses)]
    #[skip(Error,Display,Debug)]
    PutBlog := BadRequest || InternalServerError || BlogNotFound || {
        /// Blog updated successfully
        #[response(status = OK)]
        Success(BlogResponse),
    }
    #[derive(IntoResponses)]
    #[skip(Error,Display,Debug)]
    DeleteBlog := BadRequest || Unauthorized || InternalServerError || BlogNotFound || {
        /// Blog deleted successfully
        #[response(status = NO_CONTENT)]
        Success,
    }
}
