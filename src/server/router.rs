use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, bootcamp, course, review, user},
    error::AppError,
    state::AppState,
};

/// Room for multipart boundaries and part headers on top of the photo itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "DevCamper API",
        description = "Bootcamps, courses, reviews and accounts."
    ),
    paths(
        auth::register,
        auth::login,
        auth::get_me,
        auth::logout,
        auth::update_details,
        auth::update_password,
        auth::forgot_password,
        auth::reset_password,
        bootcamp::get_bootcamps,
        bootcamp::get_bootcamp,
        bootcamp::create_bootcamp,
        bootcamp::update_bootcamp,
        bootcamp::delete_bootcamp,
        bootcamp::get_bootcamps_in_radius,
        bootcamp::upload_bootcamp_photo,
        course::get_courses,
        course::get_bootcamp_courses,
        course::get_course,
        course::create_course,
        course::update_course,
        course::delete_course,
        review::get_reviews,
        review::get_bootcamp_reviews,
        review::get_review,
        review::create_review,
        review::update_review,
        review::delete_review,
        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
    ),
    tags(
        (name = "auth", description = "Registration, login and account self-service"),
        (name = "bootcamp", description = "Bootcamp management and radius search"),
        (name = "course", description = "Courses offered by bootcamps"),
        (name = "review", description = "Reviews left on bootcamps"),
        (name = "user", description = "Admin account management")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// All resources live under `/api/v1`. Swagger UI is served at `/api/docs` and the
/// OpenAPI document at `/api-docs/openapi.json`. Unknown routes answer with the
/// standard 404 envelope.
pub fn router(state: AppState) -> Router {
    let photo_limit = usize::try_from(state.uploads.max_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(MULTIPART_OVERHEAD);

    let api = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::get_me))
        .route("/auth/logout", get(auth::logout))
        .route("/auth/updatedetails", put(auth::update_details))
        .route("/auth/updatepassword", put(auth::update_password))
        .route("/auth/forgotpassword", post(auth::forgot_password))
        .route("/auth/resetpassword/{resettoken}", put(auth::reset_password))
        .route(
            "/bootcamps",
            get(bootcamp::get_bootcamps).post(bootcamp::create_bootcamp),
        )
        .route(
            "/bootcamps/radius/{zipcode}/{distance}",
            get(bootcamp::get_bootcamps_in_radius),
        )
        .route(
            "/bootcamps/{id}",
            get(bootcamp::get_bootcamp)
                .put(bootcamp::update_bootcamp)
                .delete(bootcamp::delete_bootcamp),
        )
        .route(
            "/bootcamps/{id}/photo",
            put(bootcamp::upload_bootcamp_photo).layer(DefaultBodyLimit::max(photo_limit)),
        )
        .route(
            "/bootcamps/{id}/courses",
            get(course::get_bootcamp_courses).post(course::create_course),
        )
        .route(
            "/bootcamps/{id}/reviews",
            get(review::get_bootcamp_reviews).post(review::create_review),
        )
        .route("/courses", get(course::get_courses))
        .route(
            "/courses/{id}",
            get(course::get_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route("/reviews", get(review::get_reviews))
        .route(
            "/reviews/{id}",
            get(review::get_review)
                .put(review::update_review)
                .delete(review::delete_review),
        )
        .route("/users", get(user::get_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        );

    Router::new()
        .nest("/api/v1", api)
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
