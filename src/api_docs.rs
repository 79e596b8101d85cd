use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::import::import_by_title,
        api::import::import_records,
        api::discover::by_topic,
        api::discover::popular,
        api::discover::by_language,
        api::discover::by_author_years,
        api::books::list_books,
        api::books::top_books,
        api::books::books_by_language,
        api::author::list_authors,
        api::author::search_authors,
        api::author::alive_authors,
        api::stats::get_stats,
    ),
    tags(
        (name = "bibliocatalog", description = "Personal book catalog API")
    )
)]
pub struct ApiDoc;
