use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::genre::handler::list_genres,
        crate::modules::genre::handler::get_genre,
        crate::modules::genre::handler::create_genre,
        crate::modules::genre::handler::update_genre,
        crate::modules::genre::handler::delete_genre,
        crate::modules::game::handler::list_games,
        crate::modules::platform::handler::list_platforms,
    ),
    components(
        schemas(
            crate::modules::genre::model::Genre,
            crate::modules::genre::dto::GenrePayload,
            crate::modules::genre::dto::GenreChanges,
            crate::modules::game::model::Game,
            crate::modules::platform::model::Platform,
        )
    ),
    tags(
        (name = "Genres", description = "Genre catalog management"),
        (name = "Games", description = "Game catalog listing"),
        (name = "Platforms", description = "Platform catalog listing")
    )
)]
pub struct ApiDoc;
