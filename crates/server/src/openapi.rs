use utoipa::OpenApi;

use crate::api::handlers::{
    JellyseerrWebhook, SonarrAddOptions, SonarrSeason, SonarrSeries, WebhookMedia, WebhookRequest,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jellyseerr to AniWorld-Downloader Bridge",
        version = "1.0.0"
    ),
    tags(
        (name = "webhook", description = "Jellyseerr webhook receiver"),
        (name = "sonarr", description = "Sonarr compatibility surface")
    ),
    components(schemas(
        JellyseerrWebhook,
        WebhookMedia,
        WebhookRequest,
        SonarrSeries,
        SonarrSeason,
        SonarrAddOptions
    ))
)]
pub struct ApiDoc;
