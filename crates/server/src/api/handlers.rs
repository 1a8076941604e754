mod sonarr;
mod webhook;

pub use sonarr::{
    add_series, quality_profile, root_folder, SonarrAddOptions, SonarrSeason, SonarrSeries,
};
pub use webhook::{jellyseerr_webhook, JellyseerrWebhook, WebhookMedia, WebhookRequest};
