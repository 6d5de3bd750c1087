pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::modules::booking::adapter::outgoing::{
    BookingQueryPostgres, BookingRepositoryPostgres,
};
use crate::modules::booking::application::booking_use_cases::BookingUseCases;
use crate::modules::booking::application::service::{
    CreateBookingService, DeleteAllBookingsService, GetBookingService, GetBookingStatsService,
    GetMyBookingsService, ListBookingsService, UpdateBookingStatusService,
};
use crate::modules::property::adapter::outgoing::{
    PropertyQueryPostgres, PropertyRepositoryPostgres,
};
use crate::modules::property::application::property_use_cases::PropertyUseCases;
use crate::modules::property::application::service::{
    AcceptSaleService, GetAgentBookingsService, GetAvailablePropertiesService, ToggleLikeService,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub booking: BookingUseCases,
    pub property: PropertyUseCases,
}

fn required_env(key: &str) -> io::Result<String> {
    env::var(key).map_err(|_| io::Error::other(format!("{key} is not set")))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = required_env("DATABASE_URL")?;
    let host = required_env("HOST")?;
    let port = required_env("PORT")?;

    let jwt_config = JwtConfig::from_env().map_err(|e| io::Error::other(e.to_string()))?;

    let server_url = format!("{host}:{port}");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        io::Error::other(e.to_string())
    })?;

    let db_arc = Arc::new(conn);

    // Adapters
    let booking_repo = BookingRepositoryPostgres::new(Arc::clone(&db_arc));
    let booking_query = BookingQueryPostgres::new(Arc::clone(&db_arc));
    let property_repo = PropertyRepositoryPostgres::new(Arc::clone(&db_arc));
    let property_query = PropertyQueryPostgres::new(Arc::clone(&db_arc));

    let booking = BookingUseCases {
        create: Arc::new(CreateBookingService::new(booking_repo.clone())),
        update_status: Arc::new(UpdateBookingStatusService::new(
            booking_query.clone(),
            booking_repo.clone(),
        )),
        get_single: Arc::new(GetBookingService::new(booking_query.clone())),
        get_mine: Arc::new(GetMyBookingsService::new(booking_query.clone())),
        list_all: Arc::new(ListBookingsService::new(booking_query.clone())),
        stats: Arc::new(GetBookingStatsService::new(booking_query)),
        delete_all: Arc::new(DeleteAllBookingsService::new(booking_repo)),
    };

    let property = PropertyUseCases {
        accept_sale: Arc::new(AcceptSaleService::new(
            property_query.clone(),
            property_repo.clone(),
        )),
        get_available: Arc::new(GetAvailablePropertiesService::new(property_query.clone())),
        toggle_like: Arc::new(ToggleLikeService::new(property_repo)),
        get_agent_bookings: Arc::new(GetAgentBookingsService::new(property_query)),
    };

    let state = AppState { booking, property };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    info!("Server running on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::booking::adapter::incoming::web::routes as booking;
    use crate::modules::property::adapter::incoming::web::routes as property;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Bookings: static segments before /{booking_id}
    cfg.service(booking::get_my_bookings_handler);
    cfg.service(booking::get_booking_stats_handler);
    cfg.service(booking::list_bookings_handler);
    cfg.service(booking::create_booking_handler);
    cfg.service(booking::delete_all_bookings_handler);
    cfg.service(booking::get_booking_handler);
    cfg.service(booking::update_booking_status_handler);
    // Properties
    cfg.service(property::get_available_properties_handler);
    cfg.service(property::get_agent_bookings_handler);
    cfg.service(property::accept_sale_handler);
    cfg.service(property::toggle_like_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
