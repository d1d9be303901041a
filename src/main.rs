use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;
use trip_service::{
    api,
    config::{Config, StoreBackend},
    database::{self, InMemoryStore, MongoStore, StoreWriter},
    middleware, seeds,
    state::AppState,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting Trip Service...");

    let (state, writer): (AppState, Arc<dyn StoreWriter>) = match &config.store_backend {
        StoreBackend::MongoDB { database_url } => {
            log::info!("📊 Database: {}", database_url);

            let db = database::MongoDB::new(database_url)
                .await
                .map_err(|e| io::Error::other(format!("Failed to connect to MongoDB: {}", e)))?;

            log::info!("✅ MongoDB connected successfully");

            let store = Arc::new(MongoStore::new(db));
            let writer: Arc<dyn StoreWriter> = store.clone();
            (AppState::new(store, config.jwt.clone()), writer)
        }
        StoreBackend::Memory => {
            log::warn!("⚠️  Using in-memory store, data is lost on restart");

            let store = Arc::new(InMemoryStore::new());
            let writer: Arc<dyn StoreWriter> = store.clone();
            (AppState::new(store, config.jwt.clone()), writer)
        }
    };

    if config.seed_demo_data {
        seeds::demo_seed::seed_demo_data(writer.as_ref()).await;
    }

    if config.dev_tokens_enabled {
        log::warn!("🔧 Dev token endpoint enabled: POST /api/v1/auth/dev-token");
    }

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);

    let state_data = web::Data::new(state);
    let cors_origins = config.cors_allowed_origins.clone();
    let dev_tokens_enabled = config.dev_tokens_enabled;

    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::CONTENT_TYPE,
                header::ACCEPT,
            ])
            .expose_headers(vec![header::CONTENT_TYPE])
            .supports_credentials()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(state_data.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            .configure(api::configure)
            .configure(move |cfg| {
                if dev_tokens_enabled {
                    api::configure_dev_tokens(cfg);
                }
            })
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
