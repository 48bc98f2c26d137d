mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::store::{DocumentStore, MongoStore};
use crate::core::{database, middleware};
use crate::features::auth::routes as auth_routes;
use crate::features::auth::TokenService;
use crate::features::bookings::{routes as bookings_routes, BookingService};
use crate::features::contests::{routes as contests_routes, ContestService};
use crate::features::favorites::{routes as favorites_routes, FavoriteService};
use crate::features::payments::{routes as payments_routes, PaymentService, StripeClient};
use crate::features::promotions::{routes as promotions_routes, PromotionService};
use crate::features::requests::{routes as requests_routes, RequestService};
use crate::features::users::{routes as users_routes, UserService};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Connect to the document store; one client handle is shared for the
    // process lifetime
    let db = database::connect(&config.database).await?;
    let store: Arc<dyn DocumentStore> = Arc::new(MongoStore::new(db));

    // Initialize session token service
    let token_service = Arc::new(TokenService::new(config.session.clone()));
    tracing::info!("Session token service initialized");

    // Initialize collection services
    let user_service = Arc::new(UserService::new(Arc::clone(&store)));
    let contest_service = Arc::new(ContestService::new(Arc::clone(&store)));
    let booking_service = Arc::new(BookingService::new(Arc::clone(&store)));
    let favorite_service = Arc::new(FavoriteService::new(Arc::clone(&store)));
    let promotion_service = Arc::new(PromotionService::new(Arc::clone(&store)));
    let request_service = Arc::new(RequestService::new(Arc::clone(&store)));
    tracing::info!("Collection services initialized");

    // Initialize payment gateway
    let stripe_client = Arc::new(StripeClient::new(config.stripe.clone()));
    let payment_service = Arc::new(PaymentService::new(stripe_client));
    tracing::info!("Payment gateway initialized");

    // Build OpenAPI document with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (every mutating route requires a valid session cookie)
    let protected_routes = Router::new()
        .merge(users_routes::protected_routes(Arc::clone(&user_service)))
        .merge(contests_routes::protected_routes(Arc::clone(
            &contest_service,
        )))
        .merge(bookings_routes::protected_routes(Arc::clone(
            &booking_service,
        )))
        .merge(favorites_routes::protected_routes(Arc::clone(
            &favorite_service,
        )))
        .merge(requests_routes::routes(request_service))
        .merge(payments_routes::routes(payment_service))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&token_service),
            middleware::session_guard,
        ));

    // Liveness endpoint (no auth required)
    async fn liveness() -> &'static str {
        "Hello there from contestify.."
    }
    let liveness_route = Router::new().route("/", axum::routing::get(liveness));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::routes(Arc::clone(&token_service)))
        .merge(users_routes::public_routes(user_service))
        .merge(contests_routes::public_routes(contest_service))
        .merge(bookings_routes::public_routes(booking_service))
        .merge(favorites_routes::public_routes(favorite_service))
        .merge(promotions_routes::routes(promotion_service));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(liveness_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
