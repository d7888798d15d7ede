//! 사용자 서비스 메인 애플리케이션
//!
//! 설정을 읽고 저장소를 골라 서비스 그래프를 조립한 뒤 Actix-web 서버를 구동합니다.
//! MongoDB 모드에서는 `user_ban` 채널 구독자도 함께 실행됩니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_backend::caching::redis::RedisClient;
use user_service_backend::config::{AppConfig, ServerConfig, StorageBackend};
use user_service_backend::core::state::AppState;
use user_service_backend::db::Database;
use user_service_backend::middlewares::{UserContextMiddleware, USER_ID_HEADER};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::events::BanEventListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 사용자 서비스 시작중...");

    let config = AppConfig::from_env();
    let state = build_state(&config).await?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다! (저장소: {:?})", config.storage);

    start_http_server(config, state).await
}

/// 저장소 설정에 따라 `AppState`를 만듭니다.
///
/// MongoDB 모드에서는 밴 이벤트 구독자를 백그라운드로 띄웁니다.
async fn build_state(config: &AppConfig) -> std::io::Result<AppState> {
    match config.storage {
        StorageBackend::Memory => {
            info!("💾 메모리 저장소 사용 (이벤트는 메모리에 기록)");
            Ok(AppState::in_memory(config))
        }
        StorageBackend::Mongo => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new(&config.data)
                .await
                .map_err(|e| std::io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;
            let redis = RedisClient::new(&config.data)
                .await
                .map_err(|e| std::io::Error::other(format!("Redis 연결 실패: {}", e)))?;

            let state = AppState::with_mongo(config, &database, redis.clone())
                .await
                .map_err(|e| std::io::Error::other(e.to_string()))?;

            let listener = BanEventListener::new(redis, state.users.clone());
            actix_web::rt::spawn(listener.run());

            Ok(state)
        }
    }
}

async fn start_http_server(config: AppConfig, state: AppState) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(UserContextMiddleware)
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// `PROFILE` 환경 변수에 따라 `.env.dev` / `.env.prod` 파일을 로드합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
        }
    }
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static(USER_ID_HEADER),
        ])
        .max_age(3600)
}
