//! WellBite 인증 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 토큰 컴포넌트를 조립합니다.
//! MongoDB(필수)와 Redis(액세스 토큰 denylist 사용 시) 연결을 설정합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use wellbite_auth_service::caching::redis::RedisClient;
use wellbite_auth_service::config::{
    AccessDenylistMode, AuthConfig, DatabaseConfig, Environment, RateLimitConfig, RedisConfig,
    ServerConfig,
};
use wellbite_auth_service::db::Database;
use wellbite_auth_service::repositories::tokens::{MongoRefreshTokenStore, RefreshTokenStore};
use wellbite_auth_service::repositories::users::{MongoUserRepository, UserDirectory};
use wellbite_auth_service::routes::configure_all_routes;
use wellbite_auth_service::services::auth::{
    AccessTokenRevocation, NoopAccessTokenRevocation, RedisAccessTokenDenylist,
};
use wellbite_auth_service::services::users::password_verifier_for;
use wellbite_auth_service::state::AppState;
use wellbite_auth_service::utils::display_terminal::{
    print_boxed_title, print_startup_summary, print_step_complete, print_step_start,
    print_sub_task,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("WellBite Auth Service");
    info!("🚀 WellBite 인증 서비스 시작중...");

    let environment = Environment::current();
    let denylist_mode = AccessDenylistMode::current();

    let state = build_app_state(&environment, denylist_mode).await?;
    info!("✅ 모든 컴포넌트가 성공적으로 초기화되었습니다!");

    let bind_address = ServerConfig::bind_address();
    print_startup_summary(
        &bind_address,
        &format!("{:?}", environment),
        &format!("{:?}", denylist_mode),
    );

    start_http_server(state, &bind_address).await
}

/// 설정을 읽고 저장소를 연결한 뒤 [`AppState`]를 조립합니다
///
/// # Errors
///
/// * 서명 키 누락 (개발/테스트 외 환경)
/// * MongoDB 연결 또는 인덱스 생성 실패
/// * denylist가 켜져 있을 때 Redis 연결 실패
async fn build_app_state(
    environment: &Environment,
    denylist_mode: AccessDenylistMode,
) -> std::io::Result<AppState> {
    print_step_start(1, "Loading token configuration");
    let auth_config = AuthConfig::from_env(environment).map_err(startup_error)?;
    info!("토큰 설정 로드됨: {:?}", auth_config);
    print_step_complete(1, "Loading token configuration");

    print_step_start(2, "Connecting to MongoDB");
    let database = Database::connect(&DatabaseConfig::uri(), &DatabaseConfig::name())
        .await
        .map_err(startup_error)?;
    let store: Arc<dyn RefreshTokenStore> = Arc::new(
        MongoRefreshTokenStore::new(&database)
            .await
            .map_err(startup_error)?,
    );
    let directory: Arc<dyn UserDirectory> = Arc::new(MongoUserRepository::new(&database));
    print_sub_task("Refresh token store", "MongoDB");
    print_sub_task("User directory", "MongoDB");
    print_step_complete(2, "Connecting to MongoDB");

    print_step_start(3, "Configuring access token revocation");
    let access_revocation: Arc<dyn AccessTokenRevocation> = match denylist_mode {
        AccessDenylistMode::Redis => {
            let redis = RedisClient::new(&RedisConfig::url())
                .await
                .map_err(startup_error)?;
            print_sub_task("Access token denylist", "Redis");
            Arc::new(RedisAccessTokenDenylist::new(redis))
        }
        AccessDenylistMode::Disabled => {
            warn!("⚠️ 액세스 토큰 폐기 확인 비활성화: 로그아웃 후에도 액세스 토큰은 만료 시까지 유효합니다");
            print_sub_task("Access token denylist", "disabled");
            Arc::new(NoopAccessTokenRevocation)
        }
    };
    print_step_complete(3, "Configuring access token revocation");

    Ok(AppState::new(
        auth_config,
        store,
        directory,
        password_verifier_for(environment),
        access_revocation,
    ))
}

fn startup_error<E: std::fmt::Display>(e: E) -> std::io::Error {
    error!("❌ 서비스 초기화 실패: {}", e);
    std::io::Error::other(e.to_string())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: AppState, bind_address: &str) -> std::io::Result<()> {
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Auth API: http://{}/api/auth", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| startup_error("Rate Limiting 설정이 올바르지 않습니다 (0 값)"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

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
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 인증 파이프라인만 debug
/// RUST_LOG=wellbite_auth_service::services::auth=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 모바일/웹 클라이언트가 `Authorization` 헤더로 Bearer/Basic 자격 증명을 보낼 수 있어야 합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
