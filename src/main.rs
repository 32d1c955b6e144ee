use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_cms::auth::adapter::incoming::web::session_cookie::SessionCookieSettings;
use portfolio_cms::auth::adapter::outgoing::admin_user_query_postgres::AdminUserQueryPostgres;
use portfolio_cms::auth::adapter::outgoing::jwt::JwtTokenService;
use portfolio_cms::auth::adapter::outgoing::security::Argon2Hasher;
use portfolio_cms::auth::application::ports::outgoing::{PasswordHasher, SharedTokenProvider};
use portfolio_cms::auth::application::services::LoginAdminService;
use portfolio_cms::certificate::adapter::outgoing::CertificateRepositoryPostgres;
use portfolio_cms::certificate::application::certificate_use_cases::CertificateUseCases;
use portfolio_cms::certificate::application::service::{
    CreateCertificateService, DeleteCertificateService, GetCertificateService,
    ListCertificatesService, UpdateCertificateService,
};
use portfolio_cms::config::AppConfig;
use portfolio_cms::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use portfolio_cms::experience::application::experience_use_cases::ExperienceUseCases;
use portfolio_cms::experience::application::service::{
    CreateExperienceService, DeleteExperienceService, GetExperienceService,
    ListExperiencesService, UpdateExperienceService,
};
use portfolio_cms::profile::adapter::outgoing::ProfileRepositoryPostgres;
use portfolio_cms::profile::application::profile_use_cases::ProfileUseCases;
use portfolio_cms::profile::application::service::{GetProfileService, UpsertProfileService};
use portfolio_cms::project::adapter::outgoing::ProjectRepositoryPostgres;
use portfolio_cms::project::application::project_use_cases::ProjectUseCases;
use portfolio_cms::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectService, ListProjectsService,
    UpdateProjectService,
};
use portfolio_cms::shared::api::custom_json_config;
use portfolio_cms::site::application::service::LandingService;
use portfolio_cms::skill::adapter::outgoing::SkillCategoryRepositoryPostgres;
use portfolio_cms::skill::application::service::{
    CreateSkillCategoryService, DeleteSkillCategoryService, GetSkillCategoryService,
    ListSkillCategoriesService, UpdateSkillCategoryService,
};
use portfolio_cms::skill::application::skill_use_cases::SkillUseCases;
use portfolio_cms::{init_routes, AppState};

/// Connects and migrates; any failure leaves the server in degraded mode.
async fn connect_database(database_url: Option<&str>) -> DatabaseConnection {
    let Some(url) = database_url else {
        warn!("DATABASE_URL is not set; starting in degraded mode");
        return DatabaseConnection::Disconnected;
    };

    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(20)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = match Database::connect(opt).await {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "Database connection failed; starting in degraded mode");
            return DatabaseConnection::Disconnected;
        }
    };

    if let Err(e) = Migrator::up(&conn, None).await {
        error!(error = %e, "Migrations failed; starting in degraded mode");
        return DatabaseConnection::Disconnected;
    }

    info!("Database connected and migrated");
    conn
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    AppConfig::load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    if config.is_production() && !config.secure_cookies() {
        warn!("AUTH_BASE_URL is not https; session cookies will not be marked Secure");
    }

    let db_arc = Arc::new(connect_database(config.database_url.as_deref()).await);

    // Records
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db_arc));
    let project = ProjectUseCases {
        list: Arc::new(ListProjectsService::new(project_repo.clone())),
        get: Arc::new(GetProjectService::new(project_repo.clone())),
        create: Arc::new(CreateProjectService::new(project_repo.clone())),
        update: Arc::new(UpdateProjectService::new(project_repo.clone())),
        delete: Arc::new(DeleteProjectService::new(project_repo)),
    };

    let certificate_repo = CertificateRepositoryPostgres::new(Arc::clone(&db_arc));
    let certificate = CertificateUseCases {
        list: Arc::new(ListCertificatesService::new(certificate_repo.clone())),
        get: Arc::new(GetCertificateService::new(certificate_repo.clone())),
        create: Arc::new(CreateCertificateService::new(certificate_repo.clone())),
        update: Arc::new(UpdateCertificateService::new(certificate_repo.clone())),
        delete: Arc::new(DeleteCertificateService::new(certificate_repo)),
    };

    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience = ExperienceUseCases {
        list: Arc::new(ListExperiencesService::new(experience_repo.clone())),
        get: Arc::new(GetExperienceService::new(experience_repo.clone())),
        create: Arc::new(CreateExperienceService::new(experience_repo.clone())),
        update: Arc::new(UpdateExperienceService::new(experience_repo.clone())),
        delete: Arc::new(DeleteExperienceService::new(experience_repo)),
    };

    let skill_repo = SkillCategoryRepositoryPostgres::new(Arc::clone(&db_arc));
    let skill = SkillUseCases {
        list: Arc::new(ListSkillCategoriesService::new(skill_repo.clone())),
        get: Arc::new(GetSkillCategoryService::new(skill_repo.clone())),
        create: Arc::new(CreateSkillCategoryService::new(skill_repo.clone())),
        update: Arc::new(UpdateSkillCategoryService::new(skill_repo.clone())),
        delete: Arc::new(DeleteSkillCategoryService::new(skill_repo)),
    };

    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile = ProfileUseCases {
        get: Arc::new(GetProfileService::new(profile_repo.clone())),
        upsert: Arc::new(UpsertProfileService::new(profile_repo)),
    };

    let landing = LandingService::new(
        Arc::clone(&profile.get),
        Arc::clone(&project.list),
        Arc::clone(&skill.list),
        Arc::clone(&certificate.list),
        Arc::clone(&experience.list),
    );

    // Auth
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider_arc: SharedTokenProvider = Arc::new(jwt_service);
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(
        Argon2Hasher::new(&config.argon2)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?,
    );
    let login_admin = LoginAdminService::new(
        AdminUserQueryPostgres::new(Arc::clone(&db_arc)),
        password_hasher,
        token_provider_arc.clone(),
    );

    let state = AppState {
        login_admin: Arc::new(login_admin),
        project,
        certificate,
        experience,
        skill,
        profile,
        landing: Arc::new(landing),
    };

    let cookie_settings = SessionCookieSettings {
        secure: config.secure_cookies(),
    };
    let server_url = config.bind_address();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(cookie_settings))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
