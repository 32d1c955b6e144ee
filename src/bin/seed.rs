//! Wipes every content table and fills it with demo data plus one admin login.
//!
//! `DATABASE_URL` is required; `SEED_ADMIN_EMAIL` defaults to
//! `admin@example.com` and `SEED_ADMIN_PASSWORD` must be set.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Set};
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use portfolio_cms::auth::adapter::outgoing::sea_orm_entity::admin_users;
use portfolio_cms::auth::adapter::outgoing::security::Argon2Hasher;
use portfolio_cms::auth::application::ports::outgoing::PasswordHasher;
use portfolio_cms::certificate::adapter::outgoing::CertificateRepositoryPostgres;
use portfolio_cms::certificate::application::domain::CertificateInput;
use portfolio_cms::certificate::application::ports::incoming::use_cases::CreateCertificateUseCase;
use portfolio_cms::certificate::application::service::CreateCertificateService;
use portfolio_cms::config::{AppConfig, SeedConfig};
use portfolio_cms::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use portfolio_cms::experience::application::domain::ExperienceInput;
use portfolio_cms::experience::application::ports::incoming::use_cases::CreateExperienceUseCase;
use portfolio_cms::experience::application::service::CreateExperienceService;
use portfolio_cms::profile::adapter::outgoing::ProfileRepositoryPostgres;
use portfolio_cms::profile::application::domain::{ProfileInput, ProfilePatch};
use portfolio_cms::profile::application::ports::incoming::use_cases::UpsertProfileUseCase;
use portfolio_cms::profile::application::service::UpsertProfileService;
use portfolio_cms::project::adapter::outgoing::ProjectRepositoryPostgres;
use portfolio_cms::project::application::domain::ProjectInput;
use portfolio_cms::project::application::ports::incoming::use_cases::CreateProjectUseCase;
use portfolio_cms::project::application::service::CreateProjectService;
use portfolio_cms::skill::adapter::outgoing::SkillCategoryRepositoryPostgres;
use portfolio_cms::skill::application::domain::SkillCategoryInput;
use portfolio_cms::skill::application::ports::incoming::use_cases::CreateSkillCategoryUseCase;
use portfolio_cms::skill::application::service::CreateSkillCategoryService;

const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";

#[tokio::main]
async fn main() -> Result<()> {
    AppConfig::load_env_files();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SeedConfig::from_env().context("invalid configuration")?;
    let Some(url) = config.database_url.as_deref() else {
        bail!("DATABASE_URL must be set to seed the database");
    };
    let admin_email =
        std::env::var("SEED_ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
    let admin_password =
        std::env::var("SEED_ADMIN_PASSWORD").context("SEED_ADMIN_PASSWORD must be set")?;

    let db = Database::connect(url)
        .await
        .context("failed to connect to the database")?;
    Migrator::up(&db, None)
        .await
        .context("failed to run migrations")?;
    let db = Arc::new(db);

    wipe(&db).await?;

    let hasher = Argon2Hasher::new(&config.argon2).context("invalid argon2 settings")?;
    seed_admin(&db, &hasher, &admin_email, &admin_password).await?;
    seed_profile(&db).await?;
    let projects = seed_projects(&db).await?;
    let skills = seed_skills(&db).await?;
    let certificates = seed_certificates(&db).await?;
    let experiences = seed_experience(&db).await?;

    info!(
        admin = %admin_email,
        projects,
        skills,
        certificates,
        experiences,
        "Database seeded"
    );
    Ok(())
}

async fn wipe(db: &DatabaseConnection) -> Result<()> {
    db.execute_unprepared(
        "TRUNCATE TABLE admin_users, profiles, projects, certificates, experiences, skill_categories",
    )
    .await
    .context("failed to clear existing data")?;

    info!("Existing data cleared");
    Ok(())
}

async fn seed_admin(
    db: &DatabaseConnection,
    hasher: &Argon2Hasher,
    email: &str,
    password: &str,
) -> Result<()> {
    let password_hash = hasher
        .hash_password(password)
        .await
        .context("failed to hash the admin password")?;
    let now: DateTime<FixedOffset> = Utc::now().into();

    admin_users::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.trim().to_lowercase()),
        password_hash: Set(password_hash),
        role: Set("admin".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .context("failed to create the admin user")?;

    info!(%email, "Admin user created");
    Ok(())
}

async fn seed_profile(db: &Arc<DatabaseConnection>) -> Result<()> {
    let input: ProfileInput = serde_json::from_value(json!({
        "name": "Alex Morgan",
        "title": "Data Scientist & Analytics Engineer",
        "tagline": "Turning messy data into decisions",
        "bio": "Data science student combining analytical depth with web development. I build models, dashboards and small data products with Python, SQL and Power BI.",
        "shortBio": "Data scientist building dashboards and ML products.",
        "email": "alex@example.com",
        "location": "Remote",
        "availability": "Open to internships",
        "socialLinks": {
            "github": "https://github.com/example",
            "linkedin": "https://linkedin.com/in/example",
            "email": "alex@example.com"
        },
        "education": {
            "degree": "BS Computer Science",
            "institution": "State University",
            "year": "2022 - 2026",
            "description": "Focused on data science, machine learning and analytics."
        },
        "coursework": ["Linear Algebra", "Probability & Statistics", "Calculus", "Discrete Mathematics"],
        "strengths": ["Problem-Solving", "Fast Learner", "Team Player", "Data-Driven"],
        "stats": {
            "projectsCompleted": 5,
            "certificationsEarned": 4,
            "technologiesMastered": 18
        }
    }))?;

    UpsertProfileService::new(ProfileRepositoryPostgres::new(Arc::clone(db)))
        .execute(ProfilePatch::from(input))
        .await
        .context("failed to create the profile")?;

    info!("Profile created");
    Ok(())
}

async fn seed_projects(db: &Arc<DatabaseConnection>) -> Result<usize> {
    let service = CreateProjectService::new(ProjectRepositoryPostgres::new(Arc::clone(db)));
    let projects = [
        json!({
            "title": "Match Outcome Predictor",
            "icon": "🏏",
            "category": "Machine Learning",
            "duration": "6 weeks",
            "problem": "Fans and analysts wanted data-driven match predictions for a cricket tournament.",
            "solution": "A prediction app trained on historical matches, player form and venue statistics.",
            "techStack": ["Python", "Streamlit", "Scikit-learn", "Pandas", "Plotly"],
            "features": ["Live match predictions", "Head-to-head statistics", "Interactive charts"],
            "challenges": ["Sparse history for newer players", "Balancing weather, venue and form"],
            "results": ["75% accuracy on held-out matches", "500+ users during the tournament"],
            "githubUrl": "https://github.com/example/match-predictor",
            "liveUrl": "https://match-predictor.example.com",
            "featured": true,
            "order": 1
        }),
        json!({
            "title": "Customer Segmentation (RFM)",
            "icon": "🧩",
            "category": "Data Analytics",
            "problem": "An online shop could not tell which customers to target with which campaign.",
            "solution": "RFM scoring plus K-Means clustering to split customers into actionable segments.",
            "techStack": ["Python", "Pandas", "Seaborn", "K-Means"],
            "features": ["Automated RFM scores", "Segment behaviour reports"],
            "challenges": ["Choosing the number of segments"],
            "results": ["5 distinct segments", "30% better campaign ROI"],
            "githubUrl": "https://github.com/example/rfm-segmentation",
            "featured": true,
            "order": 2
        }),
        json!({
            "title": "Retail Insights Dashboard",
            "category": "Data Analytics",
            "problem": "Store managers had no single view of sales, stock and customer trends.",
            "solution": "A Power BI dashboard with drill-downs, scheduled refresh and KPI tracking.",
            "techStack": ["Power BI", "DAX", "SQL", "Power Query"],
            "features": ["Real-time sales tracking", "Inventory insights", "Sales forecasting"],
            "results": ["40% faster reporting", "25% fewer stockouts"],
            "order": 3
        }),
        json!({
            "title": "Sales Forecasting",
            "icon": "📈",
            "category": "Machine Learning",
            "problem": "Inventory planning needed weekly sales forecasts per store.",
            "solution": "Time-series models with holiday and economic features, compared across stores.",
            "techStack": ["Python", "Prophet", "XGBoost", "Plotly"],
            "features": ["Multi-store forecasts", "Holiday impact analysis", "Confidence intervals"],
            "results": ["MAPE under 11%"],
            "githubUrl": "https://github.com/example/sales-forecast",
            "order": 4
        }),
        json!({
            "title": "Calculus Visualizer",
            "icon": "🧮",
            "category": "Web Development",
            "problem": "Students struggle to picture surfaces and vector fields in multivariable calculus.",
            "solution": "An interactive web app rendering 3D surfaces, gradients and contour maps.",
            "techStack": ["React", "TypeScript", "Three.js", "Tailwind CSS"],
            "features": ["3D surface plots", "Vector fields", "Animation controls"],
            "results": ["Used by 200+ students"],
            "liveUrl": "https://calculus.example.com",
            "order": 5
        }),
    ];
    let count = projects.len();

    for value in projects {
        let input: ProjectInput = serde_json::from_value(value)?;
        service
            .execute(input)
            .await
            .context("failed to create a project")?;
    }

    info!(count, "Projects created");
    Ok(count)
}

async fn seed_skills(db: &Arc<DatabaseConnection>) -> Result<usize> {
    let service =
        CreateSkillCategoryService::new(SkillCategoryRepositoryPostgres::new(Arc::clone(db)));
    let categories = [
        json!({
            "title": "Core Technologies",
            "icon": "🗄️",
            "description": "Foundational tools for data manipulation and visualization",
            "skills": [
                { "name": "Python", "level": 95 },
                { "name": "SQL", "level": 90 },
                { "name": "Power BI", "level": 90 },
                { "name": "Pandas", "level": 90 },
                { "name": "Excel", "level": 80 }
            ],
            "order": 1
        }),
        json!({
            "title": "ML & Analytics",
            "icon": "🧠",
            "description": "Machine learning algorithms and analytics techniques",
            "skills": [
                { "name": "Scikit-learn", "level": 80 },
                { "name": "K-Means", "level": 80 },
                { "name": "Time Series", "level": 60 },
                { "name": "XGBoost", "level": 60 }
            ],
            "order": 2
        }),
        json!({
            "title": "Engineering Edge",
            "icon": "💻",
            "description": "Tools for shipping data products",
            "skills": [
                { "name": "React", "level": 75 },
                { "name": "Streamlit", "level": 90 },
                { "name": "Git", "level": 80 },
                { "name": "TypeScript", "level": 60 }
            ],
            "order": 3
        }),
    ];
    let count = categories.len();

    for value in categories {
        let input: SkillCategoryInput = serde_json::from_value(value)?;
        service
            .execute(input)
            .await
            .context("failed to create a skill category")?;
    }

    info!(count, "Skill categories created");
    Ok(count)
}

async fn seed_certificates(db: &Arc<DatabaseConnection>) -> Result<usize> {
    let service =
        CreateCertificateService::new(CertificateRepositoryPostgres::new(Arc::clone(db)));
    let certificates = [
        ("Cloud Practitioner Essentials", "Amazon Web Services", "2024-01-15", "amber", ["AWS", "Cloud Computing", "Infrastructure"]),
        ("Machine Learning Fundamentals", "Coursera", "2023-11-20", "blue", ["Machine Learning", "Neural Networks", "Python"]),
        ("Data Science Professional", "DataCamp", "2023-09-10", "green", ["Data Science", "Python", "Statistics"]),
        ("Google Data Analytics", "Google", "2023-07-05", "purple", ["Data Analytics", "SQL", "Visualization"]),
    ];
    let count = certificates.len();

    for (order, (title, platform, issued, color, skills)) in certificates.into_iter().enumerate() {
        let input: CertificateInput = serde_json::from_value(json!({
            "title": title,
            "platform": platform,
            "issueDate": issued,
            "credentialUrl": "https://example.com/verify",
            "skills": skills,
            "color": color,
            "order": order + 1
        }))?;
        service
            .execute(input)
            .await
            .with_context(|| format!("failed to create certificate {title}"))?;
    }

    info!(count, "Certificates created");
    Ok(count)
}

async fn seed_experience(db: &Arc<DatabaseConnection>) -> Result<usize> {
    let service = CreateExperienceService::new(ExperienceRepositoryPostgres::new(Arc::clone(db)));
    let entries = [
        json!({
            "role": "Data Analytics Intern",
            "company": "Northwind Analytics",
            "location": "Remote",
            "description": "Building dashboards and ML prototypes for client reporting.",
            "startDate": "2024-01-01",
            "isCurrent": true,
            "achievements": [
                "Automated weekly reporting, cutting manual work by 60%",
                "Shipped a segmentation model used in two campaigns"
            ],
            "technologies": ["Python", "Power BI", "SQL", "Pandas"],
            "order": 1
        }),
        json!({
            "role": "Teaching Assistant",
            "company": "State University",
            "startDate": "2023-02-01",
            "endDate": "2023-12-15",
            "achievements": ["Ran weekly statistics labs for 40 students"],
            "technologies": ["R", "Excel"],
            "order": 2
        }),
    ];
    let count = entries.len();

    for value in entries {
        let input: ExperienceInput = serde_json::from_value(value)?;
        service
            .execute(input)
            .await
            .context("failed to create an experience entry")?;
    }

    info!(count, "Experience entries created");
    Ok(count)
}
