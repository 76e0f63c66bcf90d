//! Sheikh 플랫폼 운영 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # sheikh 계정 생성
//! sheikh create-sheikh sheikh001 "الشيخ محمد أحمد" "demo123"
//!
//! # 샘플 카테고리 기록
//! sheikh seed-categories
//!
//! # 기록 없이 카탈로그 확인
//! sheikh seed-categories --dry-run
//! ```
//!
//! 데이터베이스 접근에는 `--db-url` 옵션 또는 `DATABASE_URL` 환경변수가
//! 필요합니다.

use clap::{Parser, Subcommand};

mod commands;

use commands::{create_sheikh, seed_categories};
use sheikh_store::{CategoryRepository, Database, DatabaseConfig, UserRepository};

#[derive(Parser)]
#[command(name = "sheikh")]
#[command(about = "Sheikh platform CLI - 계정 프로비저닝 및 데이터 시딩", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 새 sheikh 계정 생성 (데모 전용 - 평문 비밀번호도 함께 저장됨)
    CreateSheikh {
        /// 로그인 식별자 (예: sheikh001)
        unique_id: String,

        /// 표시 이름
        name: String,

        /// 비밀번호
        password: String,

        /// 데이터베이스 URL (기본: DATABASE_URL 환경변수)
        #[arg(long)]
        db_url: Option<String>,
    },

    /// 샘플 카테고리 기록
    SeedCategories {
        /// 기록하지 않고 카탈로그만 출력
        #[arg(long, default_value = "false")]
        dry_run: bool,

        /// 데이터베이스 URL (기본: DATABASE_URL 환경변수)
        #[arg(long)]
        db_url: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!();
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::CreateSheikh {
            unique_id,
            name,
            password,
            db_url,
        } => {
            let db = connect(db_url).await?;
            let store = UserRepository::new(db);

            create_sheikh::run(&store, &unique_id, &name, &password).await?;

            println!();
            println!("Done!");
        }
        Commands::SeedCategories { dry_run, db_url } => {
            // 드라이런은 DB 연결 없이 카탈로그만 보여준다
            if dry_run {
                seed_categories::print_catalogue(&sheikh_core::sample_categories());
                return Ok(());
            }

            let db = connect(db_url).await?;
            let repo = CategoryRepository::new(db);

            seed_categories::run(&repo).await;
        }
    }

    Ok(())
}

/// DB에 연결하고 스키마를 최신으로 맞춥니다.
async fn connect(db_url: Option<String>) -> Result<Database, Box<dyn std::error::Error>> {
    let config = match db_url {
        Some(url) => DatabaseConfig::with_url(url),
        None => DatabaseConfig::from_env(),
    };

    let db = Database::connect(&config).await?;
    db.migrate().await?;

    Ok(db)
}
