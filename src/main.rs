//! hymnbook - 찬송가/교독문 검색 CLI

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hymnbook::config::load_config;
use hymnbook::{youtube, Catalog, Hymn, Library, YouTubeIndex};

/// 찬송가/교독문 검색 (번호, 초성, 일반 텍스트)
#[derive(Parser, Debug)]
#[command(name = "hymnbook")]
#[command(version)]
struct Cli {
    /// 카탈로그 JSON 경로 (기본값: 설정 파일)
    #[arg(long, env = "HYMNBOOK_CATALOG")]
    catalog: Option<PathBuf>,

    /// YouTube 색인 JSON 경로
    #[arg(long, env = "HYMNBOOK_YOUTUBE_INDEX")]
    youtube: Option<PathBuf>,

    /// 북마크/최근 본 목록 저장 경로
    #[arg(long, env = "HYMNBOOK_LIBRARY")]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 찬송가 검색
    Hymns { query: Vec<String> },
    /// 교독문 검색
    Readings { query: Vec<String> },
    /// 찬송가 보기 (최근 본 목록에 기록)
    Show { number: u32 },
    /// 북마크 토글
    Bookmark { number: u32 },
    /// 북마크 목록
    Bookmarks,
    /// 최근 본 목록
    History,
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        eprintln!("오류: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config();
    let catalog_path = cli.catalog.unwrap_or(config.catalog_path);
    let youtube_path = cli.youtube.unwrap_or(config.youtube_index_path);
    let library_path = cli.library.unwrap_or(config.library_path);

    // 카탈로그는 필요한 명령에서만 로드 (history 는 라이브러리만 사용)
    match cli.command {
        Command::Hymns { query } => {
            let catalog = Catalog::load(&catalog_path)?;
            let library = Library::load(&library_path)?;
            for hymn in catalog.search_hymns(&query.join(" ")) {
                print_hymn_line(hymn, library.is_bookmarked(hymn.number));
            }
        }
        Command::Readings { query } => {
            let catalog = Catalog::load(&catalog_path)?;
            for reading in catalog.search_readings(&query.join(" ")) {
                println!("{:>4}  {}", reading.number, reading.title);
            }
        }
        Command::Show { number } => {
            let catalog = Catalog::load(&catalog_path)?;
            let hymn = catalog
                .hymn(number)
                .ok_or_else(|| format!("{}장을 찾을 수 없습니다", number))?;

            let fallback = YouTubeIndex::default();
            let index = match youtube::install_from_path(&youtube_path) {
                Ok(index) => index,
                Err(e) => {
                    log::warn!("YouTube 색인 로드 실패, 검색 URL 사용: {}", e);
                    &fallback
                }
            };

            let mut library = Library::load(&library_path)?;
            library.record_visit(hymn.number, hymn.title.clone());
            library.save(&library_path)?;

            print_hymn_line(hymn, library.is_bookmarked(hymn.number));
            println!();
            println!("{}", hymn.words);
            println!();
            println!("{}", index.watch_url(hymn.number, &hymn.title));
        }
        Command::Bookmark { number } => {
            let catalog = Catalog::load(&catalog_path)?;
            let hymn = catalog
                .hymn(number)
                .ok_or_else(|| format!("{}장을 찾을 수 없습니다", number))?;
            let mut library = Library::load(&library_path)?;
            let on = library.toggle_bookmark(hymn.number);
            library.save(&library_path)?;
            println!("{}장 북마크 {}", hymn.number, if on { "추가" } else { "해제" });
        }
        Command::Bookmarks => {
            let catalog = Catalog::load(&catalog_path)?;
            let library = Library::load(&library_path)?;
            for hymn in library.bookmarks().filter_map(|n| catalog.hymn(n)) {
                print_hymn_line(hymn, true);
            }
        }
        Command::History => {
            let library = Library::load(&library_path)?;
            for item in library.history() {
                println!("{}  {:>4}  {}", item.date, item.number, item.title);
            }
        }
    }

    Ok(())
}

fn print_hymn_line(hymn: &Hymn, bookmarked: bool) {
    let mark = if bookmarked { "★" } else { " " };
    println!("{} {:>4}  {}", mark, hymn.number, hymn.title);
}
