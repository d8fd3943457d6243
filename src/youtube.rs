//! 장 번호 -> YouTube 영상 ID 색인
//!
//! 번들 JSON 파일을 한 번만 읽어 변경 불가능한 맵으로 보관합니다.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use url::Url;

const WATCH_URL: &str = "https://www.youtube.com/watch";
const SEARCH_URL: &str = "https://www.youtube.com/results";

static GLOBAL_INDEX: OnceLock<YouTubeIndex> = OnceLock::new();

/// 색인 로드 에러
#[derive(Debug)]
pub enum IndexError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            IndexError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for IndexError {}

impl From<std::io::Error> for IndexError {
    fn from(e: std::io::Error) -> Self {
        IndexError::IoError(e)
    }
}

#[derive(Deserialize)]
struct LinkEntry {
    index: u32,
    youtube: String,
}

#[derive(Deserialize)]
struct IndexFile {
    list: Vec<LinkEntry>,
}

/// 장 번호 -> YouTube ID 맵
#[derive(Debug, Clone, Default)]
pub struct YouTubeIndex {
    ids: HashMap<u32, String>,
}

impl YouTubeIndex {
    /// JSON 파일에서 색인 로드
    ///
    /// # 파일 형식
    /// ```json
    /// { "ver": 1, "list": [{ "index": 1, "youtube": "dQw4w9WgXcQ" }] }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let file = File::open(path.as_ref())?;
        let parsed: IndexFile = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| IndexError::ParseError(e.to_string()))?;
        Ok(Self::from_entries(parsed.list))
    }

    /// JSON 문자열에서 색인 로드
    pub fn from_json(json_str: &str) -> Result<Self, IndexError> {
        let parsed: IndexFile =
            serde_json::from_str(json_str).map_err(|e| IndexError::ParseError(e.to_string()))?;
        Ok(Self::from_entries(parsed.list))
    }

    fn from_entries(entries: Vec<LinkEntry>) -> Self {
        let mut ids = HashMap::with_capacity(entries.len());
        for entry in entries {
            let id = sanitize_youtube_id(&entry.youtube);
            if id.is_empty() {
                log::warn!("{}장 YouTube ID가 비어 있어 건너뜀", entry.index);
                continue;
            }
            // 같은 번호가 여러 번 나오면 마지막 값 사용
            ids.insert(entry.index, id);
        }
        Self { ids }
    }

    /// 장 번호로 YouTube ID 조회
    pub fn youtube_id(&self, number: u32) -> Option<&str> {
        self.ids.get(&number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// 재생 URL (매핑이 없으면 YouTube 검색 URL로 대체)
    pub fn watch_url(&self, number: u32, title: &str) -> String {
        let url = match self.youtube_id(number) {
            Some(id) => Url::parse_with_params(WATCH_URL, &[("v", id)]),
            None => {
                let query = format!("찬송가 {}장 {} 악보", number, title);
                Url::parse_with_params(SEARCH_URL, &[("search_query", query.as_str())])
            }
        };
        // 상수 URL 파싱이므로 실패하지 않음
        url.map(String::from).unwrap_or_default()
    }
}

/// YouTube ID 정제: [A-Za-z0-9-_]만 허용
fn sanitize_youtube_id(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}

/// 프로세스 전역 색인 설치 (이미 설치되어 있으면 false)
pub fn install(index: YouTubeIndex) -> bool {
    GLOBAL_INDEX.set(index).is_ok()
}

/// 전역 색인이 없으면 파일에서 로드하여 설치
pub fn install_from_path(path: impl AsRef<Path>) -> Result<&'static YouTubeIndex, IndexError> {
    if let Some(index) = GLOBAL_INDEX.get() {
        return Ok(index);
    }
    let index = YouTubeIndex::load(path)?;
    log::info!("YouTube 색인 로드: {}건", index.len());
    Ok(GLOBAL_INDEX.get_or_init(|| index))
}

/// 전역 색인 (설치 전이면 None)
pub fn global() -> Option<&'static YouTubeIndex> {
    GLOBAL_INDEX.get()
}

/// 전역 색인으로 YouTube ID 조회
pub fn youtube_id(number: u32) -> Option<&'static str> {
    global().and_then(|index| index.youtube_id(number))
}
