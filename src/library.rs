//! 북마크 및 최근 본 목록 (JSON 저장)

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// 라이브러리 저장/로드 에러
#[derive(Debug)]
pub enum LibraryError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 직렬화/파싱 실패
    ParseError(String),
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LibraryError::IoError(e) => write!(f, "라이브러리 파일 오류: {}", e),
            LibraryError::ParseError(s) => write!(f, "라이브러리 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(e: std::io::Error) -> Self {
        LibraryError::IoError(e)
    }
}

/// 최근 본 항목
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HistoryItem {
    pub number: u32,
    pub title: String,
    /// 열람 날짜 (YYYY-MM-DD, 로컬 시간)
    pub date: String,
}

/// 사용자 북마크와 최근 본 목록
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Library {
    #[serde(default)]
    bookmarks: BTreeSet<u32>,
    /// 최근 순
    #[serde(default)]
    history: Vec<HistoryItem>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// 파일에서 로드 (파일이 없으면 빈 라이브러리)
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("라이브러리 파일 없음, 새로 생성: {}", path.display());
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| LibraryError::ParseError(e.to_string()))
    }

    /// 파일에 저장 (상위 디렉토리 자동 생성)
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LibraryError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json =
            serde_json::to_string_pretty(self).map_err(|e| LibraryError::ParseError(e.to_string()))?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn is_bookmarked(&self, number: u32) -> bool {
        self.bookmarks.contains(&number)
    }

    pub fn set_bookmark(&mut self, number: u32, on: bool) {
        if on {
            self.bookmarks.insert(number);
        } else {
            self.bookmarks.remove(&number);
        }
    }

    /// 북마크 토글, 변경 후 상태 반환
    pub fn toggle_bookmark(&mut self, number: u32) -> bool {
        let on = !self.is_bookmarked(number);
        self.set_bookmark(number, on);
        on
    }

    /// 북마크 번호 (오름차순)
    pub fn bookmarks(&self) -> impl Iterator<Item = u32> + '_ {
        self.bookmarks.iter().copied()
    }

    pub fn clear_bookmarks(&mut self) {
        self.bookmarks.clear();
    }

    /// 최근 본 목록에 추가 (같은 번호는 지우고 맨 앞에 다시 넣음)
    pub fn add_history(&mut self, number: u32, title: impl Into<String>, date: impl Into<String>) {
        self.remove_history(number);
        self.history.insert(
            0,
            HistoryItem {
                number,
                title: title.into(),
                date: date.into(),
            },
        );
    }

    /// 오늘 날짜로 최근 본 목록에 추가
    pub fn record_visit(&mut self, number: u32, title: impl Into<String>) {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        self.add_history(number, title, today);
    }

    pub fn remove_history(&mut self, number: u32) {
        self.history.retain(|item| item.number != number);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// 최근 본 목록 (최근 순)
    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }
}
