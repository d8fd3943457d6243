//! 읽기 전용 카탈로그 로드 및 조회
//!
//! JSON 번들 파일에서 찬송가/교독문 목록을 로드합니다.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::model::{Hymn, Reading};
use crate::search::{search, SearchScope, Searchable};

/// 카탈로그 로드/파싱 에러
#[derive(Debug)]
pub enum CatalogError {
    /// 파일 읽기 실패
    IoError(std::io::Error),
    /// JSON 파싱 실패
    ParseError(String),
    /// 데이터 형식 오류
    FormatError(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::IoError(e) => write!(f, "파일 읽기 오류: {}", e),
            CatalogError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            CatalogError::FormatError(s) => write!(f, "카탈로그 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::IoError(e)
    }
}

/// 번들 파일 형식
#[derive(Deserialize)]
struct Bundle {
    #[serde(default)]
    hymns: Vec<Hymn>,
    #[serde(default)]
    readings: Vec<Reading>,
}

/// 찬송가/교독문 카탈로그
///
/// 로드 후에는 변경되지 않으며, 모든 목록은 번호 오름차순입니다.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hymns: Vec<Hymn>,
    readings: Vec<Reading>,
}

impl Catalog {
    /// JSON 파일에서 카탈로그 로드
    ///
    /// # 파일 형식
    /// ```json
    /// {
    ///   "hymns": [{ "number": 1, "title": "...", "words": "...", "img": "", "youtubeId": 0 }],
    ///   "readings": [{ "number": 1, "title": "...", "words": "..." }]
    /// }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let bundle: Bundle = serde_json::from_reader(reader)
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let catalog = Self::new(bundle.hymns, bundle.readings)?;
        log::info!(
            "카탈로그 로드: {} (찬송가 {}곡, 교독문 {}편)",
            path.as_ref().display(),
            catalog.hymns.len(),
            catalog.readings.len()
        );
        Ok(catalog)
    }

    /// JSON 문자열에서 카탈로그 로드
    pub fn from_json(json_str: &str) -> Result<Self, CatalogError> {
        let bundle: Bundle = serde_json::from_str(json_str)
            .map_err(|e| CatalogError::ParseError(e.to_string()))?;

        Self::new(bundle.hymns, bundle.readings)
    }

    /// 레코드 목록으로 카탈로그 생성 (번호 중복 시 에러)
    pub fn new(mut hymns: Vec<Hymn>, mut readings: Vec<Reading>) -> Result<Self, CatalogError> {
        ensure_unique("찬송가", &hymns)?;
        ensure_unique("교독문", &readings)?;

        hymns.sort_by_key(|h| h.number);
        readings.sort_by_key(|r| r.number);

        Ok(Self { hymns, readings })
    }

    pub fn hymns(&self) -> &[Hymn] {
        &self.hymns
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    /// 번호로 찬송가 조회
    pub fn hymn(&self, number: u32) -> Option<&Hymn> {
        find_by_number(&self.hymns, number)
    }

    /// 번호로 교독문 조회
    pub fn reading(&self, number: u32) -> Option<&Reading> {
        find_by_number(&self.readings, number)
    }

    /// 다음 장 (번호 + 1)
    pub fn next_hymn(&self, number: u32) -> Option<&Hymn> {
        number.checked_add(1).and_then(|n| self.hymn(n))
    }

    /// 이전 장 (번호 - 1)
    pub fn prev_hymn(&self, number: u32) -> Option<&Hymn> {
        number.checked_sub(1).and_then(|n| self.hymn(n))
    }

    /// 찬송가 검색 (초성 매칭은 가사만 검사)
    pub fn search_hymns(&self, query: &str) -> Vec<&Hymn> {
        search(&self.hymns, query, SearchScope::Words)
            .into_iter()
            .map(|hit| hit.record)
            .collect()
    }

    /// 교독문 검색 (초성 매칭은 제목 일치 우선)
    pub fn search_readings(&self, query: &str) -> Vec<&Reading> {
        search(&self.readings, query, SearchScope::TitleThenWords)
            .into_iter()
            .map(|hit| hit.record)
            .collect()
    }
}

fn find_by_number<T: Searchable>(records: &[T], number: u32) -> Option<&T> {
    records
        .binary_search_by_key(&number, |r| r.number())
        .ok()
        .map(|i| &records[i])
}

fn ensure_unique<T: Searchable>(kind: &str, records: &[T]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.number()) {
            return Err(CatalogError::FormatError(format!(
                "{} 번호 중복: {}",
                kind,
                record.number()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog_json() -> &'static str {
        r#"{
            "hymns": [
                { "number": 3, "title": "성부 성자 성령", "words": "성부 성자 성령 찬송과 영광 돌려보내세" },
                { "number": 1, "title": "만복의 근원 하나님", "words": "만복의 근원 하나님 온 백성 찬송 드리고", "img": "h001" },
                { "number": 2, "title": "찬양 성부 성자 성령", "words": "찬양 성부 성자 성령 삼위일체 하나님" }
            ],
            "readings": [
                { "number": 2, "title": "시편 2편", "words": "어찌하여 열방이 분노하며" },
                { "number": 1, "title": "복 있는 사람", "words": "복 있는 사람은 악인의 꾀를 따르지 아니하며" }
            ]
        }"#
    }

    #[test]
    fn test_load_from_json_sorted() {
        let catalog = Catalog::from_json(sample_catalog_json()).unwrap();
        let numbers: Vec<u32> = catalog.hymns().iter().map(|h| h.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(catalog.readings()[0].number, 1);
    }

    #[test]
    fn test_lookup_by_number() {
        let catalog = Catalog::from_json(sample_catalog_json()).unwrap();
        assert_eq!(catalog.hymn(1).map(|h| h.img.as_str()), Some("h001"));
        assert!(catalog.hymn(99).is_none());
        assert_eq!(catalog.reading(2).map(|r| r.title.as_str()), Some("시편 2편"));
    }

    #[test]
    fn test_next_prev_hymn() {
        let catalog = Catalog::from_json(sample_catalog_json()).unwrap();
        assert_eq!(catalog.next_hymn(1).map(|h| h.number), Some(2));
        assert_eq!(catalog.prev_hymn(3).map(|h| h.number), Some(2));
        assert!(catalog.next_hymn(3).is_none());
        assert!(catalog.prev_hymn(1).is_none());
        assert!(catalog.prev_hymn(0).is_none());
    }

    #[test]
    fn test_search_hymns() {
        let catalog = Catalog::from_json(sample_catalog_json()).unwrap();
        let numbers = |hits: Vec<&Hymn>| hits.iter().map(|h| h.number).collect::<Vec<_>>();

        assert_eq!(numbers(catalog.search_hymns("3")), vec![3]);
        assert_eq!(numbers(catalog.search_hymns("ㅅㅂㅅㅈ")), vec![2, 3]);
        assert_eq!(numbers(catalog.search_hymns("ㅎㄴㄴ")), vec![1, 2]);
        assert_eq!(numbers(catalog.search_hymns("ㅅㅇㅇㅊ ㅎㄴㄴ")), vec![2]);
        assert_eq!(numbers(catalog.search_hymns("근원")), vec![1]);
    }

    #[test]
    fn test_search_readings_title_first() {
        let catalog = Catalog::from_json(sample_catalog_json()).unwrap();
        // 1: 제목 "복 있는 사람" -> ㅂ ㅇㄴ ㅅㄹ, 본문에도 있음
        // 2: 제목 "시편 2편" -> ㅅㅍ 2ㅍ
        let hits = catalog.search_readings("ㅅㅍ");
        assert_eq!(hits.iter().map(|r| r.number).collect::<Vec<_>>(), vec![2]);

        let hits = catalog.search_readings("ㅂ ㅇㄴ");
        assert_eq!(hits.iter().map(|r| r.number).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_duplicate_number_is_format_error() {
        let json = r#"{ "hymns": [
            { "number": 1, "title": "a", "words": "" },
            { "number": 1, "title": "b", "words": "" }
        ] }"#;
        let result = Catalog::from_json(json);
        assert!(matches!(result, Err(CatalogError::FormatError(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = Catalog::from_json("{ not json");
        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Catalog::load("/nonexistent/hymnbook/catalog.json");
        assert!(matches!(result, Err(CatalogError::IoError(_))));
    }
}
