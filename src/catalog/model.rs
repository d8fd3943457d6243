//! 찬송가/교독문 레코드

use serde::{Deserialize, Serialize};

use crate::search::Searchable;

/// 찬송가 한 곡
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Hymn {
    /// 장 번호
    pub number: u32,
    pub title: String,
    /// 가사
    pub words: String,
    /// 악보 이미지 이름 (없으면 빈 문자열)
    #[serde(default)]
    pub img: String,
    #[serde(default, rename = "youtubeId")]
    pub youtube_id: u32,
}

/// 교독문 한 편
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Reading {
    pub number: u32,
    pub title: String,
    pub words: String,
}

impl Searchable for Hymn {
    fn number(&self) -> u32 {
        self.number
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn words(&self) -> &str {
        &self.words
    }
}

impl Searchable for Reading {
    fn number(&self) -> u32 {
        self.number
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn words(&self) -> &str {
        &self.words
    }
}
