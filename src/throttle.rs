//! 노출 쿨다운 관리
//!
//! 전역 쿨다운(종류 무관)과 종류별 최소 간격을 함께 적용합니다.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::config::HymnbookConfig;

/// 노출 슬롯 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// 앱 시작 시 노출
    AppOpen,
    /// 화면 전환 시 전면 노출
    Interstitial,
}

/// 쿨다운 판정기
#[derive(Debug, Clone)]
pub struct Throttle {
    last_shown: HashMap<SlotKind, Instant>,
    /// 어떤 종류든 최근 노출 후 이 시간 동안 모두 금지
    global_cooldown: Duration,
    per_kind_cooldown: HashMap<SlotKind, Duration>,
    /// 악보/본문 상세 화면 등에서 노출 억제
    suppressed: bool,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(180),
            Duration::from_secs(90),
            Duration::from_secs(120),
        )
    }
}

impl Throttle {
    pub fn new(global: Duration, app_open: Duration, interstitial: Duration) -> Self {
        let mut per_kind_cooldown = HashMap::new();
        per_kind_cooldown.insert(SlotKind::AppOpen, app_open);
        per_kind_cooldown.insert(SlotKind::Interstitial, interstitial);
        Self {
            last_shown: HashMap::new(),
            global_cooldown: global,
            per_kind_cooldown,
            suppressed: false,
        }
    }

    /// 설정값으로 생성
    pub fn from_config(config: &HymnbookConfig) -> Self {
        Self::new(
            Duration::from_secs(config.global_cooldown_secs),
            Duration::from_secs(config.app_open_cooldown_secs),
            Duration::from_secs(config.interstitial_cooldown_secs),
        )
    }

    pub fn global_cooldown(&self) -> Duration {
        self.global_cooldown
    }

    /// 종류 무관 쿨다운 변경
    pub fn set_global_cooldown(&mut self, cooldown: Duration) {
        self.global_cooldown = cooldown;
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// 노출 억제 켜기/끄기
    pub fn set_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
    }

    /// 종류별 최소 간격 변경
    pub fn set_cooldown(&mut self, kind: SlotKind, cooldown: Duration) {
        self.per_kind_cooldown.insert(kind, cooldown);
    }

    pub fn cooldown(&self, kind: SlotKind) -> Option<Duration> {
        self.per_kind_cooldown.get(&kind).copied()
    }

    /// 주어진 시각에 노출 가능한지 판정
    pub fn can_show_at(&self, kind: SlotKind, now: Instant) -> bool {
        if self.suppressed {
            return false;
        }

        // 1) 전역 쿨다운
        if let Some(last_any) = self.last_shown.values().max() {
            if now.saturating_duration_since(*last_any) < self.global_cooldown {
                return false;
            }
        }

        // 2) 종류별 쿨다운
        if let (Some(last_this), Some(min_gap)) =
            (self.last_shown.get(&kind), self.per_kind_cooldown.get(&kind))
        {
            if now.saturating_duration_since(*last_this) < *min_gap {
                return false;
            }
        }

        true
    }

    /// 주어진 시각에 노출했다고 기록
    pub fn mark_shown_at(&mut self, kind: SlotKind, now: Instant) {
        log::debug!("{:?} 노출 기록", kind);
        self.last_shown.insert(kind, now);
    }

    pub fn can_show(&self, kind: SlotKind) -> bool {
        self.can_show_at(kind, Instant::now())
    }

    pub fn mark_shown(&mut self, kind: SlotKind) {
        self.mark_shown_at(kind, Instant::now());
    }
}

/// 여러 스레드에서 공유하는 쿨다운 판정기
#[derive(Debug, Default)]
pub struct SharedThrottle {
    inner: Mutex<Throttle>,
}

impl SharedThrottle {
    pub fn new(throttle: Throttle) -> Self {
        Self {
            inner: Mutex::new(throttle),
        }
    }

    /// 판정과 기록을 한 번에 수행 (노출 가능하면 기록 후 true)
    pub fn try_acquire(&self, kind: SlotKind) -> bool {
        let mut throttle = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        if !throttle.can_show_at(kind, now) {
            return false;
        }
        throttle.mark_shown_at(kind, now);
        true
    }

    pub fn can_show(&self, kind: SlotKind) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .can_show(kind)
    }

    pub fn set_suppressed(&self, suppressed: bool) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set_suppressed(suppressed);
    }
}
