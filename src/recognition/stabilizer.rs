//! 프레임 단위 예측 레이블 안정화
//!
//! 분류기는 프레임마다 레이블을 하나씩 예측합니다.
//! 최근 N개의 예측이 모두 같고 쿨다운이 지났을 때만 레이블을 확정합니다.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// 안정화 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StabilizerConfig {
    /// 확정에 필요한 연속 동일 예측 수
    pub history_len: usize,
    /// 확정 후 다음 확정까지 최소 대기 시간
    pub cooldown: Duration,
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            history_len: 5,
            cooldown: Duration::from_secs(3),
        }
    }
}

/// 레이블 안정화기
#[derive(Debug, Clone)]
pub struct LabelStabilizer {
    config: StabilizerConfig,
    history: VecDeque<String>,
    last_emit: Option<Instant>,
}

impl LabelStabilizer {
    /// 새 안정화기 생성 (history_len 0은 1로 보정)
    pub fn new(mut config: StabilizerConfig) -> Self {
        config.history_len = config.history_len.max(1);
        Self {
            history: VecDeque::with_capacity(config.history_len),
            config,
            last_emit: None,
        }
    }

    /// 기본 설정으로 생성
    pub fn with_defaults() -> Self {
        Self::new(StabilizerConfig::default())
    }

    pub fn config(&self) -> &StabilizerConfig {
        &self.config
    }

    /// 프레임 예측 하나를 기록하고, 확정되면 레이블 반환
    pub fn push(&mut self, label: &str, now: Instant) -> Option<String> {
        if self.history.len() == self.config.history_len {
            self.history.pop_front();
        }
        self.history.push_back(label.to_string());

        if !self.is_stable() || !self.cooled_down(now) {
            return None;
        }

        let label = self.history.pop_back()?;
        self.history.clear();
        self.last_emit = Some(now);
        log::debug!("레이블 확정: {}", label);
        Some(label)
    }

    /// 히스토리만 비움 (손이 화면에서 사라졌을 때)
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// 히스토리와 쿨다운 모두 초기화
    pub fn reset(&mut self) {
        self.history.clear();
        self.last_emit = None;
    }

    fn is_stable(&self) -> bool {
        self.history.len() == self.config.history_len
            && self.history.iter().all(|l| Some(l) == self.history.front())
    }

    fn cooled_down(&self, now: Instant) -> bool {
        match self.last_emit {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.config.cooldown,
        }
    }
}

impl Default for LabelStabilizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
