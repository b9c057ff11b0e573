use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::retrofit::{EconomicsSettings, DEFAULT_PAYBACK_CEILING_YEARS};

/// 순현재가치 계산 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicsConfig {
    /// 할인율(소수)
    pub discount_rate: f64,
    /// 분석 기간 [년]
    pub horizon_years: u32,
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        let d = EconomicsSettings::default();
        Self {
            discount_rate: d.discount_rate,
            horizon_years: d.horizon_years,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// "auto", "hu", "en"
    pub language: String,
    /// 보고서에 붙는 통화 표기
    pub currency: String,
    pub payback_ceiling_years: f64,
    pub economics: EconomicsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            currency: "Ft".into(),
            payback_ceiling_years: DEFAULT_PAYBACK_CEILING_YEARS,
            economics: EconomicsConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "wrote default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 계산 모델에 넘길 경제성 조건.
    pub fn economics_settings(&self) -> EconomicsSettings {
        EconomicsSettings {
            discount_rate: self.economics.discount_rate,
            horizon_years: self.economics.horizon_years,
            payback_ceiling_years: self.payback_ceiling_years,
        }
    }
}
