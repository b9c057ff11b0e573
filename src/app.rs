use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{self, ConfigError};
use crate::i18n::{self, Translator};
use crate::input::{Adjustment, InputError, ProjectInput};
use crate::report;
use crate::retrofit::{self, ComparisonResult};

/// 결과 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Toml,
}

/// 난방비와 단열/난방 개선 절감액 추정기.
#[derive(Debug, Parser)]
#[command(name = "retrofit_advisor", version, about)]
pub struct Cli {
    /// 프로젝트 파일(TOML). 생략하면 기본 예시 주택으로 계산한다.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// 설정 파일 경로
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
    /// 보고서 언어: auto, hu, en
    #[arg(short = 'L', long)]
    pub lang: Option<String>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// 기본 프로젝트 파일을 써 넣고 종료한다.
    #[arg(long, value_name = "FILE")]
    pub write_template: Option<PathBuf>,
    /// 사용 가능한 재료/구조/난방 코드를 출력하고 종료한다.
    #[arg(long)]
    pub list: bool,
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("cannot serialize result: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Serialize)]
struct TomlReport<'a> {
    adjustments: &'a [Adjustment],
    result: &'a ComparisonResult,
}

/// CLI 요청 하나를 처리하고 결과를 `out`에 쓴다.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), AppError> {
    if let Some(path) = &cli.write_template {
        fs::write(path, ProjectInput::template()?)?;
        info!(path = %path.display(), "wrote project template");
        return Ok(());
    }

    let cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new(&lang);

    if cli.list {
        write!(out, "{}", report::render_catalog(&tr))?;
        return Ok(());
    }

    let project = match &cli.input {
        Some(path) => ProjectInput::load(path)?,
        None => ProjectInput::default(),
    };
    let prepared = project.prepare(cfg.economics_settings());
    let result = retrofit::evaluate(&prepared.evaluation);

    debug!(
        scale = result.calibration.scale,
        model_kwh = result.calibration.model_demand_kwh,
        implied_kwh = result.calibration.implied_demand_kwh,
        "calibration"
    );
    if result.calibration.clamped {
        warn!(
            scale = result.calibration.scale,
            "calibration factor clamped; reported cost and model disagree strongly"
        );
    }

    match cli.format {
        OutputFormat::Text => {
            let text = report::render(&result, &prepared.adjustments, &tr, &cfg.currency);
            write!(out, "{text}")?;
        }
        OutputFormat::Toml => {
            let doc = toml::to_string_pretty(&TomlReport {
                adjustments: &prepared.adjustments,
                result: &result,
            })?;
            write!(out, "{doc}")?;
        }
    }
    Ok(())
}
