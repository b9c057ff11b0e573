//! 주택 난방비와 단열/난방 개선 절감액을 추정하는 정적 도일법 모델.
//! 계산 핵심은 I/O 없는 순수 함수로 두고, 입력 파일·설정·보고서는 얇은 어댑터로 분리한다.

pub mod app;
pub mod config;
pub mod energy;
pub mod envelope;
pub mod i18n;
pub mod input;
pub mod material_db;
pub mod report;
pub mod retrofit;

pub use retrofit::{evaluate, ComparisonResult, EvaluationInput};
