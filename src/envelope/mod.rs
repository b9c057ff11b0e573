//! 건물 외피 관련 계산 모듈 모음.
//! 정사각형 평면 근사 면적, 단열 후 열관류율, 열손실계수 분해로 구성한다.

pub mod geometry;
pub mod heat_loss;
pub mod transmittance;

pub use geometry::{estimate_areas, BuildingGeometry, EnvelopeAreas};
pub use heat_loss::{heat_loss, HeatLossBreakdown};
pub use transmittance::{insulated_u_value, EnvelopeSpec, Insulation, UValues};
