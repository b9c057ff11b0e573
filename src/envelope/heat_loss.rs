use serde::{Deserialize, Serialize};

use super::geometry::EnvelopeAreas;
use super::transmittance::UValues;

/// 환기 열손실 계수 ρ·c_p [Wh/m³K]
pub const AIR_HEAT_CAPACITY_WH_M3K: f64 = 0.33;

/// 부위별 열손실계수 [W/K]. 모든 항목에 열교 보정이 이미 곱해져 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatLossBreakdown {
    pub wall_w_per_k: f64,
    pub window_w_per_k: f64,
    pub roof_w_per_k: f64,
    pub floor_w_per_k: f64,
    pub ventilation_w_per_k: f64,
    /// 벽+창+지붕+바닥
    pub transmission_subtotal_w_per_k: f64,
    pub ventilation_subtotal_w_per_k: f64,
    pub total_w_per_k: f64,
    /// 1 + 열교%/100
    pub bridge_factor: f64,
}

/// 투과 손실과 환기 손실을 합쳐 건물 전체 열손실계수 H를 구한다.
///
/// 열교는 부위별로 모델링하지 않고 전체 손실의 균일한 할증으로 근사한다.
pub fn heat_loss(
    u: &UValues,
    areas: &EnvelopeAreas,
    air_change_rate: f64,
    thermal_bridge_pct: f64,
) -> HeatLossBreakdown {
    let factor = 1.0 + thermal_bridge_pct / 100.0;

    let wall = u.wall * areas.net_wall_area_m2;
    let window = u.window * areas.window_area_m2;
    let roof = u.roof * areas.roof_area_m2;
    let floor = u.floor * areas.floor_area_m2;
    let vent = AIR_HEAT_CAPACITY_WH_M3K * air_change_rate * areas.volume_m3;

    let transmission = wall + window + roof + floor;

    HeatLossBreakdown {
        wall_w_per_k: wall * factor,
        window_w_per_k: window * factor,
        roof_w_per_k: roof * factor,
        floor_w_per_k: floor * factor,
        ventilation_w_per_k: vent * factor,
        transmission_subtotal_w_per_k: transmission * factor,
        ventilation_subtotal_w_per_k: vent * factor,
        total_w_per_k: (transmission + vent) * factor,
        bridge_factor: factor,
    }
}
