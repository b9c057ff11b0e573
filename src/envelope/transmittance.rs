use serde::{Deserialize, Serialize};

use crate::material_db::{
    InsulationMaterial, WallConstruction, BASELINE_U_FLOOR, BASELINE_U_ROOF, BASELINE_U_WINDOW,
    R_SURFACE_EXTERIOR, R_SURFACE_INTERIOR,
};

/// 역산한 구조체 열저항의 하한 [m²K/W]
const MIN_STRUCTURE_R: f64 = 0.001;

/// 한 부위에 시공된 단열층.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insulation {
    /// 두께 [cm]
    pub thickness_cm: f64,
    pub material: InsulationMaterial,
}

impl Insulation {
    pub fn new(thickness_cm: f64, material: InsulationMaterial) -> Self {
        Self {
            thickness_cm,
            material,
        }
    }
}

/// 한 시나리오의 외피 구성. 창호는 고정값이라 필드가 없다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeSpec {
    pub wall_construction: WallConstruction,
    pub wall: Insulation,
    pub roof: Insulation,
    pub floor: Insulation,
}

/// 부위별 열관류율 [W/m²K]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UValues {
    pub wall: f64,
    pub roof: f64,
    pub floor: f64,
    pub window: f64,
}

impl EnvelopeSpec {
    /// 부위별 단열 후 열관류율을 계산한다.
    pub fn u_values(&self) -> UValues {
        UValues {
            wall: insulated_u_value(self.wall_construction.baseline_u(), self.wall),
            roof: insulated_u_value(BASELINE_U_ROOF, self.roof),
            floor: insulated_u_value(BASELINE_U_FLOOR, self.floor),
            window: BASELINE_U_WINDOW,
        }
    }
}

/// 무단열 U값에서 구조체 열저항을 역산한 뒤 단열재 열저항을 직렬로 더한다.
///
/// `U0 = 1 / (Rsi + R_struct + Rse)` 이므로 `R_struct = 1/U0 - Rsi - Rse`.
/// 두께가 0이면 부동소수 오차 없이 기준값을 그대로 돌려준다.
pub fn insulated_u_value(baseline_u: f64, insulation: Insulation) -> f64 {
    if insulation.thickness_cm <= 0.0 {
        return baseline_u;
    }
    let r_structure =
        (1.0 / baseline_u - R_SURFACE_INTERIOR - R_SURFACE_EXTERIOR).max(MIN_STRUCTURE_R);
    let r_insulation = (insulation.thickness_cm / 100.0) / insulation.material.lambda();
    1.0 / (R_SURFACE_INTERIOR + r_structure + r_insulation + R_SURFACE_EXTERIOR)
}
