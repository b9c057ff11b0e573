use serde::{Deserialize, Serialize};

/// 건물 형상 입력. 범위 클램프는 호출 측(입력 어댑터) 책임이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingGeometry {
    /// 바닥 면적 [m²] (20~1000)
    pub footprint_area_m2: f64,
    /// 층수 (1~3)
    pub storeys: u32,
    /// 층고 [m] (2.2~3.2)
    pub storey_height_m: f64,
    /// 창면적비 [%] (5~35)
    pub window_ratio_pct: f64,
}

/// 정사각형 평면 근사로 구한 외피 면적과 체적.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeAreas {
    pub footprint_per_storey_m2: f64,
    pub perimeter_m: f64,
    pub gross_wall_area_m2: f64,
    pub window_area_m2: f64,
    pub net_wall_area_m2: f64,
    pub roof_area_m2: f64,
    pub floor_area_m2: f64,
    pub volume_m3: f64,
}

/// 정사각형 평면을 가정해 벽/창/지붕/바닥 면적과 난방 체적을 추정한다.
///
/// 실제 평면 형상은 다루지 않는다. 세장한 평면에서는 둘레가 과소평가된다.
pub fn estimate_areas(input: &BuildingGeometry) -> EnvelopeAreas {
    let storeys = f64::from(input.storeys.max(1));
    let footprint_per_storey = input.footprint_area_m2.max(0.0) / storeys;
    let perimeter = 4.0 * footprint_per_storey.sqrt();
    let gross_wall = perimeter * input.storey_height_m * storeys;
    let window = gross_wall * input.window_ratio_pct / 100.0;

    EnvelopeAreas {
        footprint_per_storey_m2: footprint_per_storey,
        perimeter_m: perimeter,
        gross_wall_area_m2: gross_wall,
        window_area_m2: window,
        net_wall_area_m2: (gross_wall - window).max(0.0),
        roof_area_m2: footprint_per_storey,
        floor_area_m2: footprint_per_storey,
        volume_m3: footprint_per_storey * input.storey_height_m * storeys,
    }
}
