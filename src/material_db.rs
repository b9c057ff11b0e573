//! 단열재 열전도율, 기준(무단열) 열관류율, 난방기기 효율 테이블.
//! 값은 오래된 헝가리 주택의 전형적인 근사치이며 에너지 인증 용도가 아니다.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 실내 표면 열저항 [m²K/W]
pub const R_SURFACE_INTERIOR: f64 = 0.13;
/// 실외 표면 열저항 [m²K/W]
pub const R_SURFACE_EXTERIOR: f64 = 0.04;

/// 무단열 다락/지붕 슬래브 [W/m²K]
pub const BASELINE_U_ROOF: f64 = 1.60;
/// 지면 접촉 바닥 [W/m²K]
pub const BASELINE_U_FLOOR: f64 = 1.10;
/// 노후/혼합 창호 [W/m²K]. 모델에서 조정 대상이 아니다.
pub const BASELINE_U_WINDOW: f64 = 2.60;

/// 히트펌프 SCOP 허용 범위.
pub const SCOP_RANGE: (f64, f64) = (2.2, 5.5);

/// 단열재 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsulationMaterial {
    Eps,
    Rockwool,
    Xps,
}

/// 외벽 구조 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallConstruction {
    Brick,
    Adobe,
    Concrete,
}

/// 난방 방식. 히트펌프의 SCOP은 사용자 입력이라 테이블에 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingKind {
    #[serde(alias = "gas_old")]
    OldGasBoiler,
    #[serde(alias = "gas_cond")]
    CondensingGasBoiler,
    #[serde(alias = "hp")]
    HeatPump,
}

/// 테이블에 없는 코드로 조회한 경우.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {table} key `{key}`")]
pub struct UnknownKey {
    pub table: &'static str,
    pub key: String,
}

#[derive(Debug)]
pub struct InsulationData {
    pub material: InsulationMaterial,
    pub code: &'static str,
    pub name: &'static str,
    /// 열전도율 λ [W/mK]
    pub lambda_w_mk: f64,
}

#[derive(Debug)]
pub struct WallData {
    pub construction: WallConstruction,
    pub code: &'static str,
    pub name: &'static str,
    /// 무단열 상태 열관류율 [W/m²K]
    pub baseline_u: f64,
}

#[derive(Debug)]
pub struct HeatingData {
    pub kind: HeatingKind,
    pub code: &'static str,
    pub name: &'static str,
    /// 가스 기기 효율(0~1). 히트펌프는 `None`이며 SCOP을 따로 받는다.
    pub efficiency: Option<f64>,
}

pub fn insulation_materials() -> &'static [InsulationData] {
    INSULATION
}

pub fn wall_constructions() -> &'static [WallData] {
    WALLS
}

pub fn heating_systems() -> &'static [HeatingData] {
    HEATING
}

pub fn find_insulation(code: &str) -> Option<&'static InsulationData> {
    INSULATION
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

pub fn find_wall(code: &str) -> Option<&'static WallData> {
    WALLS
        .iter()
        .find(|w| w.code.eq_ignore_ascii_case(code) || w.name.eq_ignore_ascii_case(code))
}

/// 코드(`gas_old`, `gas_cond`, `hp`) 외에 serde 표기(`old_gas_boiler` 등)도 받는다.
pub fn find_heating(code: &str) -> Option<&'static HeatingData> {
    let normalized = code.trim().replace('-', "_");
    HEATING.iter().find(|h| {
        h.code.eq_ignore_ascii_case(&normalized)
            || h.name.eq_ignore_ascii_case(code.trim())
            || kind_key(h.kind).eq_ignore_ascii_case(&normalized)
    })
}

fn kind_key(kind: HeatingKind) -> &'static str {
    match kind {
        HeatingKind::OldGasBoiler => "old_gas_boiler",
        HeatingKind::CondensingGasBoiler => "condensing_gas_boiler",
        HeatingKind::HeatPump => "heat_pump",
    }
}

impl InsulationMaterial {
    fn data(self) -> &'static InsulationData {
        // 테이블은 enum의 모든 값을 포함한다.
        match self {
            InsulationMaterial::Eps => &INSULATION[0],
            InsulationMaterial::Rockwool => &INSULATION[1],
            InsulationMaterial::Xps => &INSULATION[2],
        }
    }

    /// 열전도율 λ [W/mK]
    pub fn lambda(self) -> f64 {
        self.data().lambda_w_mk
    }

    pub fn code(self) -> &'static str {
        self.data().code
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }
}

impl WallConstruction {
    fn data(self) -> &'static WallData {
        match self {
            WallConstruction::Brick => &WALLS[0],
            WallConstruction::Adobe => &WALLS[1],
            WallConstruction::Concrete => &WALLS[2],
        }
    }

    pub fn baseline_u(self) -> f64 {
        self.data().baseline_u
    }

    pub fn code(self) -> &'static str {
        self.data().code
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }
}

impl HeatingKind {
    fn data(self) -> &'static HeatingData {
        match self {
            HeatingKind::OldGasBoiler => &HEATING[0],
            HeatingKind::CondensingGasBoiler => &HEATING[1],
            HeatingKind::HeatPump => &HEATING[2],
        }
    }

    pub fn efficiency(self) -> Option<f64> {
        self.data().efficiency
    }

    pub fn code(self) -> &'static str {
        self.data().code
    }

    pub fn name(self) -> &'static str {
        self.data().name
    }
}

impl FromStr for InsulationMaterial {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_insulation(s.trim())
            .map(|m| m.material)
            .ok_or_else(|| UnknownKey {
                table: "insulation material",
                key: s.to_string(),
            })
    }
}

impl FromStr for WallConstruction {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_wall(s.trim())
            .map(|w| w.construction)
            .ok_or_else(|| UnknownKey {
                table: "wall construction",
                key: s.to_string(),
            })
    }
}

impl FromStr for HeatingKind {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        find_heating(s).map(|h| h.kind).ok_or_else(|| UnknownKey {
            table: "heating system",
            key: s.to_string(),
        })
    }
}

const INSULATION: &[InsulationData] = &[
    InsulationData {
        material: InsulationMaterial::Eps,
        code: "eps",
        name: "EPS",
        lambda_w_mk: 0.039,
    },
    InsulationData {
        material: InsulationMaterial::Rockwool,
        code: "rockwool",
        name: "Rockwool",
        lambda_w_mk: 0.037,
    },
    InsulationData {
        material: InsulationMaterial::Xps,
        code: "xps",
        name: "XPS",
        lambda_w_mk: 0.034,
    },
];

const WALLS: &[WallData] = &[
    WallData {
        construction: WallConstruction::Brick,
        code: "brick",
        name: "Solid brick",
        baseline_u: 1.25,
    },
    WallData {
        construction: WallConstruction::Adobe,
        code: "adobe",
        name: "Adobe",
        baseline_u: 1.05,
    },
    WallData {
        construction: WallConstruction::Concrete,
        code: "concrete",
        name: "Concrete panel",
        baseline_u: 1.70,
    },
];

const HEATING: &[HeatingData] = &[
    HeatingData {
        kind: HeatingKind::OldGasBoiler,
        code: "gas_old",
        name: "Old gas boiler",
        efficiency: Some(0.75),
    },
    HeatingData {
        kind: HeatingKind::CondensingGasBoiler,
        code: "gas_cond",
        name: "Condensing gas boiler",
        efficiency: Some(0.92),
    },
    HeatingData {
        kind: HeatingKind::HeatPump,
        code: "hp",
        name: "Heat pump",
        efficiency: None,
    },
];
