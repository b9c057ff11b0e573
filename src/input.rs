//! 프로젝트 파일(TOML)을 읽어 계산 입력으로 바꾸는 어댑터.
//!
//! 숫자가 아니거나 범위를 벗어난 값은 여기서 기본값/경계값으로 바뀌고,
//! 바뀐 항목은 경고 로그와 함께 [`Adjustment`] 목록으로 남는다.
//! 재료·난방 코드는 닫힌 enum이라 알 수 없는 코드는 파싱 단계에서 거부된다.

use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::energy::{EnergyPrices, HeatingSystem};
use crate::envelope::{BuildingGeometry, EnvelopeSpec, Insulation};
use crate::material_db::{HeatingKind, InsulationMaterial, WallConstruction, SCOP_RANGE};
use crate::retrofit::{EconomicsSettings, EvaluationInput, InvestmentUnitCosts, Scenario};

/// 입력 허용 범위 (최소, 최대).
pub mod limits {
    pub const FOOTPRINT_M2: (f64, f64) = (20.0, 1000.0);
    pub const STOREYS: (i64, i64) = (1, 3);
    pub const STOREY_HEIGHT_M: (f64, f64) = (2.2, 3.2);
    pub const WINDOW_RATIO_PCT: (f64, f64) = (5.0, 35.0);
    pub const AIR_CHANGE_RATE: (f64, f64) = (0.2, 1.2);
    pub const THERMAL_BRIDGE_PCT: (f64, f64) = (0.0, 25.0);
    pub const HDD: (f64, f64) = (1800.0, 4500.0);
    pub const WALL_INSULATION_CM: (f64, f64) = (0.0, 30.0);
    pub const ROOF_INSULATION_CM: (f64, f64) = (0.0, 60.0);
    pub const FLOOR_INSULATION_CM: (f64, f64) = (0.0, 20.0);
    pub const NON_NEGATIVE: (f64, f64) = (0.0, f64::MAX);
}

/// 입력 파일 처리 오류.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read project file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid project file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot render project template: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 클램프/대체된 입력 항목.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Adjustment {
    pub field: &'static str,
    pub original: f64,
    pub applied: f64,
}

/// 클램프를 거친 계산 입력과 조정 내역.
#[derive(Debug, Clone)]
pub struct PreparedInput {
    pub evaluation: EvaluationInput,
    pub adjustments: Vec<Adjustment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildingSection {
    pub footprint_m2: f64,
    pub storeys: i64,
    pub storey_height_m: f64,
    pub window_ratio_pct: f64,
    #[serde(deserialize_with = "de_key")]
    pub wall_construction: WallConstruction,
    pub air_change_rate: f64,
    pub thermal_bridge_pct: f64,
}

impl Default for BuildingSection {
    fn default() -> Self {
        Self {
            footprint_m2: 100.0,
            storeys: 1,
            storey_height_m: 2.6,
            window_ratio_pct: 18.0,
            wall_construction: WallConstruction::Brick,
            air_change_rate: 0.6,
            thermal_bridge_pct: 10.0,
        }
    }
}

/// 한 부위의 단열. 재료는 현재/목표 공통이다.
///
/// 부위마다 기본값이 달라서 파일에서 읽을 때는 `InsulationOverride`를 거친다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsulationSection {
    pub material: InsulationMaterial,
    pub current_cm: f64,
    pub target_cm: f64,
}

impl InsulationSection {
    pub fn wall_default() -> Self {
        Self {
            material: InsulationMaterial::Eps,
            current_cm: 0.0,
            target_cm: 15.0,
        }
    }

    pub fn roof_default() -> Self {
        Self {
            material: InsulationMaterial::Rockwool,
            current_cm: 0.0,
            target_cm: 25.0,
        }
    }

    pub fn floor_default() -> Self {
        Self {
            material: InsulationMaterial::Xps,
            current_cm: 0.0,
            target_cm: 10.0,
        }
    }
}

/// 파일에 적힌 항목만 담는 단열 표. 빠진 항목은 부위 기본값을 유지한다.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InsulationOverride {
    #[serde(default, deserialize_with = "de_opt_key")]
    material: Option<InsulationMaterial>,
    current_cm: Option<f64>,
    target_cm: Option<f64>,
}

impl InsulationOverride {
    fn apply(self, base: InsulationSection) -> InsulationSection {
        InsulationSection {
            material: self.material.unwrap_or(base.material),
            current_cm: self.current_cm.unwrap_or(base.current_cm),
            target_cm: self.target_cm.unwrap_or(base.target_cm),
        }
    }
}

fn de_wall<'de, D: Deserializer<'de>>(deserializer: D) -> Result<InsulationSection, D::Error> {
    Ok(InsulationOverride::deserialize(deserializer)?.apply(InsulationSection::wall_default()))
}

fn de_roof<'de, D: Deserializer<'de>>(deserializer: D) -> Result<InsulationSection, D::Error> {
    Ok(InsulationOverride::deserialize(deserializer)?.apply(InsulationSection::roof_default()))
}

fn de_floor<'de, D: Deserializer<'de>>(deserializer: D) -> Result<InsulationSection, D::Error> {
    Ok(InsulationOverride::deserialize(deserializer)?.apply(InsulationSection::floor_default()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeatingSection {
    #[serde(deserialize_with = "de_key")]
    pub current: HeatingKind,
    pub current_scop: f64,
    #[serde(deserialize_with = "de_key")]
    pub target: HeatingKind,
    pub target_scop: f64,
}

impl Default for HeatingSection {
    fn default() -> Self {
        Self {
            current: HeatingKind::OldGasBoiler,
            current_scop: 3.2,
            target: HeatingKind::HeatPump,
            target_scop: 3.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClimateSection {
    /// 난방 도일 [K·day]
    pub hdd: f64,
}

impl Default for ClimateSection {
    fn default() -> Self {
        Self { hdd: 3000.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PriceSection {
    pub gas_per_kwh: f64,
    pub electricity_per_kwh: f64,
}

impl Default for PriceSection {
    fn default() -> Self {
        Self {
            gas_per_kwh: 40.0,
            electricity_per_kwh: 70.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BillSection {
    /// 현재 실제 연간 난방비
    pub annual_cost: f64,
}

impl Default for BillSection {
    fn default() -> Self {
        Self {
            annual_cost: 600_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnitCostSection {
    pub wall_per_m2_10cm: f64,
    pub roof_per_m2_10cm: f64,
    pub floor_per_m2_10cm: f64,
    pub heating_replacement: f64,
}

impl Default for UnitCostSection {
    fn default() -> Self {
        Self {
            wall_per_m2_10cm: 18_000.0,
            roof_per_m2_10cm: 12_000.0,
            floor_per_m2_10cm: 15_000.0,
            heating_replacement: 3_500_000.0,
        }
    }
}

/// 프로젝트 파일 전체. 빠진 항목은 기본 예시 주택 값으로 채운다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectInput {
    pub building: BuildingSection,
    #[serde(default = "InsulationSection::wall_default", deserialize_with = "de_wall")]
    pub wall: InsulationSection,
    #[serde(default = "InsulationSection::roof_default", deserialize_with = "de_roof")]
    pub roof: InsulationSection,
    #[serde(default = "InsulationSection::floor_default", deserialize_with = "de_floor")]
    pub floor: InsulationSection,
    pub heating: HeatingSection,
    pub climate: ClimateSection,
    pub prices: PriceSection,
    pub bill: BillSection,
    pub unit_costs: UnitCostSection,
}

impl Default for ProjectInput {
    fn default() -> Self {
        Self {
            building: BuildingSection::default(),
            wall: InsulationSection::wall_default(),
            roof: InsulationSection::roof_default(),
            floor: InsulationSection::floor_default(),
            heating: HeatingSection::default(),
            climate: ClimateSection::default(),
            prices: PriceSection::default(),
            bill: BillSection::default(),
            unit_costs: UnitCostSection::default(),
        }
    }
}

fn de_key<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

fn de_opt_key<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| raw.parse().map_err(serde::de::Error::custom))
        .transpose()
}

/// 클램프 결과를 기록하는 도우미.
struct Clamper {
    adjustments: Vec<Adjustment>,
}

impl Clamper {
    fn new() -> Self {
        Self {
            adjustments: Vec::new(),
        }
    }

    fn value(&mut self, field: &'static str, value: f64, fallback: f64, range: (f64, f64)) -> f64 {
        let base = if value.is_finite() { value } else { fallback };
        let applied = base.clamp(range.0, range.1);
        // NaN은 자기 자신과 같지 않으므로 여기서 함께 걸린다.
        if applied != value {
            warn!(field, original = value, applied, "input value adjusted");
            self.adjustments.push(Adjustment {
                field,
                original: value,
                applied,
            });
        }
        applied
    }

    fn count(&mut self, field: &'static str, value: i64, range: (i64, i64)) -> u32 {
        let applied = value.clamp(range.0, range.1);
        if applied != value {
            warn!(field, original = value, applied, "input value adjusted");
            self.adjustments.push(Adjustment {
                field,
                original: value as f64,
                applied: applied as f64,
            });
        }
        // 범위 상한이 작아 u32로 항상 들어간다.
        applied as u32
    }
}

impl ProjectInput {
    pub fn from_toml_str(src: &str) -> Result<Self, InputError> {
        Ok(toml::from_str(src)?)
    }

    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 기본값으로 채운 프로젝트 파일 예시를 만든다.
    pub fn template() -> Result<String, InputError> {
        Ok(toml::to_string_pretty(&ProjectInput::default())?)
    }

    /// 범위를 정규화해 계산 입력을 만든다.
    pub fn prepare(&self, economics: EconomicsSettings) -> PreparedInput {
        use limits::*;

        let d = ProjectInput::default();
        let mut c = Clamper::new();

        let b = &self.building;
        let geometry = BuildingGeometry {
            footprint_area_m2: c.value(
                "building.footprint_m2",
                b.footprint_m2,
                d.building.footprint_m2,
                FOOTPRINT_M2,
            ),
            storeys: c.count("building.storeys", b.storeys, STOREYS),
            storey_height_m: c.value(
                "building.storey_height_m",
                b.storey_height_m,
                d.building.storey_height_m,
                STOREY_HEIGHT_M,
            ),
            window_ratio_pct: c.value(
                "building.window_ratio_pct",
                b.window_ratio_pct,
                d.building.window_ratio_pct,
                WINDOW_RATIO_PCT,
            ),
        };
        let air_change_rate = c.value(
            "building.air_change_rate",
            b.air_change_rate,
            d.building.air_change_rate,
            AIR_CHANGE_RATE,
        );
        let thermal_bridge_pct = c.value(
            "building.thermal_bridge_pct",
            b.thermal_bridge_pct,
            d.building.thermal_bridge_pct,
            THERMAL_BRIDGE_PCT,
        );

        let wall_now = c.value("wall.current_cm", self.wall.current_cm, 0.0, WALL_INSULATION_CM);
        let wall_goal = c.value("wall.target_cm", self.wall.target_cm, 0.0, WALL_INSULATION_CM);
        let roof_now = c.value("roof.current_cm", self.roof.current_cm, 0.0, ROOF_INSULATION_CM);
        let roof_goal = c.value("roof.target_cm", self.roof.target_cm, 0.0, ROOF_INSULATION_CM);
        let floor_now =
            c.value("floor.current_cm", self.floor.current_cm, 0.0, FLOOR_INSULATION_CM);
        let floor_goal =
            c.value("floor.target_cm", self.floor.target_cm, 0.0, FLOOR_INSULATION_CM);

        let envelope = |wall: f64, roof: f64, floor: f64| EnvelopeSpec {
            wall_construction: b.wall_construction,
            wall: Insulation::new(wall, self.wall.material),
            roof: Insulation::new(roof, self.roof.material),
            floor: Insulation::new(floor, self.floor.material),
        };

        let h = &self.heating;
        let current_heating = HeatingSystem::new(
            h.current,
            c.value("heating.current_scop", h.current_scop, d.heating.current_scop, SCOP_RANGE),
        );
        let target_heating = HeatingSystem::new(
            h.target,
            c.value("heating.target_scop", h.target_scop, d.heating.target_scop, SCOP_RANGE),
        );

        let current = Scenario {
            envelope: envelope(wall_now, roof_now, floor_now),
            air_change_rate,
            thermal_bridge_pct,
            heating: current_heating,
        };
        let target = Scenario {
            envelope: envelope(wall_goal, roof_goal, floor_goal),
            heating: target_heating,
            ..current
        };

        let hdd = c.value("climate.hdd", self.climate.hdd, d.climate.hdd, HDD);
        let prices = EnergyPrices {
            gas_per_kwh: c.value(
                "prices.gas_per_kwh",
                self.prices.gas_per_kwh,
                d.prices.gas_per_kwh,
                NON_NEGATIVE,
            ),
            electricity_per_kwh: c.value(
                "prices.electricity_per_kwh",
                self.prices.electricity_per_kwh,
                d.prices.electricity_per_kwh,
                NON_NEGATIVE,
            ),
        };
        let reported_annual_cost =
            c.value("bill.annual_cost", self.bill.annual_cost, 0.0, NON_NEGATIVE);

        let u = &self.unit_costs;
        let unit_costs = InvestmentUnitCosts {
            wall_per_m2_10cm: c.value(
                "unit_costs.wall_per_m2_10cm",
                u.wall_per_m2_10cm,
                0.0,
                NON_NEGATIVE,
            ),
            roof_per_m2_10cm: c.value(
                "unit_costs.roof_per_m2_10cm",
                u.roof_per_m2_10cm,
                0.0,
                NON_NEGATIVE,
            ),
            floor_per_m2_10cm: c.value(
                "unit_costs.floor_per_m2_10cm",
                u.floor_per_m2_10cm,
                0.0,
                NON_NEGATIVE,
            ),
            heating_replacement: c.value(
                "unit_costs.heating_replacement",
                u.heating_replacement,
                0.0,
                NON_NEGATIVE,
            ),
        };

        PreparedInput {
            evaluation: EvaluationInput {
                geometry,
                current,
                target,
                hdd,
                prices,
                reported_annual_cost,
                unit_costs,
                economics,
            },
            adjustments: c.adjustments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_reference_house() {
        let input = ProjectInput::from_toml_str("").expect("empty project");
        assert_eq!(input, ProjectInput::default());
        let prepared = input.prepare(EconomicsSettings::default());
        assert!(prepared.adjustments.is_empty());
        assert_eq!(prepared.evaluation.geometry.storeys, 1);
        assert_eq!(prepared.evaluation.target.envelope.roof.thickness_cm, 25.0);
    }

    #[test]
    fn template_parses_back() {
        let text = ProjectInput::template().expect("template");
        let parsed = ProjectInput::from_toml_str(&text).expect("parse template");
        assert_eq!(parsed, ProjectInput::default());
    }

    #[test]
    fn keys_are_case_insensitive() {
        let input = ProjectInput::from_toml_str(
            r#"
            [building]
            wall_construction = "Adobe"

            [wall]
            material = "ROCKWOOL"
            target_cm = 12

            [heating]
            current = "gas_cond"
            target = "heat-pump"
            "#,
        )
        .expect("parse");
        assert_eq!(input.building.wall_construction, WallConstruction::Adobe);
        assert_eq!(input.wall.material, InsulationMaterial::Rockwool);
        assert_eq!(input.heating.current, HeatingKind::CondensingGasBoiler);
        assert_eq!(input.heating.target, HeatingKind::HeatPump);
    }

    #[test]
    fn unknown_material_is_rejected() {
        let err = ProjectInput::from_toml_str("[roof]\nmaterial = \"straw\"\n").unwrap_err();
        assert!(matches!(err, InputError::Parse(_)));
        assert!(err.to_string().contains("straw"), "{err}");
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(ProjectInput::from_toml_str("[climate]\nhdd = 3000\nsolar = 1\n").is_err());
        assert!(ProjectInput::from_toml_str("[floor]\ntarget_cm = 5\ncolour = \"red\"\n").is_err());
    }

    #[test]
    fn partial_insulation_table_keeps_surface_defaults() {
        let input = ProjectInput::from_toml_str("[wall]\ntarget_cm = 20\n").expect("parse");
        assert_eq!(input.wall.material, InsulationMaterial::Eps);
        assert_eq!(input.wall.current_cm, 0.0);
        assert_eq!(input.wall.target_cm, 20.0);

        let input = ProjectInput::from_toml_str(
            "[roof]\ncurrent_cm = 5\n\n[floor]\nmaterial = \"eps\"\n",
        )
        .expect("parse");
        assert_eq!(input.roof.material, InsulationMaterial::Rockwool);
        assert_eq!(input.roof.current_cm, 5.0);
        assert_eq!(input.roof.target_cm, 25.0);
        assert_eq!(input.floor.material, InsulationMaterial::Eps);
        assert_eq!(input.floor.target_cm, 10.0);
    }

    #[test]
    fn out_of_range_values_are_clamped_and_reported() {
        let input = ProjectInput::from_toml_str(
            r#"
            [building]
            footprint_m2 = 5
            storeys = 7
            window_ratio_pct = 50

            [wall]
            material = "eps"
            target_cm = 45

            [climate]
            hdd = nan
            "#,
        )
        .expect("parse");
        let prepared = input.prepare(EconomicsSettings::default());
        let ev = &prepared.evaluation;
        assert_eq!(ev.geometry.footprint_area_m2, 20.0);
        assert_eq!(ev.geometry.storeys, 3);
        assert_eq!(ev.geometry.window_ratio_pct, 35.0);
        assert_eq!(ev.target.envelope.wall.thickness_cm, 30.0);
        assert_eq!(ev.hdd, 3000.0);

        let fields: Vec<&str> = prepared.adjustments.iter().map(|a| a.field).collect();
        assert_eq!(
            fields,
            vec![
                "building.footprint_m2",
                "building.storeys",
                "building.window_ratio_pct",
                "wall.target_cm",
                "climate.hdd",
            ]
        );
    }
}
