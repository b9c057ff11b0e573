use serde::{Deserialize, Serialize};

use crate::energy::{annual_demand_kwh, cost_from_demand, Calibration, EnergyPrices, HeatingSystem};
use crate::envelope::{heat_loss, EnvelopeAreas, EnvelopeSpec, HeatLossBreakdown, UValues};

/// 단독으로 비교하는 개선 항목. 선언 순서가 동점 시 순위가 된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Wall,
    Roof,
    Floor,
    Heating,
}

impl Measure {
    pub const ALL: [Measure; 4] = [Measure::Wall, Measure::Roof, Measure::Floor, Measure::Heating];
}

/// 외피, 환기, 열교, 난방 방식을 묶은 한 상태(현재 또는 목표).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub envelope: EnvelopeSpec,
    /// 환기 횟수 [1/h]
    pub air_change_rate: f64,
    /// 열교 할증 [%]
    pub thermal_bridge_pct: f64,
    pub heating: HeatingSystem,
}

impl Scenario {
    /// 현재 상태에서 한 항목만 목표값으로 바꾼 변형을 만든다.
    pub fn with_measure_from(&self, target: &Scenario, measure: Measure) -> Scenario {
        let mut variant = *self;
        match measure {
            Measure::Wall => variant.envelope.wall = target.envelope.wall,
            Measure::Roof => variant.envelope.roof = target.envelope.roof,
            Measure::Floor => variant.envelope.floor = target.envelope.floor,
            Measure::Heating => variant.heating = target.heating,
        }
        variant
    }
}

/// 보정 전 물리 모델 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelOutcome {
    /// 보정 전 연간 열 수요 [kWh/년]
    pub demand_kwh: f64,
    pub u_values: UValues,
    pub heat_loss: HeatLossBreakdown,
}

/// 보정 계수를 반영한 시나리오 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub model_demand_kwh: f64,
    pub demand_kwh: f64,
    pub annual_cost: f64,
    pub u_values: UValues,
    pub heat_loss: HeatLossBreakdown,
}

/// 단독 개선 변형의 보정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantOutcome {
    pub measure: Measure,
    pub demand_kwh: f64,
    pub annual_cost: f64,
    /// 현재 대비 연간 절감액 (0 이상)
    pub annual_saving: f64,
}

/// 공유 형상·기후 조건에서 한 시나리오의 열손실과 연간 수요를 계산한다.
pub fn model_scenario(scenario: &Scenario, areas: &EnvelopeAreas, hdd: f64) -> ModelOutcome {
    let u_values = scenario.envelope.u_values();
    let loss = heat_loss(
        &u_values,
        areas,
        scenario.air_change_rate,
        scenario.thermal_bridge_pct,
    );
    ModelOutcome {
        demand_kwh: annual_demand_kwh(loss.total_w_per_k, hdd),
        u_values,
        heat_loss: loss,
    }
}

/// 모델 결과에 보정 계수를 곱하고 난방 방식에 맞춰 비용을 구한다.
pub fn calibrated_outcome(
    model: &ModelOutcome,
    heating: &HeatingSystem,
    calibration: &Calibration,
    prices: &EnergyPrices,
) -> ScenarioOutcome {
    let demand = calibration.apply(model.demand_kwh);
    ScenarioOutcome {
        model_demand_kwh: model.demand_kwh,
        demand_kwh: demand,
        annual_cost: cost_from_demand(demand, heating, prices),
        u_values: model.u_values,
        heat_loss: model.heat_loss,
    }
}

/// 네 가지 단독 개선 변형을 절감액 내림차순으로 정렬해 돌려준다.
///
/// 안정 정렬이므로 동점은 벽, 지붕, 바닥, 난방 순서를 유지한다.
pub fn rank_variants(
    current: &Scenario,
    target: &Scenario,
    current_cost: f64,
    areas: &EnvelopeAreas,
    hdd: f64,
    calibration: &Calibration,
    prices: &EnergyPrices,
) -> Vec<VariantOutcome> {
    let mut variants: Vec<VariantOutcome> = Measure::ALL
        .iter()
        .map(|&measure| {
            let variant = current.with_measure_from(target, measure);
            let model = model_scenario(&variant, areas, hdd);
            let outcome = calibrated_outcome(&model, &variant.heating, calibration, prices);
            VariantOutcome {
                measure,
                demand_kwh: outcome.demand_kwh,
                annual_cost: outcome.annual_cost,
                annual_saving: (current_cost - outcome.annual_cost).max(0.0),
            }
        })
        .collect();
    variants.sort_by(|a, b| b.annual_saving.total_cmp(&a.annual_saving));
    variants
}
