//! 현재/목표 시나리오 비교, 단독 개선 순위, 투자비와 회수기간 계산.
//!
//! [`evaluate`]가 유일한 진입점이며 입력 스냅샷만으로 결과 전체를 새로 계산한다.

pub mod investment;
pub mod scenario;

use serde::{Deserialize, Serialize};

use crate::energy::{calibrate, Calibration, EnergyPrices};
use crate::envelope::{estimate_areas, BuildingGeometry, EnvelopeAreas};

pub use investment::{
    EconomicsSettings, InvestmentUnitCosts, MeasureEconomics, Payback,
    DEFAULT_PAYBACK_CEILING_YEARS,
};
pub use scenario::{Measure, Scenario, ScenarioOutcome, VariantOutcome};

/// 한 번의 계산에 필요한 입력 전체. 범위는 호출 측에서 이미 클램프되어 있어야 한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationInput {
    pub geometry: BuildingGeometry,
    pub current: Scenario,
    pub target: Scenario,
    /// 난방 도일 [K·day]
    pub hdd: f64,
    pub prices: EnergyPrices,
    /// 사용자가 보고한 현재 연간 난방비
    pub reported_annual_cost: f64,
    pub unit_costs: InvestmentUnitCosts,
    pub economics: EconomicsSettings,
}

/// 비교 결과. TOML 출력 시 표 앞에 값이 오도록 스칼라 필드를 먼저 둔다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// 연간 절감액 (0 이상)
    pub annual_saving: f64,
    pub monthly_saving: f64,
    /// 보정 수요 기준 개선율 [%]
    pub demand_reduction_pct: f64,
    pub total_investment: f64,
    pub overall_npv: f64,
    pub areas: EnvelopeAreas,
    pub calibration: Calibration,
    pub current: ScenarioOutcome,
    pub target: ScenarioOutcome,
    /// 전체 개선(현재→목표)의 회수기간
    pub overall_payback: Payback,
    /// 절감액 내림차순 단독 개선 변형
    pub ranked_variants: Vec<VariantOutcome>,
    /// 벽, 지붕, 바닥, 난방 순서의 항목별 경제성
    pub measures: Vec<MeasureEconomics>,
}

impl ComparisonResult {
    pub fn variant(&self, measure: Measure) -> Option<&VariantOutcome> {
        self.ranked_variants.iter().find(|v| v.measure == measure)
    }

    pub fn measure(&self, measure: Measure) -> Option<&MeasureEconomics> {
        self.measures.iter().find(|m| m.measure == measure)
    }
}

/// 현재/목표 상태를 계산하고 실제 난방비로 보정한 뒤 항목별 절감액과 경제성을 구한다.
pub fn evaluate(input: &EvaluationInput) -> ComparisonResult {
    let areas = estimate_areas(&input.geometry);

    let current_model = scenario::model_scenario(&input.current, &areas, input.hdd);
    let target_model = scenario::model_scenario(&input.target, &areas, input.hdd);

    let calibration = calibrate(
        current_model.demand_kwh,
        input.reported_annual_cost,
        &input.current.heating,
        &input.prices,
    );

    let current = scenario::calibrated_outcome(
        &current_model,
        &input.current.heating,
        &calibration,
        &input.prices,
    );
    let target = scenario::calibrated_outcome(
        &target_model,
        &input.target.heating,
        &calibration,
        &input.prices,
    );

    let annual_saving = (current.annual_cost - target.annual_cost).max(0.0);
    let demand_reduction_pct = if current.demand_kwh > 0.0 {
        (1.0 - target.demand_kwh / current.demand_kwh) * 100.0
    } else {
        0.0
    };

    let ranked_variants = scenario::rank_variants(
        &input.current,
        &input.target,
        current.annual_cost,
        &areas,
        input.hdd,
        &calibration,
        &input.prices,
    );

    let measures: Vec<MeasureEconomics> = Measure::ALL
        .iter()
        .map(|&measure| {
            let invest = investment::investment_for(
                measure,
                &input.current,
                &input.target,
                &areas,
                &input.unit_costs,
            );
            let saving = ranked_variants
                .iter()
                .find(|v| v.measure == measure)
                .map_or(0.0, |v| v.annual_saving);
            investment::measure_economics(measure, invest, saving, &input.economics)
        })
        .collect();

    let total_investment: f64 = measures.iter().map(|m| m.investment).sum();

    ComparisonResult {
        areas,
        calibration,
        current,
        target,
        annual_saving,
        monthly_saving: annual_saving / 12.0,
        demand_reduction_pct,
        ranked_variants,
        measures,
        total_investment,
        overall_payback: investment::payback(
            total_investment,
            annual_saving,
            input.economics.payback_ceiling_years,
        ),
        overall_npv: investment::net_present_value(
            total_investment,
            annual_saving,
            &input.economics,
        ),
    }
}
