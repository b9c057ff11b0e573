use serde::{Deserialize, Serialize};

use super::scenario::{Measure, Scenario};
use crate::envelope::EnvelopeAreas;

/// 표시용 회수기간 상한 [년]
pub const DEFAULT_PAYBACK_CEILING_YEARS: f64 = 300.0;

/// 항목별 시공 단가.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentUnitCosts {
    /// 벽 단열 [통화/m², 10 cm 기준]
    pub wall_per_m2_10cm: f64,
    pub roof_per_m2_10cm: f64,
    pub floor_per_m2_10cm: f64,
    /// 난방기기 교체 일시금 [통화]
    pub heating_replacement: f64,
}

/// 순현재가치 계산 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicsSettings {
    /// 할인율(소수, 0.03 = 3%)
    pub discount_rate: f64,
    /// 분석 기간 [년]
    pub horizon_years: u32,
    pub payback_ceiling_years: f64,
}

impl Default for EconomicsSettings {
    fn default() -> Self {
        Self {
            discount_rate: 0.03,
            horizon_years: 20,
            payback_ceiling_years: DEFAULT_PAYBACK_CEILING_YEARS,
        }
    }
}

/// 단순 회수기간.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "years")]
pub enum Payback {
    Years(f64),
    /// 상한을 넘어 상한값으로 표시
    AtCeiling(f64),
    /// 투자비 또는 절감액이 0 이하
    NotApplicable,
}

impl Payback {
    pub fn years(&self) -> Option<f64> {
        match *self {
            Payback::Years(y) | Payback::AtCeiling(y) => Some(y),
            Payback::NotApplicable => None,
        }
    }
}

/// 항목별 투자비와 경제성.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasureEconomics {
    pub measure: Measure,
    pub investment: f64,
    pub annual_saving: f64,
    /// 순현재가치(NPV)
    pub npv: f64,
    pub payback: Payback,
}

/// 두께 증가분(cm, 음수는 0)과 면적, 10 cm 기준 단가로 투자비를 추정한다.
/// 난방은 방식이 실제로 바뀔 때만 교체 비용을 잡는다.
pub fn investment_for(
    measure: Measure,
    current: &Scenario,
    target: &Scenario,
    areas: &EnvelopeAreas,
    unit_costs: &InvestmentUnitCosts,
) -> f64 {
    let layer = |unit_cost: f64, now_cm: f64, target_cm: f64, area: f64| {
        let delta_cm = (target_cm - now_cm).max(0.0);
        unit_cost * (delta_cm / 10.0) * area
    };
    let (now, goal) = (&current.envelope, &target.envelope);
    match measure {
        Measure::Wall => layer(
            unit_costs.wall_per_m2_10cm,
            now.wall.thickness_cm,
            goal.wall.thickness_cm,
            areas.net_wall_area_m2,
        ),
        Measure::Roof => layer(
            unit_costs.roof_per_m2_10cm,
            now.roof.thickness_cm,
            goal.roof.thickness_cm,
            areas.roof_area_m2,
        ),
        Measure::Floor => layer(
            unit_costs.floor_per_m2_10cm,
            now.floor.thickness_cm,
            goal.floor.thickness_cm,
            areas.floor_area_m2,
        ),
        Measure::Heating => {
            if current.heating.is_replaced_by(&target.heating) {
                unit_costs.heating_replacement
            } else {
                0.0
            }
        }
    }
}

/// 투자비 ÷ 연간 절감액. 둘 중 하나라도 0 이하이면 해당 없음.
pub fn payback(investment: f64, annual_saving: f64, ceiling_years: f64) -> Payback {
    if !investment.is_finite() || investment <= 0.0 {
        return Payback::NotApplicable;
    }
    if !annual_saving.is_finite() || annual_saving <= 0.0 {
        return Payback::NotApplicable;
    }
    let years = investment / annual_saving;
    if !years.is_finite() || years > ceiling_years {
        Payback::AtCeiling(ceiling_years)
    } else {
        Payback::Years(years)
    }
}

/// 분석 기간 동안 일정한 절감액의 순현재가치.
pub fn net_present_value(investment: f64, annual_saving: f64, settings: &EconomicsSettings) -> f64 {
    let mut npv = -investment;
    for year in 1..=settings.horizon_years {
        let df = (1.0 + settings.discount_rate).powi(year as i32);
        npv += annual_saving / df;
    }
    npv
}

pub fn measure_economics(
    measure: Measure,
    investment: f64,
    annual_saving: f64,
    settings: &EconomicsSettings,
) -> MeasureEconomics {
    MeasureEconomics {
        measure,
        investment,
        annual_saving,
        npv: net_present_value(investment, annual_saving, settings),
        payback: payback(investment, annual_saving, settings.payback_ceiling_years),
    }
}
