use serde::{Deserialize, Serialize};

use super::demand::{demand_from_cost, EnergyPrices};
use super::heating::HeatingSystem;

/// 보정 계수 허용 범위
pub const SCALE_MIN: f64 = 0.3;
pub const SCALE_MAX: f64 = 3.0;

const DEMAND_EPSILON: f64 = 1e-6;

/// 물리 모델 수요를 사용자의 실제 난방비에 맞추는 보정 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// 모든 시나리오 수요에 곱하는 계수
    pub scale: f64,
    /// 모델이 예측한 현재 수요 [kWh/년]
    pub model_demand_kwh: f64,
    /// 실제 난방비에서 역산한 수요 [kWh/년]
    pub implied_demand_kwh: f64,
    /// true면 계산된 비율이 범위 밖이라 경계값으로 클램프됨을 의미한다.
    pub clamped: bool,
}

impl Calibration {
    /// 보정하지 않는 항등 보정.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            model_demand_kwh: 0.0,
            implied_demand_kwh: 0.0,
            clamped: false,
        }
    }

    pub fn apply(&self, demand_kwh: f64) -> f64 {
        demand_kwh * self.scale
    }
}

/// 보고된 현재 난방비를 수요로 역산하고 모델 수요와의 비율을 [0.3, 3.0]으로 제한한다.
///
/// 모델 수요가 0에 가까우면 계수 1을 쓴다. 보고 비용이 0 이하이면 하한 0.3에 걸린다.
pub fn calibrate(
    model_demand_kwh: f64,
    reported_annual_cost: f64,
    current_heating: &HeatingSystem,
    prices: &EnergyPrices,
) -> Calibration {
    let implied = demand_from_cost(reported_annual_cost, current_heating, prices);
    if !model_demand_kwh.is_finite() || model_demand_kwh < DEMAND_EPSILON {
        return Calibration {
            implied_demand_kwh: implied,
            model_demand_kwh,
            ..Calibration::identity()
        };
    }
    let ratio = implied / model_demand_kwh;
    let scale = ratio.clamp(SCALE_MIN, SCALE_MAX);
    Calibration {
        scale,
        model_demand_kwh,
        implied_demand_kwh: implied,
        clamped: scale != ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::demand::cost_from_demand;
    use crate::material_db::HeatingKind;
    use approx::assert_relative_eq;

    const PRICES: EnergyPrices = EnergyPrices {
        gas_per_kwh: 40.0,
        electricity_per_kwh: 70.0,
    };

    fn old_boiler() -> HeatingSystem {
        HeatingSystem::new(HeatingKind::OldGasBoiler, 3.2)
    }

    #[test]
    fn matching_bill_gives_unit_scale() {
        let model = 28_000.0;
        let bill = cost_from_demand(model, &old_boiler(), &PRICES);
        let cal = calibrate(model, bill, &old_boiler(), &PRICES);
        assert_relative_eq!(cal.scale, 1.0, epsilon = 1e-12);
        assert!(!cal.clamped);
        assert_relative_eq!(cal.apply(model), model, max_relative = 1e-12);
    }

    #[test]
    fn higher_bill_scales_up() {
        let model = 20_000.0;
        let bill = cost_from_demand(30_000.0, &old_boiler(), &PRICES);
        let cal = calibrate(model, bill, &old_boiler(), &PRICES);
        assert_relative_eq!(cal.scale, 1.5, epsilon = 1e-12);
        assert_relative_eq!(cal.implied_demand_kwh, 30_000.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_bill_hits_lower_clamp() {
        let cal = calibrate(20_000.0, 0.0, &old_boiler(), &PRICES);
        assert_eq!(cal.scale, SCALE_MIN);
        assert!(cal.clamped);
    }

    #[test]
    fn huge_bill_hits_upper_clamp() {
        let cal = calibrate(1_000.0, 50_000_000.0, &old_boiler(), &PRICES);
        assert_eq!(cal.scale, SCALE_MAX);
        assert!(cal.clamped);
    }

    #[test]
    fn zero_model_demand_keeps_unit_scale() {
        let cal = calibrate(0.0, 600_000.0, &old_boiler(), &PRICES);
        assert_eq!(cal.scale, 1.0);
        assert!(!cal.clamped);
    }
}
