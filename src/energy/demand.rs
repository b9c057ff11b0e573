use serde::{Deserialize, Serialize};

use super::heating::{EnergyCarrier, HeatingSystem};

/// 0 나눗셈 방지용 하한
const PRICE_EPSILON: f64 = 1e-6;

/// 에너지 단가 [통화 / kWh]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyPrices {
    pub gas_per_kwh: f64,
    pub electricity_per_kwh: f64,
}

impl EnergyPrices {
    fn for_carrier(&self, carrier: EnergyCarrier) -> f64 {
        let price = match carrier {
            EnergyCarrier::Gas => self.gas_per_kwh,
            EnergyCarrier::Electricity => self.electricity_per_kwh,
        };
        price.max(PRICE_EPSILON)
    }
}

/// 난방 도일법 연간 열 수요 [kWh/년]: `H · HDD · 24 / 1000`
pub fn annual_demand_kwh(h_w_per_k: f64, hdd: f64) -> f64 {
    h_w_per_k * hdd * 24.0 / 1000.0
}

/// 열 수요를 연간 난방비로 환산한다. 가스: Q/η·가스단가, 히트펌프: Q/SCOP·전기단가.
pub fn cost_from_demand(demand_kwh: f64, system: &HeatingSystem, prices: &EnergyPrices) -> f64 {
    let factor = system.conversion_factor().max(PRICE_EPSILON);
    demand_kwh / factor * prices.for_carrier(system.carrier())
}

/// `cost_from_demand`의 역연산. 실제 난방비에서 암시된 열 수요를 구한다.
/// 비용이 0 이하면 0을 돌려준다.
pub fn demand_from_cost(annual_cost: f64, system: &HeatingSystem, prices: &EnergyPrices) -> f64 {
    if annual_cost <= 0.0 {
        return 0.0;
    }
    annual_cost / prices.for_carrier(system.carrier()) * system.conversion_factor()
}
