//! 연간 에너지 수요, 난방비 환산, 실제 난방비 기반 보정 모듈 모음.

pub mod calibration;
pub mod demand;
pub mod heating;

pub use calibration::{calibrate, Calibration};
pub use demand::{annual_demand_kwh, cost_from_demand, demand_from_cost, EnergyPrices};
pub use heating::{EnergyCarrier, HeatingSystem};
