use serde::{Deserialize, Serialize};

use crate::material_db::HeatingKind;

/// 에너지 공급원. 가격 선택에 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyCarrier {
    Gas,
    Electricity,
}

/// 선택된 난방 방식. `scop`은 히트펌프일 때만 의미가 있다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatingSystem {
    pub kind: HeatingKind,
    pub scop: f64,
}

impl HeatingSystem {
    pub fn new(kind: HeatingKind, scop: f64) -> Self {
        Self { kind, scop }
    }

    pub fn carrier(&self) -> EnergyCarrier {
        match self.kind {
            HeatingKind::OldGasBoiler | HeatingKind::CondensingGasBoiler => EnergyCarrier::Gas,
            HeatingKind::HeatPump => EnergyCarrier::Electricity,
        }
    }

    /// 열 수요를 구입 에너지로 바꾸는 계수. 가스 기기는 효율, 히트펌프는 SCOP.
    pub fn conversion_factor(&self) -> f64 {
        match self.kind.efficiency() {
            Some(eff) => eff,
            None => self.scop,
        }
    }

    /// 난방 방식 자체가 바뀌었는지(SCOP 변경만은 교체로 보지 않는다).
    pub fn is_replaced_by(&self, other: &HeatingSystem) -> bool {
        self.kind != other.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_systems_use_table_efficiency() {
        let old = HeatingSystem::new(HeatingKind::OldGasBoiler, 4.0);
        let cond = HeatingSystem::new(HeatingKind::CondensingGasBoiler, 4.0);
        assert_eq!(old.conversion_factor(), 0.75);
        assert_eq!(cond.conversion_factor(), 0.92);
        assert_eq!(old.carrier(), EnergyCarrier::Gas);
    }

    #[test]
    fn heat_pump_uses_scop() {
        let hp = HeatingSystem::new(HeatingKind::HeatPump, 3.6);
        assert_eq!(hp.conversion_factor(), 3.6);
        assert_eq!(hp.carrier(), EnergyCarrier::Electricity);
    }

    #[test]
    fn scop_change_is_not_a_replacement() {
        let a = HeatingSystem::new(HeatingKind::HeatPump, 3.2);
        let b = HeatingSystem::new(HeatingKind::HeatPump, 4.5);
        assert!(!a.is_replaced_by(&b));
        assert!(a.is_replaced_by(&HeatingSystem::new(HeatingKind::OldGasBoiler, 3.2)));
    }
}
