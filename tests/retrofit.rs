//! 기본 예시 주택과 변형 입력으로 전체 비교 흐름을 검증한다.
use approx::assert_relative_eq;
use retrofit_advisor::energy::cost_from_demand;
use retrofit_advisor::input::ProjectInput;
use retrofit_advisor::material_db::HeatingKind;
use retrofit_advisor::retrofit::{evaluate, EconomicsSettings, EvaluationInput, Measure, Payback};

fn prepared(project: &ProjectInput) -> EvaluationInput {
    project.prepare(EconomicsSettings::default()).evaluation
}

#[test]
fn reference_house_ranking_and_investment() {
    let res = evaluate(&prepared(&ProjectInput::default()));

    // 물리 모델이 실제 난방비보다 훨씬 크게 나와 하한에 걸린다.
    assert_eq!(res.calibration.scale, 0.3);
    assert!(res.calibration.clamped);

    let order: Vec<Measure> = res.ranked_variants.iter().map(|v| v.measure).collect();
    assert_eq!(
        order,
        vec![Measure::Heating, Measure::Roof, Measure::Wall, Measure::Floor]
    );

    assert_relative_eq!(
        res.measure(Measure::Wall).unwrap().investment,
        18_000.0 * 1.5 * 85.28,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        res.measure(Measure::Roof).unwrap().investment,
        3_000_000.0,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        res.measure(Measure::Floor).unwrap().investment,
        1_500_000.0,
        max_relative = 1e-9
    );
    assert_eq!(res.measure(Measure::Heating).unwrap().investment, 3_500_000.0);
    assert_relative_eq!(res.total_investment, 2_302_560.0 + 8_000_000.0, max_relative = 1e-9);

    for m in &res.measures {
        let years = m.payback.years().expect("every measure pays back");
        let saving = res.variant(m.measure).unwrap().annual_saving;
        assert_relative_eq!(years, m.investment / saving, max_relative = 1e-9);
    }
    assert!(matches!(res.overall_payback, Payback::Years(_)));
}

#[test]
fn saving_matches_cost_difference() {
    let res = evaluate(&prepared(&ProjectInput::default()));
    assert!(res.target.annual_cost <= res.current.annual_cost);
    assert_relative_eq!(
        res.annual_saving,
        res.current.annual_cost - res.target.annual_cost,
        max_relative = 1e-12
    );
    assert_relative_eq!(res.monthly_saving * 12.0, res.annual_saving, max_relative = 1e-12);
    let expected_pct = (1.0 - res.target.demand_kwh / res.current.demand_kwh) * 100.0;
    assert_relative_eq!(res.demand_reduction_pct, expected_pct, max_relative = 1e-12);
    assert!(res.demand_reduction_pct > 0.0 && res.demand_reduction_pct < 100.0);
}

#[test]
fn bill_equal_to_model_cost_leaves_model_untouched() {
    let mut project = ProjectInput::default();
    let first = evaluate(&prepared(&project));
    let input = prepared(&project);
    let model_cost = cost_from_demand(
        first.calibration.model_demand_kwh,
        &input.current.heating,
        &input.prices,
    );

    project.bill.annual_cost = model_cost;
    let res = evaluate(&prepared(&project));
    assert_relative_eq!(res.calibration.scale, 1.0, max_relative = 1e-9);
    assert!(!res.calibration.clamped);
    assert_relative_eq!(res.current.demand_kwh, res.current.model_demand_kwh, max_relative = 1e-9);
    assert_relative_eq!(res.target.demand_kwh, res.target.model_demand_kwh, max_relative = 1e-9);
    assert_relative_eq!(res.current.annual_cost, model_cost, max_relative = 1e-9);
}

#[test]
fn unclamped_calibration_reproduces_the_bill() {
    let mut project = ProjectInput::default();
    project.bill.annual_cost = 1_500_000.0;
    let res = evaluate(&prepared(&project));
    assert!(!res.calibration.clamped);
    assert_relative_eq!(res.current.annual_cost, 1_500_000.0, max_relative = 1e-9);
    let ratio = res.target.demand_kwh / res.target.model_demand_kwh;
    assert_relative_eq!(ratio, res.calibration.scale, max_relative = 1e-12);
}

#[test]
fn worse_target_reports_zero_saving() {
    let mut project = ProjectInput::default();
    project.wall.current_cm = 20.0;
    project.wall.target_cm = 5.0;
    project.roof.current_cm = 30.0;
    project.roof.target_cm = 0.0;
    project.floor.current_cm = 10.0;
    project.floor.target_cm = 10.0;
    project.heating.current = HeatingKind::CondensingGasBoiler;
    project.heating.target = HeatingKind::OldGasBoiler;

    let res = evaluate(&prepared(&project));
    assert!(res.target.annual_cost > res.current.annual_cost);
    assert_eq!(res.annual_saving, 0.0);
    assert_eq!(res.overall_payback, Payback::NotApplicable);
    for v in &res.ranked_variants {
        assert_eq!(v.annual_saving, 0.0, "{:?}", v.measure);
    }
    // 두께를 줄이는 것은 투자비가 없다.
    for measure in [Measure::Wall, Measure::Roof, Measure::Floor] {
        let m = res.measure(measure).unwrap();
        assert_eq!(m.investment, 0.0);
        assert_eq!(m.payback, Payback::NotApplicable);
    }
    // 방식이 바뀌면 교체 비용은 잡히지만 절감이 없어 회수 불가.
    let heating = res.measure(Measure::Heating).unwrap();
    assert_eq!(heating.investment, 3_500_000.0);
    assert_eq!(heating.payback, Payback::NotApplicable);
    assert!(heating.npv < 0.0);
}

#[test]
fn scop_upgrade_alone_costs_nothing_to_replace() {
    let mut project = ProjectInput::default();
    project.heating.current = HeatingKind::HeatPump;
    project.heating.current_scop = 2.8;
    project.heating.target = HeatingKind::HeatPump;
    project.heating.target_scop = 4.2;

    let res = evaluate(&prepared(&project));
    let heating = res.measure(Measure::Heating).unwrap();
    assert_eq!(heating.investment, 0.0);
    assert!(heating.annual_saving > 0.0);
    assert_eq!(heating.payback, Payback::NotApplicable);
}

#[test]
fn single_changed_dimension_matches_full_saving() {
    let mut project = ProjectInput::default();
    project.wall.target_cm = 0.0;
    project.floor.target_cm = 0.0;
    project.heating.target = HeatingKind::OldGasBoiler;
    project.heating.target_scop = project.heating.current_scop;

    let res = evaluate(&prepared(&project));
    let roof = res.variant(Measure::Roof).unwrap();
    assert_eq!(res.ranked_variants[0].measure, Measure::Roof);
    assert_relative_eq!(roof.annual_saving, res.annual_saving, max_relative = 1e-9);

    let others: f64 = res
        .ranked_variants
        .iter()
        .filter(|v| v.measure != Measure::Roof)
        .map(|v| v.annual_saving)
        .sum();
    assert!(others.abs() < 1e-6, "others={others}");
}

#[test]
fn outputs_stay_non_negative_across_ranges() {
    let mut project = ProjectInput::default();
    for footprint in [20.0, 150.0, 1000.0] {
        for storeys in [1, 2, 3] {
            for window in [5.0, 35.0] {
                for hdd in [1800.0, 4500.0] {
                    project.building.footprint_m2 = footprint;
                    project.building.storeys = storeys;
                    project.building.window_ratio_pct = window;
                    project.climate.hdd = hdd;
                    let res = evaluate(&prepared(&project));
                    let a = &res.areas;
                    assert!(a.net_wall_area_m2 >= 0.0 && a.window_area_m2 >= 0.0);
                    for s in [&res.current, &res.target] {
                        let h = &s.heat_loss;
                        for v in [
                            h.wall_w_per_k,
                            h.window_w_per_k,
                            h.roof_w_per_k,
                            h.floor_w_per_k,
                            h.ventilation_w_per_k,
                        ] {
                            assert!(v >= 0.0);
                        }
                        assert!(s.demand_kwh >= 0.0 && s.annual_cost >= 0.0);
                    }
                    assert!(res.annual_saving >= 0.0);
                    assert!(res.measures.iter().all(|m| m.investment >= 0.0));
                }
            }
        }
    }
}

#[test]
fn colder_climate_raises_model_demand() {
    let mut project = ProjectInput::default();
    project.climate.hdd = 2000.0;
    let mild = evaluate(&prepared(&project));
    project.climate.hdd = 4000.0;
    let cold = evaluate(&prepared(&project));
    assert_relative_eq!(
        cold.current.model_demand_kwh,
        2.0 * mild.current.model_demand_kwh,
        max_relative = 1e-12
    );
}
