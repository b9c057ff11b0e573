//! 비교 결과를 사람이 읽는 텍스트 보고서로 만든다.

use std::fmt::Write;

use crate::i18n::{keys, Translator};
use crate::input::Adjustment;
use crate::material_db::{heating_systems, insulation_materials, wall_constructions};
use crate::retrofit::{ComparisonResult, Measure, Payback};

const DASH: &str = "—";

/// 반올림 후 세 자리마다 공백으로 구분한다. 유한하지 않으면 대시.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return DASH.to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

pub fn format_money(value: f64, currency: &str) -> String {
    if !value.is_finite() {
        return DASH.to_string();
    }
    format!("{} {currency}", format_grouped(value))
}

pub fn format_payback(payback: &Payback, tr: &Translator) -> String {
    match payback {
        Payback::Years(y) => format!("{y:.1} {}", tr.t(keys::YEARS)),
        Payback::AtCeiling(y) => format!("{y:.0}+ {}", tr.t(keys::YEARS)),
        Payback::NotApplicable => DASH.to_string(),
    }
}

pub fn measure_label(measure: Measure, tr: &Translator) -> &'static str {
    match measure {
        Measure::Wall => tr.t(keys::MEASURE_WALL),
        Measure::Roof => tr.t(keys::MEASURE_ROOF),
        Measure::Floor => tr.t(keys::MEASURE_FLOOR),
        Measure::Heating => tr.t(keys::MEASURE_HEATING),
    }
}

/// 결과 패널 전체를 텍스트로 렌더링한다.
pub fn render(
    result: &ComparisonResult,
    adjustments: &[Adjustment],
    tr: &Translator,
    currency: &str,
) -> String {
    let mut out = String::new();
    // String에 쓰는 fmt::Write는 실패하지 않는다.
    let _ = write_report(&mut out, result, adjustments, tr, currency);
    out
}

fn write_report(
    out: &mut String,
    r: &ComparisonResult,
    adjustments: &[Adjustment],
    tr: &Translator,
    currency: &str,
) -> std::fmt::Result {
    let yr = tr.t(keys::PER_YEAR);
    let mo = tr.t(keys::PER_MONTH);
    let money = |v: f64| format_money(v, currency);

    writeln!(out, "\n=== {} ===", tr.t(keys::REPORT_TITLE))?;
    for (key, annual) in [
        (keys::KPI_CURRENT, r.current.annual_cost),
        (keys::KPI_TARGET, r.target.annual_cost),
        (keys::KPI_SAVING, r.annual_saving),
    ] {
        writeln!(
            out,
            "{}: {}{yr} ({}{mo})",
            tr.t(key),
            money(annual),
            money(annual / 12.0)
        )?;
    }
    writeln!(
        out,
        "{}: {:.1}% ({} kWh{yr} -> {} kWh{yr})",
        tr.t(keys::KPI_IMPROVEMENT),
        r.demand_reduction_pct,
        format_grouped(r.current.demand_kwh),
        format_grouped(r.target.demand_kwh)
    )?;
    if r.calibration.clamped {
        writeln!(out, "! {}", tr.t(keys::CALIBRATION_CLAMPED))?;
    }

    writeln!(out, "\n-- {} --", tr.t(keys::RANKING_HEADING))?;
    for v in &r.ranked_variants {
        writeln!(
            out,
            "  {}: {}{yr}",
            measure_label(v.measure, tr),
            money(v.annual_saving)
        )?;
    }
    writeln!(out, "  ({})", tr.t(keys::RANKING_HELP))?;

    writeln!(out, "\n-- {} --", tr.t(keys::INVEST_HEADING))?;
    for m in &r.measures {
        writeln!(
            out,
            "  {}: {} -> {}: {} (NPV {})",
            measure_label(m.measure, tr),
            money(m.investment),
            tr.t(keys::INVEST_PAYBACK),
            format_payback(&m.payback, tr),
            money(m.npv)
        )?;
    }
    writeln!(
        out,
        "  {}: {} -> {}: {} (NPV {})",
        tr.t(keys::INVEST_TOTAL),
        money(r.total_investment),
        tr.t(keys::INVEST_PAYBACK),
        format_payback(&r.overall_payback, tr),
        money(r.overall_npv)
    )?;

    if !adjustments.is_empty() {
        writeln!(out, "\n-- {} --", tr.t(keys::ADJUST_HEADING))?;
        for a in adjustments {
            writeln!(out, "  {}: {} -> {}", a.field, a.original, a.applied)?;
        }
    }

    let a = &r.areas;
    let (wall, window, roof, floor) = (
        tr.t(keys::PART_WALL),
        tr.t(keys::PART_WINDOW),
        tr.t(keys::PART_ROOF),
        tr.t(keys::PART_FLOOR),
    );
    writeln!(out, "\n-- {} --", tr.t(keys::TECH_HEADING))?;
    writeln!(
        out,
        "  {}: {wall} {:.0} m² | {window} {:.0} m² | {roof} {:.0} m² | {floor} {:.0} m² | {} {:.0} m³",
        tr.t(keys::TECH_AREAS),
        a.net_wall_area_m2,
        a.window_area_m2,
        a.roof_area_m2,
        a.floor_area_m2,
        tr.t(keys::PART_VOLUME),
        a.volume_m3
    )?;
    for (key, s) in [(keys::TECH_U_CURRENT, &r.current), (keys::TECH_U_TARGET, &r.target)] {
        let u = &s.u_values;
        writeln!(
            out,
            "  {}: {wall} {:.2} | {roof} {:.2} | {floor} {:.2} | {window} {:.2} (W/m²K)",
            tr.t(key),
            u.wall,
            u.roof,
            u.floor,
            u.window
        )?;
    }
    for (key, s) in [(keys::TECH_H_CURRENT, &r.current), (keys::TECH_H_TARGET, &r.target)] {
        let h = &s.heat_loss;
        writeln!(
            out,
            "  {}: {} {:.0} + {} {:.0} = {:.0}",
            tr.t(key),
            tr.t(keys::TECH_TRANSMISSION),
            h.transmission_subtotal_w_per_k,
            tr.t(keys::TECH_VENTILATION),
            h.ventilation_subtotal_w_per_k,
            h.total_w_per_k
        )?;
    }
    writeln!(out, "  {}: {:.2}", tr.t(keys::TECH_SCALE), r.calibration.scale)?;
    Ok(())
}

/// 입력 파일에 쓸 수 있는 코드 목록.
pub fn render_catalog(tr: &Translator) -> String {
    let mut out = String::new();
    let _ = write_catalog(&mut out, tr);
    out
}

fn write_catalog(out: &mut String, tr: &Translator) -> std::fmt::Result {
    writeln!(out, "{}:", tr.t(keys::LIST_INSULATION))?;
    for m in insulation_materials() {
        writeln!(out, "  {:<10} {:<12} λ = {:.3} W/mK", m.code, m.name, m.lambda_w_mk)?;
    }
    writeln!(out, "{}:", tr.t(keys::LIST_WALLS))?;
    for w in wall_constructions() {
        writeln!(out, "  {:<10} {:<16} U0 = {:.2} W/m²K", w.code, w.name, w.baseline_u)?;
    }
    writeln!(out, "{}:", tr.t(keys::LIST_HEATING))?;
    for h in heating_systems() {
        match h.efficiency {
            Some(eff) => writeln!(out, "  {:<10} {:<22} η = {eff:.2}", h.code, h.name)?,
            None => writeln!(out, "  {:<10} {:<22} SCOP", h.code, h.name)?,
        }
    }
    Ok(())
}
