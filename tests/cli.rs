//! CLI 요청 처리(템플릿, 코드 목록, 텍스트/TOML 보고서) 회귀 테스트.
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use retrofit_advisor::app::{run, Cli};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("retrofit_advisor_{}_{name}", std::process::id()))
}

fn run_args(args: &[&str]) -> String {
    let cli = Cli::try_parse_from(args).expect("valid arguments");
    let mut out = Vec::new();
    run(&cli, &mut out).expect("run");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn text_report_in_english() {
    let cfg = temp_path("text_cfg.toml");
    let text = run_args(&[
        "retrofit_advisor",
        "--config",
        cfg.to_str().unwrap(),
        "--lang",
        "en",
    ]);
    assert!(text.contains("=== Result ==="), "{text}");
    assert!(text.contains("Investment + payback"));
    assert!(text.contains("Calibration factor: 0.30"));
    assert!(text.contains(" Ft/yr"));
    let _ = fs::remove_file(cfg);
}

#[test]
fn toml_report_lists_adjustments() {
    let cfg = temp_path("toml_cfg.toml");
    let project = temp_path("toml_project.toml");
    fs::write(&project, "[building]\nstoreys = 9\n").unwrap();

    let doc = run_args(&[
        "retrofit_advisor",
        "--config",
        cfg.to_str().unwrap(),
        "--input",
        project.to_str().unwrap(),
        "--format",
        "toml",
    ]);
    let value: toml::Value = toml::from_str(&doc).expect("toml output");
    let adjustments = value["adjustments"].as_array().expect("adjustments");
    assert_eq!(adjustments.len(), 1);
    assert_eq!(adjustments[0]["field"].as_str(), Some("building.storeys"));
    assert_eq!(adjustments[0]["applied"].as_float(), Some(3.0));
    let result = &value["result"];
    assert!(result["annual_saving"].as_float().unwrap() > 0.0);
    assert_eq!(result["ranked_variants"].as_array().unwrap().len(), 4);

    let _ = fs::remove_file(cfg);
    let _ = fs::remove_file(project);
}

#[test]
fn template_round_trips_through_the_cli() {
    let cfg = temp_path("tpl_cfg.toml");
    let project = temp_path("tpl_project.toml");
    run_args(&[
        "retrofit_advisor",
        "--write-template",
        project.to_str().unwrap(),
    ]);
    let written = fs::read_to_string(&project).expect("template written");
    assert!(written.contains("[building]"));

    let text = run_args(&[
        "retrofit_advisor",
        "--config",
        cfg.to_str().unwrap(),
        "--input",
        project.to_str().unwrap(),
        "--lang",
        "hu",
    ]);
    assert!(text.contains("=== Eredmény ==="));
    assert!(!text.contains("Korrigált bemenetek"));

    let _ = fs::remove_file(cfg);
    let _ = fs::remove_file(project);
}

#[test]
fn unknown_material_fails_loudly() {
    let cfg = temp_path("bad_cfg.toml");
    let project = temp_path("bad_project.toml");
    fs::write(&project, "[wall]\nmaterial = \"cork\"\n").unwrap();

    let cli = Cli::try_parse_from([
        "retrofit_advisor",
        "--config",
        cfg.to_str().unwrap(),
        "--input",
        project.to_str().unwrap(),
    ])
    .unwrap();
    let err = run(&cli, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("cork"), "{err}");

    let _ = fs::remove_file(cfg);
    let _ = fs::remove_file(project);
}

#[test]
fn list_prints_catalog() {
    let cfg = temp_path("list_cfg.toml");
    let text = run_args(&[
        "retrofit_advisor",
        "--config",
        cfg.to_str().unwrap(),
        "--list",
        "--lang",
        "en",
    ]);
    assert!(text.contains("Insulation materials:"));
    assert!(text.contains("rockwool"));
    assert!(text.contains("gas_cond"));
    let _ = fs::remove_file(cfg);
}
