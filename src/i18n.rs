use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const REPORT_TITLE: &str = "report.title";
    pub const KPI_CURRENT: &str = "kpi.current";
    pub const KPI_TARGET: &str = "kpi.target";
    pub const KPI_SAVING: &str = "kpi.saving";
    pub const KPI_IMPROVEMENT: &str = "kpi.improvement";
    pub const PER_YEAR: &str = "unit.per_year";
    pub const PER_MONTH: &str = "unit.per_month";
    pub const YEARS: &str = "unit.years";

    pub const RANKING_HEADING: &str = "ranking.heading";
    pub const RANKING_HELP: &str = "ranking.help";

    pub const INVEST_HEADING: &str = "invest.heading";
    pub const INVEST_PAYBACK: &str = "invest.payback";
    pub const INVEST_TOTAL: &str = "invest.total";

    pub const ADJUST_HEADING: &str = "adjust.heading";
    pub const CALIBRATION_CLAMPED: &str = "calibration.clamped";

    pub const TECH_HEADING: &str = "tech.heading";
    pub const TECH_AREAS: &str = "tech.areas";
    pub const TECH_U_CURRENT: &str = "tech.u_current";
    pub const TECH_U_TARGET: &str = "tech.u_target";
    pub const TECH_H_CURRENT: &str = "tech.h_current";
    pub const TECH_H_TARGET: &str = "tech.h_target";
    pub const TECH_SCALE: &str = "tech.scale";
    pub const TECH_TRANSMISSION: &str = "tech.transmission";
    pub const TECH_VENTILATION: &str = "tech.ventilation";

    pub const PART_WALL: &str = "part.wall";
    pub const PART_WINDOW: &str = "part.window";
    pub const PART_ROOF: &str = "part.roof";
    pub const PART_FLOOR: &str = "part.floor";
    pub const PART_VOLUME: &str = "part.volume";

    pub const MEASURE_WALL: &str = "measure.wall";
    pub const MEASURE_ROOF: &str = "measure.roof";
    pub const MEASURE_FLOOR: &str = "measure.floor";
    pub const MEASURE_HEATING: &str = "measure.heating";

    pub const LIST_INSULATION: &str = "list.insulation";
    pub const LIST_WALLS: &str = "list.walls";
    pub const LIST_HEATING: &str = "list.heating";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Hu,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("en") {
            Language::En
        } else {
            Language::Hu
        }
    }
}

/// 내장 문자열 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(hu/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 hu로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    /// 번역을 가져온다. 영어 번역이 없으면 헝가리어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| hu(key)),
            Language::Hu => hu(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "hu".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("hu") => Some("hu".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "hu" => Some("hu".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

fn hu(key: &str) -> &'static str {
    use keys::*;
    match key {
        REPORT_TITLE => "Eredmény",
        KPI_CURRENT => "MOST",
        KPI_TARGET => "CÉL",
        KPI_SAVING => "Különbség",
        KPI_IMPROVEMENT => "Javulás (hőigény)",
        PER_YEAR => "/év",
        PER_MONTH => "/hó",
        YEARS => "év",
        RANKING_HEADING => "„Csak X” összehasonlítás (megtakarítás a MOST-hoz képest)",
        RANKING_HELP => "Melyik lépés adja önmagában a legnagyobb éves hatást.",
        INVEST_HEADING => "Beruházás + megtérülés",
        INVEST_PAYBACK => "megtérülés",
        INVEST_TOTAL => "Összesen",
        ADJUST_HEADING => "Korrigált bemenetek",
        CALIBRATION_CLAMPED => "A kalibrációs szorzó elérte a határt, a bemenetek ellentmondásosak lehetnek.",
        TECH_HEADING => "Technikai számok",
        TECH_AREAS => "Felületek",
        TECH_U_CURRENT => "U-értékek MOST",
        TECH_U_TARGET => "U-értékek CÉL",
        TECH_H_CURRENT => "H (W/K) MOST",
        TECH_H_TARGET => "H (W/K) CÉL",
        TECH_SCALE => "Kalibrációs szorzó",
        TECH_TRANSMISSION => "transzmisszió",
        TECH_VENTILATION => "szellőzés",
        PART_WALL => "fal",
        PART_WINDOW => "ablak",
        PART_ROOF => "födém",
        PART_FLOOR => "padló",
        PART_VOLUME => "térfogat",
        MEASURE_WALL => "Fal",
        MEASURE_ROOF => "Födém/padlás",
        MEASURE_FLOOR => "Padló/aljzat",
        MEASURE_HEATING => "Fűtés",
        LIST_INSULATION => "Szigetelőanyagok",
        LIST_WALLS => "Falszerkezetek",
        LIST_HEATING => "Fűtési rendszerek",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        REPORT_TITLE => "Result",
        KPI_CURRENT => "CURRENT",
        KPI_TARGET => "TARGET",
        KPI_SAVING => "Saving",
        KPI_IMPROVEMENT => "Improvement (heat demand)",
        PER_YEAR => "/yr",
        PER_MONTH => "/mo",
        YEARS => "yr",
        RANKING_HEADING => "\"Only X\" comparison (saving versus CURRENT)",
        RANKING_HELP => "Which single step has the largest yearly effect on its own.",
        INVEST_HEADING => "Investment + payback",
        INVEST_PAYBACK => "payback",
        INVEST_TOTAL => "Total",
        ADJUST_HEADING => "Adjusted inputs",
        CALIBRATION_CLAMPED => "Calibration factor hit its limit; inputs may be inconsistent.",
        TECH_HEADING => "Technical figures",
        TECH_AREAS => "Areas",
        TECH_U_CURRENT => "U-values CURRENT",
        TECH_U_TARGET => "U-values TARGET",
        TECH_H_CURRENT => "H (W/K) CURRENT",
        TECH_H_TARGET => "H (W/K) TARGET",
        TECH_SCALE => "Calibration factor",
        TECH_TRANSMISSION => "transmission",
        TECH_VENTILATION => "ventilation",
        PART_WALL => "wall",
        PART_WINDOW => "window",
        PART_ROOF => "roof",
        PART_FLOOR => "floor",
        PART_VOLUME => "volume",
        MEASURE_WALL => "Wall",
        MEASURE_ROOF => "Roof/attic",
        MEASURE_FLOOR => "Floor",
        MEASURE_HEATING => "Heating",
        LIST_INSULATION => "Insulation materials",
        LIST_WALLS => "Wall constructions",
        LIST_HEATING => "Heating systems",
        _ => return None,
    };
    Some(s)
}
