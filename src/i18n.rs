//! Multilingual message table (Khmer / English / Chinese).
//!
//! One immutable table keyed by message id, passed explicitly to whatever
//! needs it. An unknown id comes back verbatim, so a missing translation
//! never panics and stays visible.

use ahash::AHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Km,
    En,
    Zh,
}

impl Language {
    pub fn to_str(&self) -> &'static str {
        match self {
            Language::Km => "km",
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn order() -> [Language; 3] {
        [Language::Km, Language::En, Language::Zh]
    }
}

/// (message id, km, en, zh)
type Entry = (&'static str, &'static str, &'static str, &'static str);

const MESSAGES: &[Entry] = &[
    ("capital", "រដ្ឋធានី", "Capital", "首府"),
    ("population", "ប្រជាជន", "Population", "人口"),
    ("area", "ផ្ទៃដី", "Area", "面积"),
    ("density", "ដង់ស៊ីតេ", "Density", "密度"),
    ("perKm2", "នាក់/km²", "per km²", "人/km²"),
    ("gdp", "ផលិតផលក្នុងស្រុកសរុប", "GDP", "GDP"),
    ("educationIndex", "សន្ទស្សន៍ការអប់រំ", "Education Index", "教育指数"),
    ("healthcareIndex", "សន្ទស្សន៍សុខភាព", "Healthcare Index", "医疗指数"),
    ("investment", "វិនិយោគ", "Investment", "投资"),
    ("infrastructure", "ហេដ្ឋារចនាសម្ព័ន្ធ", "Infrastructure", "基础设施"),
    ("year", "ឆ្នាំ", "Year", "年份"),
    ("noData", "គ្មានទិន្នន័យ", "No data available", "暂无数据"),
    ("noResults", "រកមិនឃើញ", "No results found", "未找到结果"),
    ("provinces", "ខេត្ត", "provinces", "个省份"),
    ("people", "នាក់", "people", "人"),
    ("selected", "បានជ្រើសរើស", "Selected", "已选择"),
    ("exportData", "នាំចេញទិន្នន័យ", "Export Data", "导出数据"),
    ("overallStatistics", "ស្ថិតិទូទៅ", "Overall Statistics", "总体统计"),
    ("totalProvinces", "ចំនួនខេត្ត", "Total Provinces", "省份总数"),
    ("totalPopulation", "ប្រជាជនសរុប", "Total Population", "总人口"),
    ("totalArea", "ផ្ទៃដីសរុប", "Total Area", "总面积"),
    ("avgDensity", "ដង់ស៊ីតេជាមធ្យម", "Avg Density", "平均密度"),
];

/// Immutable message-id × language lookup table.
#[derive(Debug)]
pub struct Translations {
    map: AHashMap<&'static str, [&'static str; 3]>,
}

impl Translations {
    pub fn new() -> Self {
        let mut map = AHashMap::with_capacity(MESSAGES.len());
        for &(key, km, en, zh) in MESSAGES {
            map.insert(key, [km, en, zh]);
        }
        Self { map }
    }

    /// Look up a message; an unknown id comes back verbatim so it stays
    /// visible instead of panicking.
    pub fn get<'a>(&self, key: &'a str, lang: Language) -> &'a str {
        match self.map.get(key) {
            Some(&[km, en, zh]) => match lang {
                Language::Km => km,
                Language::En => en,
                Language::Zh => zh,
            },
            None => key,
        }
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new()
    }
}
