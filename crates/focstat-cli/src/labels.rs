use focstat_core::ScanResult;
use std::collections::BTreeMap;
use tracing::warn;

pub const FALLBACK_LANGUAGE: &str = "English";

/// User-facing strings for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    pub title: String,
    pub description: String,
    pub scan_progress: String,
    pub no_folder: String,
    pub no_jpg: String,
    pub no_data: String,
    pub cancelled: String,
    pub x_label: String,
    pub y_label: String,
}

/// Language tag -> labels. Built once at start-up and handed to whatever
/// prints; the scan itself never touches it.
#[derive(Debug, Clone)]
pub struct LabelTable {
    languages: BTreeMap<String, Labels>,
}

impl LabelTable {
    pub fn new(languages: BTreeMap<String, Labels>) -> Self {
        Self { languages }
    }

    pub fn builtin() -> Self {
        let mut languages = BTreeMap::new();
        languages.insert(
            "English".to_string(),
            Labels {
                title: "Focal Length Histogram Generator".into(),
                description: "Select one or more photo folders and generate a histogram of the focal lengths used.".into(),
                scan_progress: "Scanning images...".into(),
                no_folder: "Please select at least one folder.".into(),
                no_jpg: "No JPG files found.".into(),
                no_data: "No focal lengths found.".into(),
                cancelled: "Scan cancelled, showing partial results.".into(),
                x_label: "focal length".into(),
                y_label: "amount of pictures".into(),
            },
        );
        languages.insert(
            "Deutsch".to_string(),
            Labels {
                title: "Brennweiten-Histogramm Generator".into(),
                description: "Wähle einen oder mehrere Ordner mit Fotos und erstelle ein Histogramm der verwendeten Brennweiten.".into(),
                scan_progress: "Scanne Bilder...".into(),
                no_folder: "Bitte wähle mindestens einen Ordner aus.".into(),
                no_jpg: "Keine JPG-Dateien gefunden.".into(),
                no_data: "Keine Brennweiten gefunden.".into(),
                cancelled: "Scan abgebrochen, zeige Teilergebnisse.".into(),
                x_label: "Brennweite".into(),
                y_label: "Anzahl Fotos".into(),
            },
        );
        languages.insert(
            "日本語".to_string(),
            Labels {
                title: "焦点距離ヒストグラムジェネレータ".into(),
                description: "フォトフォルダを1つ以上選択し、使用した焦点距離のヒストグラムを作成します。".into(),
                scan_progress: "画像をスキャン中...".into(),
                no_folder: "少なくとも1つのフォルダを選択してください。".into(),
                no_jpg: "JPGファイルが見つかりません。".into(),
                no_data: "焦点距離が見つかりません。".into(),
                cancelled: "スキャンを中断しました。途中までの結果を表示します。".into(),
                x_label: "焦点距離".into(),
                y_label: "写真枚数".into(),
            },
        );
        Self::new(languages)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(|k| k.as_str())
    }

    /// Labels for `language`, falling back to English (or any entry) when the
    /// tag is unknown.
    pub fn get(&self, language: &str) -> Option<&Labels> {
        if let Some(labels) = self.languages.get(language) {
            return Some(labels);
        }
        warn!("Unknown language '{}', using {}", language, FALLBACK_LANGUAGE);
        self.languages
            .get(FALLBACK_LANGUAGE)
            .or_else(|| self.languages.values().next())
    }
}

impl Labels {
    /// Message for the empty outcomes; `None` when there is a chart to show.
    pub fn outcome_message(&self, result: &ScanResult) -> Option<&str> {
        match result {
            ScanResult::NoFoldersSelected => Some(self.no_folder.as_str()),
            ScanResult::NoCandidateFiles => Some(self.no_jpg.as_str()),
            ScanResult::NoSamplesExtracted => Some(self.no_data.as_str()),
            ScanResult::Distribution(_) => None,
        }
    }
}
