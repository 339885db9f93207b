//! Deterministic selection of the best-fit logo from a brand record.
use super::types::CompanyRecord;

/// Raster formats the form layer can use, most preferred first.
const ALLOWED_FORMATS: [&str; 3] = ["png", "jpeg", "jpg"];

/// (type, theme) pairs in preference order; `None` matches any theme.
const PREFERRED: [(&str, Option<&str>); 4] = [
    ("logo", Some("dark")),
    ("logo", Some("light")),
    ("logo", None),
    ("icon", None),
];

/// Pick one logo source URL from `record`, or `None` when nothing usable
/// exists. For the first preference pair with a matching entry, the first
/// allowed raster format wins; vector formats and other image assets are
/// never considered.
pub fn best_logo(record: &CompanyRecord) -> Option<String> {
    let logos = record.logos.as_deref()?;
    if logos.is_empty() {
        return None;
    }

    for (kind, theme) in PREFERRED {
        let entry = logos.iter().find(|l| {
            l.kind.as_deref() == Some(kind)
                && theme.map_or(true, |t| l.theme.as_deref() == Some(t))
        });
        let Some(entry) = entry else { continue };

        for fmt in ALLOWED_FORMATS {
            let found = entry.formats.iter().find(|f| {
                f.format
                    .as_deref()
                    .is_some_and(|g| g.eq_ignore_ascii_case(fmt))
            });
            if let Some(found) = found {
                return found.src.clone();
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brandfetch::types::{AssetFormat, LogoAsset};

    fn asset(kind: &str, theme: Option<&str>, formats: &[(&str, &str)]) -> LogoAsset {
        LogoAsset {
            theme: theme.map(str::to_string),
            kind: Some(kind.to_string()),
            tags: vec![],
            formats: formats
                .iter()
                .map(|(format, src)| AssetFormat {
                    src: Some(src.to_string()),
                    format: Some(format.to_string()),
                    ..AssetFormat::default()
                })
                .collect(),
        }
    }

    fn record_with(logos: Vec<LogoAsset>) -> CompanyRecord {
        CompanyRecord {
            logos: Some(logos),
            ..CompanyRecord::default()
        }
    }

    #[test]
    fn no_logos_field_yields_none() {
        assert_eq!(best_logo(&CompanyRecord::default()), None);
        assert_eq!(best_logo(&record_with(vec![])), None);
    }

    #[test]
    fn dark_logo_beats_light_and_icon() {
        let record = record_with(vec![
            asset("icon", None, &[("png", "https://cdn/icon.png")]),
            asset("logo", Some("light"), &[("png", "https://cdn/light.png")]),
            asset("logo", Some("dark"), &[("png", "https://cdn/dark.png")]),
        ]);
        assert_eq!(best_logo(&record).as_deref(), Some("https://cdn/dark.png"));
    }

    #[test]
    fn falls_through_to_a_themeless_icon() {
        let record = record_with(vec![asset("icon", None, &[("jpg", "https://cdn/i.jpg")])]);
        assert_eq!(best_logo(&record).as_deref(), Some("https://cdn/i.jpg"));
    }

    #[test]
    fn png_wins_over_jpeg_within_an_entry() {
        let record = record_with(vec![asset(
            "logo",
            Some("dark"),
            &[("jpeg", "https://cdn/a.jpeg"), ("PNG", "https://cdn/a.png")],
        )]);
        assert_eq!(best_logo(&record).as_deref(), Some("https://cdn/a.png"));
    }

    #[test]
    fn vector_only_entries_are_skipped() {
        let record = record_with(vec![asset(
            "logo",
            Some("dark"),
            &[("svg", "https://cdn/a.svg")],
        )]);
        assert_eq!(best_logo(&record), None);
    }
}
