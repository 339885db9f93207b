//! Strongly typed models for the Brandfetch brand endpoint.
//!
//! The API guarantees no field: records are assembled from whatever sources
//! Brandfetch has for a domain, so every field here is optional and unknown
//! fields are ignored. Consumers must null-check before access.
use serde::{Deserialize, Serialize};

/// A brand record as returned by `GET {base}/{domain}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub claimed: Option<bool>,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,

    #[serde(default)]
    pub links: Option<Vec<ExternalLink>>,
    #[serde(default)]
    pub logos: Option<Vec<LogoAsset>>,
    #[serde(default)]
    pub colors: Option<Vec<BrandColor>>,
    #[serde(default)]
    pub fonts: Option<Vec<BrandFont>>,
    #[serde(default)]
    pub images: Option<Vec<ImageAsset>>,

    #[serde(default)]
    pub quality_score: Option<f64>,
    #[serde(default)]
    pub company: Option<CompanyInfo>,
    #[serde(default)]
    pub is_nsfw: Option<bool>,
    #[serde(default)]
    pub urn: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExternalLink {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One logo entry; `kind` is `logo`, `icon`, or `symbol` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LogoAsset {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub formats: Vec<AssetFormat>,
}

/// One downloadable rendition of a logo or image asset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssetFormat {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BrandColor {
    #[serde(default)]
    pub hex: Option<String>,
    #[serde(default)]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub brightness: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrandFont {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub origin_id: Option<String>,
    #[serde(default)]
    pub weights: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ImageAsset {
    #[serde(default)]
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub formats: Vec<AssetFormat>,
}

/// Nested company metadata.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub employees: Option<u64>,
    #[serde(default)]
    pub founded_year: Option<i32>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub financial_identifiers: Option<FinancialIdentifiers>,
    #[serde(default)]
    pub industries: Option<Vec<Industry>>,
    #[serde(default)]
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FinancialIdentifiers {
    #[serde(default)]
    pub isin: Vec<String>,
    #[serde(default)]
    pub ticker: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Industry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub parent: Option<IndustryParent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IndustryParent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_record() {
        let v = json!({
            "id": "id_acme",
            "name": "Acme",
            "domain": "acme.com",
            "claimed": true,
            "description": "Rockets and anvils",
            "longDescription": "Rockets, anvils, and tunnels painted on walls.",
            "links": [{ "name": "twitter", "url": "https://x.com/acme" }],
            "logos": [{
                "theme": "dark",
                "type": "logo",
                "tags": [],
                "formats": [{ "src": "https://cdn.example/acme.png", "format": "png", "width": 400, "height": 120, "size": 9000 }]
            }],
            "colors": [{ "hex": "#ff0000", "type": "accent", "brightness": 127 }],
            "fonts": [{ "name": "Inter", "type": "title", "origin": "google", "originId": "inter", "weights": [400, 700] }],
            "qualityScore": 0.93,
            "company": {
                "employees": 250,
                "foundedYear": 1949,
                "kind": "PRIVATELY_HELD",
                "industries": [{ "id": "1", "name": "Manufacturing", "slug": "manufacturing", "score": 0.9, "emoji": "🏭", "parent": null }],
                "location": { "city": "Phoenix", "country": "United States", "countryCode": "US", "state": "AZ" }
            },
            "isNsfw": false,
            "urn": "urn:brandfetch:brand:acme"
        });

        let record: CompanyRecord = serde_json::from_value(v).unwrap();
        assert_eq!(record.name.as_deref(), Some("Acme"));
        assert_eq!(record.quality_score, Some(0.93));
        let fonts = record.fonts.as_deref().unwrap();
        assert_eq!(fonts[0].origin_id.as_deref(), Some("inter"));
        let company = record.company.unwrap();
        assert_eq!(company.founded_year, Some(1949));
        assert_eq!(
            company.location.unwrap().country_code.as_deref(),
            Some("US")
        );
        let logos = record.logos.unwrap();
        assert_eq!(logos[0].kind.as_deref(), Some("logo"));
        assert_eq!(logos[0].formats[0].width, Some(400));
    }

    #[test]
    fn font_origin_id_uses_the_camel_case_wire_name() {
        let font: BrandFont = serde_json::from_value(json!({
            "name": "Poppins",
            "origin": "google",
            "originId": "poppins"
        }))
        .unwrap();
        assert_eq!(font.origin_id.as_deref(), Some("poppins"));
    }

    #[test]
    fn tolerates_sparse_and_unknown_fields() {
        let record: CompanyRecord =
            serde_json::from_value(json!({ "domain": "acme.com", "surprise": [1, 2, 3] })).unwrap();
        assert_eq!(record.domain.as_deref(), Some("acme.com"));
        assert!(record.name.is_none());
        assert!(record.logos.is_none());
        assert!(record.company.is_none());
    }
}
