use std::collections::HashMap;

use notion::PropertySchema;

use crate::config::PropertyOverrides;
use crate::domain::SourceKind;

/// Used when the schema has no title-typed property
pub const DEFAULT_TITLE_PROPERTY: &str = "Name";

/// Property names besides the source label that commonly hold a link
const URL_ALIASES: &[&str] = &["URL", "Link", "リンク", "Url"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlPropertyKind {
    Url,
    RichText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlProperty {
    pub name: String,
    pub kind: UrlPropertyKind,
}

/// The destination properties a record write targets: where the title goes,
/// and where (and as what type) the URL goes, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMapping {
    pub title: String,
    pub url: Option<UrlProperty>,
}

impl PropertyMapping {
    /// Resolve the mapping for one source against a database schema.
    ///
    /// Configured overrides are taken verbatim. Otherwise the title goes to
    /// the first title-typed property (fallback: `Name`), and the URL to the
    /// first link-capable property found by priority: a property named after
    /// the source label or a known alias, then any url-typed property, then
    /// any rich-text property. Inference over unnamed candidates walks
    /// property names in sorted order.
    pub fn resolve(
        properties: &HashMap<String, PropertySchema>,
        source: SourceKind,
        overrides: &PropertyOverrides,
    ) -> Self {
        let title = overrides
            .title
            .clone()
            .or_else(|| find_title(properties))
            .unwrap_or_else(|| DEFAULT_TITLE_PROPERTY.to_string());

        let url = match overrides.url_by_source.get(&source) {
            Some(name) => Some(UrlProperty {
                name: name.clone(),
                kind: override_kind(properties, name),
            }),
            None => infer_url_property(properties, source),
        };

        Self { title, url }
    }
}

fn sorted_names(properties: &HashMap<String, PropertySchema>) -> Vec<&String> {
    let mut names: Vec<&String> = properties.keys().collect();
    names.sort();
    names
}

fn find_title(properties: &HashMap<String, PropertySchema>) -> Option<String> {
    sorted_names(properties)
        .into_iter()
        .find(|name| properties[*name].is_title())
        .cloned()
}

fn infer_url_property(
    properties: &HashMap<String, PropertySchema>,
    source: SourceKind,
) -> Option<UrlProperty> {
    let mut candidates = vec![source.as_str()];
    candidates.extend_from_slice(URL_ALIASES);

    for candidate in candidates {
        if let Some(schema) = properties.get(candidate) {
            if schema.is_url() {
                return Some(UrlProperty {
                    name: candidate.to_string(),
                    kind: UrlPropertyKind::Url,
                });
            }
            if schema.is_rich_text() {
                return Some(UrlProperty {
                    name: candidate.to_string(),
                    kind: UrlPropertyKind::RichText,
                });
            }
        }
    }

    let names = sorted_names(properties);
    if let Some(name) = names.iter().find(|n| properties[**n].is_url()) {
        return Some(UrlProperty {
            name: (*name).clone(),
            kind: UrlPropertyKind::Url,
        });
    }
    if let Some(name) = names.iter().find(|n| properties[**n].is_rich_text()) {
        return Some(UrlProperty {
            name: (*name).clone(),
            kind: UrlPropertyKind::RichText,
        });
    }

    None
}

/// An override is trusted even when the schema disagrees; only a rich-text
/// property changes how the value is written
fn override_kind(
    properties: &HashMap<String, PropertySchema>,
    name: &str,
) -> UrlPropertyKind {
    match properties.get(name) {
        Some(schema) if schema.is_rich_text() => UrlPropertyKind::RichText,
        _ => UrlPropertyKind::Url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(kind: &str) -> PropertySchema {
        PropertySchema {
            kind: kind.to_string(),
            extra: serde_json::Value::Null,
        }
    }

    fn props(entries: &[(&str, &str)]) -> HashMap<String, PropertySchema> {
        entries
            .iter()
            .map(|(name, kind)| (name.to_string(), schema(kind)))
            .collect()
    }

    #[test]
    fn test_title_defaults_to_name_when_schema_has_no_title() {
        let properties = props(&[("Link", "url")]);
        let mapping =
            PropertyMapping::resolve(&properties, SourceKind::Rss, &PropertyOverrides::default());

        assert_eq!(mapping.title, "Name");
    }

    #[test]
    fn test_title_uses_title_typed_property() {
        let properties = props(&[("Headline", "title"), ("Link", "url")]);
        let mapping =
            PropertyMapping::resolve(&properties, SourceKind::Rss, &PropertyOverrides::default());

        assert_eq!(mapping.title, "Headline");
    }

    #[test]
    fn test_title_override_wins() {
        let properties = props(&[("Headline", "title")]);
        let overrides = PropertyOverrides {
            title: Some("Custom".to_string()),
            ..Default::default()
        };
        let mapping = PropertyMapping::resolve(&properties, SourceKind::Rss, &overrides);

        assert_eq!(mapping.title, "Custom");
    }

    #[test]
    fn test_url_prefers_property_named_after_source() {
        let properties = props(&[("YouTube", "url"), ("Link", "url"), ("Name", "title")]);
        let mapping = PropertyMapping::resolve(
            &properties,
            SourceKind::YouTube,
            &PropertyOverrides::default(),
        );

        assert_eq!(
            mapping.url,
            Some(UrlProperty {
                name: "YouTube".to_string(),
                kind: UrlPropertyKind::Url,
            })
        );
    }

    #[test]
    fn test_url_alias_match_can_be_rich_text() {
        let properties = props(&[("Link", "rich_text"), ("Name", "title")]);
        let mapping =
            PropertyMapping::resolve(&properties, SourceKind::Rss, &PropertyOverrides::default());

        assert_eq!(
            mapping.url,
            Some(UrlProperty {
                name: "Link".to_string(),
                kind: UrlPropertyKind::RichText,
            })
        );
    }

    #[test]
    fn test_url_falls_back_to_any_url_typed_property() {
        let properties = props(&[("Source address", "url"), ("Name", "title")]);
        let mapping =
            PropertyMapping::resolve(&properties, SourceKind::Rss, &PropertyOverrides::default());

        assert_eq!(
            mapping.url,
            Some(UrlProperty {
                name: "Source address".to_string(),
                kind: UrlPropertyKind::Url,
            })
        );
    }

    #[test]
    fn test_url_falls_back_to_rich_text_when_no_url_typed() {
        let properties = props(&[("Notes", "rich_text"), ("Name", "title")]);
        let mapping =
            PropertyMapping::resolve(&properties, SourceKind::Rss, &PropertyOverrides::default());

        assert_eq!(
            mapping.url,
            Some(UrlProperty {
                name: "Notes".to_string(),
                kind: UrlPropertyKind::RichText,
            })
        );
    }

    #[test]
    fn test_no_link_capable_property_maps_to_none() {
        let properties = props(&[("Name", "title"), ("Status", "select")]);
        let mapping =
            PropertyMapping::resolve(&properties, SourceKind::Rss, &PropertyOverrides::default());

        assert!(mapping.url.is_none());
    }

    #[test]
    fn test_url_override_is_used_verbatim() {
        let properties = props(&[("Name", "title"), ("Video", "url"), ("Link", "url")]);
        let overrides = PropertyOverrides {
            url_by_source: [(SourceKind::YouTube, "Video".to_string())].into(),
            ..Default::default()
        };
        let mapping = PropertyMapping::resolve(&properties, SourceKind::YouTube, &overrides);

        assert_eq!(
            mapping.url,
            Some(UrlProperty {
                name: "Video".to_string(),
                kind: UrlPropertyKind::Url,
            })
        );
    }

    #[test]
    fn test_url_override_respects_rich_text_type() {
        let properties = props(&[("Name", "title"), ("Clip", "rich_text")]);
        let overrides = PropertyOverrides {
            url_by_source: [(SourceKind::TikTok, "Clip".to_string())].into(),
            ..Default::default()
        };
        let mapping = PropertyMapping::resolve(&properties, SourceKind::TikTok, &overrides);

        assert_eq!(
            mapping.url,
            Some(UrlProperty {
                name: "Clip".to_string(),
                kind: UrlPropertyKind::RichText,
            })
        );
    }

    #[test]
    fn test_inference_is_deterministic_over_equivalent_schemas() {
        let properties = props(&[("B link", "url"), ("A link", "url"), ("Name", "title")]);
        let mapping =
            PropertyMapping::resolve(&properties, SourceKind::Rss, &PropertyOverrides::default());

        // Sorted-name order makes the pick stable across runs
        assert_eq!(mapping.url.unwrap().name, "A link");
    }
}
