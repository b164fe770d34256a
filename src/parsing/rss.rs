use crate::domain::Alert;
use crate::errors::AlertsResult;
use crate::parsing::html::strip_tags_opt;
use crate::parsing::xml::{parse_document, Element};

/// Parse an RSS document and turn its first `limit` items into alerts.
///
/// Items are read from `channel/item` under the document element and kept in
/// feed order. A document without a `channel` yields no alerts. CAP-specific
/// item children are ignored.
pub fn extract_alerts(xml: &str, limit: usize) -> AlertsResult<Vec<Alert>> {
    let root = parse_document(xml)?;

    let items: Vec<&Element> = match root.child("channel") {
        Some(channel) => channel.children_named("item").collect(),
        None => {
            tracing::warn!(root = %root.name, "document has no channel element");
            Vec::new()
        }
    };

    tracing::debug!(found = items.len(), limit, "feed items located");

    Ok(items.into_iter().take(limit).map(alert_from_item).collect())
}

fn alert_from_item(item: &Element) -> Alert {
    let description = item.child_text("description").map(str::trim);

    Alert::new(item.child_text("title"))
        .with_published(item.child_text("pubDate"))
        .with_summary(strip_tags_opt(description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alert::DEFAULT_TITLE;
    use crate::errors::AlertsError;

    // Trimmed-down copy of the NMC CAP feed layout
    const SAMPLE_CAP_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>Libya NMC CAP alerts</title>
    <link>https://cap-sources.s3.amazonaws.com/ly-nmc-ar/rss.xml</link>
    <item>
      <title>تحذير من أمطار غزيرة</title>
      <link>https://cap-sources.s3.amazonaws.com/ly-nmc-ar/2026/alert-1.xml</link>
      <description><![CDATA[<p>أمطار <b>غزيرة</b>   على المناطق الشرقية</p>]]></description>
      <pubDate>Sat, 18 Oct 2026 06:00:00 +0200</pubDate>
      <guid>urn:oid:2.49.0.1.434.0.2026.10.18.1</guid>
    </item>
    <item>
      <title>  </title>
      <description>&lt;b&gt;Heavy rain&lt;/b&gt; expected tomorrow</description>
    </item>
    <item>
      <pubDate>Fri, 17 Oct 2026 18:00:00 +0200</pubDate>
    </item>
  </channel>
</rss>"#;

    fn feed_with_items(count: usize) -> String {
        let items: String = (1..=count)
            .map(|i| format!("<item><title>Alert {}</title></item>", i))
            .collect();
        format!("<rss><channel><title>t</title>{}</channel></rss>", items)
    }

    #[test]
    fn test_extracts_fields() {
        let alerts = extract_alerts(SAMPLE_CAP_RSS, 5).unwrap();

        assert_eq!(alerts.len(), 3);
        assert_eq!(alerts[0].title, "تحذير من أمطار غزيرة");
        assert_eq!(alerts[0].published, "Sat, 18 Oct 2026 06:00:00 +0200");
        assert_eq!(alerts[0].summary, "أمطار غزيرة على المناطق الشرقية");
    }

    #[test]
    fn test_escaped_description_markup_is_stripped() {
        let alerts = extract_alerts(SAMPLE_CAP_RSS, 5).unwrap();
        assert_eq!(alerts[1].summary, "Heavy rain expected tomorrow");
    }

    #[test]
    fn test_field_defaults() {
        let alerts = extract_alerts(SAMPLE_CAP_RSS, 5).unwrap();

        // blank title
        assert_eq!(alerts[1].title, DEFAULT_TITLE);
        assert_eq!(alerts[1].published, "");

        // missing title and description
        assert_eq!(alerts[2].title, DEFAULT_TITLE);
        assert_eq!(alerts[2].published, "Fri, 17 Oct 2026 18:00:00 +0200");
        assert_eq!(alerts[2].summary, "");
    }

    #[test]
    fn test_keeps_at_most_limit_in_feed_order() {
        for count in [0, 1, 4, 5, 6, 12] {
            let alerts = extract_alerts(&feed_with_items(count), 5).unwrap();
            assert_eq!(alerts.len(), count.min(5), "for {} items", count);

            for (i, alert) in alerts.iter().enumerate() {
                assert_eq!(alert.title, format!("Alert {}", i + 1));
            }
        }
    }

    #[test]
    fn test_channel_without_items() {
        let alerts = extract_alerts("<rss><channel><title>Empty</title></channel></rss>", 5).unwrap();
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_missing_channel_is_not_an_error() {
        let alerts = extract_alerts("<rss><item><title>Orphan</title></item></rss>", 5).unwrap();
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_nested_items_are_ignored() {
        let xml = "<rss><channel><group><item><title>Deep</title></item></group></channel></rss>";
        assert!(extract_alerts(xml, 5).unwrap().is_empty());
    }

    #[test]
    fn test_cap_children_are_ignored() {
        let xml = r#"<rss xmlns:cap="urn:oasis:names:tc:emergency:cap:1.2"><channel><item>
            <cap:title>ignored</cap:title>
            <cap:severity>Severe</cap:severity>
            <title>Dust storm</title>
        </item></channel></rss>"#;

        let alerts = extract_alerts(xml, 5).unwrap();
        assert_eq!(alerts[0].title, "Dust storm");
    }

    #[test]
    fn test_doctype_entity_in_title() {
        let xml = r#"<?xml version="1.0"?><!DOCTYPE rss [<!ENTITY w "warn">]><rss><channel><item><title>&w;</title></item></channel></rss>"#;

        let alerts = extract_alerts(xml, 5).unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].title, "warn");
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        let result = extract_alerts("<rss><channel><item><title>Unclosed", 5);
        assert!(matches!(result, Err(AlertsError::Xml(_))));
    }
}
