use super::*;
use serde_json::json;

fn policy() -> ImagePolicy {
    ImagePolicy::new(vec!["cms.example.test".into()])
}

#[test]
fn image_node_decodes_camel_case_fields() {
    let node: ImageNode = decode(json!({
        "node": { "altText": "Logo", "sourceUrl": "https://cms.example.test/logo.png" }
    }))
    .unwrap();
    let image = node.image().unwrap();
    assert_eq!(image.alt(), "Logo");
    assert_eq!(image.src(), Some("https://cms.example.test/logo.png"));
}

#[test]
fn image_node_without_source_has_no_image() {
    let node: ImageNode = decode(json!({ "node": { "altText": "Logo", "sourceUrl": "" } })).unwrap();
    assert!(node.image().is_none());

    let node: ImageNode = decode(json!({ "node": null })).unwrap();
    assert!(node.image().is_none());
}

#[test]
fn image_alt_defaults_to_empty() {
    let image = Image { alt_text: None, source_url: Some("/a.png".into()) };
    assert_eq!(image.alt(), "");
}

#[test]
fn restrict_clears_disallowed_source() {
    let mut image = Image { alt_text: None, source_url: Some("https://elsewhere.test/a.png".into()) };
    image.restrict(&policy());
    assert!(image.source_url.is_none());
}

#[test]
fn restrict_keeps_allowed_source() {
    let mut node = ImageNode {
        node: Some(Image { alt_text: Some("a".into()), source_url: Some("https://cms.example.test/a.png".into()) }),
    };
    node.restrict(&policy());
    assert!(node.image().is_some());
}

#[test]
fn button_target_empty_is_omitted() {
    let button: Button = decode(json!({ "title": "Donate", "url": "/donate", "target": "" })).unwrap();
    assert_eq!(button.label(), "Donate");
    assert_eq!(button.href(), "/donate");
    assert!(button.target().is_none());
}

#[test]
fn rich_text_is_transparent_string() {
    let text: RichText = decode(json!("<p>Hi</p>")).unwrap();
    assert_eq!(text, RichText("<p>Hi</p>".into()));
    assert!(!text.is_empty());
    assert!(RichText("  ".into()).is_empty());
}

#[test]
fn decode_rejects_wrong_shape() {
    let err = decode::<Button>(json!(["not", "an", "object"])).unwrap_err();
    assert!(matches!(err, CmsError::Decode(_)));
}

#[test]
fn decode_tolerates_nulls_and_missing_fields() {
    let button: Button = decode(json!({ "title": null })).unwrap();
    assert_eq!(button, Button::default());
}

#[derive(Debug, Default, serde::Deserialize)]
struct Listing {
    #[serde(default, deserialize_with = "nullable_list")]
    items: Vec<Image>,
}

#[test]
fn nullable_list_keeps_null_entries_as_defaults() {
    let listing: Listing = decode(json!({ "items": [null, { "sourceUrl": "/a.png" }] })).unwrap();
    assert_eq!(listing.items.len(), 2);
    assert_eq!(listing.items[0], Image::default());
    assert_eq!(listing.items[1].src(), Some("/a.png"));
}

#[test]
fn nullable_list_null_or_missing_is_empty() {
    let listing: Listing = decode(json!({ "items": null })).unwrap();
    assert!(listing.items.is_empty());
    let listing: Listing = decode(json!({})).unwrap();
    assert!(listing.items.is_empty());
}
