use super::*;
use crate::sections::render;
use crate::cms::CmsError;
use crate::test_helpers::{MockCms, visible};
use serde_json::json;

fn render_footer(settings: Option<FooterSettings>, social: Option<SocialSettings>) -> String {
    render(move || view! { <SiteFooter settings=settings social=social/> })
}

fn image(src: Option<&str>) -> Image {
    Image { alt_text: Some("Gallery".into()), source_url: src.map(Into::into) }
}

fn all_social() -> SocialSettings {
    SocialSettings {
        facebook_url: Some("https://facebook.example/lyceum".into()),
        instagram_url: Some("https://instagram.example/lyceum".into()),
        linkedin_url: Some("https://linkedin.example/lyceum".into()),
        pinterest_url: Some("https://pinterest.example/lyceum".into()),
    }
}

// =============================================================================
// VIEW
// =============================================================================

#[test]
fn absent_settings_render_nothing() {
    assert_eq!(visible(&render_footer(None, Some(all_social()))), "");
}

#[test]
fn gallery_links_only_images_with_a_source() {
    let settings = FooterSettings {
        footer_gallery: Some(Gallery { nodes: vec![image(Some("/g/1.jpg")), image(None), image(Some("/g/3.jpg"))] }),
        ..Default::default()
    };
    let html = render_footer(Some(settings), None);
    assert_eq!(html.matches(r#"class="slick-item""#).count(), 3);
    assert_eq!(html.matches(r#"class="fit_img""#).count(), 2);
    assert!(html.find("/g/1.jpg").unwrap() < html.find("/g/3.jpg").unwrap());
}

#[test]
fn social_icons_follow_fixed_order() {
    let html = render_footer(Some(FooterSettings::default()), Some(all_social()));
    let facebook = html.find("fa-facebook-f").unwrap();
    let instagram = html.find("fa-instagram").unwrap();
    let pinterest = html.find("fa-pinterest-p").unwrap();
    let linkedin = html.find("fa-linkedin-in").unwrap();
    assert!(facebook < instagram && instagram < pinterest && pinterest < linkedin);
}

#[test]
fn missing_social_renders_no_icons() {
    let html = render_footer(Some(FooterSettings::default()), None);
    assert!(html.contains(r#"class="social_media""#));
    assert!(!html.contains("fa-brands"));
}

#[test]
fn empty_social_urls_are_skipped() {
    let social = SocialSettings { facebook_url: Some(String::new()), ..all_social() };
    let html = render_footer(Some(FooterSettings::default()), Some(social));
    assert!(!html.contains("fa-facebook-f"));
    assert_eq!(html.matches("fa-brands").count(), 3);
}

#[test]
fn address_needs_both_text_and_link() {
    let without_link = FooterSettings { footer_address: Some(RichText("1 Main St".into())), ..Default::default() };
    assert!(!render_footer(Some(without_link), None).contains("fa-location-dot"));

    let with_link = FooterSettings {
        footer_address: Some(RichText("1 Main St".into())),
        footer_address_link: Some("https://maps.example/1".into()),
        ..Default::default()
    };
    let html = render_footer(Some(with_link), None);
    assert!(html.contains(r#"href="https://maps.example/1""#));
    assert!(html.contains("1 Main St"));
}

#[test]
fn phone_content_boxes_and_copyright_render() {
    let settings = FooterSettings {
        footer_phone: Some("555-0100".into()),
        footer_email_content_boxes: vec![
            ContentBox { box_content: Some(RichText("<p>office@lyceum.test</p>".into())) },
            ContentBox { box_content: Some(RichText("<p>events@lyceum.test</p>".into())) },
        ],
        footer_copyright: Some(RichText("<p>&copy; Lyceum</p>".into())),
        ..Default::default()
    };
    let html = render_footer(Some(settings), None);
    assert_eq!(html.matches("tel:555-0100").count(), 1);
    assert_eq!(html.matches("<p>office@lyceum.test</p>").count(), 1);
    assert_eq!(html.matches("<p>events@lyceum.test</p>").count(), 1);
    assert!(html.contains("<p>&copy; Lyceum</p>"));
    assert!(html.contains("<h3>The Glendale Lyceum</h3>"));
}

#[test]
fn partner_logos_fall_back_to_placeholders() {
    let settings = FooterSettings {
        footer_logos_title: Some("Partners".into()),
        footer_logos: vec![FooterLogo {
            fl_link: None,
            fl_logo: Some(ImageNode { node: Some(Image { alt_text: None, source_url: Some("/l.png".into()) }) }),
        }],
        ..Default::default()
    };
    let html = render_footer(Some(settings), None);
    assert!(html.contains("<h3>Partners</h3>"));
    assert!(html.contains(r##"href="#""##));
    assert!(html.contains(r#"alt="Logo""#));
}

// =============================================================================
// LOADERS
// =============================================================================

#[tokio::test]
async fn load_footer_unwraps_theme_settings() {
    let cms = MockCms::new().with(
        "GetFooter",
        json!({ "footerSettings": { "themeFooterSettings": {
            "footerPhone": "555-0100",
            "footerGallery": { "nodes": [ { "sourceUrl": "/a.jpg" }, { "sourceUrl": null } ] },
            "footerLogos": null
        } } }),
    );
    let settings = load_footer(&cms, &ImagePolicy::default()).await.unwrap();
    assert_eq!(settings.footer_phone.as_deref(), Some("555-0100"));
    assert_eq!(settings.footer_gallery.unwrap().nodes.len(), 2);
    assert!(settings.footer_logos.is_empty());
}

#[tokio::test]
async fn load_footer_tolerates_null_list_entries() {
    let cms = MockCms::new().with(
        "GetFooter",
        json!({ "footerSettings": { "themeFooterSettings": {
            "footerGallery": { "nodes": [ null, { "sourceUrl": "/g/2.jpg" } ] },
            "footerLogos": [ null ],
            "footerEmailContentBoxes": [ null, { "boxContent": "<p>x</p>" } ]
        } } }),
    );
    let settings = load_footer(&cms, &ImagePolicy::default()).await.unwrap();
    assert_eq!(settings.footer_logos.len(), 1);
    assert_eq!(settings.footer_email_content_boxes.len(), 2);

    let html = render_footer(Some(settings), None);
    assert_eq!(html.matches(r#"class="slick-item""#).count(), 2);
    assert_eq!(html.matches(r#"class="fit_img""#).count(), 1);
}

#[tokio::test]
async fn load_footer_strips_disallowed_gallery_hosts() {
    let cms = MockCms::new().with(
        "GetFooter",
        json!({ "footerSettings": { "themeFooterSettings": {
            "footerGallery": { "nodes": [
                { "sourceUrl": "https://cms.example.test/ok.jpg" },
                { "sourceUrl": "https://elsewhere.example/no.jpg" }
            ] }
        } } }),
    );
    let policy = ImagePolicy::new(vec!["cms.example.test".into()]);
    let nodes = load_footer(&cms, &policy).await.unwrap().footer_gallery.unwrap().nodes;
    assert!(nodes[0].src().is_some());
    assert!(nodes[1].src().is_none());
}

#[tokio::test]
async fn load_social_failure_is_none() {
    let cms = MockCms::new().failing("GetSocial", CmsError::GraphQl("denied".into()));
    assert!(load_social(&cms).await.is_none());
}

#[tokio::test]
async fn load_social_reads_urls() {
    let cms = MockCms::new().with(
        "GetSocial",
        json!({ "socialMediaSettings": { "themeSocialMediaSettings": { "facebookUrl": "https://facebook.example/x" } } }),
    );
    let social = load_social(&cms).await.unwrap();
    assert_eq!(social.links(), vec![("https://facebook.example/x".to_owned(), "fa-brands fa-facebook-f")]);
}
