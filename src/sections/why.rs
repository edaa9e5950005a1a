//! Home page "why" section: a grid of icon boxes.

use leptos::prelude::*;
use serde::Deserialize;

use super::{HomePageResponse, non_empty};
use crate::cms::types::nullable_list;
use crate::cms::{self, CmsQuery, ImageNode, ImagePolicy, RestrictImages, RichText, SectionQuery};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhyBox {
    pub box_title: Option<String>,
    pub box_description: Option<RichText>,
    pub box_image: Option<ImageNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhySettings {
    pub ws_subtitle: Option<String>,
    pub ws_title: Option<String>,
    #[serde(deserialize_with = "nullable_list")]
    pub ws_boxes: Vec<WhyBox>,
}

impl RestrictImages for WhySettings {
    fn restrict_images(&mut self, policy: &ImagePolicy) {
        for item in &mut self.ws_boxes {
            if let Some(image) = item.box_image.as_mut() {
                image.restrict(policy);
            }
        }
    }
}

pub const WHY_QUERY: SectionQuery = SectionQuery {
    section: "why",
    operation: "GetHomeWhy",
    document: r"query GetHomeWhy {
  pageBy(pageId: 2) {
    homepageSettings {
      wsSubtitle
      wsTitle
      wsBoxes {
        boxTitle
        boxDescription
        boxImage { node { altText sourceUrl } }
      }
    }
  }
}",
};

pub async fn load_why(cms: &dyn CmsQuery, images: &ImagePolicy) -> Option<WhySettings> {
    let response: HomePageResponse<WhySettings> = cms::query_section(cms, &WHY_QUERY).await?;
    let mut settings = response.into_settings()?;
    settings.restrict_images(images);
    Some(settings)
}

#[component]
pub fn HomeWhy(settings: Option<WhySettings>) -> impl IntoView {
    settings.map(|settings| {
        let WhySettings { ws_subtitle, ws_title, ws_boxes } = settings;

        view! {
            <section class="sections">
                <div class="container">
                    <div class="sections_title" data-aos="fade" data-aos-delay="300">
                        {non_empty(ws_subtitle).map(|subtitle| view! { <span class="subtitle">{subtitle}</span> })}
                        {non_empty(ws_title).map(|title| view! { <h2>{title}</h2> })}
                    </div>
                    <div class="row tb_space gx-xxl-5 justify-content-center">
                        {ws_boxes.into_iter().map(why_box).collect_view()}
                    </div>
                </div>
            </section>
        }
    })
}

fn why_box(item: WhyBox) -> impl IntoView {
    let WhyBox { box_title, box_description, box_image } = item;
    let image = box_image.and_then(|node| node.image().cloned());

    view! {
        <div class="col-lg-4">
            <div class="icon_box">
                {image.map(|image| {
                    let src = image.src().unwrap_or_default().to_owned();
                    let alt = image.alt().to_owned();
                    view! {
                        <div class="icon_img">
                            <img src=src alt=alt width="50" height="50"/>
                        </div>
                    }
                })}
                {non_empty(box_title).map(|title| view! { <h3>{title}</h3> })}
                {box_description
                    .filter(|description| !description.is_empty())
                    .map(|description| view! { <div inner_html=description.into_inner()></div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cms::Image;
    use crate::sections::render;
    use crate::test_helpers::{MockCms, visible};
    use serde_json::json;

    fn render_why(settings: Option<WhySettings>) -> String {
        render(move || view! { <HomeWhy settings=settings/> })
    }

    #[test]
    fn absent_settings_render_nothing() {
        assert_eq!(visible(&render_why(None)), "");
    }

    #[test]
    fn boxes_render_in_order_with_present_fields_only() {
        let settings = WhySettings {
            ws_subtitle: Some("Why us".into()),
            ws_title: Some("Reasons".into()),
            ws_boxes: vec![
                WhyBox {
                    box_title: Some("Community".into()),
                    box_description: Some(RichText("<em>local</em>".into())),
                    box_image: Some(ImageNode {
                        node: Some(Image { alt_text: None, source_url: Some("/icons/community.svg".into()) }),
                    }),
                },
                WhyBox { box_title: Some("History".into()), box_description: None, box_image: None },
            ],
        };
        let html = render_why(Some(settings));
        assert_eq!(html.matches(r#"class="icon_box""#).count(), 2);
        assert_eq!(html.matches("<img").count(), 1);
        assert_eq!(html.matches("<em>local</em>").count(), 1);
        assert!(html.find("<h3>Community</h3>").unwrap() < html.find("<h3>History</h3>").unwrap());
        assert_eq!(html.matches("<h2>Reasons</h2>").count(), 1);
    }

    #[test]
    fn blank_rich_text_is_skipped() {
        let settings = WhySettings {
            ws_boxes: vec![WhyBox { box_description: Some(RichText("   ".into())), ..Default::default() }],
            ..Default::default()
        };
        let html = render_why(Some(settings));
        assert_eq!(html.matches(r#"class="icon_box""#).count(), 1);
        assert!(!html.contains("<h3"));
        assert_eq!(html.matches("<div").count(), 5);
    }

    #[tokio::test]
    async fn load_why_decodes_boxes() {
        let cms = MockCms::new().with(
            "GetHomeWhy",
            json!({ "pageBy": { "homepageSettings": {
                "wsTitle": "Reasons",
                "wsBoxes": [ { "boxTitle": "A", "boxDescription": "<p>a</p>", "boxImage": null }, { "boxTitle": "B" } ]
            } } }),
        );
        let settings = load_why(&cms, &ImagePolicy::default()).await.unwrap();
        assert_eq!(settings.ws_boxes.len(), 2);
        assert_eq!(settings.ws_boxes[0].box_description, Some(RichText("<p>a</p>".into())));
    }

    #[tokio::test]
    async fn load_why_null_box_renders_empty_block() {
        let cms = MockCms::new().with(
            "GetHomeWhy",
            json!({ "pageBy": { "homepageSettings": { "wsBoxes": [ null, { "boxTitle": "B" } ] } } }),
        );
        let settings = load_why(&cms, &ImagePolicy::default()).await.unwrap();
        assert_eq!(settings.ws_boxes[0], WhyBox::default());

        let html = render_why(Some(settings));
        assert_eq!(html.matches(r#"class="icon_box""#).count(), 2);
        assert_eq!(html.matches("<h3>B</h3>").count(), 1);
    }

    #[tokio::test]
    async fn load_why_decode_failure_is_none() {
        let cms = MockCms::new().with("GetHomeWhy", json!({ "pageBy": { "homepageSettings": { "wsBoxes": "oops" } } }));
        assert!(load_why(&cms, &ImagePolicy::default()).await.is_none());
    }
}
