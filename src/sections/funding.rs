//! Home page funding section: intro text, a carousel of industry boxes, and
//! a call-to-action button.

use leptos::prelude::*;
use serde::Deserialize;

use super::{HomePageResponse, non_empty};
use crate::cms::types::nullable_list;
use crate::cms::{self, Button, CmsQuery, ImageNode, ImagePolicy, RestrictImages, RichText, SectionQuery};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundingBox {
    pub box_title: Option<String>,
    pub box_image: Option<ImageNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FundingSettings {
    pub is_subtitle: Option<String>,
    pub is_title: Option<String>,
    pub is_description: Option<RichText>,
    pub is_button: Option<Button>,
    #[serde(deserialize_with = "nullable_list")]
    pub is_boxes: Vec<FundingBox>,
}

impl RestrictImages for FundingSettings {
    fn restrict_images(&mut self, policy: &ImagePolicy) {
        for item in &mut self.is_boxes {
            if let Some(image) = item.box_image.as_mut() {
                image.restrict(policy);
            }
        }
    }
}

pub const FUNDING_QUERY: SectionQuery = SectionQuery {
    section: "funding",
    operation: "GetHomeFunding",
    document: r"query GetHomeFunding {
  pageBy(pageId: 2) {
    homepageSettings {
      isSubtitle
      isTitle
      isDescription
      isButton { target title url }
      isBoxes {
        boxTitle
        boxImage { node { altText sourceUrl } }
      }
    }
  }
}",
};

pub async fn load_funding(cms: &dyn CmsQuery, images: &ImagePolicy) -> Option<FundingSettings> {
    let response: HomePageResponse<FundingSettings> = cms::query_section(cms, &FUNDING_QUERY).await?;
    let mut settings = response.into_settings()?;
    settings.restrict_images(images);
    Some(settings)
}

#[component]
pub fn HomeFunding(settings: Option<FundingSettings>) -> impl IntoView {
    settings.map(|settings| {
        let FundingSettings { is_subtitle, is_title, is_description, is_button, is_boxes } = settings;

        view! {
            <section class="sections secondary_bg white">
                <div class="container">
                    <div class="sections_title" data-aos="fade" data-aos-delay="100">
                        {non_empty(is_subtitle).map(|subtitle| view! { <span class="subtitle">{subtitle}</span> })}
                        {non_empty(is_title).map(|title| view! { <h2>{title}</h2> })}
                        {is_description
                            .filter(|description| !description.is_empty())
                            .map(|description| view! { <div inner_html=description.into_inner()></div> })}
                    </div>
                    <div class="white_arrow">
                        {is_boxes.into_iter().map(funding_box).collect_view()}
                    </div>
                    {is_button.map(|button| view! {
                        <div class="btn_holder">
                            <a href=button.href() class="my_btn" target=button.target() rel="noopener noreferrer">
                                {button.label()}
                            </a>
                        </div>
                    })}
                </div>
            </section>
        }
    })
}

fn funding_box(item: FundingBox) -> impl IntoView {
    let image = item.box_image.and_then(|node| node.image().cloned());

    view! {
        <div class="slick-item">
            <div class="indus_box">
                {image.map(|image| {
                    let src = image.src().unwrap_or_default().to_owned();
                    let alt = image.alt().to_owned();
                    view! {
                        <div class="indus_img">
                            <img src=src alt=alt width="24" height="16"/>
                        </div>
                    }
                })}
                {non_empty(item.box_title).map(|title| view! { <span>{title}</span> })}
            </div>
        </div>
    }
}
