//! Home page billboard: a single full-width image.

use leptos::prelude::*;
use serde::Deserialize;

use super::HomePageResponse;
use crate::cms::{self, CmsQuery, ImageNode, ImagePolicy, RestrictImages, SectionQuery};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillboardSettings {
    pub bs_image: Option<ImageNode>,
}

impl RestrictImages for BillboardSettings {
    fn restrict_images(&mut self, policy: &ImagePolicy) {
        if let Some(image) = self.bs_image.as_mut() {
            image.restrict(policy);
        }
    }
}

pub const BILLBOARD_QUERY: SectionQuery = SectionQuery {
    section: "billboard",
    operation: "GetHomeBillboard",
    document: r"query GetHomeBillboard {
  pageBy(pageId: 2) {
    homepageSettings {
      bsImage { node { altText sourceUrl } }
    }
  }
}",
};

pub async fn load_billboard(cms: &dyn CmsQuery, images: &ImagePolicy) -> Option<BillboardSettings> {
    let response: HomePageResponse<BillboardSettings> = cms::query_section(cms, &BILLBOARD_QUERY).await?;
    let mut settings = response.into_settings()?;
    settings.restrict_images(images);
    Some(settings)
}

#[component]
pub fn HomeBillboard(settings: Option<BillboardSettings>) -> impl IntoView {
    let image = settings
        .and_then(|settings| settings.bs_image)
        .and_then(|node| node.image().cloned());

    image.map(|image| {
        let src = image.src().unwrap_or_default().to_owned();
        let alt = image.alt().to_owned();
        view! {
            <div class="billboard header_gap">
                <div class="item">
                    <img src=src alt=alt/>
                </div>
            </div>
        }
    })
}
