//! Site footer: image gallery, address and contact details, partner logos,
//! copyright, and social media links.
//!
//! The footer is fed by two independent queries: footer settings and social
//! settings. Missing social data only drops the icons; missing footer data
//! drops the whole footer.

use leptos::prelude::*;
use serde::Deserialize;

use super::non_empty;
use crate::cms::types::nullable_list;
use crate::cms::{self, CmsQuery, Image, ImageNode, ImagePolicy, RestrictImages, RichText, SectionQuery};

// =============================================================================
// SHAPES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentBox {
    pub box_content: Option<RichText>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Gallery {
    #[serde(deserialize_with = "nullable_list")]
    pub nodes: Vec<Image>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterLogo {
    pub fl_link: Option<String>,
    pub fl_logo: Option<ImageNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterSettings {
    pub footer_address: Option<RichText>,
    pub footer_address_link: Option<String>,
    pub footer_copyright: Option<RichText>,
    #[serde(deserialize_with = "nullable_list")]
    pub footer_email_content_boxes: Vec<ContentBox>,
    pub footer_gallery: Option<Gallery>,
    #[serde(deserialize_with = "nullable_list")]
    pub footer_logos: Vec<FooterLogo>,
    pub footer_logos_title: Option<String>,
    pub footer_phone: Option<String>,
}

impl RestrictImages for FooterSettings {
    fn restrict_images(&mut self, policy: &ImagePolicy) {
        if let Some(gallery) = self.footer_gallery.as_mut() {
            for image in &mut gallery.nodes {
                image.restrict(policy);
            }
        }
        for logo in &mut self.footer_logos {
            if let Some(image) = logo.fl_logo.as_mut() {
                image.restrict(policy);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialSettings {
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub pinterest_url: Option<String>,
}

impl SocialSettings {
    /// Present platform links with their icon classes, in display order.
    #[must_use]
    pub fn links(self) -> Vec<(String, &'static str)> {
        [
            (self.facebook_url, "fa-brands fa-facebook-f"),
            (self.instagram_url, "fa-brands fa-instagram"),
            (self.pinterest_url, "fa-brands fa-pinterest-p"),
            (self.linkedin_url, "fa-brands fa-linkedin-in"),
        ]
        .into_iter()
        .filter_map(|(url, icon)| non_empty(url).map(|url| (url, icon)))
        .collect()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FooterResponse {
    footer_settings: Option<FooterGroup>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FooterGroup {
    theme_footer_settings: Option<FooterSettings>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SocialResponse {
    social_media_settings: Option<SocialGroup>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SocialGroup {
    theme_social_media_settings: Option<SocialSettings>,
}

// =============================================================================
// LOADERS
// =============================================================================

pub const FOOTER_QUERY: SectionQuery = SectionQuery {
    section: "footer",
    operation: "GetFooter",
    document: r"query GetFooter {
  footerSettings {
    themeFooterSettings {
      footerAddress
      footerAddressLink
      footerCopyright
      footerEmailContentBoxes { boxContent }
      footerGallery { nodes { altText sourceUrl } }
      footerLogos {
        flLink
        flLogo { node { altText sourceUrl } }
      }
      footerLogosTitle
      footerPhone
    }
  }
}",
};

pub const SOCIAL_QUERY: SectionQuery = SectionQuery {
    section: "social",
    operation: "GetSocial",
    document: r"query GetSocial {
  socialMediaSettings {
    themeSocialMediaSettings {
      facebookUrl
      instagramUrl
      linkedinUrl
      pinterestUrl
    }
  }
}",
};

pub async fn load_footer(cms: &dyn CmsQuery, images: &ImagePolicy) -> Option<FooterSettings> {
    let response: FooterResponse = cms::query_section(cms, &FOOTER_QUERY).await?;
    let mut settings = response.footer_settings?.theme_footer_settings?;
    settings.restrict_images(images);
    Some(settings)
}

pub async fn load_social(cms: &dyn CmsQuery) -> Option<SocialSettings> {
    let response: SocialResponse = cms::query_section(cms, &SOCIAL_QUERY).await?;
    response.social_media_settings?.theme_social_media_settings
}

// =============================================================================
// VIEW
// =============================================================================

/// Name shown above the footer contact column.
const SITE_NAME: &str = "The Glendale Lyceum";

#[component]
pub fn SiteFooter(settings: Option<FooterSettings>, social: Option<SocialSettings>) -> impl IntoView {
    settings.map(|settings| {
        let FooterSettings {
            footer_address,
            footer_address_link,
            footer_copyright,
            footer_email_content_boxes,
            footer_gallery,
            footer_logos,
            footer_logos_title,
            footer_phone,
        } = settings;

        let gallery = footer_gallery.map(|gallery| gallery.nodes).unwrap_or_default();
        let address = footer_address
            .filter(|address| !address.is_empty())
            .zip(non_empty(footer_address_link));
        let social_links = social.map(SocialSettings::links).unwrap_or_default();
        let logos_title = non_empty(footer_logos_title);
        let has_logos = !footer_logos.is_empty();

        view! {
            <div class="gallery image_popups">
                <div class="white_arrow">
                    {gallery.into_iter().map(gallery_slide).collect_view()}
                </div>
            </div>
            <footer class="footer">
                <img class="fern_shape" src="/images/fern-shape.svg" alt="Shape" width="24" height="16"/>
                <img class="fern_shape tr" src="/images/fern-shape.svg" alt="Shape" width="24" height="16"/>
                <div class="container">
                    <div class="row justify-content-between">
                        <div class="col-lg-9 ct_footer">
                            <h3>{SITE_NAME}</h3>
                            <div class="row tb_space">
                                <div class="col-md-6">
                                    {address.map(|(address, link)| view! {
                                        <div>
                                            <a href=link target="_blank">
                                                <i class="fa-solid fa-location-dot"></i>
                                                <div inner_html=address.into_inner()></div>
                                            </a>
                                        </div>
                                    })}
                                    {non_empty(footer_phone).map(|phone| view! {
                                        <p>
                                            <a href=format!("tel:{phone}")>
                                                <i class="fa-solid fa-phone"></i>
                                                {format!(" {phone}")}
                                            </a>
                                        </p>
                                    })}
                                </div>
                                {footer_email_content_boxes
                                    .into_iter()
                                    .map(|item| view! {
                                        <div class="col-md-6">
                                            <div inner_html=item.box_content.map(RichText::into_inner).unwrap_or_default()></div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="col-lg-3 reviewOn">
                            {logos_title.map(|title| view! { <h3>{title}</h3> })}
                            {has_logos.then(|| view! {
                                <ul>{footer_logos.into_iter().map(partner_logo).collect_view()}</ul>
                            })}
                        </div>
                    </div>
                    <div class="copyright">
                        {footer_copyright
                            .filter(|copyright| !copyright.is_empty())
                            .map(|copyright| view! { <div inner_html=copyright.into_inner()></div> })}
                        <ul class="social_media">
                            {social_links
                                .into_iter()
                                .map(|(url, icon)| view! {
                                    <li>
                                        <a href=url target="_blank">
                                            <i class=icon></i>
                                        </a>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </footer>
            <div class="go-up">
                <i class="fa-solid fa-angle-up"></i>
            </div>
        }
    })
}

fn gallery_slide(image: Image) -> impl IntoView {
    let slide = image.src().map(|src| (src.to_owned(), image.alt().to_owned()));

    view! {
        <div class="slick-item">
            {slide.map(|(src, alt)| {
                let href = src.clone();
                view! {
                    <a href=href class="fit_img">
                        <img src=src alt=alt/>
                    </a>
                }
            })}
        </div>
    }
}

fn partner_logo(logo: FooterLogo) -> impl IntoView {
    let href = non_empty(logo.fl_link).unwrap_or_else(|| "#".to_owned());
    let image = logo.fl_logo.and_then(|node| node.node).unwrap_or_default();
    let src = image.src().unwrap_or_default().to_owned();
    let alt = non_empty(image.alt_text).unwrap_or_else(|| "Logo".to_owned());

    view! {
        <li>
            <a href=href class="review_logo" target="_blank">
                <img src=src alt=alt width="100" height="100"/>
            </a>
        </li>
    }
}

#[cfg(test)]
#[path = "footer_test.rs"]
mod tests;
