//! Site header: logo, contact shortcuts, call-to-action buttons, primary menu.

use leptos::prelude::*;
use serde::Deserialize;

use super::non_empty;
use crate::cms::types::nullable_list;
use crate::cms::{self, Button, CmsQuery, ImageNode, ImagePolicy, RestrictImages, SectionQuery};

// =============================================================================
// SHAPES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderSettings {
    pub header_button1: Option<Button>,
    pub header_button2: Option<Button>,
    pub header_email: Option<String>,
    pub header_logo: Option<ImageNode>,
    pub header_phone: Option<String>,
}

impl RestrictImages for HeaderSettings {
    fn restrict_images(&mut self, policy: &ImagePolicy) {
        if let Some(logo) = self.header_logo.as_mut() {
            logo.restrict(policy);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub label: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuItems {
    #[serde(deserialize_with = "nullable_list")]
    pub nodes: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Menu {
    pub menu_items: Option<MenuItems>,
}

impl Menu {
    #[must_use]
    pub fn into_items(self) -> Vec<MenuItem> {
        self.menu_items.map(|items| items.nodes).unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeaderResponse {
    #[serde(default)]
    header_settings: Option<HeaderGroup>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeaderGroup {
    #[serde(default)]
    theme_header_settings: Option<HeaderSettings>,
}

#[derive(Deserialize)]
struct MenuResponse {
    #[serde(default)]
    menus: Option<MenuConnection>,
}

#[derive(Deserialize)]
struct MenuConnection {
    #[serde(default, deserialize_with = "nullable_list")]
    nodes: Vec<Menu>,
}

// =============================================================================
// LOADERS
// =============================================================================

pub const HEADER_QUERY: SectionQuery = SectionQuery {
    section: "header",
    operation: "GetHeader",
    document: r"query GetHeader {
  headerSettings {
    themeHeaderSettings {
      headerButton1 { target title url }
      headerButton2 { target title url }
      headerEmail
      headerLogo { node { altText sourceUrl } }
      headerPhone
    }
  }
}",
};

pub const MENU_QUERY: SectionQuery = SectionQuery {
    section: "menu",
    operation: "GetMenu",
    document: r"query GetMenu {
  menus(where: { location: PRIMARY }) {
    nodes {
      menuItems { nodes { label uri } }
    }
  }
}",
};

/// Header settings, or `None` if the query fails or returns nothing.
pub async fn load_header(cms: &dyn CmsQuery, images: &ImagePolicy) -> Option<HeaderSettings> {
    let response: HeaderResponse = cms::query_section(cms, &HEADER_QUERY).await?;
    let mut settings = response.header_settings?.theme_header_settings?;
    settings.restrict_images(images);
    Some(settings)
}

/// First menu assigned to the primary location.
pub async fn load_menu(cms: &dyn CmsQuery) -> Option<Menu> {
    let response: MenuResponse = cms::query_section(cms, &MENU_QUERY).await?;
    response.menus?.nodes.into_iter().next()
}

// =============================================================================
// VIEW
// =============================================================================

#[component]
pub fn SiteHeader(settings: Option<HeaderSettings>, menu: Option<Menu>) -> impl IntoView {
    settings.map(|settings| {
        let HeaderSettings { header_button1, header_button2, header_email, header_logo, header_phone } = settings;
        let logo = header_logo.and_then(|logo| logo.image().cloned());
        let items = menu.map(Menu::into_items).unwrap_or_default();

        view! {
            <header class="header">
                <div class="container-fluid">
                    <div class="logo">
                        {logo.map(|image| {
                            let src = image.src().unwrap_or_default().to_owned();
                            let alt = image.alt().to_owned();
                            view! {
                                <a href="/">
                                    <img src=src alt=alt.clone() title=alt width="500" height="200"/>
                                </a>
                            }
                        })}
                    </div>
                    <div class="main_header">
                        <div class="top_header">
                            {non_empty(header_phone).map(|phone| view! {
                                <a class="my_btn sm lightBtn" href=format!("tel:{phone}")>
                                    <i class="fa-solid fa-phone"></i>
                                </a>
                            })}
                            {non_empty(header_email).map(|email| view! {
                                <a class="my_btn sm lightBtn" href=format!("mailto:{email}")>
                                    <i class="fa-solid fa-envelope"></i>
                                </a>
                            })}
                            {header_button1.map(|button| view! {
                                <a href=button.href() class="my_btn sm lightBtn" target=button.target()>
                                    {button.label()}
                                </a>
                            })}
                            {header_button2.map(|button| view! {
                                <a href=button.href() class="my_btn sm" target=button.target()>
                                    {button.label()}
                                </a>
                            })}
                        </div>
                        <div class="mainmenu">
                            <ul class="slimmenu">
                                {items
                                    .into_iter()
                                    .map(|item| view! {
                                        <li>
                                            <a href=item.uri.unwrap_or_default()>{item.label.unwrap_or_default()}</a>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>
            </header>
            <div class="clearfix"></div>
        }
    })
}

#[cfg(test)]
#[path = "header_test.rs"]
mod tests;
