//! Home page assembly: load every section concurrently, then render.
//!
//! Each section is independently optional: one failed query removes one
//! block from the page and nothing else.

use leptos::prelude::*;

use crate::cms::{CmsQuery, ImagePolicy};
use crate::config::SiteConfig;
use crate::contact::{ContactForm, ContactFormView};
use crate::sections::billboard::{BillboardSettings, HomeBillboard, load_billboard};
use crate::sections::footer::{FooterSettings, SiteFooter, SocialSettings, load_footer, load_social};
use crate::sections::funding::{FundingSettings, HomeFunding, load_funding};
use crate::sections::header::{HeaderSettings, Menu, SiteHeader, load_header, load_menu};
use crate::sections::why::{HomeWhy, WhySettings, load_why};
use crate::sections::render;

/// Everything the home page shows, one optional record per query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageData {
    pub header: Option<HeaderSettings>,
    pub menu: Option<Menu>,
    pub footer: Option<FooterSettings>,
    pub social: Option<SocialSettings>,
    pub billboard: Option<BillboardSettings>,
    pub funding: Option<FundingSettings>,
    pub why: Option<WhySettings>,
}

impl PageData {
    /// Number of sections that loaded.
    #[must_use]
    pub fn loaded(&self) -> usize {
        [
            self.header.is_some(),
            self.menu.is_some(),
            self.footer.is_some(),
            self.social.is_some(),
            self.billboard.is_some(),
            self.funding.is_some(),
            self.why.is_some(),
        ]
        .into_iter()
        .filter(|loaded| *loaded)
        .count()
    }
}

/// Run every section query concurrently.
pub async fn load_page(cms: &dyn CmsQuery, config: &SiteConfig) -> PageData {
    let images = ImagePolicy::from_config(config);

    let (header, menu, footer, social, billboard, funding, why) = tokio::join!(
        load_header(cms, &images),
        load_menu(cms),
        load_footer(cms, &images),
        load_social(cms),
        load_billboard(cms, &images),
        load_funding(cms, &images),
        load_why(cms, &images),
    );

    let data = PageData { header, menu, footer, social, billboard, funding, why };
    tracing::debug!(loaded = data.loaded(), "page data loaded");
    data
}

#[component]
pub fn HomePage(data: PageData, form: ContactForm) -> impl IntoView {
    let PageData { header, menu, footer, social, billboard, funding, why } = data;

    view! {
        <div class="site_wrapper">
            <SiteHeader settings=header menu=menu/>
            <main class="main_wrapper">
                <HomeBillboard settings=billboard/>
                <HomeFunding settings=funding/>
                <HomeWhy settings=why/>
                <ContactFormView form=form/>
            </main>
            <SiteFooter settings=footer social=social/>
        </div>
    }
}

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>The Glendale Lyceum</title>
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Libre+Baskerville:wght@400;700&family=Poppins:wght@400;700&display=swap">
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@fortawesome/fontawesome-free@6.5.2/css/all.min.css">
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/slick-carousel@1.8.1/slick/slick.css">
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/slick-carousel@1.8.1/slick/slick-theme.css">
</head>
<body>
"#;

const DOCUMENT_TAIL: &str = "\n</body>\n</html>\n";

/// Full HTML document for the home page.
#[must_use]
pub fn render_document(data: PageData, form: ContactForm) -> String {
    let body = render(move || view! { <HomePage data=data form=form/> });
    let mut html = String::with_capacity(DOCUMENT_HEAD.len() + body.len() + DOCUMENT_TAIL.len());
    html.push_str(DOCUMENT_HEAD);
    html.push_str(&body);
    html.push_str(DOCUMENT_TAIL);
    html
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
