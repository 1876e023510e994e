use super::*;
use crate::filter::selected;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub industry: Option<String>,
    /// `all` or empty leaves pricing unfiltered, like the other selectors.
    pub pricing: Option<String>,
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub sort: Sort,
    pub page: Option<usize>,
}

impl TryFrom<BrowseQuery> for Browse {
    type Error = String;
    fn try_from(query: BrowseQuery) -> Result<Self, Self::Error> {
        let pricing = selected(&query.pricing).map(|p| Pricing::try_from(p)).transpose()?;
        Ok(Browse::new(
            Filter {
                q: query.q,
                category: query.category,
                industry: query.industry,
                pricing,
                new: query.new,
            },
            query.sort,
            query.page.unwrap_or(1),
        ))
    }
}

pub async fn browse(path: web::Path<String>, query: web::Query<BrowseQuery>) -> impl Responder {
    match Tab::try_from(path.as_str()) {
        Err(e) => HttpResponse::NotFound().body(e),
        Ok(tab) => match Browse::try_from(query.into_inner()) {
            Err(e) => HttpResponse::BadRequest().body(e),
            Ok(browse) => {
                log::debug!("browsing {} page {} by {:?}", tab, browse.page(), browse.sort());
                HttpResponse::Ok().json(browse.view(tab.listings()))
            }
        },
    }
}

pub async fn facets(path: web::Path<String>) -> impl Responder {
    match Tab::try_from(path.as_str()) {
        Err(e) => HttpResponse::NotFound().body(e),
        Ok(tab) => HttpResponse::Ok().json(Facets::from(tab.listings())),
    }
}

pub async fn detail(path: web::Path<(String, String)>) -> impl Responder {
    let (tab, id) = path.into_inner();
    match Tab::try_from(tab.as_str()).map(|tab| tab.find(&id)) {
        Err(e) => HttpResponse::NotFound().body(e),
        Ok(None) => HttpResponse::NotFound().body(format!("no listing {} in {}", id, tab)),
        Ok(Some(listing)) => HttpResponse::Ok().json(listing),
    }
}
