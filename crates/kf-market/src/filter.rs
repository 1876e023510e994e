use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Active selector values. Every set field is one AND-ed predicate;
/// an empty or `all` selector is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    #[serde(default)]
    pub new: bool,
}

pub(crate) fn selected(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

impl Filter {
    pub fn cleared(&self) -> bool {
        selected(&self.q).is_none()
            && selected(&self.category).is_none()
            && selected(&self.industry).is_none()
            && self.pricing.is_none()
            && !self.new
    }
    pub fn matches(&self, listing: &Listing) -> bool {
        let query = selected(&self.q).map(str::to_lowercase);
        self.matches_with(listing, query.as_deref())
    }
    fn matches_with(&self, listing: &Listing, query: Option<&str>) -> bool {
        query.map_or(true, |q| {
            [listing.name, listing.provider, listing.description, listing.category]
                .iter()
                .any(|field| field.to_lowercase().contains(q))
        }) && selected(&self.category).map_or(true, |c| listing.category.eq_ignore_ascii_case(c))
            && selected(&self.industry).map_or(true, |i| listing.industry.eq_ignore_ascii_case(i))
            && self.pricing.map_or(true, |p| listing.pricing == p)
            && (!self.new || listing.new)
    }
    /// Narrow the full dataset, keeping dataset order.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        let query = selected(&self.q).map(str::to_lowercase);
        listings
            .iter()
            .filter(|l| self.matches_with(l, query.as_deref()))
            .collect()
    }
}

/// Result ordering. `Relevance` keeps dataset order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sort {
    #[default]
    Relevance,
    Rating,
    Name,
}

impl Sort {
    pub fn order(&self, listings: &mut [&Listing]) {
        match self {
            Self::Relevance => {}
            Self::Rating => listings.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            Self::Name => listings.sort_by_key(|l| l.name.to_lowercase()),
        }
    }
}

/// Distinct selector values of a dataset, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub categories: Vec<&'static str>,
    pub industries: Vec<&'static str>,
}

impl From<&[Listing]> for Facets {
    fn from(listings: &[Listing]) -> Self {
        let mut facets = Self::default();
        for listing in listings {
            if !facets.categories.contains(&listing.category) {
                facets.categories.push(listing.category);
            }
            if !facets.industries.contains(&listing.industry) {
                facets.industries.push(listing.industry);
            }
        }
        facets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_filter() -> Vec<Filter> {
        let data = Tab::Financial.listings();
        let facets = Facets::from(data);
        let categories = std::iter::once(None).chain(facets.categories.iter().map(|c| Some(c.to_string())));
        let mut filters = Vec::new();
        for category in categories {
            for industry in std::iter::once(None).chain(facets.industries.iter().map(|i| Some(i.to_string()))) {
                for pricing in [None, Some(Pricing::Free), Some(Pricing::Subsidised), Some(Pricing::Paid)] {
                    for new in [false, true] {
                        filters.push(Filter {
                            q: None,
                            category: category.clone(),
                            industry: industry.clone(),
                            pricing,
                            new,
                        });
                    }
                }
            }
        }
        filters
    }

    #[test]
    fn results_are_subsets_and_idempotent() {
        let data = Tab::Financial.listings();
        for filter in every_filter() {
            let once = filter.apply(data);
            assert!(once.iter().all(|l| data.iter().any(|d| d.id == l.id)));
            assert!(once.iter().all(|l| filter.matches(l)));
            assert_eq!(once, filter.apply(data));
        }
    }
    #[test]
    fn cleared_filter_is_identity() {
        for tab in Tab::ALL {
            let data = tab.listings();
            let all = Filter::default().apply(data);
            assert_eq!(all.len(), data.len());
            assert!(all.iter().zip(data.iter()).all(|(a, b)| a.id == b.id));
        }
        let all = Filter {
            category: Some("All".into()),
            q: Some("  ".into()),
            ..Filter::default()
        };
        assert!(all.cleared());
        assert_eq!(all.apply(Tab::Courses.listings()).len(), Tab::Courses.listings().len());
    }
    #[test]
    fn query_is_case_insensitive() {
        let data = Tab::Financial.listings();
        let filter = Filter {
            q: Some("LOAN".into()),
            ..Filter::default()
        };
        let found = filter.apply(data);
        assert!(!found.is_empty());
        assert!(found.iter().all(|l| {
            [l.name, l.provider, l.description, l.category]
                .iter()
                .any(|f| f.to_lowercase().contains("loan"))
        }));
    }
    #[test]
    fn predicates_are_conjunctive() {
        let data = Tab::Financial.listings();
        let filter = Filter {
            pricing: Some(Pricing::Subsidised),
            new: true,
            ..Filter::default()
        };
        for listing in filter.apply(data) {
            assert!(listing.new);
            assert_eq!(listing.pricing, Pricing::Subsidised);
        }
    }
    #[test]
    fn rating_sort_is_descending() {
        let mut listings = Filter::default().apply(Tab::Courses.listings());
        Sort::Rating.order(&mut listings);
        assert!(listings.windows(2).all(|w| w[0].rating >= w[1].rating));
    }
    #[test]
    fn facets_are_distinct() {
        let facets = Facets::from(Tab::NonFinancial.listings());
        for (i, category) in facets.categories.iter().enumerate() {
            assert!(!facets.categories[..i].contains(category));
        }
        assert!(!facets.industries.is_empty());
    }
}
