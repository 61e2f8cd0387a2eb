//! Query Module
//!
//! Pure lookup, filter and sort operations over a product slice. None of them
//! mutate their input; filters and sorts return new vectors.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::catalog::Product;

/// Filter value the site's selectors use for "no filter".
const ALL_TOKEN: &str = "all";

// == Sort Direction ==
/// Direction for [`sort_by_price`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parses the `price-asc` / `price-desc` tokens used in query strings.
    ///
    /// Anything else (including `all` or an empty value) means "keep source order".
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "price-asc" => Some(SortDirection::Ascending),
            "price-desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

/// First product with the given id.
pub fn find_by_id<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}

/// Products whose type equals `product_type` exactly.
///
/// `None` or an empty value passes the input through unchanged.
pub fn filter_by_type(products: &[Product], product_type: Option<&str>) -> Vec<Product> {
    filter_exact(products, product_type, |p| &p.product_type)
}

/// Products whose category equals `category` exactly.
///
/// `None` or an empty value passes the input through unchanged.
pub fn filter_by_category(products: &[Product], category: Option<&str>) -> Vec<Product> {
    filter_exact(products, category, |p| &p.category)
}

fn filter_exact<F>(products: &[Product], wanted: Option<&str>, field: F) -> Vec<Product>
where
    F: Fn(&Product) -> &String,
{
    match wanted.filter(|w| !w.is_empty()) {
        Some(wanted) => products
            .iter()
            .filter(|&p| field(p) == wanted)
            .cloned()
            .collect(),
        None => products.to_vec(),
    }
}

/// Stable sort by price; equal prices keep their relative order.
pub fn sort_by_price(products: &[Product], direction: SortDirection) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| a.price_cents.cmp(&b.price_cents)),
        SortDirection::Descending => sorted.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
    }
    sorted
}

/// Sorted set of non-blank product types.
pub fn distinct_types(products: &[Product]) -> BTreeSet<String> {
    distinct(products, |p| &p.product_type)
}

/// Sorted set of non-blank product categories.
pub fn distinct_categories(products: &[Product]) -> BTreeSet<String> {
    distinct(products, |p| &p.category)
}

fn distinct<F>(products: &[Product], field: F) -> BTreeSet<String>
where
    F: Fn(&Product) -> &String,
{
    products
        .iter()
        .map(field)
        .filter(|value| !value.trim().is_empty())
        .cloned()
        .collect()
}

// == Product Query ==
/// Combined filter and sort options, as carried in the listing query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductQuery {
    /// Exact type to keep
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,
    /// Exact category to keep
    #[serde(default)]
    pub category: Option<String>,
    /// `price-asc` or `price-desc`
    #[serde(default)]
    pub sort: Option<String>,
}

impl ProductQuery {
    /// Applies type filter, category filter, then price sort.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let filtered = filter_by_type(products, selected(&self.product_type));
        let filtered = filter_by_category(&filtered, selected(&self.category));

        match self.sort.as_deref().and_then(SortDirection::from_token) {
            Some(direction) => sort_by_price(&filtered, direction),
            None => filtered,
        }
    }
}

fn selected(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| *v != ALL_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_cents: u64, product_type: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            price_cents,
            currency: "TRY".to_string(),
            product_type: product_type.to_string(),
            category: category.to_string(),
            description: String::new(),
            image_url: None,
            in_stock: true,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product("1", 500, "plant", "indoor"),
            product("2", 500, "pot", "outdoor"),
            product("3", 300, "plant", "outdoor"),
            product("4", 900, "", "indoor"),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_find_by_id() {
        let products = sample();
        assert_eq!(find_by_id(&products, "3").map(|p| p.price_cents), Some(300));
        assert!(find_by_id(&products, "missing").is_none());
        assert!(find_by_id(&[], "1").is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let mut products = sample();
        products.push(product("1", 1, "dup", "dup"));
        assert_eq!(find_by_id(&products, "1").map(|p| p.price_cents), Some(500));
    }

    #[test]
    fn test_filter_by_type_exact_match() {
        let products = sample();
        assert_eq!(ids(&filter_by_type(&products, Some("plant"))), ["1", "3"]);
        assert!(filter_by_type(&products, Some("Plant")).is_empty());
    }

    #[test]
    fn test_filter_pass_through() {
        let products = sample();
        assert_eq!(filter_by_type(&products, None), products);
        assert_eq!(filter_by_type(&products, Some("")), products);
        assert_eq!(filter_by_category(&products, None), products);
    }

    #[test]
    fn test_filter_by_category() {
        let products = sample();
        assert_eq!(
            ids(&filter_by_category(&products, Some("outdoor"))),
            ["2", "3"]
        );
    }

    #[test]
    fn test_sort_by_price_is_stable() {
        let products = vec![
            product("1", 500, "", ""),
            product("2", 500, "", ""),
            product("3", 300, "", ""),
        ];
        assert_eq!(
            ids(&sort_by_price(&products, SortDirection::Ascending)),
            ["3", "1", "2"]
        );
        assert_eq!(
            ids(&sort_by_price(&products, SortDirection::Descending)),
            ["1", "2", "3"]
        );
        // input untouched
        assert_eq!(ids(&products), ["1", "2", "3"]);
    }

    #[test]
    fn test_distinct_values_skip_blanks() {
        let products = sample();
        let types: Vec<String> = distinct_types(&products).into_iter().collect();
        assert_eq!(types, ["plant", "pot"]);
        let categories: Vec<String> = distinct_categories(&products).into_iter().collect();
        assert_eq!(categories, ["indoor", "outdoor"]);
    }

    #[test]
    fn test_sort_direction_tokens() {
        assert_eq!(
            SortDirection::from_token("price-asc"),
            Some(SortDirection::Ascending)
        );
        assert_eq!(
            SortDirection::from_token("price-desc"),
            Some(SortDirection::Descending)
        );
        assert_eq!(SortDirection::from_token("all"), None);
        assert_eq!(SortDirection::from_token(""), None);
    }

    #[test]
    fn test_product_query_apply() {
        let query = ProductQuery {
            product_type: Some("plant".to_string()),
            category: None,
            sort: Some("price-asc".to_string()),
        };
        assert_eq!(ids(&query.apply(&sample())), ["3", "1"]);
    }

    #[test]
    fn test_product_query_all_means_unfiltered() {
        let query = ProductQuery {
            product_type: Some("all".to_string()),
            category: Some("all".to_string()),
            sort: Some("all".to_string()),
        };
        assert_eq!(query.apply(&sample()), sample());
        assert_eq!(ProductQuery::default().apply(&sample()), sample());
    }
}
