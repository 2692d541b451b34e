//! `runQuery` request body.

use serde::Serialize;
use travthru_store::ArticleQuery;

use crate::value::Value;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RunQueryRequest {
    pub structured_query: StructuredQuery,
}

#[derive(Debug, Serialize)]
pub(crate) struct StructuredQuery {
    pub from: Vec<CollectionSelector>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CollectionSelector {
    pub collection_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum Filter {
    FieldFilter(FieldFilter),
    CompositeFilter(CompositeFilter),
}

#[derive(Debug, Serialize)]
pub(crate) struct FieldFilter {
    pub field: FieldReference,
    pub op: &'static str,
    pub value: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FieldReference {
    pub field_path: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CompositeFilter {
    pub op: &'static str,
    pub filters: Vec<Filter>,
}

impl RunQueryRequest {
    /// Translate an article query against `collection`.
    ///
    /// One condition becomes a plain field filter; several are joined with
    /// `AND`. Limits beyond `i32::MAX` are clamped.
    pub(crate) fn new(collection: &str, query: &ArticleQuery) -> Self {
        let mut filters = Vec::new();
        if let Some(slug) = &query.slug {
            filters.push(equal("slug", Value::StringValue(slug.clone())));
        }
        if let Some(published) = query.published {
            filters.push(equal("published", Value::BooleanValue(published)));
        }

        let filter = match filters.len() {
            0 => None,
            1 => filters.pop(),
            _ => Some(Filter::CompositeFilter(CompositeFilter {
                op: "AND",
                filters,
            })),
        };

        Self {
            structured_query: StructuredQuery {
                from: vec![CollectionSelector {
                    collection_id: collection.to_owned(),
                }],
                filter,
                limit: query
                    .limit
                    .map(|limit| i32::try_from(limit).unwrap_or(i32::MAX)),
            },
        }
    }
}

fn equal(field_path: &'static str, value: Value) -> Filter {
    Filter::FieldFilter(FieldFilter {
        field: FieldReference { field_path },
        op: "EQUAL",
        value,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_slug_lookup_query() {
        let query = ArticleQuery::published().with_slug("klia").with_limit(1);
        let body = serde_json::to_value(RunQueryRequest::new("car-rental-articles", &query)).unwrap();

        assert_eq!(
            body,
            json!({
                "structuredQuery": {
                    "from": [{"collectionId": "car-rental-articles"}],
                    "where": {"compositeFilter": {
                        "op": "AND",
                        "filters": [
                            {"fieldFilter": {
                                "field": {"fieldPath": "slug"},
                                "op": "EQUAL",
                                "value": {"stringValue": "klia"}
                            }},
                            {"fieldFilter": {
                                "field": {"fieldPath": "published"},
                                "op": "EQUAL",
                                "value": {"booleanValue": true}
                            }}
                        ]
                    }},
                    "limit": 1
                }
            })
        );
    }

    #[test]
    fn test_single_filter_not_wrapped() {
        let query = ArticleQuery::published().with_limit(3);
        let body = serde_json::to_value(RunQueryRequest::new("articles", &query)).unwrap();

        assert_eq!(
            body["structuredQuery"]["where"],
            json!({"fieldFilter": {
                "field": {"fieldPath": "published"},
                "op": "EQUAL",
                "value": {"booleanValue": true}
            }})
        );
        assert_eq!(body["structuredQuery"]["limit"], json!(3));
    }

    #[test]
    fn test_unfiltered_query_omits_where_and_limit() {
        let body =
            serde_json::to_value(RunQueryRequest::new("articles", &ArticleQuery::default())).unwrap();

        assert_eq!(
            body,
            json!({"structuredQuery": {"from": [{"collectionId": "articles"}]}})
        );
    }

    #[test]
    fn test_huge_limit_clamped() {
        let query = ArticleQuery::default().with_limit(usize::MAX);
        let request = RunQueryRequest::new("articles", &query);

        assert_eq!(request.structured_query.limit, Some(i32::MAX));
    }
}
