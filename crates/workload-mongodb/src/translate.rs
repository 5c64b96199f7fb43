//! Queries to MongoDB commands.

use bson::{doc, Bson, Document};
use query_catalog::{CatalogQuery, Query};

const CATALOG_LIMIT: i64 = 20;

/// Upper bound on coins in `StreetByYearAndCoins`.
const MAX_COINS: f64 = 655.35;

/// A MongoDB command equivalent to a workload query.
#[derive(Debug, Clone, PartialEq)]
pub enum MongoQuery {
    Find {
        filter: Document,
        projection: Option<Document>,
        limit: i64,
    },
    Distinct {
        field: &'static str,
    },
    Aggregate {
        pipeline: Vec<Document>,
    },
}

fn find(filter: Document, fields: &[&str]) -> MongoQuery {
    let projection = (!fields.is_empty()).then(|| {
        fields
            .iter()
            .map(|field| (field.to_string(), Bson::Int32(1)))
            .collect()
    });
    MongoQuery::Find {
        filter,
        projection,
        limit: CATALOG_LIMIT,
    }
}

fn coins_stats(filter: Document, group_by: Document) -> MongoQuery {
    MongoQuery::Aggregate {
        pipeline: vec![
            doc! { "$match": filter },
            doc! {
                "$group": {
                    "_id": group_by,
                    "count": { "$sum": 1 },
                    "sum": { "$sum": "$coins" },
                    "avg": { "$avg": "$coins" },
                    "min": { "$min": "$coins" },
                    "max": { "$max": "$coins" },
                }
            },
            doc! { "$limit": CATALOG_LIMIT },
        ],
    }
}

pub fn translate(query: &Query) -> MongoQuery {
    match query {
        Query::Field(field) => {
            let mut filter = Document::new();
            filter.insert(field.field.clone(), field.value.clone());
            MongoQuery::Find {
                filter,
                projection: None,
                limit: i64::from(field.limit),
            }
        }
        Query::Catalog(query) => translate_catalog(query),
    }
}

fn translate_catalog(query: &CatalogQuery) -> MongoQuery {
    match query {
        CatalogQuery::NameAndStreetByCity { city } => {
            find(doc! { "city": city.as_str() }, &["name", "street"])
        }
        CatalogQuery::NameAndEmailByCounty { county } => {
            find(doc! { "county": county.as_str() }, &["name", "email"])
        }
        CatalogQuery::AchievementsByRealm { realm } => {
            find(doc! { "realm": realm.as_str() }, &["achievements"])
        }
        CatalogQuery::NameByCoins { coins } => find(
            doc! { "coins": { "$gt": coins * 0.5, "$lt": *coins } },
            &["name"],
        ),
        CatalogQuery::EmailByAchievementAndCategory {
            achievement,
            category,
        } => find(
            doc! {
                "category": i64::from(*category),
                "achievements.0": { "$gt": 0_i64, "$lt": i64::from(*achievement) },
            },
            &["email"],
        ),
        CatalogQuery::StreetByYearAndCoins { year, coins } => find(
            doc! {
                "year": i64::from(*year),
                "coins": { "$gt": *coins, "$lt": MAX_COINS },
            },
            &["street"],
        ),
        CatalogQuery::NameAndEmailAndStreetAndAchievementsAndCoinsByCity { city } => find(
            doc! { "city": city.as_str() },
            &["name", "email", "street", "achievements", "coins"],
        ),
        CatalogQuery::StreetAndNameAndEmailAndAchievementAndCoinsByCounty { county } => find(
            doc! { "county": county.as_str() },
            &["street", "name", "email", "achievements", "coins"],
        ),
        CatalogQuery::CategoryNameAndEmailAndStreetAndGmtimeAndYearByCountry { country } => find(
            doc! { "country": country.as_str() },
            &["category", "name", "email", "street", "gmtime", "year"],
        ),
        CatalogQuery::BodyByCity { city } => find(doc! { "city": city.as_str() }, &[]),
        CatalogQuery::BodyByRealm { realm } => find(doc! { "realm": realm.as_str() }, &[]),
        CatalogQuery::BodyByCountry { country } => {
            find(doc! { "country": country.as_str() }, &[])
        }
        CatalogQuery::DistinctStates => MongoQuery::Distinct { field: "state" },
        CatalogQuery::DistinctFullStates => MongoQuery::Distinct {
            field: "full_state",
        },
        CatalogQuery::DistinctYears => MongoQuery::Distinct { field: "year" },
        CatalogQuery::CoinsStatsByStateAndYear { state, year } => coins_stats(
            doc! { "state": state.as_str(), "year": i64::from(*year) },
            doc! { "state": "$state", "year": "$year" },
        ),
        CatalogQuery::CoinsStatsByGmtimeAndYear { gmtime, year } => {
            let gmtime: Vec<Bson> = gmtime.iter().map(|v| Bson::Int64(i64::from(*v))).collect();
            coins_stats(
                doc! { "gmtime": gmtime, "year": i64::from(*year) },
                doc! { "gmtime": "$gmtime", "year": "$year" },
            )
        }
        CatalogQuery::CoinsStatsByFullStateAndYear { full_state, year } => coins_stats(
            doc! { "full_state": full_state.as_str(), "year": i64::from(*year) },
            doc! { "full_state": "$full_state", "year": "$year" },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query_catalog::{FieldQuery, QueryName};
    use workload_generator::Profile;

    #[test]
    fn test_field_query() {
        let query = Query::Field(FieldQuery {
            field: "field2".to_string(),
            value: "field2-abcdef0123".to_string(),
            limit: 12,
        });
        assert_eq!(
            translate(&query),
            MongoQuery::Find {
                filter: doc! { "field2": "field2-abcdef0123" },
                projection: None,
                limit: 12,
            }
        );
    }

    #[test]
    fn test_projection_and_filter() {
        let query = Query::Catalog(CatalogQuery::NameAndStreetByCity {
            city: "c0ffee".to_string(),
        });
        assert_eq!(
            translate(&query),
            MongoQuery::Find {
                filter: doc! { "city": "c0ffee" },
                projection: Some(doc! { "name": 1, "street": 1 }),
                limit: 20,
            }
        );
    }

    #[test]
    fn test_coins_range() {
        let query = Query::Catalog(CatalogQuery::NameByCoins { coins: 10.0 });
        let MongoQuery::Find { filter, .. } = translate(&query) else {
            panic!("expected find");
        };
        assert_eq!(filter, doc! { "coins": { "$gt": 5.0, "$lt": 10.0 } });
    }

    #[test]
    fn test_distinct_and_aggregate() {
        assert_eq!(
            translate(&Query::Catalog(CatalogQuery::DistinctYears)),
            MongoQuery::Distinct { field: "year" }
        );

        let query = Query::Catalog(CatalogQuery::CoinsStatsByStateAndYear {
            state: "CT".to_string(),
            year: 1990,
        });
        let MongoQuery::Aggregate { pipeline } = translate(&query) else {
            panic!("expected aggregate");
        };
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline[0], doc! { "$match": { "state": "CT", "year": 1990_i64 } });
        assert_eq!(pipeline[2], doc! { "$limit": 20_i64 });
    }

    #[test]
    fn test_every_catalog_query_translates() {
        let profile = Profile::from_key("000000000123");
        for name in QueryName::ALL {
            let query = Query::Catalog(workload_engine::query::catalog_query(name, &profile));
            match translate(&query) {
                MongoQuery::Find { limit, .. } => assert_eq!(limit, CATALOG_LIMIT),
                MongoQuery::Distinct { field } => assert!(!field.is_empty()),
                MongoQuery::Aggregate { pipeline } => assert!(!pipeline.is_empty()),
            }
        }
    }
}
