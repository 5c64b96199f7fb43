//! Query selection for the `Query` operation kind.

use crate::keyspace::{KeySpace, KeySpaceError};
use query_catalog::{CatalogQuery, FieldQuery, Query, QueryName};
use rand::Rng;
use workload_core::GeneratorConfig;
use workload_generator::{Profile, SizedGenerator};

/// Achievement used when a profile earned none.
const DEFAULT_ACHIEVEMENT: i16 = 256;

/// Field lookups return between 10 and 19 rows.
const FIELD_LIMIT: std::ops::Range<u32> = 10..20;

/// Picks the next query from an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySelector {
    /// Lookup on one of the size-driven generator's indexable fields.
    Field { indexable_fields: usize },
    /// Named catalog query parameterized by the record's profile.
    Catalog { queries: Vec<QueryName> },
}

impl QuerySelector {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        match config {
            GeneratorConfig::Sized {
                indexable_fields, ..
            } => QuerySelector::Field {
                indexable_fields: *indexable_fields,
            },
            GeneratorConfig::Profile { queries, .. } => QuerySelector::Catalog {
                queries: if queries.is_empty() {
                    QueryName::ALL.to_vec()
                } else {
                    queries.clone()
                },
            },
        }
    }

    /// Draw an existing key and build a query around it.
    pub async fn select<R: Rng + ?Sized>(
        &self,
        keys: &KeySpace,
        rng: &mut R,
    ) -> Result<Query, KeySpaceError> {
        let key = keys.existing_key(rng).await?;
        Ok(self.build(&key, rng))
    }

    /// Build a query whose parameters come from the record at `key`.
    pub fn build<R: Rng + ?Sized>(&self, key: &str, rng: &mut R) -> Query {
        match self {
            QuerySelector::Field { indexable_fields } => {
                // indexable_fields > 0 whenever queries are enabled
                let index = rng.random_range(0..(*indexable_fields).max(1));
                Query::Field(FieldQuery {
                    field: SizedGenerator::field_name(index),
                    value: SizedGenerator::field_value(key, index),
                    limit: rng.random_range(FIELD_LIMIT),
                })
            }
            QuerySelector::Catalog { queries } => {
                let name = queries[rng.random_range(0..queries.len())];
                Query::Catalog(catalog_query(name, &Profile::from_key(key)))
            }
        }
    }
}

/// Fill the parameters of `name` from `profile`.
pub fn catalog_query(name: QueryName, profile: &Profile) -> CatalogQuery {
    match name {
        QueryName::NameAndStreetByCity => CatalogQuery::NameAndStreetByCity {
            city: profile.city.clone(),
        },
        QueryName::NameAndEmailByCounty => CatalogQuery::NameAndEmailByCounty {
            county: profile.county.clone(),
        },
        QueryName::AchievementsByRealm => CatalogQuery::AchievementsByRealm {
            realm: profile.realm.clone(),
        },
        QueryName::NameByCoins => CatalogQuery::NameByCoins {
            coins: profile.coins,
        },
        QueryName::EmailByAchievementAndCategory => CatalogQuery::EmailByAchievementAndCategory {
            achievement: profile
                .achievements
                .first()
                .copied()
                .unwrap_or(DEFAULT_ACHIEVEMENT),
            category: profile.category,
        },
        QueryName::StreetByYearAndCoins => CatalogQuery::StreetByYearAndCoins {
            year: profile.year,
            coins: profile.coins,
        },
        QueryName::NameAndEmailAndStreetAndAchievementsAndCoinsByCity => {
            CatalogQuery::NameAndEmailAndStreetAndAchievementsAndCoinsByCity {
                city: profile.city.clone(),
            }
        }
        QueryName::StreetAndNameAndEmailAndAchievementAndCoinsByCounty => {
            CatalogQuery::StreetAndNameAndEmailAndAchievementAndCoinsByCounty {
                county: profile.county.clone(),
            }
        }
        QueryName::CategoryNameAndEmailAndStreetAndGmtimeAndYearByCountry => {
            CatalogQuery::CategoryNameAndEmailAndStreetAndGmtimeAndYearByCountry {
                country: profile.country.clone(),
            }
        }
        QueryName::BodyByCity => CatalogQuery::BodyByCity {
            city: profile.city.clone(),
        },
        QueryName::BodyByRealm => CatalogQuery::BodyByRealm {
            realm: profile.realm.clone(),
        },
        QueryName::BodyByCountry => CatalogQuery::BodyByCountry {
            country: profile.country.clone(),
        },
        QueryName::DistinctStates => CatalogQuery::DistinctStates,
        QueryName::DistinctFullStates => CatalogQuery::DistinctFullStates,
        QueryName::DistinctYears => CatalogQuery::DistinctYears,
        QueryName::CoinsStatsByStateAndYear => CatalogQuery::CoinsStatsByStateAndYear {
            state: profile.state.to_string(),
            year: profile.year,
        },
        QueryName::CoinsStatsByGmtimeAndYear => CatalogQuery::CoinsStatsByGmtimeAndYear {
            gmtime: profile.gmtime,
            year: profile.year,
        },
        QueryName::CoinsStatsByFullStateAndYear => CatalogQuery::CoinsStatsByFullStateAndYear {
            full_state: profile.full_state.to_string(),
            year: profile.year,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use workload_generator::KeyFormat;

    #[test]
    fn test_field_query_reads_key_window() {
        let selector = QuerySelector::Field {
            indexable_fields: 3,
        };
        let key = KeyFormat::Hashed.encode(17);
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..100 {
            let Query::Field(query) = selector.build(&key, &mut rng) else {
                panic!("expected a field query");
            };
            let index: usize = query.field.trim_start_matches("field").parse().unwrap();
            assert!(index < 3);
            assert_eq!(query.value, format!("field{index}-{}", &key[index..index + 10]));
            assert!(FIELD_LIMIT.contains(&query.limit));
        }
    }

    #[test]
    fn test_catalog_selection_respects_configured_names() {
        let selector = QuerySelector::Catalog {
            queries: vec![QueryName::BodyByCity, QueryName::DistinctYears],
        };
        let mut rng = StdRng::seed_from_u64(8);
        let key = KeyFormat::Padded.encode(3);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            match selector.build(&key, &mut rng) {
                Query::Catalog(query) => {
                    seen.insert(query.name());
                }
                Query::Field(_) => panic!("profile mode produced a field query"),
            }
        }
        assert_eq!(seen.len(), 2);
        assert!(seen.contains(&QueryName::BodyByCity));
        assert!(seen.contains(&QueryName::DistinctYears));
    }

    #[test]
    fn test_empty_query_list_means_all() {
        let selector = QuerySelector::from_config(&GeneratorConfig::Profile {
            hot_data_percentage: 0,
            hot_access_percentage: 0,
            queries: vec![],
        });
        assert_eq!(
            selector,
            QuerySelector::Catalog {
                queries: QueryName::ALL.to_vec()
            }
        );
    }

    #[test]
    fn test_catalog_parameters_come_from_profile() {
        let key = KeyFormat::Padded.encode(42);
        let profile = Profile::from_key(&key);

        for name in QueryName::ALL {
            assert_eq!(catalog_query(name, &profile).name(), name);
        }

        assert_eq!(
            catalog_query(QueryName::BodyByRealm, &profile),
            CatalogQuery::BodyByRealm {
                realm: profile.realm.clone()
            }
        );
        assert_eq!(
            catalog_query(QueryName::CoinsStatsByGmtimeAndYear, &profile),
            CatalogQuery::CoinsStatsByGmtimeAndYear {
                gmtime: profile.gmtime,
                year: profile.year,
            }
        );
    }

    #[test]
    fn test_achievement_fallback() {
        let mut profile = Profile::from_key("000000000001");
        profile.achievements.clear();
        assert_eq!(
            catalog_query(QueryName::EmailByAchievementAndCategory, &profile),
            CatalogQuery::EmailByAchievementAndCategory {
                achievement: DEFAULT_ACHIEVEMENT,
                category: profile.category,
            }
        );
    }
}
