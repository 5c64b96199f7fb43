//! Query shapes and their N1QL renderings.

use crate::name::QueryName;

/// Upper bound on rows returned by every catalog statement.
const CATALOG_LIMIT: u32 = 20;

/// Point lookup on a single indexable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldQuery {
    /// Field name, e.g. `field3`
    pub field: String,
    /// Exact value to match
    pub value: String,
    /// Maximum number of rows to return
    pub limit: u32,
}

impl FieldQuery {
    /// Render the lookup as a N1QL statement against `bucket`.
    pub fn render(&self, bucket: &str) -> String {
        format!(
            "SELECT * FROM {bucket} WHERE {} = \"{}\" LIMIT {}",
            self.field, self.value, self.limit
        )
    }
}

/// A named query with its typed parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogQuery {
    NameAndStreetByCity { city: String },
    NameAndEmailByCounty { county: String },
    AchievementsByRealm { realm: String },
    NameByCoins { coins: f64 },
    EmailByAchievementAndCategory { achievement: i16, category: i16 },
    StreetByYearAndCoins { year: i16, coins: f64 },
    NameAndEmailAndStreetAndAchievementsAndCoinsByCity { city: String },
    StreetAndNameAndEmailAndAchievementAndCoinsByCounty { county: String },
    CategoryNameAndEmailAndStreetAndGmtimeAndYearByCountry { country: String },
    BodyByCity { city: String },
    BodyByRealm { realm: String },
    BodyByCountry { country: String },
    DistinctStates,
    DistinctFullStates,
    DistinctYears,
    CoinsStatsByStateAndYear { state: String, year: i16 },
    CoinsStatsByGmtimeAndYear { gmtime: [i16; 9], year: i16 },
    CoinsStatsByFullStateAndYear { full_state: String, year: i16 },
}

impl CatalogQuery {
    /// The catalog entry this query belongs to.
    pub fn name(&self) -> QueryName {
        match self {
            CatalogQuery::NameAndStreetByCity { .. } => QueryName::NameAndStreetByCity,
            CatalogQuery::NameAndEmailByCounty { .. } => QueryName::NameAndEmailByCounty,
            CatalogQuery::AchievementsByRealm { .. } => QueryName::AchievementsByRealm,
            CatalogQuery::NameByCoins { .. } => QueryName::NameByCoins,
            CatalogQuery::EmailByAchievementAndCategory { .. } => {
                QueryName::EmailByAchievementAndCategory
            }
            CatalogQuery::StreetByYearAndCoins { .. } => QueryName::StreetByYearAndCoins,
            CatalogQuery::NameAndEmailAndStreetAndAchievementsAndCoinsByCity { .. } => {
                QueryName::NameAndEmailAndStreetAndAchievementsAndCoinsByCity
            }
            CatalogQuery::StreetAndNameAndEmailAndAchievementAndCoinsByCounty { .. } => {
                QueryName::StreetAndNameAndEmailAndAchievementAndCoinsByCounty
            }
            CatalogQuery::CategoryNameAndEmailAndStreetAndGmtimeAndYearByCountry { .. } => {
                QueryName::CategoryNameAndEmailAndStreetAndGmtimeAndYearByCountry
            }
            CatalogQuery::BodyByCity { .. } => QueryName::BodyByCity,
            CatalogQuery::BodyByRealm { .. } => QueryName::BodyByRealm,
            CatalogQuery::BodyByCountry { .. } => QueryName::BodyByCountry,
            CatalogQuery::DistinctStates => QueryName::DistinctStates,
            CatalogQuery::DistinctFullStates => QueryName::DistinctFullStates,
            CatalogQuery::DistinctYears => QueryName::DistinctYears,
            CatalogQuery::CoinsStatsByStateAndYear { .. } => QueryName::CoinsStatsByStateAndYear,
            CatalogQuery::CoinsStatsByGmtimeAndYear { .. } => QueryName::CoinsStatsByGmtimeAndYear,
            CatalogQuery::CoinsStatsByFullStateAndYear { .. } => {
                QueryName::CoinsStatsByFullStateAndYear
            }
        }
    }

    /// Render the query as a N1QL statement against `bucket`.
    pub fn render(&self, bucket: &str) -> String {
        let limit = CATALOG_LIMIT;
        match self {
            CatalogQuery::NameAndStreetByCity { city } => format!(
                "SELECT name.f.f.f AS _name, street.f.f AS _street \
                 FROM {bucket} WHERE city.f.f = \"{city}\" LIMIT {limit}"
            ),
            CatalogQuery::NameAndEmailByCounty { county } => format!(
                "SELECT name.f.f.f AS _name, email.f.f AS _email \
                 FROM {bucket} WHERE county.f.f = \"{county}\" LIMIT {limit}"
            ),
            CatalogQuery::AchievementsByRealm { realm } => format!(
                "SELECT achievements FROM {bucket} WHERE realm.f = \"{realm}\" LIMIT {limit}"
            ),
            CatalogQuery::NameByCoins { coins } => format!(
                "SELECT name.f.f.f AS _name \
                 FROM {bucket} WHERE coins.f > {:.6} AND coins.f < {:.6} LIMIT {limit}",
                coins * 0.5,
                coins
            ),
            CatalogQuery::EmailByAchievementAndCategory {
                achievement,
                category,
            } => format!(
                "SELECT email.f.f AS _email \
                 FROM {bucket} WHERE category = {category} \
                 AND achievements[0] > 0 AND achievements[0] < {achievement} LIMIT {limit}"
            ),
            CatalogQuery::StreetByYearAndCoins { year, coins } => format!(
                "SELECT street.f.f AS _street \
                 FROM {bucket} WHERE year = {year} AND coins.f > {coins:.6} AND coins.f < 655.35 \
                 LIMIT {limit}"
            ),
            CatalogQuery::NameAndEmailAndStreetAndAchievementsAndCoinsByCity { city } => format!(
                "SELECT name.f.f.f AS _name, email.f.f AS _email, street.f.f AS _street, \
                 achievements, coins.f AS _coins \
                 FROM {bucket} WHERE city.f.f = \"{city}\" LIMIT {limit}"
            ),
            CatalogQuery::StreetAndNameAndEmailAndAchievementAndCoinsByCounty { county } => {
                format!(
                    "SELECT street.f.f AS _street, name.f.f.f AS _name, email.f.f AS _email, \
                     achievements[0] AS achievement, 2*coins.f AS _coins \
                     FROM {bucket} WHERE county.f.f = \"{county}\" LIMIT {limit}"
                )
            }
            CatalogQuery::CategoryNameAndEmailAndStreetAndGmtimeAndYearByCountry { country } => {
                format!(
                    "SELECT category, name.f.f.f AS _name, email.f.f AS _email, \
                     street.f.f AS _street, gmtime, year \
                     FROM {bucket} WHERE country.f = \"{country}\" LIMIT {limit}"
                )
            }
            CatalogQuery::BodyByCity { city } => format!(
                "SELECT body FROM {bucket} WHERE city.f.f = \"{city}\" LIMIT {limit}"
            ),
            CatalogQuery::BodyByRealm { realm } => format!(
                "SELECT body FROM {bucket} WHERE realm.f = \"{realm}\" LIMIT {limit}"
            ),
            CatalogQuery::BodyByCountry { country } => format!(
                "SELECT body FROM {bucket} WHERE country.f = \"{country}\" LIMIT {limit}"
            ),
            CatalogQuery::DistinctStates => {
                format!("SELECT DISTINCT state.f AS state FROM {bucket} LIMIT {limit}")
            }
            CatalogQuery::DistinctFullStates => {
                format!("SELECT DISTINCT full_state.f AS full_state FROM {bucket} LIMIT {limit}")
            }
            CatalogQuery::DistinctYears => {
                format!("SELECT DISTINCT year FROM {bucket} LIMIT {limit}")
            }
            CatalogQuery::CoinsStatsByStateAndYear { state, year } => format!(
                "SELECT {COINS_STATS} FROM {bucket} \
                 WHERE state.f = \"{state}\" AND year = {year} \
                 GROUP BY state.f, year LIMIT {limit}"
            ),
            CatalogQuery::CoinsStatsByGmtimeAndYear { gmtime, year } => {
                let gmtime = gmtime
                    .iter()
                    .map(|part| part.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!(
                    "SELECT {COINS_STATS} FROM {bucket} \
                     WHERE gmtime = [{gmtime}] AND year = {year} \
                     GROUP BY gmtime, year LIMIT {limit}"
                )
            }
            CatalogQuery::CoinsStatsByFullStateAndYear { full_state, year } => format!(
                "SELECT {COINS_STATS} FROM {bucket} \
                 WHERE full_state.f = \"{full_state}\" AND year = {year} \
                 GROUP BY full_state.f, year LIMIT {limit}"
            ),
        }
    }
}

const COINS_STATS: &str = "COUNT(coins.f), SUM(coins.f), AVG(coins.f), MIN(coins.f), MAX(coins.f)";

/// Any query a workload can issue against a database.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Indexable-field lookup (size-driven workload)
    Field(FieldQuery),
    /// Named catalog query (profile workload)
    Catalog(CatalogQuery),
}

impl Query {
    /// Render the query as a N1QL statement against `bucket`.
    pub fn render(&self, bucket: &str) -> String {
        match self {
            Query::Field(query) => query.render(bucket),
            Query::Catalog(query) => query.render(bucket),
        }
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Query::Field(_) => "field",
            Query::Catalog(query) => query.name().as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_query_render() {
        let query = FieldQuery {
            field: "field3".to_string(),
            value: "field3-0123456789".to_string(),
            limit: 15,
        };
        assert_eq!(
            query.render("default"),
            "SELECT * FROM default WHERE field3 = \"field3-0123456789\" LIMIT 15"
        );
    }

    #[test]
    fn test_name_by_coins_uses_half_coins_as_lower_bound() {
        let statement = CatalogQuery::NameByCoins { coins: 10.0 }.render("b");
        assert!(statement.contains("coins.f > 5.000000 AND coins.f < 10.000000"));
    }

    #[test]
    fn test_gmtime_is_rendered_as_array_literal() {
        let statement = CatalogQuery::CoinsStatsByGmtimeAndYear {
            gmtime: [1971, 2, 1, 0, 0, 0, 0, 32, 0],
            year: 1990,
        }
        .render("b");
        assert!(statement.contains("gmtime = [1971, 2, 1, 0, 0, 0, 0, 32, 0] AND year = 1990"));
        assert!(statement.contains("GROUP BY gmtime, year"));
    }

    #[test]
    fn test_every_statement_targets_bucket_and_is_limited() {
        let queries = vec![
            CatalogQuery::NameAndStreetByCity { city: "c".into() },
            CatalogQuery::NameAndEmailByCounty { county: "c".into() },
            CatalogQuery::AchievementsByRealm { realm: "r".into() },
            CatalogQuery::NameByCoins { coins: 1.0 },
            CatalogQuery::EmailByAchievementAndCategory {
                achievement: 10,
                category: 1,
            },
            CatalogQuery::StreetByYearAndCoins {
                year: 1990,
                coins: 1.0,
            },
            CatalogQuery::NameAndEmailAndStreetAndAchievementsAndCoinsByCity { city: "c".into() },
            CatalogQuery::StreetAndNameAndEmailAndAchievementAndCoinsByCounty {
                county: "c".into(),
            },
            CatalogQuery::CategoryNameAndEmailAndStreetAndGmtimeAndYearByCountry {
                country: "c".into(),
            },
            CatalogQuery::BodyByCity { city: "c".into() },
            CatalogQuery::BodyByRealm { realm: "r".into() },
            CatalogQuery::BodyByCountry { country: "c".into() },
            CatalogQuery::DistinctStates,
            CatalogQuery::DistinctFullStates,
            CatalogQuery::DistinctYears,
            CatalogQuery::CoinsStatsByStateAndYear {
                state: "CA".into(),
                year: 1990,
            },
            CatalogQuery::CoinsStatsByGmtimeAndYear {
                gmtime: [1970, 1, 1, 0, 0, 0, 3, 1, 0],
                year: 1990,
            },
            CatalogQuery::CoinsStatsByFullStateAndYear {
                full_state: "California".into(),
                year: 1990,
            },
        ];

        let names: std::collections::HashSet<_> = queries.iter().map(|q| q.name()).collect();
        assert_eq!(names.len(), QueryName::ALL.len());

        for query in &queries {
            let statement = query.render("bucket_x");
            assert!(statement.contains("FROM bucket_x"), "{statement}");
            assert!(statement.ends_with("LIMIT 20"), "{statement}");
        }
    }

    #[test]
    fn test_query_label() {
        let query = Query::Catalog(CatalogQuery::DistinctYears);
        assert_eq!(query.label(), "distinct_years");
    }
}
