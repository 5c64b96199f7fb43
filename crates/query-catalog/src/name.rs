//! Symbolic names of the catalog query shapes.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Error returned when a query name does not match any catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown query name: {0}")]
pub struct UnknownQueryName(pub String);

/// Parameterless identifier of a catalog query shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryName {
    NameAndStreetByCity,
    NameAndEmailByCounty,
    AchievementsByRealm,
    NameByCoins,
    EmailByAchievementAndCategory,
    StreetByYearAndCoins,
    NameAndEmailAndStreetAndAchievementsAndCoinsByCity,
    StreetAndNameAndEmailAndAchievementAndCoinsByCounty,
    CategoryNameAndEmailAndStreetAndGmtimeAndYearByCountry,
    BodyByCity,
    BodyByRealm,
    BodyByCountry,
    DistinctStates,
    DistinctFullStates,
    DistinctYears,
    CoinsStatsByStateAndYear,
    CoinsStatsByGmtimeAndYear,
    CoinsStatsByFullStateAndYear,
}

impl QueryName {
    /// Every catalog entry, in declaration order.
    pub const ALL: [QueryName; 18] = [
        QueryName::NameAndStreetByCity,
        QueryName::NameAndEmailByCounty,
        QueryName::AchievementsByRealm,
        QueryName::NameByCoins,
        QueryName::EmailByAchievementAndCategory,
        QueryName::StreetByYearAndCoins,
        QueryName::NameAndEmailAndStreetAndAchievementsAndCoinsByCity,
        QueryName::StreetAndNameAndEmailAndAchievementAndCoinsByCounty,
        QueryName::CategoryNameAndEmailAndStreetAndGmtimeAndYearByCountry,
        QueryName::BodyByCity,
        QueryName::BodyByRealm,
        QueryName::BodyByCountry,
        QueryName::DistinctStates,
        QueryName::DistinctFullStates,
        QueryName::DistinctYears,
        QueryName::CoinsStatsByStateAndYear,
        QueryName::CoinsStatsByGmtimeAndYear,
        QueryName::CoinsStatsByFullStateAndYear,
    ];

    /// The snake_case name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryName::NameAndStreetByCity => "name_and_street_by_city",
            QueryName::NameAndEmailByCounty => "name_and_email_by_county",
            QueryName::AchievementsByRealm => "achievements_by_realm",
            QueryName::NameByCoins => "name_by_coins",
            QueryName::EmailByAchievementAndCategory => "email_by_achievement_and_category",
            QueryName::StreetByYearAndCoins => "street_by_year_and_coins",
            QueryName::NameAndEmailAndStreetAndAchievementsAndCoinsByCity => {
                "name_and_email_and_street_and_achievements_and_coins_by_city"
            }
            QueryName::StreetAndNameAndEmailAndAchievementAndCoinsByCounty => {
                "street_and_name_and_email_and_achievement_and_coins_by_county"
            }
            QueryName::CategoryNameAndEmailAndStreetAndGmtimeAndYearByCountry => {
                "category_name_and_email_and_street_and_gmtime_and_year_by_country"
            }
            QueryName::BodyByCity => "body_by_city",
            QueryName::BodyByRealm => "body_by_realm",
            QueryName::BodyByCountry => "body_by_country",
            QueryName::DistinctStates => "distinct_states",
            QueryName::DistinctFullStates => "distinct_full_states",
            QueryName::DistinctYears => "distinct_years",
            QueryName::CoinsStatsByStateAndYear => "coins_stats_by_state_and_year",
            QueryName::CoinsStatsByGmtimeAndYear => "coins_stats_by_gmtime_and_year",
            QueryName::CoinsStatsByFullStateAndYear => "coins_stats_by_full_state_and_year",
        }
    }
}

impl std::fmt::Display for QueryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryName {
    type Err = UnknownQueryName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        QueryName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| UnknownQueryName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for name in QueryName::ALL {
            assert_eq!(name.to_string().parse::<QueryName>().unwrap(), name);
        }
    }

    #[test]
    fn test_serde_name_matches_display() {
        for name in QueryName::ALL {
            let json = serde_json::to_string(&name).unwrap();
            assert_eq!(json, format!("\"{name}\""));
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = "coins_by_moon_phase".parse::<QueryName>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown query name: coins_by_moon_phase");
    }
}
