use crate::models::TripTable;
use crate::models::trip::{COL_BIRTH_YEAR, COL_GENDER, COL_USER_TYPE};
use crate::stats::frequency::{mode, value_counts};

/// State of an optional column for the current city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability<T> {
    /// The city file has no such column
    NotAvailable,
    /// The column exists but holds no values after filtering
    NoData,
    Data(T),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub most_recent: i64,
    pub earliest: i64,
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Availability<Vec<(String, usize)>>,
    pub genders: Availability<Vec<(String, usize)>>,
    pub birth_years: Availability<BirthYears>,
}

impl UserStats {
    pub fn from_table(table: &TripTable) -> Self {
        let user_types = if table.has_column(COL_USER_TYPE) {
            counts(table.rows.iter().filter_map(|t| t.user_type.as_deref()))
        } else {
            Availability::NotAvailable
        };

        let genders = if table.has_column(COL_GENDER) {
            counts(table.rows.iter().filter_map(|t| t.gender.as_deref()))
        } else {
            Availability::NotAvailable
        };

        let birth_years = if table.has_column(COL_BIRTH_YEAR) {
            let years: Vec<i64> = table
                .rows
                .iter()
                .filter_map(|t| t.birth_year)
                .filter(|y| !y.is_nan())
                .map(|y| y.round() as i64)
                .collect();
            birth_year_stats(&years)
        } else {
            Availability::NotAvailable
        };

        Self {
            user_types,
            genders,
            birth_years,
        }
    }
}

fn counts<'a>(values: impl Iterator<Item = &'a str>) -> Availability<Vec<(String, usize)>> {
    let counted: Vec<(String, usize)> = value_counts(values.filter(|v| !v.is_empty()))
        .into_iter()
        .map(|(v, n)| (v.to_string(), n))
        .collect();

    if counted.is_empty() {
        Availability::NoData
    } else {
        Availability::Data(counted)
    }
}

fn birth_year_stats(years: &[i64]) -> Availability<BirthYears> {
    match (
        years.iter().max(),
        years.iter().min(),
        mode(years.iter().copied()),
    ) {
        (Some(&most_recent), Some(&earliest), Some(most_common)) => {
            Availability::Data(BirthYears {
                most_recent,
                earliest,
                most_common,
            })
        }
        _ => Availability::NoData,
    }
}
