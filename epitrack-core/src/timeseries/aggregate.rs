use std::collections::{BTreeMap, HashMap};

use epitrack_types::{
    Counts, DateKey, EpiError, FeedRow, FeedTable, HistoricalFeeds, HistoryData, RegionRecord,
};

use crate::normalize::normalize_country;
use crate::sanitize::sanitize_count;

/// Suffix of the pseudo-state synthesized for a country's own row when the
/// feed repeats the country name in the province column.
pub const MAINLAND_SUFFIX: &str = " - Mainland";

/// Column positions of one window date in each of the three feeds.
#[derive(Debug, Clone, Copy)]
struct WindowColumn {
    date: DateKey,
    confirmed: usize,
    deaths: usize,
    recovered: usize,
}

fn locate(table: &FeedTable, label: &str, metric: &str) -> Result<usize, EpiError> {
    table.column_of(label).ok_or_else(|| {
        EpiError::shape(format!("{metric} feed is missing date column '{label}'"))
    })
}

fn check_shape(feeds: &HistoricalFeeds) -> Result<(), EpiError> {
    let metrics = [
        ("confirmed", &feeds.confirmed),
        ("deaths", &feeds.deaths),
        ("recovered", &feeds.recovered),
    ];
    for (metric, table) in metrics {
        if table.is_empty() {
            return Err(EpiError::shape(format!("{metric} feed has no rows")));
        }
    }
    let expected = feeds.confirmed.rows.len();
    for (metric, table) in &metrics[1..] {
        if table.rows.len() != expected {
            return Err(EpiError::shape(format!(
                "{metric} feed has {} rows, confirmed has {expected}",
                table.rows.len()
            )));
        }
    }
    Ok(())
}

/// Resolve the trailing `window_days` date columns of the confirmed feed in
/// all three feeds.
fn window_columns(
    feeds: &HistoricalFeeds,
    window_days: usize,
) -> Result<Vec<WindowColumn>, EpiError> {
    let labels = &feeds.confirmed.date_columns;
    let start = labels.len().saturating_sub(window_days);
    labels[start..]
        .iter()
        .enumerate()
        .map(|(offset, label)| {
            Ok(WindowColumn {
                date: DateKey::parse_label(label)?,
                confirmed: start + offset,
                deaths: locate(&feeds.deaths, label, "deaths")?,
                recovered: locate(&feeds.recovered, label, "recovered")?,
            })
        })
        .collect()
}

fn coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The state label of a row, if it has one.
///
/// A province equal to its country marks the country's own territory and
/// becomes `"<Country> - Mainland"`; an empty province means a bare country row.
fn state_label(row: &FeedRow, country: &str) -> Option<String> {
    let province = row.province_state.trim();
    if province.is_empty() {
        None
    } else if province == row.country_region.trim() || province == country {
        Some(format!("{country}{MAINLAND_SUFFIX}"))
    } else {
        Some(province.to_string())
    }
}

/// Build the state → country → world rollup from the three parallel feeds.
///
/// Per row and window date:
/// - the world total accumulates the row's counts;
/// - the row's own key (state label, else country) is *set* to the row's
///   counts, so a repeated key keeps its last row;
/// - a row with a state label additionally *adds* its counts into its
///   country's record.
///
/// A country that has both a bare row and state rows ends up with the sum of
/// both, independent of row order. Malformed cells read as zero.
///
/// # Errors
/// Returns `EpiError::ShapeMismatch` when a feed is empty, the row counts
/// differ, or a window date is missing from the deaths or recovered feed.
pub fn aggregate_history(
    feeds: &HistoricalFeeds,
    window_days: usize,
) -> Result<HistoryData, EpiError> {
    check_shape(feeds)?;
    let window = window_columns(feeds, window_days)?;

    let mut world: BTreeMap<DateKey, Counts> = BTreeMap::new();
    let mut regions: BTreeMap<String, RegionRecord> = BTreeMap::new();
    let mut own_rows: HashMap<String, BTreeMap<DateKey, Counts>> = HashMap::new();

    for (i, row) in feeds.confirmed.rows.iter().enumerate() {
        let deaths = &feeds.deaths.rows[i];
        let recovered = &feeds.recovered.rows[i];

        let country = normalize_country(row.country_region.trim()).to_string();
        let state = state_label(row, &country);
        let key = state.clone().unwrap_or_else(|| country.clone());

        regions.entry(key.clone()).or_insert_with(|| RegionRecord {
            country: country.clone(),
            is_state: state.is_some(),
            lat: coordinate(&row.lat),
            long: coordinate(&row.long),
            counts: BTreeMap::new(),
        });
        if state.is_some() {
            regions
                .entry(country.clone())
                .or_insert_with(|| RegionRecord::country(country.clone()));
        }

        let own = own_rows.entry(key).or_default();
        for col in &window {
            let counts = Counts::new(
                sanitize_count(row.value(col.confirmed)),
                sanitize_count(deaths.value(col.deaths)),
                sanitize_count(recovered.value(col.recovered)),
            );

            *world.entry(col.date).or_default() += counts;
            own.insert(col.date, counts);

            if state.is_some()
                && let Some(parent) = regions.get_mut(&country)
            {
                *parent.counts.entry(col.date).or_default() += counts;
            }
        }
    }

    for (key, dates) in own_rows {
        if let Some(record) = regions.get_mut(&key) {
            for (date, counts) in dates {
                *record.counts.entry(date).or_default() += counts;
            }
        }
    }

    let mut date_list: Vec<DateKey> = window.iter().map(|c| c.date).collect();
    date_list.push(DateKey::Now);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        rows = feeds.confirmed.rows.len(),
        regions = regions.len(),
        dates = window.len(),
        "aggregated historical feeds"
    );

    Ok(HistoryData {
        date_list,
        world,
        regions,
    })
}
