//! Extraction of snapshot items from the snapshot table's row text.

use epitrack_types::{SnapshotItem, SnapshotLayout};

use crate::normalize::normalize_country;
use crate::sanitize::sanitize_count;

fn fields(row: &str, skip: usize) -> Vec<&str> {
    row.split('\n')
        .flat_map(|line| line.split('\t'))
        .map(str::trim)
        .skip(skip)
        .collect()
}

/// Turn the text of each table row into snapshot items.
///
/// Each row's text is split into lines and each line into tab-delimited
/// fields; the fields are trimmed and flattened, `layout.skip_fields` leading
/// fields are discarded and the remaining ones are read at the layout's
/// offsets. The first `layout.skip_rows` rows are the table header. Rows
/// without a country are skipped; missing numbers read as zero.
pub fn parse_snapshot_rows<S: AsRef<str>>(
    rows: &[S],
    layout: &SnapshotLayout,
) -> Vec<SnapshotItem> {
    rows.iter()
        .skip(layout.skip_rows)
        .filter_map(|row| {
            let f = fields(row.as_ref(), layout.skip_fields);
            let at = |i: usize| f.get(i).copied().unwrap_or_default();
            let country = at(layout.country);
            if country.is_empty() {
                return None;
            }
            Some(SnapshotItem::new(
                normalize_country(country),
                sanitize_count(at(layout.confirmed)),
                sanitize_count(at(layout.deaths)),
                sanitize_count(at(layout.recovered)),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> String {
        let mut s = String::from("\n");
        for c in cells {
            s.push_str(c);
            s.push('\n');
        }
        s
    }

    #[test]
    fn reads_configured_offsets() {
        let rows = vec![
            row(&[
                "#",
                "Country,Other",
                "TotalCases",
                "NewCases",
                "TotalDeaths",
                "NewDeaths",
                "TotalRecovered",
            ]),
            row(&["1", "US", "1,234", "+12", "56", "+1", "789"]),
        ];
        let items = parse_snapshot_rows(&rows, &SnapshotLayout::default());
        assert_eq!(items, vec![SnapshotItem::new("USA", 1234, 56, 789)]);
    }

    #[test]
    fn tabs_and_lines_are_both_separators() {
        let rows = vec![String::new(), "\n1\tS. Korea\n9,000\t+5\n100\t\n200".to_string()];
        let items = parse_snapshot_rows(&rows, &SnapshotLayout::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].country, "South Korea");
        assert_eq!(items[0].confirmed, 9000);
        assert_eq!(items[0].deaths, 100);
        assert_eq!(items[0].recovered, 200);
    }

    #[test]
    fn short_rows_default_to_zero_and_blank_rows_are_skipped() {
        let layout = SnapshotLayout::default();
        let rows = vec![row(&["header"]), row(&["2", "Italy", "500"]), String::from("\n\n")];
        let items = parse_snapshot_rows(&rows, &layout);
        assert_eq!(items, vec![SnapshotItem::new("Italy", 500, 0, 0)]);
    }
}
