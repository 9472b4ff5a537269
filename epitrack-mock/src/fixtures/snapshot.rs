//! Snapshot table rows as extracted from the page, header row first.

fn row(rank: usize, country: &str, confirmed: &str, deaths: &str, recovered: &str) -> String {
    format!("\n{rank}\t{country}\n{confirmed}\t+0\n{deaths}\t+0\n{recovered}\t\n")
}

pub fn rows() -> Vec<String> {
    vec![
        "\n#\tCountry,Other\nTotalCases\tNewCases\nTotalDeaths\tNewDeaths\nTotalRecovered\t\n"
            .to_string(),
        row(0, "World", "275,469", "11,402", "88,437"),
        row(1, "China", "81,008", "3,255", "71,740"),
        row(2, "Italy", "47,021", "4,032", "5,129"),
        row(3, "USA", "19,383", "255", "147"),
        row(4, "France", "12,612", "450", "12"),
        row(5, "S. Korea", "8,652", "94", "1,540"),
        row(6, "Diamond Princess", "712", "7", "325"),
    ]
}
