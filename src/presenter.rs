//! Builds the results table and sentiment histogram from a scored dataset.

use crate::types::{ChartBar, ChartPayload, Dataset, DisplayPayload, DisplayRow};

/// Title of the sentiment histogram.
pub const CHART_TITLE: &str = "Sentiment Distribution";

/// Field the histogram groups by.
pub const CHART_X_AXIS: &str = "sentiment_label";

/// The results table: every record, nothing truncated.
pub fn display_payload(title: &str, dataset: &Dataset) -> DisplayPayload {
    let rows = dataset
        .records()
        .iter()
        .map(|record| DisplayRow {
            text: record.text().to_string(),
            sentiment: record.sentiment(),
            sentiment_label: record.sentiment_label(),
        })
        .collect();

    DisplayPayload {
        title: title.to_string(),
        record_count: dataset.len(),
        rows,
    }
}

/// Histogram of records per label.
///
/// One bar per label that occurs, in order of first appearance.
pub fn chart_payload(dataset: &Dataset) -> ChartPayload {
    ChartPayload {
        title: Some(CHART_TITLE.to_string()),
        x_axis: Some(CHART_X_AXIS.to_string()),
        bars: dataset
            .label_counts()
            .into_iter()
            .map(|(label, count)| ChartBar { label, count })
            .collect(),
    }
}

/// Both payloads for a scored dataset.
pub fn present(title: &str, dataset: &Dataset) -> (DisplayPayload, ChartPayload) {
    (display_payload(title, dataset), chart_payload(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Record, SentimentLabel};
    use pretty_assertions::assert_eq;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Record::new("Loved it", "loved", 0.7),
            Record::new("Meh", "meh", 0.0),
            Record::new("Great!", "great", 0.8),
            Record::new("Awful", "awful", -1.0),
        ])
    }

    #[test]
    fn test_display_rows_in_order() {
        let display = display_payload("reviews.csv", &sample());

        assert_eq!(display.title, "reviews.csv");
        assert_eq!(display.record_count, 4);
        assert_eq!(
            display.rows.iter().map(|r| r.text.as_str()).collect::<Vec<_>>(),
            vec!["Loved it", "Meh", "Great!", "Awful"]
        );
        assert_eq!(display.rows[3].sentiment_label, SentimentLabel::Negative);
    }

    #[test]
    fn test_chart_counts() {
        let chart = chart_payload(&sample());

        assert_eq!(chart.title.as_deref(), Some(CHART_TITLE));
        assert_eq!(
            chart.bars,
            vec![
                ChartBar { label: SentimentLabel::Positive, count: 2 },
                ChartBar { label: SentimentLabel::Neutral, count: 1 },
                ChartBar { label: SentimentLabel::Negative, count: 1 },
            ]
        );
        assert_eq!(chart.total(), 4);
    }

    #[test]
    fn test_absent_labels_omitted() {
        let dataset = Dataset::new(vec![Record::new("ok", "ok", 0.0)]);
        let chart = chart_payload(&dataset);
        assert_eq!(chart.bars.len(), 1);
        assert_eq!(chart.count(SentimentLabel::Positive), 0);
    }

    #[test]
    fn test_empty_dataset() {
        let (display, chart) = present("empty.csv", &Dataset::default());
        assert_eq!(display.record_count, 0);
        assert!(display.rows.is_empty());
        assert_eq!(chart.total(), 0);
    }
}
