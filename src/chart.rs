// src/chart.rs
//
// Scales for the price-history line chart. Drawing lives in
// gui::components::price_chart; this part is pure and tested.

use std::collections::BTreeSet;

use crate::format::date_prefix;
use crate::model::ChannelPriceHistory;

/// Line colors, cycled per channel.
pub const PALETTE: [[u8; 3]; 8] = [
    [0x25, 0x63, 0xEB],
    [0xDC, 0x26, 0x26],
    [0x16, 0xA3, 0x4A],
    [0xD9, 0x77, 0x06],
    [0x93, 0x33, 0xEA],
    [0x08, 0x91, 0xB2],
    [0xDB, 0x27, 0x77],
    [0x4B, 0x55, 0x63],
];

pub fn series_color(index: usize) -> [u8; 3] {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// Index into `ChartModel::dates`.
    pub x: usize,
    pub price: i64,
    pub is_sale: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    /// Distinct `YYYY-MM-DD` dates across all channels, ascending.
    pub dates: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartModel {
    /// `None` when no channel has a single point.
    pub fn build(history: &[ChannelPriceHistory]) -> Option<Self> {
        let dates: Vec<String> = history
            .iter()
            .flat_map(|ch| ch.history.iter().map(|p| date_prefix(Some(&p.date))))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if dates.is_empty() {
            return None;
        }

        let mut lo = i64::MAX;
        let mut hi = i64::MIN;
        let series: Vec<ChartSeries> = history
            .iter()
            .filter(|ch| !ch.history.is_empty())
            .map(|ch| {
                let mut points: Vec<ChartPoint> = ch
                    .history
                    .iter()
                    .filter_map(|p| {
                        let key = date_prefix(Some(&p.date));
                        let x = dates.binary_search(&key).ok()?;
                        lo = lo.min(p.price_krw.0);
                        hi = hi.max(p.price_krw.0);
                        Some(ChartPoint { x, price: p.price_krw.0, is_sale: p.is_sale })
                    })
                    .collect();
                points.sort_by_key(|p| p.x);
                ChartSeries { name: ch.channel_name.clone(), points }
            })
            .collect();

        let (y_min, y_max) = padded_range(lo as f64, hi as f64);
        Some(Self { dates, series, y_min, y_max })
    }

    /// Horizontal position in `0.0..=1.0`; a single date sits in the middle.
    pub fn x_frac(&self, x: usize) -> f32 {
        if self.dates.len() <= 1 {
            0.5
        } else {
            x as f32 / (self.dates.len() - 1) as f32
        }
    }

    /// Vertical position in `0.0..=1.0`, 0 at the bottom.
    pub fn y_frac(&self, price: i64) -> f32 {
        ((price as f64 - self.y_min) / (self.y_max - self.y_min)) as f32
    }

    /// `n` evenly spaced labels from bottom to top.
    pub fn y_ticks(&self, n: usize) -> Vec<f64> {
        if n < 2 {
            return vec![self.y_min];
        }
        let step = (self.y_max - self.y_min) / (n - 1) as f64;
        (0..n).map(|i| self.y_min + step * i as f64).collect()
    }

    /// Evenly spread date labels, first and last included.
    pub fn x_ticks(&self, max_labels: usize) -> Vec<usize> {
        let n = self.dates.len();
        if n == 0 || max_labels == 0 {
            return Vec::new();
        }
        if n <= max_labels {
            return (0..n).collect();
        }
        let step = (n - 1) as f64 / (max_labels - 1).max(1) as f64;
        let mut v: Vec<usize> = (0..max_labels).map(|i| (i as f64 * step).round() as usize).collect();
        v.dedup();
        v
    }
}

/// 10% headroom each side; flat series get a span of 10% of the price
/// (at least 1,000 won) so the line sits mid-chart.
pub fn padded_range(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.1 } else { (hi.abs() * 0.1).max(1000.0) };
    ((lo - pad).max(0.0), hi + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Krw, PriceHistoryPoint};

    fn series(name: &str, pts: &[(&str, i64, bool)]) -> ChannelPriceHistory {
        ChannelPriceHistory {
            channel_name: s!(name),
            history: pts
                .iter()
                .map(|(d, p, s)| PriceHistoryPoint { date: s!(*d), price_krw: Krw(*p), is_sale: *s })
                .collect(),
        }
    }

    #[test]
    fn dates_are_merged_across_channels_in_calendar_order() {
        let h = vec![
            series("A", &[("2026-03-03T00:00:00", 100_000, false), ("2026-03-01T00:00:00", 120_000, false)]),
            series("B", &[("2026-03-02", 90_000, true)]),
            series("Empty", &[]),
        ];
        let m = ChartModel::build(&h).unwrap();
        assert_eq!(m.dates, vec!["2026-03-01", "2026-03-02", "2026-03-03"]);
        assert_eq!(m.series.len(), 2);
        assert_eq!(m.series[0].points[0].x, 0);
        assert_eq!(m.series[0].points[1].x, 2);
        assert_eq!(m.series[1].points[0].x, 1);
        assert!(m.series[1].points[0].is_sale);
        assert!(m.y_frac(90_000) > 0.0 && m.y_frac(120_000) < 1.0);
        assert_eq!(m.x_frac(2), 1.0);
    }

    #[test]
    fn flat_series_keeps_nonzero_span() {
        let m = ChartModel::build(&[series("A", &[("2026-03-01", 50_000, false)])]).unwrap();
        assert!(m.y_max > m.y_min);
        assert!((m.y_frac(50_000) - 0.5).abs() < 1e-6);
        assert_eq!(m.x_frac(0), 0.5);
    }

    #[test]
    fn no_points_no_chart() {
        assert!(ChartModel::build(&[series("A", &[])]).is_none());
    }

    #[test]
    fn x_ticks_cover_both_ends() {
        let m = ChartModel {
            dates: (1..=30).map(|d| format!("2026-04-{d:02}")).collect(),
            series: Vec::new(),
            y_min: 0.0,
            y_max: 1.0,
        };
        let t = m.x_ticks(5);
        assert_eq!(t.first(), Some(&0));
        assert_eq!(t.last(), Some(&29));
        assert_eq!(t.len(), 5);
    }
}
