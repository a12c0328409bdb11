//! Fixed summary statistics shown in the chat header.
//!
//! These are display constants, not computed values; the assistant does not
//! compute, store, or validate any real booking data.

/// One headline stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStat {
    /// Short label for the stat.
    pub label: &'static str,
    /// Display value.
    pub value: &'static str,
    /// Trend or context line.
    pub delta: &'static str,
}

/// The headline stats shown when the assistant starts.
pub const HEADLINE_STATS: [DashboardStat; 4] = [
    DashboardStat {
        label: "Total Guests",
        value: "2,450",
        delta: "+12% this month",
    },
    DashboardStat {
        label: "Revenue",
        value: "$156.8K",
        delta: "+8% vs last week",
    },
    DashboardStat {
        label: "Avg. Stay",
        value: "3.8 days",
        delta: "Based on last 30 days",
    },
    DashboardStat {
        label: "Cancellation Rate",
        value: "8.2%",
        delta: "-2% improvement",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_headline_stats() {
        assert_eq!(HEADLINE_STATS.len(), 4);
        assert_eq!(HEADLINE_STATS[3].label, "Cancellation Rate");
        assert_eq!(HEADLINE_STATS[3].value, "8.2%");
    }
}
