//! Board projection: columns, stage filter and sort.
//!
//! Filtering and sorting only reorder the fetched snapshot. They never touch
//! stored positions.

use std::cmp::Ordering;

use lead_store::{Lead, Stage};

/// A board column in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub stage: Stage,
    pub title: &'static str,
}

/// Columns left to right.
pub const COLUMNS: [ColumnSpec; 4] = [
    ColumnSpec {
        stage: Stage::Loyal,
        title: "Loyal",
    },
    ColumnSpec {
        stage: Stage::Labor,
        title: "Labor",
    },
    ColumnSpec {
        stage: Stage::Lust,
        title: "Lust",
    },
    ColumnSpec {
        stage: Stage::Dead,
        title: "DEAD (Exes)",
    },
];

/// Which leads to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StageFilter {
    #[default]
    All,
    Only(Stage),
}

impl StageFilter {
    fn admits(self, lead: &Lead) -> bool {
        match self {
            StageFilter::All => true,
            StageFilter::Only(stage) => lead.stage == stage,
        }
    }
}

/// Card order inside each column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Highest emotional ROI first.
    #[default]
    Roi,
    /// Most recent contact first.
    LastContact,
    /// Alphabetical, case-insensitive.
    Name,
}

impl SortKey {
    fn compare(self, a: &Lead, b: &Lead) -> Ordering {
        match self {
            SortKey::Roi => b.emotional_roi.cmp(&a.emotional_roi),
            SortKey::LastContact => b.last_contact.cmp(&a.last_contact),
            SortKey::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
        }
    }
}

/// Colour band of the ROI badge on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoiBand {
    High,
    Good,
    Fair,
    Low,
}

impl RoiBand {
    pub fn of(roi: u8) -> Self {
        match roi {
            80..=u8::MAX => RoiBand::High,
            60..=79 => RoiBand::Good,
            40..=59 => RoiBand::Fair,
            _ => RoiBand::Low,
        }
    }
}

/// One rendered column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<'a> {
    pub stage: Stage,
    pub title: &'static str,
    /// Leads in this stage regardless of the active filter.
    pub count: usize,
    pub leads: Vec<&'a Lead>,
}

/// The whole board projected from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView<'a> {
    pub total: usize,
    pub columns: Vec<Column<'a>>,
}

impl<'a> BoardView<'a> {
    /// Group, filter and sort a snapshot into display columns.
    pub fn project(snapshot: &'a [Lead], filter: StageFilter, sort: SortKey) -> Self {
        let mut visible: Vec<&Lead> = snapshot.iter().filter(|l| filter.admits(l)).collect();
        visible.sort_by(|a, b| sort.compare(a, b));

        let columns = COLUMNS
            .iter()
            .map(|spec| Column {
                stage: spec.stage,
                title: spec.title,
                count: snapshot.iter().filter(|l| l.stage == spec.stage).count(),
                leads: visible
                    .iter()
                    .copied()
                    .filter(|l| l.stage == spec.stage)
                    .collect(),
            })
            .collect();

        Self {
            total: snapshot.len(),
            columns,
        }
    }

    pub fn column(&self, stage: Stage) -> Option<&Column<'a>> {
        self.columns.iter().find(|c| c.stage == stage)
    }
}
