use std::collections::HashSet;
use std::fmt;

/// Label of the synthetic "no site filter" option.
pub const ALL_SITES: &str = "All Sites";

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the launch table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Payload mass in kilograms.
    pub payload_mass_kg: f64,
    /// Outcome class: 1 = success, 0 = failure.
    pub class: u8,
    pub booster_category: String,
    pub flight_number: Option<i64>,
    pub booster_version: Option<String>,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        class: u8,
        booster_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            class,
            booster_category: booster_category.into(),
            flight_number: None,
            booster_version: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.class == 1
    }
}

// ---------------------------------------------------------------------------
// Control values
// ---------------------------------------------------------------------------

/// Value of the site selector: every site, or one exact site name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw selector string. Only the exact sentinel label means "all".
    pub fn from_label(label: &str) -> Self {
        if label == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }

    /// Whether a record launched from a site passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Closed payload interval `[low, high]` in kilograms.
///
/// Bounds are not validated: `low > high` is a legal, empty interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, mass: f64) -> bool {
        self.low <= mass && mass <= self.high
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with values derived once at construction.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches, in source order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites in first-appearance order.
    pub sites: Vec<String>,
    /// Distinct booster version categories in first-appearance order.
    pub booster_categories: Vec<String>,
    /// Min/max payload mass, `None` for an empty dataset.
    pub payload_bounds: Option<PayloadRange>,
}

impl LaunchDataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let sites = distinct_in_order(records.iter().map(|r| r.launch_site.as_str()));
        let booster_categories =
            distinct_in_order(records.iter().map(|r| r.booster_category.as_str()));

        let payload_bounds = records.iter().map(|r| r.payload_mass_kg).fold(
            None,
            |acc: Option<PayloadRange>, m| match acc {
                None => Some(PayloadRange::new(m, m)),
                Some(b) => Some(PayloadRange::new(b.low.min(m), b.high.max(m))),
            },
        );

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds,
        }
    }

    /// Options for the site selector: the sentinel followed by every site.
    pub fn site_options(&self) -> Vec<String> {
        std::iter::once(ALL_SITES.to_string())
            .chain(self.sites.iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
