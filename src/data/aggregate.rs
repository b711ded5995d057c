use super::model::{LaunchDataset, SiteSelection};

/// One labelled pie wedge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

impl PieSlice {
    fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Slice label for an outcome class value.
pub fn class_label(class: u8) -> &'static str {
    match class {
        1 => "Success (1)",
        _ => "Failure (0)",
    }
}

// ---------------------------------------------------------------------------
// Pie aggregation
// ---------------------------------------------------------------------------

/// Compute the pie chart slices for a site selection.
///
/// * "All Sites" → one slice per site (first-appearance order) valued by its
///   number of successful launches.
/// * one site → two slices, failures then successes, counting that site's
///   launches. A site without launches (including unknown names) gives no slices.
pub fn pie_slices(dataset: &LaunchDataset, site: &SiteSelection) -> Vec<PieSlice> {
    match site {
        SiteSelection::All => dataset
            .sites
            .iter()
            .map(|name| {
                let successes = dataset
                    .records
                    .iter()
                    .filter(|r| &r.launch_site == name)
                    .filter(|r| r.is_success())
                    .count() as u64;
                PieSlice::new(name.as_str(), successes)
            })
            .collect(),
        SiteSelection::Site(name) => {
            let mut counts = [0u64; 2];
            for rec in dataset.records.iter().filter(|r| &r.launch_site == name) {
                counts[usize::from(rec.is_success())] += 1;
            }
            if counts.iter().sum::<u64>() == 0 {
                return Vec::new();
            }
            vec![
                PieSlice::new(class_label(0), counts[0]),
                PieSlice::new(class_label(1), counts[1]),
            ]
        }
    }
}

/// Pie chart heading for a selection.
pub fn pie_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Total Success Launches by All Sites".to_string(),
        SiteSelection::Site(name) => format!("Total Success Launches for Site {name}"),
    }
}

/// Scatter chart heading for a selection.
pub fn scatter_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Correlation between Payload and Success for All Sites".to_string(),
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for Site {name}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn fixture() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("KSC", 5500.0, 1, "v1.0"),
            LaunchRecord::new("VAFB", 500.0, 0, "v1.1"),
            LaunchRecord::new("KSC", 3000.0, 0, "v1.0"),
        ])
    }

    #[test]
    fn all_sites_counts_successes_per_site() {
        let slices = pie_slices(&fixture(), &SiteSelection::All);
        assert_eq!(
            slices,
            vec![PieSlice::new("KSC", 1), PieSlice::new("VAFB", 0)]
        );
    }

    #[test]
    fn all_sites_follows_first_appearance_with_failure_only_site() {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, 0, "v1.0"),
            LaunchRecord::new("VAFB SLC-4E", 500.0, 1, "v1.1"),
            LaunchRecord::new("CCAFS LC-40", 2500.0, 1, "v1.1"),
            LaunchRecord::new("CCAFS SLC-40", 3100.0, 0, "FT"),
            LaunchRecord::new("KSC LC-39A", 5300.0, 1, "FT"),
            LaunchRecord::new("VAFB SLC-4E", 9600.0, 1, "B4"),
            LaunchRecord::new("CCAFS SLC-40", 4200.0, 0, "B5"),
            LaunchRecord::new("KSC LC-39A", 6100.0, 1, "B5"),
        ]);
        let slices = pie_slices(&ds, &SiteSelection::All);

        let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["CCAFS LC-40", "VAFB SLC-4E", "CCAFS SLC-40", "KSC LC-39A"]
        );
        assert_eq!(slices.len(), ds.sites.len());

        for slice in &slices {
            let successes = ds
                .records
                .iter()
                .filter(|r| r.launch_site == slice.label && r.class == 1)
                .count() as u64;
            assert_eq!(slice.value, successes, "site {}", slice.label);
        }
        // only failures, slice still present
        assert_eq!(slices[2], PieSlice::new("CCAFS SLC-40", 0));
    }

    #[test]
    fn single_site_counts_each_class() {
        let slices = pie_slices(&fixture(), &SiteSelection::Site("KSC".into()));
        assert_eq!(
            slices,
            vec![PieSlice::new("Failure (0)", 1), PieSlice::new("Success (1)", 1)]
        );
    }

    #[test]
    fn single_site_slices_sum_to_site_launches() {
        let ds = fixture();
        for site in &ds.sites {
            let slices = pie_slices(&ds, &SiteSelection::Site(site.clone()));
            assert_eq!(slices.len(), 2);
            let total: u64 = slices.iter().map(|s| s.value).sum();
            let expected = ds.records.iter().filter(|r| &r.launch_site == site).count();
            assert_eq!(total, expected as u64);
        }
    }

    #[test]
    fn unknown_site_gives_no_slices() {
        let slices = pie_slices(&fixture(), &SiteSelection::Site("Nowhere".into()));
        assert!(slices.is_empty());
    }

    #[test]
    fn empty_dataset_gives_no_slices() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(pie_slices(&ds, &SiteSelection::All).is_empty());
    }

    #[test]
    fn titles_are_spaced() {
        let ksc = SiteSelection::Site("KSC LC-39A".into());
        assert_eq!(pie_title(&ksc), "Total Success Launches for Site KSC LC-39A");
        assert_eq!(
            scatter_title(&SiteSelection::All),
            "Correlation between Payload and Success for All Sites"
        );
    }
}
