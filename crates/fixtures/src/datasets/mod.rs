//! Shipped tenant datasets.

pub mod utrecht;
pub mod west_friesland;
pub mod zuid_drecht;

use crate::dataset::Dataset;

/// Every registered dataset, base dataset first.
pub fn all() -> Vec<Dataset> {
    vec![utrecht::dataset(), west_friesland::dataset(), zuid_drecht::dataset()]
}

/// Looks a dataset up by its name (`zuid-drecht`, `west-friesland`, `utrecht`).
pub fn by_name(name: &str) -> Option<Dataset> {
    all().into_iter().find(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_datasets_pass_preflight() {
        for dataset in all() {
            dataset
                .validate()
                .unwrap_or_else(|e| panic!("{}: {e}", dataset.name));
        }
    }

    #[test]
    fn every_fixed_identifier_is_used() {
        for dataset in all() {
            let declared = dataset.catalogues.len() + dataset.groups.len() + dataset.products.len() + dataset.offers.len();
            assert_eq!(declared, dataset.ids.len(), "{}", dataset.name);
        }
    }

    #[test]
    fn shipped_sizes() {
        let zd = zuid_drecht::dataset();
        assert_eq!((zd.catalogues.len(), zd.groups.len(), zd.products.len(), zd.offers.len()), (1, 3, 4, 7));
        assert_eq!(zd.group_links().len(), 10);

        let wf = west_friesland::dataset();
        assert_eq!((wf.catalogues.len(), wf.groups.len(), wf.products.len(), wf.offers.len()), (5, 4, 4, 9));

        let ut = utrecht::dataset();
        assert_eq!((ut.catalogues.len(), ut.groups.len(), ut.products.len(), ut.offers.len()), (4, 8, 15, 0));
        assert_eq!(ut.group_links().len(), 30);
    }

    #[test]
    fn lookup_by_name() {
        assert!(by_name("west-friesland").is_some());
        assert!(by_name("amsterdam").is_none());
    }
}
