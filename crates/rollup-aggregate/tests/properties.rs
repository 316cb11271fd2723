//! Property tests for grouping, summing and joining

use proptest::prelude::*;
use rollup_aggregate::{OfficeService, SectorService};
use rollup_model::{Collaborators, Keyed, Named, Weighted};
use rollup_test_utils::{valid_collaborators, valid_employees, valid_offices};
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn prop_keys_match_input(records in valid_collaborators()) {
        let expected: BTreeSet<String> = records
            .iter()
            .filter_map(|c| c.group_key().map(str::to_owned))
            .collect();

        let compiled = SectorService::new().compile(&Collaborators::new(records)).unwrap();
        let actual: BTreeSet<String> = compiled.keys().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_total_is_sum_of_group(records in valid_collaborators()) {
        let compiled = SectorService::new().compile(&Collaborators::new(records.clone())).unwrap();

        for (sector, summary) in &compiled {
            // whole-unit salaries, so the sum is exact in any order
            let expected: f64 = records
                .iter()
                .filter(|c| c.group_key() == Some(sector.as_str()))
                .filter_map(Weighted::amount)
                .sum();
            prop_assert_eq!(summary.total, expected);
        }
    }

    #[test]
    fn prop_members_sorted_permutation(records in valid_collaborators()) {
        let compiled = SectorService::new().compile(&Collaborators::new(records.clone())).unwrap();

        let mut seen = 0;
        for (sector, summary) in &compiled {
            let salaries: Vec<f64> = summary.collaborators.iter().filter_map(Weighted::amount).collect();
            prop_assert!(salaries.windows(2).all(|w| w[0] <= w[1]));

            let mut expected: Vec<String> = records
                .iter()
                .filter(|c| c.group_key() == Some(sector.as_str()))
                .map(|c| c.name().to_owned())
                .collect();
            let mut actual: Vec<String> = summary.collaborators.iter().map(|c| c.name().to_owned()).collect();
            expected.sort();
            actual.sort();
            prop_assert_eq!(actual, expected);
            seen += summary.collaborators.len();
        }
        prop_assert_eq!(seen, records.len());
    }

    #[test]
    fn prop_sector_compile_idempotent(records in valid_collaborators()) {
        let staff = Collaborators::new(records);
        let service = SectorService::new();
        prop_assert_eq!(service.compile(&staff).unwrap(), service.compile(&staff).unwrap());
    }

    #[test]
    fn prop_join_covers_key_union(employees in valid_employees(), offices in valid_offices()) {
        let companies = OfficeService::new()
            .compile(Some(employees.as_slice()), Some(offices.as_slice()))
            .unwrap()
            .unwrap();

        let expected: Vec<&str> = employees
            .iter()
            .filter_map(Keyed::group_key)
            .chain(offices.iter().filter_map(Keyed::group_key))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let actual: Vec<&str> = companies.iter().map(|c| c.company_id.as_str()).collect();
        prop_assert_eq!(actual, expected);

        for company in &companies {
            let has_employee = employees.iter().any(|e| e.group_key() == Some(company.company_id.as_str()));
            let has_office = offices.iter().any(|o| o.group_key() == Some(company.company_id.as_str()));
            prop_assert_eq!(company.collaborators.is_some(), has_employee);
            prop_assert_eq!(company.offices.is_some(), has_office);

            for names in company.collaborators.iter().chain(company.offices.iter()) {
                prop_assert!(!names.is_empty());
                prop_assert!(names.windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }
}
