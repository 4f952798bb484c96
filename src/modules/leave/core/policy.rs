// Policy catalog: named entitlement and procedural limits.

use crate::modules::leave::core::request::LeaveCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub name: String,
    pub annual_days: u32,
    pub sick_days: u32,
    pub personal_days: u32,
    pub carryover_limit: u32,
    pub max_consecutive_days: u32,
    pub min_notice_days: u32,
}

impl Policy {
    pub fn entitlement(&self, category: LeaveCategory) -> u32 {
        match category {
            LeaveCategory::Annual => self.annual_days,
            LeaveCategory::Sick => self.sick_days,
            LeaveCategory::Personal => self.personal_days,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicyCatalog {
    policies: BTreeMap<String, Policy>,
}

impl PolicyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard, Senior and Executive.
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for (name, annual, sick, personal, carryover, max_consecutive, min_notice) in [
            ("Standard", 20, 10, 5, 5, 15, 7),
            ("Senior", 25, 12, 7, 10, 20, 5),
            ("Executive", 30, 15, 10, 15, 30, 3),
        ] {
            catalog.insert(Policy {
                name: name.to_string(),
                annual_days: annual,
                sick_days: sick,
                personal_days: personal,
                carryover_limit: carryover,
                max_consecutive_days: max_consecutive,
                min_notice_days: min_notice,
            });
        }
        catalog
    }

    /// Replaces any policy with the same name.
    pub fn insert(&mut self, policy: Policy) {
        self.policies.insert(policy.name.clone(), policy);
    }

    pub fn get(&self, name: &str) -> Option<&Policy> {
        self.policies.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Policy> {
        self.policies.values()
    }
}

#[cfg(test)]
mod policy_catalog_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Standard", 20, 15, 7)]
    #[case("Senior", 25, 20, 5)]
    #[case("Executive", 30, 30, 3)]
    fn it_should_ship_the_default_policies(
        #[case] name: &str,
        #[case] annual: u32,
        #[case] max_consecutive: u32,
        #[case] min_notice: u32,
    ) {
        let catalog = PolicyCatalog::with_defaults();
        let policy = catalog.get(name).expect("policy should exist");
        assert_eq!(policy.entitlement(LeaveCategory::Annual), annual);
        assert_eq!(policy.max_consecutive_days, max_consecutive);
        assert_eq!(policy.min_notice_days, min_notice);
    }

    #[rstest]
    fn it_should_return_none_for_an_unknown_policy() {
        assert!(PolicyCatalog::with_defaults().get("Intern").is_none());
    }

    #[rstest]
    fn it_should_map_each_category_to_its_entitlement() {
        let catalog = PolicyCatalog::with_defaults();
        let senior = catalog.get("Senior").unwrap();
        assert_eq!(senior.entitlement(LeaveCategory::Sick), 12);
        assert_eq!(senior.entitlement(LeaveCategory::Personal), 7);
        assert_eq!(catalog.iter().count(), 3);
    }
}
