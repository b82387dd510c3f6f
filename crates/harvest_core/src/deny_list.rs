use std::collections::HashSet;

use crate::file_name_of;

const OBSOLETE_DRIVERS: &[&str] = &[
    "SimbaJDBCDriverforGoogleBigQuery42_1.5.4.1008.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.5.0.1001.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.3.3.1004.zip",
    "SimbaBigQueryJDBC42-1.3.2.1003.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.3.0.1001.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.2.25.1029.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.2.23.1027.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.2.22.1026.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.2.21.1025.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.2.19.1023.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.2.18.1022.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.2.16.1020.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.2.14.1017.zip",
    "SimbaJDBCDriverforGoogleBigQuery42_1.2.1.1001.zip",
    "SimbaJDBCDriverforGoogleBigQuery41_1.2.1.1001.zip",
];

/// Archive file names that are never downloaded.
///
/// Membership is exact string equality against a link's final path segment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DenyList {
    names: HashSet<String>,
}

impl DenyList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Driver releases known to be obsolete.
    pub fn obsolete_drivers() -> Self {
        Self::new(OBSOLETE_DRIVERS.iter().copied())
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.names.contains(file_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn is_denied(&self, link: &str) -> bool {
        self.contains(file_name_of(link))
    }

    /// Drops denied links, keeping the rest in their original order.
    pub fn filter<I>(&self, links: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        links
            .into_iter()
            .filter(|link| !self.is_denied(link))
            .collect()
    }
}
