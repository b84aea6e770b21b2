//! Destination collection across application templates.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::entities::{Application, Destination};

/// Distinct destinations used by `applications`, keyed by [`Destination::identity`].
///
/// When several applications share an identity the last one wins. The result
/// is ordered by identity so repeated runs emit identical manifests.
pub fn collect_destinations(applications: &[Application]) -> Vec<Destination> {
    let mut by_identity = BTreeMap::new();

    for app in applications {
        let destination = &app.spec.destination;
        trace!(application = %app.name(), destination = %destination, "Collecting destination");
        by_identity.insert(destination.identity(), destination.clone());
    }

    by_identity.into_values().collect()
}
