//! Vulnerability-score cell composition.

use std::collections::HashMap;

use bosun_vul::{extract_images, ContainerSpec, ImageScanner};

use crate::sentinel::Outcome;

/// Score a workload's images through the injected scanner.
///
/// An absent or uninitialized scanner and excluded workloads all render the
/// not-applicable marker, silently; a missing capability is not a fault
/// worth logging on every row. Otherwise the images are enqueued for
/// scanning and whatever score already exists is returned.
pub fn vul_score(
    scanner: Option<&dyn ImageScanner>,
    namespace: &str,
    labels: &HashMap<String, String>,
    containers: &[ContainerSpec],
) -> String {
    let Some(sc) = scanner else {
        return Outcome::Unavailable.render();
    };
    if !sc.is_initialized() || sc.should_exclude(namespace, labels) {
        return Outcome::Unavailable.render();
    }

    let images = extract_images(containers);
    sc.enqueue(&images);
    sc.score(&images)
}
