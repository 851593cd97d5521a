//! Optional image-vulnerability scoring capability.
//!
//! The scanner is injected by the application rather than reached through
//! ambient state; the formatting core consumes it as an opaque, possibly
//! stale score source. Scores arrive best-effort: `enqueue` kicks off a
//! background scan and `score` reads whatever results already exist, so a
//! cell may render a stale or empty score for a frame or two.

use std::collections::HashMap;

/// Minimal serialized shape of a workload container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSpec {
    pub name: String,
    pub image: String,
}

/// Collect the image references of a workload's containers.
pub fn extract_images(containers: &[ContainerSpec]) -> Vec<String> {
    containers.iter().map(|c| c.image.clone()).collect()
}

/// Image-vulnerability scorer.
///
/// Row renders may call this concurrently; implementations own their
/// synchronization. `enqueue` must not block the render path.
pub trait ImageScanner: Send + Sync {
    /// Whether the scanner has finished warming up.
    fn is_initialized(&self) -> bool;

    /// Whether workloads in this namespace with these labels are excluded
    /// from scanning.
    fn should_exclude(&self, namespace: &str, labels: &HashMap<String, String>) -> bool;

    /// Fire-and-forget scan request for the given images.
    fn enqueue(&self, images: &[String]);

    /// Best-effort read of the current score for the given images.
    fn score(&self, images: &[String]) -> String;
}

/// Inert default used when no scanner is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScanner;

impl ImageScanner for NoopScanner {
    fn is_initialized(&self) -> bool {
        false
    }

    fn should_exclude(&self, _namespace: &str, _labels: &HashMap<String, String>) -> bool {
        false
    }

    fn enqueue(&self, _images: &[String]) {}

    fn score(&self, _images: &[String]) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_images_collects_in_order() {
        let containers = vec![
            ContainerSpec {
                name: "web".into(),
                image: "nginx:1.27".into(),
            },
            ContainerSpec {
                name: "sidecar".into(),
                image: "envoy:v1.30".into(),
            },
        ];
        assert_eq!(extract_images(&containers), vec!["nginx:1.27", "envoy:v1.30"]);
    }

    #[test]
    fn extract_images_empty_spec() {
        assert!(extract_images(&[]).is_empty());
    }

    #[test]
    fn noop_scanner_is_never_initialized() {
        let sc = NoopScanner;
        assert!(!sc.is_initialized());
        assert!(!sc.should_exclude("default", &HashMap::new()));
        assert_eq!(sc.score(&["nginx:1.27".to_string()]), "");
    }
}
