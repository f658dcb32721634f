//! Flux resource kinds that carry `spec.dependsOn`

use serde::{Deserialize, Serialize};

#[derive(
    clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[default]
    Kustomizations,
    #[value(name = "helmreleases", alias = "hr")]
    HelmReleases,
}

impl ResourceKind {
    /// Fully qualified resource name passed to `kubectl get`.
    pub fn resource(&self) -> &'static str {
        match self {
            ResourceKind::Kustomizations => "kustomizations.kustomize.toolkit.fluxcd.io",
            ResourceKind::HelmReleases => "helmreleases.helm.toolkit.fluxcd.io",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "kustomization" | "kustomizations" | "ks" => Some(ResourceKind::Kustomizations),
            "helmrelease" | "helmreleases" | "hr" => Some(ResourceKind::HelmReleases),
            _ => None,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Kustomizations => write!(f, "kustomizations"),
            ResourceKind::HelmReleases => write!(f, "helmreleases"),
        }
    }
}
