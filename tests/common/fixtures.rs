//! Status snapshots shared by CLI tests.

/// Four records: A is healthy with B and C under it, D under B.
/// C is waiting on a dependency, D failed outright.
pub const REFERENCE_RECORDS: &str = r#"[
  {"name": "A", "ready": "True", "message": "Applied revision: main@sha1:1a2b", "dependencies": ""},
  {"name": "B", "ready": "True", "message": "Applied revision: main@sha1:1a2b", "dependencies": "A"},
  {"name": "C", "ready": "False", "message": "dependency 'flux-system/A' is not ready", "dependencies": "A"},
  {"name": "D", "ready": "False", "message": "kustomize build failed: missing resource", "dependencies": "B"}
]
"#;

/// Rendered tree for `REFERENCE_RECORDS` without colour.
pub const REFERENCE_TREE: &str = "● A\n├── ● B\n│   └── ✗ D\n└── ◌ C\n";

/// `kubectl get kustomizations -o json` shaped output.
pub const KUBECTL_LIST: &str = r#"{
  "apiVersion": "v1",
  "kind": "List",
  "items": [
    {
      "apiVersion": "kustomize.toolkit.fluxcd.io/v1",
      "kind": "Kustomization",
      "metadata": {"name": "infrastructure", "namespace": "flux-system"},
      "spec": {},
      "status": {"conditions": [{"type": "Ready", "status": "True", "message": "Applied"}]}
    },
    {
      "apiVersion": "kustomize.toolkit.fluxcd.io/v1",
      "kind": "Kustomization",
      "metadata": {"name": "apps", "namespace": "flux-system"},
      "spec": {"dependsOn": [{"name": "infrastructure"}]},
      "status": {"conditions": [{"type": "Ready", "status": "Unknown", "message": "Reconciliation in progress"}]}
    }
  ]
}
"#;

/// Two nodes that depend on each other.
pub const CYCLIC_RECORDS: &str = r#"[
  {"name": "root", "ready": "True", "dependencies": ""},
  {"name": "a", "ready": "True", "dependencies": "b"},
  {"name": "b", "ready": "True", "dependencies": "a"}
]
"#;

/// `apps` depends on a source that is not part of the snapshot.
pub const DANGLING_RECORDS: &str = r#"[
  {"name": "infra", "ready": "True", "dependencies": ""},
  {"name": "apps", "ready": "True", "dependencies": "sources"},
  {"name": "monitoring", "ready": "False", "message": "health check failed", "dependencies": "apps"}
]
"#;
