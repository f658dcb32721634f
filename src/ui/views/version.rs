use crate::domain::value_objects::ResourceKind;

pub fn render_version(version: &str, kubectl: Option<&str>) -> String {
    let mut out = format!("fluxtree v{}\n", version);
    out.push_str(&format!(
        "Resource kinds: {}, {}\n",
        ResourceKind::Kustomizations,
        ResourceKind::HelmReleases
    ));
    match kubectl {
        Some(binary) => out.push_str(&format!("kubectl: {}\n", binary)),
        None => out.push_str("kubectl: not found\n"),
    }
    out
}
