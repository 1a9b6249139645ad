use healthlens_engine::{BANNER_CATALOG, CLUSTER_CATALOG};
use healthlens_types::Dialect;

fn render_banner(out: &mut String) {
    out.push_str("banner dialect: one record per section, first matching rule wins\n");
    let label_w = BANNER_CATALOG
        .iter()
        .map(|rule| rule.label().chars().count())
        .max()
        .unwrap_or(0);
    for (i, rule) in BANNER_CATALOG.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<label_w$}  {}\n",
            i + 1,
            rule.label(),
            rule.matches_when
        ));
    }
}

fn render_cluster(out: &mut String) {
    out.push_str("node dialect: every check runs over the whole dump\n");
    let label_w = CLUSTER_CATALOG
        .iter()
        .map(|check| check.category.chars().count())
        .max()
        .unwrap_or(0);
    for (i, check) in CLUSTER_CATALOG.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<label_w$}  {}\n",
            i + 1,
            check.category,
            check.evidence
        ));
    }
}

/// The closed rule catalogs, for one dialect or both.
pub fn render(dialect: Option<Dialect>) -> String {
    let mut out = String::new();
    let dialects: &[Dialect] = match dialect {
        Some(Dialect::Banner) => &[Dialect::Banner],
        Some(Dialect::NodeBoundary) => &[Dialect::NodeBoundary],
        None => &Dialect::ALL,
    };

    for (i, dialect) in dialects.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match dialect {
            Dialect::Banner => render_banner(&mut out),
            Dialect::NodeBoundary => render_cluster(&mut out),
        }
    }
    out
}
