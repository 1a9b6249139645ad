use healthlens_engine::SectionRoute;
use healthlens_types::Dialect;

/// Listing of split sections for `healthlens inspect`.
pub fn render(dialect: Dialect, routes: &[SectionRoute]) -> String {
    let mut out = format!("Dialect: {}\nSections: {}\n", dialect, routes.len());
    if routes.is_empty() {
        return out;
    }

    let id_w = routes
        .iter()
        .map(|r| r.section.identifier.chars().count())
        .chain(["Identifier".len()])
        .max()
        .unwrap_or(0);

    out.push('\n');
    out.push_str(&format!(
        "{:>3}  {:<id_w$}  {:>5}  {}\n",
        "#", "Identifier", "Lines", "Category"
    ));
    for route in routes {
        out.push_str(&format!(
            "{:>3}  {:<id_w$}  {:>5}  {}\n",
            route.section.order,
            route.section.identifier,
            route.section.line_count(),
            route.category
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthlens_types::RawSection;

    #[test]
    fn test_listing() {
        let routes = vec![
            SectionRoute {
                section: RawSection::new("sps-status", "a UP\nb DOWN", 0),
                category: "SPS Status".to_string(),
            },
            SectionRoute {
                section: RawSection::new("ntp", "", 1),
                category: "ntp".to_string(),
            },
        ];
        insta::assert_snapshot!(render(Dialect::Banner, &routes), @r"
        Dialect: banner
        Sections: 2

          #  Identifier  Lines  Category
          0  sps-status      2  SPS Status
          1  ntp             0  ntp
        ");
    }

    #[test]
    fn test_no_sections() {
        assert_eq!(
            render(Dialect::Banner, &[]),
            "Dialect: banner\nSections: 0\n"
        );
    }
}
