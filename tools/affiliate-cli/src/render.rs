//! Terminal presentation of products.
//!
//! One set of renderers serves narrow and wide terminals; the caller picks the
//! [`Layout`].

use affiliate_catalog::prelude::{CategoryFilter, Product};
use console::style;

/// Terminals narrower than this get the compact layout.
pub const COMPACT_WIDTH: usize = 80;

/// Presentation density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Compact,
    Full,
}

impl Layout {
    /// Pick a layout from the terminal width. Unknown width (0) means `Full`.
    pub fn from_width(width: usize) -> Self {
        if width > 0 && width < COMPACT_WIDTH {
            Layout::Compact
        } else {
            Layout::Full
        }
    }

    /// Resolve explicit flags, falling back to the terminal width.
    pub fn choose(compact: bool, full: bool, width: usize) -> Self {
        match (compact, full) {
            (true, _) => Layout::Compact,
            (false, true) => Layout::Full,
            (false, false) => Self::from_width(width),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Compact => "compact",
            Layout::Full => "full",
        }
    }

    fn description_limit(&self) -> usize {
        match self {
            Layout::Compact => 40,
            Layout::Full => 120,
        }
    }
}

/// Cut `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

fn id_label(product: &Product) -> String {
    product
        .id
        .map(|id| format!("#{}", id))
        .unwrap_or_else(|| "#?".to_string())
}

/// Category chips with the active one highlighted.
pub fn category_chips(categories: &[&str], active: &CategoryFilter) -> String {
    categories
        .iter()
        .map(|label| {
            if *label == active.label() {
                style(format!("[{}]", label)).cyan().bold().to_string()
            } else {
                format!(" {} ", label)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The featured product block shown above the grid.
pub fn hero(product: &Product, layout: Layout) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {}",
        style("★").yellow(),
        style(&product.display_title).bold()
    )];
    match layout {
        Layout::Compact => {
            lines.push(format!("  {} · {}", product.display_price, product.platform));
        }
        Layout::Full => {
            lines.push(format!("  {}", product.short_description));
            lines.push(format!(
                "  {}  {}  {}",
                style(&product.display_price).green(),
                product.platform,
                style(&product.affiliate_link).underlined()
            ));
        }
    }
    lines
}

/// One grid entry.
pub fn card(product: &Product, layout: Layout) -> String {
    let id = style(id_label(product)).dim();
    match layout {
        Layout::Compact => format!(
            "{} {} {}",
            id,
            truncate(&product.display_title, 32),
            style(&product.display_price).green()
        ),
        Layout::Full => format!(
            "{} {} {} {} {}",
            id,
            style(&product.display_title).bold(),
            style(&product.display_price).green(),
            style(format!("({} · {})", product.platform, product.category)).dim(),
            truncate(&product.short_description, layout.description_limit())
        ),
    }
}

/// Product detail as `(label, value)` rows.
pub fn detail(product: &Product, layout: Layout) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Título", product.display_title.clone()),
        ("Preço", product.display_price.clone()),
        ("Plataforma", product.platform.clone()),
    ];
    match layout {
        Layout::Compact => {
            rows.push((
                "Descrição",
                truncate(&product.short_description, layout.description_limit()),
            ));
        }
        Layout::Full => {
            rows.push(("Categoria", product.category.clone()));
            rows.push(("Descrição", product.short_description.clone()));
            rows.push(("Imagem", product.image_url.clone()));
            rows.push(("Slug", product.custom_slug.clone()));
        }
    }
    rows.push(("Link", product.affiliate_link.clone()));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use affiliate_catalog::prelude::{ProductDraft, ProductId};

    fn sample() -> Product {
        Product::new(
            ProductId::new(4),
            ProductDraft::new("Fone Bluetooth")
                .with_description("Cancelamento de ruído ativo com bateria de 30 horas")
                .with_price("R$ 199,90")
                .with_platform("Amazon")
                .with_category("Tech")
                .with_affiliate_link("https://amzn.to/fone"),
        )
    }

    #[test]
    fn test_layout_from_width() {
        assert_eq!(Layout::from_width(60), Layout::Compact);
        assert_eq!(Layout::from_width(120), Layout::Full);
        assert_eq!(Layout::from_width(0), Layout::Full);
    }

    #[test]
    fn test_layout_flags_win_over_width() {
        assert_eq!(Layout::choose(true, false, 200), Layout::Compact);
        assert_eq!(Layout::choose(false, true, 40), Layout::Full);
        assert_eq!(Layout::choose(false, false, 40), Layout::Compact);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("curto", 10), "curto");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("ação rápida", 4), "açã…");
    }

    #[test]
    fn test_detail_rows_by_layout() {
        let product = sample();
        let compact = detail(&product, Layout::Compact);
        let full = detail(&product, Layout::Full);

        assert!(compact.iter().all(|(label, _)| *label != "Slug"));
        assert!(full.iter().any(|(label, _)| *label == "Categoria"));
        assert_eq!(full.last().unwrap().1, "https://amzn.to/fone");
        assert_eq!(compact.last().unwrap().1, "https://amzn.to/fone");
    }

    #[test]
    fn test_card_mentions_title_and_price() {
        let product = sample();
        let line = console::strip_ansi_codes(&card(&product, Layout::Full)).to_string();
        assert!(line.contains("#4"));
        assert!(line.contains("Fone Bluetooth"));
        assert!(line.contains("R$ 199,90"));
    }
}
