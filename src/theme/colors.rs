//! Color constants of the card palette.
//!
//! Rose on snow, with a slate voucher.

// === SNOW (Backgrounds) ===
pub const SNOW: &str = "#fffafa";
pub const WHITE: &str = "#ffffff";
pub const ROSE_BORDER: &str = "#ffe4e6";

// === ROSE (Actions, Highlights) ===
pub const ROSE: &str = "#f43f5e";
pub const ROSE_DARK: &str = "#e11d48";
pub const ROSE_SOFT: &str = "#fb7185";
pub const ROSE_PALE: &str = "#fda4af";
pub const ROSE_MUTED: &str = "#fecdd3";

// === SLATE (Text, Voucher) ===
pub const SLATE_900: &str = "#0f172a";
pub const SLATE_800: &str = "#1e293b";
pub const SLATE_600: &str = "#475569";
pub const SLATE_500: &str = "#64748b";
pub const SLATE_400: &str = "#94a3b8";
pub const SLATE_100: &str = "#f1f5f9";

/// CSS custom properties for the palette, one `--name: value;` per color.
pub fn root_variables() -> String {
    let palette = [
        ("snow", SNOW),
        ("white", WHITE),
        ("rose-border", ROSE_BORDER),
        ("rose", ROSE),
        ("rose-dark", ROSE_DARK),
        ("rose-soft", ROSE_SOFT),
        ("rose-pale", ROSE_PALE),
        ("rose-muted", ROSE_MUTED),
        ("slate-900", SLATE_900),
        ("slate-800", SLATE_800),
        ("slate-600", SLATE_600),
        ("slate-500", SLATE_500),
        ("slate-400", SLATE_400),
        ("slate-100", SLATE_100),
    ];
    let body: String = palette
        .iter()
        .map(|(name, value)| format!("  --{name}: {value};\n"))
        .collect();
    format!(":root {{\n{body}}}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_variables_lists_palette() {
        let css = root_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("  --rose: #f43f5e;"));
        assert!(css.contains("  --slate-900: #0f172a;"));
        assert_eq!(css.matches("--").count(), 14);
    }
}
