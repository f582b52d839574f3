//! Responsive breakpoints shared by the stylesheet build.
//!
//! Custom properties cannot be used inside `@media` preludes, so the CSS build
//! substitutes `var(--breakpoint-*)` there with these literal values.

/// Breakpoint values, mobile-first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
    pub xxl: &'static str,

    // Legacy names still referenced by older component styles.
    pub mobile: &'static str,
    pub tablet: &'static str,
    pub small_desktop: &'static str,
    pub desktop: &'static str,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: "0",
            sm: "576px",
            md: "768px",
            lg: "992px",
            xl: "1200px",
            xxl: "1400px",
            mobile: "480px",
            tablet: "768px",
            small_desktop: "900px",
            desktop: "1024px",
        }
    }
}

impl Breakpoints {
    /// Variable name to value pairs.
    ///
    /// Longer names come before their prefixes (`--breakpoint-xxl` before
    /// `--breakpoint-xl`) so callers can substitute in order.
    pub fn variables(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("--breakpoint-small-desktop", self.small_desktop),
            ("--breakpoint-desktop", self.desktop),
            ("--breakpoint-mobile", self.mobile),
            ("--breakpoint-tablet", self.tablet),
            ("--breakpoint-xxl", self.xxl),
            ("--breakpoint-xl", self.xl),
            ("--breakpoint-xs", self.xs),
            ("--breakpoint-sm", self.sm),
            ("--breakpoint-md", self.md),
            ("--breakpoint-lg", self.lg),
        ]
    }
}
