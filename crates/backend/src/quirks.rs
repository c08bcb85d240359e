//! Compatibility quirks of the legacy demo surface.
//!
//! The demo historically shipped two API surfaces with deliberately
//! divergent behavior. The canonical semantics are the default here; each
//! flag re-enables one divergence of the legacy network boundary so parity
//! tests can pin both sides.

/// Toggles reproducing the legacy demo surface.
///
/// All flags off is the canonical behavior. [`Quirks::legacy_demo`] turns
/// every flag on, matching the legacy network-boundary surface byte for
/// byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Quirks {
    /// Add-to-cart always appends a new line instead of incrementing an
    /// existing `(product, size)` line.
    pub always_append_lines: bool,
    /// Quantity updates keep lines whose quantity is zero or negative
    /// instead of dropping them.
    pub keep_nonpositive_quantities: bool,
    /// Catalog category filter returns the opposite category for
    /// `men`/`women` queries.
    pub invert_category_filter: bool,
    /// Price sorting compares the decimal's string rendering instead of its
    /// numeric value.
    pub lexicographic_price_sort: bool,
    /// Cart reads for `user1` resolve to `user2`'s cart and vice versa;
    /// mutations are unaffected.
    pub swap_cart_identities: bool,
    /// The credential pair `(user1, user@2)` logs in as `user1` even though
    /// it matches no fixture record.
    pub login_backdoor: bool,
}

impl Quirks {
    /// The canonical behavior: every quirk disabled.
    #[must_use]
    pub const fn canonical() -> Self {
        Self {
            always_append_lines: false,
            keep_nonpositive_quantities: false,
            invert_category_filter: false,
            lexicographic_price_sort: false,
            swap_cart_identities: false,
            login_backdoor: false,
        }
    }

    /// Full parity with the legacy demo surface: every quirk enabled.
    #[must_use]
    pub const fn legacy_demo() -> Self {
        Self {
            always_append_lines: true,
            keep_nonpositive_quantities: true,
            invert_category_filter: true,
            lexicographic_price_sort: true,
            swap_cart_identities: true,
            login_backdoor: true,
        }
    }
}

impl std::str::FromStr for Quirks {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "canonical" => Ok(Self::canonical()),
            "legacy-demo" => Ok(Self::legacy_demo()),
            _ => Err(format!("invalid compat profile: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(Quirks::default(), Quirks::canonical());
    }

    #[test]
    fn test_profiles_parse_from_str() {
        assert_eq!("canonical".parse::<Quirks>(), Ok(Quirks::canonical()));
        assert_eq!("legacy-demo".parse::<Quirks>(), Ok(Quirks::legacy_demo()));
        assert!("strict".parse::<Quirks>().is_err());
    }

    #[test]
    fn test_legacy_demo_enables_every_flag() {
        let quirks = Quirks::legacy_demo();
        assert!(quirks.always_append_lines);
        assert!(quirks.keep_nonpositive_quantities);
        assert!(quirks.invert_category_filter);
        assert!(quirks.lexicographic_price_sort);
        assert!(quirks.swap_cart_identities);
        assert!(quirks.login_backdoor);
    }
}
