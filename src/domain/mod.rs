pub mod user;
pub mod product;

pub use user::*;
pub use product::*;

/// Case-insensitive equality using Unicode lowercase folding.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::eq_ignore_case;

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("Electronics", "ELECTRONICS"));
        assert!(eq_ignore_case("ÄPFEL", "äpfel"));
        assert!(!eq_ignore_case("Kitchen", "Kitchens"));
        assert!(eq_ignore_case("", ""));
    }
}
