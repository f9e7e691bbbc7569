//! Gender module - the only demographic the rubric branches on

/// Biological sex as recorded on the health check form
///
/// Selects the waist-circumference threshold. The program's data
/// interchange format codes male as `1` and female as `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Code 1
    Male,

    /// Code 2
    Female,
}

impl Gender {
    /// Get the gender name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Parse a gender from its name, initial, or program code
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "1" => Some(Gender::Male),
            "female" | "f" | "2" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_codes() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse("Female"), Some(Gender::Female));
        assert_eq!(Gender::parse("M"), Some(Gender::Male));
        assert_eq!(Gender::parse("1"), Some(Gender::Male));
        assert_eq!(Gender::parse(" 2 "), Some(Gender::Female));
        assert_eq!(Gender::parse("3"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Gender::Female.to_string(), "female");
    }
}
