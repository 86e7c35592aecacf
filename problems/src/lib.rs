//! Problem codes for the template compiler.
//!
//! The enumeration is generated by the build script from
//! `resources/problem-codes.csv`.

include!(concat!(env!("OUT_DIR"), "/problems.rs"));

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::Problem;

    #[test]
    fn code_when_parse_problem_then_stable_code() {
        assert_eq!("P0001", Problem::GeneratedSourceParse.code());
        assert_eq!("P0002", Problem::GeneratedSourceFormat.code());
    }

    #[test]
    fn display_when_problem_then_includes_code_and_message() {
        let text = Problem::GeneratedSourceFormat.to_string();
        assert!(text.starts_with("P0002: "));
        assert!(text.contains("formatted"));
    }
}
