pub const GIT_DESCRIBE: &str = env!("GIT_DESCRIBE");
pub const GIT_HASH: &str = env!("GIT_HASH");

pub fn report(name: &str) -> String {
    format!(
        "{{\n  \"name\": \"{}\",\n  \"git_describe\": \"{}\",\n  \"git_hash\": \"{}\"\n}}",
        name, GIT_DESCRIBE, GIT_HASH
    )
}

pub fn print_report(name: &str) {
    println!("{}", report(name));
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn report_test() {
        let r = report("poisson");
        assert!(r.starts_with('{'));
        assert!(r.contains("\"name\": \"poisson\""));
        assert!(r.contains(GIT_HASH));
        assert!(!GIT_DESCRIBE.is_empty());
    }
}
