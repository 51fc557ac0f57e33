use anyhow::Result;
use scheduler_core::date::parse_compact;

use super::today;

pub fn run(now: Option<String>, date: String, repeat: String) -> Result<()> {
    let now = match now {
        Some(text) => parse_compact(&text)?,
        None => today(),
    };

    println!("{}", scheduler_core::next_date(now, &date, &repeat)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_date_with_explicit_now() {
        run(Some("20240126".into()), "20240113".into(), "d 7".into()).unwrap();
        run(None, "20240229".into(), "y".into()).unwrap();
    }

    #[test]
    fn next_date_errors() {
        assert!(run(Some("2024".into()), "20240113".into(), "d 7".into()).is_err());
        assert!(run(Some("20240126".into()), "20240113".into(), "d 401".into()).is_err());
        assert!(run(Some("20240126".into()), "20240113".into(), String::new()).is_err());
    }
}
