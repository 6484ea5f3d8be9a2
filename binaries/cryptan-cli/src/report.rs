//! Text reports

use cryptan_vigenere::friedman::best_score;
use cryptan_vigenere::{Analysis, KasiskiExamination, KeyLengthScore};

/// First `limit` characters of `text`, with an ellipsis when cut.
/// A limit of 0 shows everything.
pub fn preview(text: &str, limit: usize) -> String {
    if limit == 0 || text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit).collect();
    cut.push_str("...");
    cut
}

pub fn kasiski_report(examination: &KasiskiExamination) -> String {
    let mut lines = vec![
        "  KASISKI EXAMINATION".to_string(),
        "  ===================".to_string(),
        String::new(),
        format!("  Word length: {}", examination.min_word_length),
    ];

    if examination.words.is_empty() {
        lines.push("  No recurring word found.".to_string());
    } else {
        lines.push(String::new());
        lines.push(format!("  {:<12} {:>5} {:>5}  DISTANCES", "WORD", "COUNT", "GCD"));
        for word in &examination.words {
            let distances: Vec<String> = word.distances.iter().map(|d| d.to_string()).collect();
            lines.push(format!(
                "  {:<12} {:>5} {:>5}  {}",
                word.word,
                word.count,
                word.gcd,
                distances.join(", ")
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("  Key length: {}", examination.key_length));
    lines.join("\n")
}

pub fn friedman_report(scores: &[KeyLengthScore], key_length: usize, baseline: f64) -> String {
    let mut lines = vec![
        "  FRIEDMAN TEST".to_string(),
        "  =============".to_string(),
        String::new(),
        format!("  Baseline IC: {:.4}", baseline),
    ];

    if scores.is_empty() {
        lines.push("  No letters to score.".to_string());
    } else {
        let best = best_score(scores).map(|s| s.key_length);
        lines.push(String::new());
        lines.push(format!("  {:>6} {:>10} {:>10}", "LENGTH", "AVG IC", "DIFF"));
        for score in scores {
            let marker = if Some(score.key_length) == best { " <" } else { "" };
            lines.push(format!(
                "  {:>6} {:>10.5} {:>10.5}{}",
                score.key_length, score.average_ic, score.difference, marker
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("  Key length: {}", key_length));
    lines.join("\n")
}

pub fn analysis_report(analysis: &Analysis, preview_chars: usize) -> String {
    let source = format!("{:?}", analysis.key_length_source).to_uppercase();

    [
        "  VIGENERE CRYPTANALYSIS".to_string(),
        "  ======================".to_string(),
        String::new(),
        format!("  Kasiski estimate:  {}", analysis.kasiski.key_length),
        format!("  Friedman estimate: {}", analysis.friedman_key_length),
        format!("  Key length:        {} ({})", analysis.key_length, source),
        format!("  Key:               {}", analysis.key),
        String::new(),
        "  PLAINTEXT".to_string(),
        format!("  {}", preview(&analysis.plaintext, preview_chars)),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptan_vigenere::{Cryptanalyst, NullSink};

    #[test]
    fn test_preview() {
        assert_eq!(preview("ABCDEF", 0), "ABCDEF");
        assert_eq!(preview("ABCDEF", 6), "ABCDEF");
        assert_eq!(preview("ABCDEF", 3), "ABC...");
        assert_eq!(preview("ÉÉÉÉ", 2), "ÉÉ...");
    }

    #[test]
    fn test_analysis_report() {
        let analysis = Cryptanalyst::default().analyze("LXFOPVEFRNHR", &NullSink);
        let report = analysis_report(&analysis, 0);
        assert!(report.contains("(FRIEDMAN)"));
        assert!(report.contains(&format!("Key:               {}", analysis.key)));
    }

    #[test]
    fn test_empty_reports() {
        let report = friedman_report(&[], 1, 0.067);
        assert!(report.contains("No letters to score."));
        assert!(report.ends_with("Key length: 1"));
    }
}
